use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use log::debug;

use crate::storage::error::CredentialError;

/// Checks a principal's secret
pub trait CredentialStore {
    fn verify(&self, principal: &str, secret: &str) -> Result<bool, CredentialError>;
}

/// Credentials kept in a flat text file, one `user password` pair per line.
///
/// Lines that do not hold exactly two whitespace-separated fields are skipped.
#[derive(Debug, Clone)]
pub struct FlatFileCredentials {
    path: PathBuf,
}

impl FlatFileCredentials {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FlatFileCredentials {
    fn verify(&self, principal: &str, secret: &str) -> Result<bool, CredentialError> {
        if !self.path.exists() {
            return Err(CredentialError::MissingStore(self.path.display().to_string()));
        }

        let content = fs::read_to_string(&self.path)?;
        for line in content.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if let [user, password] = fields.as_slice() {
                if *user == principal && *password == secret {
                    return Ok(true);
                }
            } else if !fields.is_empty() {
                debug!("Skipping malformed credentials line");
            }
        }

        Ok(false)
    }
}

/// In-memory credential store
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentials {
    users: HashMap<String, String>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, principal: &str, secret: &str) -> Self {
        self.users.insert(principal.to_string(), secret.to_string());
        self
    }
}

impl CredentialStore for MemoryCredentials {
    fn verify(&self, principal: &str, secret: &str) -> Result<bool, CredentialError> {
        Ok(self.users.get(principal).is_some_and(|s| s == secret))
    }
}
