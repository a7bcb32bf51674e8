use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::storage::error::WorkspaceError;

/// A principal's private directory and the raw file operations on it.
///
/// File names are single path components, so a workspace never reaches
/// outside its own directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Open the workspace for `principal` under `data_dir`, creating it if needed
    pub fn open(data_dir: impl AsRef<Path>, principal: &str) -> Result<Self, WorkspaceError> {
        let principal = validate_name(principal)?;
        let root = data_dir.as_ref().join(principal);
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `filename` inside the workspace
    pub fn path_of(&self, filename: &str) -> Result<PathBuf, WorkspaceError> {
        Ok(self.root.join(validate_name(filename)?))
    }

    /// Create an empty file; fails if it already exists
    pub fn create(&self, filename: &str) -> Result<(), WorkspaceError> {
        let path = self.path_of(filename)?;
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(WorkspaceError::AlreadyExists(filename.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Append `content` as a new line
    pub fn append(&self, filename: &str, content: &str) -> Result<(), WorkspaceError> {
        let path = self.existing(filename)?;
        let mut file = OpenOptions::new().append(true).open(path)?;
        writeln!(file, "{}", content)?;
        Ok(())
    }

    /// Replace the whole file with `content` followed by a newline
    pub fn overwrite(&self, filename: &str, content: &str) -> Result<(), WorkspaceError> {
        let path = self.existing(filename)?;
        let mut file = File::create(path)?;
        writeln!(file, "{}", content)?;
        Ok(())
    }

    pub fn read(&self, filename: &str) -> Result<String, WorkspaceError> {
        let path = self.existing(filename)?;
        Ok(fs::read_to_string(path)?)
    }

    /// Lines containing `keyword`, trimmed
    pub fn search(&self, filename: &str, keyword: &str) -> Result<Vec<String>, WorkspaceError> {
        let content = self.read(filename)?;
        Ok(content
            .lines()
            .filter(|line| line.contains(keyword))
            .map(|line| line.trim().to_string())
            .collect())
    }

    pub fn delete(&self, filename: &str) -> Result<(), WorkspaceError> {
        let path = self.existing(filename)?;
        fs::remove_file(path)?;
        Ok(())
    }

    pub fn exists(&self, filename: &str) -> bool {
        self.path_of(filename).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Sorted names of the files in the workspace
    pub fn list(&self) -> Result<Vec<String>, WorkspaceError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn existing(&self, filename: &str) -> Result<PathBuf, WorkspaceError> {
        let path = self.path_of(filename)?;
        if !path.is_file() {
            return Err(WorkspaceError::NotFound(filename.to_string()));
        }
        Ok(path)
    }
}

fn validate_name(name: &str) -> Result<&str, WorkspaceError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);

    if invalid {
        return Err(WorkspaceError::InvalidFileName(name.to_string()));
    }
    Ok(name)
}
