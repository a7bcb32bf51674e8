// A logged-in principal's session
//
// Performs file operations in the principal's workspace and reports every
// successful one to the LRU engine. Failed operations are never reported.

use std::path::PathBuf;
use chrono::Local;
use log::{info, warn};
use thiserror::Error;

use crate::common::types::{AccessEvent, OperationKind, LOG_TIMESTAMP_FORMAT};
use crate::config::SessionConfig;
use crate::paging::recorder::append_line;
use crate::paging::{EngineError, LruEngine, Statistics};
use crate::storage::{CredentialError, CredentialStore, Workspace, WorkspaceError};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Credential error: {0}")]
    CredentialError(#[from] CredentialError),
    #[error("Workspace error: {0}")]
    WorkspaceError(#[from] WorkspaceError),
    #[error("Engine error: {0}")]
    EngineError(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

pub struct Session {
    principal: String,
    workspace: Workspace,
    engine: LruEngine,
    operations_log: PathBuf,
}

impl Session {
    /// Authenticate `principal` and open its workspace and engine
    pub fn login<S: CredentialStore + ?Sized>(
        store: &S,
        config: &SessionConfig,
        principal: &str,
        secret: &str,
    ) -> Result<Self> {
        if !store.verify(principal, secret)? {
            warn!("Rejected login for {}", principal);
            return Err(SessionError::InvalidCredentials);
        }

        let session = Self::open(config, principal)?;
        info!("{} logged in", principal);
        Ok(session)
    }

    /// Open a session without authentication
    pub fn open(config: &SessionConfig, principal: &str) -> Result<Self> {
        let workspace = Workspace::open(&config.data_dir, principal)?;
        let engine = LruEngine::new(&config.engine_for(principal))?;

        Ok(Self {
            principal: principal.to_string(),
            workspace,
            engine,
            operations_log: config.operations_log.clone(),
        })
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn engine(&self) -> &LruEngine {
        &self.engine
    }

    pub fn create_file(&mut self, filename: &str) -> Result<AccessEvent> {
        self.workspace.create(filename)?;
        Ok(self.report(filename, OperationKind::Create))
    }

    pub fn write_file(&mut self, filename: &str, content: &str) -> Result<AccessEvent> {
        self.workspace.append(filename, content)?;
        Ok(self.report(filename, OperationKind::Write))
    }

    pub fn modify_file(&mut self, filename: &str, content: &str) -> Result<AccessEvent> {
        self.workspace.overwrite(filename, content)?;
        Ok(self.report(filename, OperationKind::Modify))
    }

    pub fn read_file(&mut self, filename: &str) -> Result<(String, AccessEvent)> {
        let content = self.workspace.read(filename)?;
        Ok((content, self.report(filename, OperationKind::Read)))
    }

    pub fn search_file(&mut self, filename: &str, keyword: &str) -> Result<(Vec<String>, AccessEvent)> {
        let matches = self.workspace.search(filename, keyword)?;
        Ok((matches, self.report(filename, OperationKind::Search)))
    }

    pub fn delete_file(&mut self, filename: &str) -> Result<AccessEvent> {
        self.workspace.delete(filename)?;
        Ok(self.report(filename, OperationKind::Delete))
    }

    pub fn statistics(&self) -> Statistics {
        self.engine.snapshot()
    }

    pub fn reset_statistics(&mut self) {
        self.engine.reset();
    }

    /// End the session; the engine state and page log are cleared
    pub fn logout(mut self) {
        self.engine.reset();
        info!("{} logged out", self.principal);
    }

    fn report(&mut self, filename: &str, operation: OperationKind) -> AccessEvent {
        let line = format!(
            "{} | User: {} | Operation: {} | File: {}",
            Local::now().format(LOG_TIMESTAMP_FORMAT),
            self.principal,
            operation,
            filename
        );
        if let Err(e) = append_line(&self.operations_log, &line) {
            warn!("Dropping operations journal entry: {}", e);
        }

        self.engine.process(filename, operation)
    }
}
