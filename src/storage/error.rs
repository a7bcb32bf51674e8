use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("File '{0}' does not exist")]
    NotFound(String),
    #[error("File '{0}' already exists")]
    AlreadyExists(String),
    #[error("Invalid file name: '{0}'")]
    InvalidFileName(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Credentials file not found at {0}")]
    MissingStore(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}
