pub mod credentials;
pub mod error;
pub mod workspace;

pub use credentials::{CredentialStore, FlatFileCredentials, MemoryCredentials};
pub use error::{CredentialError, WorkspaceError};
pub use workspace::Workspace;
