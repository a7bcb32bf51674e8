// Page replacement accounting over file operations

pub mod common;
pub mod config;
pub mod paging;
pub mod session;
pub mod storage;

// Re-export key items for convenient access
pub use common::types::{AccessEvent, AccessStatus, OperationKind, PageId};
pub use config::{EngineConfig, SessionConfig};
pub use paging::{derive_page_id, EngineError, EventRecorder, LruEngine, Statistics};
pub use session::{Session, SessionError};
pub use storage::{CredentialStore, FlatFileCredentials, MemoryCredentials, Workspace, WorkspaceError};
