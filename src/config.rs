use std::path::{Path, PathBuf};

use crate::common::types::{DEFAULT_FRAME_CAPACITY, HISTORY_WINDOW};
use crate::paging::EngineError;

pub const DEFAULT_PAGE_LOG: &str = "page_fault_log.txt";
pub const DEFAULT_OPERATIONS_LOG: &str = "file_operations_log.txt";
pub const DEFAULT_DATA_DIR: &str = "users_data";
pub const DEFAULT_USERS_FILE: &str = "users.txt";

/// Configuration for the LRU engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of resident frames, fixed for the engine's lifetime
    pub frame_capacity: usize,
    /// Number of accesses reported in a statistics snapshot
    pub history_window: usize,
    /// Durable page access log
    pub log_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_capacity: DEFAULT_FRAME_CAPACITY,
            history_window: HISTORY_WINDOW,
            log_path: PathBuf::from(DEFAULT_PAGE_LOG),
        }
    }
}

impl EngineConfig {
    pub fn with_log_path(log_path: impl AsRef<Path>) -> Self {
        Self {
            log_path: log_path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.frame_capacity == 0 {
            return Err(EngineError::InvalidCapacity(self.frame_capacity));
        }
        Ok(())
    }
}

/// Configuration for a principal's session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub engine: EngineConfig,
    /// Parent of all per-principal workspaces
    pub data_dir: PathBuf,
    /// Flat `user password` credentials file
    pub users_file: PathBuf,
    /// Journal of successful file operations
    pub operations_log: PathBuf,
    /// Give every principal its own page log instead of sharing one
    pub per_principal_logs: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            users_file: PathBuf::from(DEFAULT_USERS_FILE),
            operations_log: PathBuf::from(DEFAULT_OPERATIONS_LOG),
            per_principal_logs: false,
        }
    }
}

impl SessionConfig {
    /// Place every file the session touches under `root`
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            engine: EngineConfig::with_log_path(root.join(DEFAULT_PAGE_LOG)),
            data_dir: root.join(DEFAULT_DATA_DIR),
            users_file: root.join(DEFAULT_USERS_FILE),
            operations_log: root.join(DEFAULT_OPERATIONS_LOG),
            per_principal_logs: false,
        }
    }

    /// Engine configuration for `principal`, namespacing the page log when
    /// per-principal logs are enabled
    pub fn engine_for(&self, principal: &str) -> EngineConfig {
        let mut engine = self.engine.clone();
        if self.per_principal_logs {
            engine.log_path = principal_log_path(&self.engine.log_path, principal);
        }
        engine
    }
}

/// `dir/page_fault_log.txt` becomes `dir/page_fault_log_<principal>.txt`
pub fn principal_log_path(log_path: &Path, principal: &str) -> PathBuf {
    let stem = log_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page_fault_log".to_string());

    let file_name = match log_path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, principal, ext.to_string_lossy()),
        None => format!("{}_{}", stem, principal),
    };

    log_path.with_file_name(file_name)
}
