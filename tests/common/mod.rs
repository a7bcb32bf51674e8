#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use anyhow::Result;

use pagetrace::config::SessionConfig;
use pagetrace::{LruEngine, MemoryCredentials, Session};

pub const LOG_FILE: &str = "page_fault_log.txt";

// File names whose page ids are known to be distinct: 17, 6, 38, 84, 3
pub const A: &str = "A";
pub const B: &str = "B";
pub const C: &str = "C";
pub const D: &str = "D";
pub const E: &str = "E";

// Create an engine logging into a temporary directory
pub fn create_test_engine(capacity: usize) -> Result<(LruEngine, TempDir)> {
    let dir = tempfile::tempdir()?;
    let engine = LruEngine::with_capacity(capacity, dir.path().join(LOG_FILE))?;
    Ok((engine, dir))
}

// Session config with every path inside a temporary directory
pub fn create_test_config() -> Result<(SessionConfig, TempDir)> {
    let dir = tempfile::tempdir()?;
    Ok((SessionConfig::rooted_at(dir.path()), dir))
}

pub fn test_credentials() -> MemoryCredentials {
    MemoryCredentials::new()
        .with_user("alice", "wonderland")
        .with_user("bob", "builder")
}

// Log in as alice with a temporary config
pub fn create_test_session() -> Result<(Session, SessionConfig, TempDir)> {
    let (config, dir) = create_test_config()?;
    let session = Session::login(&test_credentials(), &config, "alice", "wonderland")?;
    Ok((session, config, dir))
}

pub fn log_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE)
}

// Lines of a log file, empty if it does not exist
pub fn read_log_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    Ok(fs::read_to_string(path)?.lines().map(str::to_string).collect())
}
