// Durable page access log
//
// Every access is appended as one text line. The file is opened and closed
// per write so an outside reader always sees whole lines. Writes are
// best-effort: a failing log never stops the simulation.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use log::{debug, warn};
use thiserror::Error;

use crate::common::types::AccessEvent;

#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("I/O error on {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Append a single line to the file at `path`, creating it if needed
pub fn append_line(path: &Path, line: &str) -> Result<(), RecorderError> {
    let to_error = |source| RecorderError::IoError { path: path.to_path_buf(), source };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)?;

    writeln!(file, "{}", line).map_err(to_error)?;
    file.flush().map_err(to_error)
}

/// Truncate the file at `path` to zero length, creating it if needed
pub fn truncate(path: &Path) -> Result<(), RecorderError> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| RecorderError::IoError { path: path.to_path_buf(), source })
}

/// Writes access events to the page log under the best-effort policy
#[derive(Debug, Clone)]
pub struct EventRecorder {
    log_path: PathBuf,
    failed_writes: u64,
}

impl EventRecorder {
    pub fn new(log_path: impl AsRef<Path>) -> Self {
        Self {
            log_path: log_path.as_ref().to_path_buf(),
            failed_writes: 0,
        }
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Number of log writes or truncations that failed and were dropped
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes
    }

    /// Best-effort log write: failures are reported and swallowed
    pub fn append(&mut self, event: &AccessEvent) {
        match append_line(&self.log_path, &event.log_line()) {
            Ok(()) => debug!("Logged access to page {} ({})", event.page_id, event.filename),
            Err(e) => {
                self.failed_writes += 1;
                warn!("Dropping page log entry for {}: {}", event.filename, e);
            }
        }
    }

    /// Best-effort truncation of the page log
    pub fn clear(&mut self) {
        if let Err(e) = truncate(&self.log_path) {
            self.failed_writes += 1;
            warn!("Could not truncate page log: {}", e);
        }
    }
}
