use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Synthetic page identifier, always in `1..=PAGE_ID_SPACE`
pub type PageId = u32;

/// Number of distinct page identifiers the mapper can produce
pub const PAGE_ID_SPACE: u32 = 100;

/// Number of resident frames when nothing else is configured
pub const DEFAULT_FRAME_CAPACITY: usize = 4;

/// Number of recent accesses reported by a statistics snapshot
pub const HISTORY_WINDOW: usize = 10;

/// Timestamp layout shared by every durable log line
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// File operations that take part in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    Create,
    Write,
    Modify,
    Read,
    Search,
    Delete,
}

impl OperationKind {
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Create,
        OperationKind::Write,
        OperationKind::Modify,
        OperationKind::Read,
        OperationKind::Search,
        OperationKind::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Create => "CREATE",
            OperationKind::Write => "WRITE",
            OperationKind::Modify => "MODIFY",
            OperationKind::Read => "READ",
            OperationKind::Search => "SEARCH",
            OperationKind::Delete => "DELETE",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown operation kind: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for OperationKind {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == upper)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

/// Outcome of a single access against the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessStatus {
    Hit,
    Fault,
}

impl AccessStatus {
    pub fn is_hit(&self) -> bool {
        matches!(self, AccessStatus::Hit)
    }

    /// Literal written to the durable page log.
    /// Historical logs spell a fault as "Page Fault", keep it that way.
    pub fn log_label(&self) -> &'static str {
        match self {
            AccessStatus::Hit => "Hit",
            AccessStatus::Fault => "Page Fault",
        }
    }

    /// Short label used in on-screen reports
    pub fn short_label(&self) -> &'static str {
        match self {
            AccessStatus::Hit => "Hit",
            AccessStatus::Fault => "Fault",
        }
    }
}

/// One processed access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessEvent {
    pub page_id: PageId,
    pub operation: OperationKind,
    pub filename: String,
    pub status: AccessStatus,
    pub timestamp: DateTime<Local>,
}

impl AccessEvent {
    pub fn new(page_id: PageId, operation: OperationKind, filename: &str, status: AccessStatus) -> Self {
        Self {
            page_id,
            operation,
            filename: filename.to_string(),
            status,
            timestamp: Local::now(),
        }
    }

    /// Render the event in the durable log layout (without trailing newline)
    pub fn log_line(&self) -> String {
        format!(
            "{} | Operation: {} | File: {} | Page ID: {} | {}",
            self.timestamp.format(LOG_TIMESTAMP_FORMAT),
            self.operation,
            self.filename,
            self.page_id,
            self.status.log_label(),
        )
    }
}
