use std::fmt;
use serde::{Deserialize, Serialize};

use crate::common::types::{AccessEvent, PageId};

/// Point-in-time view of the engine's accounting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: u64,
    pub hits: u64,
    pub faults: u64,
    /// Percentage of hits, `0.0` when nothing was processed
    pub hit_ratio: f64,
    pub capacity: usize,
    /// Resident pages, least recently used first
    pub frames: Vec<PageId>,
    /// Most recent accesses, oldest first
    pub recent_history: Vec<AccessEvent>,
}

impl Statistics {
    pub fn new(
        hits: u64,
        faults: u64,
        capacity: usize,
        frames: Vec<PageId>,
        recent_history: Vec<AccessEvent>,
    ) -> Self {
        let total = hits + faults;
        let hit_ratio = if total > 0 {
            hits as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total,
            hits,
            faults,
            hit_ratio,
            capacity,
            frames,
            recent_history,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Page Fault Analysis =====")?;
        writeln!(f, "Total page references: {}", self.total)?;
        writeln!(f, "Page hits: {}", self.hits)?;
        writeln!(f, "Page faults: {}", self.faults)?;
        if self.total > 0 {
            writeln!(f, "Hit ratio: {:.2}%", self.hit_ratio)?;
        }

        let frames: Vec<String> = self.frames.iter().map(|id| id.to_string()).collect();
        writeln!(f)?;
        writeln!(f, "Current pages in memory ({}/{}): {}", self.frames.len(), self.capacity, frames.join(" "))?;

        writeln!(f)?;
        writeln!(f, "Recent page references:")?;
        writeln!(f, "{:<10}{:<15}{:<20}{:<10}", "Page ID", "Operation", "Filename", "Status")?;
        writeln!(f, "{}", "-".repeat(55))?;
        for event in &self.recent_history {
            writeln!(
                f,
                "{:<10}{:<15}{:<20}{:<10}",
                event.page_id,
                event.operation.as_str(),
                event.filename,
                event.status.short_label()
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::{AccessStatus, OperationKind};

    #[test]
    fn test_ratio_without_accesses() {
        let stats = Statistics::new(0, 0, 4, Vec::new(), Vec::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.hit_ratio, 0.0);
        assert!(!stats.to_string().contains("Hit ratio"));
    }

    #[test]
    fn test_ratio() {
        let stats = Statistics::new(1, 3, 4, vec![1, 2, 3], Vec::new());
        assert_eq!(stats.total, 4);
        assert!((stats.hit_ratio - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_rendering() {
        let event = AccessEvent::new(42, OperationKind::Search, "notes.txt", AccessStatus::Fault);
        let stats = Statistics::new(2, 1, 4, vec![42, 7], vec![event]);
        let report = stats.to_string();

        assert!(report.contains("Total page references: 3"));
        assert!(report.contains("Hit ratio: 66.67%"));
        assert!(report.contains("Current pages in memory (2/4): 42 7"));
        assert!(report.contains("SEARCH"));
        assert!(report.lines().last().unwrap().trim_end().ends_with("Fault"));
    }
}
