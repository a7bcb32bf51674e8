use std::path::Path;
use log::{debug, info};

use crate::common::types::{AccessEvent, AccessStatus, OperationKind, PageId};
use crate::config::EngineConfig;
use crate::paging::error::EngineError;
use crate::paging::mapper::derive_page_id;
use crate::paging::recorder::EventRecorder;
use crate::paging::replacer::{LRUReplacer, Residency};
use crate::paging::stats::Statistics;

/// LRU page replacement accountant.
///
/// Each processed access maps its file name to a page, classifies the access
/// as a hit or a fault against the resident frames and records it both in
/// memory and in the durable page log.
pub struct LruEngine {
    replacer: LRUReplacer,
    recorder: EventRecorder,
    history: Vec<AccessEvent>,
    history_window: usize,
    hits: u64,
    faults: u64,
}

impl LruEngine {
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        Ok(Self {
            replacer: LRUReplacer::new(config.frame_capacity),
            recorder: EventRecorder::new(&config.log_path),
            history: Vec::new(),
            history_window: config.history_window,
            hits: 0,
            faults: 0,
        })
    }

    pub fn with_capacity(frame_capacity: usize, log_path: impl AsRef<Path>) -> Result<Self, EngineError> {
        Self::new(&EngineConfig {
            frame_capacity,
            ..EngineConfig::with_log_path(log_path)
        })
    }

    /// Account for one successful access to `filename`
    pub fn process(&mut self, filename: &str, operation: OperationKind) -> AccessEvent {
        let page_id = derive_page_id(filename);

        let status = match self.replacer.record_access(page_id) {
            Residency::Resident => {
                self.hits += 1;
                AccessStatus::Hit
            }
            Residency::Loaded { evicted } => {
                if let Some(victim) = evicted {
                    debug!("Evicted page {} to load page {}", victim, page_id);
                }
                self.faults += 1;
                AccessStatus::Fault
            }
        };

        let event = AccessEvent::new(page_id, operation, filename, status);
        self.recorder.append(&event);
        self.history.push(event.clone());

        event
    }

    /// Current statistics, derived from the engine state
    pub fn snapshot(&self) -> Statistics {
        let start = self.history.len().saturating_sub(self.history_window);

        Statistics::new(
            self.hits,
            self.faults,
            self.replacer.capacity(),
            self.replacer.frames(),
            self.history[start..].to_vec(),
        )
    }

    /// Forget all resident pages, counters and history, and truncate the page log
    pub fn reset(&mut self) {
        self.replacer.clear();
        self.history.clear();
        self.hits = 0;
        self.faults = 0;
        self.recorder.clear();
        info!("Page fault analysis has been reset");
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn faults(&self) -> u64 {
        self.faults
    }

    /// Resident pages, least recently used first
    pub fn frames(&self) -> Vec<PageId> {
        self.replacer.frames()
    }

    pub fn capacity(&self) -> usize {
        self.replacer.capacity()
    }

    pub fn is_resident(&self, page_id: PageId) -> bool {
        self.replacer.contains(page_id)
    }

    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }
}
