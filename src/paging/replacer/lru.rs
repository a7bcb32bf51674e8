use std::collections::VecDeque;
use crate::common::types::PageId;

/// Result of touching a page in the replacer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Residency {
    /// Page was already resident and is now the most recently used
    Resident,
    /// Page was loaded, possibly pushing out the least recently used page
    Loaded { evicted: Option<PageId> },
}

/// Fixed-capacity LRU (Least Recently Used) frame set.
///
/// Front of the list is the least recently used page, back is the most
/// recently used one.
#[derive(Debug, Clone)]
pub struct LRUReplacer {
    lru_list: VecDeque<PageId>,
    capacity: usize,
}

impl LRUReplacer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lru_list: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record that a page has been accessed
    pub fn record_access(&mut self, page_id: PageId) -> Residency {
        if let Some(pos) = self.lru_list.iter().position(|&id| id == page_id) {
            self.lru_list.remove(pos);
            self.lru_list.push_back(page_id);
            return Residency::Resident;
        }

        let evicted = if self.lru_list.len() >= self.capacity {
            self.victim()
        } else {
            None
        };

        self.lru_list.push_back(page_id);
        Residency::Loaded { evicted }
    }

    /// Victim selection: take the least recently used page
    fn victim(&mut self) -> Option<PageId> {
        self.lru_list.pop_front()
    }

    pub fn contains(&self, page_id: PageId) -> bool {
        self.lru_list.contains(&page_id)
    }

    /// Resident pages, least recently used first
    pub fn frames(&self) -> Vec<PageId> {
        self.lru_list.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.lru_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lru_list.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.lru_list.clear();
    }
}
