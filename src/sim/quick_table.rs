//! The quick table - a TLB-style fast lookup cache.

use std::collections::{HashSet, VecDeque};

use crate::common::config::quick_table_capacity;
use crate::common::PageRef;

/// A small, strictly-FIFO cache consulted before the frame set.
///
/// Models a TLB: it caches whatever was touched, in touch order, and
/// evicts the oldest-admitted entry when full - no matter how
/// sophisticated the main policy is. Capacity is `min(4, memory_size)`.
///
/// # Invariants
/// - `len() <= min(4, memory_size)`
/// - No page appears twice.
#[derive(Debug)]
pub struct QuickTable {
    /// Cached pages in admission order (front = oldest).
    entries: VecDeque<PageRef>,

    /// Set for O(1) membership check.
    cached: HashSet<PageRef>,

    capacity: usize,
}

impl QuickTable {
    /// Create an empty quick table sized for the given memory size.
    pub fn new(memory_size: usize) -> Self {
        let capacity = quick_table_capacity(memory_size);
        Self {
            entries: VecDeque::with_capacity(capacity),
            cached: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of cached pages.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of cached pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if `page` is cached.
    #[inline]
    pub fn lookup(&self, page: PageRef) -> bool {
        self.cached.contains(&page)
    }

    /// Admit a page, evicting the oldest entry when full.
    ///
    /// A no-op when the page is already cached: a re-touch never refreshes
    /// an entry's position in the eviction order.
    pub fn admit(&mut self, page: PageRef) {
        if self.cached.contains(&page) {
            return;
        }
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.entries.pop_front() {
                let _ = self.cached.remove(&oldest);
            }
        }
        self.entries.push_back(page);
        let _ = self.cached.insert(page);
    }

    /// Snapshot of cached pages in admission order.
    pub fn pages(&self) -> Vec<PageRef> {
        self.entries.iter().copied().collect()
    }

    /// Drop every cached page.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cached.clear();
    }
}
