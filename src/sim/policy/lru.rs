//! LRU (Least-Recently-Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageRef;
use crate::sim::FrameSet;

use super::Policy;

/// Evicts the resident page with the oldest recorded access.
///
/// Every reference stamps the page with the current step - hits through
/// the quick table, hits in memory, and the touch that admits the page on
/// a fault. Stamps for evicted pages are kept; they are harmless and get
/// overwritten if the page returns.
#[derive(Debug, Default)]
pub struct LruPolicy {
    /// Last-access step per page.
    last_access: HashMap<PageRef, u64>,
}

impl LruPolicy {
    /// Create a new LRU policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Policy for LruPolicy {
    fn record_access(&mut self, page: PageRef, step: u64) {
        let _ = self.last_access.insert(page, step);
    }

    fn select_victim(&self, frames: &FrameSet, _lookahead: &[PageRef]) -> Option<PageRef> {
        let mut victim = None;
        let mut oldest: Option<u64> = None;

        for page in frames.iter() {
            // An unstamped page sorts below every stamped one
            // (None < Some); on equal stamps the earlier frame wins.
            let stamp = self.last_access.get(&page).copied();
            if victim.is_none() || stamp < oldest {
                victim = Some(page);
                oldest = stamp;
            }
        }

        victim
    }

    fn reset(&mut self) {
        self.last_access.clear();
    }
}
