//! LFU (Least-Frequently-Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageRef;
use crate::sim::FrameSet;

use super::Policy;

/// Evicts the resident page with the lowest reference count.
///
/// Counts start at zero on first touch and grow on every reference,
/// including the one that admits the page. They never decay and survive
/// eviction, so a long-idle page that was once popular can resist
/// eviction indefinitely - the classic weakness of pure LFU, reproduced
/// here on purpose.
#[derive(Debug, Default)]
pub struct LfuPolicy {
    /// Reference count per page.
    frequency: HashMap<PageRef, u64>,
}

impl LfuPolicy {
    /// Create a new LFU policy.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn count(&self, page: PageRef) -> u64 {
        self.frequency.get(&page).copied().unwrap_or(0)
    }
}

impl Policy for LfuPolicy {
    fn record_access(&mut self, page: PageRef, _step: u64) {
        *self.frequency.entry(page).or_insert(0) += 1;
    }

    fn select_victim(&self, frames: &FrameSet, _lookahead: &[PageRef]) -> Option<PageRef> {
        let mut victim = None;
        let mut coldest = u64::MAX;

        for page in frames.iter() {
            // Untracked pages read as zero; on equal counts the earlier
            // frame wins.
            let count = self.frequency.get(&page).copied().unwrap_or(0);
            if victim.is_none() || count < coldest {
                victim = Some(page);
                coldest = count;
            }
        }

        victim
    }

    fn reset(&mut self) {
        self.frequency.clear();
    }
}
