//! FIFO (First-In-First-Out) replacement policy.

use crate::common::PageRef;
use crate::sim::FrameSet;

use super::Policy;

/// Evicts the page that has been resident longest.
///
/// The frame set already keeps insertion order, so the victim is simply
/// its front entry. No auxiliary state, and no ties: insertion order is a
/// total order.
#[derive(Debug, Default)]
pub struct FifoPolicy;

impl FifoPolicy {
    /// Create a new FIFO policy.
    pub fn new() -> Self {
        Self
    }
}

impl Policy for FifoPolicy {
    fn select_victim(&self, frames: &FrameSet, _lookahead: &[PageRef]) -> Option<PageRef> {
        frames.iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: u32) -> PageRef {
        PageRef::new(id)
    }

    #[test]
    fn test_fifo_evicts_earliest_admitted() {
        let mut frames = FrameSet::new(3);
        frames.admit(page(1));
        frames.admit(page(2));
        frames.admit(page(3));

        let policy = FifoPolicy::new();
        assert_eq!(policy.select_victim(&frames, &[]), Some(page(1)));
    }

    #[test]
    fn test_fifo_ignores_reaccess() {
        let mut frames = FrameSet::new(2);
        frames.admit(page(1));
        frames.admit(page(2));

        let mut policy = FifoPolicy::new();
        // Re-touching page 1 must not save it: FIFO has no recency notion.
        policy.record_access(page(1), 5);

        assert_eq!(policy.select_victim(&frames, &[]), Some(page(1)));
    }

    #[test]
    fn test_fifo_empty_frames() {
        let frames = FrameSet::new(2);
        let policy = FifoPolicy::new();

        assert_eq!(policy.select_victim(&frames, &[]), None);
    }
}
