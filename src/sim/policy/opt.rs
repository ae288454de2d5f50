//! OPT (optimal/clairvoyant) replacement policy.

use std::collections::HashMap;

use crate::common::PageRef;
use crate::sim::FrameSet;

use super::Policy;

/// Evicts the resident page whose next use lies farthest in the future.
///
/// This policy is not causal: it reads the remainder of the reference
/// stream, which the simulation has not yet observed, and so serves as
/// the lower bound on faults the other policies are compared against.
/// Pages never referenced again are treated as infinitely far away; with
/// an empty lookahead every resident page qualifies and the first frame
/// is evicted, degrading OPT to FIFO on a first pass.
#[derive(Debug, Default)]
pub struct OptPolicy;

impl OptPolicy {
    /// Create a new OPT policy.
    pub fn new() -> Self {
        Self
    }
}

impl Policy for OptPolicy {
    fn select_victim(&self, frames: &FrameSet, lookahead: &[PageRef]) -> Option<PageRef> {
        // One pass over the lookahead records the first future index of
        // each resident page.
        let mut next_use: HashMap<PageRef, usize> = HashMap::new();
        for (idx, &future) in lookahead.iter().enumerate() {
            if frames.contains(future) && !next_use.contains_key(&future) {
                let _ = next_use.insert(future, idx);
            }
        }

        let mut victim = None;
        let mut farthest = 0usize;

        for page in frames.iter() {
            // Never referenced again reads as usize::MAX; on equal
            // distances the earlier frame wins.
            let distance = next_use.get(&page).copied().unwrap_or(usize::MAX);
            if victim.is_none() || distance > farthest {
                victim = Some(page);
                farthest = distance;
            }
        }

        victim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: u32) -> PageRef {
        PageRef::new(id)
    }

    fn pages(ids: &[u32]) -> Vec<PageRef> {
        ids.iter().copied().map(PageRef::new).collect()
    }

    #[test]
    fn test_opt_evicts_farthest_future_use() {
        let mut frames = FrameSet::new(3);
        frames.admit(page(1));
        frames.admit(page(2));
        frames.admit(page(3));

        let policy = OptPolicy::new();
        // Next uses: 1 at index 0, 2 at index 3, 3 at index 1.
        let lookahead = pages(&[1, 3, 1, 2]);

        assert_eq!(policy.select_victim(&frames, &lookahead), Some(page(2)));
    }

    #[test]
    fn test_opt_prefers_never_reused_page() {
        let mut frames = FrameSet::new(3);
        frames.admit(page(1));
        frames.admit(page(2));
        frames.admit(page(3));

        let policy = OptPolicy::new();
        // Page 2 never appears again.
        let lookahead = pages(&[3, 1]);

        assert_eq!(policy.select_victim(&frames, &lookahead), Some(page(2)));
    }

    #[test]
    fn test_opt_never_reused_tie_breaks_by_frame_order() {
        let mut frames = FrameSet::new(3);
        frames.admit(page(1));
        frames.admit(page(2));
        frames.admit(page(3));

        let policy = OptPolicy::new();
        // Pages 1 and 3 both vanish from the future; the earlier frame wins.
        let lookahead = pages(&[2]);

        assert_eq!(policy.select_victim(&frames, &lookahead), Some(page(1)));
    }

    #[test]
    fn test_opt_empty_lookahead_degrades_to_fifo() {
        let mut frames = FrameSet::new(2);
        frames.admit(page(4));
        frames.admit(page(5));

        let policy = OptPolicy::new();

        assert_eq!(policy.select_victim(&frames, &[]), Some(page(4)));
    }

    #[test]
    fn test_opt_only_first_occurrence_counts() {
        let mut frames = FrameSet::new(2);
        frames.admit(page(1));
        frames.admit(page(2));

        let policy = OptPolicy::new();
        // Page 1 recurs later too, but only its first occurrence (index 0)
        // matters; page 2 at index 2 is farther.
        let lookahead = pages(&[1, 1, 2, 1]);

        assert_eq!(policy.select_victim(&frames, &lookahead), Some(page(2)));
    }
}
