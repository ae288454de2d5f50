//! Eviction policy implementations.
//!
//! Implements the four classic policies:
//! - [`FifoPolicy`] - evict the page resident longest
//! - [`LruPolicy`] - evict the page unused longest
//! - [`OptPolicy`] - evict the page reused farthest in the future
//! - [`LfuPolicy`] - evict the page referenced least often

mod fifo;
mod lfu;
mod lru;
mod opt;

pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
pub use opt::OptPolicy;

use crate::common::{PageRef, PolicyKind};
use crate::sim::FrameSet;

/// The decision seam between a session and its eviction policy.
///
/// The session owns the frame set and drives the step; the policy only
/// keeps per-page bookkeeping and names the eviction victim.
pub trait Policy: Send + std::fmt::Debug {
    /// Record one reference to `page` at the given step.
    ///
    /// Called on every reference - quick table hits, memory hits, and the
    /// touch that causes admission - before the step is classified.
    fn record_access(&mut self, _page: PageRef, _step: u64) {}

    /// Pick the resident page to evict from a full frame set.
    ///
    /// `lookahead` is the remainder of the reference stream; only OPT
    /// consults it. Returns None only on an empty frame set, which the
    /// session never presents.
    fn select_victim(&self, frames: &FrameSet, lookahead: &[PageRef]) -> Option<PageRef>;

    /// Drop all per-page bookkeeping.
    fn reset(&mut self) {}
}

/// Construct the policy value for a variant.
pub(crate) fn for_kind(kind: PolicyKind) -> Box<dyn Policy> {
    match kind {
        PolicyKind::Fifo => Box::new(FifoPolicy::new()),
        PolicyKind::Lru => Box::new(LruPolicy::new()),
        PolicyKind::Opt => Box::new(OptPolicy::new()),
        PolicyKind::Lfu => Box::new(LfuPolicy::new()),
    }
}
