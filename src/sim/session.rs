//! Simulation session - one policy variant's complete state.

use serde::Serialize;
use tracing::debug;

use crate::common::{Error, PageRef, PolicyKind, Result, TimeSettings};
use crate::sim::history::{AccessKind, HistoryEvent};
use crate::sim::policy::{self, Policy};
use crate::sim::{FrameSet, QuickTable};

/// One policy variant's frame set, quick table, bookkeeping, and counters.
///
/// A session advances by exactly one page reference per [`advance`] call
/// and accumulates a history event per step. It lives until an explicit
/// reset; there is no terminal state.
///
/// # Concurrency
/// A session is logically single-threaded: callers must serialize
/// `advance` calls (the registry wraps each session in a mutex). Sessions
/// for different variants share nothing and run in parallel freely.
///
/// [`advance`]: SimulationSession::advance
#[derive(Debug)]
pub struct SimulationSession {
    policy_kind: PolicyKind,
    use_quick_table: bool,

    frames: FrameSet,
    quick_table: QuickTable,
    policy: Box<dyn Policy>,

    faults: u64,
    total_time: u64,
    step: u64,
    history: Vec<HistoryEvent>,
}

/// What a single step did, returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// How the reference was classified.
    pub kind: AccessKind,

    /// The referenced page.
    pub page: PageRef,

    /// The page evicted to make room, for replacement faults.
    pub evicted: Option<PageRef>,

    /// The access time charged.
    pub access_time: u64,
}

impl StepOutcome {
    /// Whether this step was a page fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        self.kind.is_fault()
    }
}

/// A point-in-time copy of a session's observable state.
///
/// Safe to serialize, print, and compare; detached from the live session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Resident pages in insertion order.
    pub frames: Vec<PageRef>,

    /// Quick table entries in admission order.
    pub quick_table: Vec<PageRef>,

    /// Page faults so far.
    pub faults: u64,

    /// Sum of every step's access time.
    pub total_time: u64,

    /// References processed so far.
    pub step: u64,
}

impl SimulationSession {
    /// Create a fresh session for one policy variant.
    ///
    /// # Errors
    /// - `Error::InvalidMemorySize` if `memory_size` is zero
    pub fn new(kind: PolicyKind, memory_size: usize, use_quick_table: bool) -> Result<Self> {
        if memory_size == 0 {
            return Err(Error::InvalidMemorySize(memory_size));
        }

        Ok(Self {
            policy_kind: kind,
            use_quick_table,
            frames: FrameSet::new(memory_size),
            quick_table: QuickTable::new(memory_size),
            policy: policy::for_kind(kind),
            faults: 0,
            total_time: 0,
            step: 0,
            history: Vec::new(),
        })
    }

    /// Which policy variant this session runs.
    #[inline]
    pub fn policy_kind(&self) -> PolicyKind {
        self.policy_kind
    }

    /// Number of frames in simulated memory.
    #[inline]
    pub fn memory_size(&self) -> usize {
        self.frames.capacity()
    }

    /// Whether the quick table fast path is enabled.
    #[inline]
    pub fn use_quick_table(&self) -> bool {
        self.use_quick_table
    }

    /// Page faults so far.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.faults
    }

    /// Sum of every step's access time.
    #[inline]
    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    /// References processed so far.
    #[inline]
    pub fn step(&self) -> u64 {
        self.step
    }

    /// The accumulated per-step history, oldest first.
    pub fn history(&self) -> &[HistoryEvent] {
        &self.history
    }

    /// Process one page reference.
    ///
    /// Classifies the reference (quick table hit, memory hit, fault into a
    /// free frame, or fault with eviction), updates the quick table,
    /// appends a history event, and advances the counters. `lookahead` is
    /// the remainder of the reference stream; only OPT reads it.
    ///
    /// # Errors
    /// - `Error::NoEvictableFrame` if the policy yields no victim for a
    ///   full frame set (an internal invariant violation)
    pub fn advance(
        &mut self,
        page: PageRef,
        times: &TimeSettings,
        lookahead: &[PageRef],
    ) -> Result<StepOutcome> {
        // Bookkeeping sees every touch: LRU stamps the step, LFU bumps
        // the count, FIFO/OPT ignore it.
        self.policy.record_access(page, self.step);

        let (kind, evicted, access_time) = if self.use_quick_table && self.quick_table.lookup(page)
        {
            (AccessKind::QuickTableHit, None, times.quick_table_time)
        } else if self.frames.contains(page) {
            (AccessKind::MemoryHit, None, times.memory_access_time)
        } else {
            self.faults += 1;
            if !self.frames.is_full() {
                self.frames.admit(page);
                (AccessKind::FaultNew, None, times.page_fault_time)
            } else {
                let victim = self
                    .policy
                    .select_victim(&self.frames, lookahead)
                    .ok_or(Error::NoEvictableFrame)?;
                debug!(
                    policy = %self.policy_kind,
                    page = %page,
                    victim = %victim,
                    "fault replaces resident page"
                );
                let _ = self.frames.evict(victim);
                self.frames.admit(page);
                (AccessKind::FaultReplace, Some(victim), times.page_fault_time)
            }
        };

        // The quick table caches whatever was touched, on every branch.
        if self.use_quick_table {
            self.quick_table.admit(page);
        }

        self.history.push(HistoryEvent {
            step: self.step,
            kind,
            page,
            access_time,
            evicted,
        });
        self.total_time += access_time;
        self.step += 1;

        Ok(StepOutcome {
            kind,
            page,
            evicted,
            access_time,
        })
    }

    /// Copy the observable state out of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            frames: self.frames.pages(),
            quick_table: self.quick_table.pages(),
            faults: self.faults,
            total_time: self.total_time,
            step: self.step,
        }
    }

    /// Return the session to its just-created state.
    ///
    /// Clears frames, quick table, counters, history, and the policy's
    /// per-page bookkeeping.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.quick_table.clear();
        self.policy.reset();
        self.faults = 0;
        self.total_time = 0;
        self.step = 0;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: u32) -> PageRef {
        PageRef::new(id)
    }

    fn session(kind: PolicyKind, memory_size: usize) -> SimulationSession {
        SimulationSession::new(kind, memory_size, false).unwrap()
    }

    #[test]
    fn test_zero_memory_size_rejected() {
        assert!(matches!(
            SimulationSession::new(PolicyKind::Fifo, 0, false),
            Err(Error::InvalidMemorySize(0))
        ));
    }

    #[test]
    fn test_first_reference_faults_into_free_frame() {
        let times = TimeSettings::default();
        let mut session = session(PolicyKind::Fifo, 3);

        let outcome = session.advance(page(1), &times, &[]).unwrap();

        assert_eq!(outcome.kind, AccessKind::FaultNew);
        assert_eq!(outcome.evicted, None);
        assert_eq!(outcome.access_time, times.page_fault_time);
        assert_eq!(session.faults(), 1);
        assert_eq!(session.step(), 1);
    }

    #[test]
    fn test_memory_hit_charges_memory_time() {
        let times = TimeSettings::default();
        let mut session = session(PolicyKind::Fifo, 3);

        let _ = session.advance(page(1), &times, &[]).unwrap();
        let outcome = session.advance(page(1), &times, &[]).unwrap();

        assert_eq!(outcome.kind, AccessKind::MemoryHit);
        assert_eq!(outcome.access_time, times.memory_access_time);
        assert_eq!(session.faults(), 1);
        assert_eq!(session.total_time(), times.page_fault_time + times.memory_access_time);
    }

    #[test]
    fn test_quick_table_hit_precedes_memory() {
        let times = TimeSettings::default();
        let mut session = SimulationSession::new(PolicyKind::Lru, 3, true).unwrap();

        let _ = session.advance(page(1), &times, &[]).unwrap();
        let outcome = session.advance(page(1), &times, &[]).unwrap();

        assert_eq!(outcome.kind, AccessKind::QuickTableHit);
        assert_eq!(outcome.access_time, times.quick_table_time);
    }

    #[test]
    fn test_quick_table_disabled_never_hits_it() {
        let times = TimeSettings::default();
        let mut session = session(PolicyKind::Lru, 3);

        let _ = session.advance(page(1), &times, &[]).unwrap();
        let outcome = session.advance(page(1), &times, &[]).unwrap();

        assert_eq!(outcome.kind, AccessKind::MemoryHit);
        assert!(session.snapshot().quick_table.is_empty());
    }

    #[test]
    fn test_replacement_fault_records_victim() {
        let times = TimeSettings::default();
        let mut session = session(PolicyKind::Fifo, 2);

        let _ = session.advance(page(1), &times, &[]).unwrap();
        let _ = session.advance(page(2), &times, &[]).unwrap();
        let outcome = session.advance(page(3), &times, &[]).unwrap();

        assert_eq!(outcome.kind, AccessKind::FaultReplace);
        assert_eq!(outcome.evicted, Some(page(1)));
        assert_eq!(session.snapshot().frames, vec![page(2), page(3)]);
    }

    #[test]
    fn test_history_is_appended_in_step_order() {
        let times = TimeSettings::default();
        let mut session = session(PolicyKind::Lfu, 2);

        let _ = session.advance(page(1), &times, &[]).unwrap();
        let _ = session.advance(page(1), &times, &[]).unwrap();
        let _ = session.advance(page(2), &times, &[]).unwrap();

        let history = session.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].kind, AccessKind::FaultNew);
        assert_eq!(history[1].kind, AccessKind::MemoryHit);
        assert_eq!(history[2].kind, AccessKind::FaultNew);
        assert!(history.windows(2).all(|w| w[0].step + 1 == w[1].step));
    }

    #[test]
    fn test_reset_returns_to_fresh_state() {
        let times = TimeSettings::default();
        let mut session = SimulationSession::new(PolicyKind::Lru, 2, true).unwrap();

        let _ = session.advance(page(1), &times, &[]).unwrap();
        let _ = session.advance(page(2), &times, &[]).unwrap();

        session.reset();

        let snap = session.snapshot();
        assert!(snap.frames.is_empty());
        assert!(snap.quick_table.is_empty());
        assert_eq!(snap.faults, 0);
        assert_eq!(snap.total_time, 0);
        assert_eq!(snap.step, 0);
        assert!(session.history().is_empty());

        // The next reference behaves like the very first one.
        let outcome = session.advance(page(1), &times, &[]).unwrap();
        assert_eq!(outcome.kind, AccessKind::FaultNew);
    }
}
