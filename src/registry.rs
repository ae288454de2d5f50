//! Simulation registry - the boundary the request layer calls.
//!
//! The [`SimulationRegistry`] owns one lazily-created
//! [`SimulationSession`] per policy variant and exposes the two
//! operations the excluded HTTP layer needs: `reset` and `advance`
//! (plus `advance_all`, the structured fan-out across all four variants).

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::common::{Error, PageRef, PolicyKind, Result, TimeSettings};
use crate::sim::{AccessKind, HistoryEvent, SimulationSession};

/// One page reference plus its per-step configuration.
///
/// Mirrors the request layer's POST body: every field except `page` is
/// optional on the wire and falls back to its default (`memory_size` 3,
/// quick table off, default timings, empty future sequence). Missing
/// options are never an error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StepRequest {
    /// The referenced page.
    pub page: PageRef,

    /// Frame count for the session, used only when it is first created.
    #[serde(default = "default_memory_size")]
    pub memory_size: usize,

    /// Whether the session consults a quick table, fixed at creation.
    #[serde(default)]
    pub use_quick_table: bool,

    /// Access costs charged this step.
    #[serde(default)]
    pub time_settings: TimeSettings,

    /// The remainder of the reference stream; only OPT reads it.
    #[serde(default, rename = "future_sequence")]
    pub future: Vec<PageRef>,
}

fn default_memory_size() -> usize {
    3
}

impl StepRequest {
    /// A request for `page` with every option at its default.
    pub fn new(page: PageRef) -> Self {
        Self {
            page,
            memory_size: default_memory_size(),
            use_quick_table: false,
            time_settings: TimeSettings::default(),
            future: Vec::new(),
        }
    }
}

/// What one `advance` call returns: the step's classification plus the
/// session's resulting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResult {
    /// How the reference was classified.
    pub kind: AccessKind,

    /// The referenced page.
    pub page: PageRef,

    /// The page evicted to make room, for replacement faults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evicted: Option<PageRef>,

    /// The access time charged for this step.
    pub access_time: u64,

    /// Resident pages after the step, in insertion order.
    pub frames: Vec<PageRef>,

    /// Quick table entries after the step, in admission order.
    pub quick_table: Vec<PageRef>,

    /// The session's running fault count.
    pub faults: u64,

    /// The session's running time accumulator.
    pub total_time: u64,

    /// The session's step counter after this step.
    pub step: u64,
}

/// The collected outcome of advancing all four variants for one reference.
///
/// Successful variants are always surfaced, even when a sibling failed;
/// [`combined_error`] folds the failures into a single error listing each
/// failing variant and its message.
///
/// [`combined_error`]: FanOutReport::combined_error
#[derive(Debug)]
pub struct FanOutReport {
    /// Per-variant results, in fan-out order.
    pub results: Vec<(PolicyKind, StepResult)>,

    /// Per-variant failures, in fan-out order.
    pub errors: Vec<(PolicyKind, Error)>,
}

impl FanOutReport {
    /// Check if every variant completed.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// The result for one variant, if it succeeded.
    pub fn result_for(&self, policy: PolicyKind) -> Option<&StepResult> {
        self.results
            .iter()
            .find(|(kind, _)| *kind == policy)
            .map(|(_, result)| result)
    }

    /// One error naming every failing variant, or None if all succeeded.
    pub fn combined_error(&self) -> Option<Error> {
        if self.errors.is_empty() {
            return None;
        }
        let listing = self
            .errors
            .iter()
            .map(|(policy, error)| format!("{policy}: {error}"))
            .collect::<Vec<_>>()
            .join("; ");
        Some(Error::VariantFailures(listing))
    }
}

type SharedSession = Arc<Mutex<SimulationSession>>;

/// Owns the per-variant sessions for the lifetime of a run.
///
/// An explicit object passed by reference to callers - not ambient global
/// state. Sessions are created lazily on first reference to a variant and
/// destroyed only by [`reset`].
///
/// # Thread Safety
/// - `sessions`: `Mutex` - held only for create-if-absent lookup and
///   reset, never across a step
/// - each session: its own `Mutex` - serializes steps per variant while
///   different variants advance in parallel
///
/// [`reset`]: SimulationRegistry::reset
#[derive(Debug, Default)]
pub struct SimulationRegistry {
    sessions: Mutex<HashMap<PolicyKind, SharedSession>>,
}

impl SimulationRegistry {
    /// Create a registry with no live sessions.
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Discard every session.
    ///
    /// The next reference to any variant lazily creates a fresh session.
    /// Calling this twice in a row is the same as calling it once.
    pub fn reset(&self) {
        let mut sessions = self.sessions.lock();
        sessions.clear();
        info!("reset all simulation sessions");
    }

    /// Advance one policy variant by one page reference.
    ///
    /// The variant's session is created on first use with the request's
    /// `memory_size` and `use_quick_table`; later calls reuse it and only
    /// the timing settings and future sequence are read per step.
    ///
    /// # Errors
    /// - `Error::InvalidPage` if the page is the invalid sentinel
    /// - `Error::InvalidMemorySize` if `memory_size` is zero
    /// - `Error::SessionCreationFailure` if lazy construction fails
    pub fn advance(&self, policy: PolicyKind, request: &StepRequest) -> Result<StepResult> {
        if !request.page.is_valid() {
            return Err(Error::InvalidPage);
        }
        if request.memory_size == 0 {
            return Err(Error::InvalidMemorySize(request.memory_size));
        }

        let session = self.session_for(policy, request)?;
        let mut session = session.lock();

        let outcome = session.advance(request.page, &request.time_settings, &request.future)?;
        let snapshot = session.snapshot();

        Ok(StepResult {
            kind: outcome.kind,
            page: outcome.page,
            evicted: outcome.evicted,
            access_time: outcome.access_time,
            frames: snapshot.frames,
            quick_table: snapshot.quick_table,
            faults: snapshot.faults,
            total_time: snapshot.total_time,
            step: snapshot.step,
        })
    }

    /// Advance all four variants for one reference, in parallel.
    ///
    /// Spawns one scoped task per variant and joins all of them before
    /// returning; a failure in one variant never aborts its siblings.
    pub fn advance_all(&self, request: &StepRequest) -> FanOutReport {
        let outcomes: Vec<(PolicyKind, Result<StepResult>)> = thread::scope(|scope| {
            let handles: Vec<_> = PolicyKind::ALL
                .into_iter()
                .map(|policy| scope.spawn(move || (policy, self.advance(policy, request))))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("policy task panicked"))
                .collect()
        });

        let mut results = Vec::new();
        let mut errors = Vec::new();
        for (policy, outcome) in outcomes {
            match outcome {
                Ok(result) => results.push((policy, result)),
                Err(error) => errors.push((policy, error)),
            }
        }

        FanOutReport { results, errors }
    }

    /// Snapshot a live session's accumulated history.
    ///
    /// Returns None when the variant has no session yet.
    pub fn history(&self, policy: PolicyKind) -> Option<Vec<HistoryEvent>> {
        let sessions = self.sessions.lock();
        sessions
            .get(&policy)
            .map(|session| session.lock().history().to_vec())
    }

    /// Look up the variant's session, creating it on first use.
    ///
    /// The registry lock guarantees at-most-one creation per variant under
    /// concurrent first access, and is dropped before the caller steps the
    /// session.
    fn session_for(&self, policy: PolicyKind, request: &StepRequest) -> Result<SharedSession> {
        let mut sessions = self.sessions.lock();

        if let Some(session) = sessions.get(&policy) {
            return Ok(Arc::clone(session));
        }

        debug!(
            policy = %policy,
            memory_size = request.memory_size,
            use_quick_table = request.use_quick_table,
            "creating simulation session"
        );
        let session =
            SimulationSession::new(policy, request.memory_size, request.use_quick_table)
                .map_err(|_| Error::SessionCreationFailure(policy))?;
        let shared = Arc::new(Mutex::new(session));
        let _ = sessions.insert(policy, Arc::clone(&shared));

        Ok(shared)
    }
}
