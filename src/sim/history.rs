//! Per-step history records.

use std::fmt;

use serde::Serialize;

use crate::common::PageRef;

/// How a single page reference was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessKind {
    /// Found in the quick table.
    QuickTableHit,
    /// Found in the frame set.
    MemoryHit,
    /// Fault filled a free frame.
    #[serde(rename = "page_fault_new")]
    FaultNew,
    /// Fault evicted a resident page.
    #[serde(rename = "page_fault_replace")]
    FaultReplace,
}

impl AccessKind {
    /// Whether this classification counts as a page fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, AccessKind::FaultNew | AccessKind::FaultReplace)
    }
}

/// One immutable record per simulation step.
///
/// Appended in step order and never mutated afterwards. `evicted` is
/// `Some` exactly when `kind` is [`AccessKind::FaultReplace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEvent {
    /// The step counter value when this reference was processed.
    pub step: u64,

    /// How the reference was classified.
    pub kind: AccessKind,

    /// The referenced page.
    pub page: PageRef,

    /// The access time charged for this step.
    pub access_time: u64,

    /// The page evicted to make room, for replacement faults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evicted: Option<PageRef>,
}

impl fmt::Display for HistoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.evicted {
            Some(victim) => write!(
                f,
                "step {}: {:?} {} (evicted {}, {} time units)",
                self.step, self.kind, self.page, victim, self.access_time
            ),
            None => write!(
                f,
                "step {}: {:?} {} ({} time units)",
                self.step, self.kind, self.page, self.access_time
            ),
        }
    }
}
