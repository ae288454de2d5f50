//! pagesim - A page-replacement simulator with runtime-swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    SimulationRegistry                      │
//! │        PolicyKind → Session (lazily created, reset())      │
//! │   advance() / advance_all() — one task per policy variant  │
//! ├────────────────────────────────────────────────────────────┤
//! │              SimulationSession (one per variant)           │
//! │  ┌──────────────┐  ┌──────────────┐  ┌─────────────────┐   │
//! │  │   FrameSet   │  │  QuickTable  │  │     Policy      │   │
//! │  │  (resident   │  │ (FIFO fast   │  │ FIFO|LRU|OPT|LFU│   │
//! │  │    pages)    │  │    path)     │  │  (victim pick)  │   │
//! │  └──────────────┘  └──────────────┘  └─────────────────┘   │
//! │        counters: step / faults / total_time + history      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each page reference is classified as a quick table hit, a memory hit,
//! a fault into a free frame, or a fault that evicts a resident page; the
//! active policy only decides the eviction victim. The quick table is
//! strictly FIFO no matter which policy runs, modeling a TLB in front of
//! an arbitrarily clever memory.
//!
//! # Modules
//! - [`common`] - Shared primitives (PageRef, PolicyKind, TimeSettings, Error)
//! - [`sim`] - Frame set, quick table, policies, sessions
//! - [`registry`] - The reset/advance boundary for the request layer
//!
//! # Quick Start
//! ```
//! use pagesim::{PageRef, PolicyKind, SimulationRegistry, StepRequest};
//!
//! let registry = SimulationRegistry::new();
//! let request = StepRequest::new(PageRef::new(1));
//!
//! // Advance one variant...
//! let result = registry.advance(PolicyKind::Lru, &request).unwrap();
//! assert_eq!(result.faults, 1);
//!
//! // ...or fan out across all four.
//! let report = registry.advance_all(&request);
//! assert!(report.is_success());
//! ```

pub mod common;
pub mod registry;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageRef, PolicyKind, Result, TimeSettings};

pub use registry::{FanOutReport, SimulationRegistry, StepRequest, StepResult};
pub use sim::{
    AccessKind, HistoryEvent, SessionSnapshot, SimulationSession, StepOutcome,
};
