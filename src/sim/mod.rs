//! The policy simulation engine.
//!
//! One [`SimulationSession`] per policy variant owns the moving parts:
//! - [`FrameSet`] - the bounded resident set
//! - [`QuickTable`] - the TLB-style FIFO fast path
//! - [`policy`] - the four eviction policies
//! - [`HistoryEvent`] - the per-step record stream

mod frame_set;
mod history;
pub mod policy;
mod quick_table;
mod session;

pub use frame_set::FrameSet;
pub use history::{AccessKind, HistoryEvent};
pub use quick_table::QuickTable;
pub use session::{SessionSnapshot, SimulationSession, StepOutcome};
