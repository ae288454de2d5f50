//! Timing configuration and capacity rules.

use serde::{Deserialize, Serialize};

/// Default cost of a main-memory hit, in simulated time units.
pub const DEFAULT_MEMORY_ACCESS_TIME: u64 = 100;

/// Default cost of a page fault.
pub const DEFAULT_PAGE_FAULT_TIME: u64 = 10_000;

/// Default cost of a quick table hit.
pub const DEFAULT_QUICK_TABLE_TIME: u64 = 20;

/// Upper bound on quick table entries, independent of memory size.
///
/// The quick table models a small TLB: four entries, or fewer when the
/// simulated memory itself holds fewer frames.
pub const QUICK_TABLE_LIMIT: usize = 4;

/// Quick table capacity for a given memory size: `min(4, memory_size)`.
#[inline]
pub fn quick_table_capacity(memory_size: usize) -> usize {
    QUICK_TABLE_LIMIT.min(memory_size)
}

/// Per-step access costs, validated once at the request boundary.
///
/// The field names mirror the wire keys of the request layer
/// (`memoryAccessTime`, `pageFaultTime`, `quickTableTime`); any omitted
/// option takes its default, and a missing settings object is never an
/// error.
///
/// # Example
/// ```
/// use pagesim::TimeSettings;
///
/// let times = TimeSettings::default();
/// assert_eq!(times.memory_access_time, 100);
/// assert_eq!(times.page_fault_time, 10_000);
/// assert_eq!(times.quick_table_time, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeSettings {
    /// Time charged for a hit in the frame set.
    pub memory_access_time: u64,

    /// Time charged for a fault, whether or not it evicts.
    pub page_fault_time: u64,

    /// Time charged for a hit in the quick table.
    pub quick_table_time: u64,
}

impl Default for TimeSettings {
    fn default() -> Self {
        Self {
            memory_access_time: DEFAULT_MEMORY_ACCESS_TIME,
            page_fault_time: DEFAULT_PAGE_FAULT_TIME,
            quick_table_time: DEFAULT_QUICK_TABLE_TIME,
        }
    }
}
