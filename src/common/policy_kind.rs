//! Replacement policy names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::Error;

/// The four replacement policies the simulator knows.
///
/// The lowercase names (`fifo`, `lru`, `opt`, `lfu`) are the wire names the
/// request layer uses to address a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Evict the page resident longest.
    Fifo,
    /// Evict the page unused longest.
    Lru,
    /// Evict the page whose next use is farthest away (clairvoyant).
    Opt,
    /// Evict the page referenced least often.
    Lfu,
}

impl PolicyKind {
    /// All variants, in the order the request layer fans out.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Opt,
        PolicyKind::Lfu,
    ];

    /// The lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Opt => "opt",
            PolicyKind::Lfu => "lfu",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "opt" => Ok(PolicyKind::Opt),
            "lfu" => Ok(PolicyKind::Lfu),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}
