//! Error types for pagesim.

use thiserror::Error;

use crate::common::PolicyKind;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write
/// `Result<T>`. This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Request-shaping problems (`InvalidPage`, `InvalidMemorySize`,
/// `UnknownPolicy`) are caught at the boundary before any session is
/// touched. The remaining variants are internal invariant violations that
/// a correct simulation never produces.
#[derive(Debug, Error)]
pub enum Error {
    /// The page reference was absent or the invalid sentinel.
    #[error("page reference must be present and valid")]
    InvalidPage,

    /// The requested memory size was zero or absent.
    #[error("memory size must be a positive integer, got {0}")]
    InvalidMemorySize(usize),

    /// The policy name does not name one of the four variants.
    #[error("unknown replacement policy: {0}")]
    UnknownPolicy(String),

    /// Lazily constructing a session violated an internal invariant.
    #[error("could not create a session for policy {0}")]
    SessionCreationFailure(PolicyKind),

    /// A full frame set produced no eviction victim.
    ///
    /// This indicates a bug - every policy must pick a victim from a
    /// non-empty frame set.
    #[error("no evictable page in a full frame set")]
    NoEvictableFrame,

    /// One or more policy variants failed during a fan-out step.
    ///
    /// The message lists each failing variant and its error.
    #[error("policy variants failed: {0}")]
    VariantFailures(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidMemorySize(0);
        assert_eq!(format!("{}", err), "memory size must be a positive integer, got 0");

        let err = Error::SessionCreationFailure(PolicyKind::Opt);
        assert_eq!(format!("{}", err), "could not create a session for policy opt");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
