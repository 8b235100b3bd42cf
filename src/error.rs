//! Errors reported by tree mutations.

use thiserror::Error;

/// Errors returned by [`Tree`][crate::linked::Tree] operations that require an item to be
/// present.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No stored item compared equal to the requested one.
    #[error("item not found in tree")]
    NotFound,
}

/// Result type alias for tree operations.
pub type Result<T> = std::result::Result<T, Error>;
