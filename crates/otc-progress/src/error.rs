// Rust guideline compliant 2026-10-12

//! Error types for the progress library.
//!
//! Only [`Error::EmptyRun`] is ever returned to a caller. The other variants
//! describe conditions the library recovers from locally; they exist so the
//! recovery sites can log a precise message and so lower-level helpers such
//! as [`crate::sigfig::try_sigfigs`] can report what went wrong.

use thiserror::Error;

/// Result type alias for progress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for progress operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A tracker was constructed for a run with no items.
    #[error("Progress total must be greater than zero")]
    EmptyRun,

    /// A value is too large to be stored in a signed 32-bit integer.
    #[error("Value {0} does not fit in a signed 32-bit integer")]
    Overflow(f64),

    /// A significant-figure request outside `1..=9`.
    #[error("{0} is an unreasonable number of significant figures")]
    UnreasonableSigFigs(u32),

    /// Writing a report to its sink failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
