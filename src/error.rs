use std::io;

/// Errors returned by fibbench.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// The index is negative or not an integer.
    #[error("invalid index `{input}`: {reason}")]
    InvalidIndex {
        /// The rejected input as given by the caller.
        input: String,
        /// Why the input was rejected.
        reason: &'static str,
    },
    /// Naive recursion only stays exact while F(n) fits into a `u128`.
    #[error("index {n} is too large for naive recursion (max {max})")]
    NaiveIndexTooLarge {
        /// The requested index.
        n: u64,
        /// The largest supported index.
        max: u64,
    },
    /// Both strategies must agree on F(n).
    #[error("naive and tabulated results differ for n={n}")]
    ResultMismatch {
        /// The index both strategies computed.
        n: u64,
    },
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FibError>;
