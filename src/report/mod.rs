//!
//! Module for reporting
//!
//! The `report` module contains the [Reporter] trait, the [PlainReporter] which prints
//! the human-readable comparison and the [JsonReporter] for machine-readable output.
//!

/// Helper methods to format run results
pub mod format;
/// The json_reporter
mod json_reporter;
/// The plain_reporter
mod plain_reporter;

use std::io::Write;

use num_bigint::BigUint;

pub use json_reporter::JsonReporter;
pub use plain_reporter::PlainReporter;

use crate::{fib::NaiveOutcome, timing::TimingSample, Index};

/// Everything a single comparison run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The index both strategies computed.
    pub n: Index,
    /// Value and call count of the naive recursion.
    pub naive: NaiveOutcome,
    /// Clock readings around the naive recursion.
    pub naive_timing: TimingSample,
    /// Peak heap usage during the naive recursion, if an allocator was attached.
    pub naive_peak_mem: Option<usize>,
    /// F(n) computed by tabulation.
    pub tabulated: BigUint,
    /// Clock readings around the tabulation.
    pub tabulated_timing: TimingSample,
    /// Peak heap usage during the tabulation, if an allocator was attached.
    pub tabulated_peak_mem: Option<usize>,
}

/// The trait for reporting the results of a run.
pub trait Reporter {
    /// Write the report of a run to `out`.
    fn report(&self, report: &RunReport, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Descriptive space behavior of naive recursion, not measured.
pub const NAIVE_SPACE: &str = "O(n) call stack depth";
/// Descriptive space behavior of tabulation, not measured.
pub const TABULATED_SPACE: &str = "O(n) array/list storage";
