#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_imports,
    unused_qualifications,
    missing_docs
)]

//! fibbench compares two ways of computing the n-th Fibonacci number: naive double
//! recursion and bottom-up tabulation (dynamic programming).
//!
//! Both strategies are timed with a monotonic clock, the recursion additionally reports
//! how often it was entered. The results must agree, otherwise the run fails.
//!
//! # Entry points
//! * [BenchRunner] runs the comparison and prints the report.
//! * [fib::naive_recursive] and [fib::tabulated] are the strategies themselves.
//!
//! # Example
//! ```rust
//! use fibbench::{BenchRunner, Config, Index};
//!
//! let mut config = Config::default();
//! config.set_index(Index::new(10));
//! let mut out = Vec::new();
//! let report = BenchRunner::new_with_config(config).run_to(&mut out).unwrap();
//! assert_eq!(report.naive.calls, 177);
//! assert!(String::from_utf8(out).unwrap().contains("fib=55"));
//! ```
//!
//! ## Reporting
//! See the [report] module for the plain and JSON output formats.
//!
//! ## Peak memory
//! Attach a [PeakMemAlloc] with [BenchRunner::set_alloc] to also report the peak heap
//! usage of each strategy.

pub use peakmem_alloc::*;

pub(crate) mod bench_runner;
pub(crate) mod config;
pub(crate) mod error;
/// The Fibonacci strategies
pub mod fib;
pub(crate) mod index;
/// The module to report run results
pub mod report;
/// Monotonic timing of a single computation
pub mod timing;

pub use bench_runner::BenchRunner;
pub use config::Config;
pub use error::{FibError, Result};
pub use index::{Index, DEFAULT_INDEX};

/// A function that is opaque to the optimizer, used to prevent the compiler from
/// optimizing away the computations that are timed.
pub use std::hint::black_box;
