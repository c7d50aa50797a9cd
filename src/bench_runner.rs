use std::{
    alloc::GlobalAlloc,
    io::{self, Write},
};

use peakmem_alloc::*;
use tracing::{debug, warn};

use crate::{
    black_box,
    error::{FibError, Result},
    fib::{naive_recursive, tabulated, NAIVE_MAX_INDEX},
    report::{JsonReporter, PlainReporter, Reporter, RunReport},
    timing::timed,
    Config,
};

pub(crate) type Alloc = &'static dyn PeakMemAllocTrait;

/// Above this index naive recursion runs for a long time.
const SLOW_NAIVE_INDEX: u64 = 45;

/// Runs both Fibonacci strategies for one index and reports the comparison.
///
/// Each call to [BenchRunner::run] is independent: naive recursion first, then
/// tabulation, each timed on its own, then the report.
pub struct BenchRunner {
    config: Config,
    alloc: Option<Alloc>,
    reporter: Box<dyn Reporter>,
}

impl BenchRunner {
    /// Creates a runner from the command line arguments.
    pub fn new() -> Result<Self> {
        Ok(Self::new_with_config(Config::new()?))
    }

    /// Creates a runner with the given config.
    pub fn new_with_config(config: Config) -> Self {
        use yansi::Condition;
        yansi::whenever(Condition::TTY_AND_COLOR);

        let reporter: Box<dyn Reporter> = if config.json {
            Box::new(JsonReporter::new())
        } else {
            Box::new(PlainReporter::new())
        };
        BenchRunner {
            config,
            alloc: None,
            reporter,
        }
    }

    /// Set the peak mem allocator to be used for the run.
    /// This will report the peak memory consumption of each strategy.
    pub fn set_alloc<A: GlobalAlloc + 'static>(&mut self, alloc: &'static PeakMemAlloc<A>) {
        self.alloc = Some(alloc);
    }

    /// Replace the reporter, e.g. with a custom one.
    pub fn set_reporter<R: Reporter + 'static>(&mut self, reporter: R) {
        self.reporter = Box::new(reporter);
    }

    /// Access the config of the runner.
    pub fn config(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Run both strategies and print the report to stdout.
    pub fn run(&self) -> Result<RunReport> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        let report = self.run_to(&mut lock)?;
        lock.flush()?;
        Ok(report)
    }

    /// Run both strategies and write the report to `out`.
    ///
    /// Nothing is written if the index is rejected or the strategies disagree.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<RunReport> {
        let report = self.compare()?;
        self.reporter.report(&report, out)?;
        Ok(report)
    }

    /// Run both strategies and return the results without reporting them.
    pub fn compare(&self) -> Result<RunReport> {
        let n = self.config.index;
        if n.get() > NAIVE_MAX_INDEX {
            return Err(FibError::NaiveIndexTooLarge {
                n: n.get(),
                max: NAIVE_MAX_INDEX,
            });
        }
        if n.get() > SLOW_NAIVE_INDEX {
            warn!(n = n.get(), "naive recursion is exponential, this may take very long");
        }

        debug!(n = n.get(), "running naive recursion");
        self.reset_peak_memory();
        // NAIVE_MAX_INDEX fits into u32
        let (naive, naive_timing) = timed(|| naive_recursive(black_box(n.get() as u32)));
        let naive_peak_mem = self.peak_memory();
        debug!(
            calls = %naive.calls,
            elapsed = ?naive_timing.elapsed(),
            "naive recursion finished"
        );

        debug!(n = n.get(), "running tabulation");
        self.reset_peak_memory();
        let (tabulated, tabulated_timing) = timed(|| tabulated(black_box(n.get())));
        let tabulated_peak_mem = self.peak_memory();
        debug!(elapsed = ?tabulated_timing.elapsed(), "tabulation finished");

        if naive.value_big() != tabulated {
            return Err(FibError::ResultMismatch { n: n.get() });
        }

        Ok(RunReport {
            n,
            naive,
            naive_timing,
            naive_peak_mem,
            tabulated,
            tabulated_timing,
            tabulated_peak_mem,
        })
    }

    fn reset_peak_memory(&self) {
        if let Some(alloc) = self.alloc {
            alloc.reset_peak_memory();
        }
    }

    fn peak_memory(&self) -> Option<usize> {
        self.alloc.map(|alloc| alloc.get_peak_memory())
    }
}
