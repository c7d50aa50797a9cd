use std::io::Write;

use miniserde::Serialize;

use super::{Reporter, RunReport};

#[derive(Serialize)]
struct NaiveEntry {
    fib: String,
    calls: String,
    time_secs: f64,
    peak_mem_bytes: Option<u64>,
}

#[derive(Serialize)]
struct TabulatedEntry {
    fib: String,
    time_secs: f64,
    peak_mem_bytes: Option<u64>,
}

#[derive(Serialize)]
struct JsonReport {
    n: u64,
    naive: NaiveEntry,
    tabulated: TabulatedEntry,
}

impl From<&RunReport> for JsonReport {
    fn from(report: &RunReport) -> Self {
        JsonReport {
            n: report.n.get(),
            naive: NaiveEntry {
                fib: report.naive.value.to_string(),
                calls: report.naive.calls.to_string(),
                time_secs: report.naive_timing.as_secs_f64(),
                peak_mem_bytes: report.naive_peak_mem.map(|bytes| bytes as u64),
            },
            tabulated: TabulatedEntry {
                fib: report.tabulated.to_string(),
                time_secs: report.tabulated_timing.as_secs_f64(),
                peak_mem_bytes: report.tabulated_peak_mem.map(|bytes| bytes as u64),
            },
        }
    }
}

#[derive(Clone, Copy)]
/// The JsonReporter prints the run as a single JSON object.
///
/// Fibonacci numbers and call counts are emitted as decimal strings, since they
/// can exceed what JSON numbers represent exactly.
///
/// e.g.
/// ```text
/// {"n":10,"naive":{"fib":"55","calls":"177","time_secs":1.2e-6,"peak_mem_bytes":null},"tabulated":{...}}
/// ```
pub struct JsonReporter {}

impl Reporter for JsonReporter {
    fn report(&self, report: &RunReport, out: &mut dyn Write) -> std::io::Result<()> {
        let json = miniserde::json::to_string(&JsonReport::from(report));
        writeln!(out, "{}", json)
    }
}

impl JsonReporter {
    /// Create a new JsonReporter
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}
