use std::io::Write;

use yansi::Paint;

use super::{
    format::{bytes_to_string, format_secs, format_with_separators},
    Reporter, RunReport, NAIVE_SPACE, TABULATED_SPACE,
};

#[derive(Clone, Copy)]
/// The PlainReporter prints the comparison as aligned text lines.
/// This is the default reporter.
///
/// e.g.
/// ```text
/// n=40
/// Naive recursion: fib=102,334,155 | calls=331,160,281 | time=12.3456s | space=O(n) call stack depth
/// DP (table):      fib=102,334,155 | time=0.000012s | space=O(n) array/list storage
/// ```
pub struct PlainReporter {}

impl Reporter for PlainReporter {
    fn report(&self, report: &RunReport, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}", format!("n={}", report.n).bold())?;

        let mut naive = vec![
            format!("fib={}", format_with_separators(report.naive.value)),
            format!("calls={}", format_with_separators(report.naive.calls)),
            format!("time={}", format_secs(report.naive_timing.elapsed(), 4)),
            format!("space={}", NAIVE_SPACE),
        ];
        if let Some(peak) = report.naive_peak_mem {
            naive.push(peak_mem_str(peak));
        }
        let mut tabulated = vec![
            format!("fib={}", format_with_separators(&report.tabulated)),
            format!("time={}", format_secs(report.tabulated_timing.elapsed(), 6)),
            format!("space={}", TABULATED_SPACE),
        ];
        if let Some(peak) = report.tabulated_peak_mem {
            tabulated.push(peak_mem_str(peak));
        }

        self.print_line(out, "Naive recursion:", &naive)?;
        self.print_line(out, "DP (table):", &tabulated)
    }
}

impl PlainReporter {
    /// Create a new PlainReporter
    pub fn new() -> Self {
        Self {}
    }

    fn print_line(
        &self,
        out: &mut dyn Write,
        label: &str,
        columns: &[String],
    ) -> std::io::Result<()> {
        // Both labels are padded to the same width so the fib columns line up
        const LABEL_WIDTH: usize = 17;
        let padding = LABEL_WIDTH.saturating_sub(label.chars().count());
        writeln!(
            out,
            "{}{}{}",
            label.cyan(),
            " ".repeat(padding),
            columns.join(" | ")
        )
    }
}

impl Default for PlainReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn peak_mem_str(bytes: usize) -> String {
    format!("peak_mem={}", bytes_to_string(bytes as u64).bright_cyan().bold())
}
