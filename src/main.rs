use fibbench::{BenchRunner, PeakMemAlloc, INSTRUMENTED_SYSTEM};
use tracing::Level;

#[global_allocator]
pub static GLOBAL: &PeakMemAlloc<std::alloc::System> = &INSTRUMENTED_SYSTEM;

fn main() {
    let mut runner = match BenchRunner::new() {
        Ok(runner) => runner,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    };

    let level = if runner.config().verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    runner.set_alloc(GLOBAL);
    if let Err(err) = runner.run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
