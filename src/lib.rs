//! fibbench - naive vs iterative Fibonacci timing
//!
//! Times a deliberately slow doubly-recursive Fibonacci against the
//! linear two-accumulator version and prints both results with their
//! elapsed wall-clock times.

pub mod bench;
pub mod error;
pub mod fib;

// Re-export commonly used items
pub use bench::{Report, Timed, ITERATIVE_INPUT, RECURSIVE_INPUT};
pub use error::{BenchError, BenchResult};
pub use fib::{fib_iterative, fib_recursive};

/// Run the whole benchmark and print the report to stdout.
///
/// This is a convenience function that handles the full sequence:
/// time both kernels, render the report, write it out.
///
/// # Example
/// ```no_run
/// fibbench::run().unwrap();
/// ```
pub fn run() -> BenchResult<()> {
    use std::io::Write;

    let report = Report::collect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(out, "{report}")?;
    out.flush()?;
    Ok(())
}
