//! Timing harness and report rendering.
//!
//! One run times each kernel once on its fixed input and renders a
//! fixed-format report. Rendering goes through `Display` so the exact
//! output can be tested without touching stdout.

use std::fmt;
use std::time::{Duration, Instant};

use crate::fib::{fib_iterative, fib_recursive};

/// Index fed to the recursive kernel. Small, because each call past
/// the base cases doubles the work.
pub const RECURSIVE_INPUT: i32 = 35;

/// Index fed to the iterative kernel.
pub const ITERATIVE_INPUT: i32 = 1000;

/// A computed value together with how long it took.
#[derive(Debug, Clone, Copy)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Run `f` once, measuring elapsed wall-clock time on the monotonic
/// clock.
pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// One complete run of the benchmark: both kernels, both timings.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub recursive: Timed<i64>,
    pub iterative: Timed<i64>,
}

impl Report {
    /// Time both kernels on their fixed inputs, recursive first.
    pub fn collect() -> Self {
        Report {
            recursive: timed(|| fib_recursive(RECURSIVE_INPUT)),
            iterative: timed(|| fib_iterative(ITERATIVE_INPUT)),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "C++ Fibonacci Results:")?;
        writeln!(
            f,
            "Recursive F({RECURSIVE_INPUT}) = {} in {}ms",
            self.recursive.value,
            self.recursive.elapsed.as_millis()
        )?;
        writeln!(
            f,
            "Iterative F({ITERATIVE_INPUT}) = {} in {}μs",
            self.iterative.value,
            self.iterative.elapsed.as_micros()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn timed_passes_the_value_through() {
        let t = timed(|| 7i64);
        assert_eq!(t.value, 7);
    }

    #[test]
    fn report_template_is_fixed() {
        let report = Report {
            recursive: Timed {
                value: 9227465,
                elapsed: Duration::from_millis(42),
            },
            iterative: Timed {
                value: 817770325994397771,
                elapsed: Duration::from_micros(7),
            },
        };
        assert_eq!(
            report.to_string(),
            "C++ Fibonacci Results:\n\
             Recursive F(35) = 9227465 in 42ms\n\
             Iterative F(1000) = 817770325994397771 in 7μs\n"
        );
    }

    #[test]
    fn durations_truncate_to_whole_units() {
        let report = Report {
            recursive: Timed {
                value: 0,
                elapsed: Duration::from_micros(1999),
            },
            iterative: Timed {
                value: 0,
                elapsed: Duration::from_nanos(2999),
            },
        };
        let text = report.to_string();
        assert!(text.contains("in 1ms"), "got: {text}");
        assert!(text.contains("in 2μs"), "got: {text}");
    }
}
