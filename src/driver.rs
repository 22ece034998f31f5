//! Demo orchestration
//!
//! Runs the two routines over the configured sample inputs and prints every
//! intermediate value, one recognizable line per step.

use std::io::Write;

use crate::common::config::Config;
use crate::common::Result;
use crate::{fibonacci, squares};

/// Run the full demo, writing all output to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    writeln!(out, "=== Simple Debug Demo ===")?;

    let numbers = &config.samples.numbers;
    writeln!(out, "Input numbers: [{}]", join(numbers))?;

    let (records, total) = squares::accumulate(numbers, out)?;
    writeln!(out, "Results: {records:?}")?;
    writeln!(out, "Total of all squares: {total}")?;

    let fib_count = config.samples.fib_count;
    let fib = fibonacci::sequence(fib_count);
    writeln!(out, "First {fib_count} Fibonacci numbers: {fib:?}")?;

    // Real division; an empty input list is not guarded against here.
    let average = total / numbers.len() as f64;
    writeln!(out, "Average square: {average}")?;

    Ok(())
}

/// Comma-separated `Display` rendering, so integral values print as `2`
/// rather than the `2.0` that `{:?}` would give.
fn join(numbers: &[f64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_output() {
        let config = Config::default();
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "=== Simple Debug Demo ===");
        assert_eq!(lines[1], "Input numbers: [2, 3, 4, 5]");
        assert_eq!(lines[2], "Number: 2, Square: 4, Total so far: 4");
        assert_eq!(lines[3], "Number: 3, Square: 9, Total so far: 13");
        assert_eq!(lines[4], "Number: 4, Square: 16, Total so far: 29");
        assert_eq!(lines[5], "Number: 5, Square: 25, Total so far: 54");
        assert!(lines[6].starts_with("Results: ["));
        assert_eq!(lines[7], "Total of all squares: 54");
        assert_eq!(
            lines[8],
            "First 8 Fibonacci numbers: [0, 1, 1, 2, 3, 5, 8, 13]"
        );
        assert_eq!(lines[9], "Average square: 13.5");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_join_renders_integral_values_bare() {
        assert_eq!(join(&[2.0, 3.5]), "2, 3.5");
        assert_eq!(join(&[]), "");
    }
}
