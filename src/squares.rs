//! Squares with a running total
//!
//! The per-element loop is the intended breakpoint target: each iteration
//! squares one number, folds it into the total, and emits a diagnostic line
//! before the record is appended.

use std::fmt;
use std::io::Write;

use crate::common::Result;

/// One record per input element, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct SquareRecord {
    pub number: f64,
    pub square: f64,
    /// Sum of squares from the first element through this one
    pub running_total: f64,
}

impl fmt::Display for SquareRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Number: {}, Square: {}, Total so far: {}",
            self.number, self.square, self.running_total
        )
    }
}

/// Square each element and keep a running sum of the squares.
///
/// Returns one record per element (input order) plus the final sum. Each
/// diagnostic line is written to `out` after its square is computed and
/// before the record is appended; write failures propagate. An empty slice
/// yields no records, no output, and a total of 0.
pub fn accumulate<W: Write>(numbers: &[f64], out: &mut W) -> Result<(Vec<SquareRecord>, f64)> {
    tracing::debug!(count = numbers.len(), "accumulating squares");

    let mut records = Vec::with_capacity(numbers.len());
    let mut total = 0.0;

    for &number in numbers {
        let square = number * number;
        total += square;

        let record = SquareRecord {
            number,
            square,
            running_total: total,
        };
        writeln!(out, "{record}")?;
        records.push(record);
    }

    Ok((records, total))
}
