//! Iterative Fibonacci sequence generation

/// First `count` Fibonacci terms, starting 0, 1, 1, 2, 3, ...
///
/// A count of zero or less (negative inputs included) yields an empty
/// sequence; no input is an error.
pub fn sequence(count: i64) -> Vec<u64> {
    tracing::debug!(count, "generating fibonacci sequence");

    if count <= 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![0];
    }

    let mut terms = vec![0, 1];
    for i in 2..count as usize {
        let next = terms[i - 1] + terms[i - 2];
        terms.push(next);
    }
    terms
}
