//! Debug demo - a small numeric program for practicing breakpoint debugging
//!
//! The library exposes the two numeric routines (squares with a running
//! total, Fibonacci sequence) and the driver the `debug-demo` binary runs,
//! so tests can exercise everything in-process.

pub mod common;
pub mod driver;
pub mod fibonacci;
pub mod squares;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use squares::SquareRecord;
