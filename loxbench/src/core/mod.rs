//! Pure, deterministic logic: corpus synthesis, scanning, tallying.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for unit tests and
//! benchmarks.

pub mod corpus;
pub mod scanner;
pub mod tally;
