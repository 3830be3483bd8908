//! Lox scanner performance harness.
//!
//! Generates deterministic Lox corpora (one `x = 1` header, then
//! `if (x > i) x = 2i` for each index) and measures the scanner over them.
//! The architecture enforces a strict separation:
//!
//! - **[`core`]**: pure, deterministic logic (corpus synthesis, scanning,
//!   token tallying). No I/O, exercised directly by unit tests and benches.
//! - **[`io`]**: side-effecting operations (corpus writing, source loading).
//!
//! Command modules ([`generate`], [`count`], [`tokens`]) coordinate core
//! logic with I/O to implement the CLI.

pub mod core;
pub mod count;
pub mod exit_codes;
pub mod generate;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod token;
pub mod tokens;
