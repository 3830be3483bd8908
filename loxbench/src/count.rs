//! Orchestration for `loxbench count`.
//!
//! The count goes to stdout as a bare number so `time loxbench count FILE`
//! pipelines stay parseable; timing diagnostics are tracing-only.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::core::tally::{Tally, tally};
use crate::io::source::read_source;

/// Load `path` and tally its tokens.
pub fn count_file(path: &Path) -> Result<Tally> {
    let source = read_source(path)?;
    let start = Instant::now();
    let result = tally(&source);
    tracing::debug!(
        bytes = source.len(),
        tokens = result.tokens,
        errors = result.errors.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "scan complete"
    );
    Ok(result)
}
