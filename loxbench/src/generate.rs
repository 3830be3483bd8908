//! Orchestration for `loxbench gen`.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;

use crate::io::corpus_store::write_corpus;

/// Summary of a generated corpus file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenReport {
    pub path: PathBuf,
    /// Total lines written, header included.
    pub lines: usize,
    pub bytes: u64,
}

/// Generate a corpus with `n` body lines at `path`.
///
/// One pass, create-or-truncate; the same `path` and `n` always produce
/// byte-identical output.
pub fn generate(path: &Path, n: usize) -> Result<GenReport> {
    let start = Instant::now();
    let bytes = write_corpus(path, n)?;
    tracing::debug!(
        bytes,
        lines = n + 1,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "corpus written"
    );
    Ok(GenReport {
        path: path.to_path_buf(),
        lines: n + 1,
        bytes,
    })
}
