//! Corpus file writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::corpus;

/// Stream the corpus for `n` body lines to `path`.
///
/// Creates or truncates the file; the handle is flushed and closed before
/// returning so write failures surface here, not at drop. Fails if the
/// destination directory does not exist or is not writable. Returns the
/// number of bytes written.
pub fn write_corpus(path: &Path, n: usize) -> Result<u64> {
    let file =
        File::create(path).with_context(|| format!("create corpus {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let mut bytes = 0u64;
    for line in corpus::lines(n) {
        writeln!(writer, "{line}")
            .with_context(|| format!("write corpus {}", path.display()))?;
        bytes += line.len() as u64 + 1;
    }
    writer
        .flush()
        .with_context(|| format!("flush corpus {}", path.display()))?;
    Ok(bytes)
}
