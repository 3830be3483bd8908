//! Test-only helpers for corpus fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::corpus;

/// Write a corpus with `n` body lines into `dir` and return its path.
pub fn write_corpus_fixture(dir: &Path, n: usize) -> PathBuf {
    let path = dir.join(format!("corpus_{n}.lox"));
    fs::write(&path, corpus::synthesize(n)).expect("write corpus fixture");
    path
}

/// Write a source file with a guaranteed lexical error into `dir`.
pub fn write_dirty_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("dirty.lox");
    fs::write(&path, "x = 1\ny = @\n").expect("write dirty fixture");
    path
}
