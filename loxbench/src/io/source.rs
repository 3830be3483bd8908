//! Source file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a Lox source file into memory.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read source {}", path.display()))
}
