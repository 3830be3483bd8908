//! Stable exit codes for loxbench commands.

/// Command succeeded; any scanned input was clean.
pub const OK: i32 = 0;
/// Invalid invocation or I/O failure (missing file, unwritable destination).
pub const INVALID: i32 = 1;
/// Scan finished but the input contained lexical errors (sysexits EX_DATAERR).
pub const SCAN_ERRORS: i32 = 65;
