//! Synthesis of the benchmark corpus.
//!
//! A corpus is one fixed header line followed by `n` conditional-assignment
//! lines, every line newline-terminated:
//!
//! ```text
//! x = 1
//! if (x > 0) x = 0
//! if (x > 1) x = 2
//! ...
//! ```
//!
//! Synthesis is a pure function of `n`, so regenerating with the same count
//! yields byte-identical output.

/// Body line count of the canonical corpus.
pub const DEFAULT_LINES: usize = 10_000;

/// Default output name for the canonical corpus.
pub const DEFAULT_FILE_NAME: &str = "10_000_lines.lox";

/// The fixed first line of every corpus.
pub const HEADER: &str = "x = 1";

/// Tokens per body line plus the header's three, for a clean corpus.
///
/// Each `if (x > i) x = 2i` line scans to nine tokens, so a corpus with `n`
/// body lines tallies `9n + 3` tokens before `Eof`.
pub fn expected_tokens(n: usize) -> usize {
    9 * n + 3
}

/// Body line for index `i`: a conditional guarding an assignment of `2*i`.
pub fn body_line(i: usize) -> String {
    format!("if (x > {i}) x = {}", i * 2)
}

/// All corpus lines for `n` body lines: the header first, then
/// `body_line(0)` through `body_line(n - 1)`. Lines carry no terminator;
/// writers append one newline per line.
pub fn lines(n: usize) -> impl Iterator<Item = String> {
    std::iter::once(HEADER.to_string()).chain((0..n).map(body_line))
}

/// The whole corpus as a single newline-terminated string.
pub fn synthesize(n: usize) -> String {
    // Body lines top out around 24 chars at the canonical size.
    let mut out = String::with_capacity(HEADER.len() + 1 + n * 24);
    for line in lines(n) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
