//! Token tally: drive the scanner to `Eof` and count what it produced.
//!
//! This is the measured loop of the harness. It never stops early: error
//! tokens are collected and scanning continues, so a dirty input still
//! yields a complete tally.

use serde::Serialize;

use crate::core::scanner::Scanner;
use crate::token::{ErrorToken, TokenType};

/// Outcome of scanning a source to the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Tokens scanned, exclusive of `Eof`.
    pub tokens: usize,
    /// Lexical errors encountered, in source order.
    pub errors: Vec<ErrorToken>,
}

impl Tally {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Scan `source` to `Eof`, counting tokens and collecting errors.
pub fn tally(source: &str) -> Tally {
    let mut scanner = Scanner::new(source);
    let mut tokens = 0;
    let mut errors = Vec::new();
    loop {
        match scanner.scan_token() {
            Ok(token) if token.token_type == TokenType::Eof => break,
            Ok(_) => tokens += 1,
            Err(err) => errors.push(err),
        }
    }
    Tally { tokens, errors }
}
