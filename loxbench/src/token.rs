//! Token types produced by the scanner.
//!
//! Spans (`start`, `length`) are char offsets into the scanned source, not
//! byte offsets; lexemes are recovered through
//! [`Scanner::lexeme`](crate::core::scanner::Scanner::lexeme).

use std::fmt;

use serde::Serialize;

/// Lox token kinds. Lexical errors are carried by [`ErrorToken`] instead of a
/// dedicated variant, so every value here is a well-formed token.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    // Literals.
    Identifier,
    String,
    Number,
    // Keywords.
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,
    /// End of input. Scanning past the end keeps returning this.
    Eof,
}

/// A scanned token with its source span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    pub token_type: TokenType,
    /// 1-based source line the token starts on.
    pub line: u32,
    pub start: usize,
    pub length: usize,
}

/// A lexical error with the span of the offending input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorToken {
    pub line: u32,
    pub start: usize,
    pub length: usize,
    pub message: String,
}

impl fmt::Display for ErrorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}", self.line, self.message)
    }
}

pub type ScanResult = Result<Token, ErrorToken>;
