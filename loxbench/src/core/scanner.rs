//! Lox tokenizer.
//!
//! One token per [`Scanner::scan_token`] call; the caller drives the loop
//! until [`TokenType::Eof`]. Errors come back as [`ErrorToken`] values rather
//! than panics, so a dirty input can still be scanned to the end.

use crate::token::{ErrorToken, ScanResult, Token, TokenType};

pub struct Scanner {
    // Char-indexed so token spans stay valid for multi-byte input.
    source: Vec<char>,
    line: u32,
    start: usize,
    current: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            line: 1,
            start: 0,
            current: 0,
        }
    }

    /// Recover the source text of a token.
    pub fn lexeme(&self, token: &Token) -> String {
        self.source[token.start..token.start + token.length]
            .iter()
            .collect()
    }

    /// Scan the next token. At end of input this keeps returning `Eof`.
    pub fn scan_token(&mut self) -> ScanResult {
        self.skip_whitespace();
        self.start = self.current;
        if self.is_at_end() {
            return self.make_token(TokenType::Eof);
        }

        let c = self.advance();

        if is_alpha(c) {
            return self.identifier();
        }
        if c.is_ascii_digit() {
            return self.number();
        }

        match c {
            '(' => self.make_token(TokenType::LeftParen),
            ')' => self.make_token(TokenType::RightParen),
            '{' => self.make_token(TokenType::LeftBrace),
            '}' => self.make_token(TokenType::RightBrace),
            ';' => self.make_token(TokenType::Semicolon),
            ',' => self.make_token(TokenType::Comma),
            '.' => self.make_token(TokenType::Dot),
            '-' => self.make_token(TokenType::Minus),
            '+' => self.make_token(TokenType::Plus),
            '/' => self.make_token(TokenType::Slash),
            '*' => self.make_token(TokenType::Star),
            '!' => {
                let token_type = if self.match_char('=') {
                    TokenType::BangEqual
                } else {
                    TokenType::Bang
                };
                self.make_token(token_type)
            }
            '=' => {
                let token_type = if self.match_char('=') {
                    TokenType::EqualEqual
                } else {
                    TokenType::Equal
                };
                self.make_token(token_type)
            }
            '<' => {
                let token_type = if self.match_char('=') {
                    TokenType::LessEqual
                } else {
                    TokenType::Less
                };
                self.make_token(token_type)
            }
            '>' => {
                let token_type = if self.match_char('=') {
                    TokenType::GreaterEqual
                } else {
                    TokenType::Greater
                };
                self.make_token(token_type)
            }
            '"' => self.string(),
            _ => Err(self.error_token("Unexpected character")),
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\r' | '\t') => {
                    self.advance();
                }
                Some('\n') => {
                    self.line += 1;
                    self.advance();
                }
                // A comment runs to the end of the line; a lone slash is left
                // for scan_token to emit as a Slash token.
                Some('/') if self.peek_next() == Some('/') => {
                    while !matches!(self.peek(), Some('\n') | None) {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn string(&mut self) -> ScanResult {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(self.error_token("Undetermined string"));
        }

        // Closing quote.
        self.advance();
        self.make_token(TokenType::String)
    }

    fn number(&mut self) -> ScanResult {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        self.make_token(TokenType::Number)
    }

    fn identifier(&mut self) -> ScanResult {
        while self
            .peek()
            .is_some_and(|c| is_alpha(c) || c.is_ascii_digit())
        {
            self.advance();
        }

        self.make_token(self.identifier_type())
    }

    fn make_token(&self, token_type: TokenType) -> ScanResult {
        Ok(Token {
            token_type,
            line: self.line,
            start: self.start,
            length: self.current - self.start,
        })
    }

    fn error_token(&self, message: &str) -> ErrorToken {
        ErrorToken {
            line: self.line,
            start: self.start,
            length: self.current - self.start,
            message: message.to_string(),
        }
    }

    /// Keyword dispatch on the first one or two chars, as in the classic
    /// bytecode-interpreter scanner.
    fn identifier_type(&self) -> TokenType {
        match self.source[self.start] {
            'a' => self.check_keyword(1, "nd", TokenType::And),
            'c' => self.check_keyword(1, "lass", TokenType::Class),
            'e' => self.check_keyword(1, "lse", TokenType::Else),
            'f' => match self.source.get(self.start + 1) {
                Some('a') => self.check_keyword(2, "lse", TokenType::False),
                Some('o') => self.check_keyword(2, "r", TokenType::For),
                Some('u') => self.check_keyword(2, "n", TokenType::Fun),
                _ => TokenType::Identifier,
            },
            'i' => self.check_keyword(1, "f", TokenType::If),
            'n' => self.check_keyword(1, "il", TokenType::Nil),
            'o' => self.check_keyword(1, "r", TokenType::Or),
            'p' => self.check_keyword(1, "rint", TokenType::Print),
            'r' => self.check_keyword(1, "eturn", TokenType::Return),
            's' => self.check_keyword(1, "uper", TokenType::Super),
            't' => match self.source.get(self.start + 1) {
                Some('h') => self.check_keyword(2, "is", TokenType::This),
                Some('r') => self.check_keyword(2, "ue", TokenType::True),
                _ => TokenType::Identifier,
            },
            'v' => self.check_keyword(1, "ar", TokenType::Var),
            'w' => self.check_keyword(1, "hile", TokenType::While),
            _ => TokenType::Identifier,
        }
    }

    // Allocation-free: compares the candidate chars against `rest` in place.
    fn check_keyword(&self, offset: usize, rest: &str, token_type: TokenType) -> TokenType {
        if self.current - self.start == offset + rest.len()
            && self.source[self.start + offset..self.current]
                .iter()
                .copied()
                .eq(rest.chars())
        {
            token_type
        } else {
            TokenType::Identifier
        }
    }

    fn is_at_end(&self) -> bool {
        self.current == self.source.len()
    }

    // Callers must check is_at_end first.
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }
}

fn is_alpha(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}
