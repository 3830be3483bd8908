//! Orchestration for `loxbench tokens`: dump the token stream of a file.
//!
//! The plain format is the classic bytecode-interpreter trace: a
//! right-aligned line number when the line changes, a `|` continuation
//! marker otherwise, then the token type and lexeme.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::core::scanner::Scanner;
use crate::io::source::read_source;
use crate::token::TokenType;

/// Output format for the dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    /// Line-prefixed columns for reading.
    Plain,
    /// One JSON object per token for machines.
    Json,
}

#[derive(Serialize)]
struct TokenRecord {
    token_type: TokenType,
    line: u32,
    start: usize,
    length: usize,
    lexeme: String,
}

#[derive(Serialize)]
struct ErrorRecord<'a> {
    error: &'a str,
    line: u32,
    start: usize,
    length: usize,
}

/// Load `path` and dump its token stream to `out`.
///
/// Returns the number of error tokens encountered.
pub fn dump_file<W: Write>(path: &Path, format: DumpFormat, out: W) -> Result<usize> {
    let source = read_source(path)?;
    dump(&source, format, out)
}

/// Dump the token stream of `source` to `out`, `Eof` included.
///
/// Returns the number of error tokens encountered.
pub fn dump<W: Write>(source: &str, format: DumpFormat, mut out: W) -> Result<usize> {
    let mut scanner = Scanner::new(source);
    let mut previous_line = None;
    let mut errors = 0;
    loop {
        let result = scanner.scan_token();
        let line = match &result {
            Ok(token) => token.line,
            Err(err) => err.line,
        };

        match format {
            DumpFormat::Plain => {
                if previous_line == Some(line) {
                    write!(out, "   |")?;
                } else {
                    write!(out, "{line:>4}")?;
                }
                match &result {
                    Ok(token) => {
                        writeln!(out, " {:?} '{}'", token.token_type, scanner.lexeme(token))?;
                    }
                    Err(err) => writeln!(out, " error: {}", err.message)?,
                }
            }
            DumpFormat::Json => {
                let rendered = match &result {
                    Ok(token) => serde_json::to_string(&TokenRecord {
                        token_type: token.token_type,
                        line: token.line,
                        start: token.start,
                        length: token.length,
                        lexeme: scanner.lexeme(token),
                    })?,
                    Err(err) => serde_json::to_string(&ErrorRecord {
                        error: &err.message,
                        line: err.line,
                        start: err.start,
                        length: err.length,
                    })?,
                };
                writeln!(out, "{rendered}")?;
            }
        }

        previous_line = Some(line);
        match result {
            Ok(token) if token.token_type == TokenType::Eof => break,
            Ok(_) => {}
            Err(_) => errors += 1,
        }
    }
    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn dump_to_string(source: &str, format: DumpFormat) -> (String, usize) {
        let mut out = Vec::new();
        let errors = dump(source, format, &mut out).expect("dump");
        (String::from_utf8(out).expect("utf8"), errors)
    }

    #[test]
    fn plain_format_marks_line_continuations() {
        let (rendered, errors) = dump_to_string("x = 1\n", DumpFormat::Plain);
        assert_eq!(
            rendered,
            "   1 Identifier 'x'\n   | Equal '='\n   | Number '1'\n   2 Eof ''\n"
        );
        assert_eq!(errors, 0);
    }

    #[test]
    fn plain_format_reports_errors_inline() {
        let (rendered, errors) = dump_to_string("@", DumpFormat::Plain);
        assert!(rendered.starts_with("   1 error: Unexpected character\n"));
        assert_eq!(errors, 1);
    }

    #[test]
    fn json_format_emits_one_object_per_token() {
        let (rendered, errors) = dump_to_string("x = 1\n", DumpFormat::Json);
        let records: Vec<Value> = rendered
            .lines()
            .map(|line| serde_json::from_str(line).expect("valid json"))
            .collect();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0]["token_type"], "identifier");
        assert_eq!(records[0]["lexeme"], "x");
        assert_eq!(records[2]["token_type"], "number");
        assert_eq!(records[3]["token_type"], "eof");
        assert_eq!(errors, 0);
    }

    #[test]
    fn json_format_shapes_errors_distinctly() {
        let (rendered, errors) = dump_to_string("x @", DumpFormat::Json);
        let second: Value = serde_json::from_str(rendered.lines().nth(1).expect("second line"))
            .expect("valid json");

        assert_eq!(second["error"], "Unexpected character");
        assert_eq!(second["line"], 1);
        assert_eq!(errors, 1);
    }

    #[test]
    fn dump_file_reads_from_disk() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("a.lox");
        std::fs::write(&path, "else\n").expect("write");

        let mut out = Vec::new();
        let errors = dump_file(&path, DumpFormat::Plain, &mut out).expect("dump");
        let rendered = String::from_utf8(out).expect("utf8");

        assert!(rendered.starts_with("   1 Else 'else'\n"));
        assert_eq!(errors, 0);
    }
}
