//! Command-line entry point for loxbench.
//!
//! `gen` writes a synthetic Lox corpus, `count` scans a file and prints its
//! token count, `tokens` dumps the token stream. Exit codes are stable (see
//! [`loxbench::exit_codes`]).

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use loxbench::core::corpus;
use loxbench::count::count_file;
use loxbench::exit_codes;
use loxbench::generate::generate;
use loxbench::logging;
use loxbench::tokens::{DumpFormat, dump_file};

#[derive(Parser)]
#[command(
    name = "loxbench",
    version,
    about = "Generate Lox benchmark corpora and measure the scanner over them"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a synthetic corpus: `x = 1`, then N conditional lines.
    Gen {
        /// Body line count; the file gains one header line on top.
        #[arg(short = 'n', long, default_value_t = corpus::DEFAULT_LINES)]
        lines: usize,
        /// Destination path (created or overwritten).
        #[arg(short, long, default_value = corpus::DEFAULT_FILE_NAME)]
        out: PathBuf,
    },
    /// Scan a file to EOF and print its token count.
    Count {
        /// Lox source file to scan.
        file: PathBuf,
        /// Emit a JSON report instead of the bare count.
        #[arg(long)]
        json: bool,
    },
    /// Dump a file's token stream.
    Tokens {
        /// Lox source file to scan.
        file: PathBuf,
        /// Emit one JSON object per token.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Gen { lines, out } => cmd_gen(&out, lines),
        Command::Count { file, json } => cmd_count(&file, json),
        Command::Tokens { file, json } => cmd_tokens(&file, json),
    }
}

fn cmd_gen(out: &Path, lines: usize) -> Result<i32> {
    let report = generate(out, lines)?;
    println!(
        "wrote {} ({} lines, {} bytes)",
        report.path.display(),
        report.lines,
        report.bytes
    );
    Ok(exit_codes::OK)
}

fn cmd_count(file: &Path, json: bool) -> Result<i32> {
    let result = count_file(file)?;
    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", result.tokens);
    }
    for err in &result.errors {
        eprintln!("{err}");
    }
    Ok(if result.is_clean() {
        exit_codes::OK
    } else {
        exit_codes::SCAN_ERRORS
    })
}

fn cmd_tokens(file: &Path, json: bool) -> Result<i32> {
    let format = if json {
        DumpFormat::Json
    } else {
        DumpFormat::Plain
    };
    let errors = dump_file(file, format, std::io::stdout().lock())?;
    Ok(if errors == 0 {
        exit_codes::OK
    } else {
        exit_codes::SCAN_ERRORS
    })
}
