//! Subcommand handlers
//!
//! Each handler reads its input, runs the library and prints to stdout. Diagnostics go
//! through the logger so they end up on stderr.

use crate::error::{CliError, Result};
use rexx_analysis::collect_document_symbols;
use rexx_config::RexxConfig;
use rexx_parser::rexx::vocabulary::Vocabulary;
use rexx_parser::{classify, compute_indent, reindent, LexState, LineSource, TextBuffer};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Flags of the `indent` subcommand
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentCommand {
    /// 1-based line to compute the indentation of
    pub line: Option<usize>,
    pub check: bool,
    pub write: bool,
}

pub fn highlight(path: &Path, format: &str, config: &RexxConfig) -> Result<ExitCode> {
    let source = read_source(path, config)?;
    let classification = classify(&source, LexState::Normal);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else {
        for token in &classification.tokens {
            println!(
                "{}..{} {} {:?}",
                token.span.start,
                token.span.end,
                token.kind,
                token.text(&source)
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn indent(path: &Path, command: &IndentCommand, config: &RexxConfig) -> Result<ExitCode> {
    let source = read_source(path, config)?;
    let options = config.indent_options();

    if let Some(line) = command.line {
        let buffer = TextBuffer::new(&source);
        if line > buffer.line_count() {
            log::warn!(
                "line {} is past the end of {} ({} lines)",
                line,
                path.display(),
                buffer.line_count()
            );
        }
        println!("{}", compute_indent(&buffer, line - 1, options.offset));
        return Ok(ExitCode::SUCCESS);
    }

    let reindented = reindent(&source, &options);
    let changed = reindented != source;

    if command.check {
        if changed {
            eprintln!("{} is not indented", path.display());
            return Ok(ExitCode::FAILURE);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if command.write {
        if changed {
            fs::write(path, &reindented).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("re-indented {}", path.display());
        }
        return Ok(ExitCode::SUCCESS);
    }

    print!("{}", reindented);
    Ok(ExitCode::SUCCESS)
}

pub fn outline(path: &Path, config: &RexxConfig) -> Result<ExitCode> {
    let source = read_source(path, config)?;
    for symbol in collect_document_symbols(&source) {
        println!(
            "{}\t{}\t{}",
            symbol.selection_range.start.line + 1,
            symbol.name,
            symbol.detail.unwrap_or_default()
        );
    }
    Ok(ExitCode::SUCCESS)
}

pub fn vocabulary(table: Option<&str>) -> Result<ExitCode> {
    match table {
        Some(name) => {
            let vocabulary: Vocabulary = name.parse()?;
            for word in vocabulary.words() {
                println!("{}", word);
            }
        }
        None => {
            for vocabulary in Vocabulary::ALL {
                println!("[{}]", vocabulary);
                for word in vocabulary.words() {
                    println!("{}", word);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn read_source(path: &Path, config: &RexxConfig) -> Result<String> {
    if !config.is_rexx_file(path) {
        log::warn!(
            "{} does not have a REXX extension ({})",
            path.display(),
            config.files.extensions.join(", ")
        );
    }
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
