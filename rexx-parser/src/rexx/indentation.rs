//! Indentation engine
//!
//!     Computes the indentation column for a line from the line above it. The rules look
//!     at the line being indented and at the previous code line, see
//!     [previous_line](previous_line). Finding that line needs to know which lines sit
//!     inside comments and strings, so lines above are lexed from the top of the buffer.
//!     The rules are:
//!
//!         1. `prevIndent` is the indentation of the previous code line, 0 if there is none.
//!         2. A line starting with `end` is one level left of `prevIndent`. So is a line
//!            starting with `when` or `otherwise`.
//!         3. Any other line is one level right of `prevIndent` when the code of the
//!            previous code line has `do`, `loop`, `select` or `then` as a whole word, or
//!            starts with `else`.
//!            Otherwise it stays at `prevIndent`.
//!
//!     Results never go below column 0. Nothing here can fail: an empty buffer or a line
//!     index past the end indents to 0.
//!
//! Region Re-indentation
//!
//!     [reindent] applies the rules to every line of a text, top-down, each line seeing the
//!     already re-indented lines above it. Blank lines lose their whitespace. Lines that
//!     start inside a block comment or a string are left exactly as they are.

pub mod line_source;
pub mod previous_line;
pub mod rules;

pub use line_source::{LineSource, ReverseLines, TextBuffer};
pub use previous_line::{entry_states, previous_code_line, CodeLine};
pub use rules::{indentation_of, LineKind};

use crate::rexx::lexing::line_states;
use crate::rexx::token::LexState;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INDENT_OFFSET: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndentOptions {
    /// Columns per indentation level
    pub offset: usize,
}

impl IndentOptions {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_INDENT_OFFSET,
        }
    }
}

/// Indentation column for `line` of `buffer`.
pub fn compute_indent<S>(buffer: &S, line: usize, offset: usize) -> usize
where
    S: LineSource + ?Sized,
{
    let states = entry_states(buffer, line.min(buffer.line_count()));
    indent_with_states(buffer, line, offset, &states)
}

/// [compute_indent] with the entry state of the lines above `line` already known.
pub(crate) fn indent_with_states<S>(
    buffer: &S,
    line: usize,
    offset: usize,
    states: &[LexState],
) -> usize
where
    S: LineSource + ?Sized,
{
    let kind = buffer.line(line).map_or(LineKind::Plain, LineKind::of);
    let Some(previous) = previous_code_line(buffer.lines_before(line), states) else {
        return 0;
    };
    let prev_indent = indentation_of(previous.text);

    match kind {
        LineKind::Close | LineKind::Mid => prev_indent.saturating_sub(offset),
        LineKind::Plain if rules::opens_block(previous.code) => prev_indent + offset,
        LineKind::Plain => prev_indent,
    }
}

/// Re-indent every line of `source` with spaces.
///
/// Line endings (`\n` or `\r\n`) and a trailing newline are kept as they are.
pub fn reindent(source: &str, options: &IndentOptions) -> String {
    let states = line_states(source, LexState::Normal);
    let mut lines: Vec<String> = Vec::with_capacity(states.len());
    let mut endings: Vec<&str> = Vec::with_capacity(states.len());

    for (index, raw) in source.split('\n').enumerate() {
        let (text, ending) = match raw.strip_suffix('\r') {
            Some(text) => (text, "\r"),
            None => (raw, ""),
        };
        endings.push(ending);

        if !states[index].is_normal() {
            lines.push(text.to_string());
            continue;
        }
        let body = text.trim_start();
        if body.trim_end().is_empty() {
            lines.push(String::new());
            continue;
        }

        lines.push(body.to_string());
        let column = indent_with_states(lines.as_slice(), index, options.offset, &states);
        lines[index] = format!("{}{}", " ".repeat(column), body);
    }

    log::debug!("re-indented {} lines (offset {})", lines.len(), options.offset);

    let mut out = String::with_capacity(source.len());
    for (index, (line, ending)) in lines.iter().zip(endings).enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(line);
        out.push_str(ending);
    }
    out
}
