//! Lexer
//!
//!     This module turns REXX source into highlight tokens.
//!
//! The Lexing Pipeline
//!
//!     1. Base tokenization with the logos lexer. See [base_tokenization](base_tokenization).
//!        Only code is lexed this way; comment and string bodies are skipped over by the
//!        region scanner in [regions](regions).
//!
//!     2. Line classification. See [line_classification](line_classification). Each line is
//!        split into code tokens and regions, then every code token gets a category by the
//!        priority rules (stage names, pipes, keywords, built-ins, labels, numbers...).
//!
//!     3. The [Highlighter] strings lines together, carrying the lexical state (inside a
//!        block comment, inside a string) from one line to the next.
//!
//! Lexical State
//!
//!     Block comments can span lines, and an unterminated string continues onto the next
//!     line. Classification of a line therefore depends on the state it is entered in, and
//!     on nothing else. Hosts that re-highlight incrementally keep the per-line entry states
//!     from [line_states] and restart the [Highlighter] at the first changed line.

pub mod base_tokenization;
pub mod highlighter;
pub mod line_classification;
pub mod regions;

pub use base_tokenization::tokenize;
pub use highlighter::Highlighter;

use crate::rexx::token::{HighlightToken, LexState};
use serde::Serialize;

/// Tokens of a classified text plus the state to continue with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub tokens: Vec<HighlightToken>,
    pub exit: LexState,
}

/// Classify `text` entered in `entry`.
///
/// Never fails: anything the rules do not recognise is `PlainText`, and unterminated
/// comments or strings run to the end of `text`, with `exit` reporting the open state.
pub fn classify(text: &str, entry: LexState) -> Classification {
    let mut highlighter = Highlighter::with_state(text, entry);
    let tokens: Vec<_> = highlighter.by_ref().collect();
    log::debug!(
        "classified {} bytes into {} tokens (exit {:?})",
        text.len(),
        tokens.len(),
        highlighter.exit_state()
    );
    Classification {
        tokens,
        exit: highlighter.exit_state(),
    }
}

/// The state each line of `source` is entered in.
///
/// One entry per line as counted by splitting on `\n`, so a trailing newline adds a final
/// empty line.
pub fn line_states(source: &str, entry: LexState) -> Vec<LexState> {
    let mut states = Vec::new();
    let mut state = entry;
    let mut open_from = None;
    let mut base = 0;
    for line in source.split('\n') {
        states.push(state);
        let outcome = line_classification::scan_line(line, base, state, open_from);
        state = outcome.exit;
        open_from = outcome.open_from;
        base += line.len() + 1;
    }
    states
}
