//! Lazy highlighter
//!
//! Iterates highlight tokens over a whole text, one line at a time. A comment or string that
//! spans several lines is held back until it closes (or the text ends) and then emitted as a
//! single token covering every line it touches.

use super::line_classification::scan_line;
use crate::rexx::token::{HighlightToken, LexState};
use std::collections::VecDeque;

pub struct Highlighter<'src> {
    source: &'src str,
    /// Start of the next line to scan
    cursor: usize,
    state: LexState,
    /// Start of a region continued from an earlier line
    open_from: Option<usize>,
    queue: VecDeque<HighlightToken>,
}

impl<'src> Highlighter<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_state(source, LexState::Normal)
    }

    /// Start highlighting `source` as if it were entered in `state`. Use this to restart
    /// at a line boundary with the state recorded for that line.
    pub fn with_state(source: &'src str, state: LexState) -> Self {
        Self {
            source,
            cursor: 0,
            state,
            open_from: None,
            queue: VecDeque::new(),
        }
    }

    /// State after everything consumed so far. Once the iterator is exhausted this is the
    /// state the text following `source` must be entered in.
    pub fn exit_state(&self) -> LexState {
        self.state
    }

    fn advance_line(&mut self) {
        let rest = &self.source[self.cursor..];
        let (line, next) = match rest.find('\n') {
            Some(idx) => (&rest[..idx], self.cursor + idx + 1),
            None => (rest, self.source.len()),
        };

        let outcome = scan_line(line, self.cursor, self.state, self.open_from);
        self.queue.extend(outcome.tokens);
        self.state = outcome.exit;
        self.open_from = outcome.open_from;
        self.cursor = next;
    }
}

impl Iterator for Highlighter<'_> {
    type Item = HighlightToken;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(token);
            }
            if self.cursor < self.source.len() {
                self.advance_line();
                continue;
            }
            // unterminated region runs to the end of the text
            let start = self.open_from.take()?;
            let kind = self.state.region_kind()?;
            log::trace!("unterminated {} from byte {}", kind, start);
            return Some(HighlightToken::new(kind, start..self.source.len()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rexx::token::{HighlightKind, Quote};

    #[test]
    fn test_multiline_comment_is_one_token() {
        let source = "/* comment \n spanning lines */ do";
        let tokens: Vec<_> = Highlighter::new(source).collect();
        assert_eq!(
            tokens,
            vec![
                HighlightToken::new(HighlightKind::Comment, 0..30),
                HighlightToken::new(HighlightKind::Keyword, 31..33),
            ]
        );
    }

    #[test]
    fn test_unterminated_comment_runs_to_end() {
        let source = "say 1\n/* open\nmore\n";
        let mut highlighter = Highlighter::new(source);
        let tokens: Vec<_> = highlighter.by_ref().collect();
        assert_eq!(
            tokens.last(),
            Some(&HighlightToken::new(HighlightKind::Comment, 6..source.len()))
        );
        assert_eq!(highlighter.exit_state(), LexState::BlockComment);
    }

    #[test]
    fn test_restart_inside_string() {
        let source = "continued' x";
        let mut highlighter = Highlighter::with_state(source, LexState::String(Quote::Single));
        assert_eq!(
            highlighter.next(),
            Some(HighlightToken::new(HighlightKind::String, 0..10))
        );
        assert_eq!(
            highlighter.next(),
            Some(HighlightToken::new(HighlightKind::PlainText, 11..12))
        );
        assert_eq!(highlighter.next(), None);
        assert_eq!(highlighter.exit_state(), LexState::Normal);
    }

    #[test]
    fn test_empty_source_keeps_entry_state() {
        let mut highlighter = Highlighter::with_state("", LexState::BlockComment);
        assert_eq!(highlighter.next(), None);
        assert_eq!(highlighter.exit_state(), LexState::BlockComment);
    }
}
