//! Previous code line
//!
//!     The indentation of a line is decided by the nearest line above it that holds code.
//!     Walking upwards, these lines are passed over:
//!
//!         - blank lines
//!         - lines holding nothing but comments (`--`, `#` or `/* ... */`)
//!         - lines lying wholly inside a block comment or a string opened further up
//!
//!     Whether a line starts inside a comment or string is not something the line can tell
//!     by itself, so the scan is given the entry state of every line (see [entry_states]).
//!     A block comment spanning lines is thereby skipped as a unit: its closing line, its
//!     body, and its opening line unless code precedes the `/*` there.
//!
//!     The code of a line found this way excludes the tail of a region continued from the
//!     line above, and any trailing comments. Only that part is looked at for block openers.

use super::line_source::LineSource;
use crate::rexx::lexing::line_classification::scan_line;
use crate::rexx::token::{HighlightKind, LexState};
use std::ops::Range;

/// A line found by the backward scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeLine<'a> {
    pub index: usize,
    /// The full line, used for its indentation
    pub text: &'a str,
    /// The part of the line holding code, used for block openers
    pub code: &'a str,
}

/// The state each of the first `count` lines of `buffer` is entered in.
pub fn entry_states<S>(buffer: &S, count: usize) -> Vec<LexState>
where
    S: LineSource + ?Sized,
{
    let mut states = Vec::with_capacity(count);
    let mut state = LexState::Normal;
    for index in 0..count {
        states.push(state);
        state = scan_line(buffer.line(index).unwrap_or(""), 0, state, None).exit;
    }
    states
}

/// Find the nearest code line in `lines`, which yields `(index, text)` nearest first.
///
/// `states[index]` is the state line `index` is entered in; lines past the end of
/// `states` are taken to start as plain code.
pub fn previous_code_line<'a, I>(lines: I, states: &[LexState]) -> Option<CodeLine<'a>>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    lines.into_iter().find_map(|(index, text)| {
        let entry = states.get(index).copied().unwrap_or(LexState::Normal);
        code_span(text, entry).map(|span| CodeLine {
            index,
            text,
            code: &text[span],
        })
    })
}

/// Part of `text` holding code when the line is entered in `entry`, `None` if there is
/// nothing but whitespace and comments
fn code_span(text: &str, entry: LexState) -> Option<Range<usize>> {
    let outcome = scan_line(text, 0, entry, None);
    let mut tokens = outcome.tokens.as_slice();
    let mut start = 0;
    let mut end = text.len();

    if !entry.is_normal() {
        // empty when the region never closes on this line
        let (region, rest) = tokens.split_first()?;
        start = region.span.end;
        tokens = rest;
    }
    if outcome.exit == LexState::BlockComment {
        end = outcome.open_from.unwrap_or(end);
    }
    while let Some((last, rest)) = tokens.split_last() {
        if last.kind != HighlightKind::Comment {
            break;
        }
        end = last.span.start;
        tokens = rest;
    }

    tokens
        .iter()
        .any(|token| token.kind != HighlightKind::Comment)
        .then_some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rexx::token::Quote;

    fn scan<'a>(lines: &[&'a str]) -> Option<CodeLine<'a>> {
        let states = entry_states(lines, lines.len());
        previous_code_line(lines.iter().copied().enumerate().rev(), &states)
    }

    #[test]
    fn test_skips_blank_and_line_comments() {
        let found = scan(&["  do", "", "   -- note", "# note", "   "]).unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.code, "  do");
    }

    #[test]
    fn test_start_of_buffer() {
        assert_eq!(scan(&[]), None);
        assert_eq!(scan(&["", "-- only comments"]), None);
    }

    #[test]
    fn test_single_line_block_comment() {
        assert_eq!(scan(&["say 1", "  /* note */"]).unwrap().index, 0);
    }

    #[test]
    fn test_multiline_comment_skipped_as_unit() {
        let found = scan(&["  do", "/* a do", "   select", "   then */"]).unwrap();
        assert_eq!(found.index, 0);
    }

    #[test]
    fn test_code_before_comment_opener_counts() {
        let found = scan(&["x = 1", "  do /* start", "  end */"]).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.code, "  do ");
        assert_eq!(found.text, "  do /* start");

        let found = scan(&["  if a then /* why */"]).unwrap();
        assert_eq!(found.code, "  if a then ");
    }

    #[test]
    fn test_comment_only_opener_line_is_skipped() {
        let found = scan(&["nop", "/* a */ /* b", "*/"]).unwrap();
        assert_eq!(found.index, 0);
    }

    #[test]
    fn test_open_comment_body_is_not_code() {
        let found = scan(&["do", "/* a", "  then"]).unwrap();
        assert_eq!(found.index, 0);
    }

    #[test]
    fn test_code_after_comment_close_is_code() {
        let found = scan(&["/* a", "*/ do"]).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.code, " do");

        let found = scan(&["  /* comment", "  we do this */ x = 1"]).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.code, " x = 1");
    }

    #[test]
    fn test_continued_string_tail_is_cut() {
        let found = scan(&["say 'one", "then' x"]).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.code, " x");
    }

    #[test]
    fn test_stray_comment_close_is_code() {
        assert_eq!(scan(&["no opener here", "*/"]).unwrap().index, 1);
    }

    #[test]
    fn test_entry_states() {
        let lines = ["say 'a", "b' /* c", "d */"];
        assert_eq!(
            entry_states(&lines[..], 3),
            vec![
                LexState::Normal,
                LexState::String(Quote::Single),
                LexState::BlockComment,
            ]
        );
        assert_eq!(entry_states(&lines[..], 5).len(), 5);
    }
}
