//! Indentation rules
//!
//! The indenter only looks at two lines: the line being indented and the previous code
//! line. Nothing here tracks nesting depth, `end` simply steps back one level from
//! wherever the previous code line sits.

use once_cell::sync::Lazy;
use regex::Regex;

/// Columns a tab advances to (next multiple of)
pub const TAB_WIDTH: usize = 8;

/// Words that open a block on the line after them
static BLOCK_OPENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:do|loop|select|then)\b").unwrap());

/// How the line being indented relates to the previous code line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `end`
    Close,
    /// `when` or `otherwise`
    Mid,
    Plain,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        let word = leading_word(line);
        if word.eq_ignore_ascii_case("end") {
            LineKind::Close
        } else if word.eq_ignore_ascii_case("when") || word.eq_ignore_ascii_case("otherwise") {
            LineKind::Mid
        } else {
            LineKind::Plain
        }
    }
}

/// First word after leading whitespace, empty if the line starts with anything else
pub fn leading_word(line: &str) -> &str {
    let rest = line.trim_start();
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || "_@#$!?".contains(c)))
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Column of the first non-blank character
pub fn indentation_of(line: &str) -> usize {
    let mut column = 0;
    for c in line.chars() {
        match c {
            ' ' => column += 1,
            '\t' => column = (column / TAB_WIDTH + 1) * TAB_WIDTH,
            _ => break,
        }
    }
    column
}

/// True if the code on a line makes the next line one level deeper: it has `do`, `loop`,
/// `select` or `then` as a whole word anywhere, or starts with `else`.
pub fn opens_block(code: &str) -> bool {
    leading_word(code).eq_ignore_ascii_case("else") || BLOCK_OPENER.is_match(code)
}
