//! Comment and string regions
//!
//! Region bodies are scanned by hand: they are opaque to the classifier and their end
//! depends on the delimiter that opened them.
//!
//!     Block comments end at the first `*/`. There is no nesting, a `/*` inside a comment
//!     is just comment text.
//!
//!     Strings end at the first lone quote of the same kind. A doubled quote (`''` in a
//!     single quoted string, `""` in a double quoted one) is an embedded quote and keeps
//!     the string open. There are no escape characters.
//!
//!     Line comments (`--` or `#` followed by whitespace or end of line) run to the end of
//!     the line.
//!
//! All offsets are byte offsets into the line being scanned.

use crate::rexx::token::Quote;

/// Offset just past the `*/` closing a block comment, searching from `from`
pub fn find_comment_end(line: &str, from: usize) -> Option<usize> {
    line.get(from..)?.find("*/").map(|idx| from + idx + 2)
}

/// Offset just past the quote closing a string, searching from `from`
pub fn find_string_end(line: &str, from: usize, quote: Quote) -> Option<usize> {
    let bytes = line.as_bytes();
    let delimiter = quote.as_byte();
    let mut pos = from;
    while pos < bytes.len() {
        if bytes[pos] == delimiter {
            if bytes.get(pos + 1) == Some(&delimiter) {
                pos += 2;
                continue;
            }
            return Some(pos + 1);
        }
        pos += 1;
    }
    None
}

/// A `--` or `#` opener at `opener_end` starts a line comment only when followed by
/// whitespace or the end of the line
pub fn opens_line_comment(line: &str, opener_end: usize) -> bool {
    line.get(opener_end..)
        .and_then(|rest| rest.chars().next())
        .map_or(true, char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_end_is_first_close() {
        let line = "/* a /* b */ c */";
        assert_eq!(find_comment_end(line, 2), Some(12));
        assert_eq!(find_comment_end("/* open", 2), None);
        assert_eq!(find_comment_end("*/", 0), Some(2));
        assert_eq!(find_comment_end("ab", 9), None);
    }

    #[test]
    fn test_string_end_skips_doubled_quotes() {
        let line = "'it''s' x";
        assert_eq!(find_string_end(line, 1, Quote::Single), Some(7));
        let line = r#""say ""hi""" y"#;
        assert_eq!(find_string_end(line, 1, Quote::Double), Some(12));
    }

    #[test]
    fn test_string_end_ignores_other_quote() {
        let line = r#"'a "b" c'"#;
        assert_eq!(find_string_end(line, 1, Quote::Single), Some(9));
        assert_eq!(find_string_end("'unterminated", 1, Quote::Single), None);
        // a doubled quote at the very end keeps the string open
        assert_eq!(find_string_end("'abc''", 1, Quote::Single), None);
    }

    #[test]
    fn test_line_comment_openers() {
        assert!(opens_line_comment("-- note", 2));
        assert!(opens_line_comment("x #", 3));
        assert!(!opens_line_comment("a--b", 3));
        assert!(!opens_line_comment("#x", 1));
        assert!(!opens_line_comment("#!/usr/bin/rexx", 1));
    }
}
