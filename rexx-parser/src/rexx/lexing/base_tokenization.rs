//! Base tokenization
//!
//! Runs the logos lexer over a slice of a line and reports spans relative to the whole
//! line. The line scanner starts a fresh [CodeLexer] after every comment or string region,
//! so the lexer itself never sees region bodies.

use crate::rexx::token::Token;
use logos::Logos;
use std::ops::Range;

/// A core token, or `None` for characters no pattern matches
pub type RawToken = (Option<Token>, Range<usize>);

/// Logos lexer positioned at an offset inside a line.
pub struct CodeLexer<'src> {
    inner: logos::Lexer<'src, Token>,
    offset: usize,
}

impl<'src> CodeLexer<'src> {
    /// Lex `line[from..]`. Spans are reported relative to `line`.
    pub fn new(line: &'src str, from: usize) -> Self {
        Self {
            inner: Token::lexer(&line[from..]),
            offset: from,
        }
    }
}

impl Iterator for CodeLexer<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let span = span.start + self.offset..span.end + self.offset;
        Some((result.ok(), span))
    }
}

/// Tokenize a whole string, skipping whitespace. Useful for inspecting the raw layer.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    CodeLexer::new(source, 0)
        .filter(|(token, _)| !token.is_some_and(|t| t.is_whitespace()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_line_relative() {
        let line = "say x | console";
        let tokens: Vec<_> = CodeLexer::new(line, 6).collect();
        assert_eq!(tokens[0], (Some(Token::Pipe), 6..7));
        assert_eq!(tokens[1], (Some(Token::Whitespace), 7..8));
        assert_eq!(tokens[2], (Some(Token::Symbol), 8..15));
    }

    #[test]
    fn test_tokenize_skips_whitespace() {
        let tokens = tokenize("x = 1");
        assert_eq!(
            tokens,
            vec![
                (Some(Token::Symbol), 0..1),
                (None, 2..3),
                (Some(Token::Number), 4..5),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
