//! Core token definitions
//!
//! Tokens produced by the logos lexer for code regions. Comment and string bodies never
//! reach this lexer: the scanner switches to a hand written region scan as soon as it
//! sees an opener token (`/*`, a quote, or a `--` / `#` line comment opener).
//!
//! Characters no pattern matches (operators such as `=`, `+`, `(`) come back from logos as
//! errors; the scanner turns them into plain text.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Region openers
    #[token("/*")]
    BlockCommentOpen,
    #[token("*/")]
    BlockCommentClose,
    #[token("--")]
    DoubleDash,
    #[token("#")]
    Hash,
    #[token("'")]
    SingleQuote,
    #[token("\"")]
    DoubleQuote,

    // Pipelines. `||` is also REXX concatenation; the lexer can't tell them apart
    #[token("||")]
    DoublePipe,
    #[token("|")]
    Pipe,

    #[token(":")]
    Colon,

    // Digits with at most one decimal point
    #[regex(r"[0-9]+(\.[0-9]*)?|\.[0-9]+")]
    Number,

    // REXX symbol: letters, digits and _@#$!?. but never starting with a digit, a dot or `#`
    #[regex(r"[A-Za-z_@$!?][A-Za-z0-9_@#$!?.]*")]
    Symbol,

    #[regex(r"[ \t\r\x0C]+")]
    Whitespace,

    #[token("\n")]
    Newline,
}

impl Token {
    /// Pipe operators, `|` and `||`
    pub fn is_pipe(&self) -> bool {
        matches!(self, Token::Pipe | Token::DoublePipe)
    }

    /// Tokens that may open a comment or string region
    pub fn opens_region(&self) -> bool {
        matches!(
            self,
            Token::BlockCommentOpen
                | Token::DoubleDash
                | Token::Hash
                | Token::SingleQuote
                | Token::DoubleQuote
        )
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Newline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Result<Token, ()>> {
        Token::lexer(source).collect()
    }

    #[test]
    fn test_symbols_and_numbers() {
        assert_eq!(
            lex("say 3.14 stem.i"),
            vec![
                Ok(Token::Symbol),
                Ok(Token::Whitespace),
                Ok(Token::Number),
                Ok(Token::Whitespace),
                Ok(Token::Symbol),
            ]
        );
    }

    #[test]
    fn test_pipes_prefer_longest_match() {
        assert_eq!(
            lex("a||b|c"),
            vec![
                Ok(Token::Symbol),
                Ok(Token::DoublePipe),
                Ok(Token::Symbol),
                Ok(Token::Pipe),
                Ok(Token::Symbol),
            ]
        );
    }

    #[test]
    fn test_region_openers() {
        let tokens = lex("/* -- # ' \"");
        let openers: Vec<_> = tokens
            .into_iter()
            .flatten()
            .filter(|t| t.opens_region())
            .collect();
        assert_eq!(
            openers,
            vec![
                Token::BlockCommentOpen,
                Token::DoubleDash,
                Token::Hash,
                Token::SingleQuote,
                Token::DoubleQuote,
            ]
        );
    }

    #[test]
    fn test_operators_are_errors() {
        let tokens = lex("x=1");
        assert_eq!(tokens[0], Ok(Token::Symbol));
        assert!(tokens[1].is_err());
        assert_eq!(tokens[2], Ok(Token::Number));
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Pipe.is_pipe());
        assert!(Token::DoublePipe.is_pipe());
        assert!(!Token::Colon.is_pipe());
        assert!(Token::Newline.is_whitespace());
        assert!(!Token::Symbol.opens_region());
    }
}
