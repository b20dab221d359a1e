//! Line Classification
//!
//! Turns one line of text into highlight tokens. Scanning happens in two passes:
//!
//!     1. Split the line into pieces: code tokens from the logos lexer, and closed
//!        comment/string regions. A region still open at the end of the line ends the
//!        pass and becomes the line's exit state.
//!
//!     2. Assign a category to every code piece. Rules are tried in this order, the first
//!        match wins:
//!         1. Stage name right after `|` or `||`
//!         2. Stage label, `| name :`
//!         3. The pipe operator itself
//!         4. Reserved keyword
//!         5. Label, `name :` as the first thing on the line. A label may share its
//!            name with a built-in (`date:`), never with a keyword
//!         6. Built-in function
//!         7. Number
//!         8. Target of `address <name>`
//!
//! Whitespace only separates pieces; comments and strings break adjacency (`| /* x */ sort`
//! does not make `sort` a stage name).

use super::base_tokenization::CodeLexer;
use super::regions::{find_comment_end, find_string_end, opens_line_comment};
use crate::rexx::token::{HighlightKind, HighlightToken, LexState, Quote, Token};
use crate::rexx::vocabulary::{is_builtin, is_keyword, is_stage_name};
use std::ops::Range;

/// Result of scanning one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// Tokens completed on this line, in order. Spans are absolute.
    pub tokens: Vec<HighlightToken>,
    /// State the next line is entered in
    pub exit: LexState,
    /// Absolute start of a comment or string still open at the end of the line
    pub open_from: Option<usize>,
}

/// Scan `line` (without its newline) starting at absolute offset `base`.
///
/// `open_from` is the absolute start of a region continued from earlier lines; when the
/// region closes on this line the emitted token covers everything from there.
pub fn scan_line(
    line: &str,
    base: usize,
    entry: LexState,
    open_from: Option<usize>,
) -> LineOutcome {
    let mut tokens = Vec::new();
    let mut code_start = 0;

    if let Some(kind) = entry.region_kind() {
        let start = open_from.unwrap_or(base);
        let end = match entry {
            LexState::String(quote) => find_string_end(line, 0, quote),
            _ => find_comment_end(line, 0),
        };
        match end {
            Some(end) => {
                tokens.push(HighlightToken::new(kind, start..base + end));
                code_start = end;
            }
            None => {
                return LineOutcome {
                    tokens,
                    exit: entry,
                    open_from: Some(start),
                };
            }
        }
    }

    let (pieces, open) = split_pieces(line, code_start);
    classify_pieces(line, code_start, &pieces, base, &mut tokens);

    match open {
        Some((state, start)) => LineOutcome {
            tokens,
            exit: state,
            open_from: Some(base + start),
        },
        None => LineOutcome {
            tokens,
            exit: LexState::Normal,
            open_from: None,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Code(Token, Range<usize>),
    Unknown(Range<usize>),
    Region(HighlightKind, Range<usize>),
}

impl Piece {
    fn span(&self) -> &Range<usize> {
        match self {
            Piece::Code(_, span) | Piece::Unknown(span) | Piece::Region(_, span) => span,
        }
    }

    fn token(&self) -> Option<Token> {
        match self {
            Piece::Code(token, _) => Some(*token),
            _ => None,
        }
    }
}

/// First pass: code tokens and closed regions, plus the region left open at end of line
fn split_pieces(line: &str, from: usize) -> (Vec<Piece>, Option<(LexState, usize)>) {
    let mut pieces = Vec::new();
    let mut pos = from;

    'line: loop {
        let mut resume = None;
        for (token, span) in CodeLexer::new(line, pos) {
            let Some(token) = token else {
                pieces.push(Piece::Unknown(span));
                continue;
            };
            match token {
                Token::Whitespace | Token::Newline => {}
                Token::BlockCommentOpen => match find_comment_end(line, span.end) {
                    Some(end) => {
                        pieces.push(Piece::Region(HighlightKind::Comment, span.start..end));
                        resume = Some(end);
                        break;
                    }
                    None => return (pieces, Some((LexState::BlockComment, span.start))),
                },
                Token::SingleQuote | Token::DoubleQuote => {
                    let quote = if token == Token::SingleQuote {
                        Quote::Single
                    } else {
                        Quote::Double
                    };
                    match find_string_end(line, span.end, quote) {
                        Some(end) => {
                            pieces.push(Piece::Region(HighlightKind::String, span.start..end));
                            resume = Some(end);
                            break;
                        }
                        None => return (pieces, Some((LexState::String(quote), span.start))),
                    }
                }
                Token::DoubleDash | Token::Hash if opens_line_comment(line, span.end) => {
                    pieces.push(Piece::Region(HighlightKind::Comment, span.start..line.len()));
                    break 'line;
                }
                _ => pieces.push(Piece::Code(token, span)),
            }
        }
        match resume {
            Some(next) => pos = next,
            None => break,
        }
    }

    (pieces, None)
}

/// Second pass: category for every piece
fn classify_pieces(
    line: &str,
    code_start: usize,
    pieces: &[Piece],
    base: usize,
    out: &mut Vec<HighlightToken>,
) {
    for (idx, piece) in pieces.iter().enumerate() {
        let kind = match piece {
            Piece::Region(kind, _) => *kind,
            Piece::Unknown(_) => HighlightKind::PlainText,
            Piece::Code(token, span) => classify_code(line, code_start, pieces, idx, *token, span),
        };
        let span = piece.span();
        out.push(HighlightToken::new(kind, base + span.start..base + span.end));
    }
}

fn classify_code(
    line: &str,
    code_start: usize,
    pieces: &[Piece],
    idx: usize,
    token: Token,
    span: &Range<usize>,
) -> HighlightKind {
    let previous = idx.checked_sub(1).map(|i| &pieces[i]);
    let next = pieces.get(idx + 1);

    match token {
        Token::Pipe | Token::DoublePipe => HighlightKind::PipeOperator,
        Token::Number => {
            if next.is_some_and(|n| n.token() == Some(Token::Symbol) && n.span().start == span.end)
            {
                HighlightKind::PlainText
            } else {
                HighlightKind::Number
            }
        }
        Token::Symbol => {
            let word = &line[span.clone()];
            let after_pipe = previous.and_then(Piece::token).is_some_and(|t| t.is_pipe());
            let before_colon = next.and_then(Piece::token) == Some(Token::Colon);

            let after_number = previous
                .is_some_and(|p| p.token() == Some(Token::Number) && p.span().end == span.start);

            if after_number {
                // tail of something like `1e10`
                HighlightKind::PlainText
            } else if after_pipe && is_stage_name(word) {
                HighlightKind::PipeStageName
            } else if after_pipe && before_colon {
                HighlightKind::PipeStageLabel
            } else if is_keyword(word) {
                HighlightKind::Keyword
            } else if idx == 0 && code_start == 0 && before_colon {
                HighlightKind::Label
            } else if is_builtin(word) {
                HighlightKind::Builtin
            } else if follows_address(line, previous, span) {
                HighlightKind::AddressTarget
            } else {
                HighlightKind::PlainText
            }
        }
        _ => HighlightKind::PlainText,
    }
}

/// `address <name>`: the previous piece is the `address` keyword, separated by whitespace
fn follows_address(line: &str, previous: Option<&Piece>, span: &Range<usize>) -> bool {
    match previous {
        Some(Piece::Code(Token::Symbol, prev)) => {
            prev.end < span.start && line[prev.clone()].eq_ignore_ascii_case("address")
        }
        _ => false,
    }
}
