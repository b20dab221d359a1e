//! Highlight tokens
//!
//! The output of the classifier: a category per span. Spans are byte offsets into the
//! classified text and never overlap. Whitespace and line breaks outside comments and
//! strings are not covered by any token.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Lexical category of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HighlightKind {
    Keyword,
    Builtin,
    Label,
    Number,
    Comment,
    String,
    PipeOperator,
    PipeStageLabel,
    PipeStageName,
    /// The environment named by `address <name>`
    AddressTarget,
    PlainText,
}

impl HighlightKind {
    pub const ALL: [HighlightKind; 11] = [
        HighlightKind::Keyword,
        HighlightKind::Builtin,
        HighlightKind::Label,
        HighlightKind::Number,
        HighlightKind::Comment,
        HighlightKind::String,
        HighlightKind::PipeOperator,
        HighlightKind::PipeStageLabel,
        HighlightKind::PipeStageName,
        HighlightKind::AddressTarget,
        HighlightKind::PlainText,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HighlightKind::Keyword => "keyword",
            HighlightKind::Builtin => "builtin",
            HighlightKind::Label => "label",
            HighlightKind::Number => "number",
            HighlightKind::Comment => "comment",
            HighlightKind::String => "string",
            HighlightKind::PipeOperator => "pipe-operator",
            HighlightKind::PipeStageLabel => "pipe-stage-label",
            HighlightKind::PipeStageName => "pipe-stage-name",
            HighlightKind::AddressTarget => "address-target",
            HighlightKind::PlainText => "plain-text",
        }
    }
}

impl fmt::Display for HighlightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HighlightToken {
    pub kind: HighlightKind,
    pub span: Range<usize>,
}

impl HighlightToken {
    pub fn new(kind: HighlightKind, span: Range<usize>) -> Self {
        debug_assert!(span.start <= span.end, "token span must be ordered");
        Self { kind, span }
    }

    /// The token's text in the source it was classified from
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }

    pub fn len(&self) -> usize {
        self.span.end - self.span.start
    }

    pub fn is_empty(&self) -> bool {
        self.span.start == self.span.end
    }
}

/// Quote character delimiting a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    pub fn as_byte(self) -> u8 {
        match self {
            Quote::Single => b'\'',
            Quote::Double => b'"',
        }
    }
}

/// Lexical mode at a line boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LexState {
    #[default]
    Normal,
    BlockComment,
    String(Quote),
}

impl LexState {
    /// Category of the region a non-normal state is inside of
    pub fn region_kind(self) -> Option<HighlightKind> {
        match self {
            LexState::Normal => None,
            LexState::BlockComment => Some(HighlightKind::Comment),
            LexState::String(_) => Some(HighlightKind::String),
        }
    }

    pub fn is_normal(self) -> bool {
        self == LexState::Normal
    }
}
