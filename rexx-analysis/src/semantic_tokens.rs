use rexx_parser::rexx::range::{Range, SourceLocation};
use rexx_parser::{classify, HighlightKind, LexState};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RexxSemanticTokenKind {
    Keyword,
    Builtin,
    Label,
    Number,
    Comment,
    String,
    PipeOperator,
    PipeStageName,
    PipeStageLabel,
    AddressTarget,
}

impl RexxSemanticTokenKind {
    /// Returns the semantic token type string.
    ///
    /// Standard token types are used where one fits so that existing editor themes
    /// colour REXX sources without extra configuration:
    /// - Built-in functions → "function.builtin"
    /// - Pipe operators → "operator"
    /// - Stage names are the "functions" of a pipeline, stage labels name a stream → "type"
    /// - `address` targets are command environments → "namespace"
    pub fn as_str(self) -> &'static str {
        match self {
            RexxSemanticTokenKind::Keyword => "keyword",
            RexxSemanticTokenKind::Builtin => "function.builtin",
            RexxSemanticTokenKind::Label => "label",
            RexxSemanticTokenKind::Number => "number",
            RexxSemanticTokenKind::Comment => "comment",
            RexxSemanticTokenKind::String => "string",
            RexxSemanticTokenKind::PipeOperator => "operator",
            RexxSemanticTokenKind::PipeStageName => "function",
            RexxSemanticTokenKind::PipeStageLabel => "type",
            RexxSemanticTokenKind::AddressTarget => "namespace",
        }
    }

    /// Plain text has no semantic token
    pub fn from_highlight(kind: HighlightKind) -> Option<Self> {
        match kind {
            HighlightKind::Keyword => Some(RexxSemanticTokenKind::Keyword),
            HighlightKind::Builtin => Some(RexxSemanticTokenKind::Builtin),
            HighlightKind::Label => Some(RexxSemanticTokenKind::Label),
            HighlightKind::Number => Some(RexxSemanticTokenKind::Number),
            HighlightKind::Comment => Some(RexxSemanticTokenKind::Comment),
            HighlightKind::String => Some(RexxSemanticTokenKind::String),
            HighlightKind::PipeOperator => Some(RexxSemanticTokenKind::PipeOperator),
            HighlightKind::PipeStageName => Some(RexxSemanticTokenKind::PipeStageName),
            HighlightKind::PipeStageLabel => Some(RexxSemanticTokenKind::PipeStageLabel),
            HighlightKind::AddressTarget => Some(RexxSemanticTokenKind::AddressTarget),
            HighlightKind::PlainText => None,
        }
    }

    /// Position in [SEMANTIC_TOKEN_KINDS], the index used by relative encoding
    pub fn legend_index(self) -> u32 {
        SEMANTIC_TOKEN_KINDS
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or_default() as u32
    }
}

pub const SEMANTIC_TOKEN_KINDS: &[RexxSemanticTokenKind] = &[
    RexxSemanticTokenKind::Keyword,
    RexxSemanticTokenKind::Builtin,
    RexxSemanticTokenKind::Label,
    RexxSemanticTokenKind::Number,
    RexxSemanticTokenKind::Comment,
    RexxSemanticTokenKind::String,
    RexxSemanticTokenKind::PipeOperator,
    RexxSemanticTokenKind::PipeStageName,
    RexxSemanticTokenKind::PipeStageLabel,
    RexxSemanticTokenKind::AddressTarget,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RexxSemanticToken {
    pub kind: RexxSemanticTokenKind,
    pub range: Range,
}

/// Semantic tokens for `source`, one per line: tokens spanning several lines (block
/// comments, continued strings) are split at line ends.
pub fn collect_semantic_tokens(source: &str) -> Vec<RexxSemanticToken> {
    let mut collector = TokenCollector::new(source);
    for token in classify(source, LexState::Normal).tokens {
        if let Some(kind) = RexxSemanticTokenKind::from_highlight(token.kind) {
            collector.push_span(token.span, kind);
        }
    }
    collector.finish()
}

/// Relative encoding: five integers per token (delta line, delta start column, length,
/// legend index, modifiers). Columns and lengths are in bytes.
pub fn encode_relative(tokens: &[RexxSemanticToken]) -> Vec<u32> {
    let mut data = Vec::with_capacity(tokens.len() * 5);
    let mut previous_line = 0;
    let mut previous_column = 0;
    for token in tokens {
        let line = token.range.start.line;
        let column = token.range.start.column;
        let delta_line = line - previous_line;
        let delta_start = if delta_line == 0 {
            column - previous_column
        } else {
            column
        };
        data.extend([
            delta_line as u32,
            delta_start as u32,
            (token.range.span.end - token.range.span.start) as u32,
            token.kind.legend_index(),
            0,
        ]);
        previous_line = line;
        previous_column = column;
    }
    data
}

struct TokenCollector {
    location: SourceLocation,
    tokens: Vec<RexxSemanticToken>,
}

impl TokenCollector {
    fn new(source: &str) -> Self {
        Self {
            location: SourceLocation::new(source),
            tokens: Vec::new(),
        }
    }

    fn finish(mut self) -> Vec<RexxSemanticToken> {
        self.tokens.sort_by(|a, b| {
            let a_start = (&a.range.start, &a.range.end);
            let b_start = (&b.range.start, &b.range.end);
            a_start.cmp(&b_start)
        });
        self.tokens
    }

    fn push_span(&mut self, span: std::ops::Range<usize>, kind: RexxSemanticTokenKind) {
        let range = self.location.byte_range_to_range(&span);
        if range.is_single_line() {
            self.push_range(range, kind);
            return;
        }
        for line in range.start.line..=range.end.line {
            let Some(line_span) = self.location.line_span(line) else {
                continue;
            };
            let start = span.start.max(line_span.start);
            let end = span.end.min(line_span.end);
            let piece = self.location.byte_range_to_range(&(start..end));
            self.push_range(piece, kind);
        }
    }

    fn push_range(&mut self, range: Range, kind: RexxSemanticTokenKind) {
        if range.span.start < range.span.end {
            self.tokens.push(RexxSemanticToken { kind, range });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SAMPLE;

    fn snippets(
        tokens: &[RexxSemanticToken],
        kind: RexxSemanticTokenKind,
        source: &str,
    ) -> Vec<String> {
        tokens
            .iter()
            .filter(|token| token.kind == kind)
            .map(|token| source[token.range.span.clone()].to_string())
            .collect()
    }

    #[test]
    fn collects_categories() {
        let tokens = collect_semantic_tokens(SAMPLE);
        assert_eq!(
            snippets(&tokens, RexxSemanticTokenKind::Label, SAMPLE),
            vec!["main", "shout"]
        );
        assert_eq!(
            snippets(&tokens, RexxSemanticTokenKind::AddressTarget, SAMPLE),
            vec!["command"]
        );
        assert_eq!(
            snippets(&tokens, RexxSemanticTokenKind::Builtin, SAMPLE),
            vec!["right", "translate"]
        );
        assert!(snippets(&tokens, RexxSemanticTokenKind::Keyword, SAMPLE)
            .iter()
            .any(|word| word == "procedure"));
        assert_eq!(
            snippets(&tokens, RexxSemanticTokenKind::Number, SAMPLE),
            vec!["1", "1", "3", "4", "1"]
        );
    }

    #[test]
    fn splits_multiline_comments() {
        let tokens = collect_semantic_tokens(SAMPLE);
        let comments = snippets(&tokens, RexxSemanticTokenKind::Comment, SAMPLE);
        assert_eq!(comments, vec!["/* REXX */", "/* helpers", "   below */"]);
        assert!(tokens.iter().all(|token| token.range.is_single_line()));
    }

    #[test]
    fn tokens_are_sorted() {
        let tokens = collect_semantic_tokens(SAMPLE);
        assert!(tokens
            .windows(2)
            .all(|pair| pair[0].range.start < pair[1].range.start));
    }

    #[test]
    fn plain_text_is_omitted() {
        assert!(collect_semantic_tokens("x = y").is_empty());
        assert!(collect_semantic_tokens("").is_empty());
    }

    #[test]
    fn encodes_relative_positions() {
        let tokens = collect_semantic_tokens("say 1\n  exit");
        assert_eq!(
            encode_relative(&tokens),
            vec![0, 0, 3, 0, 0, 0, 4, 1, 3, 0, 1, 2, 4, 0, 0]
        );
    }

    #[test]
    fn legend_names() {
        let names: Vec<_> = SEMANTIC_TOKEN_KINDS.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "keyword",
                "function.builtin",
                "label",
                "number",
                "comment",
                "string",
                "operator",
                "function",
                "type",
                "namespace"
            ]
        );
    }
}
