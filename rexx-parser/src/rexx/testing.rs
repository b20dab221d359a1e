//! Testing utilities
//!
//!     Helpers shared by unit tests, integration tests and downstream crates.
//!
//!     [MemoryHost] is an in-memory [HostAdapter] that records everything the mode sends
//!     it. Indentation requests are applied to its text, so a test can assert on the
//!     buffer after indenting.
//!
//!     [render_tokens] prints a classification one token per line, `kind text`, which reads
//!     well in inline snapshots:
//!
//!     ```rust,ignore
//!     let classification = classify("do 3", LexState::Normal);
//!     insta::assert_snapshot!(render_tokens("do 3", &classification.tokens), @r###"
//!     keyword "do"
//!     number "3"
//!     "###);
//!     ```

use crate::rexx::host::HostAdapter;
use crate::rexx::token::HighlightToken;

/// In-memory buffer implementing [HostAdapter].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHost {
    text: String,
    cursor: usize,
    highlights: Vec<HighlightToken>,
}

impl MemoryHost {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn with_cursor(mut self, line: usize) -> Self {
        self.cursor = line;
        self
    }

    /// Tokens received so far, in the order they arrived
    pub fn highlights(&self) -> &[HighlightToken] {
        &self.highlights
    }
}

impl HostAdapter for MemoryHost {
    fn text(&self) -> &str {
        &self.text
    }

    fn cursor_line(&self) -> usize {
        self.cursor
    }

    fn apply_highlight(&mut self, token: &HighlightToken) {
        self.highlights.push(token.clone());
    }

    fn set_indentation(&mut self, line: usize, column: usize) {
        let mut lines: Vec<String> = self.text.split('\n').map(str::to_string).collect();
        if let Some(target) = lines.get_mut(line) {
            let body = target.trim_start_matches([' ', '\t']).to_string();
            *target = format!("{}{}", " ".repeat(column), body);
        }
        self.text = lines.join("\n");
    }
}

/// One `kind "text"` line per token
pub fn render_tokens(source: &str, tokens: &[HighlightToken]) -> String {
    tokens
        .iter()
        .map(|token| format!("{} {:?}", token.kind, token.text(source)))
        .collect::<Vec<_>>()
        .join("\n")
}
