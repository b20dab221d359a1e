//! Host adapter
//!
//!     Editors drive the classifier and the indenter through [HostAdapter], a narrow trait
//!     with read access to the buffer text, the cursor line, a sink for highlight tokens and
//!     a sink for indentation. [RexxMode] is the editor-independent glue: it reads from the
//!     host, runs the core and writes the results back.
//!
//!     The core has no notion of a particular editor. A host that keeps its buffer in some
//!     other structure can still call [compute_indent] directly with its own [LineSource].
//!
//! [LineSource]: crate::rexx::indentation::LineSource

use crate::rexx::indentation::{
    compute_indent, indent_with_states, IndentOptions, LineSource, TextBuffer,
};
use crate::rexx::lexing::{classify, line_states};
use crate::rexx::token::{HighlightToken, LexState};
use std::ops::Range;
use std::path::Path;

/// File extensions associated with REXX sources
pub const FILE_EXTENSIONS: [&str; 3] = ["rex", "rexx", "cmd"];

pub trait HostAdapter {
    /// Full buffer text
    fn text(&self) -> &str;

    /// 0-based line the cursor is on
    fn cursor_line(&self) -> usize;

    fn apply_highlight(&mut self, token: &HighlightToken);

    /// Replace the leading whitespace of `line` so its text starts at `column`
    fn set_indentation(&mut self, line: usize, column: usize);
}

/// Editing mode for REXX buffers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RexxMode {
    options: IndentOptions,
}

impl RexxMode {
    pub fn new(options: IndentOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &IndentOptions {
        &self.options
    }

    /// Highlight the whole buffer. Returns the state at the end of the buffer.
    pub fn fontify<H: HostAdapter + ?Sized>(&self, host: &mut H) -> LexState {
        let classification = classify(host.text(), LexState::Normal);
        for token in &classification.tokens {
            host.apply_highlight(token);
        }
        classification.exit
    }

    /// Indent the cursor line. Returns the column it was indented to.
    pub fn indent_line<H: HostAdapter + ?Sized>(&self, host: &mut H) -> usize {
        let line = host.cursor_line();
        let column = compute_indent(&TextBuffer::new(host.text()), line, self.options.offset);
        host.set_indentation(line, column);
        column
    }

    /// Indent `lines` top-down, each line seeing the lines above it already indented.
    ///
    /// Lines starting inside a block comment or a string are left alone. Returns the
    /// number of lines indented.
    pub fn indent_region<H: HostAdapter + ?Sized>(&self, host: &mut H, lines: Range<usize>) -> usize {
        let mut current: Vec<String> = TextBuffer::new(host.text())
            .lines()
            .iter()
            .map(|line| line.to_string())
            .collect();
        let states = line_states(host.text(), LexState::Normal);
        let end = lines.end.min(current.line_count());

        let mut indented = 0;
        for index in lines.start..end {
            if !states.get(index).is_some_and(|state| state.is_normal()) {
                continue;
            }
            let column = if current[index].trim().is_empty() {
                0
            } else {
                indent_with_states(current.as_slice(), index, self.options.offset, &states)
            };
            let body = current[index].trim_start().to_string();
            current[index] = format!("{}{}", " ".repeat(column), body);
            host.set_indentation(index, column);
            indented += 1;
        }
        log::debug!("indented {} lines in {:?}", indented, lines);
        indented
    }
}

/// True if `path` has one of `extensions` (compared case-insensitively, without the dot)
pub fn is_rexx_file<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|candidate| candidate.as_ref().eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rexx::testing::MemoryHost;
    use crate::rexx::token::HighlightKind;

    #[test]
    fn test_fontify_sends_every_token() {
        let mut host = MemoryHost::new("say 'hi' /* open");
        let exit = RexxMode::default().fontify(&mut host);
        assert_eq!(exit, LexState::BlockComment);
        let kinds: Vec<_> = host.highlights().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                HighlightKind::Keyword,
                HighlightKind::String,
                HighlightKind::Comment
            ]
        );
    }

    #[test]
    fn test_indent_line_at_cursor() {
        let mut host = MemoryHost::new("do\nsay 1\nend").with_cursor(1);
        assert_eq!(RexxMode::default().indent_line(&mut host), 2);
        assert_eq!(host.text(), "do\n  say 1\nend");
    }

    #[test]
    fn test_indent_region() {
        let mut host = MemoryHost::new("select\nwhen a then\nsay 1\n   otherwise\nnop\nend");
        let mode = RexxMode::new(IndentOptions::new(3));
        assert_eq!(mode.indent_region(&mut host, 0..6), 6);
        assert_eq!(
            host.text(),
            "select\nwhen a then\n   say 1\notherwise\nnop\nend"
        );
    }

    #[test]
    fn test_indent_region_skips_comment_bodies() {
        let mut host = MemoryHost::new("do\n/*\n  body\n*/\nx = 1");
        assert_eq!(RexxMode::default().indent_region(&mut host, 0..10), 3);
        assert_eq!(host.text(), "do\n  /*\n  body\n*/\n  x = 1");
    }

    #[test]
    fn test_rexx_file_extensions() {
        assert!(is_rexx_file(Path::new("prog.rexx"), &FILE_EXTENSIONS));
        assert!(is_rexx_file(Path::new("PROFILE.EXEC"), &["exec"]));
        assert!(is_rexx_file(Path::new("run.CMD"), &FILE_EXTENSIONS));
        assert!(!is_rexx_file(Path::new("notes.txt"), &FILE_EXTENSIONS));
        assert!(!is_rexx_file(Path::new("rexx"), &FILE_EXTENSIONS));
    }
}
