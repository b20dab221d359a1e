//! Formatting edits
//!
//! Re-indentation as a list of byte-offset edits over the original text, for hosts that
//! apply changes incrementally instead of replacing the whole buffer. The edits come from
//! a line diff between the source and its re-indented form.

use rexx_parser::rexx::range::SourceLocation;
use rexx_parser::{reindent, IndentOptions};
use similar::{Algorithm, DiffTag, TextDiff};

/// Text edit expressed as byte offsets over the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEditSpan {
    pub start: usize,
    pub end: usize,
    pub new_text: String,
}

/// Inclusive/exclusive line range used for range formatting filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    fn clamp(self, line_count: usize) -> Self {
        let start = self.start.min(line_count);
        let mut end = self.end.min(line_count);
        if end <= start {
            end = (start + 1).min(line_count.max(1));
        }
        LineRange { start, end }
    }
}

/// Produce re-indentation edits for the entire document.
pub fn format_document(source: &str, options: &IndentOptions) -> Vec<TextEditSpan> {
    let formatted = reindent(source, options);
    let edits = compute_edits(source, &formatted);
    log::debug!("{} formatting edits", edits.len());
    edits
}

/// Produce re-indentation edits limited to the provided line range.
///
/// Lines inside the range are still indented relative to the lines above them as they
/// would be after formatting the whole document.
pub fn format_range(source: &str, options: &IndentOptions, range: LineRange) -> Vec<TextEditSpan> {
    let all_edits = format_document(source, options);
    if all_edits.is_empty() {
        return all_edits;
    }
    let locator = SourceLocation::new(source);
    let clamped = range.clamp(locator.line_count());
    all_edits
        .into_iter()
        .filter(|span| edit_within_range(span, &locator, clamped))
        .collect()
}

fn edit_within_range(span: &TextEditSpan, locator: &SourceLocation, range: LineRange) -> bool {
    if span.start == span.end {
        // Pure insertion
        let pos = locator.byte_to_position(span.start);
        return pos.line >= range.start && pos.line < range.end;
    }
    let start = locator.byte_to_position(span.start);
    let end = locator.byte_to_position(span.end);
    start.line >= range.start && end.line <= range.end
}

fn compute_edits(original: &str, formatted: &str) -> Vec<TextEditSpan> {
    if original == formatted {
        return Vec::new();
    }

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(original, formatted);
    let locator = SourceLocation::new(original);
    let new_lines = diff.new_slices();
    let offset = |line: usize| locator.line_start(line).unwrap_or(original.len());

    let mut edits = Vec::new();
    for op in diff.ops() {
        let (tag, old, new) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {}
            // re-indentation keeps lines in place, edit them one by one
            DiffTag::Replace if old.len() == new.len() => {
                for (old_line, new_line) in old.zip(new) {
                    edits.push(TextEditSpan {
                        start: offset(old_line),
                        end: offset(old_line + 1),
                        new_text: new_lines[new_line].to_string(),
                    });
                }
            }
            _ => edits.push(TextEditSpan {
                start: offset(old.start),
                end: offset(old.end),
                new_text: new_lines[new].concat(),
            }),
        }
    }
    edits
}
