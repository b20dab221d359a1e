use rexx_parser::rexx::outline::{collect_routines, Routine};
use rexx_parser::rexx::range::{Range, SourceLocation};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RexxSymbolKind {
    /// Label followed by `procedure`
    Procedure,
    Label,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RexxDocumentSymbol {
    pub name: String,
    pub detail: Option<String>,
    pub kind: RexxSymbolKind,
    /// From the label up to the next routine (or the end of the document)
    pub range: Range,
    pub selection_range: Range,
}

pub fn collect_document_symbols(source: &str) -> Vec<RexxDocumentSymbol> {
    let locator = SourceLocation::new(source);
    let routines = collect_routines(source);
    routines
        .iter()
        .enumerate()
        .map(|(idx, routine)| {
            let next_line = routines.get(idx + 1).map(|next| next.line);
            routine_symbol(routine, next_line, &locator, source.len())
        })
        .collect()
}

fn routine_symbol(
    routine: &Routine,
    next_line: Option<usize>,
    locator: &SourceLocation,
    source_len: usize,
) -> RexxDocumentSymbol {
    let start = locator.line_start(routine.line).unwrap_or(source_len);
    let end = next_line
        .and_then(|line| line.checked_sub(1))
        .and_then(|line| locator.line_span(line))
        .map_or(source_len, |span| span.end);
    let (kind, detail) = if routine.is_procedure {
        (RexxSymbolKind::Procedure, "procedure")
    } else {
        (RexxSymbolKind::Label, "label")
    };
    RexxDocumentSymbol {
        name: routine.name.clone(),
        detail: Some(detail.to_string()),
        kind,
        range: locator.byte_range_to_range(&(start..end.max(start))),
        selection_range: routine.range.clone(),
    }
}
