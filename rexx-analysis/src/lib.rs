//! Editor features built on the REXX classifier and indenter.
//!
//! Everything here is protocol-neutral: positions are byte offsets plus 0-based
//! line/column pairs, and hosts convert them to whatever their protocol wants.

pub mod document_symbols;
pub mod formatting;
pub mod semantic_tokens;

#[cfg(test)]
pub(crate) mod test_support;

pub use document_symbols::{collect_document_symbols, RexxDocumentSymbol, RexxSymbolKind};
pub use formatting::{format_document, format_range, LineRange, TextEditSpan};
pub use semantic_tokens::{
    collect_semantic_tokens, encode_relative, RexxSemanticToken, RexxSemanticTokenKind,
    SEMANTIC_TOKEN_KINDS,
};
