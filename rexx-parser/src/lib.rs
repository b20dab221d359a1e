//! # rexx-parser
//!
//! Highlighting classifier and indentation engine for REXX and CMS Pipelines.
//!
//! File Layout
//!
//! The crate is split the same way an editor consumes it. The classifier and the indenter
//! are independent: both only share the vocabulary tables.
//!
//! src/rexx
//!   ├── vocabulary    Keyword, built-in and pipeline stage tables
//!   ├── token         Raw logos tokens and the highlight categories emitted to hosts
//!   ├── lexing        Line scanning, comment/string regions and the lazy highlighter
//!   ├── indentation   Previous-code-line search and the indentation rules
//!   ├── outline       Routine declarations for navigation
//!   ├── host          Narrow adapter trait editors implement
//!   └── range         Byte offset <-> line/column conversion
//!
//! Both entry points are total: malformed input never produces an error, it produces
//! `PlainText` tokens or an indentation of 0.

#![allow(rustdoc::invalid_html_tags)]

pub mod rexx;

pub use rexx::indentation::{compute_indent, reindent, IndentOptions, LineSource, TextBuffer};
pub use rexx::lexing::{classify, line_states, Classification, Highlighter};
pub use rexx::token::{HighlightKind, HighlightToken, LexState, Quote};
