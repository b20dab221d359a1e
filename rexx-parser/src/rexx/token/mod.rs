//! Token types shared by the classifier, the indenter and the tooling built on top.
//!
//! Token Layers
//!
//!     Core Tokens:
//!         Word level tokens produced by the logos lexer over code (text outside comments
//!         and strings). See [core](core). They carry no meaning beyond their shape: a
//!         `Symbol` is any REXX symbol, whether it later turns out to be a keyword or a label.
//!
//!     Highlight Tokens:
//!         What hosts consume. A byte span plus a [HighlightKind]. Produced by the line
//!         scanner from core tokens and from the comment and string regions found between
//!         them. See [highlight](highlight).
//!
//!     Lexical State:
//!         Comments and strings may cross line boundaries, so every line is entered in a
//!         [LexState]. The state at a line boundary is all that is needed to restart
//!         highlighting there.

pub mod core;
pub mod highlight;

pub use self::core::Token;
pub use highlight::{HighlightKind, HighlightToken, LexState, Quote};
