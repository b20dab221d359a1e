//! Routine outline
//!
//! Internal routines in REXX are plain labels: `name:` at the start of a line, usually
//! followed by `procedure`. This module indexes them for navigation (jump to routine,
//! document symbols). It has no influence on highlighting.

use crate::rexx::indentation::rules::leading_word;
use crate::rexx::lexing::line_states;
use crate::rexx::range::{Range, SourceLocation};
use crate::rexx::token::LexState;
use crate::rexx::vocabulary::is_keyword;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*([A-Za-z_@#$!?][A-Za-z0-9_@#$!?.]*)[ \t]*:").unwrap());

/// A `name:` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Routine {
    pub name: String,
    /// 0-based line of the declaration
    pub line: usize,
    /// Location of the name
    pub range: Range,
    /// The label is followed by `procedure`, on the same line or the next code line
    pub is_procedure: bool,
}

/// All routine declarations of `source`, in source order.
pub fn collect_routines(source: &str) -> Vec<Routine> {
    let states = line_states(source, LexState::Normal);
    let location = SourceLocation::new(source);
    let lines: Vec<&str> = source.split('\n').collect();

    let mut routines = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if !states[index].is_normal() {
            continue;
        }
        let Some(captures) = DECLARATION.captures(line) else {
            continue;
        };
        let (Some(name), Some(whole)) = (captures.get(1), captures.get(0)) else {
            continue;
        };
        if is_keyword(name.as_str()) {
            continue;
        }

        let base = location.line_start(index).unwrap_or(0);
        let rest = &line[whole.end()..];
        let follower = if rest.trim().is_empty() {
            lines[index + 1..]
                .iter()
                .map(|next| next.trim())
                .find(|next| !next.is_empty())
                .unwrap_or("")
        } else {
            rest
        };

        routines.push(Routine {
            name: name.as_str().to_string(),
            line: index,
            range: location.byte_range_to_range(&(base + name.start()..base + name.end())),
            is_procedure: leading_word(follower).eq_ignore_ascii_case("procedure"),
        });
    }

    log::debug!("found {} routines", routines.len());
    routines
}
