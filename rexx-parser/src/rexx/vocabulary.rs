//! Vocabulary tables
//!
//!     The three word lists the classifier matches against: reserved keywords, built-in
//!     function names and CMS Pipelines stage names. All tables are stored lowercase and
//!     membership is case-insensitive, so `DO`, `Do` and `do` are the same keyword.
//!
//!     REXX itself has no reserved words, the interpreter decides from context. For
//!     presentation we still treat instruction keywords as reserved: a word in
//!     [KEYWORDS] is always coloured as a keyword, even where REXX would read it as a
//!     variable. Words that are both keywords and built-ins (`address`, `arg`, `digits`,
//!     `form`, `fuzz`, `trace`, `value`) resolve to keywords.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Instruction keywords and their sub-keywords.
pub const KEYWORDS: &[&str] = &[
    "address",
    "arg",
    "by",
    "call",
    "digits",
    "do",
    "drop",
    "else",
    "end",
    "engineering",
    "exit",
    "expose",
    "for",
    "forever",
    "form",
    "fuzz",
    "if",
    "interpret",
    "iterate",
    "leave",
    "loop",
    "nop",
    "numeric",
    "off",
    "on",
    "options",
    "otherwise",
    "parse",
    "procedure",
    "pull",
    "push",
    "queue",
    "return",
    "say",
    "scientific",
    "select",
    "signal",
    "source",
    "then",
    "to",
    "trace",
    "until",
    "upper",
    "value",
    "var",
    "version",
    "when",
    "while",
    "with",
];

/// Built-in functions of the language.
pub const BUILTINS: &[&str] = &[
    "abbrev",
    "abs",
    "address",
    "arg",
    "b2x",
    "bitand",
    "bitor",
    "bitxor",
    "c2d",
    "c2x",
    "center",
    "centre",
    "changestr",
    "charin",
    "charout",
    "chars",
    "compare",
    "condition",
    "copies",
    "countstr",
    "d2c",
    "d2x",
    "datatype",
    "date",
    "delstr",
    "delword",
    "digits",
    "errortext",
    "externals",
    "find",
    "form",
    "format",
    "fuzz",
    "index",
    "insert",
    "justify",
    "lastpos",
    "left",
    "length",
    "linein",
    "lineout",
    "lines",
    "linesize",
    "max",
    "min",
    "overlay",
    "pos",
    "queued",
    "random",
    "reverse",
    "right",
    "sign",
    "sourceline",
    "space",
    "storage",
    "stream",
    "strip",
    "substr",
    "subword",
    "symbol",
    "time",
    "trace",
    "translate",
    "trunc",
    "userid",
    "value",
    "verify",
    "word",
    "wordindex",
    "wordlength",
    "wordpos",
    "words",
    "x2b",
    "x2c",
    "x2d",
    "xrange",
];

/// Built-in CMS Pipelines stages.
pub const PIPELINE_STAGES: &[&str] = &[
    "abbrev",
    "addpipe",
    "addrdw",
    "aggrc",
    "all",
    "append",
    "asmcont",
    "asmfind",
    "asmnfind",
    "asmxpnd",
    "beat",
    "between",
    "block",
    "buffer",
    "casei",
    "change",
    "chop",
    "cms",
    "collate",
    "combine",
    "command",
    "console",
    "copy",
    "count",
    "cp",
    "deal",
    "deblock",
    "delay",
    "diskback",
    "diskrandom",
    "diskslow",
    "diskupdate",
    "drop",
    "duplicate",
    "elastic",
    "emsg",
    "eofback",
    "escape",
    "fanin",
    "faninany",
    "fanintwo",
    "fanout",
    "fanoutwo",
    "fblock",
    "fileback",
    "filedescriptor",
    "filelist",
    "filerandom",
    "fileslow",
    "filetoken",
    "fileupdate",
    "fillup",
    "find",
    "fitting",
    "fmtfst",
    "frlabel",
    "frtarget",
    "fullscr",
    "gate",
    "gather",
    "getfiles",
    "help",
    "hole",
    "hostbyaddr",
    "hostbyname",
    "hostid",
    "immcmd",
    "insert",
    "inside",
    "instore",
    "join",
    "juxtapose",
    "literal",
    "locate",
    "lookup",
    "maclib",
    "mdiskblk",
    "merge",
    "nfind",
    "nlocate",
    "noeofback",
    "not",
    "notinside",
    "outside",
    "outstore",
    "overlay",
    "overstr",
    "pack",
    "pad",
    "parcel",
    "pick",
    "pipcmd",
    "pipestop",
    "polish",
    "predselect",
    "preface",
    "qsam",
    "query",
    "random",
    "reader",
    "retab",
    "reverse",
    "rexx",
    "rexxvars",
    "scm",
    "sfsback",
    "sfsrandom",
    "sfsupdate",
    "snake",
    "sort",
    "space",
    "specs",
    "spill",
    "split",
    "stack",
    "starmsg",
    "state",
    "stem",
    "strfind",
    "strip",
    "strliteral",
    "strnfind",
    "strtolabel",
    "strwhilelabel",
    "subcom",
    "substring",
    "synchronise",
    "synchronize",
    "take",
    "tcpclient",
    "tcpdata",
    "tcplisten",
    "timestamp",
    "tokenise",
    "tokenize",
    "trfread",
    "udp",
    "unique",
    "unpack",
    "untab",
    "update",
    "var",
    "vardrop",
    "varfetch",
    "varload",
    "varset",
    "vchar",
    "whilelabel",
    "xedit",
    "xlate",
    "xpndhi",
    "xrange",
    "zone",
];

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| KEYWORDS.iter().copied().collect());
static BUILTIN_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| BUILTINS.iter().copied().collect());
static STAGE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PIPELINE_STAGES.iter().copied().collect());

/// True if `word` is a reserved keyword, in any letter case.
pub fn is_keyword(word: &str) -> bool {
    contains_ignore_case(&KEYWORD_SET, word)
}

/// True if `word` names a built-in function, in any letter case.
pub fn is_builtin(word: &str) -> bool {
    contains_ignore_case(&BUILTIN_SET, word)
}

/// True if `word` names a known pipeline stage, in any letter case.
pub fn is_stage_name(word: &str) -> bool {
    contains_ignore_case(&STAGE_SET, word)
}

fn contains_ignore_case(set: &HashSet<&'static str>, word: &str) -> bool {
    if word.bytes().any(|b| b.is_ascii_uppercase()) {
        set.contains(word.to_ascii_lowercase().as_str())
    } else {
        set.contains(word)
    }
}

/// Names one of the vocabulary tables, for tools that list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vocabulary {
    Keywords,
    Builtins,
    Stages,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 3] = [Vocabulary::Keywords, Vocabulary::Builtins, Vocabulary::Stages];

    pub fn words(self) -> &'static [&'static str] {
        match self {
            Vocabulary::Keywords => KEYWORDS,
            Vocabulary::Builtins => BUILTINS,
            Vocabulary::Stages => PIPELINE_STAGES,
        }
    }

    pub fn contains(self, word: &str) -> bool {
        match self {
            Vocabulary::Keywords => is_keyword(word),
            Vocabulary::Builtins => is_builtin(word),
            Vocabulary::Stages => is_stage_name(word),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Vocabulary::Keywords => "keywords",
            Vocabulary::Builtins => "builtins",
            Vocabulary::Stages => "stages",
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown table name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVocabulary(pub String);

impl fmt::Display for UnknownVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown vocabulary '{}' (expected keywords, builtins or stages)",
            self.0
        )
    }
}

impl std::error::Error for UnknownVocabulary {}

impl FromStr for Vocabulary {
    type Err = UnknownVocabulary;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keywords" | "keyword" => Ok(Vocabulary::Keywords),
            "builtins" | "builtin" => Ok(Vocabulary::Builtins),
            "stages" | "stage" => Ok(Vocabulary::Stages),
            _ => Err(UnknownVocabulary(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase_and_sorted() {
        for vocabulary in Vocabulary::ALL {
            let words = vocabulary.words();
            assert!(words.iter().all(|w| *w == w.to_ascii_lowercase()));
            assert!(
                words.windows(2).all(|pair| pair[0] < pair[1]),
                "{} table is not sorted",
                vocabulary
            );
        }
    }

    #[test]
    fn test_membership_ignores_case() {
        assert!(is_keyword("do"));
        assert!(is_keyword("DO"));
        assert!(is_keyword("Do"));
        assert!(is_builtin("SubStr"));
        assert!(is_stage_name("CONSOLE"));
        assert!(!is_keyword("dough"));
        assert!(!is_stage_name(""));
    }

    #[test]
    fn test_overlapping_words() {
        // present in both tables; the classifier gives keywords priority
        for word in ["address", "arg", "digits", "form", "fuzz", "trace", "value"] {
            assert!(is_keyword(word), "{word}");
            assert!(is_builtin(word), "{word}");
        }
    }

    #[test]
    fn test_parse_vocabulary_names() {
        assert_eq!("stages".parse::<Vocabulary>(), Ok(Vocabulary::Stages));
        assert_eq!("Keyword".parse::<Vocabulary>(), Ok(Vocabulary::Keywords));
        assert!("verbs".parse::<Vocabulary>().is_err());
    }
}
