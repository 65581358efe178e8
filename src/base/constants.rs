//! Shared pattern constants.
//!
//! Grammar definitions reference these building blocks instead of repeating
//! the same regular expressions in every language.

/// Identifier that may also start with an underscore
pub const UNDERSCORE_IDENT_RE: &str = r"[a-zA-Z_][a-zA-Z0-9_]*";

/// Lexem used to carve keyword candidates when a mode declares none
pub const WORD_RE: &str = r"\b\w+";

/// Reference to the grammar's default mode from a `contains` list
pub const DEFAULT_MODE_REF: &str = "$default";

/// Class name of unclassified text
pub const PLAIN_CLASS: &str = "";

/// Relevance of a mode that does not declare one
pub const DEFAULT_RELEVANCE: i32 = 1;
