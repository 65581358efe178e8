//! Error code definitions for engine diagnostics
//!
//! Error codes follow a naming convention: H{category}{number}
//! - H01xx: Grammar configuration errors (raised at registration)
//! - H02xx: Lexing errors and diagnostics (raised by a lex run)

use std::fmt;

/// Error codes for engine diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // H01xx: Grammar configuration errors
    // =========================================================================
    /// `contains` references a mode that does not exist
    H0101,
    /// Two modes of one grammar share a class name
    H0102,
    /// A required pattern field is absent
    H0103,
    /// A pattern is not a valid regular expression
    H0104,
    /// A grammar with this name is already registered
    H0105,
    /// Grammar name is empty
    H0106,
    /// Grammar document could not be read or deserialized
    H0107,

    // =========================================================================
    // H02xx: Lexing errors and diagnostics
    // =========================================================================
    /// An `illegal` pattern matched
    H0201,
    /// A mode reached end of input without its `end` matching
    H0202,
    /// The transition budget was exhausted
    H0203,
    /// The mode stack grew past its depth limit
    H0204,
    /// No grammar is registered under the requested name
    H0205,
    /// Detection was requested with no grammars registered
    H0206,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "H0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H0101 => "H0101",
            Self::H0102 => "H0102",
            Self::H0103 => "H0103",
            Self::H0104 => "H0104",
            Self::H0105 => "H0105",
            Self::H0106 => "H0106",
            Self::H0107 => "H0107",
            Self::H0201 => "H0201",
            Self::H0202 => "H0202",
            Self::H0203 => "H0203",
            Self::H0204 => "H0204",
            Self::H0205 => "H0205",
            Self::H0206 => "H0206",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::H0101
            | Self::H0102
            | Self::H0103
            | Self::H0104
            | Self::H0105
            | Self::H0106
            | Self::H0107 => "configuration error",
            Self::H0201 | Self::H0202 | Self::H0203 | Self::H0204 => "lexing error",
            Self::H0205 | Self::H0206 => "lookup error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::H0101 => "unresolved mode reference",
            Self::H0102 => "duplicate mode class name",
            Self::H0103 => "missing required pattern",
            Self::H0104 => "invalid regular expression",
            Self::H0105 => "duplicate grammar name",
            Self::H0106 => "empty grammar name",
            Self::H0107 => "invalid grammar document",
            Self::H0201 => "illegal sequence",
            Self::H0202 => "unterminated mode",
            Self::H0203 => "step limit exceeded",
            Self::H0204 => "nesting too deep",
            Self::H0205 => "unknown language",
            Self::H0206 => "no grammars registered",
        }
    }

    /// Check if this is a configuration error (raised at registration)
    pub fn is_config(&self) -> bool {
        matches!(self.category_description(), "configuration error")
    }

    /// Check if this is a recoverable condition (the lex run completes)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::H0202)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
