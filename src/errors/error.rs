//! Engine error types
//!
//! - [`ConfigError`] is fatal to the registration of one grammar
//! - [`LexError`] is fatal to one lex run
//! - [`Diagnostic`] records a recoverable condition without failing the run

use smol_str::SmolStr;
use text_size::TextRange;
use thiserror::Error;

use super::codes::ErrorCode;
use crate::base::text_size;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// A hard error that stops the lex run
    Error,
    /// A condition the lexer recovered from
    #[default]
    Warning,
    /// An informational hint
    Hint,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Hint => "hint",
        }
    }
}

/// Errors raised while validating and compiling a grammar definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A `contains` entry names no mode of the grammar.
    #[error("grammar '{grammar}': mode '{mode}' contains unknown mode '{reference}'")]
    UnresolvedReference {
        grammar: SmolStr,
        mode: SmolStr,
        reference: SmolStr,
    },

    /// Two modes share a class name, so references to it are ambiguous.
    #[error("grammar '{grammar}': mode '{class_name}' is defined more than once")]
    DuplicateMode { grammar: SmolStr, class_name: SmolStr },

    /// A non-default mode lacks its `begin` or `end` pattern.
    #[error("grammar '{grammar}': mode '{mode}' has no '{field}' pattern")]
    MissingPattern {
        grammar: SmolStr,
        mode: SmolStr,
        field: &'static str,
    },

    /// A pattern failed to compile.
    #[error("grammar '{grammar}': mode '{mode}' has invalid '{field}' pattern /{pattern}/: {message}")]
    InvalidPattern {
        grammar: SmolStr,
        mode: SmolStr,
        field: &'static str,
        pattern: String,
        message: String,
    },

    /// A grammar with the same name is already registered.
    #[error("grammar '{0}' is already registered")]
    DuplicateGrammar(SmolStr),

    /// The grammar has an empty name.
    #[error("grammar name must not be empty")]
    EmptyName,

    /// A grammar document could not be read or deserialized.
    #[error("cannot load grammar from {source_name}: {message}")]
    Document { source_name: String, message: String },
}

impl ConfigError {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(
        grammar: &SmolStr,
        mode: &SmolStr,
        field: &'static str,
        pattern: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidPattern {
            grammar: grammar.clone(),
            mode: mode.clone(),
            field,
            pattern: pattern.to_string(),
            message: message.into(),
        }
    }

    /// Create a document error.
    pub fn document(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Document {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    /// The categorized code of this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnresolvedReference { .. } => ErrorCode::H0101,
            Self::DuplicateMode { .. } => ErrorCode::H0102,
            Self::MissingPattern { .. } => ErrorCode::H0103,
            Self::InvalidPattern { .. } => ErrorCode::H0104,
            Self::DuplicateGrammar(_) => ErrorCode::H0105,
            Self::EmptyName => ErrorCode::H0106,
            Self::Document { .. } => ErrorCode::H0107,
        }
    }
}

/// Errors that stop a lex run or a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The active mode's `illegal` pattern matched.
    #[error("illegal sequence {text:?} at offset {offset} in mode '{mode}' of grammar '{grammar}'")]
    IllegalSequence {
        offset: usize,
        text: String,
        grammar: SmolStr,
        mode: SmolStr,
    },

    /// The lexer performed more transitions than allowed.
    #[error("grammar '{grammar}' exceeded the step limit of {limit}")]
    StepLimitExceeded { grammar: SmolStr, limit: usize },

    /// The mode stack grew deeper than allowed.
    #[error("grammar '{grammar}' nested deeper than {depth} modes at offset {offset}")]
    NestingTooDeep {
        grammar: SmolStr,
        depth: usize,
        offset: usize,
    },

    /// No grammar is registered under this name.
    #[error("unknown language '{0}'")]
    UnknownLanguage(SmolStr),

    /// Detection was requested but no grammar is registered.
    #[error("no grammars registered")]
    NoGrammars,
}

impl LexError {
    /// The categorized code of this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::IllegalSequence { .. } => ErrorCode::H0201,
            Self::StepLimitExceeded { .. } => ErrorCode::H0203,
            Self::NestingTooDeep { .. } => ErrorCode::H0204,
            Self::UnknownLanguage(_) => ErrorCode::H0205,
            Self::NoGrammars => ErrorCode::H0206,
        }
    }

    /// Offset of the failure in the lexed text, if it has one
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::IllegalSequence { offset, .. } | Self::NestingTooDeep { offset, .. } => {
                Some(*offset)
            }
            _ => None,
        }
    }
}

/// A recoverable condition recorded during a lex run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Categorized error code
    pub code: ErrorCode,
    /// Diagnostic severity
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Source location
    pub range: TextRange,
    /// Class name of the mode the diagnostic refers to
    pub mode: SmolStr,
}

impl Diagnostic {
    /// Create a diagnostic with the code's default message
    pub fn new(code: ErrorCode, range: TextRange, mode: SmolStr) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            message: code.default_message().to_string(),
            range,
            mode,
        }
    }

    /// One mode that was still open when the input ran out. Offsets past
    /// `u32::MAX` saturate.
    pub fn unterminated(mode: SmolStr, entry_offset: usize, end: usize) -> Self {
        let range = TextRange::new(text_size(entry_offset), text_size(end));
        Self::new(ErrorCode::H0202, range, mode.clone())
            .with_message(format!("mode '{}' is not terminated before end of input", mode))
    }

    /// Replace the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Format the diagnostic for display
    pub fn format(&self) -> String {
        format!(
            "{}[{}]: {} at {:?}",
            self.severity.as_str(),
            self.code,
            self.message,
            self.range
        )
    }
}
