//! # highlight-base
//!
//! Rule-driven syntax highlighting: grammars made of nested lexer modes,
//! keyword classification, and relevance-based language detection.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! engine    → Highlighter facade: register, highlight, detect_language
//!   ↓
//! detect    → Relevance scoring across grammars (rayon)
//!   ↓
//! lexer     → Mode stack state machine producing classified spans
//!   ↓
//! classify  → Keyword tables and per-word classification
//!   ↓
//! registry  → Named, compiled grammars behind a read-mostly lock
//!   ↓
//! grammar   → Definitions (configuration) and their compiled form
//!   ↓
//! pattern   → Anchored regex search primitive
//!   ↓
//! base      → Span, text offsets, shared pattern constants
//! ```

// ============================================================================
// MODULES (dependency order: base → pattern → grammar → registry → lexer → detect → engine)
// ============================================================================

/// Foundation types: Span, TextRange, pattern constants
pub mod base;

/// Error codes, configuration and lexing errors, diagnostics
pub mod errors;

/// Pattern matcher: the regex primitive behind every mode boundary
pub mod pattern;

/// Grammar definitions and compiled grammars
pub mod grammar;

/// Keyword tables and classification of a mode's own text
pub mod classify;

/// Grammar registry
pub mod registry;

/// Mode stack lexer
pub mod lexer;

/// Relevance scoring and language detection
pub mod detect;

/// Bundled grammar definitions
pub mod languages;

/// Grammar loading from JSON/YAML documents
#[cfg(feature = "serde")]
pub mod loader;

mod engine;

pub use engine::Highlighter;

// Re-export commonly needed items
pub use base::{Span, TextRange, TextSize, text_size};
pub use detect::{Detection, LanguageScore};
pub use errors::{ConfigError, Diagnostic, ErrorCode, LexError, Severity};
pub use grammar::{CompiledGrammar, LanguageDefinition, ModeDefinition};
pub use lexer::{LexOptions, LexOutput, Lexer};
pub use pattern::{Matcher, PatternOptions};
pub use registry::Registry;
