//! Error handling for the highlighting engine
//!
//! This module provides:
//! - Categorized error codes for filtering and documentation
//! - [`ConfigError`] raised while registering a grammar
//! - [`LexError`] raised by a lex run
//! - [`Diagnostic`] for recoverable conditions recorded during lexing

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{ConfigError, Diagnostic, LexError, Severity};
