//! Foundation types for the highlighting engine.
//!
//! This module provides fundamental types used throughout the engine:
//! - [`Span`] - One classified, contiguous slice of the input
//! - [`TextRange`], [`TextSize`] - Byte offsets into the input
//! - Shared pattern constants used by grammar definitions
//!
//! This module has NO dependencies on other engine modules.

pub mod constants;
mod span;

pub use span::{Span, check_coverage, text_size};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
