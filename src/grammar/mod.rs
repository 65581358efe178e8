//! Grammar definitions and their compiled form.
//!
//! ```text
//! LanguageDefinition (configuration, serde)
//!     ↓ compile()
//! CompiledGrammar (resolved mode ids, compiled patterns, keyword tables)
//! ```

mod compiled;
mod definition;

pub use compiled::{CompiledGrammar, CompiledMode, ModeId, compile};
pub use definition::{KeywordSet, LanguageDefinition, ModeDefinition};
