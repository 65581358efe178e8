//! Grammar definitions bundled with the engine.
//!
//! These are configuration, not engine logic: each function returns a
//! [`LanguageDefinition`] the caller registers like any other grammar.

pub mod javascript;

use crate::grammar::LanguageDefinition;

/// Every bundled grammar, in registration order.
pub fn bundled() -> Vec<LanguageDefinition> {
    vec![javascript::definition()]
}
