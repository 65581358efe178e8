//! Grammar registry.
//!
//! Owns compiled grammars by name, in registration order. Grammars are
//! compiled before they are published, so readers only ever see complete,
//! validated grammars. Readers take `Arc` snapshots and never hold the lock
//! while lexing.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use smol_str::SmolStr;

use crate::errors::{ConfigError, LexError};
use crate::grammar::{self, CompiledGrammar, LanguageDefinition};

/// Registered grammars by name.
#[derive(Debug, Default)]
pub struct Registry {
    grammars: RwLock<IndexMap<SmolStr, Arc<CompiledGrammar>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `definition` under its own name.
    pub fn register(&self, definition: &LanguageDefinition) -> Result<(), ConfigError> {
        self.register_as(&definition.name, definition)
    }

    /// Register `definition` under `name`.
    ///
    /// A failure leaves the registry unchanged; other grammars stay usable.
    pub fn register_as(&self, name: &str, definition: &LanguageDefinition) -> Result<(), ConfigError> {
        let name = name.trim();
        if self.contains(name) {
            return Err(ConfigError::DuplicateGrammar(SmolStr::new(name)));
        }

        let compiled = grammar::compile(name, definition)?;

        let mut grammars = self.grammars.write();
        if grammars.contains_key(compiled.name()) {
            return Err(ConfigError::DuplicateGrammar(compiled.name().clone()));
        }
        tracing::debug!(grammar = %compiled.name(), "registered grammar");
        grammars.insert(compiled.name().clone(), Arc::new(compiled));
        Ok(())
    }

    /// Remove a grammar. Runs already holding it keep their snapshot.
    pub fn unregister(&self, name: &str) -> bool {
        self.grammars.write().shift_remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<Arc<CompiledGrammar>> {
        self.grammars.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.grammars.read().contains_key(name)
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<SmolStr> {
        self.grammars.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.grammars.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.read().is_empty()
    }

    /// Every grammar in registration order
    pub fn snapshot(&self) -> Vec<Arc<CompiledGrammar>> {
        self.grammars.read().values().cloned().collect()
    }

    /// The grammars named in `names`, in registration order. An empty
    /// `names` selects every grammar.
    pub fn select(&self, names: &[&str]) -> Result<Vec<Arc<CompiledGrammar>>, LexError> {
        let grammars = self.grammars.read();
        if grammars.is_empty() {
            return Err(LexError::NoGrammars);
        }
        if names.is_empty() {
            return Ok(grammars.values().cloned().collect());
        }

        let mut indices = names
            .iter()
            .map(|name| {
                grammars
                    .get_index_of(*name)
                    .ok_or_else(|| LexError::UnknownLanguage(SmolStr::new(name)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        indices.sort_unstable();
        indices.dedup();

        Ok(indices
            .into_iter()
            .filter_map(|i| grammars.get_index(i).map(|(_, g)| Arc::clone(g)))
            .collect())
    }
}
