//! Highlighter: the engine's public entry point.
//!
//! ```ignore
//! let highlighter = Highlighter::with_bundled()?;
//!
//! let spans = highlighter.highlight("var x = 1;", "javascript")?;
//! let language = highlighter.detect_language("function f() {}", &[])?;
//! ```

use crate::base::Span;
use crate::detect::{self, Detection};
use crate::errors::{ConfigError, LexError};
use crate::grammar::LanguageDefinition;
use crate::languages;
use crate::lexer::{LexOptions, LexOutput, Lexer};
use crate::registry::Registry;

/// A registry of grammars plus the lexing options applied to every run.
#[derive(Debug, Default)]
pub struct Highlighter {
    registry: Registry,
    options: LexOptions,
}

impl Highlighter {
    /// An engine with no grammars.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with every bundled grammar registered.
    pub fn with_bundled() -> Result<Self, ConfigError> {
        let highlighter = Self::new();
        for definition in languages::bundled() {
            highlighter.register(&definition)?;
        }
        Ok(highlighter)
    }

    pub fn with_options(mut self, options: LexOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> LexOptions {
        self.options
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register a grammar under its own name.
    pub fn register(&self, definition: &LanguageDefinition) -> Result<(), ConfigError> {
        self.registry.register(definition)
    }

    /// Register a grammar under `name`.
    pub fn register_as(&self, name: &str, definition: &LanguageDefinition) -> Result<(), ConfigError> {
        self.registry.register_as(name, definition)
    }

    /// Lex `text` with the grammar `language`, keeping relevance and
    /// diagnostics.
    pub fn lex<'a>(&self, text: &'a str, language: &str) -> Result<LexOutput<'a>, LexError> {
        let grammar = self
            .registry
            .get(language)
            .ok_or_else(|| LexError::UnknownLanguage(language.into()))?;
        Lexer::new(&grammar).with_options(self.options).run(text)
    }

    /// Classified spans covering `text`.
    pub fn highlight<'a>(&self, text: &'a str, language: &str) -> Result<Vec<Span<'a>>, LexError> {
        self.lex(text, language).map(|output| output.spans)
    }

    /// Score `text` against the named grammars (all of them when `languages`
    /// is empty).
    pub fn detect(&self, text: &str, languages: &[&str]) -> Result<Detection, LexError> {
        let grammars = self.registry.select(languages)?;
        detect::detect(text, &grammars, self.options)
    }

    /// Name of the grammar that best fits `text`.
    pub fn detect_language(&self, text: &str, languages: &[&str]) -> Result<String, LexError> {
        self.detect(text, languages)
            .map(|detection| detection.language.to_string())
    }
}
