//! Grammar definitions as authored.
//!
//! These types are plain configuration: nothing here is validated until the
//! definition is compiled by the registry. With the `serde` feature they
//! deserialize from the camelCase object layout grammars are written in:
//!
//! ```json
//! {
//!   "name": "javascript",
//!   "defaultMode": { "lexems": ["\\b[a-zA-Z]+"], "keywords": { "keyword": { "for": 1 } },
//!                    "contains": ["comment single"] },
//!   "modes": [ { "className": "comment single", "begin": "//", "end": "$", "relevance": 0 } ]
//! }
//! ```

use indexmap::{IndexMap, IndexSet};

use crate::base::constants::DEFAULT_RELEVANCE;
use crate::pattern::PatternOptions;

/// One language: its default mode plus every mode reachable by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LanguageDefinition {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub options: PatternOptions,
    pub default_mode: ModeDefinition,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modes: Vec<ModeDefinition>,
}

impl LanguageDefinition {
    pub fn new(name: impl Into<String>, default_mode: ModeDefinition) -> Self {
        Self {
            name: name.into(),
            options: PatternOptions::default(),
            default_mode,
            modes: Vec::new(),
        }
    }

    /// Add a mode that `contains` lists can refer to by class name.
    pub fn mode(mut self, mode: ModeDefinition) -> Self {
        self.modes.push(mode);
        self
    }

    pub fn with_options(mut self, options: PatternOptions) -> Self {
        self.options = options;
        self
    }
}

/// A lexical region: begin/end boundaries, nested regions, keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ModeDefinition {
    pub class_name: String,
    pub begin: Option<String>,
    pub end: Option<String>,
    pub illegal: Option<String>,
    /// Class names of the modes that may open inside this one, in priority order
    pub contains: Vec<String>,
    /// Category name to words, in lookup priority order
    pub keywords: IndexMap<String, KeywordSet>,
    /// Patterns that carve keyword candidates out of this mode's text
    pub lexems: Vec<String>,
    pub relevance: i32,
}

impl Default for ModeDefinition {
    fn default() -> Self {
        Self {
            class_name: String::new(),
            begin: None,
            end: None,
            illegal: None,
            contains: Vec::new(),
            keywords: IndexMap::new(),
            lexems: Vec::new(),
            relevance: DEFAULT_RELEVANCE,
        }
    }
}

impl ModeDefinition {
    /// A mode entered by `begin` and left by `end`.
    pub fn new(class_name: impl Into<String>, begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            begin: Some(begin.into()),
            end: Some(end.into()),
            ..Self::default()
        }
    }

    /// The mode active when lexing starts. It has no boundaries.
    pub fn default_mode() -> Self {
        Self::default()
    }

    pub fn contains<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contains.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn illegal(mut self, pattern: impl Into<String>) -> Self {
        self.illegal = Some(pattern.into());
        self
    }

    pub fn relevance(mut self, relevance: i32) -> Self {
        self.relevance = relevance;
        self
    }

    pub fn lexems<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lexems.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Add words to a keyword category. Categories are looked up in the
    /// order they are first added.
    pub fn keywords<I, S>(mut self, category: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords
            .entry(category.into())
            .or_default()
            .extend(words);
        self
    }
}

/// Words of one keyword category.
///
/// Serialized grammars write a category either as a list of words or as an
/// object whose keys are the words (`{"for": 1, "in": 1}`); the values are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "serde_repr::KeywordSetRepr", into = "Vec<String>")
)]
pub struct KeywordSet(IndexSet<String>);

impl KeywordSet {
    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(words.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.0.into_iter().collect()
    }
}

#[cfg(feature = "serde")]
mod serde_repr {
    use indexmap::IndexMap;
    use serde::de::IgnoredAny;

    use super::KeywordSet;

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    pub(super) enum KeywordSetRepr {
        List(Vec<String>),
        Map(IndexMap<String, IgnoredAny>),
    }

    impl From<KeywordSetRepr> for KeywordSet {
        fn from(repr: KeywordSetRepr) -> Self {
            match repr {
                KeywordSetRepr::List(words) => words.into_iter().collect(),
                KeywordSetRepr::Map(words) => words.into_keys().collect(),
            }
        }
    }
}
