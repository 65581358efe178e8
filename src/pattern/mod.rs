//! Pattern matcher: the single regex primitive the lexer builds on.
//!
//! The lexer only ever asks one question: "where is the first match of this
//! pattern at or after `position`?". That question is the [`Matcher`] trait,
//! so the regular-expression engine can be replaced without touching the
//! lexer's control logic. [`RegexPattern`] answers it with the `regex` crate.
//!
//! A pattern is searched in the text that starts at the scan position, so
//! `^` anchors there. Grammars use an `end` of `^` for modes that close right
//! after their begin token.

use std::fmt;

use regex::{Regex, RegexBuilder};

/// Anchored-search primitive used for every `begin`, `end`, `illegal` and
/// lexem pattern.
///
/// Only [`find`](Matcher::find) is required. The provided methods derive
/// from it; implementations override them when they can answer faster, and
/// must then agree with `find` on the same `(text, position)`.
pub trait Matcher: fmt::Debug + Send + Sync {
    /// First match at or after `position`, as absolute `(start, end)` byte
    /// offsets into `text`.
    fn find(&self, text: &str, position: usize) -> Option<(usize, usize)>;

    /// The pattern source as authored
    fn as_str(&self) -> &str;

    /// First non-empty match at or after `position`. After an empty match
    /// the search resumes one character further on.
    fn find_non_empty(&self, text: &str, mut position: usize) -> Option<(usize, usize)> {
        loop {
            let (start, end) = self.find(text, position)?;
            if end > start {
                return Some((start, end));
            }
            let step = text.get(start..)?.chars().next()?.len_utf8();
            position = start + step;
        }
    }

    /// End of the match that starts exactly at `position`, if there is one.
    fn match_at(&self, text: &str, position: usize) -> Option<usize> {
        self.find(text, position)
            .filter(|&(start, _)| start == position)
            .map(|(_, end)| end)
    }
}

/// A compiled pattern as stored in a compiled grammar.
pub type Pattern = Box<dyn Matcher>;

/// Flags applied to every pattern of one grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct PatternOptions {
    pub case_insensitive: bool,
    /// `^`/`$` also match at line boundaries
    pub multi_line: bool,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: true,
        }
    }
}

/// [`Matcher`] backed by [`regex::Regex`].
#[derive(Debug, Clone)]
pub struct RegexPattern {
    regex: Regex,
    /// The same pattern, only matching at the start of the haystack
    anchored: Option<Regex>,
}

impl RegexPattern {
    pub fn new(source: &str, options: PatternOptions) -> Result<Self, regex::Error> {
        let regex = build(source, options)?;
        // A pattern that ends in an `(?x)` comment cannot be wrapped; it falls
        // back to the unanchored search.
        let anchored = build(&format!(r"\A(?:{source})"), options).ok();
        Ok(Self { regex, anchored })
    }
}

fn build(source: &str, options: PatternOptions) -> Result<Regex, regex::Error> {
    RegexBuilder::new(source)
        .case_insensitive(options.case_insensitive)
        .multi_line(options.multi_line)
        .build()
}

impl Matcher for RegexPattern {
    fn find(&self, text: &str, position: usize) -> Option<(usize, usize)> {
        let haystack = text.get(position..)?;
        self.regex
            .find(haystack)
            .map(|m| (position + m.start(), position + m.end()))
    }

    fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    fn find_non_empty(&self, text: &str, position: usize) -> Option<(usize, usize)> {
        let haystack = text.get(position..)?;
        self.regex
            .find_iter(haystack)
            .find(|m| !m.is_empty())
            .map(|m| (position + m.start(), position + m.end()))
    }

    fn match_at(&self, text: &str, position: usize) -> Option<usize> {
        let Some(anchored) = &self.anchored else {
            return self
                .find(text, position)
                .filter(|&(start, _)| start == position)
                .map(|(_, end)| end);
        };
        let haystack = text.get(position..)?;
        anchored.find(haystack).map(|m| position + m.end())
    }
}

/// Compile `source` into the engine's pattern type.
pub fn compile(source: &str, options: PatternOptions) -> Result<Pattern, regex::Error> {
    Ok(Box::new(RegexPattern::new(source, options)?))
}
