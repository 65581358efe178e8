//! Keyword classification.
//!
//! A mode's own text is carved into candidate words with the mode's lexem
//! patterns. Each candidate is looked up in the mode's keyword table; a hit
//! is emitted with the category name as its class, everything else keeps the
//! mode's class. The output covers the input fragment exactly.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::Span;
use crate::grammar::{CompiledMode, KeywordSet};

/// Per-mode keyword lookup built once when a grammar is compiled.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    /// Category names in priority order
    categories: Vec<SmolStr>,
    /// Word to index into `categories`
    words: FxHashMap<SmolStr, usize>,
    case_insensitive: bool,
}

impl KeywordTable {
    /// Build the table. A word listed in several categories belongs to the
    /// first one.
    pub fn build(keywords: &IndexMap<String, KeywordSet>, case_insensitive: bool) -> Self {
        let mut table = Self {
            categories: Vec::with_capacity(keywords.len()),
            words: FxHashMap::default(),
            case_insensitive,
        };
        for (index, (category, words)) in keywords.iter().enumerate() {
            table.categories.push(SmolStr::new(category));
            for word in words.iter() {
                let key = table.normalize(word);
                table.words.entry(key).or_insert(index);
            }
        }
        table
    }

    fn normalize(&self, word: &str) -> SmolStr {
        if self.case_insensitive {
            SmolStr::new(word.to_lowercase())
        } else {
            SmolStr::new(word)
        }
    }

    /// Category of `word`, if it is a keyword
    pub fn lookup(&self, word: &str) -> Option<&SmolStr> {
        let index = if self.case_insensitive {
            self.words.get(word.to_lowercase().as_str())
        } else {
            self.words.get(word)
        }?;
        self.categories.get(*index)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn categories(&self) -> &[SmolStr] {
        &self.categories
    }
}

/// Classify `text[offset..end]` as own text of `mode`, appending the
/// resulting spans to `out`. An empty range produces nothing.
pub fn classify<'a>(
    text: &'a str,
    offset: usize,
    end: usize,
    mode: &CompiledMode,
    out: &mut Vec<Span<'a>>,
) {
    if offset >= end {
        return;
    }
    if mode.keywords.is_empty() {
        out.push(Span::new(mode.class_name.clone(), &text[offset..end], offset));
        return;
    }

    let fragment = &text[..end];
    let mut plain_start = offset;
    let mut pos = offset;
    while pos < end {
        let Some((word_start, word_end)) = next_word(fragment, pos, mode) else {
            break;
        };
        if let Some(category) = mode.keywords.lookup(&fragment[word_start..word_end]) {
            if plain_start < word_start {
                out.push(Span::new(
                    mode.class_name.clone(),
                    &text[plain_start..word_start],
                    plain_start,
                ));
            }
            out.push(Span::new(
                category.clone(),
                &text[word_start..word_end],
                word_start,
            ));
            plain_start = word_end;
        }
        pos = word_end;
    }
    if plain_start < end {
        out.push(Span::new(
            mode.class_name.clone(),
            &text[plain_start..end],
            plain_start,
        ));
    }
}

/// Earliest non-empty lexem match at or after `pos`; ties go to the first
/// listed lexem.
fn next_word(fragment: &str, pos: usize, mode: &CompiledMode) -> Option<(usize, usize)> {
    let mut from = pos;
    while from < fragment.len() {
        let mut best: Option<(usize, usize)> = None;
        let mut empty_at: Option<usize> = None;
        for lexem in &mode.lexems {
            match lexem.find(fragment, from) {
                Some((start, end)) if end > start => {
                    if best.is_none_or(|(b, _)| start < b) {
                        best = Some((start, end));
                    }
                }
                Some((start, _)) => empty_at = Some(empty_at.map_or(start, |e| e.min(start))),
                None => {}
            }
        }
        match (best, empty_at) {
            (Some(found), _) => return Some(found),
            // Only empty matches: step one char past the first of them.
            (None, Some(at)) => {
                from = at + fragment[at..].chars().next().map_or(1, char::len_utf8);
            }
            (None, None) => return None,
        }
    }
    None
}
