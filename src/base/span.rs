//! Classified spans produced by a lex run.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::constants::PLAIN_CLASS;

/// Convert a byte offset to a [`TextSize`]. Offsets past `u32::MAX` saturate.
pub fn text_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or(TextSize::new(u32::MAX))
}

/// One classified, contiguous substring of the input.
///
/// Offsets are byte offsets into the lexed text. A lex run produces spans
/// that are ordered, gap-free and non-overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span<'a> {
    pub class_name: SmolStr,
    pub text: &'a str,
    pub offset: usize,
}

impl<'a> Span<'a> {
    pub fn new(class_name: SmolStr, text: &'a str, offset: usize) -> Self {
        Self {
            class_name,
            text,
            offset,
        }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Offset one past the last byte of this span
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// True when the span carries no classification
    pub fn is_plain(&self) -> bool {
        self.class_name == PLAIN_CLASS
    }

    /// The span as a [`TextRange`], saturating at `u32::MAX`
    pub fn range(&self) -> TextRange {
        TextRange::new(text_size(self.offset), text_size(self.end()))
    }
}

/// Check that `spans` cover `text` exactly: first span at 0, each span
/// starting where the previous one ended, last span ending at `text.len()`.
pub fn check_coverage(text: &str, spans: &[Span<'_>]) -> bool {
    let mut expected = 0;
    for span in spans {
        if span.offset != expected || span.is_empty() {
            return false;
        }
        if text.get(span.offset..span.end()) != Some(span.text) {
            return false;
        }
        expected = span.end();
    }
    expected == text.len()
}
