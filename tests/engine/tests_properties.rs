#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Coverage and determinism over fixed and generated inputs.

use highlight::languages::javascript;
use highlight::{Highlighter, LexError};

use crate::helpers::grammar_fixtures::{BRACES, PYTHON_LIKE, all_fixtures};
use crate::helpers::span_assertions::assert_covers;

const SAMPLES: &[&str] = &[
    "",
    " ",
    "\n\n",
    "function add(a,b){return a+b;}",
    "var s = \"a\\\"b\"; // trailing",
    "/* never closed",
    "x = y / z / w",
    "if (a) { b(); } else { c[0] = .5e3; }",
    "def f(x):\n    return x # done",
    "{ { } } { }",
    "{ unclosed",
    "héllo → wörld { ü }",
    "@decorated\nclass C: pass",
];

const ALPHABET: &[&str] = &[
    "a", "b", "x", " ", "\n", "{", "}", "(", ")", ";", "/", "*", "'", "\"", "\\", "#", "@", "0",
    "7", ".", "=", "+", "é", "→", "function", "return", "def", "None", "null",
];

/// Deterministic pseudo-random strings built from `ALPHABET`.
struct Generator(u64);

impl Generator {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn text(&mut self, max_pieces: u64) -> String {
        let pieces = self.next() % (max_pieces + 1);
        (0..pieces)
            .map(|_| ALPHABET[(self.next() % ALPHABET.len() as u64) as usize])
            .collect()
    }
}

/// The only character sequence each fixture grammar rejects.
fn illegal_text(language: &str) -> &'static str {
    match language {
        BRACES => ";",
        _ => "\n",
    }
}

fn check(highlighter: &Highlighter, text: &str, language: &str) {
    match highlighter.lex(text, language) {
        Ok(output) => {
            assert_covers(text, &output.spans);
            assert!(output.spans.iter().all(|s| !s.is_empty()));
            assert!(output.relevance >= 1, "{language}: {text:?}");
            let end = highlight::text_size(text.len());
            let mut previous = None;
            for diagnostic in &output.diagnostics {
                assert_eq!(diagnostic.range.end(), end, "{language}: {text:?}");
                // outermost first
                assert!(previous < Some(diagnostic.range.start()));
                previous = Some(diagnostic.range.start());
            }
        }
        Err(LexError::IllegalSequence {
            offset, text: seq, ..
        }) => {
            assert_eq!(seq, illegal_text(language), "{language}: {text:?}");
            assert_eq!(&text[offset..offset + seq.len()], seq);
        }
        Err(other) => panic!("{language}: unexpected error {other:?} for {text:?}"),
    }
}

#[test]
fn test_samples_are_covered() {
    let highlighter = all_fixtures();
    for language in [javascript::NAME, PYTHON_LIKE, BRACES] {
        for text in SAMPLES {
            check(&highlighter, text, language);
        }
    }
}

#[test]
fn test_generated_inputs_are_covered_or_rejected() {
    let highlighter = all_fixtures();
    let mut generator = Generator(0x5eed);
    for _ in 0..400 {
        let text = generator.text(24);
        for language in [javascript::NAME, PYTHON_LIKE, BRACES] {
            check(&highlighter, &text, language);
        }
    }
}

#[test]
fn test_runs_are_deterministic() {
    let highlighter = all_fixtures();
    let mut generator = Generator(42);
    for _ in 0..100 {
        let text = generator.text(16);
        for language in [javascript::NAME, PYTHON_LIKE, BRACES] {
            let first = highlighter.lex(&text, language);
            let second = highlighter.lex(&text, language);
            assert_eq!(first, second, "{language}: {text:?}");
        }
        assert_eq!(
            highlighter.detect(&text, &[]),
            highlighter.detect(&text, &[])
        );
    }
}

#[test]
fn test_deep_nesting_is_bounded() {
    let highlighter = all_fixtures();
    let text = "{".repeat(5_000);
    let err = highlighter.highlight(&text, BRACES).unwrap_err();
    assert!(matches!(err, LexError::NestingTooDeep { depth: 1024, .. }));
}
