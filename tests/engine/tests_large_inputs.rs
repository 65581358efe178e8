#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Inputs far larger than any hand-written sample.

use std::time::{Duration, Instant};

use highlight::languages::javascript;
use highlight::{Highlighter, LexOptions};

use crate::helpers::span_assertions::assert_covers;

#[test]
fn test_half_megabyte_of_punctuation_is_accepted() {
    let highlighter = Highlighter::with_bundled().unwrap();
    let text = ";".repeat(500_001);

    let output = highlighter.lex(&text, javascript::NAME).unwrap();
    assert_covers(&text, &output.spans);
    assert_eq!(output.spans.len(), 500_001);
    assert!(output.spans.iter().all(|s| s.class_name == "punctuation"));
    assert_eq!(output.relevance, 1);

    let detection = highlighter.detect(&text, &[]).unwrap();
    assert_eq!(detection.language, javascript::NAME);
    assert!(detection.scores[0].error.is_none());
}

#[test]
fn test_default_budget_is_exactly_enough() {
    // Each ';' enters and leaves a mode, plus the final step.
    let text = ";".repeat(1_000);
    assert_eq!(LexOptions::default().step_limit_for(&text), 2_001);

    let tight = LexOptions {
        step_limit: Some(2_001),
        ..LexOptions::default()
    };
    let highlighter = Highlighter::with_bundled().unwrap().with_options(tight);
    assert!(highlighter.lex(&text, javascript::NAME).is_ok());

    let short = LexOptions {
        step_limit: Some(2_000),
        ..LexOptions::default()
    };
    let highlighter = Highlighter::with_bundled().unwrap().with_options(short);
    assert!(highlighter.lex(&text, javascript::NAME).is_err());
}

#[test]
fn test_lexing_time_grows_linearly() {
    let highlighter = Highlighter::with_bundled().unwrap();
    let text = "a;".repeat(150_000);

    let started = Instant::now();
    let output = highlighter.lex(&text, javascript::NAME).unwrap();
    let elapsed = started.elapsed();

    assert_covers(&text, &output.spans);
    assert_eq!(output.spans.len(), 300_000);
    assert!(
        elapsed < Duration::from_secs(30),
        "lexing {} bytes took {elapsed:?}",
        text.len()
    );
}

#[test]
fn test_long_unterminated_comment() {
    let highlighter = Highlighter::with_bundled().unwrap();
    let text = format!("/*{}", "x;".repeat(200_000));

    let started = Instant::now();
    let output = highlighter.lex(&text, javascript::NAME).unwrap();
    assert!(started.elapsed() < Duration::from_secs(30));

    assert_eq!(output.spans.len(), 1);
    assert_eq!(output.spans[0].class_name, "comment multiline");
    assert_eq!(output.diagnostics.len(), 1);
}
