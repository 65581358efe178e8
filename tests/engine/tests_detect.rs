#![allow(clippy::unwrap_used, clippy::expect_used)]

use highlight::languages::javascript;
use highlight::{Highlighter, LexError};
use rstest::rstest;

use crate::helpers::grammar_fixtures::{
    BRACES, PYTHON_LIKE, all_fixtures, braces, js_and_python, python_like,
};

const FUNCTION_DECL: &str = "function foo(){}";
const DECORATED: &str = "@cached\ndef f():\n    return None";

fn relevance_of(highlighter: &Highlighter, text: &str, language: &str) -> i64 {
    highlighter.lex(text, language).unwrap().relevance
}

// ============================================================================
// Picking a language
// ============================================================================

#[test]
fn test_function_declaration_is_javascript() {
    let highlighter = js_and_python();
    let detection = highlighter.detect(FUNCTION_DECL, &[]).unwrap();

    assert_eq!(detection.language, javascript::NAME);
    assert_eq!(detection.relevance, 8);
    let scores: Vec<(&str, i64)> = detection
        .scores
        .iter()
        .map(|s| (s.language.as_str(), s.relevance))
        .collect();
    assert_eq!(scores, vec![(javascript::NAME, 8), (PYTHON_LIKE, 1)]);
}

#[test]
fn test_decorator_is_python_like() {
    let highlighter = js_and_python();
    assert_eq!(highlighter.detect_language(DECORATED, &[]).unwrap(), PYTHON_LIKE);
    assert_eq!(relevance_of(&highlighter, DECORATED, PYTHON_LIKE), 1 + 3);
    assert_eq!(relevance_of(&highlighter, DECORATED, javascript::NAME), 1);
}

#[test]
fn test_candidate_list_restricts_detection() {
    let highlighter = js_and_python();
    assert_eq!(
        highlighter
            .detect_language(DECORATED, &[javascript::NAME])
            .unwrap(),
        javascript::NAME
    );
}

#[test]
fn test_empty_candidate_list_uses_every_grammar() {
    let highlighter = all_fixtures();
    let detection = highlighter.detect(FUNCTION_DECL, &[]).unwrap();
    assert_eq!(detection.scores.len(), 3);
    assert_eq!(detection.language, javascript::NAME);
}

#[test]
fn test_unknown_candidate() {
    let highlighter = all_fixtures();
    let err = highlighter
        .detect_language("x", &[javascript::NAME, "cobol"])
        .unwrap_err();
    assert_eq!(err, LexError::UnknownLanguage("cobol".into()));
}

#[test]
fn test_no_grammars_registered() {
    let highlighter = Highlighter::new();
    assert_eq!(
        highlighter.detect_language("x", &[]).unwrap_err(),
        LexError::NoGrammars
    );
}

// ============================================================================
// Scoring
// ============================================================================

#[rstest]
#[case::block_comment(" /* c */", 1)]
#[case::line_comment("// c\n", 0)]
#[case::regex_literal(" x = /ab/g;", 1)]
#[case::second_function(" function g(){}", 5 + 1 + 1)]
#[case::plain_words(" and more words", 0)]
fn test_relevance_grows_with_constructs(#[case] suffix: &str, #[case] gain: i64) {
    let highlighter = Highlighter::with_bundled().unwrap();
    let base = relevance_of(&highlighter, FUNCTION_DECL, javascript::NAME);
    let extended = relevance_of(
        &highlighter,
        &format!("{FUNCTION_DECL}{suffix}"),
        javascript::NAME,
    );
    assert_eq!(extended, base + gain);
}

#[test]
fn test_relevance_counts_entries_not_length() {
    let highlighter = Highlighter::with_bundled().unwrap();
    let short = relevance_of(&highlighter, "/* a */", javascript::NAME);
    let long = relevance_of(
        &highlighter,
        "/* a much longer comment that says nothing new */",
        javascript::NAME,
    );
    assert_eq!(short, long);
}

#[test]
fn test_rejecting_grammar_scores_zero() {
    let highlighter = all_fixtures();
    let detection = highlighter.detect("{a;}", &[BRACES, PYTHON_LIKE]).unwrap();

    assert_eq!(detection.language, PYTHON_LIKE);
    let braces_score = detection
        .scores
        .iter()
        .find(|s| s.language == BRACES)
        .unwrap();
    assert_eq!(braces_score.relevance, 0);
    assert!(matches!(
        braces_score.error,
        Some(LexError::IllegalSequence { offset: 2, .. })
    ));
}

#[test]
fn test_all_grammars_rejecting_falls_back_to_first() {
    let highlighter = js_and_python();
    let detection = highlighter.detect("'abc\ndef'", &[]).unwrap();
    assert_eq!(detection.relevance, 0);
    assert_eq!(detection.language, javascript::NAME);
    assert!(detection.scores.iter().all(|s| s.error.is_some()));
}

// ============================================================================
// Ties
// ============================================================================

#[test]
fn test_tie_goes_to_first_registered() {
    let highlighter = all_fixtures();
    assert_eq!(
        highlighter.detect_language("plain words", &[]).unwrap(),
        javascript::NAME
    );

    let reversed = Highlighter::new();
    reversed.register(&braces()).unwrap();
    reversed.register(&python_like()).unwrap();
    reversed.register(&javascript::definition()).unwrap();
    assert_eq!(reversed.detect_language("plain words", &[]).unwrap(), BRACES);
}

#[test]
fn test_tie_ignores_candidate_order() {
    let highlighter = all_fixtures();
    assert_eq!(
        highlighter
            .detect_language("", &[BRACES, PYTHON_LIKE, javascript::NAME])
            .unwrap(),
        javascript::NAME
    );
}
