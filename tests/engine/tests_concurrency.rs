#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::thread;

use highlight::languages::javascript;
use highlight::{ConfigError, ErrorCode};

use crate::helpers::grammar_fixtures::{PYTHON_LIKE, braces, js_and_python};
use crate::helpers::span_assertions::pairs;

const FUNCTION_DECL: &str = "function foo(){}";

#[test]
fn test_detection_runs_while_grammars_register() {
    let highlighter = js_and_python();
    let definition = braces();

    thread::scope(|scope| {
        for writer in 0..4 {
            let highlighter = &highlighter;
            let definition = &definition;
            scope.spawn(move || {
                for i in 0..8 {
                    let name = format!("braces-{writer}-{i}");
                    highlighter.register_as(&name, definition).unwrap();
                }
            });
        }
        for _ in 0..4 {
            let highlighter = &highlighter;
            scope.spawn(move || {
                for _ in 0..25 {
                    // braces variants score 1 + 2 here, never enough to win
                    let language = highlighter.detect_language(FUNCTION_DECL, &[]).unwrap();
                    assert_eq!(language, javascript::NAME);
                }
            });
        }
    });

    assert_eq!(highlighter.registry().len(), 2 + 4 * 8);
    let names = highlighter.registry().names();
    assert_eq!(names[0], javascript::NAME);
    assert_eq!(names[1], PYTHON_LIKE);
}

#[test]
fn test_concurrent_duplicate_registration_admits_one() {
    let highlighter = js_and_python();
    let definition = braces();

    let results: Vec<Result<(), ConfigError>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| highlighter.register_as("shared", &definition)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert_eq!(err.code(), ErrorCode::H0105);
    }
    assert!(highlighter.registry().contains("shared"));
}

#[test]
fn test_parallel_highlighting_matches_sequential() {
    let highlighter = js_and_python();
    let inputs: Vec<String> = (0..16)
        .map(|i| format!("function f{i}(a) {{ return a * {i}; }} // {i}\n"))
        .collect();

    let sequential: Vec<Vec<(String, String)>> = inputs
        .iter()
        .map(|text| owned(&highlighter, text))
        .collect();

    let parallel: Vec<Vec<(String, String)>> = thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|text| {
                let highlighter = &highlighter;
                scope.spawn(move || owned(highlighter, text))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn test_unregister_keeps_running_snapshots_valid() {
    let highlighter = js_and_python();
    let grammar = highlighter.registry().get(javascript::NAME).unwrap();

    assert!(highlighter.registry().unregister(javascript::NAME));
    assert!(!highlighter.registry().contains(javascript::NAME));

    let spans = highlight::lexer::highlight(&grammar, FUNCTION_DECL).unwrap();
    assert_eq!(spans[0].class_name, "keyword");
    assert_eq!(
        highlighter.detect_language(FUNCTION_DECL, &[]).unwrap(),
        PYTHON_LIKE
    );
}

fn owned(highlighter: &highlight::Highlighter, text: &str) -> Vec<(String, String)> {
    let spans = highlighter.highlight(text, javascript::NAME).unwrap();
    pairs(&spans)
        .into_iter()
        .map(|(t, c)| (t.to_string(), c.to_string()))
        .collect()
}
