//! Grammar definitions used across tests.

use highlight::{Highlighter, LanguageDefinition, ModeDefinition};
use highlight::languages::javascript;

pub const PYTHON_LIKE: &str = "python-like";
pub const BRACES: &str = "braces";

/// A small Python-flavoured grammar. It has no function mode, so it cannot
/// reward `function` declarations.
pub fn python_like() -> LanguageDefinition {
    LanguageDefinition::new(
        PYTHON_LIKE,
        ModeDefinition::default_mode()
            .keywords(
                "keyword",
                ["def", "return", "if", "elif", "else", "import", "from", "class", "pass"],
            )
            .keywords("keyword constant", ["None", "True", "False"])
            .contains(["comment", "string single", "string double", "decorator", "number"]),
    )
    .mode(ModeDefinition::new("comment", "#", "$").relevance(0))
    .mode(ModeDefinition::new("string single", "'", "'").illegal(r"\n").relevance(0))
    .mode(ModeDefinition::new("string double", "\"", "\"").illegal(r"\n").relevance(0))
    .mode(ModeDefinition::new("decorator", r"@[a-zA-Z_]+", "^").relevance(3))
    .mode(ModeDefinition::new("number", r"[0-9]+", "^").relevance(0))
}

/// Self-nesting braces with an illegal semicolon inside a block.
pub fn braces() -> LanguageDefinition {
    LanguageDefinition::new(BRACES, ModeDefinition::default_mode().contains(["block"]))
        .mode(
            ModeDefinition::new("block", r"\{", r"\}")
                .contains(["block"])
                .illegal(";")
                .relevance(2),
        )
}

/// JavaScript first, then the Python-like grammar.
pub fn js_and_python() -> Highlighter {
    let highlighter = Highlighter::new();
    highlighter.register(&javascript::definition()).unwrap();
    highlighter.register(&python_like()).unwrap();
    highlighter
}

pub fn all_fixtures() -> Highlighter {
    let highlighter = js_and_python();
    highlighter.register(&braces()).unwrap();
    highlighter
}
