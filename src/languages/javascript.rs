//! JavaScript, in the Pygments class-name vocabulary.

use crate::base::constants::UNDERSCORE_IDENT_RE;
use crate::grammar::{LanguageDefinition, ModeDefinition};

pub const NAME: &str = "javascript";

const KEYWORDS: &[&str] = &[
    "for", "in", "while", "do", "break", "return", "continue", "if", "else", "throw", "try",
    "catch", "var", "with", "const", "label", "function", "new", "typeof", "instanceof",
];

const CONSTANTS: &[&str] = &["true", "false", "null", "NaN", "Infinity", "undefined"];

const BUILTINS: &[&str] = &[
    "Array",
    "Boolean",
    "Date",
    "Error",
    "Function",
    "Math",
    "netscape",
    "Number",
    "Object",
    "Packages",
    "RegExp",
    "String",
    "sun",
    "decodeURI",
    "decodeURIComponent",
    "encodeURI",
    "encodeURIComponent",
    "eval",
    "isFinite",
    "isNaN",
    "parseFloat",
    "parseInt",
    "document",
    "window",
];

pub fn definition() -> LanguageDefinition {
    let default_mode = ModeDefinition::default_mode()
        .lexems([r"\b[a-zA-Z]+"])
        .keywords("keyword", KEYWORDS.iter().copied())
        .keywords("keyword constant", CONSTANTS.iter().copied())
        .keywords("name builtin", BUILTINS.iter().copied())
        .keywords("name builtin pseudo", ["this"])
        .contains([
            "comment single",
            "comment multiline",
            "number integer",
            "number oct",
            "number hex",
            "number float",
            "string single",
            "string double",
            "string regex",
            "operator",
            "punctuation",
            "_function",
        ]);

    LanguageDefinition::new(NAME, default_mode)
        .mode(ModeDefinition::new("comment single", "//", "$").relevance(0))
        .mode(ModeDefinition::new("comment multiline", r"/\*", r"\*/"))
        .mode(ModeDefinition::new("number integer", "0|([1-9][0-9]*)", "^").relevance(0))
        .mode(ModeDefinition::new("number oct", "0[0-9]+", "^").relevance(0))
        .mode(ModeDefinition::new("number hex", "0x[0-9a-fA-F]+", "^").relevance(0))
        .mode(
            ModeDefinition::new(
                "number float",
                r"([1-9][0-9]*\.[0-9]*([eE][\+-]?[0-9]+)?)|(\.[0-9]+([eE][\+-]?[0-9]+)?)|([0-9]+[eE][\+-]?[0-9]+)",
                "^",
            )
            .relevance(0),
        )
        .mode(
            ModeDefinition::new("string single", "'", "'")
                .illegal(r"\n")
                .contains(["string escape"])
                .relevance(0),
        )
        .mode(
            ModeDefinition::new("string double", "\"", "\"")
                .illegal(r"\n")
                .contains(["string escape"])
                .relevance(0),
        )
        .mode(ModeDefinition::new("string escape", r"\\.", "^").relevance(0))
        .mode(ModeDefinition::new("string regex", r"/.*?[^\\/]/[gim]*", "^"))
        .mode(
            ModeDefinition::new(
                "operator",
                r"\|\||&&|\+\+|--|-=|\+=|/=|\*=|==|[-\+\*/=\?:~\^]",
                "^",
            )
            .relevance(0),
        )
        .mode(ModeDefinition::new("punctuation", r"[{}\(\)\[\]\.;]", "^").relevance(0))
        .mode(
            ModeDefinition::new("_function", r"function\b", "\\{")
                .lexems([UNDERSCORE_IDENT_RE])
                .keywords("keyword", ["function"])
                .contains(["name function", "_params"])
                .relevance(5),
        )
        .mode(ModeDefinition::new("name function", UNDERSCORE_IDENT_RE, "^"))
        .mode(
            ModeDefinition::new("_params", r"\(", r"\)")
                .contains(["comment single", "comment multiline"]),
        )
}
