//! Relevance scoring and language detection.
//!
//! Every candidate grammar lexes the text independently; grammars are
//! immutable and each run owns its stack, so the runs go through rayon
//! without locking. A grammar's score is its default mode relevance plus the
//! relevance of every mode entered, so it counts distinctive constructs
//! rather than matched length. A run that fails scores zero.

use std::sync::Arc;

use rayon::prelude::*;
use smol_str::SmolStr;

use crate::errors::LexError;
use crate::grammar::CompiledGrammar;
use crate::lexer::{LexOptions, Lexer};

/// Score of one grammar against one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageScore {
    pub language: SmolStr,
    pub relevance: i64,
    /// Why the run failed, when it did
    pub error: Option<LexError>,
}

/// Outcome of detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The best scoring grammar
    pub language: SmolStr,
    pub relevance: i64,
    /// All scores, in the order the grammars were given
    pub scores: Vec<LanguageScore>,
}

/// Score `text` against `grammar`.
pub fn score(grammar: &CompiledGrammar, text: &str, options: LexOptions) -> LanguageScore {
    match Lexer::new(grammar).with_options(options).run(text) {
        Ok(output) => LanguageScore {
            language: grammar.name().clone(),
            relevance: output.relevance,
            error: None,
        },
        Err(error) => {
            tracing::debug!(grammar = %grammar.name(), %error, "grammar rejected input");
            LanguageScore {
                language: grammar.name().clone(),
                relevance: 0,
                error: Some(error),
            }
        }
    }
}

/// Pick the grammar with the strictly greatest score. Ties go to the grammar
/// listed first, so callers pass grammars in registration order.
pub fn detect(
    text: &str,
    grammars: &[Arc<CompiledGrammar>],
    options: LexOptions,
) -> Result<Detection, LexError> {
    if grammars.is_empty() {
        return Err(LexError::NoGrammars);
    }

    let scores: Vec<LanguageScore> = grammars
        .par_iter()
        .map(|grammar| score(grammar, text, options))
        .collect();

    let mut best = &scores[0];
    for candidate in &scores[1..] {
        if candidate.relevance > best.relevance {
            best = candidate;
        }
    }
    let (language, relevance) = (best.language.clone(), best.relevance);

    tracing::debug!(%language, relevance, candidates = scores.len(), "detected language");
    Ok(Detection {
        language,
        relevance,
        scores,
    })
}
