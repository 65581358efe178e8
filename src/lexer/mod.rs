//! Mode stack lexer
//!
//! Turns (grammar, text) into an ordered, gap-free sequence of classified
//! spans.
//!
//! ## Algorithm
//!
//! ```text
//! scan position p, top mode M
//!     ↓
//! earliest match among: M.illegal, M.end, begin of each mode in M.contains
//! (ties: illegal, then end, then contains order)
//!     ↓
//! illegal → fail with IllegalSequence
//! end     → emit M's own text up to the match end, pop
//! begin   → emit M's own text up to the match start, push the child;
//!           the begin token is the child's first own text
//! none    → emit the rest as M's text and stop
//! ```
//!
//! A mode's own text is keyword classified when the mode has keywords. Every
//! push consumes at least one byte and every pop undoes one push, so a run
//! takes at most `2 * text.len() + 1` transitions. Pattern searches go
//! through a per-run memo so no stretch of input is rescanned.

mod cache;
mod stack;

pub use stack::{ModeStack, ModeStackFrame};

use cache::{SearchCache, Slot};

use tracing::trace;

use crate::base::{Span, check_coverage};
use crate::classify::classify;
use crate::errors::{Diagnostic, LexError};
use crate::grammar::{CompiledGrammar, ModeId};

/// Guards against pathological grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexOptions {
    /// Maximum number of transitions per run. `None` allows the most a run
    /// can take, `2 * text.len() + 1`, so only a fault trips it.
    pub step_limit: Option<usize>,
    /// Maximum number of stacked modes, the default mode included
    pub max_depth: usize,
}

impl LexOptions {
    /// Transition budget for lexing `text`.
    pub fn step_limit_for(&self, text: &str) -> usize {
        self.step_limit
            .unwrap_or_else(|| text.len().saturating_mul(2).saturating_add(1))
    }
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            step_limit: None,
            max_depth: 1024,
        }
    }
}

/// Result of a successful lex run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOutput<'a> {
    pub spans: Vec<Span<'a>>,
    /// Default mode relevance plus the relevance of every entered mode
    pub relevance: i64,
    /// Recoverable conditions, e.g. a mode left open at end of input
    pub diagnostics: Vec<Diagnostic>,
}

/// What the winning match does to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Illegal,
    End,
    Begin(ModeId),
}

/// The winning match at a scan point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchCandidate {
    transition: Transition,
    start: usize,
    end: usize,
}

/// Lexer for one compiled grammar. Holds no per-run state, so one lexer can
/// serve any number of runs.
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'g> {
    grammar: &'g CompiledGrammar,
    options: LexOptions,
}

impl<'g> Lexer<'g> {
    pub fn new(grammar: &'g CompiledGrammar) -> Self {
        Self {
            grammar,
            options: LexOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LexOptions) -> Self {
        self.options = options;
        self
    }

    pub fn grammar(&self) -> &'g CompiledGrammar {
        self.grammar
    }

    /// Lex `text` to completion.
    pub fn run<'a>(&self, text: &'a str) -> Result<LexOutput<'a>, LexError> {
        let grammar = self.grammar;
        let mut stack = ModeStack::new();
        let mut spans = Vec::new();
        let mut diagnostics = Vec::new();
        let mut cache = SearchCache::new(grammar.mode_count());
        let mut relevance = i64::from(grammar.default_mode().relevance);
        let step_limit = self.options.step_limit_for(text);
        let mut pos = 0;
        let mut steps = 0;

        loop {
            steps += 1;
            if steps > step_limit {
                tracing::warn!(grammar = %grammar.name(), limit = step_limit, "step limit exceeded");
                return Err(LexError::StepLimitExceeded {
                    grammar: grammar.name().clone(),
                    limit: step_limit,
                });
            }

            let frame = stack.top();
            let mode = grammar.mode(frame.mode);

            let Some(candidate) = self.next_match(frame.mode, text, pos, &mut cache) else {
                classify(text, frame.text_start, text.len(), mode, &mut spans);
                // Outermost first, one per mode still open.
                for open in stack.open_frames() {
                    let open_mode = grammar.mode(open.mode);
                    tracing::debug!(
                        grammar = %grammar.name(),
                        mode = %open_mode.class_name,
                        entry = open.entry_offset,
                        "mode not terminated before end of input"
                    );
                    diagnostics.push(Diagnostic::unterminated(
                        open_mode.class_name.clone(),
                        open.entry_offset,
                        text.len(),
                    ));
                }
                break;
            };

            match candidate.transition {
                Transition::Illegal => {
                    return Err(LexError::IllegalSequence {
                        offset: candidate.start,
                        text: text[candidate.start..candidate.end].to_string(),
                        grammar: grammar.name().clone(),
                        mode: mode.class_name.clone(),
                    });
                }
                Transition::End => {
                    classify(text, frame.text_start, candidate.end, mode, &mut spans);
                    stack.pop();
                    stack.top_mut().text_start = candidate.end;
                    pos = candidate.end;
                    trace!(mode = %mode.class_name, offset = pos, "pop");
                }
                Transition::Begin(child) => {
                    classify(text, frame.text_start, candidate.start, mode, &mut spans);
                    if stack.depth() >= self.options.max_depth {
                        tracing::warn!(grammar = %grammar.name(), depth = stack.depth(), "mode nesting too deep");
                        return Err(LexError::NestingTooDeep {
                            grammar: grammar.name().clone(),
                            depth: self.options.max_depth,
                            offset: candidate.start,
                        });
                    }
                    let child_mode = grammar.mode(child);
                    stack.push(child, candidate.start);
                    relevance += i64::from(child_mode.relevance);
                    pos = candidate.end;
                    trace!(mode = %child_mode.class_name, offset = candidate.start, "push");
                }
            }
        }

        debug_assert!(check_coverage(text, &spans), "spans must cover the input");
        Ok(LexOutput {
            spans,
            relevance,
            diagnostics,
        })
    }

    /// Lex `text` and keep only the spans.
    pub fn highlight<'a>(&self, text: &'a str) -> Result<Vec<Span<'a>>, LexError> {
        self.run(text).map(|output| output.spans)
    }

    /// Earliest match inside mode `id` from `pos`. Candidates are visited in
    /// priority order and only a strictly earlier start replaces the current
    /// winner, so ties go to illegal, then end, then `contains` order.
    fn next_match(
        &self,
        id: ModeId,
        text: &str,
        pos: usize,
        cache: &mut SearchCache,
    ) -> Option<MatchCandidate> {
        let mode = self.grammar.mode(id);
        let mut best: Option<MatchCandidate> = None;
        let mut offer = |transition, found: Option<(usize, usize)>| {
            if let Some((start, end)) = found {
                if best.is_none_or(|b| start < b.start) {
                    best = Some(MatchCandidate {
                        transition,
                        start,
                        end,
                    });
                }
            }
        };

        if let Some(illegal) = &mode.illegal {
            offer(
                Transition::Illegal,
                cache.find(id, Slot::Illegal, &**illegal, text, pos),
            );
        }
        if let Some(end) = &mode.end {
            offer(Transition::End, cache.find(id, Slot::End, &**end, text, pos));
        }
        for &child in &mode.contains {
            // A mode without a begin pattern (the default mode) cannot be entered.
            if let Some(begin) = &self.grammar.mode(child).begin {
                offer(
                    Transition::Begin(child),
                    cache.find(child, Slot::Begin, &**begin, text, pos),
                );
            }
        }
        best
    }
}

/// Lex `text` with `grammar` using default options.
pub fn highlight<'a>(grammar: &CompiledGrammar, text: &'a str) -> Result<Vec<Span<'a>>, LexError> {
    Lexer::new(grammar).highlight(text)
}
