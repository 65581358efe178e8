//! Validated, compiled grammars.
//!
//! Compilation resolves every `contains` reference to a [`ModeId`], compiles
//! every pattern and builds keyword tables, so the lexer never parses
//! configuration while scanning.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::definition::{LanguageDefinition, ModeDefinition};
use crate::base::constants::{DEFAULT_MODE_REF, WORD_RE};
use crate::classify::KeywordTable;
use crate::errors::ConfigError;
use crate::pattern::{self, Pattern, PatternOptions};

/// Index of a mode within its grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModeId(u32);

impl ModeId {
    /// The grammar's default mode
    pub const DEFAULT: ModeId = ModeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

/// A mode ready for lexing.
#[derive(Debug)]
pub struct CompiledMode {
    pub class_name: SmolStr,
    /// `None` only for the default mode
    pub begin: Option<Pattern>,
    /// `None` only for the default mode
    pub end: Option<Pattern>,
    pub illegal: Option<Pattern>,
    pub contains: Vec<ModeId>,
    pub keywords: KeywordTable,
    /// Empty when the mode has no keywords
    pub lexems: Vec<Pattern>,
    pub relevance: i32,
}

/// An immutable grammar: the default mode at [`ModeId::DEFAULT`] followed
/// by the declared modes in authoring order.
#[derive(Debug)]
pub struct CompiledGrammar {
    name: SmolStr,
    options: PatternOptions,
    modes: Vec<CompiledMode>,
    by_class: FxHashMap<SmolStr, ModeId>,
}

impl CompiledGrammar {
    pub fn name(&self) -> &SmolStr {
        &self.name
    }

    pub fn options(&self) -> PatternOptions {
        self.options
    }

    pub fn mode(&self, id: ModeId) -> &CompiledMode {
        &self.modes[id.index()]
    }

    pub fn default_mode(&self) -> &CompiledMode {
        self.mode(ModeId::DEFAULT)
    }

    /// Look up a declared mode by class name
    pub fn mode_id(&self, class_name: &str) -> Option<ModeId> {
        self.by_class.get(class_name).copied()
    }

    pub fn modes(&self) -> impl Iterator<Item = (ModeId, &CompiledMode)> {
        self.modes
            .iter()
            .enumerate()
            .map(|(i, mode)| (ModeId(i as u32), mode))
    }

    /// Number of modes, the default mode included
    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }
}

/// Validate and compile `definition` under `name`.
pub fn compile(name: &str, definition: &LanguageDefinition) -> Result<CompiledGrammar, ConfigError> {
    let name = SmolStr::new(name.trim());
    if name.is_empty() {
        return Err(ConfigError::EmptyName);
    }

    let mut by_class: FxHashMap<SmolStr, ModeId> = FxHashMap::default();
    for (i, mode) in definition.modes.iter().enumerate() {
        let id = ModeId(i as u32 + 1);
        let class_name = SmolStr::new(&mode.class_name);
        if class_name == DEFAULT_MODE_REF || by_class.insert(class_name.clone(), id).is_some() {
            return Err(ConfigError::DuplicateMode {
                grammar: name.clone(),
                class_name,
            });
        }
    }

    let compiler = ModeCompiler {
        grammar: &name,
        options: definition.options,
        by_class: &by_class,
    };
    let mut modes = Vec::with_capacity(definition.modes.len() + 1);
    modes.push(compiler.compile_mode(&definition.default_mode, true)?);
    for mode in &definition.modes {
        modes.push(compiler.compile_mode(mode, false)?);
    }

    tracing::debug!(
        grammar = %name,
        modes = modes.len(),
        "compiled grammar"
    );

    Ok(CompiledGrammar {
        name,
        options: definition.options,
        modes,
        by_class,
    })
}

struct ModeCompiler<'a> {
    grammar: &'a SmolStr,
    options: PatternOptions,
    by_class: &'a FxHashMap<SmolStr, ModeId>,
}

impl ModeCompiler<'_> {
    fn compile_mode(&self, def: &ModeDefinition, is_default: bool) -> Result<CompiledMode, ConfigError> {
        let class_name = SmolStr::new(&def.class_name);

        // The default mode is never entered or left.
        let (begin, end) = if is_default {
            (None, None)
        } else {
            (
                Some(self.required(&class_name, "begin", def.begin.as_deref())?),
                Some(self.required(&class_name, "end", def.end.as_deref())?),
            )
        };
        let illegal = def
            .illegal
            .as_deref()
            .map(|source| self.pattern(&class_name, "illegal", source))
            .transpose()?;

        let contains = def
            .contains
            .iter()
            .map(|reference| self.resolve(&class_name, reference))
            .collect::<Result<Vec<_>, _>>()?;

        let keywords = KeywordTable::build(&def.keywords, self.options.case_insensitive);
        let mut lexems = def
            .lexems
            .iter()
            .map(|source| self.pattern(&class_name, "lexems", source))
            .collect::<Result<Vec<_>, _>>()?;
        if keywords.is_empty() {
            lexems.clear();
        } else if lexems.is_empty() {
            lexems.push(self.pattern(&class_name, "lexems", WORD_RE)?);
        }

        Ok(CompiledMode {
            class_name,
            begin,
            end,
            illegal,
            contains,
            keywords,
            lexems,
            relevance: def.relevance,
        })
    }

    fn required(
        &self,
        mode: &SmolStr,
        field: &'static str,
        source: Option<&str>,
    ) -> Result<Pattern, ConfigError> {
        let source = source.ok_or_else(|| ConfigError::MissingPattern {
            grammar: self.grammar.clone(),
            mode: mode.clone(),
            field,
        })?;
        self.pattern(mode, field, source)
    }

    fn pattern(&self, mode: &SmolStr, field: &'static str, source: &str) -> Result<Pattern, ConfigError> {
        pattern::compile(source, self.options)
            .map_err(|e| ConfigError::invalid_pattern(self.grammar, mode, field, source, e.to_string()))
    }

    fn resolve(&self, mode: &SmolStr, reference: &str) -> Result<ModeId, ConfigError> {
        if reference == DEFAULT_MODE_REF {
            return Ok(ModeId::DEFAULT);
        }
        self.by_class
            .get(reference)
            .copied()
            .ok_or_else(|| ConfigError::UnresolvedReference {
                grammar: self.grammar.clone(),
                mode: mode.clone(),
                reference: SmolStr::new(reference),
            })
    }
}
