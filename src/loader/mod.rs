//! Loading grammar definitions from JSON and YAML documents.
//!
//! A file whose definition has no `name` is registered under its file stem.
//! Directory loading registers every grammar it can and reports the files it
//! could not load; one bad file never blocks the others.

use std::fs;
use std::path::{Path, PathBuf};

use smol_str::SmolStr;
use walkdir::WalkDir;

use crate::errors::ConfigError;
use crate::grammar::LanguageDefinition;
use crate::registry::Registry;

/// Supported grammar file extensions
pub const GRAMMAR_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Outcome of [`load_directory`].
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Names registered, in load order
    pub loaded: Vec<SmolStr>,
    /// Files that failed to load or register
    pub errors: Vec<(PathBuf, ConfigError)>,
}

impl LoadReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn from_json_str(source: &str) -> Result<LanguageDefinition, ConfigError> {
    serde_json::from_str(source).map_err(|e| ConfigError::document("JSON input", e))
}

pub fn from_yaml_str(source: &str) -> Result<LanguageDefinition, ConfigError> {
    serde_yaml::from_str(source).map_err(|e| ConfigError::document("YAML input", e))
}

pub fn to_json_string(definition: &LanguageDefinition) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(definition).map_err(|e| ConfigError::document("JSON output", e))
}

/// Read one grammar file, dispatching on its extension.
pub fn load_file(path: &Path) -> Result<LanguageDefinition, ConfigError> {
    let display = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let content = fs::read_to_string(path).map_err(|e| ConfigError::document(&display, e))?;

    let mut definition = match extension.as_str() {
        "json" => serde_json::from_str::<LanguageDefinition>(&content)
            .map_err(|e| ConfigError::document(&display, e))?,
        "yaml" | "yml" => serde_yaml::from_str::<LanguageDefinition>(&content)
            .map_err(|e| ConfigError::document(&display, e))?,
        other => {
            return Err(ConfigError::document(
                display,
                format!("unsupported grammar file extension '{other}'"),
            ));
        }
    };

    if definition.name.trim().is_empty() {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            definition.name = stem.to_string();
        }
    }
    Ok(definition)
}

/// Register every grammar file under `dir`, walking subdirectories in file
/// name order.
pub fn load_directory(dir: &Path, registry: &Registry) -> Result<LoadReport, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::document(
            dir.display().to_string(),
            "directory not found",
        ));
    }

    let mut report = LoadReport::default();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
                report
                    .errors
                    .push((path.clone(), ConfigError::document(path.display().to_string(), e)));
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_grammar_file(entry.path()) {
            continue;
        }

        let path = entry.path();
        match load_file(path).and_then(|def| registry.register(&def).map(|_| def.name)) {
            Ok(name) => {
                tracing::debug!("Loaded grammar {} from {}", name, path.display());
                report.loaded.push(SmolStr::new(name.trim()));
            }
            Err(e) => {
                tracing::warn!("Failed to load grammar from {}: {}", path.display(), e);
                report.errors.push((path.to_path_buf(), e));
            }
        }
    }
    Ok(report)
}

fn is_grammar_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| GRAMMAR_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}
