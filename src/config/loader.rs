//! Configuration loading from `anisotropic.toml`

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AnisotropicError, AnisotropicResult};

use super::types::PolicySettings;

/// Project-level settings file, looked up in the application root.
pub const CONFIG_FILE: &str = "anisotropic.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key `{}` in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean `{}`?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(
    path: &Path,
) -> AnisotropicResult<(PolicySettings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(path, &content)
}

/// Parse settings from TOML content; `path` is only used for diagnostics.
pub fn parse_with_warnings(
    path: &Path,
    content: &str,
) -> AnisotropicResult<(PolicySettings, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let settings: PolicySettings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AnisotropicError::config(format!("{}: {}", path.display(), e)))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

/// Load `anisotropic.toml` from the project root, or no overrides if absent.
pub fn load_or_default(
    project_root: &Path,
) -> AnisotropicResult<(PolicySettings, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok((PolicySettings::default(), Vec::new()));
    }
    load_with_warnings(&path)
}

/// Line (1-based) where `key` is assigned or opens a table.
///
/// Only the last dotted segment of a key or header is compared, so mentions
/// of `key` inside values or comments are ignored.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| defined_key(line.trim_start()) == Some(key))
        .map(|index| index + 1)
}

fn defined_key(line: &str) -> Option<&str> {
    let name = if let Some(header) = line.strip_prefix('[') {
        header.trim_start_matches('[').split(']').next()?
    } else {
        line.split_once('=')?.0
    };
    let last = name.rsplit('.').next()?.trim();
    Some(last.trim_matches(|c: char| c == '"' || c == '\''))
}

const KNOWN_KEYS: &[&str] = &[
    "madge",
    "includeNpm",
    "fileExtensions",
    "detectiveOptions",
    "es6",
    "mixedImports",
    "cyclicDependents",
    "globalScopeFilter",
    "exceptions",
    "resolve",
];

/// Closest known key within two edits.
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, keeping a single row.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
