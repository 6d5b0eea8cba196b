// File: src/config.rs
use crate::error::{MorphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no dictionary path is configured.
pub const DICT_PATH_ENV: &str = "MORPH_DICT_PATH";

/// Whether the analyzer re-ranks results with `P(tag|word)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbabilityMode {
    /// Use the table when the dictionary ships one.
    #[default]
    Auto,
    /// Fail to load without a table.
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub dict_path: Option<PathBuf>,
    /// Expected dictionary language. A mismatch is logged, not fatal.
    pub lang: Option<String>,
    /// `None` uses the language's own substitutions.
    pub char_substitutes: Option<BTreeMap<char, char>>,
    pub probability: ProbabilityMode,
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dict_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.dict_path = Some(path.into());
        self
    }

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = Some(lang.to_string());
        self
    }

    pub fn with_char_substitutes(mut self, substitutes: BTreeMap<char, char>) -> Self {
        self.char_substitutes = Some(substitutes);
        self
    }

    pub fn with_probability(mut self, mode: ProbabilityMode) -> Self {
        self.probability = mode;
        self
    }

    /// Defaults with the dictionary path taken from `MORPH_DICT_PATH`.
    pub fn from_env() -> Self {
        Self {
            dict_path: std::env::var_os(DICT_PATH_ENV).map(PathBuf::from),
            ..Self::default()
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| MorphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| MorphError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The explicit path, else `MORPH_DICT_PATH`.
    pub fn resolve_dict_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.dict_path {
            return Ok(path.clone());
        }
        std::env::var_os(DICT_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .ok_or(MorphError::MissingDictionaryPath)
    }
}
