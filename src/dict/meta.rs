// File: src/dict/meta.rs
use serde::{Deserialize, Serialize};

/// Dictionary format this engine reads and writes.
pub const FORMAT_VERSION: &str = "1.0";

/// Parameters the prediction indices were built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionOptions {
    /// Longest word ending indexed.
    pub max_suffix_length: usize,
    /// Endings seen fewer times than this are not indexed.
    pub min_ending_freq: u32,
    /// Paradigms shared by fewer lexemes than this do not feed the index.
    pub min_paradigm_popularity: u32,
}

impl Default for PredictionOptions {
    fn default() -> Self {
        Self {
            max_suffix_length: 5,
            min_ending_freq: 2,
            min_paradigm_popularity: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub format_version: String,
    pub language: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub paradigm_count: usize,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub tag_count: usize,
    #[serde(default)]
    pub prediction_options: PredictionOptions,
}

impl Meta {
    pub fn new(language: &str, source: &str) -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            language: language.to_string(),
            source: source.to_string(),
            paradigm_count: 0,
            word_count: 0,
            tag_count: 0,
            prediction_options: PredictionOptions::default(),
        }
    }
}
