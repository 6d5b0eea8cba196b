// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// A grammeme name that is not part of the loaded catalog.
///
/// Raised whenever a tag string or an inflection request mentions a grammeme
/// the dictionary does not declare. Typos are never silently ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown grammeme: {grammeme:?}")]
pub struct UnknownGrammemeError {
    pub grammeme: String,
}

#[derive(Error, Debug)]
pub enum MorphError {
    /// The dictionary directory does not exist or is not a directory.
    #[error("dictionary directory not found: {}", path.display())]
    DictionaryNotFound { path: PathBuf },

    #[error("no dictionary path given and MORPH_DICT_PATH is not set")]
    MissingDictionaryPath,

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed binary table in {}: {source}", path.display())]
    Bincode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    /// The dictionary was compiled for a different engine version.
    #[error("unsupported dictionary format {found:?} (this engine reads {expected:?})")]
    UnsupportedFormat { found: String, expected: String },

    #[error(transparent)]
    UnknownGrammeme(#[from] UnknownGrammemeError),

    #[error("invalid tag {tag:?}: {reason}")]
    InvalidTag { tag: String, reason: String },

    #[error("invalid lexeme: {reason}")]
    InvalidLexeme { reason: String },

    /// Table ids point outside the tables they index.
    #[error("corrupt dictionary table {table}: {reason}")]
    CorruptDictionary { table: &'static str, reason: String },

    #[error("probability table required but not found in {}", path.display())]
    MissingProbabilityTable { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, MorphError>;
