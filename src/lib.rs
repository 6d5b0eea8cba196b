// src/lib.rs

pub mod config;
pub mod core;
pub mod dict;
pub mod error;
pub mod fuzzy;
pub mod lang;
pub mod persistence;
pub mod tagset;
pub mod units;

pub use crate::config::{AnalyzerConfig, ProbabilityMode};
pub use crate::core::context::{ProbabilityTable, ProbabilityTableBuilder};
pub use crate::core::engine::MorphAnalyzer;
pub use crate::core::types::{Parse, Provenance};
pub use crate::dict::{Dictionary, DictionaryBuilder};
pub use crate::error::{MorphError, Result, UnknownGrammemeError};
pub use crate::tagset::{Grammeme, GrammemeCatalog, Tag};
