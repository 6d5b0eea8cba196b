// File: src/fuzzy/mod.rs
pub mod substitutes;

pub use substitutes::CharSubstitutes;
