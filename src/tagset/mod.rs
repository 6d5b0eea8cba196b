// File: src/tagset/mod.rs
pub mod agreement;
pub mod catalog;
pub mod opencorpora;
pub mod tag;

pub use catalog::{Category, Grammeme, GrammemeCatalog, GrammemeRecord, GrammemeSet};
pub use tag::Tag;
