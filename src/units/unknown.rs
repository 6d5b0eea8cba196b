// File: src/units/unknown.rs
use crate::core::engine::MorphAnalyzer;
use crate::core::types::{Parse, Provenance, SeenParses, SeenTags};
use crate::error::Result;
use crate::tagset::{GrammemeCatalog, Tag};
use crate::units::{AnalyzerUnit, UnitKind};

/// Last resort: a single `UNKN` reading when nothing else matched.
pub struct UnknownUnit {
    tag: Tag,
}

impl UnknownUnit {
    pub fn new(catalog: &GrammemeCatalog) -> Result<Self> {
        Ok(Self {
            tag: Tag::parse(catalog, "UNKN")?,
        })
    }
}

impl AnalyzerUnit for UnknownUnit {
    fn kind(&self) -> UnitKind {
        UnitKind::Unknown
    }

    fn parse(&self, _morph: &MorphAnalyzer, word: &str, word_lower: &str, seen: &mut SeenParses) -> Vec<Parse> {
        let mut result = Vec::new();
        if seen.is_empty() {
            let parse = Parse::new(
                word_lower.to_string(),
                self.tag.clone(),
                word_lower.to_string(),
                1.0,
                vec![Provenance::Unknown { word: word.to_string() }],
            );
            seen.add(parse, &mut result);
        }
        result
    }

    fn tag(&self, _morph: &MorphAnalyzer, _word: &str, _word_lower: &str, seen: &mut SeenTags) -> Vec<Tag> {
        let mut result = Vec::new();
        if seen.is_empty() {
            seen.add(self.tag.clone(), &mut result);
        }
        result
    }
}
