// File: src/dict/paradigm.rs
use serde::{Deserialize, Serialize};

/// One inflection paradigm, stored flat as three equal-length columns:
/// suffix ids, then tag ids, then paradigm-prefix ids.
///
/// Form `i` of a word with stem `s` is
/// `prefixes[prefix_id(i)] + s + suffixes[suffix_id(i)]`, tagged
/// `gramtab[tag_id(i)]`. Form 0 is the normal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paradigm(Vec<u16>);

impl Paradigm {
    pub fn from_columns(suffix_ids: &[u16], tag_ids: &[u16], prefix_ids: &[u16]) -> Self {
        debug_assert!(suffix_ids.len() == tag_ids.len() && tag_ids.len() == prefix_ids.len());
        let mut flat = Vec::with_capacity(suffix_ids.len() * 3);
        flat.extend_from_slice(suffix_ids);
        flat.extend_from_slice(tag_ids);
        flat.extend_from_slice(prefix_ids);
        Paradigm(flat)
    }

    /// Number of forms.
    pub fn len(&self) -> usize {
        self.0.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_well_formed(&self) -> bool {
        self.0.len() % 3 == 0
    }

    pub fn suffix_id(&self, form: usize) -> u16 {
        self.0[form]
    }

    pub fn tag_id(&self, form: usize) -> u16 {
        self.0[self.len() + form]
    }

    pub fn prefix_id(&self, form: usize) -> u16 {
        self.0[self.len() * 2 + form]
    }

    pub fn suffix_ids(&self) -> &[u16] {
        &self.0[..self.len()]
    }

    pub fn tag_ids(&self) -> &[u16] {
        &self.0[self.len()..self.len() * 2]
    }

    pub fn prefix_ids(&self) -> &[u16] {
        &self.0[self.len() * 2..]
    }
}
