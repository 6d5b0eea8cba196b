// File: src/fuzzy/substitutes.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Letters that may stand in for one another during lookup, e.g. `е` for `ё`.
///
/// A query character `c` also matches every character listed under `c`. The
/// relation is directional: `{'е': ['ё']}` lets "ежик" find "ёжик" but not
/// the other way round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharSubstitutes {
    map: BTreeMap<char, Vec<char>>,
}

impl CharSubstitutes {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_pairs<I: IntoIterator<Item = (char, char)>>(pairs: I) -> Self {
        let mut subs = Self::default();
        for (from, to) in pairs {
            subs.add(from, to);
        }
        subs
    }

    pub fn add(&mut self, from: char, to: char) {
        if from == to {
            return;
        }
        let alternatives = self.map.entry(from).or_default();
        if !alternatives.contains(&to) {
            alternatives.push(to);
        }
    }

    /// Characters tried in place of `c`, not including `c` itself.
    pub fn alternatives(&self, c: char) -> &[char] {
        self.map.get(&c).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Flat (from, to) view, the shape used in configuration files.
    pub fn to_pairs(&self) -> BTreeMap<char, char> {
        self.map
            .iter()
            .filter_map(|(from, to)| to.first().map(|t| (*from, *t)))
            .collect()
    }
}

impl From<BTreeMap<char, char>> for CharSubstitutes {
    fn from(map: BTreeMap<char, char>) -> Self {
        Self::from_pairs(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternatives_are_directional() {
        let subs = CharSubstitutes::from_pairs([('е', 'ё')]);
        assert_eq!(subs.alternatives('е'), &['ё']);
        assert!(subs.alternatives('ё').is_empty());
        assert!(subs.alternatives('а').is_empty());
    }

    #[test]
    fn test_self_substitution_is_ignored() {
        let subs = CharSubstitutes::from_pairs([('а', 'а')]);
        assert!(subs.is_empty());
    }
}
