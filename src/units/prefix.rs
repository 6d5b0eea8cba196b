// File: src/units/prefix.rs
use crate::core::engine::MorphAnalyzer;
use crate::core::trie::Trie;
use crate::core::types::{Parse, Provenance, SeenParses, SeenTags};
use crate::tagset::Tag;
use crate::units::{add_prefix, strip_prefix, AnalyzerUnit, DictionaryUnit, UnitKind};

fn prefix_of(parse: &Parse) -> Option<&str> {
    match parse.methods().last()? {
        Provenance::KnownPrefix { prefix } | Provenance::UnknownPrefix { prefix } => Some(prefix),
        _ => None,
    }
}

// Shared lexeme/normal-form logic: strip the prefix, ask the unit below,
// put the prefix back on every result.
fn prefixed_lexeme(morph: &MorphAnalyzer, parse: &Parse) -> Vec<Parse> {
    let (Some(prefix), Some(method)) = (prefix_of(parse), parse.methods().last()) else {
        return vec![parse.clone()];
    };
    let inner = strip_prefix(parse, prefix);
    morph
        .lexeme(&inner)
        .into_iter()
        .map(|form| add_prefix(form, prefix, method.clone()))
        .collect()
}

fn prefixed_normalized(morph: &MorphAnalyzer, parse: &Parse) -> Parse {
    let (Some(prefix), Some(method)) = (prefix_of(parse), parse.methods().last()) else {
        return parse.clone();
    };
    let inner = strip_prefix(parse, prefix);
    add_prefix(morph.normalized(&inner), prefix, method.clone())
}

/// Strips a known derivational prefix ("псевдо", "анти-") and analyzes the
/// rest: "псевдокошка" is read like "кошка".
pub struct KnownPrefixUnit {
    prefixes: Trie<()>,
    min_remainder: usize,
    score: f64,
}

impl KnownPrefixUnit {
    pub fn new<S: AsRef<str>>(prefixes: &[S], score: f64, min_remainder: usize) -> Self {
        let mut trie = Trie::new();
        for prefix in prefixes {
            let prefix = prefix.as_ref();
            if !prefix.is_empty() && !trie.contains_key(prefix) {
                trie.insert(prefix, ());
            }
        }
        Self {
            prefixes: trie,
            min_remainder,
            score,
        }
    }

    /// (prefix, rest) pairs, longest prefix first.
    fn splits<'w>(&self, word: &'w str) -> Vec<(&'w str, &'w str)> {
        let mut found: Vec<(&str, &str)> = self
            .prefixes
            .prefixes(word)
            .into_iter()
            .filter(|p| !p.is_empty())
            .map(|p| (p, &word[p.len()..]))
            .filter(|(_, rest)| rest.chars().count() >= self.min_remainder)
            .collect();
        found.reverse();
        found
    }
}

impl AnalyzerUnit for KnownPrefixUnit {
    fn kind(&self) -> UnitKind {
        UnitKind::KnownPrefix
    }

    fn parse(&self, morph: &MorphAnalyzer, _word: &str, word_lower: &str, seen: &mut SeenParses) -> Vec<Parse> {
        let mut result = Vec::new();
        for (prefix, rest) in self.splits(word_lower) {
            let method = Provenance::KnownPrefix {
                prefix: prefix.to_string(),
            };
            for parse in morph.analyze(rest) {
                if !parse.tag().is_productive() {
                    continue;
                }
                let score = parse.score() * self.score;
                seen.add(add_prefix(parse.with_score(score), prefix, method.clone()), &mut result);
            }
        }
        result
    }

    fn tag(&self, morph: &MorphAnalyzer, _word: &str, word_lower: &str, seen: &mut SeenTags) -> Vec<Tag> {
        let mut result = Vec::new();
        for (_, rest) in self.splits(word_lower) {
            for tag in morph.analyze_tags(rest) {
                if tag.is_productive() {
                    seen.add(tag, &mut result);
                }
            }
        }
        result
    }

    fn lexeme(&self, morph: &MorphAnalyzer, parse: &Parse) -> Vec<Parse> {
        prefixed_lexeme(morph, parse)
    }

    fn normalized(&self, morph: &MorphAnalyzer, parse: &Parse) -> Parse {
        prefixed_normalized(morph, parse)
    }
}

/// Tries every short leading chunk as a prefix and looks the rest up in the
/// dictionary. Only the dictionary is consulted, never the whole pipeline.
pub struct UnknownPrefixUnit {
    max_prefix_length: usize,
    min_remainder: usize,
    score: f64,
}

impl UnknownPrefixUnit {
    pub fn new(score: f64, max_prefix_length: usize, min_remainder: usize) -> Self {
        Self {
            max_prefix_length,
            min_remainder,
            score,
        }
    }

    /// (prefix, rest) pairs, shortest prefix first.
    fn splits<'w>(&self, word: &'w str) -> Vec<(&'w str, &'w str)> {
        let len = word.chars().count();
        let longest = self.max_prefix_length.min(len.saturating_sub(self.min_remainder));
        word.char_indices()
            .skip(1)
            .take(longest)
            .map(|(at, _)| (&word[..at], &word[at..]))
            .collect()
    }
}

impl AnalyzerUnit for UnknownPrefixUnit {
    fn kind(&self) -> UnitKind {
        UnitKind::UnknownPrefix
    }

    fn parse(&self, morph: &MorphAnalyzer, _word: &str, word_lower: &str, seen: &mut SeenParses) -> Vec<Parse> {
        let mut result = Vec::new();
        for (prefix, rest) in self.splits(word_lower) {
            let method = Provenance::UnknownPrefix {
                prefix: prefix.to_string(),
            };
            let found = DictionaryUnit::lookup(morph.dictionary(), rest, morph.substitutes(), &mut SeenParses::new());
            for parse in found {
                if !parse.tag().is_productive() {
                    continue;
                }
                let score = parse.score() * self.score;
                seen.add(add_prefix(parse.with_score(score), prefix, method.clone()), &mut result);
            }
        }
        result
    }

    fn lexeme(&self, morph: &MorphAnalyzer, parse: &Parse) -> Vec<Parse> {
        prefixed_lexeme(morph, parse)
    }

    fn normalized(&self, morph: &MorphAnalyzer, parse: &Parse) -> Parse {
        prefixed_normalized(morph, parse)
    }
}
