// File: src/units/suffix.rs
use crate::core::engine::MorphAnalyzer;
use crate::core::types::{ParadigmId, Parse, Provenance, SeenParses};
use crate::tagset::Tag;
use crate::units::{AnalyzerUnit, UnitKind};
use std::collections::HashSet;
use tracing::debug;

/// Guesses paradigms for unknown words from dictionary words with the same
/// ending: "бутявка" inflects like words ending in "-вка".
///
/// Each paradigm prefix ("", "по", "наи") has its own ending index; prefixes
/// the word starts with are tried longest first. Within a prefix, endings
/// are tried longest first and the scan stops at the first length that
/// found anything.
pub struct KnownSuffixUnit {
    score: f64,
    min_word_length: usize,
}

impl KnownSuffixUnit {
    pub fn new(score: f64, min_word_length: usize) -> Self {
        Self {
            score,
            min_word_length,
        }
    }
}

struct Candidate {
    count: u32,
    prefix_id: usize,
    parse: Parse,
}

impl AnalyzerUnit for KnownSuffixUnit {
    fn kind(&self) -> UnitKind {
        UnitKind::KnownSuffix
    }

    fn parse(&self, morph: &MorphAnalyzer, _word: &str, word_lower: &str, seen: &mut SeenParses) -> Vec<Parse> {
        let chars: Vec<char> = word_lower.chars().collect();
        if chars.len() < self.min_word_length {
            return Vec::new();
        }
        let dict = morph.dictionary();
        let max_suffix_length = dict.meta().prediction_options.max_suffix_length;

        // add-one smoothing per prefix group
        let mut total_counts = vec![1u32; dict.paradigm_prefixes().len()];
        let mut reduced: HashSet<(String, Tag, ParadigmId)> = HashSet::new();
        let mut candidates = Vec::new();

        for (prefix_id, prefix) in dict.paradigm_prefixes().iter().enumerate().rev() {
            if !word_lower.starts_with(prefix.as_str()) {
                continue;
            }
            let Some(index) = dict.prediction_index(prefix_id) else {
                continue;
            };
            for split in (1..=max_suffix_length).rev() {
                let cut = chars.len().saturating_sub(split);
                let start: String = chars[..cut].iter().collect();
                let end: String = chars[cut..].iter().collect();

                for (fixed_suffix, stats) in index.similar_items(&end, morph.substitutes()) {
                    let fixed_word = format!("{start}{fixed_suffix}");
                    for stat in stats {
                        let tag = dict.tag_of(stat.paradigm, stat.form);
                        if !tag.is_productive() {
                            continue;
                        }
                        total_counts[prefix_id] += stat.count;
                        if !reduced.insert((fixed_word.clone(), tag.clone(), stat.paradigm)) {
                            continue;
                        }
                        let Some(normal_form) = dict.normal_form(stat.paradigm, stat.form, &fixed_word) else {
                            continue;
                        };
                        let methods = vec![
                            Provenance::Dictionary {
                                word: fixed_word.clone(),
                                paradigm: stat.paradigm,
                                form: stat.form,
                            },
                            Provenance::KnownSuffix {
                                ending: fixed_suffix.clone(),
                            },
                        ];
                        candidates.push(Candidate {
                            count: stat.count,
                            prefix_id,
                            parse: Parse::new(fixed_word.clone(), tag.clone(), normal_form, 1.0, methods),
                        });
                    }
                }
                if total_counts[prefix_id] > 1 {
                    break;
                }
            }
        }
        debug!(word = word_lower, candidates = candidates.len(), "suffix prediction");

        let mut scored: Vec<Parse> = candidates
            .into_iter()
            .map(|c| {
                let score = f64::from(c.count) / f64::from(total_counts[c.prefix_id]) * self.score;
                c.parse.with_score(score)
            })
            .collect();
        scored.sort_by(|a, b| b.score().total_cmp(&a.score()));

        let mut result = Vec::new();
        for parse in scored {
            seen.add(parse, &mut result);
        }
        result
    }

    fn lexeme(&self, morph: &MorphAnalyzer, parse: &Parse) -> Vec<Parse> {
        let Some(method) = parse.methods().last() else {
            return vec![parse.clone()];
        };
        morph
            .lexeme(&parse.popped())
            .into_iter()
            .map(|form| form.pushed(method.clone()))
            .collect()
    }

    fn normalized(&self, morph: &MorphAnalyzer, parse: &Parse) -> Parse {
        let Some(method) = parse.methods().last() else {
            return parse.clone();
        };
        morph.normalized(&parse.popped()).pushed(method.clone())
    }
}
