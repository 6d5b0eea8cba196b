// File: src/core/context.rs
use crate::core::trie::Trie;
use crate::core::types::Parse;
use crate::tagset::Tag;
use serde::{Deserialize, Serialize};

/// Probabilities are stored as integers scaled by this factor.
pub const PROBABILITY_SCALE: f64 = 1_000_000.0;

fn table_key(word_lower: &str, tag: &str) -> String {
    format!("{word_lower}:{tag}")
}

/// P(tag | word), keyed by `"word:tag"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbabilityTable {
    entries: Trie<u32>,
}

impl ProbabilityTable {
    /// 0.0 when the pair was never observed.
    pub fn prob(&self, word_lower: &str, tag: &Tag) -> f64 {
        self.entries
            .get(&table_key(word_lower, tag.as_str()))
            .and_then(|values| values.first())
            .map_or(0.0, |&scaled| f64::from(scaled) / PROBABILITY_SCALE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects `(word, tag, probability)` observations into a table.
#[derive(Debug, Default)]
pub struct ProbabilityTableBuilder {
    table: ProbabilityTable,
}

impl ProbabilityTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later entries for the same pair are ignored.
    pub fn add(&mut self, word: &str, tag: &Tag, probability: f64) -> &mut Self {
        let key = table_key(&word.to_lowercase(), tag.as_str());
        if !self.table.entries.contains_key(&key) {
            let scaled = (probability.clamp(0.0, 1.0) * PROBABILITY_SCALE).round() as u32;
            self.table.entries.insert(&key, scaled);
        }
        self
    }

    pub fn build(self) -> ProbabilityTable {
        self.table
    }
}

/// Re-ranks analyzer output with P(tag | word). Never adds or drops results.
#[derive(Debug, Clone)]
pub struct ProbabilityEstimator {
    table: ProbabilityTable,
}

impl ProbabilityEstimator {
    pub fn new(table: ProbabilityTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    /// Scores become P(tag|word), best first. Words the table has never seen
    /// keep their order; their scores are normalized to sum to 1.
    pub fn apply_to_parses(&self, word_lower: &str, parses: Vec<Parse>) -> Vec<Parse> {
        if parses.is_empty() {
            return parses;
        }
        let probs: Vec<f64> = parses
            .iter()
            .map(|p| self.table.prob(word_lower, p.tag()))
            .collect();

        if probs.iter().sum::<f64>() == 0.0 {
            let total: f64 = parses.iter().map(Parse::score).sum();
            if total <= 0.0 {
                return parses;
            }
            return parses
                .into_iter()
                .map(|p| {
                    let score = p.score() / total;
                    p.with_score(score)
                })
                .collect();
        }

        let mut ranked: Vec<Parse> = parses
            .into_iter()
            .zip(probs)
            .map(|(p, prob)| p.with_score(prob))
            .collect();
        ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));
        ranked
    }

    pub fn apply_to_tags(&self, word_lower: &str, mut tags: Vec<Tag>) -> Vec<Tag> {
        tags.sort_by(|a, b| {
            self.table
                .prob(word_lower, b)
                .total_cmp(&self.table.prob(word_lower, a))
        });
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Provenance;
    use crate::tagset::GrammemeCatalog;

    fn parse(catalog: &GrammemeCatalog, tag: &str, score: f64) -> Parse {
        let tag = Tag::parse(catalog, tag).unwrap();
        Parse::new(
            "стали".into(),
            tag,
            "стать".into(),
            score,
            vec![Provenance::Unknown { word: "стали".into() }],
        )
    }

    #[test]
    fn test_probabilities_replace_scores() {
        let catalog = GrammemeCatalog::opencorpora();
        let noun = Tag::parse(&catalog, "NOUN,inan,femn sing,gent").unwrap();
        let mut builder = ProbabilityTableBuilder::new();
        builder.add("Стали", &noun, 0.7);
        let estimator = ProbabilityEstimator::new(builder.build());

        let parses = vec![
            parse(&catalog, "VERB,perf,intr plur,past,indc", 1.0),
            parse(&catalog, "NOUN,inan,femn sing,gent", 1.0),
        ];
        let ranked = estimator.apply_to_parses("стали", parses);
        assert_eq!(ranked[0].tag(), &noun);
        assert!((ranked[0].score() - 0.7).abs() < 1e-9);
        assert_eq!(ranked[1].score(), 0.0);

        let tags: Vec<Tag> = vec![
            Tag::parse(&catalog, "VERB,perf,intr plur,past,indc").unwrap(),
            noun.clone(),
        ];
        assert_eq!(estimator.apply_to_tags("стали", tags)[0], noun);
    }

    #[test]
    fn test_unseen_word_scores_are_normalized() {
        let catalog = GrammemeCatalog::opencorpora();
        let estimator = ProbabilityEstimator::new(ProbabilityTable::default());
        let parses = vec![
            parse(&catalog, "VERB,perf,intr plur,past,indc", 0.75),
            parse(&catalog, "NOUN,inan,femn sing,gent", 0.25),
        ];
        let ranked = estimator.apply_to_parses("стали", parses);
        let scores: Vec<f64> = ranked.iter().map(Parse::score).collect();
        assert_eq!(scores, vec![0.75, 0.25]);
        assert!(ranked[0].tag().pos().is_some_and(|g| g.as_str() == "VERB"));
    }
}
