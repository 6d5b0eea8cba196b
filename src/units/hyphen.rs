// File: src/units/hyphen.rs
//
// Hyphenated tokens: trailing particles ("кошка-то"), "по-" adverbs
// ("по-хорошему") and two-part compounds ("интернет-магазин").

use crate::core::engine::MorphAnalyzer;
use crate::core::types::{Parse, Provenance, SeenParses, SeenTags};
use crate::error::Result;
use crate::tagset::{GrammemeCatalog, GrammemeSet, Tag};
use crate::units::{add_prefix, add_suffix, strip_prefix, strip_suffix, AnalyzerUnit, UnitKind};
use std::collections::BTreeSet;

/// Strips a particle such as "-то" or "-ка", analyzes the rest and glues
/// the particle back onto both the word and its normal form.
pub struct HyphenParticleUnit {
    particles: Vec<String>,
    score: f64,
}

impl HyphenParticleUnit {
    pub fn new<S: AsRef<str>>(particles: &[S], score: f64) -> Self {
        Self {
            particles: particles.iter().map(|p| p.as_ref().to_string()).collect(),
            score,
        }
    }

    /// (rest, particle) for the first particle in list order the word ends with.
    fn split<'w>(&self, word: &'w str) -> Option<(&'w str, &'w str)> {
        if !word.contains('-') {
            return None;
        }
        let particle = self.particles.iter().find(|p| word.ends_with(p.as_str()))?;
        let rest = &word[..word.len() - particle.len()];
        if rest.is_empty() {
            return None;
        }
        Some((rest, &word[rest.len()..]))
    }

    fn particle_of(parse: &Parse) -> Option<&str> {
        match parse.methods().last()? {
            Provenance::HyphenParticle { particle } => Some(particle),
            _ => None,
        }
    }
}

impl AnalyzerUnit for HyphenParticleUnit {
    fn kind(&self) -> UnitKind {
        UnitKind::HyphenParticle
    }

    fn parse(&self, morph: &MorphAnalyzer, _word: &str, word_lower: &str, seen: &mut SeenParses) -> Vec<Parse> {
        let mut result = Vec::new();
        let Some((rest, particle)) = self.split(word_lower) else {
            return result;
        };
        let method = Provenance::HyphenParticle {
            particle: particle.to_string(),
        };
        for parse in morph.analyze(rest) {
            let score = parse.score() * self.score;
            seen.add(add_suffix(parse.with_score(score), particle, method.clone()), &mut result);
        }
        result
    }

    fn tag(&self, morph: &MorphAnalyzer, _word: &str, word_lower: &str, seen: &mut SeenTags) -> Vec<Tag> {
        let mut result = Vec::new();
        if let Some((rest, _)) = self.split(word_lower) {
            for tag in morph.analyze_tags(rest) {
                seen.add(tag, &mut result);
            }
        }
        result
    }

    fn lexeme(&self, morph: &MorphAnalyzer, parse: &Parse) -> Vec<Parse> {
        let (Some(particle), Some(method)) = (Self::particle_of(parse), parse.methods().last()) else {
            return vec![parse.clone()];
        };
        morph
            .lexeme(&strip_suffix(parse, particle))
            .into_iter()
            .map(|form| add_suffix(form, particle, method.clone()))
            .collect()
    }

    fn normalized(&self, morph: &MorphAnalyzer, parse: &Parse) -> Parse {
        let (Some(particle), Some(method)) = (Self::particle_of(parse), parse.methods().last()) else {
            return parse.clone();
        };
        add_suffix(morph.normalized(&strip_suffix(parse, particle)), particle, method.clone())
    }
}

/// "по-" followed by an adjective in the dative singular is an adverb.
pub struct HyphenAdverbUnit {
    tag: Tag,
    required: GrammemeSet,
    score: f64,
}

const ADVERB_PREFIX: &str = "по-";

impl HyphenAdverbUnit {
    pub fn new(catalog: &GrammemeCatalog, score: f64) -> Result<Self> {
        Ok(Self {
            tag: Tag::parse(catalog, "ADVB")?,
            required: catalog.grammemes(["ADJF", "sing", "datv"])?,
            score,
        })
    }

    fn should_parse(&self, morph: &MorphAnalyzer, word: &str) -> bool {
        if word.chars().count() < 5 {
            return false;
        }
        let Some(rest) = word.strip_prefix(ADVERB_PREFIX) else {
            return false;
        };
        morph
            .analyze_tags(rest)
            .iter()
            .any(|tag| tag.contains_all(&self.required))
    }
}

impl AnalyzerUnit for HyphenAdverbUnit {
    fn kind(&self) -> UnitKind {
        UnitKind::HyphenAdverb
    }

    fn parse(&self, morph: &MorphAnalyzer, _word: &str, word_lower: &str, seen: &mut SeenParses) -> Vec<Parse> {
        let mut result = Vec::new();
        if self.should_parse(morph, word_lower) {
            let parse = Parse::new(
                word_lower.to_string(),
                self.tag.clone(),
                word_lower.to_string(),
                self.score,
                vec![Provenance::HyphenAdverb {
                    word: word_lower.to_string(),
                }],
            );
            seen.add(parse, &mut result);
        }
        result
    }

    fn tag(&self, morph: &MorphAnalyzer, _word: &str, word_lower: &str, seen: &mut SeenTags) -> Vec<Tag> {
        let mut result = Vec::new();
        if self.should_parse(morph, word_lower) {
            seen.add(self.tag.clone(), &mut result);
        }
        result
    }
}

// gen1/loc1 are plain gent/loct for agreement purposes.
fn canonical(grammeme: &str) -> &str {
    match grammeme {
        "gen1" => "gent",
        "loc1" => "loct",
        other => other,
    }
}

// The grammemes both parts of an inflecting compound must share.
fn agreement_features(tag: &Tag) -> [Option<&str>; 5] {
    [tag.pos(), tag.number(), tag.case(), tag.person(), tag.tense()]
        .map(|g| g.map(|g| canonical(g.as_str())))
}

fn canonical_grammemes(tag: &Tag) -> BTreeSet<&str> {
    tag.grammemes().iter().map(|g| canonical(g.as_str())).collect()
}

/// Two-part compounds with exactly one inner hyphen.
///
/// The left part is either frozen ("интернет-магазина": only the right part
/// inflects) or inflects in step with the right part ("команд-участниц").
/// Both readings are proposed.
pub struct HyphenatedUnit {
    skip_prefixes: Vec<String>,
    score: f64,
}

impl HyphenatedUnit {
    /// Words starting with one of `skip_prefixes` (e.g. "анти-") are left to
    /// the known-prefix unit.
    pub fn new<S: AsRef<str>>(skip_prefixes: &[S], score: f64) -> Self {
        Self {
            skip_prefixes: skip_prefixes.iter().map(|p| p.as_ref().to_string()).collect(),
            score,
        }
    }

    fn split<'w>(&self, word: &'w str) -> Option<(&'w str, &'w str)> {
        let (left, right) = word.split_once('-')?;
        if left.is_empty() || right.is_empty() || right.contains('-') {
            return None;
        }
        let hyphenated = &word[..left.len() + 1];
        if self.skip_prefixes.iter().any(|p| p == hyphenated) {
            return None;
        }
        Some((left, right))
    }

    fn merge(left: &Parse, right: &Parse, score: f64) -> Parse {
        Parse::new(
            format!("{}-{}", left.word(), right.word()),
            left.tag().clone(),
            format!("{}-{}", left.normal_form(), right.normal_form()),
            score,
            vec![Provenance::HyphenVariableBoth {
                left: Box::new(left.clone()),
                right: Box::new(right.clone()),
            }],
        )
    }

    fn merged_score(&self, left: &Parse, right: &Parse) -> f64 {
        (left.score() + right.score()) / 2.0 * self.score
    }

    fn parse_variable_both(&self, left_parses: &[Parse], right_parses: &[Parse], seen: &mut SeenParses, result: &mut Vec<Parse>) {
        for left in left_parses.iter().filter(|p| !p.tag().is_unknown()) {
            let features = agreement_features(left.tag());
            for right in right_parses.iter().filter(|p| !p.tag().is_unknown()) {
                if agreement_features(right.tag()) != features {
                    continue;
                }
                seen.add(Self::merge(left, right, self.merged_score(left, right)), result);
            }
        }
    }

    fn parse_fixed_left(&self, left: &str, right_parses: Vec<Parse>, seen: &mut SeenParses, result: &mut Vec<Parse>) {
        let prefix = format!("{left}-");
        let method = Provenance::HyphenFixedLeft {
            left: left.to_string(),
        };
        for right in right_parses {
            if right.tag().is_unknown() {
                continue;
            }
            let score = right.score() * self.score;
            seen.add(add_prefix(right.with_score(score), &prefix, method.clone()), result);
        }
    }

    // Pairs every right form with the left form closest to it in grammemes.
    fn align(&self, left_lexeme: &[Parse], right_lexeme: Vec<Parse>) -> Vec<Parse> {
        let mut merged = Vec::with_capacity(right_lexeme.len());
        for right in right_lexeme {
            let right_grammemes = canonical_grammemes(right.tag());
            let closest = left_lexeme
                .iter()
                .min_by_key(|left| canonical_grammemes(left.tag()).symmetric_difference(&right_grammemes).count());
            if let Some(left) = closest {
                merged.push(Self::merge(left, &right, self.merged_score(left, &right)));
            }
        }
        merged
    }
}

impl AnalyzerUnit for HyphenatedUnit {
    fn kind(&self) -> UnitKind {
        UnitKind::Hyphenated
    }

    fn parse(&self, morph: &MorphAnalyzer, _word: &str, word_lower: &str, seen: &mut SeenParses) -> Vec<Parse> {
        let mut result = Vec::new();
        let Some((left, right)) = self.split(word_lower) else {
            return result;
        };
        let left_parses = morph.analyze(left);
        let right_parses = morph.analyze(right);
        self.parse_variable_both(&left_parses, &right_parses, seen, &mut result);
        self.parse_fixed_left(left, right_parses, seen, &mut result);
        result
    }

    fn lexeme(&self, morph: &MorphAnalyzer, parse: &Parse) -> Vec<Parse> {
        match parse.methods().last() {
            Some(Provenance::HyphenVariableBoth { left, right }) => {
                let left_lexeme = morph.lexeme(left);
                let merged = self.align(&left_lexeme, morph.lexeme(right));
                if merged.is_empty() {
                    vec![parse.clone()]
                } else {
                    merged
                }
            }
            Some(Provenance::HyphenFixedLeft { left }) => {
                let prefix = format!("{left}-");
                let method = Provenance::HyphenFixedLeft { left: left.clone() };
                morph
                    .lexeme(&strip_prefix(parse, &prefix))
                    .into_iter()
                    .map(|form| add_prefix(form, &prefix, method.clone()))
                    .collect()
            }
            _ => vec![parse.clone()],
        }
    }

    fn normalized(&self, morph: &MorphAnalyzer, parse: &Parse) -> Parse {
        match parse.methods().last() {
            Some(Provenance::HyphenVariableBoth { left, right }) => {
                let left = morph.normalized(left);
                let right = morph.normalized(right);
                Self::merge(&left, &right, self.merged_score(&left, &right))
            }
            Some(Provenance::HyphenFixedLeft { left }) => {
                let prefix = format!("{left}-");
                let method = Provenance::HyphenFixedLeft { left: left.clone() };
                add_prefix(morph.normalized(&strip_prefix(parse, &prefix)), &prefix, method)
            }
            _ => parse.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_split_uses_first_match() {
        let unit = HyphenParticleUnit::new(&["-то", "-ка", "-таки"], 0.9);
        assert_eq!(unit.split("кошка-то"), Some(("кошка", "-то")));
        assert_eq!(unit.split("всё-таки"), Some(("всё", "-таки")));
        assert_eq!(unit.split("-то"), None);
        assert_eq!(unit.split("кошка"), None);
    }

    #[test]
    fn test_compound_split_rules() {
        let unit = HyphenatedUnit::new(&["анти-", "экс-"], 0.75);
        assert_eq!(unit.split("интернет-магазин"), Some(("интернет", "магазин")));
        assert_eq!(unit.split("-магазин"), None);
        assert_eq!(unit.split("магазин-"), None);
        assert_eq!(unit.split("а-б-в"), None);
        assert_eq!(unit.split("экс-чемпион"), None);
        assert_eq!(unit.split("интернет"), None);
    }

    #[test]
    fn test_agreement_features_fold_case_variants() {
        let catalog = GrammemeCatalog::opencorpora();
        let a = Tag::parse(&catalog, "NOUN,inan,masc sing,gen1").unwrap();
        let b = Tag::parse(&catalog, "NOUN,anim,femn sing,gent").unwrap();
        assert_eq!(agreement_features(&a), agreement_features(&b));
        let c = Tag::parse(&catalog, "NOUN,anim,femn plur,gent").unwrap();
        assert_ne!(agreement_features(&a), agreement_features(&c));
    }
}
