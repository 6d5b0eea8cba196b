// File: src/core/engine.rs
use crate::config::{AnalyzerConfig, ProbabilityMode};
use crate::core::context::{ProbabilityEstimator, ProbabilityTable};
use crate::core::types::{Parse, Provenance, SeenParses, SeenTags};
use crate::dict::Dictionary;
use crate::error::{MorphError, Result};
use crate::fuzzy::CharSubstitutes;
use crate::lang;
use crate::persistence::{load_dictionary, load_probability_table, probability_table_path};
use crate::tagset::agreement::numeral_agreement;
use crate::tagset::{Grammeme, GrammemeCatalog, GrammemeSet, Tag};
use crate::units::{AnalyzerUnit, UnitGroup};
use std::fmt;
use tracing::{debug, info, warn};

/// The analyzer: a loaded dictionary plus the unit pipeline that reads it.
///
/// Immutable after construction. Share it between threads behind an `Arc`.
pub struct MorphAnalyzer {
    dictionary: Dictionary,
    pipeline: Vec<UnitGroup>,
    substitutes: CharSubstitutes,
    estimator: Option<ProbabilityEstimator>,
}

impl MorphAnalyzer {
    /// Loads the dictionary directory named by `config` (or `MORPH_DICT_PATH`).
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let path = config.resolve_dict_path()?;
        let dictionary = load_dictionary(&path)?;

        let table = match config.probability {
            ProbabilityMode::Disabled => None,
            ProbabilityMode::Auto => load_probability_table(&path)?,
            ProbabilityMode::Enabled => Some(load_probability_table(&path)?.ok_or_else(|| {
                MorphError::MissingProbabilityTable {
                    path: probability_table_path(&path),
                }
            })?),
        };

        let analyzer = Self::from_dictionary(dictionary, config)?;
        Ok(match table {
            Some(table) => analyzer.with_probability_table(table),
            None => analyzer,
        })
    }

    /// Wraps an already assembled dictionary. `config.dict_path` and
    /// `config.probability` are ignored here.
    pub fn from_dictionary(mut dictionary: Dictionary, config: &AnalyzerConfig) -> Result<Self> {
        lang::register_synthetic_grammemes(dictionary.catalog_mut());

        let language = dictionary.language().to_string();
        if let Some(requested) = config.lang.as_deref() {
            if requested != language {
                warn!(requested, loaded = %language, "dictionary language differs from the requested one");
            }
        }

        let substitutes = match &config.char_substitutes {
            Some(map) => CharSubstitutes::from(map.clone()),
            None => lang::default_substitutes(&language),
        };
        let pipeline = lang::default_pipeline(&language, dictionary.catalog())?;

        info!(
            language = %language,
            groups = pipeline.len(),
            words = dictionary.words().len(),
            "analyzer ready"
        );
        Ok(Self {
            dictionary,
            pipeline,
            substitutes,
            estimator: None,
        })
    }

    /// Replaces the unit pipeline.
    pub fn with_pipeline(mut self, pipeline: Vec<UnitGroup>) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_probability_table(mut self, table: ProbabilityTable) -> Self {
        info!(entries = table.len(), "probability re-ranking enabled");
        self.estimator = Some(ProbabilityEstimator::new(table));
        self
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn catalog(&self) -> &GrammemeCatalog {
        self.dictionary.catalog()
    }

    pub fn language(&self) -> &str {
        self.dictionary.language()
    }

    pub fn substitutes(&self) -> &CharSubstitutes {
        &self.substitutes
    }

    pub fn has_probabilities(&self) -> bool {
        self.estimator.is_some()
    }

    /// All readings of `word`, best first. Never empty.
    pub fn parse(&self, word: &str) -> Vec<Parse> {
        let parses = self.analyze(word);
        match &self.estimator {
            Some(estimator) => estimator.apply_to_parses(&word.to_lowercase(), parses),
            None => parses,
        }
    }

    /// Possible tags of `word`, best first. Never empty.
    pub fn tag(&self, word: &str) -> Vec<Tag> {
        let tags = self.analyze_tags(word);
        match &self.estimator {
            Some(estimator) => estimator.apply_to_tags(&word.to_lowercase(), tags),
            None => tags,
        }
    }

    /// Distinct normal forms in the order of [`parse`](Self::parse).
    pub fn normal_forms(&self, word: &str) -> Vec<String> {
        let mut result: Vec<String> = Vec::new();
        for parse in self.parse(word) {
            if !result.iter().any(|nf| nf == parse.normal_form()) {
                result.push(parse.normal_form);
            }
        }
        result
    }

    /// Runs the pipeline without re-ranking. Units call this for the parts
    /// of a word they split off.
    pub fn analyze(&self, word: &str) -> Vec<Parse> {
        let word_lower = word.to_lowercase();
        let mut seen = SeenParses::new();
        let mut result = Vec::new();
        for group in &self.pipeline {
            for unit in group.units() {
                result.extend(unit.parse(self, word, &word_lower, &mut seen));
            }
            if !result.is_empty() {
                break;
            }
        }
        debug!(word, readings = result.len(), "analyzed");
        result
    }

    pub fn analyze_tags(&self, word: &str) -> Vec<Tag> {
        let word_lower = word.to_lowercase();
        let mut seen = SeenTags::new();
        let mut result = Vec::new();
        for group in &self.pipeline {
            for unit in group.units() {
                result.extend(unit.tag(self, word, &word_lower, &mut seen));
            }
            if !result.is_empty() {
                break;
            }
        }
        result
    }

    fn unit_for(&self, parse: &Parse) -> Option<&dyn AnalyzerUnit> {
        let kind = parse.methods().last()?.unit_kind();
        self.pipeline
            .iter()
            .flat_map(|group| group.units())
            .find(|unit| unit.kind() == kind)
            .map(|unit| unit.as_ref())
    }

    /// Every form of the lexeme `parse` belongs to, normal form first.
    pub fn lexeme(&self, parse: &Parse) -> Vec<Parse> {
        match self.unit_for(parse) {
            Some(unit) => unit.lexeme(self, parse),
            None => vec![parse.clone()],
        }
    }

    /// The reading of the normal form of `parse`.
    pub fn normalized(&self, parse: &Parse) -> Parse {
        match self.unit_for(parse) {
            Some(unit) => unit.normalized(self, parse),
            None => parse.clone(),
        }
    }

    /// The form of the lexeme that carries every grammeme in `required` and
    /// is otherwise closest to `parse`. `Ok(None)` when the lexeme has no
    /// such form; an error when a grammeme name is unknown.
    pub fn inflect<S: AsRef<str>>(&self, parse: &Parse, required: &[S]) -> Result<Option<Parse>> {
        let catalog = self.catalog();
        let required = catalog.grammemes(required.iter().map(|s| s.as_ref()))?;
        let lexeme = self.lexeme(parse);
        let (candidates, required) = forms_carrying(catalog, &lexeme, required);

        let target = catalog.updated_grammemes(&parse.tag().grammeme_set(), &required);
        let mut best: Option<(&Parse, f64)> = None;
        for candidate in candidates {
            let tag = candidate.tag().grammeme_set();
            let shared = target.intersection(&tag).count() as f64;
            let differing = target.symmetric_difference(&tag).count() as f64;
            let similarity = shared - 0.1 * differing;
            if best.map_or(true, |(_, s)| similarity > s) {
                best = Some((candidate, similarity));
            }
        }
        Ok(best.map(|(p, _)| p.clone()))
    }

    /// Inflects a noun or adjective to agree with the number `num`
    /// ("1 лопата", "2 лопаты", "5 лопат").
    pub fn make_agree_with_number(&self, parse: &Parse, num: u64) -> Option<Parse> {
        let tag = parse.tag();
        let pos = tag.pos().map(Grammeme::as_str).unwrap_or_default();
        let required = numeral_agreement(pos, tag.case().map(Grammeme::as_str), tag.gender().map(Grammeme::as_str), num);
        match self.inflect(parse, &required) {
            Ok(inflected) => inflected,
            Err(err) => {
                warn!(%err, "catalog lacks agreement grammemes");
                None
            }
        }
    }

    /// Whether `word` is in the dictionary. With `strict` off, character
    /// substitutions are allowed ("ежик" finds "ёжик").
    pub fn word_is_known(&self, word: &str, strict: bool) -> bool {
        let substitutes = if strict { None } else { Some(&self.substitutes) };
        self.dictionary.word_is_known(&word.to_lowercase(), substitutes)
    }

    /// Dictionary readings of every known word starting with `prefix`, in
    /// lexicographic order.
    pub fn iter_known_word_parses<'a>(&'a self, prefix: &str) -> impl Iterator<Item = Parse> + 'a {
        self.dictionary.iter_known_words(prefix).map(|known| {
            let method = Provenance::Dictionary {
                word: known.word.clone(),
                paradigm: known.paradigm,
                form: known.form,
            };
            Parse::new(known.word, known.tag, known.normal_form, 1.0, vec![method])
        })
    }
}

impl fmt::Debug for MorphAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MorphAnalyzer")
            .field("language", &self.language())
            .field("groups", &self.pipeline.len())
            .field("probabilities", &self.estimator.is_some())
            .finish()
    }
}

// Forms of `lexeme` whose tags hold `required`. When none do, rare cases are
// swapped for their common counterparts and the search repeats. Returns the
// grammeme set the forms were matched against.
fn forms_carrying<'a>(
    catalog: &GrammemeCatalog,
    lexeme: &'a [Parse],
    required: GrammemeSet,
) -> (Vec<&'a Parse>, GrammemeSet) {
    let found: Vec<&Parse> = lexeme.iter().filter(|p| p.tag().contains_all(&required)).collect();
    if !found.is_empty() {
        return (found, required);
    }
    let fixed = catalog.fix_rare_cases(&required);
    let found = lexeme.iter().filter(|p| p.tag().contains_all(&fixed)).collect();
    (found, fixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::DictionaryBuilder;
    use crate::units::{DictionaryUnit, UnknownUnit};

    fn analyzer() -> MorphAnalyzer {
        let mut builder = DictionaryBuilder::new("ru");
        builder.add_lexeme(&[
            ("стол", "NOUN,inan,masc sing,nomn"),
            ("стола", "NOUN,inan,masc sing,gent"),
            ("столу", "NOUN,inan,masc sing,datv"),
            ("столы", "NOUN,inan,masc plur,nomn"),
            ("столов", "NOUN,inan,masc plur,gent"),
        ]);
        MorphAnalyzer::from_dictionary(builder.build().unwrap(), &AnalyzerConfig::new()).unwrap()
    }

    #[test]
    fn test_analyzer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MorphAnalyzer>();
    }

    #[test]
    fn test_dictionary_word_is_known_reading() {
        let morph = analyzer();
        let parses = morph.parse("Стола");
        assert_eq!(parses.len(), 1);
        assert!(parses[0].is_known());
        assert_eq!(parses[0].normal_form(), "стол");
        assert_eq!(morph.normal_forms("столов"), vec!["стол"]);
    }

    #[test]
    fn test_inflect_picks_required_form() {
        let morph = analyzer();
        let parse = &morph.parse("стол")[0];
        let inflected = morph.inflect(parse, &["plur", "gent"]).unwrap().unwrap();
        assert_eq!(inflected.word(), "столов");
        assert!(morph.inflect(parse, &["plur", "ablt"]).unwrap().is_none());
        assert!(matches!(
            morph.inflect(parse, &["plural"]),
            Err(MorphError::UnknownGrammeme(_))
        ));
    }

    #[test]
    fn test_rare_case_is_matched_as_common_case() {
        let morph = analyzer();
        let parse = &morph.parse("столы")[0];
        let lexeme = morph.lexeme(parse);
        let catalog = morph.catalog();

        let gen2 = catalog.grammemes(["gen2"]).unwrap();
        let (forms, matched) = forms_carrying(catalog, &lexeme, gen2);
        assert_eq!(matched, catalog.grammemes(["gent"]).unwrap());
        let words: Vec<&str> = forms.iter().map(|p| p.word()).collect();
        assert_eq!(words, vec!["стола", "столов"]);

        let plur = catalog.grammemes(["plur"]).unwrap();
        let (forms, matched) = forms_carrying(catalog, &lexeme, plur.clone());
        assert_eq!(matched, plur);
        assert_eq!(forms.len(), 2);

        let inflected = morph.inflect(parse, &["gen2"]).unwrap().unwrap();
        assert_eq!(inflected.word(), "столов");
    }

    #[test]
    fn test_custom_pipeline_falls_back_to_unknown() {
        let morph = analyzer();
        let catalog = morph.catalog().clone();
        let morph = morph.with_pipeline(vec![
            UnitGroup::single(DictionaryUnit::new()),
            UnitGroup::single(UnknownUnit::new(&catalog).unwrap()),
        ]);
        let parses = morph.parse("бутявка");
        assert_eq!(parses.len(), 1);
        assert!(parses[0].tag().is_unknown());
        assert_eq!(morph.lexeme(&parses[0]), parses);
    }

    #[test]
    fn test_word_is_known_strictness() {
        let morph = analyzer();
        assert!(morph.word_is_known("СТОЛ", true));
        assert!(!morph.word_is_known("стул", false));
    }
}
