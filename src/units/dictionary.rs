// File: src/units/dictionary.rs
use crate::core::engine::MorphAnalyzer;
use crate::core::types::{FormIndex, Parse, ParadigmId, Provenance, SeenParses, SeenTags};
use crate::dict::Dictionary;
use crate::fuzzy::CharSubstitutes;
use crate::tagset::Tag;
use crate::units::{AnalyzerUnit, UnitKind};
use tracing::error;

/// Looks the word up in the word index. Every hit is a full-confidence reading.
#[derive(Debug, Default)]
pub struct DictionaryUnit;

impl DictionaryUnit {
    pub fn new() -> Self {
        Self
    }

    /// Readings of `word_lower` straight from the index, substitutes applied.
    pub fn lookup(
        dict: &Dictionary,
        word_lower: &str,
        substitutes: &CharSubstitutes,
        seen: &mut SeenParses,
    ) -> Vec<Parse> {
        let mut result = Vec::new();
        for (fixed_word, wf) in dict.lookup(word_lower, substitutes) {
            let Some(normal_form) = dict.normal_form(wf.paradigm, wf.form, &fixed_word) else {
                error!(word = %fixed_word, paradigm = wf.paradigm, form = wf.form, "affixes do not match paradigm");
                continue;
            };
            let tag = dict.tag_of(wf.paradigm, wf.form).clone();
            let method = Provenance::Dictionary {
                word: fixed_word.clone(),
                paradigm: wf.paradigm,
                form: wf.form,
            };
            seen.add(Parse::new(fixed_word, tag, normal_form, 1.0, vec![method]), &mut result);
        }
        result
    }

    /// The full lexeme of a word known to be form `form` of `paradigm`.
    pub fn forms(dict: &Dictionary, word: &str, paradigm: ParadigmId, form: FormIndex) -> Option<Vec<Parse>> {
        let stem = dict.stem(paradigm, form, word)?;
        let info = dict.paradigm_info(paradigm);
        let (first_prefix, _, first_suffix) = info.first()?;
        let normal_form = format!("{first_prefix}{stem}{first_suffix}");
        Some(
            info.iter()
                .enumerate()
                .map(|(index, (prefix, tag, suffix))| {
                    let word = format!("{prefix}{stem}{suffix}");
                    let method = Provenance::Dictionary {
                        word: word.clone(),
                        paradigm,
                        form: index as FormIndex,
                    };
                    Parse::new(word, (*tag).clone(), normal_form.clone(), 1.0, vec![method])
                })
                .collect(),
        )
    }
}

impl AnalyzerUnit for DictionaryUnit {
    fn kind(&self) -> UnitKind {
        UnitKind::Dictionary
    }

    fn parse(&self, morph: &MorphAnalyzer, _word: &str, word_lower: &str, seen: &mut SeenParses) -> Vec<Parse> {
        Self::lookup(morph.dictionary(), word_lower, morph.substitutes(), seen)
    }

    fn tag(&self, morph: &MorphAnalyzer, _word: &str, word_lower: &str, seen: &mut SeenTags) -> Vec<Tag> {
        let dict = morph.dictionary();
        let mut result = Vec::new();
        for (_, wf) in dict.lookup(word_lower, morph.substitutes()) {
            seen.add(dict.tag_of(wf.paradigm, wf.form).clone(), &mut result);
        }
        result
    }

    fn lexeme(&self, morph: &MorphAnalyzer, parse: &Parse) -> Vec<Parse> {
        let Some(Provenance::Dictionary { word, paradigm, form }) = parse.methods().last() else {
            return vec![parse.clone()];
        };
        match Self::forms(morph.dictionary(), word, *paradigm, *form) {
            Some(forms) => forms,
            None => {
                error!(word = %word, paradigm, form, "cannot rebuild lexeme");
                vec![parse.clone()]
            }
        }
    }

    fn normalized(&self, morph: &MorphAnalyzer, parse: &Parse) -> Parse {
        let Some(Provenance::Dictionary { paradigm, form, .. }) = parse.methods().last() else {
            return parse.clone();
        };
        if *form == 0 {
            return parse.clone();
        }
        let dict = morph.dictionary();
        let normal_form = parse.normal_form().to_string();
        let method = Provenance::Dictionary {
            word: normal_form.clone(),
            paradigm: *paradigm,
            form: 0,
        };
        Parse::new(
            normal_form.clone(),
            dict.tag_of(*paradigm, 0).clone(),
            normal_form,
            1.0,
            vec![method],
        )
    }
}
