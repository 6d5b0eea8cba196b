// File: src/dict/mod.rs
//
// The paradigm dictionary: compact tables plus the word and ending indices.

pub mod builder;
pub mod meta;
pub mod paradigm;

pub use builder::DictionaryBuilder;
pub use meta::{Meta, PredictionOptions, FORMAT_VERSION};
pub use paradigm::Paradigm;

use crate::core::trie::{PrefixIter, Trie};
use crate::core::types::{EndingStat, FormIndex, ParadigmId, WordForm};
use crate::error::{MorphError, Result};
use crate::fuzzy::CharSubstitutes;
use crate::tagset::{GrammemeCatalog, GrammemeRecord, Tag};
use tracing::{error, info};

/// Every table a dictionary is made of, in storage form.
pub struct DictionaryTables {
    pub meta: Meta,
    pub grammemes: Vec<GrammemeRecord>,
    pub gramtab: Vec<String>,
    pub suffixes: Vec<String>,
    pub paradigm_prefixes: Vec<String>,
    pub paradigms: Vec<Paradigm>,
    pub words: Trie<WordForm>,
    /// One ending index per paradigm prefix, in the same order.
    pub prediction: Vec<Trie<EndingStat>>,
}

/// A loaded dictionary. Read-only once wrapped in an `Arc` by the analyzer.
pub struct Dictionary {
    meta: Meta,
    catalog: GrammemeCatalog,
    gramtab: Vec<Tag>,
    suffixes: Vec<String>,
    paradigm_prefixes: Vec<String>,
    paradigms: Vec<Paradigm>,
    words: Trie<WordForm>,
    prediction: Vec<Trie<EndingStat>>,
}

/// One entry of [`Dictionary::iter_known_words`].
#[derive(Debug, Clone, PartialEq)]
pub struct KnownWord {
    pub word: String,
    pub tag: Tag,
    pub normal_form: String,
    pub paradigm: ParadigmId,
    pub form: FormIndex,
}

fn corrupt(table: &'static str, reason: String) -> MorphError {
    MorphError::CorruptDictionary { table, reason }
}

impl Dictionary {
    /// Assembles a dictionary, checking that every id points inside the
    /// table it indexes. After this, lookups never go out of bounds.
    pub fn from_tables(tables: DictionaryTables) -> Result<Self> {
        let catalog = GrammemeCatalog::from_records(&tables.grammemes);
        let gramtab = tables
            .gramtab
            .iter()
            .map(|text| Tag::parse(&catalog, text))
            .collect::<Result<Vec<_>>>()?;

        for (id, paradigm) in tables.paradigms.iter().enumerate() {
            if paradigm.is_empty() || !paradigm.is_well_formed() {
                return Err(corrupt("paradigms", format!("paradigm {id} is malformed")));
            }
            if paradigm.suffix_ids().iter().any(|&s| s as usize >= tables.suffixes.len()) {
                return Err(corrupt("paradigms", format!("paradigm {id} has a bad suffix id")));
            }
            if paradigm.tag_ids().iter().any(|&t| t as usize >= gramtab.len()) {
                return Err(corrupt("paradigms", format!("paradigm {id} has a bad tag id")));
            }
            if paradigm
                .prefix_ids()
                .iter()
                .any(|&p| p as usize >= tables.paradigm_prefixes.len())
            {
                return Err(corrupt("paradigms", format!("paradigm {id} has a bad prefix id")));
            }
        }

        if !tables.words.validate() {
            return Err(corrupt("words", "trie nodes are inconsistent".to_string()));
        }
        if let Some(id) = tables.prediction.iter().position(|index| !index.validate()) {
            return Err(corrupt("prediction", format!("ending index {id} has inconsistent trie nodes")));
        }

        let in_range = |paradigm: ParadigmId, form: FormIndex| {
            tables
                .paradigms
                .get(paradigm as usize)
                .is_some_and(|p| (form as usize) < p.len())
        };
        for (word, forms) in tables.words.iter_prefix("") {
            if let Some(bad) = forms.iter().find(|wf| !in_range(wf.paradigm, wf.form)) {
                return Err(corrupt("words", format!("{word:?} points to {bad:?}")));
            }
        }
        if tables.prediction.len() != tables.paradigm_prefixes.len() {
            return Err(corrupt(
                "prediction",
                format!(
                    "{} ending indices for {} paradigm prefixes",
                    tables.prediction.len(),
                    tables.paradigm_prefixes.len()
                ),
            ));
        }
        for index in &tables.prediction {
            for (ending, stats) in index.iter_prefix("") {
                if let Some(bad) = stats.iter().find(|s| !in_range(s.paradigm, s.form)) {
                    return Err(corrupt("prediction", format!("{ending:?} points to {bad:?}")));
                }
            }
        }

        info!(
            language = %tables.meta.language,
            paradigms = tables.paradigms.len(),
            words = tables.words.len(),
            tags = gramtab.len(),
            "dictionary tables ready"
        );

        Ok(Dictionary {
            meta: tables.meta,
            catalog,
            gramtab,
            suffixes: tables.suffixes,
            paradigm_prefixes: tables.paradigm_prefixes,
            paradigms: tables.paradigms,
            words: tables.words,
            prediction: tables.prediction,
        })
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn language(&self) -> &str {
        &self.meta.language
    }

    pub fn catalog(&self) -> &GrammemeCatalog {
        &self.catalog
    }

    /// Only available before the dictionary is shared.
    pub fn catalog_mut(&mut self) -> &mut GrammemeCatalog {
        &mut self.catalog
    }

    pub fn gramtab(&self) -> &[Tag] {
        &self.gramtab
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn paradigm_prefixes(&self) -> &[String] {
        &self.paradigm_prefixes
    }

    pub fn paradigms(&self) -> &[Paradigm] {
        &self.paradigms
    }

    pub fn words(&self) -> &Trie<WordForm> {
        &self.words
    }

    pub fn prediction_indices(&self) -> &[Trie<EndingStat>] {
        &self.prediction
    }

    pub fn prediction_index(&self, prefix_id: usize) -> Option<&Trie<EndingStat>> {
        self.prediction.get(prefix_id)
    }

    /// Tag of form `form` of `paradigm`.
    ///
    /// # Panics
    /// If the ids did not come from this dictionary's indices.
    pub fn tag_of(&self, paradigm: ParadigmId, form: FormIndex) -> &Tag {
        let p = &self.paradigms[paradigm as usize];
        &self.gramtab[p.tag_id(form as usize) as usize]
    }

    /// (prefix, suffix) of a form.
    pub fn affixes(&self, paradigm: ParadigmId, form: FormIndex) -> (&str, &str) {
        let p = &self.paradigms[paradigm as usize];
        let form = form as usize;
        (
            &self.paradigm_prefixes[p.prefix_id(form) as usize],
            &self.suffixes[p.suffix_id(form) as usize],
        )
    }

    /// `fixed_word` without the form's prefix and suffix. None if the word
    /// does not carry them, which means the index and paradigm disagree.
    pub fn stem<'w>(&self, paradigm: ParadigmId, form: FormIndex, fixed_word: &'w str) -> Option<&'w str> {
        let (prefix, suffix) = self.affixes(paradigm, form);
        fixed_word.strip_prefix(prefix)?.strip_suffix(suffix)
    }

    pub fn normal_form(&self, paradigm: ParadigmId, form: FormIndex, fixed_word: &str) -> Option<String> {
        if form == 0 {
            return Some(fixed_word.to_string());
        }
        let stem = self.stem(paradigm, form, fixed_word)?;
        let (prefix, suffix) = self.affixes(paradigm, 0);
        Some(format!("{prefix}{stem}{suffix}"))
    }

    /// (prefix, tag, suffix) for every form of the paradigm, normal form first.
    pub fn paradigm_info(&self, paradigm: ParadigmId) -> Vec<(&str, &Tag, &str)> {
        let p = &self.paradigms[paradigm as usize];
        (0..p.len())
            .map(|i| {
                (
                    self.paradigm_prefixes[p.prefix_id(i) as usize].as_str(),
                    &self.gramtab[p.tag_id(i) as usize],
                    self.suffixes[p.suffix_id(i) as usize].as_str(),
                )
            })
            .collect()
    }

    /// Every indexed spelling reachable from `word` through `substitutes`,
    /// each with its paradigm/form pairs.
    pub fn lookup(&self, word: &str, substitutes: &CharSubstitutes) -> Vec<(String, WordForm)> {
        self.words
            .similar_items(word, substitutes)
            .into_iter()
            .flat_map(|(fixed, forms)| forms.iter().map(move |wf| (fixed.clone(), *wf)))
            .collect()
    }

    pub fn lookup_exact(&self, word: &str) -> &[WordForm] {
        self.words.get(word).unwrap_or(&[])
    }

    /// Exact test with `None`, substitution-tolerant test otherwise.
    pub fn word_is_known(&self, word: &str, substitutes: Option<&CharSubstitutes>) -> bool {
        match substitutes {
            None => self.words.contains_key(word),
            Some(subs) => !self.words.similar_items(word, subs).is_empty(),
        }
    }

    /// Lazily walks every indexed word starting with `prefix`, in key order.
    pub fn iter_known_words(&self, prefix: &str) -> KnownWords<'_> {
        KnownWords {
            dict: self,
            keys: self.words.iter_prefix(prefix),
            current: None,
        }
    }
}

#[derive(Clone)]
pub struct KnownWords<'a> {
    dict: &'a Dictionary,
    keys: PrefixIter<'a, WordForm>,
    current: Option<(String, std::slice::Iter<'a, WordForm>)>,
}

impl Iterator for KnownWords<'_> {
    type Item = KnownWord;

    fn next(&mut self) -> Option<KnownWord> {
        loop {
            if let Some((word, forms)) = &mut self.current {
                if let Some(wf) = forms.next() {
                    let Some(normal_form) = self.dict.normal_form(wf.paradigm, wf.form, word) else {
                        error!(word = %word, paradigm = wf.paradigm, form = wf.form, "affixes do not match paradigm");
                        continue;
                    };
                    return Some(KnownWord {
                        word: word.clone(),
                        tag: self.dict.tag_of(wf.paradigm, wf.form).clone(),
                        normal_form,
                        paradigm: wf.paradigm,
                        form: wf.form,
                    });
                }
            }
            let (word, forms) = self.keys.next()?;
            self.current = Some((word, forms.iter()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Dictionary {
        let mut builder = DictionaryBuilder::new("ru");
        builder.add_lexeme(&[
            ("кошка", "NOUN,anim,femn sing,nomn"),
            ("кошки", "NOUN,anim,femn sing,gent"),
            ("кошке", "NOUN,anim,femn sing,datv"),
        ]);
        builder.add_lexeme(&[("ёж", "NOUN,anim,masc sing,nomn"), ("ежа", "NOUN,anim,masc sing,gent")]);
        builder.build().unwrap()
    }

    #[test]
    fn test_normal_form_and_stem() {
        let dict = tiny();
        let forms = dict.lookup_exact("кошке");
        assert_eq!(forms.len(), 1);
        let wf = forms[0];
        assert_eq!(dict.stem(wf.paradigm, wf.form, "кошке"), Some("кошк"));
        assert_eq!(dict.normal_form(wf.paradigm, wf.form, "кошке").as_deref(), Some("кошка"));
        assert_eq!(dict.tag_of(wf.paradigm, wf.form).as_str(), "NOUN,anim,femn,sing,datv");
        assert_eq!(dict.stem(wf.paradigm, wf.form, "собаке"), None);
    }

    #[test]
    fn test_paradigm_info_starts_with_normal_form() {
        let dict = tiny();
        let wf = dict.lookup_exact("кошки")[0];
        let info = dict.paradigm_info(wf.paradigm);
        assert_eq!(info.len(), 3);
        assert_eq!(info[0].2, "а");
        assert_eq!(info[0].1.case().map(|g| g.as_str()), Some("nomn"));
    }

    #[test]
    fn test_word_is_known_strict_and_fuzzy() {
        let dict = tiny();
        let subs = CharSubstitutes::from_pairs([('е', 'ё')]);
        assert!(dict.word_is_known("ёж", None));
        assert!(!dict.word_is_known("еж", None));
        assert!(dict.word_is_known("еж", Some(&subs)));
        assert_eq!(dict.lookup("еж", &subs)[0].0, "ёж");
    }

    #[test]
    fn test_iter_known_words_by_prefix() {
        let dict = tiny();
        let words: Vec<(String, String)> = dict
            .iter_known_words("кош")
            .map(|k| (k.word, k.normal_form))
            .collect();
        assert_eq!(
            words,
            vec![
                ("кошка".to_string(), "кошка".to_string()),
                ("кошке".to_string(), "кошка".to_string()),
                ("кошки".to_string(), "кошка".to_string()),
            ]
        );
        assert_eq!(dict.iter_known_words("").count(), 5);
        assert_eq!(dict.iter_known_words("собак").count(), 0);
    }
}
