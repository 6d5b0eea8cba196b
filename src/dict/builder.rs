// File: src/dict/builder.rs
//
// Assembles a dictionary from whole lexemes. Handy for fixtures and small
// custom vocabularies; large corpora are compiled offline.

use crate::core::trie::Trie;
use crate::core::types::{EndingStat, FormIndex, ParadigmId, WordForm};
use crate::dict::{Dictionary, DictionaryTables, Meta, Paradigm, PredictionOptions};
use crate::error::{MorphError, Result};
use crate::lang;
use crate::tagset::{GrammemeCatalog, Tag};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;
use tracing::debug;

pub struct DictionaryBuilder {
    language: String,
    source: String,
    catalog: GrammemeCatalog,
    paradigm_prefixes: Vec<String>,
    options: PredictionOptions,
    lexemes: Vec<Vec<(String, String)>>,
}

// Position of `value` in `table`, appending it if new.
fn intern<K, I>(value: K, ids: &mut HashMap<K, I>, table: &mut Vec<K>, what: &str) -> Result<I>
where
    K: Clone + Eq + Hash,
    I: Copy + TryFrom<usize>,
{
    if let Some(&id) = ids.get(&value) {
        return Ok(id);
    }
    let id = I::try_from(table.len()).map_err(|_| MorphError::InvalidLexeme {
        reason: format!("too many distinct {what}"),
    })?;
    ids.insert(value.clone(), id);
    table.push(value);
    Ok(id)
}

fn longest_common_substring(forms: &[String]) -> String {
    let Some(shortest) = forms.iter().min_by_key(|f| f.chars().count()) else {
        return String::new();
    };
    let chars: Vec<char> = shortest.chars().collect();
    for len in (1..=chars.len()).rev() {
        for start in 0..=chars.len() - len {
            let candidate: String = chars[start..start + len].iter().collect();
            if forms.iter().all(|f| f.contains(&candidate)) {
                return candidate;
            }
        }
    }
    String::new()
}

fn common_prefix(forms: &[String]) -> String {
    let Some(first) = forms.first() else {
        return String::new();
    };
    let mut prefix: Vec<char> = first.chars().collect();
    for form in &forms[1..] {
        let shared = prefix.iter().zip(form.chars()).take_while(|(a, b)| **a == *b).count();
        prefix.truncate(shared);
    }
    prefix.into_iter().collect()
}

/// Splits a lexeme into a stem and one paradigm prefix per form.
///
/// The stem is the longest substring shared by all forms when that leaves
/// only known paradigm prefixes in front of it ("наибольший" and
/// "больший"); otherwise it is the common prefix and no form has a prefix.
fn split_lexeme(forms: &[String], paradigm_prefixes: &[String]) -> (String, Vec<String>) {
    let stem = longest_common_substring(forms);
    let prefixes: Vec<String> = forms
        .iter()
        .map(|f| f.find(&stem).map(|at| f[..at].to_string()).unwrap_or_default())
        .collect();
    if prefixes.iter().all(|p| paradigm_prefixes.contains(p)) {
        return (stem, prefixes);
    }
    (common_prefix(forms), vec![String::new(); forms.len()])
}

impl DictionaryBuilder {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            source: "builder".to_string(),
            catalog: GrammemeCatalog::opencorpora(),
            paradigm_prefixes: lang::paradigm_prefixes(language),
            options: PredictionOptions::default(),
            lexemes: Vec::new(),
        }
    }

    pub fn catalog(&mut self, catalog: GrammemeCatalog) -> &mut Self {
        self.catalog = catalog;
        self
    }

    pub fn source(&mut self, source: &str) -> &mut Self {
        self.source = source.to_string();
        self
    }

    pub fn prediction_options(&mut self, options: PredictionOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// Adds one lexeme as (form, tag) pairs, normal form first.
    pub fn add_lexeme<W: AsRef<str>, T: AsRef<str>>(&mut self, forms: &[(W, T)]) -> &mut Self {
        self.lexemes.push(
            forms
                .iter()
                .map(|(w, t)| (w.as_ref().to_lowercase(), t.as_ref().to_string()))
                .collect(),
        );
        self
    }

    pub fn build(&self) -> Result<Dictionary> {
        let mut gramtab: Vec<Tag> = Vec::new();
        let mut tag_ids: HashMap<Tag, u16> = HashMap::new();
        let mut suffixes: Vec<String> = Vec::new();
        let mut suffix_ids: HashMap<String, u16> = HashMap::new();
        let mut paradigms: Vec<Paradigm> = Vec::new();
        let mut paradigm_ids: HashMap<Paradigm, ParadigmId> = HashMap::new();
        let mut popularity: Vec<u32> = Vec::new();

        let mut words = Trie::new();
        let mut word_entries: Vec<(String, WordForm)> = Vec::new();
        let mut seen_entries: HashSet<(String, WordForm)> = HashSet::new();

        for (n, lexeme) in self.lexemes.iter().enumerate() {
            if lexeme.is_empty() {
                return Err(MorphError::InvalidLexeme {
                    reason: format!("lexeme #{n} has no forms"),
                });
            }
            if lexeme.len() > FormIndex::MAX as usize {
                return Err(MorphError::InvalidLexeme {
                    reason: format!("lexeme #{n} has too many forms"),
                });
            }
            let forms: Vec<String> = lexeme.iter().map(|(w, _)| w.clone()).collect();
            let (stem, prefixes) = split_lexeme(&forms, &self.paradigm_prefixes);

            let mut suffix_col = Vec::with_capacity(forms.len());
            let mut tag_col = Vec::with_capacity(forms.len());
            let mut prefix_col = Vec::with_capacity(forms.len());
            for ((form, tag_text), prefix) in lexeme.iter().zip(&prefixes) {
                let tag = Tag::parse(&self.catalog, tag_text)?;
                tag_col.push(intern(tag, &mut tag_ids, &mut gramtab, "tags")?);
                let suffix = form[prefix.len() + stem.len()..].to_string();
                suffix_col.push(intern(suffix, &mut suffix_ids, &mut suffixes, "suffixes")?);
                let prefix_id = self
                    .paradigm_prefixes
                    .iter()
                    .position(|p| p == prefix)
                    .unwrap_or_default();
                prefix_col.push(prefix_id as u16);
            }

            let paradigm = Paradigm::from_columns(&suffix_col, &tag_col, &prefix_col);
            let paradigm_id = intern(paradigm, &mut paradigm_ids, &mut paradigms, "paradigms")?;
            if popularity.len() < paradigms.len() {
                popularity.push(0);
            }
            popularity[paradigm_id as usize] += 1;

            for (form_index, form) in forms.iter().enumerate() {
                let wf = WordForm {
                    paradigm: paradigm_id,
                    form: form_index as FormIndex,
                };
                if seen_entries.insert((form.clone(), wf)) {
                    words.insert(form, wf);
                    word_entries.push((form.clone(), wf));
                }
            }
        }

        let prediction = self.prediction_indices(&word_entries, &paradigms, &suffixes, &popularity);
        debug!(
            paradigms = paradigms.len(),
            suffixes = suffixes.len(),
            tags = gramtab.len(),
            "lexemes compiled"
        );

        let mut meta = Meta::new(&self.language, &self.source);
        meta.paradigm_count = paradigms.len();
        meta.word_count = word_entries.len();
        meta.tag_count = gramtab.len();
        meta.prediction_options = self.options;

        Dictionary::from_tables(DictionaryTables {
            meta,
            grammemes: self.catalog.records(),
            gramtab: gramtab.iter().map(|t| t.to_string()).collect(),
            suffixes,
            paradigm_prefixes: self.paradigm_prefixes.clone(),
            paradigms,
            words,
            prediction,
        })
    }

    // Counts every word ending per paradigm-prefix class. Only paradigms
    // shared by enough lexemes contribute.
    fn prediction_indices(
        &self,
        word_entries: &[(String, WordForm)],
        paradigms: &[Paradigm],
        suffixes: &[String],
        popularity: &[u32],
    ) -> Vec<Trie<EndingStat>> {
        let mut ending_counts: HashMap<String, u32> = HashMap::new();
        let mut by_prefix: Vec<BTreeMap<String, BTreeMap<(ParadigmId, FormIndex), u32>>> =
            vec![BTreeMap::new(); self.paradigm_prefixes.len()];

        for (word, wf) in word_entries {
            if popularity[wf.paradigm as usize] < self.options.min_paradigm_popularity {
                continue;
            }
            let paradigm = &paradigms[wf.paradigm as usize];
            let suffix = &suffixes[paradigm.suffix_id(wf.form as usize) as usize];
            let prefix_id = paradigm.prefix_id(wf.form as usize) as usize;
            let chars: Vec<char> = word.chars().collect();
            let shortest = suffix.chars().count().max(1);
            let longest = self.options.max_suffix_length.min(chars.len());
            for len in shortest..=longest {
                let ending: String = chars[chars.len() - len..].iter().collect();
                *ending_counts.entry(ending.clone()).or_default() += 1;
                *by_prefix[prefix_id]
                    .entry(ending)
                    .or_default()
                    .entry((wf.paradigm, wf.form))
                    .or_default() += 1;
            }
        }

        by_prefix
            .into_iter()
            .map(|endings| {
                let mut trie = Trie::new();
                for (ending, hits) in endings {
                    if ending_counts.get(&ending).copied().unwrap_or(0) < self.options.min_ending_freq {
                        continue;
                    }
                    let mut stats: Vec<EndingStat> = hits
                        .into_iter()
                        .map(|((paradigm, form), count)| EndingStat { count, paradigm, form })
                        .collect();
                    stats.sort_by(|a, b| b.count.cmp(&a.count));
                    for stat in stats {
                        trie.insert(&ending, stat);
                    }
                }
                trie
            })
            .collect()
    }
}
