// src/core/types.rs
use crate::tagset::Tag;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Index of a paradigm in the paradigm table.
pub type ParadigmId = u32;

/// Position of a form inside its paradigm. 0 is the normal form.
pub type FormIndex = u16;

/// A word-index value: the word is form `form` of paradigm `paradigm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordForm {
    pub paradigm: ParadigmId,
    pub form: FormIndex,
}

/// A prediction-index value: `count` dictionary words with this ending are
/// form `form` of paradigm `paradigm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingStat {
    pub count: u32,
    pub paradigm: ParadigmId,
    pub form: FormIndex,
}

/// One step in the derivation of a parse.
///
/// A parse's method stack lists these bottom-up: the first entry is where the
/// analysis started (usually a dictionary hit), every later entry records a
/// transformation applied on top of it. Lexeme and normal-form reconstruction
/// unwind the stack from the top.
#[derive(Debug, Clone, PartialEq)]
pub enum Provenance {
    /// Exact (or substituted-letter) dictionary hit.
    Dictionary { word: String, paradigm: ParadigmId, form: FormIndex },
    /// Single-letter abbreviated first name; `tag_index` selects gender and case.
    FirstNameInitial { tag_index: usize },
    /// Single-letter abbreviated patronymic.
    PatronymicInitial { tag_index: usize },
    Number { word: String },
    Punctuation { word: String },
    RomanNumber { word: String },
    Latin { word: String },
    /// A known derivational prefix was stripped before analysis.
    KnownPrefix { prefix: String },
    /// An arbitrary leading chunk was stripped before a dictionary lookup.
    UnknownPrefix { prefix: String },
    /// Guessed by analogy with dictionary words sharing `ending`.
    KnownSuffix { ending: String },
    /// A trailing particle ("-то", "-ка") was stripped and re-attached.
    HyphenParticle { particle: String },
    /// "по-" adverb built from an adjective.
    HyphenAdverb { word: String },
    /// Compound whose left part never inflects: "интернет-магазина".
    /// Sits on top of the right part's own stack.
    HyphenFixedLeft { left: String },
    /// Compound whose parts inflect together: "команд-участниц". Always the
    /// only entry of its stack.
    HyphenVariableBoth { left: Box<Parse>, right: Box<Parse> },
    /// Nothing recognised the word.
    Unknown { word: String },
}

pub type MethodStack = Vec<Provenance>;

/// One reading of a word: its tag, its normal form and how it was obtained.
///
/// Parses are plain values. Operations that need the dictionary (lexeme,
/// normalisation, inflection) live on the analyzer and read the method stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Parse {
    pub(crate) word: String,
    pub(crate) tag: Tag,
    pub(crate) normal_form: String,
    pub(crate) score: f64,
    pub(crate) methods: MethodStack,
}

impl Parse {
    pub fn new(word: String, tag: Tag, normal_form: String, score: f64, methods: MethodStack) -> Self {
        Self { word, tag, normal_form, score, methods }
    }

    /// The word as found in the dictionary (lowercased, letters substituted).
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn normal_form(&self) -> &str {
        &self.normal_form
    }

    /// Heuristic confidence in (0, 1], or P(tag|word) when re-ranked.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn methods(&self) -> &[Provenance] {
        &self.methods
    }

    /// True when the reading came straight from the dictionary.
    pub fn is_known(&self) -> bool {
        matches!(self.methods.as_slice(), [Provenance::Dictionary { .. }])
    }

    pub(crate) fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// Same parse with the top method stack entry removed.
    pub(crate) fn popped(&self) -> Parse {
        let mut inner = self.clone();
        inner.methods.pop();
        inner
    }

    pub(crate) fn pushed(mut self, method: Provenance) -> Parse {
        self.methods.push(method);
        self
    }
}

/// Deduplication key for one `parse` call: (word, tag, normal form).
#[derive(Debug, Default)]
pub struct SeenParses(HashSet<(String, Tag, String)>);

impl SeenParses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `parse` onto `result` unless an equivalent one was already seen.
    pub fn add(&mut self, parse: Parse, result: &mut Vec<Parse>) {
        let key = (parse.word.clone(), parse.tag.clone(), parse.normal_form.clone());
        if self.0.insert(key) {
            result.push(parse);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Deduplication for one `tag` call.
#[derive(Debug, Default)]
pub struct SeenTags(HashSet<Tag>);

impl SeenTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tag: Tag, result: &mut Vec<Tag>) {
        if self.0.insert(tag.clone()) {
            result.push(tag);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
