// File: src/units/mod.rs
//
// Analyzer units. Each unit proposes readings for a word and knows how to
// rebuild lexemes and normal forms for the readings it produced.

pub mod dictionary;
pub mod hyphen;
pub mod initials;
pub mod prefix;
pub mod shape;
pub mod suffix;
pub mod unknown;

pub use dictionary::DictionaryUnit;
pub use hyphen::{HyphenAdverbUnit, HyphenParticleUnit, HyphenatedUnit};
pub use initials::InitialsUnit;
pub use prefix::{KnownPrefixUnit, UnknownPrefixUnit};
pub use shape::ShapeUnit;
pub use suffix::KnownSuffixUnit;
pub use unknown::UnknownUnit;

use crate::core::engine::MorphAnalyzer;
use crate::core::types::{Parse, Provenance, SeenParses, SeenTags};
use crate::tagset::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Dictionary,
    FirstNameInitial,
    PatronymicInitial,
    Number,
    Punctuation,
    RomanNumber,
    Latin,
    KnownPrefix,
    UnknownPrefix,
    KnownSuffix,
    HyphenParticle,
    HyphenAdverb,
    Hyphenated,
    Unknown,
}

impl Provenance {
    /// The unit that pushed this entry.
    pub fn unit_kind(&self) -> UnitKind {
        match self {
            Provenance::Dictionary { .. } => UnitKind::Dictionary,
            Provenance::FirstNameInitial { .. } => UnitKind::FirstNameInitial,
            Provenance::PatronymicInitial { .. } => UnitKind::PatronymicInitial,
            Provenance::Number { .. } => UnitKind::Number,
            Provenance::Punctuation { .. } => UnitKind::Punctuation,
            Provenance::RomanNumber { .. } => UnitKind::RomanNumber,
            Provenance::Latin { .. } => UnitKind::Latin,
            Provenance::KnownPrefix { .. } => UnitKind::KnownPrefix,
            Provenance::UnknownPrefix { .. } => UnitKind::UnknownPrefix,
            Provenance::KnownSuffix { .. } => UnitKind::KnownSuffix,
            Provenance::HyphenParticle { .. } => UnitKind::HyphenParticle,
            Provenance::HyphenAdverb { .. } => UnitKind::HyphenAdverb,
            Provenance::HyphenFixedLeft { .. } | Provenance::HyphenVariableBoth { .. } => {
                UnitKind::Hyphenated
            }
            Provenance::Unknown { .. } => UnitKind::Unknown,
        }
    }
}

/// One stage of the analysis pipeline.
///
/// `word` is the token as given, `word_lower` its lowercase form. Units add
/// their readings through `seen` so one call never returns the same
/// (word, tag, normal form) twice.
pub trait AnalyzerUnit: Send + Sync {
    fn kind(&self) -> UnitKind;

    fn parse(&self, morph: &MorphAnalyzer, word: &str, word_lower: &str, seen: &mut SeenParses) -> Vec<Parse>;

    fn tag(&self, morph: &MorphAnalyzer, word: &str, word_lower: &str, seen: &mut SeenTags) -> Vec<Tag> {
        let mut result = Vec::new();
        for parse in self.parse(morph, word, word_lower, &mut SeenParses::new()) {
            seen.add(parse.tag, &mut result);
        }
        result
    }

    /// Every form of the lexeme `parse` belongs to. The default treats the
    /// word as invariable.
    fn lexeme(&self, _morph: &MorphAnalyzer, parse: &Parse) -> Vec<Parse> {
        vec![parse.clone()]
    }

    fn normalized(&self, _morph: &MorphAnalyzer, parse: &Parse) -> Parse {
        parse.clone()
    }
}

/// Units run together. The pipeline stops after a group once anything
/// has been found.
pub struct UnitGroup {
    units: Vec<Box<dyn AnalyzerUnit>>,
}

impl UnitGroup {
    pub fn new(units: Vec<Box<dyn AnalyzerUnit>>) -> Self {
        Self { units }
    }

    pub fn single<U: AnalyzerUnit + 'static>(unit: U) -> Self {
        Self {
            units: vec![Box::new(unit)],
        }
    }

    pub fn units(&self) -> &[Box<dyn AnalyzerUnit>] {
        &self.units
    }
}

// Affix helpers for units that strip something off the word, delegate to
// the unit below them on the stack, then put it back.

pub(crate) fn strip_prefix(parse: &Parse, prefix: &str) -> Parse {
    let mut inner = parse.popped();
    inner.word = inner.word.strip_prefix(prefix).unwrap_or(&inner.word).to_string();
    inner.normal_form = inner
        .normal_form
        .strip_prefix(prefix)
        .unwrap_or(&inner.normal_form)
        .to_string();
    inner
}

pub(crate) fn add_prefix(mut parse: Parse, prefix: &str, method: Provenance) -> Parse {
    parse.word = format!("{prefix}{}", parse.word);
    parse.normal_form = format!("{prefix}{}", parse.normal_form);
    parse.pushed(method)
}

pub(crate) fn strip_suffix(parse: &Parse, suffix: &str) -> Parse {
    let mut inner = parse.popped();
    inner.word = inner.word.strip_suffix(suffix).unwrap_or(&inner.word).to_string();
    inner.normal_form = inner
        .normal_form
        .strip_suffix(suffix)
        .unwrap_or(&inner.normal_form)
        .to_string();
    inner
}

pub(crate) fn add_suffix(mut parse: Parse, suffix: &str, method: Provenance) -> Parse {
    parse.word.push_str(suffix);
    parse.normal_form.push_str(suffix);
    parse.pushed(method)
}
