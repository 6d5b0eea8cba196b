// File: src/units/shape.rs
//
// Units that classify a token by its shape alone: numbers, punctuation,
// Roman numerals, Latin-script words.

use crate::core::engine::MorphAnalyzer;
use crate::core::types::{Parse, Provenance, SeenParses};
use crate::error::Result;
use crate::tagset::{GrammemeCatalog, Tag};
use crate::units::{AnalyzerUnit, UnitKind};
use regex::Regex;
use std::sync::LazyLock;

static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());

static REAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?(?:[0-9]+[.,][0-9]*|[.,][0-9]+)$").unwrap());

static PUNCTUATION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{P}+$").unwrap());

static ROMAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^M*(?:C[MD]|D?C{0,3})(?:X[CL]|L?X{0,3})(?:I[VX]|V?I{0,3})$").unwrap()
});

static LATIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{Latin}0-9'-]+$").unwrap());

enum Shape {
    Number { integer: Tag, real: Tag },
    Punctuation(Tag),
    RomanNumber(Tag),
    Latin(Tag),
}

pub struct ShapeUnit {
    shape: Shape,
    score: f64,
}

impl ShapeUnit {
    /// `NUMB,intg` for digit strings, `NUMB,real` for decimals with `.` or `,`.
    pub fn number(catalog: &GrammemeCatalog, score: f64) -> Result<Self> {
        Ok(Self {
            shape: Shape::Number {
                integer: Tag::parse(catalog, "NUMB,intg")?,
                real: Tag::parse(catalog, "NUMB,real")?,
            },
            score,
        })
    }

    pub fn punctuation(catalog: &GrammemeCatalog, score: f64) -> Result<Self> {
        Ok(Self {
            shape: Shape::Punctuation(Tag::parse(catalog, "PNCT")?),
            score,
        })
    }

    pub fn roman_number(catalog: &GrammemeCatalog, score: f64) -> Result<Self> {
        Ok(Self {
            shape: Shape::RomanNumber(Tag::parse(catalog, "ROMN")?),
            score,
        })
    }

    pub fn latin(catalog: &GrammemeCatalog, score: f64) -> Result<Self> {
        Ok(Self {
            shape: Shape::Latin(Tag::parse(catalog, "LATN")?),
            score,
        })
    }

    fn classify(&self, word: &str) -> Option<&Tag> {
        match &self.shape {
            Shape::Number { integer, real } => {
                if INTEGER_RE.is_match(word) {
                    Some(integer)
                } else if REAL_RE.is_match(word) {
                    Some(real)
                } else {
                    None
                }
            }
            Shape::Punctuation(tag) => PUNCTUATION_RE.is_match(word).then_some(tag),
            Shape::RomanNumber(tag) => (!word.is_empty() && ROMAN_RE.is_match(word)).then_some(tag),
            Shape::Latin(tag) => {
                let has_letter = word.chars().any(|c| c.is_alphabetic());
                (has_letter && LATIN_RE.is_match(word)).then_some(tag)
            }
        }
    }

    fn provenance(&self, word: &str) -> Provenance {
        let word = word.to_string();
        match self.shape {
            Shape::Number { .. } => Provenance::Number { word },
            Shape::Punctuation(_) => Provenance::Punctuation { word },
            Shape::RomanNumber(_) => Provenance::RomanNumber { word },
            Shape::Latin(_) => Provenance::Latin { word },
        }
    }
}

impl AnalyzerUnit for ShapeUnit {
    fn kind(&self) -> UnitKind {
        match self.shape {
            Shape::Number { .. } => UnitKind::Number,
            Shape::Punctuation(_) => UnitKind::Punctuation,
            Shape::RomanNumber(_) => UnitKind::RomanNumber,
            Shape::Latin(_) => UnitKind::Latin,
        }
    }

    fn parse(&self, _morph: &MorphAnalyzer, word: &str, word_lower: &str, seen: &mut SeenParses) -> Vec<Parse> {
        let mut result = Vec::new();
        if let Some(tag) = self.classify(word) {
            let parse = Parse::new(
                word_lower.to_string(),
                tag.clone(),
                word_lower.to_string(),
                self.score,
                vec![self.provenance(word)],
            );
            seen.add(parse, &mut result);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(unit: &ShapeUnit, word: &str) -> Option<String> {
        unit.classify(word).map(|t| t.to_string())
    }

    #[test]
    fn test_numbers() {
        let unit = ShapeUnit::number(&GrammemeCatalog::opencorpora(), 0.9).unwrap();
        assert_eq!(classify(&unit, "2024").as_deref(), Some("NUMB,intg"));
        assert_eq!(classify(&unit, "3,14").as_deref(), Some("NUMB,real"));
        assert_eq!(classify(&unit, "3.14").as_deref(), Some("NUMB,real"));
        assert_eq!(classify(&unit, "3.1.4"), None);
        assert_eq!(classify(&unit, "12а"), None);
        assert_eq!(classify(&unit, "-5").as_deref(), Some("NUMB,intg"));
        assert_eq!(classify(&unit, "+42").as_deref(), Some("NUMB,intg"));
        assert_eq!(classify(&unit, "-1.5").as_deref(), Some("NUMB,real"));
        assert_eq!(classify(&unit, "-"), None);
        assert_eq!(classify(&unit, "--5"), None);
        assert_eq!(classify(&unit, "5-"), None);
    }

    #[test]
    fn test_punctuation() {
        let unit = ShapeUnit::punctuation(&GrammemeCatalog::opencorpora(), 0.9).unwrap();
        assert!(classify(&unit, "...").is_some());
        assert!(classify(&unit, "«").is_some());
        assert!(classify(&unit, "!?").is_some());
        assert!(classify(&unit, "a.").is_none());
    }

    #[test]
    fn test_roman_numerals() {
        let unit = ShapeUnit::roman_number(&GrammemeCatalog::opencorpora(), 0.9).unwrap();
        for word in ["XIV", "mcmxc", "I", "iv"] {
            assert!(classify(&unit, word).is_some(), "{word}");
        }
        for word in ["IIII", "XIVX", "", "VX"] {
            assert!(classify(&unit, word).is_none(), "{word}");
        }
    }

    #[test]
    fn test_latin() {
        let unit = ShapeUnit::latin(&GrammemeCatalog::opencorpora(), 0.9).unwrap();
        assert!(classify(&unit, "Python").is_some());
        assert!(classify(&unit, "e-mail").is_some());
        assert!(classify(&unit, "don't").is_some());
        assert!(classify(&unit, "123").is_none());
        assert!(classify(&unit, "питон").is_none());
        assert!(classify(&unit, "pythonы").is_none());
    }
}
