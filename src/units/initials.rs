// File: src/units/initials.rs
use crate::core::engine::MorphAnalyzer;
use crate::core::types::{Parse, Provenance, SeenParses, SeenTags};
use crate::error::Result;
use crate::tagset::{GrammemeCatalog, Tag};
use crate::units::{AnalyzerUnit, UnitKind};
use std::ops::Range;

const GENDERS: [&str; 2] = ["masc", "femn"];
const CASES: [&str; 6] = ["nomn", "gent", "datv", "accs", "ablt", "loct"];

/// A single capital letter read as an abbreviated first name or patronymic
/// ("А." in "А. С. Пушкин").
///
/// Produces one reading per gender and case. A first-name initial has two
/// lexemes, one per gender; all twelve patronymic readings share one.
pub struct InitialsUnit {
    kind: UnitKind,
    letters: Vec<char>,
    tags: Vec<Tag>,
    score: f64,
}

impl InitialsUnit {
    pub fn first_name(catalog: &GrammemeCatalog, letters: &str, score: f64) -> Result<Self> {
        Self::new(UnitKind::FirstNameInitial, "Name", catalog, letters, score)
    }

    pub fn patronymic(catalog: &GrammemeCatalog, letters: &str, score: f64) -> Result<Self> {
        Self::new(UnitKind::PatronymicInitial, "Patr", catalog, letters, score)
    }

    fn new(kind: UnitKind, class: &str, catalog: &GrammemeCatalog, letters: &str, score: f64) -> Result<Self> {
        let mut tags = Vec::with_capacity(GENDERS.len() * CASES.len());
        for gender in GENDERS {
            for case in CASES {
                let text = format!("NOUN,anim,{gender},Sgtm,{class},Fixd,Abbr,Init sing,{case}");
                tags.push(Tag::parse(catalog, &text)?);
            }
        }
        Ok(Self {
            kind,
            letters: letters.chars().collect(),
            tags,
            score,
        })
    }

    fn matches(&self, word: &str) -> bool {
        let mut chars = word.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if self.letters.contains(&c))
    }

    fn provenance(&self, tag_index: usize) -> Provenance {
        match self.kind {
            UnitKind::PatronymicInitial => Provenance::PatronymicInitial { tag_index },
            _ => Provenance::FirstNameInitial { tag_index },
        }
    }

    fn tag_index(parse: &Parse) -> Option<usize> {
        match parse.methods().last()? {
            Provenance::FirstNameInitial { tag_index } | Provenance::PatronymicInitial { tag_index } => {
                Some(*tag_index)
            }
            _ => None,
        }
    }

    // Tag indices of the lexeme `tag_index` belongs to.
    fn lexeme_range(&self, tag_index: usize) -> Range<usize> {
        match self.kind {
            UnitKind::PatronymicInitial => 0..self.tags.len(),
            _ if tag_index < CASES.len() => 0..CASES.len(),
            _ => CASES.len()..self.tags.len(),
        }
    }

    fn reading(&self, parse: &Parse, tag_index: usize) -> Parse {
        Parse::new(
            parse.word().to_string(),
            self.tags[tag_index].clone(),
            parse.normal_form().to_string(),
            parse.score(),
            vec![self.provenance(tag_index)],
        )
    }
}

impl AnalyzerUnit for InitialsUnit {
    fn kind(&self) -> UnitKind {
        self.kind
    }

    // The letter must be capitalised in the input; "а" is not an initial.
    fn parse(&self, _morph: &MorphAnalyzer, word: &str, word_lower: &str, seen: &mut SeenParses) -> Vec<Parse> {
        let mut result = Vec::new();
        if !self.matches(word) {
            return result;
        }
        for (index, tag) in self.tags.iter().enumerate() {
            let parse = Parse::new(
                word_lower.to_string(),
                tag.clone(),
                word_lower.to_string(),
                self.score,
                vec![self.provenance(index)],
            );
            seen.add(parse, &mut result);
        }
        result
    }

    fn tag(&self, _morph: &MorphAnalyzer, word: &str, _word_lower: &str, seen: &mut SeenTags) -> Vec<Tag> {
        let mut result = Vec::new();
        if self.matches(word) {
            for tag in &self.tags {
                seen.add(tag.clone(), &mut result);
            }
        }
        result
    }

    fn lexeme(&self, _morph: &MorphAnalyzer, parse: &Parse) -> Vec<Parse> {
        let Some(index) = Self::tag_index(parse).filter(|i| *i < self.tags.len()) else {
            return vec![parse.clone()];
        };
        self.lexeme_range(index).map(|i| self.reading(parse, i)).collect()
    }

    fn normalized(&self, _morph: &MorphAnalyzer, parse: &Parse) -> Parse {
        let Some(index) = Self::tag_index(parse).filter(|i| *i < self.tags.len()) else {
            return parse.clone();
        };
        self.reading(parse, self.lexeme_range(index).start)
    }
}
