// File: src/tagset/tag.rs
use crate::error::{MorphError, Result};
use crate::tagset::catalog::{Category, Grammeme, GrammemeCatalog, GrammemeSet};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

// Tags carrying any of these are never produced by guessing units.
const NON_PRODUCTIVE: &[&str] = &["NUMR", "NPRO", "PRED", "PREP", "CONJ", "PRCL", "INTJ", "Apro"];

const UNKNOWN: &str = "UNKN";

struct TagData {
    /// Canonical order: categorised grammemes by category, then the rest by
    /// table position.
    grammemes: Vec<Grammeme>,
    slots: [Option<Grammeme>; Category::COUNT],
    text: String,
}

/// An immutable set of grammemes describing one word form.
///
/// Cheap to clone. Equality, ordering and hashing look only at the grammeme
/// set, so `"sing,NOUN"` and `"NOUN,sing"` parse to the same tag.
#[derive(Clone)]
pub struct Tag(Arc<TagData>);

impl Tag {
    /// Parses a comma/space separated tag string such as `"NOUN,anim,femn sing,nomn"`.
    pub fn parse(catalog: &GrammemeCatalog, text: &str) -> Result<Tag> {
        let mut set = GrammemeSet::new();
        for token in text.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            set.insert(catalog.grammeme(token)?);
        }
        Tag::from_grammemes(catalog, set).map_err(|err| match err {
            MorphError::InvalidTag { reason, .. } => MorphError::InvalidTag {
                tag: text.to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Builds a tag from already validated grammemes. Fails with
    /// [`MorphError::InvalidTag`] when two grammemes share a category or the
    /// part of speech is missing.
    pub fn from_grammemes(catalog: &GrammemeCatalog, set: GrammemeSet) -> Result<Tag> {
        let invalid = |set: &GrammemeSet, reason: String| MorphError::InvalidTag {
            tag: set.iter().map(Grammeme::as_str).collect::<Vec<_>>().join(","),
            reason,
        };
        let mut slots: [Option<Grammeme>; Category::COUNT] = Default::default();
        for g in &set {
            if let Some(category) = catalog.category(g) {
                let slot = &mut slots[category.rank()];
                if let Some(previous) = slot {
                    return Err(invalid(&set, format!("both {previous} and {g} are {category:?}")));
                }
                *slot = Some(g.clone());
            }
        }
        if slots[Category::PartOfSpeech.rank()].is_none() {
            return Err(invalid(&set, "no part of speech".to_string()));
        }

        let mut grammemes: Vec<Grammeme> = set.into_iter().collect();
        grammemes.sort_by_key(|g| {
            let rank = catalog.category(g).map_or(Category::COUNT, Category::rank);
            (rank, catalog.index(g))
        });
        let text = grammemes
            .iter()
            .map(Grammeme::as_str)
            .collect::<Vec<_>>()
            .join(",");

        Ok(Tag(Arc::new(TagData {
            grammemes,
            slots,
            text,
        })))
    }

    pub fn grammemes(&self) -> &[Grammeme] {
        &self.0.grammemes
    }

    pub fn grammeme_set(&self) -> GrammemeSet {
        self.0.grammemes.iter().cloned().collect()
    }

    pub fn contains(&self, g: &Grammeme) -> bool {
        self.0.grammemes.contains(g)
    }

    pub fn contains_all<'a, I>(&self, grammemes: I) -> bool
    where
        I: IntoIterator<Item = &'a Grammeme>,
    {
        grammemes.into_iter().all(|g| self.contains(g))
    }

    /// Membership test by raw name. Unknown names are an error, not `false`.
    pub fn has(&self, catalog: &GrammemeCatalog, name: &str) -> Result<bool> {
        Ok(self.contains(&catalog.grammeme(name)?))
    }

    /// The grammeme this tag carries for `category`, if any.
    pub fn get(&self, category: Category) -> Option<&Grammeme> {
        self.0.slots[category.rank()].as_ref()
    }

    pub fn pos(&self) -> Option<&Grammeme> {
        self.get(Category::PartOfSpeech)
    }

    pub fn case(&self) -> Option<&Grammeme> {
        self.get(Category::Case)
    }

    pub fn number(&self) -> Option<&Grammeme> {
        self.get(Category::Number)
    }

    pub fn gender(&self) -> Option<&Grammeme> {
        self.get(Category::Gender)
    }

    pub fn animacy(&self) -> Option<&Grammeme> {
        self.get(Category::Animacy)
    }

    pub fn person(&self) -> Option<&Grammeme> {
        self.get(Category::Person)
    }

    pub fn tense(&self) -> Option<&Grammeme> {
        self.get(Category::Tense)
    }

    /// False for closed classes (pronouns, prepositions, particles, ...).
    pub fn is_productive(&self) -> bool {
        !self
            .0
            .grammemes
            .iter()
            .any(|g| NON_PRODUCTIVE.contains(&g.as_str()))
    }

    pub fn is_unknown(&self) -> bool {
        self.0.grammemes.iter().any(|g| g.as_str() == UNKNOWN)
    }

    pub fn as_str(&self) -> &str {
        &self.0.text
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.grammemes == other.0.grammemes
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.grammemes.hash(state);
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.grammemes.cmp(&other.0.grammemes)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.text)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({:?})", self.0.text)
    }
}
