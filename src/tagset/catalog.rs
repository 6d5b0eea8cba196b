// File: src/tagset/catalog.rs
use crate::error::UnknownGrammemeError;
use crate::tagset::opencorpora;
use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

/// Grammatical categories a grammeme can belong to. Grammemes outside these
/// (style markers, lexical classes) are auxiliary and have no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    PartOfSpeech,
    Animacy,
    Aspect,
    Transitivity,
    Gender,
    Number,
    Case,
    Person,
    Tense,
    Mood,
    Involvement,
    Voice,
}

impl Category {
    pub const COUNT: usize = 12;

    /// Canonical order used when rendering tags.
    pub const ALL: [Category; Category::COUNT] = [
        Category::PartOfSpeech,
        Category::Animacy,
        Category::Aspect,
        Category::Transitivity,
        Category::Gender,
        Category::Number,
        Category::Case,
        Category::Person,
        Category::Tense,
        Category::Mood,
        Category::Involvement,
        Category::Voice,
    ];

    /// Name of the hierarchy root this category hangs from.
    pub fn root(self) -> &'static str {
        match self {
            Category::PartOfSpeech => "POST",
            Category::Animacy => "ANim",
            Category::Aspect => "ASpc",
            Category::Transitivity => "TRns",
            Category::Gender => "GNdr",
            Category::Number => "NMbr",
            Category::Case => "CAse",
            Category::Person => "PErs",
            Category::Tense => "TEns",
            Category::Mood => "MOod",
            Category::Involvement => "INvl",
            Category::Voice => "VOic",
        }
    }

    pub fn from_root(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.root() == name)
    }

    pub fn rank(self) -> usize {
        self as usize
    }
}

/// An interned grammeme name. Only obtainable through a [`GrammemeCatalog`],
/// so holding one means the name was validated.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Grammeme(Arc<str>);

impl Grammeme {
    fn new(name: &str) -> Self {
        Grammeme(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Grammeme {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Grammeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Grammeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

pub type GrammemeSet = BTreeSet<Grammeme>;

/// A row of the grammeme table: (name, parent, alias, description).
pub type GrammemeRecord = (String, String, String, String);

// Hand-authored incompatibilities on top of the sibling rule.
const EXTRA_INCOMPATIBLE: &[(&str, &[&str])] = &[("plur", &["GNdr"])];

// Rare cases and the common case each one folds into.
const RARE_CASES: &[(&str, &str)] = &[
    ("gen2", "gent"),
    ("acc2", "accs"),
    ("loc2", "loct"),
    ("voct", "nomn"),
];

#[derive(Debug, Clone)]
struct Entry {
    parent: Option<Grammeme>,
    alias: String,
    description: String,
    index: usize,
    category: Option<Category>,
}

/// Every grammeme a dictionary knows, with its hierarchy and the
/// compatibility rules derived from it.
///
/// Built once when a dictionary is loaded. Synthetic grammemes can be added
/// with [`GrammemeCatalog::register`] during setup; afterwards the catalog is
/// shared read-only.
#[derive(Debug, Clone)]
pub struct GrammemeCatalog {
    order: Vec<Grammeme>,
    entries: HashMap<Grammeme, Entry>,
    incompatible: HashMap<Grammeme, GrammemeSet>,
}

impl GrammemeCatalog {
    pub fn from_records(records: &[GrammemeRecord]) -> Self {
        let mut catalog = GrammemeCatalog {
            order: Vec::with_capacity(records.len()),
            entries: HashMap::with_capacity(records.len()),
            incompatible: HashMap::new(),
        };
        for (name, parent, alias, description) in records {
            catalog.insert(name, parent, alias, description);
        }
        catalog.rebuild();
        catalog
    }

    /// The stock OpenCorpora hierarchy.
    pub fn opencorpora() -> Self {
        let records: Vec<GrammemeRecord> = opencorpora::GRAMMEMES
            .iter()
            .map(|(n, p, a, d)| (n.to_string(), p.to_string(), a.to_string(), d.to_string()))
            .collect();
        Self::from_records(&records)
    }

    /// Adds a grammeme unless it is already known. Returns the interned value
    /// either way.
    pub fn register(&mut self, name: &str, parent: &str, alias: &str, description: &str) -> Grammeme {
        if let Some((existing, _)) = self.entries.get_key_value(name) {
            return existing.clone();
        }
        let grammeme = self.insert(name, parent, alias, description);
        self.rebuild();
        grammeme
    }

    fn insert(&mut self, name: &str, parent: &str, alias: &str, description: &str) -> Grammeme {
        let grammeme = Grammeme::new(name);
        let parent = if parent.is_empty() {
            None
        } else {
            Some(
                self.entries
                    .get_key_value(parent)
                    .map(|(g, _)| g.clone())
                    .unwrap_or_else(|| Grammeme::new(parent)),
            )
        };
        let entry = Entry {
            parent,
            alias: alias.to_string(),
            description: description.to_string(),
            index: self.order.len(),
            category: None,
        };
        self.order.push(grammeme.clone());
        self.entries.insert(grammeme.clone(), entry);
        grammeme
    }

    // Recomputes categories and the incompatibility table.
    fn rebuild(&mut self) {
        let categories: Vec<(Grammeme, Option<Category>)> = self
            .order
            .iter()
            .map(|g| (g.clone(), self.resolve_category(g)))
            .collect();
        for (g, category) in categories {
            if let Some(entry) = self.entries.get_mut(&g) {
                entry.category = category;
            }
        }

        let mut children: HashMap<&str, GrammemeSet> = HashMap::new();
        for g in &self.order {
            let Some(parent) = self.entries[g].parent.as_ref() else {
                continue;
            };
            children.entry(parent.as_str()).or_default().insert(g.clone());
            if let Some(grandparent) = self.entries.get(parent.as_str()).and_then(|e| e.parent.as_ref()) {
                children.entry(grandparent.as_str()).or_default().insert(g.clone());
            }
        }

        let mut incompatible = HashMap::with_capacity(self.order.len());
        for g in &self.order {
            let mut set = GrammemeSet::new();
            if let Some(parent) = self.entries[g].parent.as_ref() {
                if let Some(siblings) = children.get(parent.as_str()) {
                    set.extend(siblings.iter().cloned());
                }
            }
            if let Some((_, extra)) = EXTRA_INCOMPATIBLE.iter().find(|(name, _)| *name == g.as_str()) {
                for other in extra.iter() {
                    if let Some((known, _)) = self.entries.get_key_value(*other) {
                        set.insert(known.clone());
                    }
                    if let Some(nested) = children.get(other) {
                        set.extend(nested.iter().cloned());
                    }
                }
            }
            set.remove(g);
            incompatible.insert(g.clone(), set);
        }
        self.incompatible = incompatible;
    }

    fn resolve_category(&self, g: &Grammeme) -> Option<Category> {
        let parent = self.entries.get(g.as_str())?.parent.as_ref()?;
        if let Some(category) = Category::from_root(parent.as_str()) {
            return Some(category);
        }
        // gen2 -> gent -> CAse; intg -> NUMB -> POST stays auxiliary
        let grandparent = self.entries.get(parent.as_str())?.parent.as_ref()?;
        match Category::from_root(grandparent.as_str()) {
            Some(Category::PartOfSpeech) | None => None,
            Some(category) => Some(category),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Validates a raw grammeme name.
    pub fn grammeme(&self, name: &str) -> Result<Grammeme, UnknownGrammemeError> {
        self.entries
            .get_key_value(name)
            .map(|(g, _)| g.clone())
            .ok_or_else(|| UnknownGrammemeError {
                grammeme: name.to_string(),
            })
    }

    pub fn grammemes<I, S>(&self, names: I) -> Result<GrammemeSet, UnknownGrammemeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().map(|n| self.grammeme(n.as_ref())).collect()
    }

    pub fn category(&self, g: &Grammeme) -> Option<Category> {
        self.entries.get(g.as_str()).and_then(|e| e.category)
    }

    /// Position of the grammeme in the dictionary's grammeme table.
    pub fn index(&self, g: &Grammeme) -> usize {
        self.entries.get(g.as_str()).map_or(usize::MAX, |e| e.index)
    }

    pub fn parent(&self, g: &Grammeme) -> Option<&Grammeme> {
        self.entries.get(g.as_str()).and_then(|e| e.parent.as_ref())
    }

    pub fn alias(&self, g: &Grammeme) -> Option<&str> {
        self.entries.get(g.as_str()).map(|e| e.alias.as_str())
    }

    pub fn description(&self, g: &Grammeme) -> Option<&str> {
        self.entries.get(g.as_str()).map(|e| e.description.as_str())
    }

    /// Grammemes that cannot co-occur with `g`.
    pub fn incompatible(&self, g: &Grammeme) -> Option<&GrammemeSet> {
        self.incompatible.get(g.as_str())
    }

    /// `(tag ∪ required)` minus everything incompatible with a required grammeme.
    pub fn updated_grammemes(&self, current: &GrammemeSet, required: &GrammemeSet) -> GrammemeSet {
        let mut result: GrammemeSet = current.union(required).cloned().collect();
        for g in required {
            if let Some(incompatible) = self.incompatible.get(g.as_str()) {
                result.retain(|x| !incompatible.contains(x));
            }
        }
        result
    }

    /// Replaces rare cases (gen2, loc2, ...) with their common counterparts.
    pub fn fix_rare_cases(&self, grammemes: &GrammemeSet) -> GrammemeSet {
        grammemes
            .iter()
            .map(|g| {
                RARE_CASES
                    .iter()
                    .find(|(rare, _)| *rare == g.as_str())
                    .and_then(|(_, common)| self.grammeme(common).ok())
                    .unwrap_or_else(|| g.clone())
            })
            .collect()
    }

    /// The table in load order, ready to be written back to disk.
    pub fn records(&self) -> Vec<GrammemeRecord> {
        self.order
            .iter()
            .map(|g| {
                let e = &self.entries[g];
                (
                    g.to_string(),
                    e.parent.as_ref().map(|p| p.to_string()).unwrap_or_default(),
                    e.alias.clone(),
                    e.description.clone(),
                )
            })
            .collect()
    }
}
