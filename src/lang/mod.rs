// File: src/lang/mod.rs
pub mod ru;

use crate::error::Result;
use crate::fuzzy::CharSubstitutes;
use crate::tagset::GrammemeCatalog;
use crate::units::{
    DictionaryUnit, HyphenatedUnit, KnownSuffixUnit, ShapeUnit, UnitGroup, UnknownUnit,
};
use tracing::warn;

// Grammemes the units rely on that a dictionary's own table may lack:
// (name, parent, alias, description).
const SYNTHETIC_GRAMMEMES: &[(&str, &str, &str, &str)] = &[
    ("LATN", "POST", "ЛАТ", "токен состоит из латинских букв"),
    ("PNCT", "POST", "ЗПР", "пунктуация"),
    ("NUMB", "POST", "ЧИСЛО", "число"),
    ("intg", "NUMB", "цел", "целое число"),
    ("real", "NUMB", "вещ", "вещественное число"),
    ("ROMN", "POST", "РИМ", "римское число"),
    ("UNKN", "POST", "НЕИЗВ", "токен не удалось разобрать"),
    ("Init", "", "иниц", "инициал"),
];

/// Adds the shape, fallback and initial grammemes. Safe to call twice.
pub fn register_synthetic_grammemes(catalog: &mut GrammemeCatalog) {
    for (name, parent, alias, description) in SYNTHETIC_GRAMMEMES {
        catalog.register(name, parent, alias, description);
    }
}

pub fn paradigm_prefixes(language: &str) -> Vec<String> {
    let prefixes: &[&str] = match language {
        ru::CODE => ru::PARADIGM_PREFIXES,
        _ => &[""],
    };
    prefixes.iter().map(|p| p.to_string()).collect()
}

pub fn default_substitutes(language: &str) -> CharSubstitutes {
    match language {
        ru::CODE => CharSubstitutes::from_pairs(ru::CHAR_SUBSTITUTES.iter().copied()),
        _ => CharSubstitutes::none(),
    }
}

/// The unit pipeline for `language`. Languages without their own tables get
/// a pipeline of language-neutral units.
pub fn default_pipeline(language: &str, catalog: &GrammemeCatalog) -> Result<Vec<UnitGroup>> {
    match language {
        ru::CODE => ru::pipeline(catalog),
        other => {
            warn!(language = other, "no language tables, using neutral units only");
            neutral_pipeline(catalog)
        }
    }
}

fn neutral_pipeline(catalog: &GrammemeCatalog) -> Result<Vec<UnitGroup>> {
    Ok(vec![
        UnitGroup::single(DictionaryUnit::new()),
        UnitGroup::single(ShapeUnit::number(catalog, 0.9)?),
        UnitGroup::single(ShapeUnit::punctuation(catalog, 0.9)?),
        UnitGroup::new(vec![
            Box::new(ShapeUnit::roman_number(catalog, 0.9)?),
            Box::new(ShapeUnit::latin(catalog, 0.9)?),
        ]),
        UnitGroup::single(HyphenatedUnit::new::<&str>(&[], 0.75)),
        UnitGroup::single(KnownSuffixUnit::new(0.5, 4)),
        UnitGroup::single(UnknownUnit::new(catalog)?),
    ])
}
