// File: src/lang/ru.rs
//
// Russian: unit order, scores and closed word lists.

use crate::error::Result;
use crate::tagset::GrammemeCatalog;
use crate::units::{
    DictionaryUnit, HyphenAdverbUnit, HyphenParticleUnit, HyphenatedUnit, InitialsUnit, KnownPrefixUnit,
    KnownSuffixUnit, ShapeUnit, UnitGroup, UnknownPrefixUnit, UnknownUnit,
};

pub const CODE: &str = "ru";

/// Prefixes a whole paradigm can carry ("наибольший" / "больший").
pub const PARADIGM_PREFIXES: &[&str] = &["", "по", "наи"];

/// `е` in the input may stand for `ё` in the dictionary.
pub const CHAR_SUBSTITUTES: &[(char, char)] = &[('е', 'ё')];

/// Capital letters that can be an abbreviated name.
pub const INITIAL_LETTERS: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЭЮЯ";

/// Particles attached with a hyphen, in matching order.
pub const PARTICLES_AFTER_HYPHEN: &[&str] = &["-то", "-ка", "-таки", "-де", "-тко", "-тка", "-с", "-ста"];

/// Derivational prefixes that do not change how the rest inflects.
pub const KNOWN_PREFIXES: &[&str] = &[
    "авиа", "авто", "аква", "анти", "анти-", "антропо", "архи", "арт", "арт-", "астро", "аудио", "аэро",
    "без", "бес", "био", "вело", "взаимо", "вне", "внутри", "видео", "вице-", "вперед", "впереди",
    "гекто", "гелио", "гео", "гетеро", "гига", "гигро", "гипер", "гипо", "гомо", "дву", "двух", "де",
    "дез", "дека", "деци", "дис", "до", "евро", "за", "зоо", "интер", "инфра", "квази", "квази-", "кило",
    "кино", "контр", "контр-", "космо", "космо-", "крипто", "лейб-", "лже", "лже-", "макро", "макси",
    "макси-", "мало", "меж", "медиа", "медиа-", "мега", "мета", "мета-", "метео", "метро", "микро",
    "милли", "мини", "мини-", "моно", "мото", "много", "мульти", "нано", "нарко", "не", "небез", "недо",
    "нейро", "нео", "низко", "обер-", "обще", "одно", "около", "орто", "палео", "пан", "пара", "пента",
    "пере", "пиро", "поли", "полу", "после", "пост", "пост-", "порно", "пра", "пра-", "пред", "пресс-",
    "противо", "противо-", "прото", "псевдо", "псевдо-", "радио", "разно", "ре", "ретро", "ретро-",
    "само", "санти", "сверх", "сверх-", "спец", "суб", "супер", "супер-", "супра", "теле", "тетра",
    "топ-", "транс", "транс-", "ультра", "унтер-", "штаб-", "экзо", "эко", "эко-", "экс-", "экстра",
    "экстра-", "электро", "электро-", "энерго", "этно",
];

const INITIALS_SCORE: f64 = 0.1;
const SHAPE_SCORE: f64 = 0.9;
const PARTICLE_SCORE: f64 = 0.9;
const ADVERB_SCORE: f64 = 0.7;
const COMPOUND_SCORE: f64 = 0.75;
const KNOWN_PREFIX_SCORE: f64 = 0.75;
const KNOWN_PREFIX_MIN_REMAINDER: usize = 3;
const UNKNOWN_PREFIX_SCORE: f64 = 0.5;
const UNKNOWN_PREFIX_MAX_LENGTH: usize = 5;
const UNKNOWN_PREFIX_MIN_REMAINDER: usize = 3;
const KNOWN_SUFFIX_SCORE: f64 = 0.5;
const KNOWN_SUFFIX_MIN_WORD_LENGTH: usize = 4;

/// Known prefixes written with a trailing hyphen ("экс-").
pub fn hyphenated_prefixes() -> Vec<&'static str> {
    KNOWN_PREFIXES.iter().copied().filter(|p| p.ends_with('-')).collect()
}

/// Unit groups in the order they run.
pub fn pipeline(catalog: &GrammemeCatalog) -> Result<Vec<UnitGroup>> {
    Ok(vec![
        UnitGroup::new(vec![
            Box::new(DictionaryUnit::new()),
            Box::new(InitialsUnit::first_name(catalog, INITIAL_LETTERS, INITIALS_SCORE)?),
            Box::new(InitialsUnit::patronymic(catalog, INITIAL_LETTERS, INITIALS_SCORE)?),
        ]),
        UnitGroup::single(ShapeUnit::number(catalog, SHAPE_SCORE)?),
        UnitGroup::single(ShapeUnit::punctuation(catalog, SHAPE_SCORE)?),
        UnitGroup::new(vec![
            Box::new(ShapeUnit::roman_number(catalog, SHAPE_SCORE)?),
            Box::new(ShapeUnit::latin(catalog, SHAPE_SCORE)?),
        ]),
        UnitGroup::single(HyphenParticleUnit::new(PARTICLES_AFTER_HYPHEN, PARTICLE_SCORE)),
        UnitGroup::single(HyphenAdverbUnit::new(catalog, ADVERB_SCORE)?),
        UnitGroup::single(HyphenatedUnit::new(&hyphenated_prefixes(), COMPOUND_SCORE)),
        UnitGroup::single(KnownPrefixUnit::new(KNOWN_PREFIXES, KNOWN_PREFIX_SCORE, KNOWN_PREFIX_MIN_REMAINDER)),
        UnitGroup::new(vec![
            Box::new(UnknownPrefixUnit::new(
                UNKNOWN_PREFIX_SCORE,
                UNKNOWN_PREFIX_MAX_LENGTH,
                UNKNOWN_PREFIX_MIN_REMAINDER,
            )),
            Box::new(KnownSuffixUnit::new(KNOWN_SUFFIX_SCORE, KNOWN_SUFFIX_MIN_WORD_LENGTH)),
        ]),
        UnitGroup::single(UnknownUnit::new(catalog)?),
    ])
}
