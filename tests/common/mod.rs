// Shared fixture: a handful of Russian lexemes assembled in memory.
#![allow(dead_code)]

use morph_core::dict::PredictionOptions;
use morph_core::{AnalyzerConfig, Dictionary, DictionaryBuilder, MorphAnalyzer, Parse};

const NOUN_CASES: [&str; 6] = ["nomn", "gent", "datv", "accs", "ablt", "loct"];

// Twelve forms in the order sing nomn..loct, plur nomn..loct.
fn noun(tag: &str, forms: [&str; 12]) -> Vec<(String, String)> {
    forms
        .iter()
        .enumerate()
        .map(|(i, form)| {
            let number = if i < 6 { "sing" } else { "plur" };
            (form.to_string(), format!("{tag} {number},{}", NOUN_CASES[i % 6]))
        })
        .collect()
}

fn singular_noun(tag: &str, forms: [&str; 6]) -> Vec<(String, String)> {
    forms
        .iter()
        .zip(NOUN_CASES)
        .map(|(form, case)| (form.to_string(), format!("{tag} sing,{case}")))
        .collect()
}

pub fn fixture_dictionary() -> Dictionary {
    let mut builder = DictionaryBuilder::new("ru");
    builder.source("test fixture").prediction_options(PredictionOptions {
        max_suffix_length: 5,
        min_ending_freq: 1,
        min_paradigm_popularity: 1,
    });

    builder.add_lexeme(&noun(
        "NOUN,anim,femn",
        [
            "кошка", "кошки", "кошке", "кошку", "кошкой", "кошке",
            "кошки", "кошек", "кошкам", "кошек", "кошками", "кошках",
        ],
    ));
    builder.add_lexeme(&noun(
        "NOUN,inan,femn",
        [
            "лопата", "лопаты", "лопате", "лопату", "лопатой", "лопате",
            "лопаты", "лопат", "лопатам", "лопаты", "лопатами", "лопатах",
        ],
    ));
    builder.add_lexeme(&noun(
        "NOUN,inan,masc",
        [
            "магазин", "магазина", "магазину", "магазин", "магазином", "магазине",
            "магазины", "магазинов", "магазинам", "магазины", "магазинами", "магазинах",
        ],
    ));
    builder.add_lexeme(&singular_noun(
        "NOUN,inan,masc,Sgtm",
        ["интернет", "интернета", "интернету", "интернет", "интернетом", "интернете"],
    ));
    builder.add_lexeme(&noun(
        "NOUN,inan,femn",
        [
            "команда", "команды", "команде", "команду", "командой", "команде",
            "команды", "команд", "командам", "команды", "командами", "командах",
        ],
    ));
    builder.add_lexeme(&noun(
        "NOUN,anim,femn",
        [
            "участница", "участницы", "участнице", "участницу", "участницей", "участнице",
            "участницы", "участниц", "участницам", "участниц", "участницами", "участницах",
        ],
    ));
    builder.add_lexeme(&noun(
        "NOUN,anim,masc",
        [
            "ёжик", "ёжика", "ёжику", "ёжика", "ёжиком", "ёжике",
            "ёжики", "ёжиков", "ёжикам", "ёжиков", "ёжиками", "ёжиках",
        ],
    ));
    builder.add_lexeme(&[
        ("хороший", "ADJF masc,sing,nomn"),
        ("хорошего", "ADJF masc,sing,gent"),
        ("хорошему", "ADJF masc,sing,datv"),
        ("хорошая", "ADJF femn,sing,nomn"),
        ("хорошей", "ADJF femn,sing,gent"),
        ("хорошее", "ADJF neut,sing,nomn"),
        ("хорошему", "ADJF neut,sing,datv"),
        ("хорошие", "ADJF plur,nomn"),
        ("хороших", "ADJF plur,gent"),
    ]);
    builder.add_lexeme(&[("и", "CONJ")]);
    builder.add_lexeme(&[("не", "PRCL")]);
    builder.add_lexeme(&[("в", "PREP")]);

    builder.build().expect("fixture dictionary builds")
}

pub fn analyzer() -> MorphAnalyzer {
    MorphAnalyzer::from_dictionary(fixture_dictionary(), &AnalyzerConfig::new()).expect("analyzer builds")
}

pub fn has_grammemes(parse: &Parse, grammemes: &[&str]) -> bool {
    grammemes
        .iter()
        .all(|name| parse.tag().grammemes().iter().any(|g| g.as_str() == *name))
}

/// The first reading of `word` carrying every grammeme in `grammemes`.
pub fn parse_with(morph: &MorphAnalyzer, word: &str, grammemes: &[&str]) -> Parse {
    morph
        .parse(word)
        .into_iter()
        .find(|p| has_grammemes(p, grammemes))
        .unwrap_or_else(|| panic!("no {grammemes:?} reading for {word}"))
}
