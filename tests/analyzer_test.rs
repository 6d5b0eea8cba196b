mod common;

use common::{analyzer, has_grammemes, parse_with};
use morph_core::{AnalyzerConfig, DictionaryBuilder, MorphAnalyzer, Parse, Provenance, Tag};
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const SAMPLE_WORDS: &[&str] = &[
    "кошка", "Кошке", "кошек", "лопаты", "ежик", "интернет-магазина", "команд-участниц",
    "по-хорошему", "кошка-то", "псевдокошка", "бутявка", "123", "3,14", "XIV", "hello", "!?", "И", "",
    "ъъъ",
];

#[test]
fn test_dictionary_word() {
    let morph = analyzer();
    let parses = morph.parse("кошке");
    assert_eq!(parses.len(), 2);
    for parse in &parses {
        assert!(parse.is_known());
        assert_eq!(parse.word(), "кошке");
        assert_eq!(parse.normal_form(), "кошка");
        assert_eq!(parse.score(), 1.0);
    }
    assert!(has_grammemes(&parses[0], &["NOUN", "sing", "datv"]));
    assert!(has_grammemes(&parses[1], &["NOUN", "sing", "loct"]));
}

#[test]
fn test_input_case_is_ignored() {
    let morph = analyzer();
    assert_eq!(morph.parse("КОШКА"), morph.parse("кошка"));
}

#[test]
fn test_yo_substitution() {
    let morph = analyzer();
    let parse = parse_with(&morph, "ежик", &["sing", "nomn"]);
    assert_eq!(parse.word(), "ёжик");
    assert_eq!(parse.normal_form(), "ёжик");
    assert!(morph.word_is_known("ежик", false));
    assert!(!morph.word_is_known("ежик", true));
    assert!(morph.word_is_known("ёжик", true));
}

#[test]
fn test_fixed_left_compound() {
    let morph = analyzer();
    let parses = morph.parse("интернет-магазина");
    assert_eq!(parses.len(), 1);
    let parse = &parses[0];
    assert_eq!(parse.word(), "интернет-магазина");
    assert_eq!(parse.normal_form(), "интернет-магазин");
    assert!(has_grammemes(parse, &["NOUN", "sing", "gent"]));
    assert!(matches!(
        parse.methods(),
        [Provenance::Dictionary { .. }, Provenance::HyphenFixedLeft { left }] if left == "интернет"
    ));
    assert!((parse.score() - 0.75).abs() < 1e-9);

    let lexeme = morph.lexeme(parse);
    assert_eq!(lexeme.len(), 12);
    assert!(lexeme.iter().all(|p| p.word().starts_with("интернет-")));
    assert!(lexeme.iter().any(|p| p.word() == "интернет-магазинами"));
    assert_eq!(morph.normalized(parse).word(), "интернет-магазин");
}

#[test]
fn test_both_parts_inflect() {
    let morph = analyzer();
    let parses = morph.parse("команд-участниц");
    let first = &parses[0];
    assert_eq!(first.normal_form(), "команда-участница");
    assert!(has_grammemes(first, &["NOUN", "plur", "gent"]));
    assert!(matches!(first.methods(), [Provenance::HyphenVariableBoth { .. }]));

    // the frozen-left readings follow
    assert!(parses[1..]
        .iter()
        .all(|p| p.normal_form() == "команд-участница"));

    let lexeme = morph.lexeme(first);
    assert_eq!(lexeme.len(), 12);
    assert_eq!(lexeme[0].word(), "команда-участница");
    assert!(lexeme.iter().any(|p| p.word() == "команды-участницы"));
    assert_eq!(morph.normalized(first).word(), "команда-участница");

    // every form of the compound keeps the decayed score
    assert!((first.score() - 0.75).abs() < 1e-9);
    assert!(lexeme.iter().all(|p| (p.score() - 0.75).abs() < 1e-9));
    assert!((morph.normalized(first).score() - 0.75).abs() < 1e-9);
}

#[test]
fn test_hyphen_adverb() {
    let morph = analyzer();
    let parses = morph.parse("по-хорошему");
    assert_eq!(parses.len(), 1);
    assert_eq!(parses[0].tag().as_str(), "ADVB");
    assert_eq!(parses[0].normal_form(), "по-хорошему");
    assert_eq!(morph.lexeme(&parses[0]), parses);
}

#[test]
fn test_trailing_particle() {
    let morph = analyzer();
    let parse = parse_with(&morph, "кошка-то", &["sing", "nomn"]);
    assert_eq!(parse.normal_form(), "кошка-то");
    assert!(matches!(
        parse.methods(),
        [Provenance::Dictionary { .. }, Provenance::HyphenParticle { particle }] if particle == "-то"
    ));
    let lexeme = morph.lexeme(&parse);
    assert!(lexeme.iter().all(|p| p.word().ends_with("-то")));
    assert!(lexeme.iter().any(|p| p.word() == "кошками-то"));
}

#[test]
fn test_known_prefix() {
    let morph = analyzer();
    let parse = parse_with(&morph, "псевдокошка", &["sing", "nomn"]);
    assert_eq!(parse.normal_form(), "псевдокошка");
    assert!((parse.score() - 0.75).abs() < 1e-9);
    assert!(matches!(
        parse.methods(),
        [Provenance::Dictionary { .. }, Provenance::KnownPrefix { prefix }] if prefix == "псевдо"
    ));

    let gent_plur = morph.inflect(&parse, &["plur", "gent"]).unwrap().unwrap();
    assert_eq!(gent_plur.word(), "псевдокошек");
    assert_eq!(morph.normalized(&gent_plur).word(), "псевдокошка");
}

#[test]
fn test_suffix_prediction() {
    let morph = analyzer();
    let parses = morph.parse("бутявка");
    assert!(parses
        .iter()
        .all(|p| p.tag().is_productive() && matches!(p.methods().last(), Some(Provenance::KnownSuffix { .. }))));

    // "-ка" is shared by "кошка" and "ёжика"; the former gives a feminine noun
    let parse = parses
        .iter()
        .find(|p| p.normal_form() == "бутявка")
        .expect("reading modelled on кошка");
    assert!(has_grammemes(parse, &["NOUN", "femn", "sing", "nomn"]));
    assert!(matches!(
        parse.methods(),
        [Provenance::Dictionary { .. }, Provenance::KnownSuffix { ending }] if ending == "ка"
    ));
    assert!(parse.score() > 0.0 && parse.score() <= 0.5);

    let lexeme = morph.lexeme(parse);
    assert_eq!(lexeme.len(), 12);
    assert!(lexeme.iter().any(|p| p.word() == "бутявкой"));
}

#[test]
fn test_prediction_skips_closed_word_classes() {
    let morph = analyzer();
    // "-и" and "-не" are endings of the conjunction "и" and the particle "не"
    for word in ["шмыкави", "пылесосне"] {
        let parses = morph.parse(word);
        assert!(!parses.is_empty(), "{word}");
        for parse in &parses {
            assert!(parse.tag().is_productive(), "{word}: {}", parse.tag());
            assert!(!has_grammemes(parse, &["CONJ"]) && !has_grammemes(parse, &["PRCL"]), "{word}");
        }
        assert!(morph.tag(word).iter().all(|t| t.is_productive()), "{word}");
    }
}

#[test]
fn test_known_prefix_skips_closed_word_classes() {
    let mut builder = DictionaryBuilder::new("ru");
    builder.add_lexeme(&[("кошка", "NOUN,anim,femn sing,nomn"), ("кошки", "NOUN,anim,femn sing,gent")]);
    builder.add_lexeme(&[("или", "CONJ")]);
    builder.add_lexeme(&[("нет", "PRCL")]);
    let morph = MorphAnalyzer::from_dictionary(builder.build().unwrap(), &AnalyzerConfig::new()).unwrap();

    assert!(morph
        .parse("псевдокошка")
        .iter()
        .any(|p| matches!(p.methods().last(), Some(Provenance::KnownPrefix { .. }))));
    for word in ["псевдоили", "псевдонет"] {
        for parse in morph.parse(word) {
            assert!(!has_grammemes(&parse, &["CONJ"]) && !has_grammemes(&parse, &["PRCL"]), "{word}");
            assert!(!matches!(parse.methods().last(), Some(Provenance::KnownPrefix { .. })), "{word}");
        }
        assert!(morph.tag(word).iter().all(|t| t.is_productive() || t.is_unknown()), "{word}");
    }
}

#[test]
fn test_shapes() {
    let morph = analyzer();
    let tag_of = |word: &str| morph.parse(word)[0].tag().as_str().to_string();
    assert_eq!(tag_of("123"), "NUMB,intg");
    assert_eq!(tag_of("3,14"), "NUMB,real");
    assert_eq!(tag_of("-5"), "NUMB,intg");
    assert_eq!(tag_of("-1.5"), "NUMB,real");
    assert_eq!(tag_of("-"), "PNCT");
    assert_eq!(tag_of("!?"), "PNCT");
    assert_eq!(tag_of("hello"), "LATN");
    assert!(morph.parse("XIV").iter().any(|p| p.tag().as_str() == "ROMN"));
}

#[test]
fn test_initials_next_to_dictionary_word() {
    let morph = analyzer();
    let parses = morph.parse("И");
    assert!(parses.iter().any(|p| p.tag().as_str() == "CONJ"));
    let names: Vec<&Parse> = parses.iter().filter(|p| has_grammemes(p, &["Name", "Init"])).collect();
    let patronymics: Vec<&Parse> = parses.iter().filter(|p| has_grammemes(p, &["Patr", "Init"])).collect();
    assert_eq!(names.len(), 12);
    assert_eq!(patronymics.len(), 12);
    assert_eq!(morph.lexeme(names[0]).len(), 6);
    assert_eq!(morph.lexeme(names[7]).len(), 6);
    assert!(has_grammemes(&morph.normalized(names[7]), &["femn", "nomn"]));

    // a patronymic initial has a single lexeme covering both genders
    let feminine = patronymics.iter().find(|p| has_grammemes(p, &["femn", "ablt"])).unwrap();
    let lexeme = morph.lexeme(feminine);
    assert_eq!(lexeme.len(), 12);
    assert!(has_grammemes(&lexeme[0], &["masc", "nomn"]));
    let normal = morph.normalized(feminine);
    assert!(has_grammemes(&normal, &["masc", "nomn", "Patr"]));

    // lowercase letters are not initials
    assert!(morph.parse("и").iter().all(|p| !has_grammemes(p, &["Init"])));
}

#[test]
fn test_unknown_word_fallback() {
    let morph = analyzer();
    let parses = morph.parse("ъъъ");
    assert_eq!(parses.len(), 1);
    assert!(parses[0].tag().is_unknown());
    assert!(matches!(parses[0].methods(), [Provenance::Unknown { .. }]));
}

#[test]
fn test_results_are_never_empty() {
    let morph = analyzer();
    for word in SAMPLE_WORDS {
        assert!(!morph.parse(word).is_empty(), "no parses for {word:?}");
        assert!(!morph.tag(word).is_empty(), "no tags for {word:?}");
    }
}

#[test]
fn test_no_duplicate_parses() {
    let morph = analyzer();
    for word in SAMPLE_WORDS {
        let parses = morph.parse(word);
        let keys: HashSet<(String, Tag, String)> = parses
            .iter()
            .map(|p| (p.word().to_string(), p.tag().clone(), p.normal_form().to_string()))
            .collect();
        assert_eq!(keys.len(), parses.len(), "duplicates for {word:?}");
    }
}

#[test]
fn test_tag_agrees_with_parse() {
    let morph = analyzer();
    for word in SAMPLE_WORDS {
        let from_parse: HashSet<Tag> = morph.parse(word).into_iter().map(|p| p.tag().clone()).collect();
        let from_tag: HashSet<Tag> = morph.tag(word).into_iter().collect();
        assert_eq!(from_parse, from_tag, "tag/parse mismatch for {word:?}");
    }
}

#[test]
fn test_normal_forms_keep_order() {
    let morph = analyzer();
    assert_eq!(morph.normal_forms("кошки"), vec!["кошка"]);
    assert_eq!(morph.normal_forms("хорошему"), vec!["хороший"]);
}

#[test]
fn test_known_words_by_prefix() {
    let morph = analyzer();
    let words: Vec<String> = morph
        .iter_known_word_parses("кошк")
        .map(|p| {
            assert!(p.is_known());
            p.word().to_string()
        })
        .collect();
    let mut sorted = words.clone();
    sorted.sort();
    assert_eq!(words, sorted);

    let mut distinct = words.clone();
    distinct.dedup();
    assert_eq!(
        distinct,
        vec!["кошка", "кошкам", "кошками", "кошках", "кошке", "кошки", "кошкой", "кошку"]
    );
    assert_eq!(morph.iter_known_word_parses("ъ").count(), 0);
}

#[test]
fn test_shared_across_threads() {
    let morph = Arc::new(analyzer());
    let expected: Vec<Vec<Parse>> = SAMPLE_WORDS.iter().map(|w| morph.parse(w)).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let morph = Arc::clone(&morph);
            thread::spawn(move || SAMPLE_WORDS.iter().map(|w| morph.parse(w)).collect::<Vec<_>>())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
