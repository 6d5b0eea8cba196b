mod common;

use common::{analyzer, parse_with};
use morph_core::MorphError;
use pretty_assertions::assert_eq;

#[test]
fn test_numeral_agreement_nominative() {
    let morph = analyzer();
    let lopata = parse_with(&morph, "лопата", &["sing", "nomn"]);
    let cases: &[(u64, &str)] = &[
        (0, "лопат"),
        (1, "лопата"),
        (2, "лопаты"),
        (3, "лопаты"),
        (4, "лопаты"),
        (5, "лопат"),
        (10, "лопат"),
        (11, "лопат"),
        (12, "лопат"),
        (14, "лопат"),
        (15, "лопат"),
        (20, "лопат"),
        (21, "лопата"),
        (22, "лопаты"),
        (24, "лопаты"),
        (25, "лопат"),
        (101, "лопата"),
        (111, "лопат"),
        (112, "лопат"),
        (121, "лопата"),
        (122, "лопаты"),
        (1000, "лопат"),
        (1001, "лопата"),
    ];
    for &(num, expected) in cases {
        let agreed = morph.make_agree_with_number(&lopata, num).unwrap();
        assert_eq!(agreed.word(), expected, "{num} лопата");
    }
}

#[test]
fn test_numeral_agreement_keeps_oblique_case() {
    let morph = analyzer();
    let gent = parse_with(&morph, "лопаты", &["sing", "gent"]);
    assert_eq!(morph.make_agree_with_number(&gent, 1).unwrap().word(), "лопаты");
    assert_eq!(morph.make_agree_with_number(&gent, 2).unwrap().word(), "лопат");
    assert_eq!(morph.make_agree_with_number(&gent, 5).unwrap().word(), "лопат");

    let ablt = parse_with(&morph, "лопатой", &["ablt"]);
    assert_eq!(morph.make_agree_with_number(&ablt, 3).unwrap().word(), "лопатами");
}

#[test]
fn test_numeral_agreement_for_adjectives() {
    let morph = analyzer();
    let good = parse_with(&morph, "хороший", &["masc", "nomn"]);
    assert_eq!(morph.make_agree_with_number(&good, 1).unwrap().word(), "хороший");
    assert_eq!(morph.make_agree_with_number(&good, 5).unwrap().word(), "хороших");
}

#[test]
fn test_inflect_to_own_tag_is_identity() {
    let morph = analyzer();
    for word in ["кошке", "лопаты", "магазинов", "интернетом", "участниц", "хорошей"] {
        for parse in morph.parse(word) {
            let grammemes: Vec<&str> = parse.tag().grammemes().iter().map(|g| g.as_str()).collect();
            let inflected = morph.inflect(&parse, &grammemes).unwrap().unwrap();
            assert_eq!(inflected.word(), parse.word());
            assert_eq!(inflected.tag(), parse.tag());
        }
    }
}

#[test]
fn test_inflect_prefers_closest_form() {
    let morph = analyzer();
    let masc_datv = parse_with(&morph, "хорошему", &["masc", "datv"]);
    let gent = morph.inflect(&masc_datv, &["gent"]).unwrap().unwrap();
    assert_eq!(gent.word(), "хорошего");

    let plural = morph.inflect(&masc_datv, &["plur", "gent"]).unwrap().unwrap();
    assert_eq!(plural.word(), "хороших");
}

#[test]
fn test_rare_case_falls_back_to_common_one() {
    let morph = analyzer();
    let cat = parse_with(&morph, "кошка", &["sing", "nomn"]);
    let inflected = morph.inflect(&cat, &["gen2"]).unwrap().unwrap();
    assert_eq!(inflected.word(), "кошки");
}

#[test]
fn test_missing_form_is_none() {
    let morph = analyzer();
    let internet = parse_with(&morph, "интернет", &["nomn"]);
    assert_eq!(morph.inflect(&internet, &["plur"]).unwrap(), None);
}

#[test]
fn test_unknown_grammeme_is_an_error() {
    let morph = analyzer();
    let cat = parse_with(&morph, "кошка", &["nomn"]);
    match morph.inflect(&cat, &["plur", "gentt"]) {
        Err(MorphError::UnknownGrammeme(err)) => assert_eq!(err.grammeme, "gentt"),
        other => panic!("expected unknown grammeme error, got {other:?}"),
    }
}

#[test]
fn test_inflect_through_prediction() {
    let morph = analyzer();
    let guess = morph
        .parse("бутявка")
        .into_iter()
        .find(|p| p.normal_form() == "бутявка")
        .unwrap();
    let ablt = morph.inflect(&guess, &["sing", "ablt"]).unwrap().unwrap();
    assert_eq!(ablt.word(), "бутявкой");
    assert_eq!(morph.normalized(&ablt).word(), "бутявка");
}
