// File: src/tagset/agreement.rs
//
// Russian numeral agreement: which form a noun or adjective takes after a
// cardinal number ("1 лопата", "2 лопаты", "5 лопат").

const SING_NOMN: &[&str] = &["sing", "nomn"];
const SING_ACCS: &[&str] = &["sing", "accs"];
const SING_GENT: &[&str] = &["sing", "gent"];
const PLUR_NOMN: &[&str] = &["plur", "nomn"];
const PLUR_GENT: &[&str] = &["plur", "gent"];

/// 0 for numbers ending in 1 (but not 11), 1 for 2-4 (but not 12-14), 2 otherwise.
pub fn agreement_index(num: u64) -> usize {
    let last = num % 10;
    let last_two = num % 100;
    if last == 1 && last_two != 11 {
        0
    } else if (2..=4).contains(&last) && !(10..20).contains(&last_two) {
        1
    } else {
        2
    }
}

/// Grammemes a word with the given part of speech, case and gender must carry
/// to agree with `num`. Empty for parts of speech that do not agree.
pub fn numeral_agreement<'a>(
    pos: &str,
    case: Option<&'a str>,
    gender: Option<&str>,
    num: u64,
) -> Vec<&'a str> {
    if !matches!(pos, "NOUN" | "ADJF" | "PRTF") {
        return Vec::new();
    }
    let index = agreement_index(num);

    if pos == "NOUN" {
        if let Some(case) = case.filter(|c| !matches!(*c, "nomn" | "accs")) {
            let number = if index == 0 { "sing" } else { "plur" };
            return vec![number, case];
        }
    }

    let grammemes = if index == 0 {
        if case == Some("nomn") {
            SING_NOMN
        } else {
            SING_ACCS
        }
    } else if pos == "NOUN" && index == 1 {
        SING_GENT
    } else if pos != "NOUN" && gender == Some("femn") && index == 1 {
        PLUR_NOMN
    } else {
        PLUR_GENT
    };
    grammemes.to_vec()
}
