// Reference:
// https://snowballstem.org/algorithms/dutch/stemmer.html
use enumset::enum_set;

use crate::stemmers::classify::Promotion;
use crate::stemmers::profile::{strip_accents, Profile};
use crate::stemmers::regions::RegionRules;
use crate::stemmers::rules::{undouble, Guard, Region, Rule, Stage};
use crate::stemmers::word::Word;

static VOWELS: &str = "aeiouyè";
static ACCENTED: &str = "äëïöüáéíóú";

fn undouble_kdt(word: &mut Word) {
    undouble(word, Region::Word, &["kk", "dd", "tt"]);
}

fn valid_en_ending(word: &Word, start: usize) -> bool {
    start > 0 && word.is_consonant_at(start - 1) && !word.preceded_by(start, "gem")
}

static EN_ENDING: Stage = Stage::new(
    "en ending",
    &[Rule::then("en", undouble_kdt)
        .within(Region::R1)
        .when(Guard::Check(valid_en_ending))],
);

fn en_ending(word: &mut Word) {
    EN_ENDING.apply(word);
}

fn e_ending(word: &mut Word) -> bool {
    let Some(start) = word.suffix_start("e") else {
        return false;
    };

    if !word.in_region(Region::R1, start) || !(start > 0 && word.is_consonant_at(start - 1)) {
        return false;
    }

    word.truncate(start);
    undouble_kdt(word);

    true
}

static STEP_1: Stage = Stage::new(
    "step 1",
    &[
        Rule::replace("heden", "heid").within(Region::R1),
        Rule::then("ene", undouble_kdt)
            .within(Region::R1)
            .when(Guard::Check(valid_en_ending)),
        Rule::then("en", undouble_kdt)
            .within(Region::R1)
            .when(Guard::Check(valid_en_ending)),
        Rule::delete("se")
            .within(Region::R1)
            .when(Guard::AfterNoneOf("aeiouyèj")),
        Rule::delete("s")
            .within(Region::R1)
            .when(Guard::AfterNoneOf("aeiouyèj")),
    ],
);

static HEID: Stage = Stage::new(
    "heid",
    &[Rule::then("heid", en_ending)
        .within(Region::R2)
        .when(Guard::NotAfter("c"))],
);

static IG: Stage = Stage::new(
    "ig",
    &[Rule::delete("ig")
        .within(Region::R2)
        .when(Guard::NotAfter("e"))],
);

fn drop_ig_or_undouble(word: &mut Word) {
    if IG.apply(word).is_none() {
        undouble_kdt(word);
    }
}

fn drop_e_ending(word: &mut Word) {
    e_ending(word);
}

static STEP_3B: Stage = Stage::new(
    "step 3b",
    &[
        Rule::then("lijk", drop_e_ending).within(Region::R2),
        Rule::delete("baar").within(Region::R2),
        Rule::then("end", drop_ig_or_undouble).within(Region::R2),
        Rule::then("ing", drop_ig_or_undouble).within(Region::R2),
        Rule::delete("ig")
            .within(Region::R2)
            .when(Guard::NotAfter("e")),
    ],
);

static BAR: Stage = Stage::new("bar", &[Rule::delete("bar").within(Region::R2)]);

/// Shortens a doubled vowel enclosed by consonants at the end of the word,
/// as in "maan" => "man".
fn undouble_vowel(word: &mut Word) {
    let len = word.len();

    if len < 4 || !word.is_consonant_at(len - 1) || word.last() == Some('I') {
        return;
    }

    let doubled = match (word.char_at(len - 3), word.char_at(len - 2)) {
        (Some(a), Some(b)) => a == b && "aeou".contains(a),
        _ => false,
    };

    if doubled && word.is_consonant_at(len - 4) {
        word.remove(len - 2);
    }
}

fn strip_diacritics(chars: &mut Vec<char>) {
    for c in chars.iter_mut() {
        *c = strip_accents(*c, ACCENTED);
    }
}

fn steps(word: &mut Word) {
    STEP_1.apply(word);

    let e_found = e_ending(word);

    HEID.apply(word);

    if STEP_3B.apply(word).is_none() && e_found {
        BAR.apply(word);
    }

    undouble_vowel(word);
}

pub static PROFILE: Profile = Profile {
    vowels: VOWELS,
    promotions: enum_set!(
        Promotion::InitialY | Promotion::YAfterVowel | Promotion::IBetweenVowels
    ),
    regions: RegionRules::with_floor(3),
    min_len: 0,
    prelude: Some(strip_diacritics),
    steps,
    postlude: None,
};

pub fn dutch_stemmer(word: &str) -> String {
    PROFILE.stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    static TESTS: &[(&str, &str)] = &[
        ("boeken", "boek"),
        ("maken", "mak"),
        ("huizen", "huiz"),
        ("lopen", "lop"),
        ("maan", "man"),
        ("kinderen", "kinder"),
        ("tafels", "tafel"),
        ("mooiste", "mooist"),
        ("vrijheid", "vrijheid"),
        ("duidelijk", "duidelijk"),
    ];

    #[test]
    fn test_dutch() {
        for (string, expected) in TESTS {
            assert_eq!(dutch_stemmer(string), *expected, "{}", string);
        }
    }

    #[test]
    fn test_idempotence() {
        for (_, stem) in TESTS {
            assert_eq!(dutch_stemmer(stem), *stem, "{}", stem);
        }
    }

    #[test]
    fn test_prelude() {
        assert_eq!(PROFILE.prepare("ideeën").to_string(), "ideeen");
        assert_eq!(PROFILE.prepare("yoghurt").to_string(), "Yoghurt");
        assert_eq!(PROFILE.prepare("mooie").to_string(), "mooIe");
    }
}
