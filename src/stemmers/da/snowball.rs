// Reference:
// https://snowballstem.org/algorithms/danish/stemmer.html
use enumset::EnumSet;

use crate::stemmers::profile::Profile;
use crate::stemmers::regions::RegionRules;
use crate::stemmers::rules::{undouble, Guard, Region, Rule, Stage};
use crate::stemmers::word::Word;

static VOWELS: &str = "aeiouyæåø";
static S_ENDINGS: &str = "abcdfghjklmnoprtvyzå";
static CONSONANT_PAIRS: [&str; 4] = ["gd", "dt", "gt", "kt"];

static MAIN_SUFFIX: Stage = Stage::new(
    "main suffix",
    &[
        Rule::delete("erendes"),
        Rule::delete("erende"),
        Rule::delete("hedens"),
        Rule::delete("endes"),
        Rule::delete("erede"),
        Rule::delete("erens"),
        Rule::delete("erets"),
        Rule::delete("ernes"),
        Rule::delete("ethed"),
        Rule::delete("heden"),
        Rule::delete("heder"),
        Rule::delete("ende"),
        Rule::delete("enes"),
        Rule::delete("ered"),
        Rule::delete("eren"),
        Rule::delete("erer"),
        Rule::delete("eres"),
        Rule::delete("eret"),
        Rule::delete("erne"),
        Rule::delete("heds"),
        Rule::delete("ene"),
        Rule::delete("ens"),
        Rule::delete("ere"),
        Rule::delete("ers"),
        Rule::delete("ets"),
        Rule::delete("hed"),
        Rule::delete("en"),
        Rule::delete("er"),
        Rule::delete("es"),
        Rule::delete("et"),
        Rule::delete("e"),
        Rule::delete("s").when(Guard::AfterOneOf(S_ENDINGS)),
    ],
)
.within(Region::R1);

fn consonant_pair(word: &mut Word) {
    undouble(word, Region::R1, &CONSONANT_PAIRS);
}

static OTHER_SUFFIX: Stage = Stage::new(
    "other suffix",
    &[
        Rule::then("elig", consonant_pair),
        Rule::replace("løst", "løs"),
        Rule::then("lig", consonant_pair),
        Rule::then("els", consonant_pair),
        Rule::then("ig", consonant_pair),
    ],
)
.within(Region::R1);

fn undouble_final_consonant(word: &mut Word) {
    let len = word.len();

    if len < 2 || len - 1 < word.regions().r1 || !word.is_consonant_at(len - 1) {
        return;
    }

    if word.char_at(len - 1) == word.char_at(len - 2) {
        word.pop();
    }
}

fn steps(word: &mut Word) {
    MAIN_SUFFIX.apply(word);
    consonant_pair(word);

    if let Some(start) = word.suffix_start("igst") {
        word.truncate(start + 2);
    }

    OTHER_SUFFIX.apply(word);
    undouble_final_consonant(word);
}

pub static PROFILE: Profile = Profile {
    vowels: VOWELS,
    promotions: EnumSet::empty(),
    regions: RegionRules::with_floor(3),
    min_len: 0,
    prelude: None,
    steps,
    postlude: None,
};

pub fn danish_stemmer(word: &str) -> String {
    PROFILE.stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    static TESTS: &[(&str, &str)] = &[
        ("hestene", "hest"),
        ("hestens", "hest"),
        ("bogen", "bog"),
        ("kattene", "kat"),
        ("venlige", "ven"),
        ("hjælpeløst", "hjælpeløs"),
        ("mindst", "mindst"),
        ("på", "på"),
        ("", ""),
        ("venligst", "ven"),
    ];

    #[test]
    fn test_danish() {
        for (string, expected) in TESTS {
            assert_eq!(danish_stemmer(string), *expected, "{}", string);
        }
    }

    #[test]
    fn test_idempotence() {
        for (_, stem) in TESTS {
            assert_eq!(danish_stemmer(stem), *stem, "{}", stem);
        }
    }
}
