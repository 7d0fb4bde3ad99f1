// Reference:
// https://snowballstem.org/algorithms/norwegian/stemmer.html
use enumset::EnumSet;

use crate::stemmers::profile::Profile;
use crate::stemmers::regions::RegionRules;
use crate::stemmers::rules::{undouble, Guard, Region, Rule, Stage};
use crate::stemmers::word::Word;

static VOWELS: &str = "aeiouyæåø";
static S_ENDINGS: &str = "bcdfghjlmnoprtvyz";

fn valid_s_ending(word: &Word, start: usize) -> bool {
    match word.char_before(start) {
        Some('k') => start >= 2 && word.is_consonant_at(start - 2),
        Some(c) => S_ENDINGS.contains(c),
        None => false,
    }
}

static MAIN_SUFFIX: Stage = Stage::new(
    "main suffix",
    &[
        Rule::delete("hetenes"),
        Rule::delete("hetene"),
        Rule::delete("hetens"),
        Rule::delete("endes"),
        Rule::delete("heten"),
        Rule::delete("heter"),
        Rule::delete("ande"),
        Rule::delete("edes"),
        Rule::delete("ende"),
        Rule::delete("enes"),
        Rule::replace("erte", "er"),
        Rule::delete("ane"),
        Rule::delete("ast"),
        Rule::delete("ede"),
        Rule::delete("ene"),
        Rule::delete("ens"),
        Rule::delete("ers"),
        Rule::replace("ert", "er"),
        Rule::delete("ets"),
        Rule::delete("het"),
        Rule::delete("ar"),
        Rule::delete("as"),
        Rule::delete("en"),
        Rule::delete("er"),
        Rule::delete("es"),
        Rule::delete("et"),
        Rule::delete("a"),
        Rule::delete("e"),
        Rule::delete("s").when(Guard::Check(valid_s_ending)),
    ],
)
.within(Region::R1);

static OTHER_SUFFIX: Stage = Stage::new(
    "other suffix",
    &[
        Rule::delete("hetslov"),
        Rule::delete("eleg"),
        Rule::delete("elig"),
        Rule::delete("elov"),
        Rule::delete("slov"),
        Rule::delete("eig"),
        Rule::delete("els"),
        Rule::delete("leg"),
        Rule::delete("lig"),
        Rule::delete("lov"),
        Rule::delete("ig"),
    ],
)
.within(Region::R1);

fn steps(word: &mut Word) {
    MAIN_SUFFIX.apply(word);
    undouble(word, Region::R1, &["dt", "vt"]);
    OTHER_SUFFIX.apply(word);
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

pub fn norwegian_stemmer(word: &str) -> String {
    PROFILE.stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    static TESTS: &[(&str, &str)] = &[
        ("hesten", "hest"),
        ("bilene", "bil"),
        ("gutter", "gutt"),
        ("havet", "hav"),
        ("vakkert", "vakker"),
        ("parks", "park"),
        ("boks", "boks"),
        ("Hestene", "hest"),
        ("bøkene", "bøk"),
    ];

    #[test]
    fn test_norwegian() {
        for (string, expected) in TESTS {
            assert_eq!(norwegian_stemmer(string), *expected, "{}", string);
        }
    }

    #[test]
    fn test_idempotence() {
        // Stems that lose another ending when stemmed again.
        let unstable = ["vakker"];

        for (_, stem) in TESTS {
            if unstable.contains(stem) {
                assert_ne!(norwegian_stemmer(stem), *stem, "{}", stem);
            } else {
                assert_eq!(norwegian_stemmer(stem), *stem, "{}", stem);
            }
        }
    }
}
