// Reference:
// https://snowballstem.org/algorithms/german/stemmer.html
use enumset::enum_set;

use crate::stemmers::classify::Promotion;
use crate::stemmers::profile::{strip_accents, Profile};
use crate::stemmers::regions::RegionRules;
use crate::stemmers::rules::{Guard, Region, Rule, Stage};
use crate::stemmers::word::Word;

static VOWELS: &str = "aeiouyäöü";
static S_ENDINGS: &str = "bdfghklmnrt";
static ST_ENDINGS: &str = "bdfghklmnt";

fn drop_niss_s(word: &mut Word) {
    if word.ends_with("niss") {
        word.pop();
    }
}

fn valid_st_ending(word: &Word, start: usize) -> bool {
    start >= 4 && word.char_before(start).is_some_and(|c| ST_ENDINGS.contains(c))
}

static STEP_1: Stage = Stage::new(
    "step 1",
    &[
        Rule::delete("ern").within(Region::R1),
        Rule::delete("em").within(Region::R1),
        Rule::delete("er").within(Region::R1),
        Rule::then("en", drop_niss_s).within(Region::R1),
        Rule::then("es", drop_niss_s).within(Region::R1),
        Rule::then("e", drop_niss_s).within(Region::R1),
        Rule::delete("s")
            .within(Region::R1)
            .when(Guard::AfterOneOf(S_ENDINGS)),
    ],
);

static STEP_2: Stage = Stage::new(
    "step 2",
    &[
        Rule::delete("est").within(Region::R1),
        Rule::delete("en").within(Region::R1),
        Rule::delete("er").within(Region::R1),
        Rule::delete("st")
            .within(Region::R1)
            .when(Guard::Check(valid_st_ending)),
    ],
);

static IG: Stage = Stage::new(
    "step 3 ig",
    &[Rule::delete("ig")
        .within(Region::R2)
        .when(Guard::NotAfter("e"))],
);

static ER_EN: Stage = Stage::new(
    "step 3 er/en",
    &[
        Rule::delete("er").within(Region::R1),
        Rule::delete("en").within(Region::R1),
    ],
);

static LICH_IG: Stage = Stage::new(
    "step 3 lich/ig",
    &[
        Rule::delete("lich").within(Region::R2),
        Rule::delete("ig").within(Region::R2),
    ],
);

fn drop_ig(word: &mut Word) {
    IG.apply(word);
}

fn drop_er_en(word: &mut Word) {
    ER_EN.apply(word);
}

fn drop_lich_ig(word: &mut Word) {
    LICH_IG.apply(word);
}

static STEP_3: Stage = Stage::new(
    "step 3",
    &[
        Rule::delete("isch")
            .within(Region::R2)
            .when(Guard::NotAfter("e")),
        Rule::then("heit", drop_er_en).within(Region::R2),
        Rule::then("keit", drop_lich_ig).within(Region::R2),
        Rule::then("lich", drop_er_en).within(Region::R2),
        Rule::then("end", drop_ig).within(Region::R2),
        Rule::then("ung", drop_ig).within(Region::R2),
        Rule::delete("ig")
            .within(Region::R2)
            .when(Guard::NotAfter("e")),
        Rule::delete("ik")
            .within(Region::R2)
            .when(Guard::NotAfter("e")),
    ],
);

fn expand_eszett(chars: &mut Vec<char>) {
    if chars.contains(&'ß') {
        *chars = chars
            .iter()
            .flat_map(|&c| if c == 'ß' { vec!['s', 's'] } else { vec![c] })
            .collect();
    }
}

fn steps(word: &mut Word) {
    STEP_1.apply(word);
    STEP_2.apply(word);
    STEP_3.apply(word);
}

fn remove_umlauts(word: &mut Word) {
    word.map_chars(|c| strip_accents(c, "äöü"));
}

pub static PROFILE: Profile = Profile {
    vowels: VOWELS,
    promotions: enum_set!(Promotion::UBetweenVowels | Promotion::YBetweenVowels),
    regions: RegionRules::with_floor(3),
    min_len: 0,
    prelude: Some(expand_eszett),
    steps,
    postlude: Some(remove_umlauts),
};

pub fn german_stemmer(word: &str) -> String {
    PROFILE.stem(word)
}
