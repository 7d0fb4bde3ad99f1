// Reference:
// https://snowballstem.org/algorithms/swedish/stemmer.html
use enumset::EnumSet;

use crate::stemmers::profile::Profile;
use crate::stemmers::regions::RegionRules;
use crate::stemmers::rules::{undouble, Guard, Region, Rule, Stage};
use crate::stemmers::word::Word;

static VOWELS: &str = "aeiouyäåö";
static S_ENDINGS: &str = "bcdfghjklmnoprtvy";

static STEP_1: Stage = Stage::new(
    "step 1",
    &[
        Rule::delete("heterna"),
        Rule::delete("hetens"),
        Rule::delete("anden"),
        Rule::delete("andes"),
        Rule::delete("andet"),
        Rule::delete("arens"),
        Rule::delete("arnas"),
        Rule::delete("ernas"),
        Rule::delete("heten"),
        Rule::delete("heter"),
        Rule::delete("ornas"),
        Rule::delete("ande"),
        Rule::delete("arna"),
        Rule::delete("arne"),
        Rule::delete("aren"),
        Rule::delete("aste"),
        Rule::delete("erna"),
        Rule::delete("erns"),
        Rule::delete("orna"),
        Rule::delete("ades"),
        Rule::delete("ade"),
        Rule::delete("are"),
        Rule::delete("ast"),
        Rule::delete("ens"),
        Rule::delete("ern"),
        Rule::delete("het"),
        Rule::delete("ad"),
        Rule::delete("ar"),
        Rule::delete("as"),
        Rule::delete("at"),
        Rule::delete("en"),
        Rule::delete("er"),
        Rule::delete("es"),
        Rule::delete("or"),
        Rule::delete("a"),
        Rule::delete("e"),
        Rule::delete("s").when(Guard::AfterOneOf(S_ENDINGS)),
    ],
)
.within(Region::R1);

static STEP_3: Stage = Stage::new(
    "step 3",
    &[
        Rule::replace("fullt", "full"),
        Rule::replace("löst", "lös"),
        Rule::delete("lig"),
        Rule::delete("els"),
        Rule::delete("ig"),
    ],
)
.within(Region::R1);

fn steps(word: &mut Word) {
    STEP_1.apply(word);
    undouble(word, Region::R1, &["dd", "gd", "nn", "dt", "gt", "kt", "tt"]);
    STEP_3.apply(word);
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

pub fn swedish_stemmer(word: &str) -> String {
    PROFILE.stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    static TESTS: &[(&str, &str)] = &[
        ("klo", "klo"),
        ("kloaken", "kloak"),
        ("klock", "klock"),
        ("klocka", "klock"),
        ("klockan", "klockan"),
        ("klockans", "klockan"),
        ("klockare", "klock"),
        ("klockaren", "klock"),
        ("klockarens", "klock"),
        ("klockarfar", "klockarf"),
        ("klockarn", "klockarn"),
        ("klockarsonen", "klockarson"),
        ("klockas", "klock"),
        ("klockkedjan", "klockkedjan"),
        ("klocklikt", "klocklik"),
        ("klockor", "klock"),
        ("klockorna", "klock"),
        ("klok", "klok"),
        ("kloka", "klok"),
        ("klokare", "klok"),
        ("klokast", "klok"),
        ("klokaste", "klok"),
        ("kloke", "klok"),
        ("klokhet", "klok"),
        ("klokheten", "klok"),
        ("bilar", "bil"),
        ("bilarna", "bil"),
        ("bilen", "bil"),
        ("Bilens", "bil"),
        ("Semesterlagen", "semesterlag"),
        ("Ansvarslöst", "ansvarslös"),
        ("Ansvarsfullt", "ansvarsfull"),
        ("RAKARE", "rak"),
        ("JAPANSKA", "japansk"),
        ("Mallen", "mall"),
        ("1990", "1990"),
        ("Och", "och"),
        ("Utan", "utan"),
    ];

    #[test]
    fn test_swedish() {
        for (string, expected) in TESTS {
            assert_eq!(swedish_stemmer(string), *expected, "{}", string);
        }
    }

    #[test]
    fn test_idempotence() {
        for (_, stem) in TESTS {
            assert_eq!(swedish_stemmer(stem), *stem, "{}", stem);
        }
    }
}
