// Reference:
// https://snowballstem.org/algorithms/finnish/stemmer.html
use enumset::EnumSet;

use crate::stemmers::profile::Profile;
use crate::stemmers::regions::RegionRules;
use crate::stemmers::rules::{Guard, Region, Rule, Stage};
use crate::stemmers::word::Word;

static VOWELS: &str = "aeiouyäö";
static PARTICLE_ENDS: &str = "aeiouyäönt";
static CONSONANTS: &str = "bcdfghjklmnpqrstvwxz";
static AEI: &str = "aäei";
static V2: &str = "aeiouäö";
static LONG_VOWELS: [&str; 7] = ["aa", "ee", "ii", "oo", "uu", "ää", "öö"];

fn long_vowel_before(word: &Word, end: usize) -> bool {
    LONG_VOWELS.iter().any(|pair| word.preceded_by(end, pair))
}

/// An `i` preceded by a vowel.
fn vi_before(word: &Word, end: usize) -> bool {
    word.char_before(end) == Some('i')
        && end
            .checked_sub(2)
            .and_then(|i| word.char_at(i))
            .is_some_and(|c| V2.contains(c))
}

static PARTICLES: Stage = Stage::new(
    "particles",
    &[
        Rule::delete("kaan").when(Guard::AfterOneOf(PARTICLE_ENDS)),
        Rule::delete("kään").when(Guard::AfterOneOf(PARTICLE_ENDS)),
        Rule::delete("kin").when(Guard::AfterOneOf(PARTICLE_ENDS)),
        Rule::delete("han").when(Guard::AfterOneOf(PARTICLE_ENDS)),
        Rule::delete("hän").when(Guard::AfterOneOf(PARTICLE_ENDS)),
        Rule::delete("sti").within(Region::R2),
        Rule::delete("ko").when(Guard::AfterOneOf(PARTICLE_ENDS)),
        Rule::delete("kö").when(Guard::AfterOneOf(PARTICLE_ENDS)),
        Rule::delete("pa").when(Guard::AfterOneOf(PARTICLE_ENDS)),
        Rule::delete("pä").when(Guard::AfterOneOf(PARTICLE_ENDS)),
    ],
)
.within(Region::R1);

fn after_a_case(word: &Word, start: usize) -> bool {
    ["ssa", "sta", "lla", "lta", "ta", "na"]
        .iter()
        .any(|case| word.preceded_by(start, case))
}

fn after_a_umlaut_case(word: &Word, start: usize) -> bool {
    ["ssä", "stä", "llä", "ltä", "tä", "nä"]
        .iter()
        .any(|case| word.preceded_by(start, case))
}

fn after_lle_ine(word: &Word, start: usize) -> bool {
    word.preceded_by(start, "lle") || word.preceded_by(start, "ine")
}

fn kse_to_ksi(word: &mut Word) {
    if let Some(start) = word.suffix_start("kse") {
        word.replace_from(start, "ksi");
    }
}

static POSSESSIVES: Stage = Stage::new(
    "possessives",
    &[
        Rule::delete("nsa"),
        Rule::delete("nsä"),
        Rule::delete("mme"),
        Rule::delete("nne"),
        Rule::delete("si").when(Guard::NotAfter("k")),
        Rule::then("ni", kse_to_ksi),
        Rule::delete("an").when(Guard::Check(after_a_case)),
        Rule::delete("än").when(Guard::Check(after_a_umlaut_case)),
        Rule::delete("en").when(Guard::Check(after_lle_ine)),
    ],
)
.within(Region::R1);

/// Genitive or illative `n`, taking along the last vowel of a long vowel
/// or of an `ie` before it.
fn drop_n(word: &mut Word, start: usize) {
    if long_vowel_before(word, start) || word.preceded_by(start, "ie") {
        word.truncate(start - 1);
    } else {
        word.truncate(start);
    }
}

fn drop_after_vi(word: &mut Word, start: usize) {
    if vi_before(word, start) {
        word.truncate(start);
    } else {
        drop_n(word, word.len() - 1);
    }
}

fn drop_after_long_vowel(word: &mut Word, start: usize) {
    if long_vowel_before(word, start) {
        word.truncate(start);
    } else {
        drop_n(word, word.len() - 1);
    }
}

/// Partitive `a` or `ä` following a consonant and a vowel, as in `taloa`.
fn after_consonant_and_vowel(word: &Word, start: usize) -> bool {
    start >= 2
        && word
            .char_at(start - 2)
            .is_some_and(|c| CONSONANTS.contains(c))
        && word.is_vowel_at(start - 1)
}

static CASES: Stage = Stage::new(
    "cases",
    &[
        Rule::edit("siin", drop_after_vi),
        Rule::edit("seen", drop_after_long_vowel),
        Rule::edit("tten", drop_after_vi),
        Rule::delete("han").when(Guard::After("a")),
        Rule::delete("hen").when(Guard::After("e")),
        Rule::delete("hin").when(Guard::After("i")),
        Rule::delete("hon").when(Guard::After("o")),
        Rule::delete("hän").when(Guard::After("ä")),
        Rule::delete("hön").when(Guard::After("ö")),
        Rule::edit("den", drop_after_vi),
        Rule::delete("tta").when(Guard::After("e")),
        Rule::delete("ttä").when(Guard::After("e")),
        Rule::delete("ssa"),
        Rule::delete("ssä"),
        Rule::delete("sta"),
        Rule::delete("stä"),
        Rule::delete("lla"),
        Rule::delete("llä"),
        Rule::delete("lta"),
        Rule::delete("ltä"),
        Rule::delete("lle"),
        Rule::delete("ksi"),
        Rule::delete("ine"),
        Rule::delete("ta"),
        Rule::delete("tä"),
        Rule::delete("na"),
        Rule::delete("nä"),
        Rule::edit("n", drop_n),
        Rule::delete("a").when(Guard::Check(after_consonant_and_vowel)),
        Rule::delete("ä").when(Guard::Check(after_consonant_and_vowel)),
    ],
)
.within(Region::R1);

static OTHER_ENDINGS: Stage = Stage::new(
    "other endings",
    &[
        Rule::delete("impi"),
        Rule::delete("impa"),
        Rule::delete("impä"),
        Rule::delete("immi"),
        Rule::delete("imma"),
        Rule::delete("immä"),
        Rule::delete("mpi").when(Guard::NotAfter("po")),
        Rule::delete("mpa").when(Guard::NotAfter("po")),
        Rule::delete("mpä").when(Guard::NotAfter("po")),
        Rule::delete("mmi").when(Guard::NotAfter("po")),
        Rule::delete("mma").when(Guard::NotAfter("po")),
        Rule::delete("mmä").when(Guard::NotAfter("po")),
        Rule::delete("eja"),
        Rule::delete("ejä"),
    ],
)
.within(Region::R2);

static I_PLURAL: Stage =
    Stage::new("i plural", &[Rule::delete("i"), Rule::delete("j")]).within(Region::R1);

static T_PLURAL_MMA: Stage = Stage::new(
    "t plural",
    &[
        Rule::delete("imma"),
        Rule::delete("mma").when(Guard::NotAfter("po")),
    ],
)
.within(Region::R2);

fn t_plural(word: &mut Word) {
    let Some(start) = word.suffix_start("t") else {
        return;
    };

    if start == 0 || !word.in_region(Region::R1, start - 1) || !word.is_vowel_at(start - 1) {
        return;
    }

    word.truncate(start);
    T_PLURAL_MMA.apply(word);
}

/// Whether the last `n` characters all lie in R1.
fn tail_in_r1(word: &Word, n: usize) -> bool {
    word.len()
        .checked_sub(n)
        .is_some_and(|start| word.in_region(Region::R1, start))
}

fn tidy(word: &mut Word) {
    if tail_in_r1(word, 2) && long_vowel_before(word, word.len()) {
        word.pop();
    }

    if tail_in_r1(word, 2)
        && word.last().is_some_and(|c| AEI.contains(c))
        && word
            .char_before(word.len() - 1)
            .is_some_and(|c| CONSONANTS.contains(c))
    {
        word.pop();
    }

    if tail_in_r1(word, 2) && (word.ends_with("oj") || word.ends_with("uj")) {
        word.pop();
    }

    if tail_in_r1(word, 2) && word.ends_with("jo") {
        word.pop();
    }

    // Undouble the last consonant, wherever it stands.
    let Some(i) = word.chars().iter().rposition(|&c| !word.is_vowel(c)) else {
        return;
    };

    if let Some(c) = word.char_at(i) {
        if CONSONANTS.contains(c) && word.char_before(i) == Some(c) {
            word.remove(i);
        }
    }
}

fn steps(word: &mut Word) {
    PARTICLES.apply(word);
    POSSESSIVES.apply(word);

    let ending_removed = CASES.apply(word).is_some();

    OTHER_ENDINGS.apply(word);

    if ending_removed {
        I_PLURAL.apply(word);
    } else {
        t_plural(word);
    }

    tidy(word);
}

pub static PROFILE: Profile = Profile {
    vowels: VOWELS,
    promotions: EnumSet::empty(),
    regions: RegionRules::BASIC,
    min_len: 0,
    prelude: None,
    steps,
    postlude: None,
};

pub fn finnish_stemmer(word: &str) -> String {
    PROFILE.stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    static TESTS: &[(&str, &str)] = &[
        ("talossa", "talo"),
        ("taloon", "talo"),
        ("autoissa", "auto"),
        ("kirjassa", "kirj"),
        ("talossakin", "talo"),
        ("taloissamme", "talo"),
        ("kaupungissa", "kaupung"),
        ("kirjani", "kirj"),
        ("ja", "ja"),
        ("taloa", "talo"),
        ("lasia", "las"),
        ("kukkia", "kuk"),
        ("maita", "maita"),
        ("työtä", "työtä"),
        ("dimleraviä", "dimlerav"),
        ("ööjä", "ööjä"),
        ("kirjamme", "kirj"),
        ("talossaan", "talo"),
        ("talot", "talo"),
    ];

    #[test]
    fn test_finnish() {
        for (string, expected) in TESTS {
            assert_eq!(finnish_stemmer(string), *expected, "{}", string);
        }
    }

    #[test]
    fn test_idempotence() {
        for (_, stem) in TESTS {
            assert_eq!(finnish_stemmer(stem), *stem, "{}", stem);
        }
    }

    #[test]
    fn test_tidy() {
        let mut word = PROFILE.prepare("kallis");
        word.truncate(5);
        tidy(&mut word);
        assert_eq!(word.to_string(), "kal");
    }
}
