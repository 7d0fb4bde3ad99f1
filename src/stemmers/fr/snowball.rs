// Reference:
// https://snowballstem.org/algorithms/french/stemmer.html
use enumset::enum_set;

use crate::stemmers::classify::Promotion;
use crate::stemmers::profile::Profile;
use crate::stemmers::regions::{RegionRules, RvVariant};
use crate::stemmers::rules::{undouble, Guard, Region, Rule, Stage};
use crate::stemmers::word::Word;

static VOWELS: &str = "aeiouyâàëéêèïîôûù";
static KEEP_WITH_S: &str = "aiouès";

/// Adverb endings edit the word but still let the verb steps run.
static ADVERBS: [&str; 4] = ["amment", "emment", "ment", "ments"];

fn delete_in_r2_or(word: &mut Word, start: usize, with: &str) {
    if word.in_region(Region::R2, start) {
        word.truncate(start);
    } else {
        word.replace_from(start, with);
    }
}

fn ic_to_iqu(word: &mut Word) {
    if let Some(start) = word.suffix_start("ic") {
        delete_in_r2_or(word, start, "iqU");
    }
}

fn abil_to_abl(word: &mut Word, start: usize) {
    delete_in_r2_or(word, start, "abl");
}

fn ic_at_to_iqu(word: &mut Word, start: usize) {
    delete_in_r2_or(word, start, "iqU");
}

fn eus_to_eux(word: &mut Word, start: usize) {
    delete_in_r2_or(word, start, "eux");
}

fn drop_at(word: &mut Word) {
    if let Some(start) = word.suffix_start("at") {
        if word.in_region(Region::R2, start) {
            word.truncate(start);
        }
    }
}

fn drop_at_then_ic(word: &mut Word) {
    let Some(start) = word.suffix_start("at") else {
        return;
    };

    if word.in_region(Region::R2, start) {
        word.truncate(start);
        ic_to_iqu(word);
    }
}

static AFTER_EMENT: Stage = Stage::new(
    "after ement",
    &[
        Rule::replace("ièr", "i").within(Region::Rv),
        Rule::replace("Ièr", "i").within(Region::Rv),
        Rule::edit("eus", eus_to_eux).within(Region::R1),
        Rule::delete("abl").within(Region::R2),
        Rule::delete("iqU").within(Region::R2),
        Rule::then("iv", drop_at).within(Region::R2),
    ],
);

static AFTER_ITE: Stage = Stage::new(
    "after ité",
    &[
        Rule::edit("abil", abil_to_abl),
        Rule::edit("ic", ic_at_to_iqu),
        Rule::delete("iv").within(Region::R2),
    ],
);

fn after_ement(word: &mut Word) {
    AFTER_EMENT.apply(word);
}

fn after_ite(word: &mut Word) {
    AFTER_ITE.apply(word);
}

fn vowel_in_rv_before(word: &Word, start: usize) -> bool {
    start > 0 && word.is_vowel_at(start - 1) && word.in_region(Region::Rv, start - 1)
}

static STANDARD_SUFFIX: Stage = Stage::new(
    "standard suffix",
    &[
        Rule::delete("issements")
            .within(Region::R1)
            .when(Guard::AfterConsonant),
        Rule::delete("issement")
            .within(Region::R1)
            .when(Guard::AfterConsonant),
        Rule::then("atrices", ic_to_iqu).within(Region::R2),
        Rule::then("atrice", ic_to_iqu).within(Region::R2),
        Rule::then("ateurs", ic_to_iqu).within(Region::R2),
        Rule::then("ations", ic_to_iqu).within(Region::R2),
        Rule::replace("logies", "log").within(Region::R2),
        Rule::replace("usions", "u").within(Region::R2),
        Rule::replace("utions", "u").within(Region::R2),
        Rule::then("ements", after_ement).within(Region::Rv),
        Rule::replace("amment", "ant").within(Region::Rv),
        Rule::replace("emment", "ent").within(Region::Rv),
        Rule::delete("ances").within(Region::R2),
        Rule::delete("iqUes").within(Region::R2),
        Rule::delete("ismes").within(Region::R2),
        Rule::delete("ables").within(Region::R2),
        Rule::delete("istes").within(Region::R2),
        Rule::then("ateur", ic_to_iqu).within(Region::R2),
        Rule::then("ation", ic_to_iqu).within(Region::R2),
        Rule::replace("logie", "log").within(Region::R2),
        Rule::replace("usion", "u").within(Region::R2),
        Rule::replace("ution", "u").within(Region::R2),
        Rule::replace("ences", "ent").within(Region::R2),
        Rule::then("ement", after_ement).within(Region::Rv),
        Rule::edit("euses", eus_to_eux).within(Region::R1),
        Rule::delete("ments").when(Guard::Check(vowel_in_rv_before)),
        Rule::delete("ance").within(Region::R2),
        Rule::delete("iqUe").within(Region::R2),
        Rule::delete("isme").within(Region::R2),
        Rule::delete("able").within(Region::R2),
        Rule::delete("iste").within(Region::R2),
        Rule::replace("ence", "ent").within(Region::R2),
        Rule::then("ités", after_ite).within(Region::R2),
        Rule::then("ives", drop_at_then_ic).within(Region::R2),
        Rule::replace("eaux", "eau"),
        Rule::edit("euse", eus_to_eux).within(Region::R1),
        Rule::delete("ment").when(Guard::Check(vowel_in_rv_before)),
        Rule::delete("eux").within(Region::R2),
        Rule::then("ité", after_ite).within(Region::R2),
        Rule::then("ive", drop_at_then_ic).within(Region::R2),
        Rule::then("ifs", drop_at_then_ic).within(Region::R2),
        Rule::replace("aux", "al").within(Region::R1),
        Rule::then("if", drop_at_then_ic).within(Region::R2),
    ],
);

fn after_consonant_in_rv(word: &Word, start: usize) -> bool {
    start > 0 && word.is_consonant_at(start - 1) && word.in_region(Region::Rv, start - 1)
}

const fn i_verb(suffix: &'static str) -> Rule {
    Rule::delete(suffix).when(Guard::Check(after_consonant_in_rv))
}

static I_VERB_SUFFIX: Stage = Stage::new(
    "i verb suffix",
    &[
        i_verb("issaIent"),
        i_verb("issantes"),
        i_verb("iraIent"),
        i_verb("issante"),
        i_verb("issants"),
        i_verb("issions"),
        i_verb("irions"),
        i_verb("issais"),
        i_verb("issait"),
        i_verb("issant"),
        i_verb("issent"),
        i_verb("issiez"),
        i_verb("issons"),
        i_verb("irais"),
        i_verb("irait"),
        i_verb("irent"),
        i_verb("iriez"),
        i_verb("irons"),
        i_verb("iront"),
        i_verb("isses"),
        i_verb("issez"),
        i_verb("îmes"),
        i_verb("îtes"),
        i_verb("irai"),
        i_verb("iras"),
        i_verb("irez"),
        i_verb("isse"),
        i_verb("ies"),
        i_verb("ira"),
        i_verb("ît"),
        i_verb("ie"),
        i_verb("ir"),
        i_verb("is"),
        i_verb("it"),
        i_verb("i"),
    ],
)
.within(Region::Rv);

fn drop_e_in_rv(word: &mut Word) {
    if let Some(start) = word.suffix_start("e") {
        if word.in_region(Region::Rv, start) {
            word.truncate(start);
        }
    }
}

const fn a_verb(suffix: &'static str) -> Rule {
    Rule::then(suffix, drop_e_in_rv)
}

static VERB_SUFFIX: Stage = Stage::new(
    "verb suffix",
    &[
        Rule::delete("eraIent"),
        a_verb("assions"),
        Rule::delete("erions"),
        a_verb("assent"),
        a_verb("assiez"),
        Rule::delete("èrent"),
        Rule::delete("erais"),
        Rule::delete("erait"),
        Rule::delete("eriez"),
        Rule::delete("erons"),
        Rule::delete("eront"),
        a_verb("aIent"),
        a_verb("antes"),
        a_verb("asses"),
        Rule::delete("ions").within(Region::R2),
        Rule::delete("erai"),
        Rule::delete("eras"),
        Rule::delete("erez"),
        a_verb("âmes"),
        a_verb("âtes"),
        a_verb("ante"),
        a_verb("ants"),
        a_verb("asse"),
        Rule::delete("ées"),
        Rule::delete("era"),
        Rule::delete("iez"),
        a_verb("ais"),
        a_verb("ait"),
        a_verb("ant"),
        Rule::delete("ée"),
        Rule::delete("és"),
        Rule::delete("er"),
        Rule::delete("ez"),
        a_verb("ât"),
        a_verb("ai"),
        a_verb("as"),
        Rule::delete("é"),
        a_verb("a"),
    ],
)
.within(Region::Rv);

fn after_s_or_t_in_rv(word: &Word, start: usize) -> bool {
    start > 0
        && word.in_region(Region::Rv, start - 1)
        && word.char_before(start).is_some_and(|c| c == 's' || c == 't')
}

fn after_gu_in_rv(word: &Word, start: usize) -> bool {
    start >= 2 && word.in_region(Region::Rv, start - 2) && word.preceded_by(start, "gu")
}

static RESIDUAL_SUFFIX: Stage = Stage::new(
    "residual suffix",
    &[
        Rule::replace("ière", "i"),
        Rule::replace("Ière", "i"),
        Rule::delete("ion")
            .within(Region::R2)
            .when(Guard::Check(after_s_or_t_in_rv)),
        Rule::replace("ier", "i"),
        Rule::replace("Ier", "i"),
        Rule::delete("e"),
        Rule::delete("ë").when(Guard::Check(after_gu_in_rv)),
    ],
)
.within(Region::Rv);

fn residual_suffix(word: &mut Word) {
    if let Some(start) = word.suffix_start("s") {
        if word
            .char_before(start)
            .is_some_and(|c| !KEEP_WITH_S.contains(c))
        {
            word.truncate(start);
        }
    }

    RESIDUAL_SUFFIX.apply(word);
}

fn un_accent(word: &mut Word) {
    let consonants = word
        .chars()
        .iter()
        .rev()
        .take_while(|&&c| !word.is_vowel(c))
        .count();

    if consonants == 0 || consonants >= word.len() {
        return;
    }

    let i = word.len() - consonants - 1;

    if matches!(word.char_at(i), Some('é' | 'è')) {
        word.set(i, 'e');
    }
}

fn steps(word: &mut Word) {
    let standard = STANDARD_SUFFIX
        .apply(word)
        .filter(|rule| !ADVERBS.contains(&rule.suffix));

    let changed = standard.is_some()
        || I_VERB_SUFFIX.apply(word).is_some()
        || VERB_SUFFIX.apply(word).is_some();

    if changed {
        match word.last() {
            Some('Y') => word.replace_from(word.len() - 1, "i"),
            Some('ç') => word.replace_from(word.len() - 1, "c"),
            _ => (),
        }
    } else {
        residual_suffix(word);
    }

    undouble(word, Region::Word, &["enn", "onn", "ett", "ell", "eill"]);
    un_accent(word);
}

pub static PROFILE: Profile = Profile {
    vowels: VOWELS,
    promotions: enum_set!(
        Promotion::UBetweenVowels
            | Promotion::IBetweenVowels
            | Promotion::YAfterVowel
            | Promotion::YBeforeVowel
            | Promotion::UAfterQ
    ),
    regions: RegionRules::with_rv(RvVariant::AfterFirstVowel {
        prefixes: &["par", "col", "tap"],
    }),
    min_len: 0,
    prelude: None,
    steps,
    postlude: None,
};

pub fn french_stemmer(word: &str) -> String {
    PROFILE.stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    static TESTS: &[(&str, &str)] = &[
        ("chevaux", "cheval"),
        ("nationalité", "national"),
        ("aimer", "aim"),
        ("parlaient", "parl"),
        ("continuellement", "continuel"),
        ("rapidement", "rapid"),
        ("finissons", "fin"),
        ("maisons", "maison"),
        ("pièce", "piec"),
        ("", ""),
    ];

    #[test]
    fn test_french() {
        for (string, expected) in TESTS {
            assert_eq!(french_stemmer(string), *expected, "{}", string);
        }
    }

    #[test]
    fn test_idempotence() {
        for (_, stem) in TESTS {
            assert_eq!(french_stemmer(stem), *stem, "{}", stem);
        }
    }

    #[test]
    fn test_prelude() {
        assert_eq!(PROFILE.prepare("jouer").to_string(), "joUer");
        assert_eq!(PROFILE.prepare("quelque").to_string(), "qUelqUe");
        assert_eq!(PROFILE.prepare("yeux").to_string(), "Yeux");
    }
}
