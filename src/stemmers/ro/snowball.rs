// Reference:
// https://snowballstem.org/algorithms/romanian/stemmer.html
use enumset::enum_set;

use crate::stemmers::classify::Promotion;
use crate::stemmers::profile::Profile;
use crate::stemmers::regions::{RegionRules, RvVariant};
use crate::stemmers::rules::{Guard, Region, Rule, Stage};
use crate::stemmers::word::Word;

static VOWELS: &str = "aăâeiîou";

static STEP_0: Stage = Stage::new(
    "step 0",
    &[
        Rule::replace("iilor", "i").within(Region::R1),
        Rule::replace("aţia", "aţi").within(Region::R1),
        Rule::replace("aţie", "aţi").within(Region::R1),
        Rule::replace("atei", "at").within(Region::R1),
        Rule::replace("elor", "e").within(Region::R1),
        Rule::replace("ilor", "i").within(Region::R1),
        Rule::replace("iile", "i").within(Region::R1),
        Rule::delete("ului").within(Region::R1),
        Rule::replace("iua", "i").within(Region::R1),
        Rule::replace("aua", "a").within(Region::R1),
        Rule::replace("ile", "i")
            .within(Region::R1)
            .when(Guard::NotAfter("ab")),
        Rule::replace("ele", "e").within(Region::R1),
        Rule::replace("iei", "i").within(Region::R1),
        Rule::replace("ii", "i").within(Region::R1),
        Rule::replace("ea", "e").within(Region::R1),
        Rule::delete("ul").within(Region::R1),
    ],
);

static COMBO_SUFFIX: Stage = Stage::new(
    "combo suffix",
    &[
        Rule::replace("abilitate", "abil"),
        Rule::replace("abilităţi", "abil"),
        Rule::replace("ibilitate", "ibil"),
        Rule::replace("abilitati", "abil"),
        Rule::replace("abilităi", "abil"),
        Rule::replace("ivităţi", "iv"),
        Rule::replace("icităţi", "ic"),
        Rule::replace("ivitate", "iv"),
        Rule::replace("ivitati", "iv"),
        Rule::replace("icitati", "ic"),
        Rule::replace("icatori", "ic"),
        Rule::replace("icitate", "ic"),
        Rule::replace("itoare", "it"),
        Rule::replace("iţiune", "it"),
        Rule::replace("ivităi", "iv"),
        Rule::replace("icator", "ic"),
        Rule::replace("ătoare", "at"),
        Rule::replace("icităi", "ic"),
        Rule::replace("atoare", "at"),
        Rule::replace("aţiune", "at"),
        Rule::replace("itori", "it"),
        Rule::replace("icală", "ic"),
        Rule::replace("ativa", "at"),
        Rule::replace("icale", "ic"),
        Rule::replace("icala", "ic"),
        Rule::replace("itiva", "it"),
        Rule::replace("icivă", "ic"),
        Rule::replace("icivi", "ic"),
        Rule::replace("icive", "ic"),
        Rule::replace("iciva", "ic"),
        Rule::replace("itive", "it"),
        Rule::replace("ative", "at"),
        Rule::replace("ativi", "at"),
        Rule::replace("ativă", "at"),
        Rule::replace("itivi", "it"),
        Rule::replace("atori", "at"),
        Rule::replace("itivă", "it"),
        Rule::replace("ători", "at"),
        Rule::replace("icali", "ic"),
        Rule::replace("ativ", "at"),
        Rule::replace("ical", "ic"),
        Rule::replace("iciv", "ic"),
        Rule::replace("ator", "at"),
        Rule::replace("ător", "at"),
        Rule::replace("itiv", "it"),
        Rule::replace("itor", "it"),
    ],
)
.within(Region::R1);

const fn r2(suffix: &'static str) -> Rule {
    Rule::delete(suffix).within(Region::R2)
}

const fn ist(suffix: &'static str) -> Rule {
    Rule::replace(suffix, "ist").within(Region::R2)
}

/// Replaces `ţiune` and `ţiuni` by `t`.
fn cedilla_t(word: &mut Word, start: usize) {
    word.replace_from(start - 1, "t");
}

static STANDARD_SUFFIX: Stage = Stage::new(
    "standard suffix",
    &[
        r2("ibile"),
        r2("abila"),
        r2("abile"),
        r2("abili"),
        r2("abilă"),
        r2("ibila"),
        r2("itati"),
        r2("ibili"),
        r2("ibilă"),
        r2("atori"),
        r2("itate"),
        r2("ităţi"),
        r2("oasă"),
        r2("oasa"),
        Rule::edit("iuni", cedilla_t)
            .within(Region::R2)
            .when(Guard::After("ţ")),
        r2("abil"),
        r2("ităi"),
        ist("isme"),
        ist("işti"),
        Rule::edit("iune", cedilla_t)
            .within(Region::R2)
            .when(Guard::After("ţ")),
        r2("ator"),
        r2("antă"),
        r2("anti"),
        r2("ante"),
        r2("anta"),
        r2("ibil"),
        ist("ista"),
        ist("iste"),
        ist("isti"),
        r2("oase"),
        ist("istă"),
        r2("ica"),
        r2("uta"),
        r2("ive"),
        r2("ivi"),
        r2("ivă"),
        r2("ant"),
        r2("oşi"),
        r2("osi"),
        r2("iva"),
        r2("ata"),
        ist("ism"),
        ist("ist"),
        r2("ică"),
        r2("ici"),
        r2("ice"),
        r2("ată"),
        r2("ate"),
        r2("ite"),
        r2("iti"),
        r2("ită"),
        r2("ita"),
        r2("ati"),
        r2("ute"),
        r2("uti"),
        r2("ută"),
        r2("iv"),
        r2("os"),
        r2("ic"),
        r2("it"),
        r2("ut"),
        r2("at"),
    ],
);

fn after_consonant_or_u_in_rv(word: &Word, start: usize) -> bool {
    start > 0
        && word.in_region(Region::Rv, start - 1)
        && (word.is_consonant_at(start - 1) || word.char_before(start) == Some('u'))
}

const fn verb(suffix: &'static str) -> Rule {
    Rule::delete(suffix).when(Guard::Check(after_consonant_or_u_in_rv))
}

static VERB_SUFFIX: Stage = Stage::new(
    "verb suffix",
    &[
        Rule::delete("seserăţi"),
        verb("âserăţi"),
        Rule::delete("seserăm"),
        verb("userăţi"),
        verb("iserăţi"),
        verb("aserăţi"),
        verb("iserăm"),
        Rule::delete("seseşi"),
        verb("userăm"),
        Rule::delete("serăţi"),
        verb("âserăm"),
        Rule::delete("seseră"),
        verb("aserăm"),
        verb("urăţi"),
        verb("irăţi"),
        Rule::delete("serăm"),
        verb("ârăţi"),
        verb("aseşi"),
        verb("âseră"),
        verb("useşi"),
        verb("aseră"),
        verb("iseşi"),
        verb("iseră"),
        verb("useră"),
        verb("ească"),
        verb("âseşi"),
        verb("arăţi"),
        Rule::delete("sesem"),
        verb("usem"),
        verb("iaţi"),
        verb("indu"),
        verb("âsem"),
        Rule::delete("seră"),
        verb("irăm"),
        verb("ăşte"),
        verb("ăşti"),
        Rule::delete("sese"),
        verb("isem"),
        verb("urăm"),
        verb("eaţi"),
        verb("eşte"),
        verb("eşti"),
        verb("arăm"),
        verb("asem"),
        verb("ârăm"),
        Rule::delete("seşi"),
        verb("ează"),
        verb("ându"),
        verb("âse"),
        verb("use"),
        verb("ând"),
        Rule::delete("aţi"),
        verb("ind"),
        verb("ise"),
        Rule::delete("eţi"),
        verb("âre"),
        Rule::delete("iţi"),
        verb("ăsc"),
        verb("ase"),
        Rule::delete("âţi"),
        verb("âră"),
        verb("ere"),
        verb("âşi"),
        verb("esc"),
        verb("iră"),
        verb("işi"),
        verb("ură"),
        Rule::delete("sei"),
        verb("uşi"),
        verb("ară"),
        verb("ire"),
        verb("aşi"),
        verb("ezi"),
        verb("iau"),
        verb("are"),
        verb("iai"),
        verb("iam"),
        verb("eau"),
        verb("eze"),
        verb("eai"),
        verb("eam"),
        Rule::delete("ăm"),
        Rule::delete("em"),
        Rule::delete("im"),
        Rule::delete("âm"),
        verb("âi"),
        verb("ui"),
        verb("ez"),
        verb("ea"),
        verb("au"),
        verb("ai"),
        verb("am"),
        Rule::delete("se"),
        verb("ia"),
    ],
)
.within(Region::Rv);

static VOWEL_SUFFIX: Stage = Stage::new(
    "vowel suffix",
    &[
        Rule::delete("ie").within(Region::Rv),
        Rule::delete("a").within(Region::Rv),
        Rule::delete("e").within(Region::Rv),
        Rule::delete("i").within(Region::Rv),
        Rule::delete("ă").within(Region::Rv),
    ],
);

/// Folds the comma-below letters onto the cedilla ones the tables use.
fn normalize_cedillas(chars: &mut Vec<char>) {
    for c in chars.iter_mut() {
        *c = match *c {
            'ș' => 'ş',
            'ț' => 'ţ',
            other => other,
        };
    }
}

fn steps(word: &mut Word) {
    STEP_0.apply(word);

    let combined = COMBO_SUFFIX.repeat(word);
    let removed = STANDARD_SUFFIX.apply(word).is_some();

    if !combined && !removed {
        VERB_SUFFIX.apply(word);
    }

    VOWEL_SUFFIX.apply(word);
}

pub static PROFILE: Profile = Profile {
    vowels: VOWELS,
    promotions: enum_set!(Promotion::UBetweenVowels | Promotion::IBetweenVowels),
    regions: RegionRules::with_rv(RvVariant::Standard),
    min_len: 0,
    prelude: Some(normalize_cedillas),
    steps,
    postlude: None,
};

pub fn romanian_stemmer(word: &str) -> String {
    PROFILE.stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    static TESTS: &[(&str, &str)] = &[
        ("frumoasă", "frumoas"),
        ("casa", "cas"),
        ("copiilor", "cop"),
        ("naționalitate", "naţional"),
        ("lucrează", "lucr"),
        ("relativitate", "relat"),
        ("emoţiune", "emot"),
    ];

    #[test]
    fn test_romanian() {
        for (string, expected) in TESTS {
            assert_eq!(romanian_stemmer(string), *expected, "{}", string);
        }
    }

    #[test]
    fn test_idempotence() {
        for (_, stem) in TESTS {
            assert_eq!(romanian_stemmer(stem), *stem, "{}", stem);
        }
    }
}
