// Reference:
// https://snowballstem.org/algorithms/italian/stemmer.html
use enumset::enum_set;

use crate::stemmers::classify::Promotion;
use crate::stemmers::profile::Profile;
use crate::stemmers::regions::{RegionRules, RvVariant};
use crate::stemmers::rules::{Guard, Region, Rule, Stage};
use crate::stemmers::word::Word;

static VOWELS: &str = "aeiouàèìòù";
static AEIO: &str = "aeioàèìò";
static VERB_FORMS: [&str; 5] = ["ando", "endo", "ar", "er", "ir"];

fn verb_form_in_rv(word: &Word, start: usize) -> bool {
    VERB_FORMS
        .iter()
        .find_map(|form| word.match_before(start, form))
        .is_some_and(|form_start| word.in_region(Region::Rv, form_start))
}

/// Gerunds lose the pronoun, infinitives get their final `e` back.
fn drop_pronoun(word: &mut Word, start: usize) {
    if word.preceded_by(start, "ando") || word.preceded_by(start, "endo") {
        word.truncate(start);
    } else {
        word.replace_from(start, "e");
    }
}

const fn pronoun(suffix: &'static str) -> Rule {
    Rule::edit(suffix, drop_pronoun).when(Guard::Check(verb_form_in_rv))
}

static ATTACHED_PRONOUN: Stage = Stage::new(
    "attached pronoun",
    &[
        pronoun("gliela"),
        pronoun("gliele"),
        pronoun("glieli"),
        pronoun("glielo"),
        pronoun("gliene"),
        pronoun("sene"),
        pronoun("mela"),
        pronoun("mele"),
        pronoun("meli"),
        pronoun("melo"),
        pronoun("mene"),
        pronoun("tela"),
        pronoun("tele"),
        pronoun("teli"),
        pronoun("telo"),
        pronoun("tene"),
        pronoun("cela"),
        pronoun("cele"),
        pronoun("celi"),
        pronoun("celo"),
        pronoun("cene"),
        pronoun("vela"),
        pronoun("vele"),
        pronoun("veli"),
        pronoun("velo"),
        pronoun("vene"),
        pronoun("gli"),
        pronoun("ci"),
        pronoun("la"),
        pronoun("le"),
        pronoun("li"),
        pronoun("lo"),
        pronoun("mi"),
        pronoun("ne"),
        pronoun("si"),
        pronoun("ti"),
        pronoun("vi"),
    ],
);

fn drop_in_r2(word: &mut Word, suffix: &str) -> bool {
    match word.suffix_start(suffix) {
        Some(start) if word.in_region(Region::R2, start) => {
            word.truncate(start);
            true
        }
        _ => false,
    }
}

fn drop_ic(word: &mut Word) {
    drop_in_r2(word, "ic");
}

fn drop_at(word: &mut Word) {
    drop_in_r2(word, "at");
}

fn drop_at_then_ic(word: &mut Word) {
    if drop_in_r2(word, "at") {
        drop_in_r2(word, "ic");
    }
}

static AFTER_AMENTE: Stage = Stage::new(
    "after amente",
    &[
        Rule::delete("abil").within(Region::R2),
        Rule::then("iv", drop_at).within(Region::R2),
        Rule::delete("os").within(Region::R2),
        Rule::delete("ic").within(Region::R2),
    ],
);

static AFTER_ITA: Stage = Stage::new(
    "after ità",
    &[
        Rule::delete("abil").within(Region::R2),
        Rule::delete("ic").within(Region::R2),
        Rule::delete("iv").within(Region::R2),
    ],
);

fn after_amente(word: &mut Word) {
    AFTER_AMENTE.apply(word);
}

fn after_ita(word: &mut Word) {
    AFTER_ITA.apply(word);
}

const fn r2(suffix: &'static str) -> Rule {
    Rule::delete(suffix).within(Region::R2)
}

static STANDARD_SUFFIX: Stage = Stage::new(
    "standard suffix",
    &[
        r2("atrice"),
        r2("atrici"),
        Rule::then("azione", drop_ic).within(Region::R2),
        Rule::then("azioni", drop_ic).within(Region::R2),
        Rule::replace("uzione", "u").within(Region::R2),
        Rule::replace("uzioni", "u").within(Region::R2),
        Rule::replace("usione", "u").within(Region::R2),
        Rule::replace("usioni", "u").within(Region::R2),
        Rule::delete("amento").within(Region::Rv),
        Rule::delete("amenti").within(Region::Rv),
        Rule::delete("imento").within(Region::Rv),
        Rule::delete("imenti").within(Region::Rv),
        Rule::then("amente", after_amente).within(Region::R1),
        r2("abile"),
        r2("abili"),
        r2("ibile"),
        r2("ibili"),
        r2("mente"),
        Rule::then("atore", drop_ic).within(Region::R2),
        Rule::then("atori", drop_ic).within(Region::R2),
        Rule::replace("logia", "log").within(Region::R2),
        Rule::replace("logie", "log").within(Region::R2),
        r2("anza"),
        r2("anze"),
        r2("iche"),
        r2("ichi"),
        r2("ismo"),
        r2("ismi"),
        r2("ista"),
        r2("iste"),
        r2("isti"),
        r2("istà"),
        r2("istè"),
        r2("istì"),
        r2("ante"),
        r2("anti"),
        Rule::replace("enza", "ente").within(Region::R2),
        Rule::replace("enze", "ente").within(Region::R2),
        r2("ico"),
        r2("ici"),
        r2("ica"),
        r2("ice"),
        r2("oso"),
        r2("osi"),
        r2("osa"),
        r2("ose"),
        Rule::then("ità", after_ita).within(Region::R2),
        Rule::then("ivo", drop_at_then_ic).within(Region::R2),
        Rule::then("ivi", drop_at_then_ic).within(Region::R2),
        Rule::then("iva", drop_at_then_ic).within(Region::R2),
        Rule::then("ive", drop_at_then_ic).within(Region::R2),
    ],
);

static VERB_SUFFIX: Stage = Stage::new(
    "verb suffix",
    &[
        Rule::delete("erebbero"),
        Rule::delete("irebbero"),
        Rule::delete("assero"),
        Rule::delete("assimo"),
        Rule::delete("eranno"),
        Rule::delete("erebbe"),
        Rule::delete("eremmo"),
        Rule::delete("ereste"),
        Rule::delete("eresti"),
        Rule::delete("essero"),
        Rule::delete("iranno"),
        Rule::delete("irebbe"),
        Rule::delete("iremmo"),
        Rule::delete("ireste"),
        Rule::delete("iresti"),
        Rule::delete("iscano"),
        Rule::delete("iscono"),
        Rule::delete("issero"),
        Rule::delete("arono"),
        Rule::delete("avamo"),
        Rule::delete("avano"),
        Rule::delete("avate"),
        Rule::delete("eremo"),
        Rule::delete("erete"),
        Rule::delete("erono"),
        Rule::delete("evamo"),
        Rule::delete("evano"),
        Rule::delete("evate"),
        Rule::delete("iremo"),
        Rule::delete("irete"),
        Rule::delete("irono"),
        Rule::delete("ivamo"),
        Rule::delete("ivano"),
        Rule::delete("ivate"),
        Rule::delete("ammo"),
        Rule::delete("ando"),
        Rule::delete("asse"),
        Rule::delete("assi"),
        Rule::delete("emmo"),
        Rule::delete("enda"),
        Rule::delete("ende"),
        Rule::delete("endi"),
        Rule::delete("endo"),
        Rule::delete("erai"),
        Rule::delete("erei"),
        Rule::delete("iamo"),
        Rule::delete("immo"),
        Rule::delete("irai"),
        Rule::delete("irei"),
        Rule::delete("isca"),
        Rule::delete("isce"),
        Rule::delete("isci"),
        Rule::delete("isco"),
        Rule::delete("ano"),
        Rule::delete("are"),
        Rule::delete("ata"),
        Rule::delete("ate"),
        Rule::delete("ati"),
        Rule::delete("ato"),
        Rule::delete("ava"),
        Rule::delete("avi"),
        Rule::delete("avo"),
        Rule::delete("erà"),
        Rule::delete("ere"),
        Rule::delete("erò"),
        Rule::delete("ete"),
        Rule::delete("eva"),
        Rule::delete("evi"),
        Rule::delete("evo"),
        Rule::delete("irà"),
        Rule::delete("ire"),
        Rule::delete("irò"),
        Rule::delete("ita"),
        Rule::delete("ite"),
        Rule::delete("iti"),
        Rule::delete("ito"),
        Rule::delete("iva"),
        Rule::delete("ivi"),
        Rule::delete("ivo"),
        Rule::delete("ono"),
        Rule::delete("uta"),
        Rule::delete("ute"),
        Rule::delete("uti"),
        Rule::delete("uto"),
        Rule::delete("ar"),
        Rule::delete("ir"),
    ],
)
.within(Region::Rv);

fn vowel_suffix(word: &mut Word) {
    let final_vowel = word.last().is_some_and(|c| AEIO.contains(c))
        && word.in_region(Region::Rv, word.len() - 1);

    if final_vowel {
        word.pop();

        if word.last() == Some('i') && word.in_region(Region::Rv, word.len() - 1) {
            word.pop();
        }
    }

    if let Some(start) = word.suffix_start("h") {
        if matches!(word.char_before(start), Some('c' | 'g')) && word.in_region(Region::Rv, start - 1)
        {
            word.pop();
        }
    }
}

fn acute_to_grave(chars: &mut Vec<char>) {
    for c in chars.iter_mut() {
        *c = match *c {
            'á' => 'à',
            'é' => 'è',
            'í' => 'ì',
            'ó' => 'ò',
            'ú' => 'ù',
            other => other,
        };
    }
}

fn steps(word: &mut Word) {
    ATTACHED_PRONOUN.apply(word);

    if STANDARD_SUFFIX.apply(word).is_none() {
        VERB_SUFFIX.apply(word);
    }

    vowel_suffix(word);
}

pub static PROFILE: Profile = Profile {
    vowels: VOWELS,
    promotions: enum_set!(
        Promotion::UAfterQ | Promotion::UBetweenVowels | Promotion::IBetweenVowels
    ),
    regions: RegionRules::with_rv(RvVariant::Standard),
    min_len: 0,
    prelude: Some(acute_to_grave),
    steps,
    postlude: None,
};

pub fn italian_stemmer(word: &str) -> String {
    PROFILE.stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    static TESTS: &[(&str, &str)] = &[
        ("abbandonata", "abbandon"),
        ("abbandonato", "abbandon"),
        ("parlando", "parl"),
        ("mangiarlo", "mang"),
        ("velocemente", "veloc"),
        ("amiche", "amic"),
        ("è", "è"),
    ];

    #[test]
    fn test_italian() {
        for (string, expected) in TESTS {
            assert_eq!(italian_stemmer(string), *expected, "{}", string);
        }
    }

    #[test]
    fn test_idempotence() {
        for (_, stem) in TESTS {
            assert_eq!(italian_stemmer(stem), *stem, "{}", stem);
        }
    }

    #[test]
    fn test_prelude() {
        assert_eq!(PROFILE.prepare("perché").to_string(), "perchè");
        assert_eq!(PROFILE.prepare("acquaio").to_string(), "acqUaIo");
    }
}
