// Reference:
// https://snowballstem.org/algorithms/spanish/stemmer.html
use enumset::EnumSet;

use crate::stemmers::profile::{strip_accents, Profile};
use crate::stemmers::regions::{RegionRules, RvVariant};
use crate::stemmers::rules::{Guard, Region, Rule, Stage};
use crate::stemmers::word::Word;

static VOWELS: &str = "aeiouáéíóúü";

/// Verb forms a pronoun can be attached to, with what they become once the
/// pronoun is gone. Forms mapped to `None` are kept as is.
static VERB_FORMS: [(&str, Option<&str>); 11] = [
    ("iéndo", Some("iendo")),
    ("iendo", None),
    ("yendo", None),
    ("ándo", Some("ando")),
    ("ando", None),
    ("ár", Some("ar")),
    ("ér", Some("er")),
    ("ír", Some("ir")),
    ("ar", None),
    ("er", None),
    ("ir", None),
];

fn verb_form_before(word: &Word, start: usize) -> Option<(usize, &'static str, Option<&'static str>)> {
    VERB_FORMS.iter().find_map(|&(form, with)| {
        word.match_before(start, form)
            .map(|form_start| (form_start, form, with))
    })
}

fn verb_form_in_rv(word: &Word, start: usize) -> bool {
    match verb_form_before(word, start) {
        Some((form_start, "yendo", _)) => {
            word.in_region(Region::Rv, form_start) && word.preceded_by(form_start, "u")
        }
        Some((form_start, _, _)) => word.in_region(Region::Rv, form_start),
        None => false,
    }
}

fn drop_pronoun(word: &mut Word, start: usize) {
    match verb_form_before(word, start) {
        Some((form_start, _, Some(with))) => word.replace_from(form_start, with),
        _ => word.truncate(start),
    }
}

const fn pronoun(suffix: &'static str) -> Rule {
    Rule::edit(suffix, drop_pronoun).when(Guard::Check(verb_form_in_rv))
}

static ATTACHED_PRONOUN: Stage = Stage::new(
    "attached pronoun",
    &[
        pronoun("selas"),
        pronoun("selos"),
        pronoun("sela"),
        pronoun("selo"),
        pronoun("las"),
        pronoun("les"),
        pronoun("los"),
        pronoun("nos"),
        pronoun("me"),
        pronoun("se"),
        pronoun("la"),
        pronoun("le"),
        pronoun("lo"),
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

static AFTER_AMENTE: Stage = Stage::new(
    "after amente",
    &[
        Rule::then("iv", drop_at).within(Region::R2),
        Rule::delete("os").within(Region::R2),
        Rule::delete("ic").within(Region::R2),
        Rule::delete("ad").within(Region::R2),
    ],
);

static AFTER_MENTE: Stage = Stage::new(
    "after mente",
    &[
        Rule::delete("ante").within(Region::R2),
        Rule::delete("able").within(Region::R2),
        Rule::delete("ible").within(Region::R2),
    ],
);

static AFTER_IDAD: Stage = Stage::new(
    "after idad",
    &[
        Rule::delete("abil").within(Region::R2),
        Rule::delete("ic").within(Region::R2),
        Rule::delete("iv").within(Region::R2),
    ],
);

fn after_amente(word: &mut Word) {
    AFTER_AMENTE.apply(word);
}

fn after_mente(word: &mut Word) {
    AFTER_MENTE.apply(word);
}

fn after_idad(word: &mut Word) {
    AFTER_IDAD.apply(word);
}

const fn r2(suffix: &'static str) -> Rule {
    Rule::delete(suffix).within(Region::R2)
}

const fn r2_ic(suffix: &'static str) -> Rule {
    Rule::then(suffix, drop_ic).within(Region::R2)
}

static STANDARD_SUFFIX: Stage = Stage::new(
    "standard suffix",
    &[
        r2("amientos"),
        r2("imientos"),
        r2("amiento"),
        r2("imiento"),
        r2_ic("aciones"),
        Rule::replace("uciones", "u").within(Region::R2),
        r2_ic("adoras"),
        r2_ic("adores"),
        r2_ic("ancias"),
        Rule::replace("logías", "log").within(Region::R2),
        Rule::replace("encias", "ente").within(Region::R2),
        Rule::then("amente", after_amente).within(Region::R1),
        Rule::then("idades", after_idad).within(Region::R2),
        r2("anzas"),
        r2("ismos"),
        r2("ables"),
        r2("ibles"),
        r2("istas"),
        r2_ic("adora"),
        r2_ic("ación"),
        r2_ic("antes"),
        r2_ic("ancia"),
        Rule::replace("logía", "log").within(Region::R2),
        Rule::replace("ución", "u").within(Region::R2),
        Rule::replace("encia", "ente").within(Region::R2),
        Rule::then("mente", after_mente).within(Region::R2),
        r2("anza"),
        r2("icos"),
        r2("icas"),
        r2("ismo"),
        r2("able"),
        r2("ible"),
        r2("ista"),
        r2("osos"),
        r2("osas"),
        r2_ic("ador"),
        r2_ic("ante"),
        Rule::then("idad", after_idad).within(Region::R2),
        Rule::then("ivas", drop_at).within(Region::R2),
        Rule::then("ivos", drop_at).within(Region::R2),
        r2("ico"),
        r2("ica"),
        r2("oso"),
        r2("osa"),
        Rule::then("iva", drop_at).within(Region::R2),
        Rule::then("ivo", drop_at).within(Region::R2),
    ],
);

const fn y_verb(suffix: &'static str) -> Rule {
    Rule::delete(suffix).when(Guard::After("u"))
}

static Y_VERB_SUFFIX: Stage = Stage::new(
    "y verb suffix",
    &[
        y_verb("yeron"),
        y_verb("yendo"),
        y_verb("yamos"),
        y_verb("yais"),
        y_verb("yan"),
        y_verb("yen"),
        y_verb("yas"),
        y_verb("yes"),
        y_verb("ya"),
        y_verb("ye"),
        y_verb("yo"),
        y_verb("yó"),
    ],
)
.within(Region::Rv);

/// Deletes the suffix along with the `u` of a preceding `gu`.
fn drop_with_gu(word: &mut Word, start: usize) {
    if word.preceded_by(start, "gu") {
        word.truncate(start - 1);
    } else {
        word.truncate(start);
    }
}

static VERB_SUFFIX: Stage = Stage::new(
    "verb suffix",
    &[
        Rule::delete("aríamos"),
        Rule::delete("eríamos"),
        Rule::delete("iríamos"),
        Rule::delete("iéramos"),
        Rule::delete("iésemos"),
        Rule::delete("aríais"),
        Rule::delete("eríais"),
        Rule::delete("iríais"),
        Rule::delete("ierais"),
        Rule::delete("ieseis"),
        Rule::delete("asteis"),
        Rule::delete("isteis"),
        Rule::delete("ábamos"),
        Rule::delete("áramos"),
        Rule::delete("ásemos"),
        Rule::delete("aremos"),
        Rule::delete("eremos"),
        Rule::delete("iremos"),
        Rule::delete("arían"),
        Rule::delete("arías"),
        Rule::delete("aréis"),
        Rule::delete("erían"),
        Rule::delete("erías"),
        Rule::delete("eréis"),
        Rule::delete("irían"),
        Rule::delete("irías"),
        Rule::delete("iréis"),
        Rule::delete("ieran"),
        Rule::delete("iesen"),
        Rule::delete("ieron"),
        Rule::delete("iendo"),
        Rule::delete("ieras"),
        Rule::delete("ieses"),
        Rule::delete("abais"),
        Rule::delete("arais"),
        Rule::delete("aseis"),
        Rule::delete("íamos"),
        Rule::edit("emos", drop_with_gu),
        Rule::delete("arán"),
        Rule::delete("arás"),
        Rule::delete("aría"),
        Rule::delete("erán"),
        Rule::delete("erás"),
        Rule::delete("ería"),
        Rule::delete("irán"),
        Rule::delete("irás"),
        Rule::delete("iría"),
        Rule::delete("iera"),
        Rule::delete("iese"),
        Rule::delete("aste"),
        Rule::delete("iste"),
        Rule::delete("aban"),
        Rule::delete("aran"),
        Rule::delete("asen"),
        Rule::delete("aron"),
        Rule::delete("ando"),
        Rule::delete("abas"),
        Rule::delete("adas"),
        Rule::delete("idas"),
        Rule::delete("aras"),
        Rule::delete("ases"),
        Rule::delete("íais"),
        Rule::delete("ados"),
        Rule::delete("idos"),
        Rule::delete("amos"),
        Rule::delete("imos"),
        Rule::edit("éis", drop_with_gu),
        Rule::delete("ará"),
        Rule::delete("aré"),
        Rule::delete("erá"),
        Rule::delete("eré"),
        Rule::delete("irá"),
        Rule::delete("iré"),
        Rule::delete("aba"),
        Rule::delete("ada"),
        Rule::delete("ida"),
        Rule::delete("ara"),
        Rule::delete("ase"),
        Rule::delete("ían"),
        Rule::delete("ado"),
        Rule::delete("ido"),
        Rule::delete("ías"),
        Rule::delete("áis"),
        Rule::edit("en", drop_with_gu),
        Rule::edit("es", drop_with_gu),
        Rule::delete("ía"),
        Rule::delete("ad"),
        Rule::delete("ed"),
        Rule::delete("id"),
        Rule::delete("an"),
        Rule::delete("ió"),
        Rule::delete("ar"),
        Rule::delete("er"),
        Rule::delete("ir"),
        Rule::delete("as"),
        Rule::delete("ís"),
    ],
)
.within(Region::Rv);

fn drop_u_after_g(word: &mut Word) {
    if let Some(start) = word.suffix_start("u") {
        if word.preceded_by(start, "g") && word.in_region(Region::Rv, start) {
            word.truncate(start);
        }
    }
}

static RESIDUAL_SUFFIX: Stage = Stage::new(
    "residual suffix",
    &[
        Rule::delete("os").within(Region::Rv),
        Rule::delete("a").within(Region::Rv),
        Rule::delete("o").within(Region::Rv),
        Rule::delete("á").within(Region::Rv),
        Rule::delete("í").within(Region::Rv),
        Rule::delete("ó").within(Region::Rv),
        Rule::then("e", drop_u_after_g).within(Region::Rv),
        Rule::then("é", drop_u_after_g).within(Region::Rv),
    ],
);

fn steps(word: &mut Word) {
    ATTACHED_PRONOUN.apply(word);

    if STANDARD_SUFFIX.apply(word).is_none() && Y_VERB_SUFFIX.apply(word).is_none() {
        VERB_SUFFIX.apply(word);
    }

    RESIDUAL_SUFFIX.apply(word);
}

fn remove_acute_accents(word: &mut Word) {
    word.map_chars(|c| strip_accents(c, "áéíóú"));
}

pub static PROFILE: Profile = Profile {
    vowels: VOWELS,
    promotions: EnumSet::empty(),
    regions: RegionRules::with_rv(RvVariant::Standard),
    min_len: 0,
    prelude: None,
    steps,
    postlude: Some(remove_acute_accents),
};

pub fn spanish_stemmer(word: &str) -> String {
    PROFILE.stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    static TESTS: &[(&str, &str)] = &[
        ("cantando", "cant"),
        ("cantándolo", "cant"),
        ("rápidamente", "rapid"),
        ("chicas", "chic"),
        ("niños", "niñ"),
        ("y", "y"),
        ("cantaremos", "cant"),
    ];

    #[test]
    fn test_spanish() {
        for (string, expected) in TESTS {
            assert_eq!(spanish_stemmer(string), *expected, "{}", string);
        }
    }

    #[test]
    fn test_idempotence() {
        // Stems that lose another ending when stemmed again.
        let unstable = ["rapid"];

        for (_, stem) in TESTS {
            if unstable.contains(stem) {
                assert_ne!(spanish_stemmer(stem), *stem, "{}", stem);
            } else {
                assert_eq!(spanish_stemmer(stem), *stem, "{}", stem);
            }
        }
    }
}
