// Reference:
// https://snowballstem.org/algorithms/portuguese/stemmer.html
use enumset::EnumSet;

use crate::stemmers::profile::Profile;
use crate::stemmers::regions::{RegionRules, RvVariant};
use crate::stemmers::rules::{Guard, Region, Rule, Stage};
use crate::stemmers::word::Word;

static VOWELS: &str = "aeiouáéíóúâêô";

fn drop_in_r2(word: &mut Word, suffix: &str) -> bool {
    match word.suffix_start(suffix) {
        Some(start) if word.in_region(Region::R2, start) => {
            word.truncate(start);
            true
        }
        _ => false,
    }
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
        Rule::delete("avel").within(Region::R2),
        Rule::delete("ível").within(Region::R2),
    ],
);

static AFTER_IDADE: Stage = Stage::new(
    "after idade",
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

fn after_idade(word: &mut Word) {
    AFTER_IDADE.apply(word);
}

const fn r2(suffix: &'static str) -> Rule {
    Rule::delete(suffix).within(Region::R2)
}

const fn eira(suffix: &'static str) -> Rule {
    Rule::replace(suffix, "ir")
        .within(Region::Rv)
        .when(Guard::After("e"))
}

static STANDARD_SUFFIX: Stage = Stage::new(
    "standard suffix",
    &[
        r2("amentos"),
        r2("imentos"),
        Rule::replace("uciones", "u").within(Region::R2),
        r2("amento"),
        r2("imento"),
        r2("adoras"),
        r2("adores"),
        r2("aço~es"),
        Rule::replace("logías", "log").within(Region::R2),
        Rule::replace("ências", "ente").within(Region::R2),
        Rule::then("amente", after_amente).within(Region::R1),
        Rule::then("idades", after_idade).within(Region::R2),
        r2("ismos"),
        r2("istas"),
        r2("adora"),
        r2("aça~o"),
        r2("antes"),
        r2("ância"),
        Rule::replace("logía", "log").within(Region::R2),
        Rule::replace("ución", "u").within(Region::R2),
        Rule::replace("ência", "ente").within(Region::R2),
        Rule::then("mente", after_mente).within(Region::R2),
        Rule::then("idade", after_idade).within(Region::R2),
        r2("ezas"),
        r2("icos"),
        r2("icas"),
        r2("ismo"),
        r2("ável"),
        r2("ível"),
        r2("ista"),
        r2("osos"),
        r2("osas"),
        r2("ador"),
        r2("ante"),
        Rule::then("ivas", drop_at).within(Region::R2),
        Rule::then("ivos", drop_at).within(Region::R2),
        eira("iras"),
        r2("eza"),
        r2("ico"),
        r2("ica"),
        r2("oso"),
        r2("osa"),
        Rule::then("iva", drop_at).within(Region::R2),
        Rule::then("ivo", drop_at).within(Region::R2),
        eira("ira"),
    ],
);

static VERB_SUFFIX: Stage = Stage::new(
    "verb suffix",
    &[
        Rule::delete("aríamos"),
        Rule::delete("eríamos"),
        Rule::delete("iríamos"),
        Rule::delete("ássemos"),
        Rule::delete("êssemos"),
        Rule::delete("íssemos"),
        Rule::delete("aríeis"),
        Rule::delete("eríeis"),
        Rule::delete("iríeis"),
        Rule::delete("ásseis"),
        Rule::delete("ésseis"),
        Rule::delete("ísseis"),
        Rule::delete("áramos"),
        Rule::delete("éramos"),
        Rule::delete("íramos"),
        Rule::delete("ávamos"),
        Rule::delete("aremos"),
        Rule::delete("eremos"),
        Rule::delete("iremos"),
        Rule::delete("ariam"),
        Rule::delete("eriam"),
        Rule::delete("iriam"),
        Rule::delete("assem"),
        Rule::delete("essem"),
        Rule::delete("issem"),
        Rule::delete("ara~o"),
        Rule::delete("era~o"),
        Rule::delete("ira~o"),
        Rule::delete("arias"),
        Rule::delete("erias"),
        Rule::delete("irias"),
        Rule::delete("ardes"),
        Rule::delete("erdes"),
        Rule::delete("irdes"),
        Rule::delete("asses"),
        Rule::delete("esses"),
        Rule::delete("isses"),
        Rule::delete("astes"),
        Rule::delete("estes"),
        Rule::delete("istes"),
        Rule::delete("áreis"),
        Rule::delete("areis"),
        Rule::delete("éreis"),
        Rule::delete("ereis"),
        Rule::delete("íreis"),
        Rule::delete("ireis"),
        Rule::delete("áveis"),
        Rule::delete("íamos"),
        Rule::delete("armos"),
        Rule::delete("ermos"),
        Rule::delete("irmos"),
        Rule::delete("aria"),
        Rule::delete("eria"),
        Rule::delete("iria"),
        Rule::delete("asse"),
        Rule::delete("esse"),
        Rule::delete("isse"),
        Rule::delete("aste"),
        Rule::delete("este"),
        Rule::delete("iste"),
        Rule::delete("arei"),
        Rule::delete("erei"),
        Rule::delete("irei"),
        Rule::delete("aram"),
        Rule::delete("eram"),
        Rule::delete("iram"),
        Rule::delete("avam"),
        Rule::delete("arem"),
        Rule::delete("erem"),
        Rule::delete("irem"),
        Rule::delete("ando"),
        Rule::delete("endo"),
        Rule::delete("indo"),
        Rule::delete("adas"),
        Rule::delete("idas"),
        Rule::delete("arás"),
        Rule::delete("aras"),
        Rule::delete("erás"),
        Rule::delete("eras"),
        Rule::delete("irás"),
        Rule::delete("avas"),
        Rule::delete("ares"),
        Rule::delete("eres"),
        Rule::delete("ires"),
        Rule::delete("íeis"),
        Rule::delete("ados"),
        Rule::delete("idos"),
        Rule::delete("ámos"),
        Rule::delete("amos"),
        Rule::delete("emos"),
        Rule::delete("imos"),
        Rule::delete("iras"),
        Rule::delete("ada"),
        Rule::delete("ida"),
        Rule::delete("ará"),
        Rule::delete("ara"),
        Rule::delete("erá"),
        Rule::delete("era"),
        Rule::delete("irá"),
        Rule::delete("ava"),
        Rule::delete("iam"),
        Rule::delete("ado"),
        Rule::delete("ido"),
        Rule::delete("ias"),
        Rule::delete("ais"),
        Rule::delete("eis"),
        Rule::delete("ira"),
        Rule::delete("ia"),
        Rule::delete("ei"),
        Rule::delete("am"),
        Rule::delete("em"),
        Rule::delete("ar"),
        Rule::delete("er"),
        Rule::delete("ir"),
        Rule::delete("as"),
        Rule::delete("es"),
        Rule::delete("is"),
        Rule::delete("eu"),
        Rule::delete("iu"),
        Rule::delete("ou"),
    ],
)
.within(Region::Rv);

static RESIDUAL_SUFFIX: Stage = Stage::new(
    "residual suffix",
    &[
        Rule::delete("os").within(Region::Rv),
        Rule::delete("a").within(Region::Rv),
        Rule::delete("i").within(Region::Rv),
        Rule::delete("o").within(Region::Rv),
        Rule::delete("á").within(Region::Rv),
        Rule::delete("í").within(Region::Rv),
        Rule::delete("ó").within(Region::Rv),
    ],
);

/// Deletes a final `u` after `g` or `i` after `c` lying in RV.
fn drop_soft_vowel(word: &mut Word) {
    let Some(last) = word.last() else {
        return;
    };

    let start = word.len() - 1;
    let softened = matches!(
        (word.char_before(start), last),
        (Some('g'), 'u') | (Some('c'), 'i')
    );

    if softened && word.in_region(Region::Rv, start) {
        word.pop();
    }
}

static RESIDUAL_FORM: Stage = Stage::new(
    "residual form",
    &[
        Rule::then("e", drop_soft_vowel).within(Region::Rv),
        Rule::then("é", drop_soft_vowel).within(Region::Rv),
        Rule::then("ê", drop_soft_vowel).within(Region::Rv),
        Rule::replace("ç", "c"),
    ],
);

fn encode_nasals(chars: &mut Vec<char>) {
    if chars.iter().any(|&c| c == 'ã' || c == 'õ') {
        *chars = chars
            .iter()
            .flat_map(|&c| match c {
                'ã' => vec!['a', '~'],
                'õ' => vec!['o', '~'],
                c => vec![c],
            })
            .collect();
    }
}

fn decode_nasals(word: &mut Word) {
    if !word.chars().contains(&'~') {
        return;
    }

    let text = word.to_string().replace("a~", "ã").replace("o~", "õ");
    word.replace_from(0, &text);
}

fn steps(word: &mut Word) {
    let changed =
        STANDARD_SUFFIX.apply(word).is_some() || VERB_SUFFIX.apply(word).is_some();

    if changed {
        if let Some(start) = word.suffix_start("i") {
            if word.preceded_by(start, "c") && word.in_region(Region::Rv, start) {
                word.truncate(start);
            }
        }
    } else {
        RESIDUAL_SUFFIX.apply(word);
    }

    RESIDUAL_FORM.apply(word);
}

pub static PROFILE: Profile = Profile {
    vowels: VOWELS,
    promotions: EnumSet::empty(),
    regions: RegionRules::with_rv(RvVariant::Standard),
    min_len: 0,
    prelude: Some(encode_nasals),
    steps,
    postlude: Some(decode_nasals),
};

pub fn portuguese_stemmer(word: &str) -> String {
    PROFILE.stem(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    static TESTS: &[(&str, &str)] = &[
        ("chegada", "cheg"),
        ("felicidade", "felic"),
        ("rapidamente", "rapid"),
        ("meninos", "menin"),
        ("nações", "naçõ"),
        ("pão", "pã"),
    ];

    #[test]
    fn test_portuguese() {
        for (string, expected) in TESTS {
            assert_eq!(portuguese_stemmer(string), *expected, "{}", string);
        }
    }

    #[test]
    fn test_idempotence() {
        for (_, stem) in TESTS {
            assert_eq!(portuguese_stemmer(stem), *stem, "{}", stem);
        }
    }

    #[test]
    fn test_nasal_encoding() {
        assert_eq!(PROFILE.prepare("canções").to_string(), "canço~es");
    }
}
