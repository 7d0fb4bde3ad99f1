use pretty_assertions::assert_eq;
use stemmata::{english_stemmer, Language, Stemmer, StemmerBuilder, UnknownLanguage};

#[test]
fn test_swedish_reference() {
    let stemmer = Stemmer::new(Language::Swedish);
    let tests = [
        ("klockaren", "klock"),
        ("bilen", "bil"),
        ("Ansvarslöst", "ansvarslös"),
        ("1990", "1990"),
    ];

    for (string, expected) in tests {
        assert_eq!(stemmer.stem(string), expected, "{}", string);
    }
}

#[test]
fn test_swedish_preserve_case() {
    let stemmer = StemmerBuilder::new(Language::Swedish)
        .preserve_case(true)
        .build();

    assert_eq!(
        stemmer.stem_all(["Ansvarslöst", "Bilens", "RAKARE", "klockaren"]),
        vec!["Ansvarslös", "Bil", "RAK", "klock"]
    );
}

#[test]
fn test_english_reference() {
    let tests = [
        ("consigned", "consign"),
        ("kneeling", "kneel"),
        ("cry", "cri"),
        ("Sky", "sky"),
        ("absolutely", "absolut"),
        ("consols", "consol"),
        ("consolatory", "consolatori"),
        ("conspiracy", "conspiraci"),
        ("knaves", "knave"),
    ];

    for (string, expected) in tests {
        assert_eq!(english_stemmer(string), expected, "{}", string);
    }
}

#[test]
fn test_one_word_per_language() {
    let tests = [
        (Language::Danish, "hestene", "hest"),
        (Language::Dutch, "boeken", "boek"),
        (Language::English, "running", "run"),
        (Language::Finnish, "talossa", "talo"),
        (Language::French, "chevaux", "cheval"),
        (Language::German, "häuser", "haus"),
        (Language::Italian, "abbandonata", "abbandon"),
        (Language::Norwegian, "bilene", "bil"),
        (Language::Portuguese, "chegada", "cheg"),
        (Language::Romanian, "casa", "cas"),
        (Language::Spanish, "chicas", "chic"),
        (Language::Swedish, "bilarna", "bil"),
    ];

    for (language, string, expected) in tests {
        assert_eq!(Stemmer::new(language).stem(string), expected, "{}", language);
    }
}

#[test]
fn test_default_passthrough() {
    assert_eq!(Stemmer::default().stem_all(["abc", "Def"]), vec!["abc", "Def"]);
    assert_eq!(Stemmer::for_code("tlh").stem_all(["abc", "Def"]), vec!["abc", "Def"]);
}

#[test]
fn test_for_code() {
    assert_eq!(Stemmer::for_code("sv").language(), Some(Language::Swedish));
    assert_eq!(Stemmer::for_code("French").language(), Some(Language::French));
    assert_eq!(Stemmer::for_code("xx").language(), None);
}

#[test]
fn test_unknown_language() {
    let err = "tlh".parse::<Language>().unwrap_err();

    assert_eq!(err, UnknownLanguage("tlh".to_string()));
    assert_eq!(err.to_string(), "unknown language: tlh");
}

#[test]
fn test_short_words() {
    let english = Stemmer::new(Language::English);

    assert_eq!(english.stem_all(["AS", "is", "a", ""]), vec!["as", "is", "a", ""]);

    let strict = StemmerBuilder::new(Language::Swedish).min_len(12).build();

    assert_eq!(strict.stem("Klockaren"), "klockaren");
    assert_eq!(strict.stem("klockarsonen"), "klockarson");
}

#[test]
fn test_regions() {
    let english = Stemmer::new(Language::English);
    let regions = english.regions("beautiful").unwrap();

    assert_eq!((regions.r1, regions.r2, regions.rv), (5, 7, None));

    let spanish = Stemmer::new(Language::Spanish);

    assert_eq!(spanish.regions("macho").unwrap().rv, Some(3));
}
