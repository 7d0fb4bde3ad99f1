use proptest::prelude::*;
use stemmata::{Language, Stemmer, StemmerBuilder, StemsIteratorExt};

fn language() -> impl Strategy<Value = Language> {
    proptest::sample::select(Language::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_stem_is_total(language in language(), word in "\\PC{0,24}") {
        let stemmer = StemmerBuilder::new(language).preserve_case(true).build();

        stemmer.stem(&word);
        Stemmer::new(language).stem(&word);
    }

    #[test]
    fn test_regions_are_ordered(
        language in language(),
        word in "[a-zäöüåæøéèàçâêîôûíóúñăş]{0,20}",
    ) {
        let len = word.chars().count();
        let regions = Stemmer::new(language).regions(&word).unwrap();

        prop_assert!(regions.r1 <= regions.r2, "{:?}", regions);
        prop_assert!(regions.r2 <= len, "{:?}", regions);

        if let Some(rv) = regions.rv {
            prop_assert!(rv <= len, "{:?}", regions);
        }
    }

    #[test]
    fn test_short_words_are_lowercased(
        language in language(),
        word in "[a-zA-ZÄÖÅ]{0,5}",
    ) {
        let stemmer = StemmerBuilder::new(language).min_len(6).build();

        prop_assert_eq!(stemmer.stem(&word), word.to_lowercase());
    }

    #[test]
    fn test_passthrough_is_identity(word in "\\PC{0,24}") {
        prop_assert_eq!(Stemmer::default().stem(&word), word);
    }

    #[test]
    fn test_stem_all_preserves_order(
        language in language(),
        words in proptest::collection::vec("[a-zé]{0,12}", 0..32),
    ) {
        let stemmer = Stemmer::new(language);
        let expected: Vec<String> = words.iter().map(|word| stemmer.stem(word)).collect();

        prop_assert_eq!(&stemmer.stem_all(&words), &expected);
        prop_assert_eq!(&words.iter().stems(&stemmer).collect::<Vec<_>>(), &expected);
    }
}

#[test]
fn test_concurrent_stemming() {
    let words: Vec<String> = ["klockaren", "bilarna", "Ansvarslöst", "RAKARE", "1990"]
        .iter()
        .cycle()
        .take(500)
        .map(|word| word.to_string())
        .collect();

    let stemmer = Stemmer::new(Language::Swedish);
    let expected = stemmer.stem_all(&words);

    let results: Vec<Vec<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| stemmer.stem_all(&words)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for result in results {
        assert_eq!(result, expected);
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_par_stem_all() {
    let words: Vec<String> = (0..1000)
        .map(|i| format!("{}{}", ["hesten", "bilene", "gutter"][i % 3], "e".repeat(i % 4)))
        .collect();

    let stemmer = Stemmer::new(Language::Norwegian);

    assert_eq!(stemmer.par_stem_all(&words), stemmer.stem_all(&words));
}
