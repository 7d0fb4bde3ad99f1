mod classify;
mod profile;
mod regions;
mod rules;
mod stems;
mod word;

mod da {
    pub(super) mod snowball;
}
mod de {
    pub(super) mod snowball;
}
mod en {
    pub(super) mod porter2;
}
mod es {
    pub(super) mod snowball;
}
mod fi {
    pub(super) mod snowball;
}
mod fr {
    pub(super) mod snowball;
}
mod it {
    pub(super) mod snowball;
}
mod nl {
    pub(super) mod snowball;
}
mod no {
    pub(super) mod snowball;
}
mod pt {
    pub(super) mod snowball;
}
mod ro {
    pub(super) mod snowball;
}
mod sv {
    pub(super) mod snowball;
}

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;

use crate::error::UnknownLanguage;
use profile::Profile;

pub use da::snowball::danish_stemmer;
pub use de::snowball::german_stemmer;
pub use en::porter2::english_stemmer;
pub use es::snowball::spanish_stemmer;
pub use fi::snowball::finnish_stemmer;
pub use fr::snowball::french_stemmer;
pub use it::snowball::italian_stemmer;
pub use nl::snowball::dutch_stemmer;
pub use no::snowball::norwegian_stemmer;
pub use pt::snowball::portuguese_stemmer;
pub use regions::Regions;
pub use ro::snowball::romanian_stemmer;
pub use stems::{Stems, StemsIteratorExt};
pub use sv::snowball::swedish_stemmer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Spanish,
    Swedish,
}

lazy_static! {
    static ref LANGUAGES: HashMap<String, Language> = {
        let mut map = HashMap::new();

        for language in Language::ALL {
            map.insert(language.code().to_string(), language);
            map.insert(language.name().to_lowercase(), language);
        }

        map
    };
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Finnish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Norwegian,
        Language::Portuguese,
        Language::Romanian,
        Language::Spanish,
        Language::Swedish,
    ];

    /// ISO 639-1 code of the language.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Danish => "da",
            Self::Dutch => "nl",
            Self::English => "en",
            Self::Finnish => "fi",
            Self::French => "fr",
            Self::German => "de",
            Self::Italian => "it",
            Self::Norwegian => "no",
            Self::Portuguese => "pt",
            Self::Romanian => "ro",
            Self::Spanish => "es",
            Self::Swedish => "sv",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Danish => "Danish",
            Self::Dutch => "Dutch",
            Self::English => "English",
            Self::Finnish => "Finnish",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
            Self::Norwegian => "Norwegian",
            Self::Portuguese => "Portuguese",
            Self::Romanian => "Romanian",
            Self::Spanish => "Spanish",
            Self::Swedish => "Swedish",
        }
    }

    fn profile(&self) -> &'static Profile {
        match self {
            Self::Danish => &da::snowball::PROFILE,
            Self::Dutch => &nl::snowball::PROFILE,
            Self::English => &en::porter2::PROFILE,
            Self::Finnish => &fi::snowball::PROFILE,
            Self::French => &fr::snowball::PROFILE,
            Self::German => &de::snowball::PROFILE,
            Self::Italian => &it::snowball::PROFILE,
            Self::Norwegian => &no::snowball::PROFILE,
            Self::Portuguese => &pt::snowball::PROFILE,
            Self::Romanian => &ro::snowball::PROFILE,
            Self::Spanish => &es::snowball::PROFILE,
            Self::Swedish => &sv::snowball::PROFILE,
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LANGUAGES
            .get(&s.trim().to_lowercase())
            .copied()
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reapplies the casing of `original` to `stem`, position by position.
fn restore_case(original: &str, stem: &str) -> String {
    let mut cased = String::with_capacity(stem.len());
    let mut source = original.chars();

    for c in stem.chars() {
        match source.next() {
            Some(o) if o.is_uppercase() => cased.extend(c.to_uppercase()),
            _ => cased.push(c),
        }
    }

    cased
}

/// A stemmer for one language. A stemmer without language returns its input
/// untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stemmer {
    language: Option<Language>,
    preserve_case: bool,
    min_len: Option<usize>,
}

impl Stemmer {
    pub fn new(language: Language) -> Self {
        StemmerBuilder::new(language).build()
    }

    /// Never fails: unsupported codes get the passthrough stemmer.
    pub fn for_code(code: &str) -> Self {
        match code.parse::<Language>() {
            Ok(language) => Self::new(language),
            Err(err) => {
                debug!("{}, falling back to passthrough stemmer", err);
                Self::default()
            }
        }
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn stem(&self, word: &str) -> String {
        let Some(language) = self.language else {
            return word.to_string();
        };

        let profile = language.profile();
        let stem = profile.stem_with_min_len(word, self.min_len.unwrap_or(profile.min_len));

        if self.preserve_case {
            restore_case(word, &stem)
        } else {
            stem
        }
    }

    pub fn stem_all<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| self.stem(word.as_ref()))
            .collect()
    }

    #[cfg(feature = "parallel")]
    pub fn par_stem_all<S>(&self, words: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        words.par_iter().map(|word| self.stem(word.as_ref())).collect()
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.language
            .is_some_and(|language| language.profile().is_vowel(c))
    }

    /// Regions of the word once lowercased and classified, `None` for the
    /// passthrough stemmer.
    pub fn regions(&self, word: &str) -> Option<Regions> {
        self.language
            .map(|language| language.profile().regions(word))
    }
}

pub struct StemmerBuilder {
    language: Language,
    preserve_case: bool,
    min_len: Option<usize>,
}

impl StemmerBuilder {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            preserve_case: false,
            min_len: None,
        }
    }

    /// Reapplies the casing of the input to the stem, position by position.
    ///
    /// Positions are counted in characters of the input, so once a prelude
    /// changes the word length (German `ß` becomes `ss`) the casing after
    /// that point lands on the wrong letters.
    pub fn preserve_case(mut self, value: bool) -> Self {
        self.preserve_case = value;
        self
    }

    /// Words with fewer characters are returned without stemming.
    pub fn min_len(mut self, value: usize) -> Self {
        self.min_len = Some(value);
        self
    }

    pub fn build(self) -> Stemmer {
        Stemmer {
            language: Some(self.language),
            preserve_case: self.preserve_case,
            min_len: self.min_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        let tests = [
            ("sv", Language::Swedish),
            ("Swedish", Language::Swedish),
            ("EN", Language::English),
            (" de ", Language::German),
            ("portuguese", Language::Portuguese),
            ("no", Language::Norwegian),
        ];

        for (string, expected) in tests {
            assert_eq!(string.parse::<Language>(), Ok(expected), "{}", string);
        }

        assert_eq!(
            "klingon".parse::<Language>(),
            Err(UnknownLanguage("klingon".to_string()))
        );
    }

    #[test]
    fn test_codes_roundtrip() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>(), Ok(language));
            assert_eq!(language.to_string().parse::<Language>(), Ok(language));
        }
    }

    #[test]
    fn test_restore_case() {
        assert_eq!(restore_case("Ansvarslöst", "ansvarslös"), "Ansvarslös");
        assert_eq!(restore_case("RAKARE", "rak"), "RAK");
        assert_eq!(restore_case("Straße", "strass"), "Strass");
        assert_eq!(restore_case("GrüßE", "grüsse"), "GrüsSe");
    }

    #[test]
    fn test_passthrough() {
        let stemmer = Stemmer::default();

        assert_eq!(stemmer.stem("Def"), "Def");
        assert!(!stemmer.is_vowel('a'));
        assert_eq!(stemmer.regions("abc"), None);
        assert_eq!(Stemmer::for_code("xx"), stemmer);
    }

    #[test]
    fn test_builder() {
        let stemmer = StemmerBuilder::new(Language::English)
            .preserve_case(true)
            .min_len(10)
            .build();

        assert_eq!(stemmer.stem("Running"), "Running");
        assert_eq!(stemmer.stem("Consignment"), "Consign");
        assert_eq!(Stemmer::new(Language::English).stem("Running"), "run");
    }

    #[test]
    fn test_is_vowel() {
        let stemmer = Stemmer::new(Language::Swedish);

        assert!(stemmer.is_vowel('å'));
        assert!(!stemmer.is_vowel('k'));
        assert!(!Stemmer::new(Language::English).is_vowel('å'));
    }
}
