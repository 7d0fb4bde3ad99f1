use enumset::EnumSet;
use unidecode::unidecode_char;

use super::classify::{classify, Promotion};
use super::regions::{RegionRules, Regions};
use super::word::Word;

/// Everything a language needs to stem a word. Profiles are immutable
/// statics, shared by every stemmer of that language.
#[derive(Debug)]
pub struct Profile {
    pub vowels: &'static str,
    pub promotions: EnumSet<Promotion>,
    pub regions: RegionRules,
    /// Shorter words are returned, lowercased, without going through any stage.
    pub min_len: usize,
    /// Lexical rewriting done before classification.
    pub prelude: Option<fn(&mut Vec<char>)>,
    pub steps: fn(&mut Word),
    /// Reverts internal encodings once every stage has run. Sentinels are
    /// lowercased afterwards whatever the profile.
    pub postlude: Option<fn(&mut Word)>,
}

impl Profile {
    #[inline]
    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(c)
    }

    pub fn prepare(&self, text: &str) -> Word {
        let mut chars: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();

        if let Some(prelude) = self.prelude {
            prelude(&mut chars);
        }

        classify(&mut chars, self.vowels, self.promotions);

        let mut word = Word::new(chars, self.vowels);
        let regions = self.regions.compute(&word);
        word.mark(regions);

        word
    }

    pub fn regions(&self, text: &str) -> Regions {
        self.prepare(text).regions()
    }

    pub fn stem_with_min_len(&self, text: &str, min_len: usize) -> String {
        if text.chars().count() < min_len {
            return text.to_lowercase();
        }

        let mut word = self.prepare(text);

        (self.steps)(&mut word);

        if let Some(postlude) = self.postlude {
            postlude(&mut word);
        }

        word.into_chars()
            .into_iter()
            .flat_map(char::to_lowercase)
            .collect()
    }

    pub fn stem(&self, text: &str) -> String {
        self.stem_with_min_len(text, self.min_len)
    }
}

/// Strips the diacritics of the characters found in `accented`, keeping
/// every other character as is.
pub fn strip_accents(c: char, accented: &str) -> char {
    if !accented.contains(c) {
        return c;
    }

    unidecode_char(c).chars().next().unwrap_or(c)
}
