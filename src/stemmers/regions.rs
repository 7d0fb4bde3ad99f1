// Reference:
// https://snowballstem.org/texts/r1r2.html
use super::word::Word;

/// Offsets into a word after which suffix rules are allowed to fire.
///
/// A region starting at the word's length is empty. `rv` is only computed
/// by the Romance profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub r1: usize,
    pub r2: usize,
    pub rv: Option<usize>,
}

impl Regions {
    pub fn empty(len: usize) -> Self {
        Self {
            r1: len,
            r2: len,
            rv: None,
        }
    }

    pub fn clamped(&self, len: usize) -> Self {
        let r1 = self.r1.min(len);

        Self {
            r1,
            r2: self.r2.min(len).max(r1),
            rv: self.rv.map(|rv| rv.min(len)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RvVariant {
    /// Spanish, Portuguese, Italian and Romanian.
    Standard,
    /// French: RV is 3 when the word starts with two vowels or one of
    /// `prefixes`, and starts after the first non-initial vowel otherwise.
    AfterFirstVowel { prefixes: &'static [&'static str] },
}

#[derive(Debug, Clone, Copy)]
pub struct RegionRules {
    /// Minimal value of R1, applied after R2 has been found.
    pub floor: usize,
    /// Words starting with one of those get a fixed R1.
    pub prefixes: &'static [(&'static str, usize)],
    pub rv: Option<RvVariant>,
}

impl RegionRules {
    pub const BASIC: Self = Self {
        floor: 0,
        prefixes: &[],
        rv: None,
    };

    pub const fn with_floor(floor: usize) -> Self {
        Self {
            floor,
            prefixes: &[],
            rv: None,
        }
    }

    pub const fn with_rv(rv: RvVariant) -> Self {
        Self {
            floor: 0,
            prefixes: &[],
            rv: Some(rv),
        }
    }

    pub fn compute(&self, word: &Word) -> Regions {
        let r1 = self
            .prefixes
            .iter()
            .find(|(prefix, _)| word.starts_with(prefix))
            .map_or_else(|| region_after(word, 0), |(_, offset)| *offset);

        let r2 = region_after(word, r1);

        let regions = Regions {
            r1: r1.max(self.floor),
            r2,
            rv: self.rv.map(|variant| match variant {
                RvVariant::Standard => standard_rv(word),
                RvVariant::AfterFirstVowel { prefixes } => rv_after_first_vowel(word, prefixes),
            }),
        };

        regions.clamped(word.len())
    }
}

/// Offset right after the first non-vowel following a vowel, searching
/// from `start`.
pub fn region_after(word: &Word, start: usize) -> usize {
    (start..word.len())
        .find(|&i| word.is_vowel_at(i) && word.is_consonant_at(i + 1))
        .map_or(word.len(), |i| i + 2)
}

fn after_next(word: &Word, from: usize, vowel: bool) -> usize {
    (from..word.len())
        .find(|&i| word.is_vowel_at(i) == vowel)
        .map_or(word.len(), |i| i + 1)
}

fn standard_rv(word: &Word) -> usize {
    if word.len() < 2 {
        return word.len();
    }

    if word.is_consonant_at(1) {
        after_next(word, 2, true)
    } else if word.is_vowel_at(0) {
        after_next(word, 2, false)
    } else {
        3
    }
}

fn rv_after_first_vowel(word: &Word, prefixes: &[&str]) -> usize {
    if prefixes.iter().any(|prefix| word.starts_with(prefix))
        || (word.len() >= 3 && word.is_vowel_at(0) && word.is_vowel_at(1))
    {
        return 3;
    }

    after_next(word, 1, true)
}
