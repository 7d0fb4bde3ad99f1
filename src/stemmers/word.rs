use std::fmt;

use super::regions::Regions;
use super::rules::Region;

/// A word being stemmed: a growable character buffer, the vowel set it is
/// classified against, and the region marks computed once its characters
/// have been classified.
///
/// Every lookup taking an offset returns `None` or `false` when the offset
/// falls outside the buffer, so rules never have to check lengths themselves.
#[derive(Debug, Clone)]
pub struct Word {
    chars: Vec<char>,
    vowels: &'static str,
    marks: Regions,
}

impl Word {
    pub fn new(chars: Vec<char>, vowels: &'static str) -> Self {
        let marks = Regions::empty(chars.len());

        Self {
            chars,
            vowels,
            marks,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    #[inline]
    pub fn char_at(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    #[inline]
    pub fn char_before(&self, i: usize) -> Option<char> {
        i.checked_sub(1).and_then(|j| self.char_at(j))
    }

    #[inline]
    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    #[inline]
    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(c)
    }

    pub fn is_vowel_at(&self, i: usize) -> bool {
        self.char_at(i).is_some_and(|c| self.is_vowel(c))
    }

    pub fn is_consonant_at(&self, i: usize) -> bool {
        self.char_at(i).is_some_and(|c| !self.is_vowel(c))
    }

    /// Offset at which `text` starts, if it ends right before `end`.
    pub fn match_before(&self, end: usize, text: &str) -> Option<usize> {
        let mut i = end.min(self.chars.len());

        for c in text.chars().rev() {
            i = i.checked_sub(1)?;

            if self.chars[i] != c {
                return None;
            }
        }

        Some(i)
    }

    #[inline]
    pub fn suffix_start(&self, suffix: &str) -> Option<usize> {
        self.match_before(self.chars.len(), suffix)
    }

    #[inline]
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.suffix_start(suffix).is_some()
    }

    #[inline]
    pub fn preceded_by(&self, i: usize, text: &str) -> bool {
        self.match_before(i, text).is_some()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        let mut chars = self.chars.iter();

        prefix.chars().all(|c| chars.next() == Some(&c))
    }

    /// Returns the first of `suffixes` the word ends with.
    pub fn ends_with_any(&self, suffixes: &[&'static str]) -> Option<&'static str> {
        suffixes.iter().copied().find(|suffix| self.ends_with(suffix))
    }

    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.chars.truncate(len);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<char> {
        self.chars.pop()
    }

    pub fn replace_from(&mut self, start: usize, with: &str) {
        self.chars.truncate(start);
        self.chars.extend(with.chars());
    }

    pub fn push_str(&mut self, text: &str) {
        self.chars.extend(text.chars());
    }

    pub fn set(&mut self, i: usize, c: char) {
        if let Some(slot) = self.chars.get_mut(i) {
            *slot = c;
        }
    }

    pub fn remove(&mut self, i: usize) -> Option<char> {
        (i < self.chars.len()).then(|| self.chars.remove(i))
    }

    pub fn map_chars<F>(&mut self, f: F)
    where
        F: FnMut(char) -> char,
    {
        self.chars = self.chars.iter().copied().map(f).collect();
    }

    pub fn mark(&mut self, marks: Regions) {
        self.marks = marks;
    }

    /// Region marks clamped to the current buffer, so that they always
    /// satisfy `r1 <= r2 <= len` whatever the stages did to the word.
    pub fn regions(&self) -> Regions {
        self.marks.clamped(self.chars.len())
    }

    pub fn region_start(&self, region: Region) -> usize {
        let regions = self.regions();

        match region {
            Region::Word => 0,
            Region::R1 => regions.r1,
            Region::R2 => regions.r2,
            Region::Rv => regions.rv.unwrap_or(self.chars.len()),
        }
    }

    /// Whether a suffix starting at `start` lies inside `region`.
    pub fn in_region(&self, region: Region, start: usize) -> bool {
        match region {
            Region::Word => true,
            Region::Rv if self.marks.rv.is_none() => false,
            _ => start >= self.region_start(region),
        }
    }

    pub fn into_chars(self) -> Vec<char> {
        self.chars
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text.chars().collect(), "aeiouy")
    }

    #[test]
    fn test_suffix_start() {
        let w = word("klockaren");

        assert_eq!(w.suffix_start("aren"), Some(5));
        assert_eq!(w.suffix_start("klockaren"), Some(0));
        assert_eq!(w.suffix_start("oklockaren"), None);
        assert_eq!(w.suffix_start("arna"), None);
        assert_eq!(w.suffix_start(""), Some(9));
        assert_eq!(word("").suffix_start("s"), None);
    }

    #[test]
    fn test_lookups_out_of_bounds() {
        let w = word("ab");

        assert_eq!(w.char_before(0), None);
        assert_eq!(w.char_before(1), Some('a'));
        assert_eq!(w.char_at(2), None);
        assert!(!w.is_vowel_at(5));
        assert!(!w.is_consonant_at(5));
        assert!(!w.preceded_by(1, "xa"));
        assert!(w.preceded_by(2, "ab"));
    }

    #[test]
    fn test_edits() {
        let mut w = word("hopping");

        w.replace_from(4, "");
        assert_eq!(w.to_string(), "hopp");

        w.pop();
        w.push_str("e");
        assert_eq!(w.to_string(), "hope");

        w.set(0, 'r');
        assert_eq!(w.to_string(), "rope");
        assert_eq!(w.remove(9), None);
        assert_eq!(w.remove(3), Some('e'));
        assert_eq!(w.to_string(), "rop");
    }

    #[test]
    fn test_regions_follow_the_buffer() {
        let mut w = word("generously");
        w.mark(Regions {
            r1: 5,
            r2: 7,
            rv: None,
        });

        assert!(w.in_region(Region::R1, 5));
        assert!(!w.in_region(Region::R2, 6));
        assert!(!w.in_region(Region::Rv, 9));

        w.truncate(4);
        let regions = w.regions();

        assert_eq!((regions.r1, regions.r2), (4, 4));
        assert!(w.in_region(Region::Word, 0));
    }
}
