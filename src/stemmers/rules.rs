use log::trace;

use super::word::Word;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Word,
    R1,
    R2,
    Rv,
}

/// Side condition checked once a rule's suffix has been found.
#[derive(Debug, Clone, Copy)]
pub enum Guard {
    Always,
    /// Preceded by exactly this text.
    After(&'static str),
    /// Not preceded by this text, which holds at the start of the word.
    NotAfter(&'static str),
    /// Preceded by one of these characters.
    AfterOneOf(&'static str),
    /// Preceded by a character that is not one of these.
    AfterNoneOf(&'static str),
    AfterConsonant,
    /// Arbitrary predicate over the word and the suffix offset.
    Check(fn(&Word, usize) -> bool),
}

impl Guard {
    pub fn holds(&self, word: &Word, start: usize) -> bool {
        match *self {
            Self::Always => true,
            Self::After(text) => word.preceded_by(start, text),
            Self::NotAfter(text) => !word.preceded_by(start, text),
            Self::AfterOneOf(set) => word.char_before(start).is_some_and(|c| set.contains(c)),
            Self::AfterNoneOf(set) => word.char_before(start).is_some_and(|c| !set.contains(c)),
            Self::AfterConsonant => start > 0 && word.is_consonant_at(start - 1),
            Self::Check(predicate) => predicate(word, start),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Action {
    Delete,
    Replace(&'static str),
    /// Matches, stopping the stage, without touching the word.
    Keep,
    /// Deletes the suffix, then runs a follow-up edit.
    Then(fn(&mut Word)),
    /// Custom edit given the suffix offset.
    Edit(fn(&mut Word, usize)),
}

impl Action {
    fn apply(&self, word: &mut Word, start: usize) {
        match *self {
            Self::Delete => word.truncate(start),
            Self::Replace(with) => word.replace_from(start, with),
            Self::Keep => (),
            Self::Then(follow_up) => {
                word.truncate(start);
                follow_up(word);
            }
            Self::Edit(edit) => edit(word, start),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub suffix: &'static str,
    pub region: Region,
    pub guard: Guard,
    pub action: Action,
}

impl Rule {
    pub const fn delete(suffix: &'static str) -> Self {
        Self {
            suffix,
            region: Region::Word,
            guard: Guard::Always,
            action: Action::Delete,
        }
    }

    pub const fn replace(suffix: &'static str, with: &'static str) -> Self {
        Self {
            action: Action::Replace(with),
            ..Self::delete(suffix)
        }
    }

    pub const fn keep(suffix: &'static str) -> Self {
        Self {
            action: Action::Keep,
            ..Self::delete(suffix)
        }
    }

    pub const fn then(suffix: &'static str, follow_up: fn(&mut Word)) -> Self {
        Self {
            action: Action::Then(follow_up),
            ..Self::delete(suffix)
        }
    }

    pub const fn edit(suffix: &'static str, edit: fn(&mut Word, usize)) -> Self {
        Self {
            action: Action::Edit(edit),
            ..Self::delete(suffix)
        }
    }

    pub const fn within(self, region: Region) -> Self {
        Self { region, ..self }
    }

    pub const fn when(self, guard: Guard) -> Self {
        Self { guard, ..self }
    }

    #[inline]
    pub fn edits(&self) -> bool {
        !matches!(self.action, Action::Keep)
    }
}

/// How the rules of a stage are matched against the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Rules are matched against the whole word and the first match is the
    /// only candidate: if its region or guard fails, the stage stops.
    Word,
    /// Only suffixes lying inside the region are matched. A suffix reaching
    /// out of it is skipped and the next rule is tried, but a failing guard
    /// still stops the stage.
    Within(Region),
}

/// One ordered table of suffix rules. Tables are ordered longest suffix
/// first, so that the first match is also the longest one.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub scope: Scope,
    pub rules: &'static [Rule],
}

impl Stage {
    pub const fn new(name: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            name,
            scope: Scope::Word,
            rules,
        }
    }

    pub const fn within(self, region: Region) -> Self {
        Self {
            scope: Scope::Within(region),
            ..self
        }
    }

    /// Finds the rule matching `word`, checks it and applies it. Returns
    /// the rule that fired, if any.
    pub fn apply(&self, word: &mut Word) -> Option<&'static Rule> {
        let limit = match self.scope {
            Scope::Word => 0,
            Scope::Within(region) => word.region_start(region),
        };

        for rule in self.rules {
            let Some(start) = word.suffix_start(rule.suffix) else {
                continue;
            };

            if start < limit {
                continue;
            }

            if !word.in_region(rule.region, start) || !rule.guard.holds(word, start) {
                return None;
            }

            rule.action.apply(word, start);
            trace!("{}: -{} => {}", self.name, rule.suffix, word);

            return Some(rule);
        }

        None
    }

    /// Applies the stage over and over while it keeps changing the word.
    pub fn repeat(&self, word: &mut Word) -> bool {
        let mut changed = false;

        while let Some(rule) = self.apply(word) {
            if !rule.edits() {
                break;
            }

            changed = true;
        }

        changed
    }
}

/// Deletes the last character when the word ends with one of `pairs`,
/// looking only inside `region`.
pub fn undouble(word: &mut Word, region: Region, pairs: &[&str]) -> bool {
    let limit = word.region_start(region);

    let found = pairs
        .iter()
        .any(|pair| word.suffix_start(pair).is_some_and(|start| start >= limit));

    if found {
        word.pop();
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stemmers::regions::Regions;

    fn word(text: &str, r1: usize) -> Word {
        let mut w = Word::new(text.chars().collect(), "aeiouy");
        w.mark(Regions { r1, r2: r1, rv: None });
        w
    }

    static PLURALS: &[Rule] = &[
        Rule::replace("sses", "ss"),
        Rule::keep("ss"),
        Rule::delete("s").when(Guard::AfterConsonant),
    ];

    static ENDINGS: &[Rule] = &[Rule::delete("aren").within(Region::R1), Rule::delete("en")];

    #[test]
    fn test_first_match_wins() {
        let stage = Stage::new("plurals", PLURALS);
        let tests = [
            ("caresses", "caress"),
            ("chess", "chess"),
            ("cats", "cat"),
            ("bias", "bias"),
            ("s", "s"),
        ];

        for (string, expected) in tests {
            let mut w = word(string, 0);
            stage.apply(&mut w);
            assert_eq!(w.to_string(), expected);
        }
    }

    #[test]
    fn test_failing_region_stops_the_stage() {
        let stage = Stage::new("endings", ENDINGS);
        let mut w = word("klockaren", 6);

        assert!(stage.apply(&mut w).is_none());
        assert_eq!(w.to_string(), "klockaren");
    }

    #[test]
    fn test_within_skips_suffixes_out_of_the_region() {
        let stage = Stage::new("endings", ENDINGS).within(Region::R1);
        let mut w = word("klockaren", 6);

        assert_eq!(stage.apply(&mut w).map(|rule| rule.suffix), Some("en"));
        assert_eq!(w.to_string(), "klockar");
    }

    #[test]
    fn test_repeat() {
        static SHRINK: &[Rule] = &[Rule::replace("abilitate", "abil"), Rule::replace("abil", "ab")];
        let stage = Stage::new("shrink", SHRINK);
        let mut w = word("probabilitate", 0);

        assert!(stage.repeat(&mut w));
        assert_eq!(w.to_string(), "probab");
    }

    #[test]
    fn test_undouble() {
        let mut w = word("mall", 3);
        assert!(!undouble(&mut w, Region::R1, &["dd", "gd"]));

        let mut w = word("klocklikt", 4);
        assert!(undouble(&mut w, Region::R1, &["kt", "tt"]));
        assert_eq!(w.to_string(), "klocklik");
    }
}
