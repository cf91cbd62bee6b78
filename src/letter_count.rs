//! `LetterCount` — the letter multiset behind anagram matching.
//!
//! Lowercase ASCII letters live in a fixed array; anything else (digits,
//! punctuation, non-ASCII letters) spills into an ordered map, so counting
//! never fails on arbitrary input. The wildcard placeholder (`.`) is skipped.
//!
//! A letter that was never seen has count zero. Comparisons only look at the
//! letters present in the *required* side (see [`LetterCount::covers`]).

use std::collections::BTreeMap;

use crate::word_char::{ALPHABET_SIZE, WordChar};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCount {
    ascii: [u32; ALPHABET_SIZE],
    other: BTreeMap<char, u32>,
}

impl LetterCount {
    /// Count every character of `word` except the wildcard.
    #[must_use]
    pub fn of(word: &str) -> Self {
        word.chars().collect()
    }

    /// True if `self` holds at least as many of every letter as `required` does,
    /// i.e. `required` is a sub-multiset of `self`.
    #[must_use]
    pub fn covers(&self, required: &LetterCount) -> bool {
        self.ascii
            .iter()
            .zip(required.ascii.iter())
            .all(|(have, need)| have >= need)
            && required
                .other
                .iter()
                .all(|(c, &need)| self.other.get(c).copied().unwrap_or(0) >= need)
    }

    fn add(&mut self, c: char) {
        if c.is_wildcard() {
            return;
        }
        match c.alphabet_index() {
            Some(idx) => self.ascii[idx] += 1,
            None => *self.other.entry(c).or_insert(0) += 1,
        }
    }
}

impl FromIterator<char> for LetterCount {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut counts = LetterCount::default();
        for c in iter {
            counts.add(c);
        }
        counts
    }
}

#[cfg(test)]
impl LetterCount {
    fn get(&self, c: char) -> u32 {
        match c.alphabet_index() {
            Some(idx) => self.ascii[idx],
            None => self.other.get(&c).copied().unwrap_or(0),
        }
    }

    fn total(&self) -> u32 {
        self.ascii.iter().sum::<u32>() + self.other.values().sum::<u32>()
    }
}
