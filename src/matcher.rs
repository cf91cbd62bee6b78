//! Compiles a query into a word predicate.
//!
//! A [`Matcher`] is built once per search and then asked about every word in
//! the corpus. It holds no mutable state.
//!
//! Queries are expected to be lowercase already; the matcher never folds case.

use fancy_regex::Regex;

use crate::errors::SearchError;
use crate::letter_count::LetterCount;
use crate::search::SearchMode;

#[derive(Debug, Clone)]
pub enum Matcher {
    /// Regular-expression match (already anchored in exact mode).
    Pattern { regex: Regex },
    /// Letter-multiset match against the query's letters (wildcards excluded).
    /// `len` is the query length in `char`s, wildcards included.
    Anagram { counts: LetterCount, len: usize, exact: bool },
}

impl Matcher {
    /// Build the predicate for `query` in `mode`.
    ///
    /// # Errors
    ///
    /// `SearchError::InvalidPattern` if `mode` is `Pattern` and `query` does not
    /// compile. Anagram mode never fails.
    pub fn build(query: &str, mode: SearchMode, exact: bool) -> Result<Self, SearchError> {
        match mode {
            SearchMode::Pattern => {
                // the query must stand on its own: a stray ')' could otherwise
                // close the anchoring group below
                let unanchored =
                    Regex::new(query).map_err(|e| SearchError::invalid_pattern(query, e))?;
                if !exact {
                    return Ok(Matcher::Pattern { regex: unanchored });
                }

                // group the query so an alternation is anchored as a whole
                let regex = Regex::new(&format!("^(?:{query})$"))
                    .map_err(|e| SearchError::invalid_pattern(query, e))?;
                Ok(Matcher::Pattern { regex })
            }
            SearchMode::Anagram => Ok(Matcher::Anagram {
                counts: LetterCount::of(query),
                len: query.chars().count(),
                exact,
            }),
        }
    }

    /// Does `word` satisfy the query?
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        match self {
            // a runtime failure (e.g., backtrack limit) counts as no match
            Matcher::Pattern { regex } => regex.is_match(word).unwrap_or(false),
            Matcher::Anagram { counts, len, exact } => {
                let word_len = word.chars().count();
                let long_enough = if *exact {
                    word_len == *len
                } else {
                    word_len >= *len
                };
                // length first: skips counting most of the corpus
                long_enough && LetterCount::of(word).covers(counts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(query: &str, exact: bool) -> Matcher {
        Matcher::build(query, SearchMode::Pattern, exact).unwrap()
    }

    fn anagram(query: &str, exact: bool) -> Matcher {
        Matcher::build(query, SearchMode::Anagram, exact).unwrap()
    }

    #[test]
    fn test_pattern_exact_is_anchored() {
        let m = pattern("ca.", true);
        assert!(m.matches("cat"));
        assert!(m.matches("car"));
        assert!(!m.matches("cats"));
        assert!(!m.matches("scat"));
    }

    #[test]
    fn test_pattern_inexact_is_substring() {
        let m = pattern("ca.", false);
        assert!(m.matches("cat"));
        assert!(m.matches("scats"));
        assert!(m.matches("educate"));
        assert!(!m.matches("ac"));
    }

    #[test]
    fn test_pattern_exact_anchors_alternation_as_a_whole() {
        let m = pattern("cat|dog", true);
        assert!(m.matches("cat"));
        assert!(m.matches("dog"));
        assert!(!m.matches("cats"));
        assert!(!m.matches("hotdog"));
    }

    #[test]
    fn test_pattern_with_explicit_anchors() {
        let m = pattern("^ca.$", true);
        assert!(m.matches("cat"));
        assert!(m.matches("ca."));
        assert!(!m.matches("cart"));
    }

    #[test]
    fn test_pattern_dot_matches_stored_wildcard() {
        // a '.' stored in a word is an ordinary character to the regex engine
        let m = pattern("r.d", true);
        assert!(m.matches("r.d"));
        assert!(m.matches("red"));
        assert!(pattern("r\\.d", true).matches("r.d"));
        assert!(!pattern("r\\.d", true).matches("red"));
    }

    #[test]
    fn test_pattern_backreference() {
        // lookaround and backreferences follow browser-regex syntax
        let m = pattern("(.)\\1", false);
        assert!(m.matches("book"));
        assert!(!m.matches("bok"));
        assert!(pattern("(?=.*z).*", true).matches("lazy"));
    }

    #[test]
    fn test_pattern_empty_query() {
        assert!(pattern("", false).matches("anything"));
        assert!(pattern("", true).matches(""));
        assert!(!pattern("", true).matches("a"));
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        for bad in ["[", "ab(c", "(", "[a-"] {
            for exact in [true, false] {
                let err = Matcher::build(bad, SearchMode::Pattern, exact).unwrap_err();
                match err {
                    SearchError::InvalidPattern { ref pattern, .. } => assert_eq!(pattern, bad),
                    other => panic!("expected InvalidPattern for {bad:?}, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_unbalanced_paren_cannot_escape_anchoring() {
        for bad in ["a)|(b", "a)(?:b", "a)"] {
            for exact in [true, false] {
                let err = Matcher::build(bad, SearchMode::Pattern, exact).unwrap_err();
                assert_eq!(err.code(), "E001", "{bad:?} exact={exact}");
            }
        }
    }

    #[test]
    fn test_anagram_never_fails() {
        for q in ["", "[", "(", "é!1", "..."] {
            assert!(Matcher::build(q, SearchMode::Anagram, true).is_ok());
            assert!(Matcher::build(q, SearchMode::Anagram, false).is_ok());
        }
    }

    #[test]
    fn test_anagram_exact() {
        let m = anagram("act", true);
        assert!(m.matches("cat"));
        assert!(m.matches("tac"));
        assert!(m.matches("act"));
        assert!(!m.matches("cats"));
        assert!(!m.matches("dog"));
        assert!(!m.matches("caa"));
    }

    #[test]
    fn test_anagram_exact_with_wildcards() {
        // each '.' holds one position without requiring a letter
        let m = anagram("ca.", true);
        assert!(m.matches("cat"));
        assert!(m.matches("arc"));
        assert!(m.matches("cab"));
        assert!(!m.matches("ca"));
        assert!(!m.matches("cart"));
        assert!(!m.matches("dog"));
    }

    #[test]
    fn test_anagram_exact_repeated_letters() {
        let m = anagram("ll.", true);
        assert!(m.matches("all"));
        assert!(m.matches("ill"));
        assert!(!m.matches("lap"));
    }

    #[test]
    fn test_anagram_inexact_contains() {
        let m = anagram("at", false);
        assert!(m.matches("cats"));
        assert!(m.matches("act"));
        assert!(m.matches("at"));
        assert!(m.matches("ta"));
        assert!(!m.matches("a"));
        assert!(!m.matches("dog"));
    }

    #[test]
    fn test_anagram_inexact_counts_multiplicity() {
        let m = anagram("ss", false);
        assert!(m.matches("moss"));
        assert!(m.matches("sis"));
        assert!(!m.matches("sun"));
    }

    #[test]
    fn test_anagram_stored_wildcard_is_not_a_letter() {
        // "ca." in the corpus only offers 'c' and 'a'
        assert!(!anagram("cat", true).matches("ca."));
        assert!(anagram("ac.", true).matches("ca."));
    }

    #[test]
    fn test_anagram_empty_query() {
        assert!(anagram("", false).matches("anything"));
        assert!(anagram("", false).matches(""));
        assert!(!anagram("", true).matches("a"));
        assert!(anagram("", true).matches(""));
    }

    #[test]
    fn test_anagram_length_counts_chars_not_bytes() {
        let m = anagram("é.", true);
        assert!(m.matches("éa"));
        assert!(!m.matches("ea"));
        assert!(!m.matches("éab"));
    }
}
