//! The search pipeline: select the corpus, build the matcher, scan, sort.
//!
//! # Examples
//!
//! ```
//! use wordsieve::corpus::{Corpus, SourceSelection};
//! use wordsieve::search::{search, SearchConfig, SearchMode};
//! use wordsieve::word_source::{SourceKind, WordSource};
//!
//! let dict = WordSource::parse_from_str(SourceKind::Dict, "cat\nact\ntac\ndog");
//! let corpus: Corpus = [dict].into_iter().collect();
//!
//! let config = SearchConfig::new("act")
//!     .with_mode(SearchMode::Anagram)
//!     .with_sources(SourceSelection::all());
//! assert_eq!(search(&corpus, &config)?, vec!["cat", "act", "tac"]);
//! # Ok::<(), wordsieve::errors::SearchError>(())
//! ```

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::corpus::{Corpus, SourceSelection};
use crate::errors::SearchError;
use crate::matcher::Matcher;

/// How a query is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    /// The query is a regular expression.
    #[default]
    Pattern,
    /// The query is a bag of letters (`.` = any one letter).
    Anagram,
}

impl SearchMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Pattern => "pattern",
            SearchMode::Anagram => "anagram",
        }
    }

    /// The mode after this one when cycling through modes.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SearchMode::Pattern => SearchMode::Anagram,
            SearchMode::Anagram => SearchMode::Pattern,
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pattern" => Ok(SearchMode::Pattern),
            "anagram" => Ok(SearchMode::Anagram),
            _ => Err(SearchError::UnknownMode { mode: s.to_string() }),
        }
    }
}

/// Everything one search needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Lowercase query. Empty means "no search".
    pub query: String,
    pub mode: SearchMode,
    /// Anchored pattern / equal-length anagram when true; substring / sub-multiset when false.
    pub exact: bool,
    pub sources: SourceSelection,
}

impl SearchConfig {
    /// A pattern search, exact, over the default sources.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        SearchConfig {
            query: query.into(),
            mode: SearchMode::default(),
            exact: true,
            sources: SourceSelection::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    #[must_use]
    pub fn with_sources(mut self, sources: SourceSelection) -> Self {
        self.sources = sources;
        self
    }
}

/// Run one search over `corpus`.
///
/// Returns every matching word, longest first. Words of equal length keep
/// their scan order (source priority, then order within the source).
/// An empty query returns an empty list without scanning.
///
/// # Errors
///
/// `SearchError::InvalidPattern` if the query is not a valid regular
/// expression in pattern mode. No partial results are returned.
pub fn search<'c>(corpus: &'c Corpus, config: &SearchConfig) -> Result<Vec<&'c str>, SearchError> {
    if config.query.is_empty() {
        return Ok(Vec::new());
    }

    let matcher = Matcher::build(&config.query, config.mode, config.exact)?;
    debug!(
        "Scanning {} words ({} {}, exact={})",
        corpus.selected_len(config.sources),
        config.mode,
        config.query,
        config.exact
    );

    let mut results: Vec<&str> = corpus
        .select(config.sources)
        .filter(|word| matcher.matches(word))
        .collect();

    // `sort_by_key` is stable, so ties stay in scan order
    results.sort_by_key(|word| Reverse(word.chars().count()));

    debug!("{} matches", results.len());
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word_source::{SourceKind, WordSource};

    fn corpus_of(kind: SourceKind, words: &[&str]) -> Corpus {
        [WordSource::new(kind, words.iter().map(|w| w.to_string()).collect())]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_mode_from_str_and_display() {
        assert_eq!("pattern".parse::<SearchMode>().unwrap(), SearchMode::Pattern);
        assert_eq!("Anagram".parse::<SearchMode>().unwrap(), SearchMode::Anagram);
        assert_eq!(SearchMode::Anagram.to_string(), "anagram");
        let err = "fuzzy".parse::<SearchMode>().unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn test_mode_cycles() {
        assert_eq!(SearchMode::Pattern.next(), SearchMode::Anagram);
        assert_eq!(SearchMode::Anagram.next(), SearchMode::Pattern);
    }

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::new("abc");
        assert_eq!(config.query, "abc");
        assert_eq!(config.mode, SearchMode::Pattern);
        assert!(config.exact);
        assert_eq!(config.sources, SourceSelection::default());
    }

    #[test]
    fn test_empty_query_short_circuits() {
        let corpus = corpus_of(SourceKind::Dict, &["cat", "dog"]);
        for mode in [SearchMode::Pattern, SearchMode::Anagram] {
            for exact in [true, false] {
                let config = SearchConfig::new("").with_mode(mode).with_exact(exact);
                assert!(search(&corpus, &config).unwrap().is_empty());
            }
        }
    }

    #[test]
    fn test_results_sorted_longest_first_stable() {
        let corpus = corpus_of(SourceKind::Dict, &["ab", "abcd", "abc", "ba", "bcda"]);
        let config = SearchConfig::new("b").with_exact(false);
        assert_eq!(search(&corpus, &config).unwrap(), vec!["abcd", "bcda", "abc", "ab", "ba"]);
    }

    #[test]
    fn test_invalid_pattern_propagates() {
        let corpus = corpus_of(SourceKind::Dict, &["cat"]);
        let err = search(&corpus, &SearchConfig::new("ca[")).unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_zero_matches_is_ok() {
        let corpus = corpus_of(SourceKind::Dict, &["cat"]);
        assert_eq!(search(&corpus, &SearchConfig::new("dog")).unwrap(), Vec::<&str>::new());
    }

    #[test]
    fn test_disabled_sources_are_not_searched() {
        let corpus = corpus_of(SourceKind::Wiki, &["cat"]);
        // Wikipedia is off by default
        assert!(search(&corpus, &SearchConfig::new("cat")).unwrap().is_empty());
        let all = SearchConfig::new("cat").with_sources(SourceSelection::all());
        assert_eq!(search(&corpus, &all).unwrap(), vec!["cat"]);
    }
}
