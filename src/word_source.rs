//! `word_source` — loading and normalizing the word lists a search draws from
//!
//! Each source is a static, ordered list of lowercase words, read once at
//! startup (from a file on native builds, or from an in-memory string handed
//! over by JavaScript in the browser).
//!
//! The parsing logic:
//! - One entry per line; surrounding whitespace is trimmed.
//! - Empty lines and `#` comment lines are skipped.
//! - An optional `;score` suffix (crossword-list format) is dropped.
//! - Entries are lowercased and internal whitespace is removed ("New York" → "newyork").
//! - Duplicates are dropped, keeping the first occurrence.
//!
//! Unlike a crossword entry list, the result is NOT re-sorted: file order is
//! kept, because it decides the order of equal-length search results.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::SearchError;

/// The registered word sources, declared in search priority order
/// (the derived `Ord` is that order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceKind {
    /// Titles harvested from an encyclopedia.
    Wiki,
    /// City and place names.
    Nyc,
    /// A general-purpose dictionary.
    Dict,
}

impl SourceKind {
    /// All kinds, in priority order.
    pub const ALL: [SourceKind; 3] = [SourceKind::Wiki, SourceKind::Nyc, SourceKind::Dict];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SourceKind::Wiki => "wikipedia",
            SourceKind::Nyc => "nyc",
            SourceKind::Dict => "dictionary",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wiki" | "wikipedia" => Ok(SourceKind::Wiki),
            "nyc" => Ok(SourceKind::Nyc),
            "dict" | "dictionary" => Ok(SourceKind::Dict),
            _ => Err(SearchError::UnknownSource { name: s.to_string() }),
        }
    }
}

/// One immutable word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    pub kind: SourceKind,
    /// Lowercase words, in source order.
    /// Example: `["aardvark", "abacus", ...]`
    pub words: Vec<String>,
}

impl WordSource {
    /// Wrap an already-normalized list as-is.
    #[must_use]
    pub fn new(kind: SourceKind, words: Vec<String>) -> Self {
        WordSource { kind, words }
    }

    /// Parse a raw word list from an in-memory string.
    ///
    /// This is **WASM-safe** because it doesn't touch the filesystem.
    #[must_use]
    pub fn parse_from_str(kind: SourceKind, contents: &str) -> Self {
        let mut seen = HashSet::new();
        let words = contents
            .lines()
            .filter_map(normalize_line)
            // `insert` is false for repeats, so only first occurrences survive
            .filter(|word| seen.insert(word.clone()))
            .collect();

        WordSource { kind, words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(kind: SourceKind, path: P) -> std::io::Result<Self> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read {kind} word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        let source = Self::parse_from_str(kind, &data);
        log::debug!("Loaded {} {kind} words from {}", source.len(), path_ref.display());
        Ok(source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize_line(raw_line: &str) -> Option<String> {
    let line = raw_line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    // split on the first ';' only: everything after it is the score
    let entry = line.split_once(';').map_or(line, |(entry, _score)| entry);
    let word: String = entry
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    (!word.is_empty()).then_some(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(source: &WordSource) -> Vec<&str> {
        source.words.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_parse_basic() {
        let source = WordSource::parse_from_str(SourceKind::Dict, "cat\ndog\nbird");
        assert_eq!(source.kind, SourceKind::Dict);
        assert_eq!(words(&source), vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let source = WordSource::parse_from_str(SourceKind::Dict, "zebra\nab\napple");
        assert_eq!(words(&source), vec!["zebra", "ab", "apple"]);
    }

    #[test]
    fn test_parse_deduplicates_keeping_first() {
        let source = WordSource::parse_from_str(SourceKind::Dict, "dog\ncat\nDOG\ncat\nemu");
        assert_eq!(words(&source), vec!["dog", "cat", "emu"]);
    }

    #[test]
    fn test_parse_normalizes_case_and_spaces() {
        let source = WordSource::parse_from_str(SourceKind::Nyc, "New York\n  Staten   Island  \nBRONX");
        assert_eq!(words(&source), vec!["newyork", "statenisland", "bronx"]);
    }

    #[test]
    fn test_parse_drops_scores() {
        let source = WordSource::parse_from_str(SourceKind::Dict, "cat;50\ndog ; 60\nemu");
        assert_eq!(words(&source), vec!["cat", "dog", "emu"]);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let source = WordSource::parse_from_str(SourceKind::Dict, "# header\n\ncat\n   \n;10\ndog\n");
        assert_eq!(words(&source), vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_keeps_wildcard_placeholder() {
        let source = WordSource::parse_from_str(SourceKind::Wiki, "ca.\nr.d");
        assert_eq!(words(&source), vec!["ca.", "r.d"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let source = WordSource::parse_from_str(SourceKind::Dict, "");
        assert!(source.is_empty());
        assert_eq!(source.len(), 0);
    }

    #[test]
    fn test_source_kind_priority_order() {
        let mut kinds = vec![SourceKind::Dict, SourceKind::Wiki, SourceKind::Nyc];
        kinds.sort();
        assert_eq!(kinds, SourceKind::ALL.to_vec());
    }

    #[test]
    fn test_source_kind_from_str() {
        assert_eq!("wiki".parse::<SourceKind>().unwrap(), SourceKind::Wiki);
        assert_eq!("Wikipedia".parse::<SourceKind>().unwrap(), SourceKind::Wiki);
        assert_eq!("nyc".parse::<SourceKind>().unwrap(), SourceKind::Nyc);
        assert_eq!(" DICT ".parse::<SourceKind>().unwrap(), SourceKind::Dict);
        assert_eq!("dictionary".parse::<SourceKind>().unwrap(), SourceKind::Dict);

        let err = "atlas".parse::<SourceKind>().unwrap_err();
        assert_eq!(err.code(), "E003");
    }

    #[test]
    fn test_source_kind_display_round_trips() {
        for kind in SourceKind::ALL {
            assert_eq!(kind.to_string().parse::<SourceKind>().unwrap(), kind);
        }
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_load_from_missing_path_names_the_file() {
        let err = WordSource::load_from_path(SourceKind::Dict, "/definitely/not/here.txt").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("/definitely/not/here.txt"));
        assert!(err.to_string().contains("dictionary"));
    }
}
