//! The corpus: every registered word source, and the view over the ones a
//! query has switched on.

use std::collections::BTreeMap;

use crate::word_source::{SourceKind, WordSource};

/// Which sources a query draws from. One flag per [`SourceKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSelection {
    pub use_wiki: bool,
    pub use_nyc: bool,
    pub use_dict: bool,
}

impl Default for SourceSelection {
    /// Dictionary and NYC on, Wikipedia off.
    fn default() -> Self {
        SourceSelection {
            use_wiki: false,
            use_nyc: true,
            use_dict: true,
        }
    }
}

impl SourceSelection {
    #[must_use]
    pub fn all() -> Self {
        SourceSelection {
            use_wiki: true,
            use_nyc: true,
            use_dict: true,
        }
    }

    #[must_use]
    pub fn none() -> Self {
        SourceSelection {
            use_wiki: false,
            use_nyc: false,
            use_dict: false,
        }
    }

    #[must_use]
    pub fn includes(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Wiki => self.use_wiki,
            SourceKind::Nyc => self.use_nyc,
            SourceKind::Dict => self.use_dict,
        }
    }

    /// Return a copy with the flag for `kind` set to `enabled`.
    #[must_use]
    pub fn with(mut self, kind: SourceKind, enabled: bool) -> Self {
        match kind {
            SourceKind::Wiki => self.use_wiki = enabled,
            SourceKind::Nyc => self.use_nyc = enabled,
            SourceKind::Dict => self.use_dict = enabled,
        }
        self
    }
}

/// All loaded word sources, at most one per kind. Read-only once searches start.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    // keyed by kind, so iteration follows priority order
    sources: BTreeMap<SourceKind, WordSource>,
}

impl Corpus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `source`, replacing (and returning) any previous source of the same kind.
    pub fn insert(&mut self, source: WordSource) -> Option<WordSource> {
        self.sources.insert(source.kind, source)
    }

    #[must_use]
    pub fn get(&self, kind: SourceKind) -> Option<&WordSource> {
        self.sources.get(&kind)
    }

    /// Lazily chain the words of every selected source: source by source in
    /// priority order, each in its own order. Selected-but-missing sources
    /// contribute nothing.
    ///
    /// Each call builds a fresh iterator; nothing is copied.
    pub fn select(&self, selection: SourceSelection) -> impl Iterator<Item = &str> {
        self.sources
            .values()
            .filter(move |source| selection.includes(source.kind))
            .flat_map(|source| source.words.iter().map(String::as_str))
    }

    /// Number of words `select` yields for `selection`.
    #[must_use]
    pub fn selected_len(&self, selection: SourceSelection) -> usize {
        self.sources
            .values()
            .filter(|source| selection.includes(source.kind))
            .map(WordSource::len)
            .sum()
    }
}

impl FromIterator<WordSource> for Corpus {
    fn from_iter<I: IntoIterator<Item = WordSource>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for source in iter {
            corpus.insert(source);
        }
        corpus
    }
}
