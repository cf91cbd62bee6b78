//! Error types for query handling, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - E001: `InvalidPattern` (Query is not a valid regular expression)
//! - E002: `UnknownMode` (Unrecognized search mode name)
//! - E003: `UnknownSource` (Unrecognized word-source name)
//!
//! Zero matches is never an error: it is an empty result list.
//!
//! # Examples
//!
//! ```
//! use wordsieve::corpus::Corpus;
//! use wordsieve::search::{search, SearchConfig};
//!
//! let corpus = Corpus::default();
//! match search(&corpus, &SearchConfig::new("[")) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

/// Everything that can go wrong while turning user input into a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The query, in pattern mode, failed to compile as a regular expression.
    ///
    /// The regex error is boxed to keep `Result<_, SearchError>` small.
    #[error("Invalid pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("Unknown search mode \"{mode}\"")]
    UnknownMode { mode: String },

    #[error("Unknown word source \"{name}\"")]
    UnknownSource { name: String },
}

impl SearchError {
    pub(crate) fn invalid_pattern(pattern: &str, source: fancy_regex::Error) -> Self {
        SearchError::InvalidPattern { pattern: pattern.to_string(), source: Box::new(source) }
    }

    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::InvalidPattern { .. } => "E001",
            SearchError::UnknownMode { .. } => "E002",
            SearchError::UnknownSource { .. } => "E003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SearchError::InvalidPattern { .. } => "Query is not a valid regular expression",
            SearchError::UnknownMode { .. } => "Unrecognized search mode",
            SearchError::UnknownSource { .. } => "Unrecognized word source",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SearchError::InvalidPattern { .. } => "In pattern mode the query is compiled as a regular expression. Unbalanced brackets or parentheses, dangling quantifiers and similar syntax errors are reported here instead of returning an empty result.",
            SearchError::UnknownMode { .. } => "The search mode must be either `pattern` (regular-expression match) or `anagram` (letter-multiset match).",
            SearchError::UnknownSource { .. } => "Word sources are identified by name. The registered sources are `wiki` (alias `wikipedia`), `nyc` and `dict` (alias `dictionary`).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SearchError::InvalidPattern { .. } => Some("Check for unclosed '[' or '(' (e.g., use 'ca[rt]' not 'ca[rt'); escape a literal dot as '\\.'"),
            SearchError::UnknownMode { .. } => Some("Use 'pattern' or 'anagram'"),
            SearchError::UnknownSource { .. } => Some("Use one of 'wiki', 'nyc' or 'dict'"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
