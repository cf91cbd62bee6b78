// Reusable library API — shared by the CLI and the WASM build
pub mod corpus;
pub mod errors;
pub mod letter_count;
pub mod log;
pub mod matcher;
pub mod search;
pub mod word_char;
pub mod word_source;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use corpus::{Corpus, SourceSelection};
pub use errors::SearchError;
pub use search::{search, SearchConfig, SearchMode};
pub use word_source::{SourceKind, WordSource};
