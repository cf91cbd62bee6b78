use crate::corpus::{Corpus, SourceSelection};
use crate::errors::SearchError;
use crate::log::init_logger;
use crate::search::{search, SearchConfig, SearchMode};
use crate::word_source::{SourceKind, WordSource};
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// What went wrong, in more detail (may be empty)
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SearchError> for WasmError {
    fn from(e: SearchError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {} ({}): {}", e.code, e.description, e.message);
        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }
        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }
        let js_err = js_sys::Error::new(&msg);
        // keep the code machine-readable so the UI can tell a bad pattern from "no results"
        js_err.set_name(&e.code);
        js_err.into()
    }
}

/// Initialize panic reporting and logging.
///
/// Must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// The engine as seen from JavaScript: load each word list once, then search many times.
#[wasm_bindgen]
#[derive(Default)]
pub struct WordSieve {
    corpus: Corpus,
}

#[wasm_bindgen]
impl WordSieve {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WordSieve {
        WordSieve::default()
    }

    /// Parse a newline-separated list and register it as source `kind`
    /// ("wiki", "nyc" or "dict"). Returns the number of words kept.
    pub fn load_source(&mut self, kind: &str, text: &str) -> Result<usize, JsValue> {
        let kind: SourceKind = kind.parse().map_err(WasmError::from)?;
        let source = WordSource::parse_from_str(kind, text);
        let len = source.len();
        self.corpus.insert(source);
        log::debug!("Registered {len} {kind} words");
        Ok(len)
    }

    /// Number of words registered for `kind` (0 if none).
    pub fn source_len(&self, kind: &str) -> Result<usize, JsValue> {
        let kind: SourceKind = kind.parse().map_err(WasmError::from)?;
        Ok(self.corpus.get(kind).map_or(0, WordSource::len))
    }

    /// Run one search and return the matches as `string[]`, longest first.
    ///
    /// The query should already be lowercase.
    pub fn search(
        &self,
        query: &str,
        mode: &str,
        exact: bool,
        use_dict: bool,
        use_nyc: bool,
        use_wiki: bool,
    ) -> Result<JsValue, JsValue> {
        let mode: SearchMode = mode.parse().map_err(WasmError::from)?;
        let config = SearchConfig::new(query)
            .with_mode(mode)
            .with_exact(exact)
            .with_sources(SourceSelection {
                use_wiki,
                use_nyc,
                use_dict,
            });

        let results = search(&self.corpus, &config).map_err(WasmError::from)?;

        serde_wasm_bindgen::to_value(&results).map_err(|e| {
            WasmError {
                code: "WASM001".to_string(),
                message: format!("serialization failed: {e}"),
                description: "Failed to serialize results".to_string(),
                details: "The matches could not be converted to a JavaScript array.".to_string(),
                help: Some("This is an internal error. Please report this issue.".to_string()),
            }
            .into()
        })
    }
}
