//! Generate error code documentation from the source of truth (the error enum).
//!
//! Reads codes, descriptions, details and help text straight from
//! `SearchError`'s `code()`, `description()`, `details()` and `help()`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordsieve::errors::SearchError;

/// One sample of every `SearchError` variant, in code order.
fn all_search_error_variants() -> Vec<SearchError> {
    let bad_query = "ca[rt";
    let mut variants = Vec::new();
    // InvalidPattern--only the engine can build it, so provoke it through the public API
    if let Err(e) = wordsieve::search::search(
        &wordsieve::corpus::Corpus::new(),
        &wordsieve::search::SearchConfig::new(bad_query),
    ) {
        variants.push(e);
    }
    variants.push(SearchError::UnknownMode { mode: "fuzzy".to_string() });
    variants.push(SearchError::UnknownSource { name: "atlas".to_string() });
    variants
}

fn main() {
    println!("# Error Codes\n");
    println!("Generated by `cargo run --bin generate_error_docs`. Do not edit by hand.\n");

    for error in all_search_error_variants() {
        println!("### {}: {}\n", error.code(), error.description());
        println!("**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{help_text}");
            println!("```\n");
        }

        println!("**Example error message:**");
        println!("```");
        println!("{error}");
        println!("```\n");

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }
}
