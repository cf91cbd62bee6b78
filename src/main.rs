use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use wordsieve::corpus::{Corpus, SourceSelection};
use wordsieve::errors::SearchError;
use wordsieve::search::{self, SearchConfig, SearchMode};
use wordsieve::word_source::{SourceKind, WordSource};

/// Word-puzzle solver: regex and anagram search over combined word lists
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// The query: a regular expression (pattern mode) or a bag of letters (anagram mode; '.' = any letter)
    query: String,

    /// How to interpret the query: "pattern" or "anagram"
    #[arg(long, default_value_t = SearchMode::Pattern)]
    mode: SearchMode,

    /// Match anywhere in the word (pattern) or allow extra letters (anagram)
    #[arg(short, long)]
    inexact: bool,

    /// Include the Wikipedia list
    #[arg(long)]
    wiki: bool,

    /// Leave out the NYC list
    #[arg(long)]
    no_nyc: bool,

    /// Leave out the dictionary list
    #[arg(long)]
    no_dict: bool,

    /// Path to the Wikipedia word list (one word per line)
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wiki.txt"))]
    wiki_path: String,

    /// Path to the NYC word list (one word per line)
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/nyc.txt"))]
    nyc_path: String,

    /// Path to the dictionary word list (one word per line)
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dict.txt"))]
    dict_path: String,

    /// Print at most this many results (0 = all)
    #[arg(short = 'n', long, default_value_t = 0)]
    num_results: usize,
}

impl Cli {
    fn selection(&self) -> SourceSelection {
        SourceSelection {
            use_wiki: self.wiki,
            use_nyc: !self.no_nyc,
            use_dict: !self.no_dict,
        }
    }

    fn path_for(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Wiki => &self.wiki_path,
            SourceKind::Nyc => &self.nyc_path,
            SourceKind::Dict => &self.dict_path,
        }
    }
}

/// Entry point of the wordsieve CLI.
///
/// Delegates to [`try_main`] and turns any error into a message on stderr
/// and exit code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var(wordsieve::log::DEBUG_ENV_VAR).is_ok();
    wordsieve::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(search_err) = e.downcast_ref::<SearchError>() {
            eprintln!("Error: {}", search_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Steps:
/// 1. Parse CLI arguments.
/// 2. Load only the word lists the query switched on.
/// 3. Search (the query is lowercased here; the engine expects lowercase input).
/// 4. Print results on stdout, or "No results"; timings go to the log.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let selection = cli.selection();

    let t_load = Instant::now();
    let mut corpus = Corpus::new();
    for kind in SourceKind::ALL.into_iter().filter(|k| selection.includes(*k)) {
        corpus.insert(WordSource::load_from_path(kind, cli.path_for(kind))?);
    }
    let load_secs = t_load.elapsed().as_secs_f64();

    let config = SearchConfig::new(cli.query.to_lowercase())
        .with_mode(cli.mode)
        .with_exact(!cli.inexact)
        .with_sources(selection);

    let t_search = Instant::now();
    let results = search::search(&corpus, &config)?;
    let search_secs = t_search.elapsed().as_secs_f64();

    if results.is_empty() {
        if !config.query.is_empty() {
            println!("No results");
        }
    } else {
        let limit = if cli.num_results == 0 {
            results.len()
        } else {
            cli.num_results
        };
        for word in results.iter().take(limit) {
            println!("{word}");
        }
    }

    log::info!(
        "Loaded {} words in {:.3}s; searched in {:.3}s ({} matches).",
        corpus.selected_len(selection),
        load_secs,
        search_secs,
        results.len()
    );

    Ok(())
}
