//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! - Loads all three word lists once, then runs each query several times and reports the median.
//! - Every case searches all sources, so timings reflect a full corpus scan.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print a few results:            `cargo run --bin bench_local --release -- -p 5`

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordsieve::corpus::{Corpus, SourceSelection};
use wordsieve::search::{self, SearchConfig, SearchMode};
use wordsieve::word_source::{SourceKind, WordSource};

/// Simple local benchmark runner: load the word lists once, time several queries.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding wiki.txt, nyc.txt and dict.txt
    #[arg(short, long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data"))]
    data_dir: String,

    /// Number of repeats per query (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many results per query (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark case: one query as the UI would send it.
#[derive(Clone)]
struct Case {
    query: &'static str,
    mode: SearchMode,
    exact: bool,
}

impl Case {
    fn config(&self) -> SearchConfig {
        SearchConfig::new(self.query)
            .with_mode(self.mode)
            .with_exact(self.exact)
            .with_sources(SourceSelection::all())
    }

    fn name(&self) -> String {
        format!("{} {}{}", self.mode, self.query, if self.exact { "" } else { " (inexact)" })
    }
}

fn get_cases() -> Vec<Case> {
    vec![
        Case { query: "c.t", mode: SearchMode::Pattern, exact: true },
        Case { query: "ing$", mode: SearchMode::Pattern, exact: false },
        Case { query: "(.)\\1.*(.)\\2", mode: SearchMode::Pattern, exact: true },
        Case { query: "[aeiou]{4}", mode: SearchMode::Pattern, exact: false },
        Case { query: "listen", mode: SearchMode::Anagram, exact: true },
        Case { query: "e.st..", mode: SearchMode::Anagram, exact: true },
        Case { query: "qu", mode: SearchMode::Anagram, exact: false },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_NAME_LEN: usize = 40;

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // Load once. This I/O is *not* included in per-query timing.
    let t_load = Instant::now();
    let mut corpus = Corpus::new();
    for kind in SourceKind::ALL {
        let file = match kind {
            SourceKind::Wiki => "wiki.txt",
            SourceKind::Nyc => "nyc.txt",
            SourceKind::Dict => "dict.txt",
        };
        corpus.insert(WordSource::load_from_path(kind, format!("{}/{file}", cli.data_dir))?);
    }
    eprintln!(
        "Loaded {} words in {:.3}s",
        corpus.selected_len(SourceSelection::all()),
        t_load.elapsed().as_secs_f64()
    );

    let mut summary: Vec<(String, f64, usize)> = Vec::new();

    for (idx, case) in get_cases().iter().enumerate() {
        let config = case.config();
        eprintln!("\n[{:02}] {}", idx + 1, case.name());

        // One warm-up run per query, not timed.
        if let Err(e) = search::search(&corpus, &config) {
            eprintln!("  ✗ Warm-up failed: {}", e.display_detailed());
            continue;
        }

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_results: Vec<&str> = Vec::new();

        for rep in 0..cli.num_repeats {
            let t_search = Instant::now();
            let results = match search::search(&corpus, black_box(&config)) {
                Ok(results) => results,
                Err(e) => {
                    eprintln!("  ✗ Run {}/{} failed: {}", rep + 1, cli.num_repeats, e);
                    continue;
                }
            };
            let secs = t_search.elapsed().as_secs_f64();
            times.push(secs);
            last_results = black_box(results);
            eprintln!("  run {:>2}/{:>2}: {:.4}s ({} results)", rep + 1, cli.num_repeats, secs, last_results.len());
        }

        let med = median(times);
        for word in last_results.iter().take(cli.print_limit) {
            println!("{word}");
        }
        eprintln!(
            "  → median {:.4}s over {} run(s); {} {}",
            med,
            cli.num_repeats,
            last_results.len(),
            pluralizer(last_results.len(), "result".into(), None)
        );
        summary.push((case.name(), med, last_results.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_NAME_LEN$} | {:>10} | {:>9}", "query", "median (s)", "# results");
    eprintln!("{:-<MAX_NAME_LEN$}-+-{:-<10}-+-{:-<9}", "", "", "");
    for (name, med, num_results) in &summary {
        let display = if name.chars().count() > MAX_NAME_LEN {
            format!("{}…", name.chars().take(MAX_NAME_LEN - 1).collect::<String>())
        } else {
            name.clone()
        };
        eprintln!("{display:<MAX_NAME_LEN$} | {med:>10.4} | {num_results:>9}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}
