//! `fws-search`: builds the rule table for `N`, `A`, `B`, `C`, runs the
//! depth-ordered discovery search, and prints every first occurrence.
//!
//! **Output (stdout):**
//! - `text`: `Start: ..` and `Rule: i -> ..` lines, a blank line, then one
//!   `Depth d: First occurrence of pattern|word ..` line per discovery
//! - `json`: one JSON object per line, tagged by `kind`
//!
//! Logs go to stderr; set `RUST_LOG` to change the filter.
//!
//! **Usage:**
//! ```
//! fws-search [-n 10] [-a 5] [-b 6] [-c 7] [--config run.toml]
//!            [--max-depth D] [--max-steps S] [--format text|json] [--summary]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fws_clients::{init_tracing, ParamArgs};
use fws_search::bounds::Bounds;
use fws_search::{
    Depth, OutputFormat, RuleTable, Search, SearchOutcome, Summary, Word, WriterSink,
};
use serde::Serialize;
use tracing::info;

/// Output format flag.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    /// Human-readable lines.
    #[default]
    Text,
    /// JSON lines.
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Run the fractal word search.
#[derive(Parser)]
#[command(
    name = "fws-search",
    about = "Find the first-occurrence depth of every pattern and word of a substitution tiling"
)]
struct Args {
    #[command(flatten)]
    params: ParamArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t)]
    format: Format,

    /// Print per-depth totals and the predicted delayed-word depth at the end.
    #[arg(long)]
    summary: bool,
}

/// Trailing JSON record written by `--summary --format json`.
#[derive(Serialize)]
struct SummaryRecord<'a> {
    kind: &'static str,
    stop: String,
    steps: u64,
    patterns: usize,
    words: usize,
    max_pattern_depth: Option<Depth>,
    max_word_depth: Option<Depth>,
    deepest_words: &'a [Word],
    bounds: Bounds,
}

fn write_summary<W: Write>(
    out: &mut W,
    format: Format,
    summary: &Summary,
    outcome: &SearchOutcome,
    bounds: Bounds,
) -> io::Result<()> {
    match format {
        Format::Json => {
            let record = SummaryRecord {
                kind: "summary",
                stop: format!("{:?}", outcome.stop),
                steps: outcome.state.steps(),
                patterns: summary.pattern_total(),
                words: summary.word_total(),
                max_pattern_depth: summary.max_pattern_depth(),
                max_word_depth: summary.max_word_depth(),
                deepest_words: summary.deepest_words(),
                bounds,
            };
            let line = serde_json::to_string(&record).map_err(io::Error::from)?;
            writeln!(out, "{}", line)
        }
        Format::Text => {
            writeln!(out)?;
            writeln!(out, "Summary")?;
            writeln!(out, "=======")?;
            writeln!(out, "Stop: {:?} after {} expansions", outcome.stop, outcome.state.steps())?;
            writeln!(
                out,
                "Patterns: {} (deepest at {})",
                summary.pattern_total(),
                depth_or_none(summary.max_pattern_depth())
            )?;
            writeln!(
                out,
                "Words: {} (deepest at {})",
                summary.word_total(),
                depth_or_none(summary.max_word_depth())
            )?;
            for word in summary.deepest_words() {
                writeln!(out, "  deepest word: {}", word)?;
            }
            writeln!(
                out,
                "Predicted delayed word depth: lcm(A, B, C) + 1 = {}",
                bounds.delayed_word_depth
            )?;
            if let Some(bound) = bounds.worst_case_lower_bound {
                writeln!(out, "Worst-case lower bound for this alphabet: {}", bound)?;
            }
            writeln!(out)?;
            writeln!(out, "Depth  Patterns  Words")?;
            let words: std::collections::BTreeMap<_, _> = summary.words_by_depth().collect();
            let patterns: std::collections::BTreeMap<_, _> = summary.patterns_by_depth().collect();
            let mut depths: Vec<_> = patterns.keys().chain(words.keys()).copied().collect();
            depths.sort_unstable();
            depths.dedup();
            for depth in depths {
                writeln!(
                    out,
                    "{:>5}  {:>8}  {:>5}",
                    depth,
                    patterns.get(&depth).copied().unwrap_or(0),
                    words.get(&depth).copied().unwrap_or(0)
                )?;
            }
            Ok(())
        }
    }
}

fn depth_or_none(depth: Option<Depth>) -> String {
    depth.map_or_else(|| "-".to_string(), |d| d.to_string())
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = args.params.resolve()?;
    let params = config.params()?;
    let limits = config.limits()?;
    info!(%params, ?limits, "configuration loaded");

    let table = RuleTable::build(&params);
    let stdout = io::stdout();
    let mut sink = WriterSink::new(BufWriter::new(stdout.lock()), args.format.into());
    let mut summary = Summary::new();

    let outcome = Search::new(&table)
        .with_limits(limits)
        .run((&mut sink, &mut summary));

    let mut out = sink.finish().context("Failed to write search results")?;
    if args.summary {
        write_summary(&mut out, args.format, &summary, &outcome, Bounds::for_params(&params))
            .and_then(|()| out.flush())
            .context("Failed to write summary")?;
    }

    Ok(())
}
