//! Shared plumbing for the `fws-search` and `fws-conformance` binaries:
//! run configuration files, flag overlay, and log setup.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use clap::Args;
use fws_search::{Depth, Params, SearchLimits, SEED_DEPTH};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "fws_search=info,fws_conformance=info,fws_clients=info";

/// Run configuration as read from a TOML file. Every field is optional.
///
/// ```toml
/// n = 10
/// a = 5
/// b = 6
/// c = 7
/// max_depth = 50
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Alphabet size `N`.
    pub n: Option<u32>,
    /// Shortest period `A`.
    pub a: Option<u32>,
    /// Middle period `B`.
    pub b: Option<u32>,
    /// Longest period `C`.
    pub c: Option<u32>,
    /// Depth ceiling: patterns at this depth are not expanded.
    pub max_depth: Option<Depth>,
    /// Expansion budget.
    pub max_steps: Option<u64>,
}

impl RunConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, unknown keys, or out-of-range values.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse run configuration")
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Overlay the values set on `other`.
    #[must_use]
    pub fn merge(self, other: RunConfig) -> Self {
        Self {
            n: other.n.or(self.n),
            a: other.a.or(self.a),
            b: other.b.or(self.b),
            c: other.c.or(self.c),
            max_depth: other.max_depth.or(self.max_depth),
            max_steps: other.max_steps.or(self.max_steps),
        }
    }

    /// Validated parameters, falling back to `N=10 A=5 B=6 C=7` per field.
    ///
    /// # Errors
    ///
    /// Returns an error naming the violated bound.
    pub fn params(&self) -> Result<Params> {
        let d = Params::DEFAULT;
        let (n, a, b, c) = (
            self.n.unwrap_or(d.alphabet()),
            self.a.unwrap_or(d.a()),
            self.b.unwrap_or(d.b()),
            self.c.unwrap_or(d.c()),
        );
        Params::new(n, a, b, c)
            .with_context(|| format!("Invalid parameters N={} A={} B={} C={}", n, a, b, c))
    }

    /// Search cutoffs.
    ///
    /// # Errors
    ///
    /// Returns an error for a depth ceiling of 0, which would not even admit
    /// the seed pattern at depth 1.
    pub fn limits(&self) -> Result<SearchLimits> {
        ensure!(
            self.max_depth != Some(0),
            "max_depth must be at least {}",
            SEED_DEPTH
        );
        Ok(SearchLimits {
            max_depth: self.max_depth,
            max_steps: self.max_steps,
        })
    }
}

/// `N`, `A`, `B`, `C` flags shared by both binaries.
#[derive(Debug, Clone, Default, Args)]
pub struct ParamArgs {
    /// Read parameters and limits from a TOML file; flags override its values.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Alphabet size N (default 10).
    #[arg(short, long)]
    pub n: Option<u32>,

    /// Shortest period A, at least 3 (default 5).
    #[arg(short, long)]
    pub a: Option<u32>,

    /// Middle period B (default 6).
    #[arg(short, long)]
    pub b: Option<u32>,

    /// Longest period C, at most N - 3 (default 7).
    #[arg(short, long)]
    pub c: Option<u32>,

    /// Do not expand patterns at this depth or deeper (at least 1).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_depth: Option<Depth>,

    /// Stop after this many expansions.
    #[arg(long)]
    pub max_steps: Option<u64>,
}

impl ParamArgs {
    /// The file configuration, if any, with flags laid over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        Ok(file.merge(RunConfig {
            n: self.n,
            a: self.a,
            b: self.b,
            c: self.c,
            max_depth: self.max_depth,
            max_steps: self.max_steps,
        }))
    }
}

/// Install the stderr log subscriber, honouring `RUST_LOG`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
