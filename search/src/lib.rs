//! Fractal Word Search - first-occurrence depths in a substitution tiling.
//!
//! A rule table maps every symbol of an alphabet `[0, N)` to a 2×2 pattern.
//! Applying it to a 2×2 pattern yields a 4×4 block; the nine overlapping 2×2
//! sub-patterns of that block can be expanded again, and so on. This crate
//! computes, for every 2×2 pattern and every 3-symbol word that occurs in the
//! resulting tiling, the minimal number of substitution steps after which it
//! first appears.
//!
//! The rule table built from periods `A < B < C` hides a word that only
//! appears at depth `lcm(A, B, C) + 1`, which witnesses a cubic lower bound on
//! the worst-case first-occurrence depth (see [`bounds`]).
//!
//! # Pipeline
//!
//! ```text
//! Params ──▶ RuleTable ──▶ expand(pattern) ──▶ Block
//!                                               │
//!                      sub_patterns() / words() ◀┘
//!                                │
//!                  SearchState (seen maps + frontier) ──▶ DiscoverySink
//! ```
//!
//! # Example
//!
//! ```
//! use fws_search::{Params, RuleTable, Search, Summary};
//!
//! let params = Params::new(10, 5, 6, 7)?;
//! let table = RuleTable::build(&params);
//!
//! let mut summary = Summary::new();
//! let outcome = Search::new(&table).run(&mut summary);
//!
//! assert_eq!(outcome.state.pattern_depth(&table.start()), Some(1));
//! assert_eq!(summary.max_word_depth(), Some(211));
//! # Ok::<(), fws_search::ConfigError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

// Error type
mod error;

// Validated N, A, B, C
mod params;

// Symbol, Pattern, Word, Block
pub mod grid;

// Substitution rule table
pub mod rules;

// 2×2 -> 4×4 expansion
pub mod expand;

// Sub-pattern and word extraction
pub mod extract;

// Results sink and discovery events
pub mod sink;

// Depth-ordered search
pub mod search;

// Closed-form depth predictions
pub mod bounds;

// Per-depth tallies
pub mod summary;

pub use error::ConfigError;
pub use expand::expand;
pub use extract::Direction;
pub use grid::{Block, Pattern, Symbol, Word};
pub use params::{Params, MAX_ALPHABET, MIN_PERIOD};
pub use rules::{RuleTable, START};
pub use search::{Search, SearchLimits, SearchOutcome, SearchState, StopReason, SEED_DEPTH};
pub use sink::{Depth, Discovery, DiscoverySink, OutputFormat, WriterSink};
pub use summary::Summary;
