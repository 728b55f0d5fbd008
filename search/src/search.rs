//! Depth-ordered discovery search.
//!
//! Starting from the seed pattern at depth 1, the search repeatedly takes a
//! pending pattern of minimal depth `d`, expands it into a 4×4 block, and
//! records every sub-pattern and word of that block that has not been seen
//! before at depth `d + 1`. New patterns are queued for expansion; words are
//! terminal.
//!
//! Because the frontier always yields the globally minimal pending depth and
//! every discovery is exactly one level below its parent, the depth recorded on
//! first insertion is the minimal depth at which the entry is reachable from
//! the seed. Maps are append-only, so no entry is ever recorded twice.
//!
//! Same-depth frontier entries are popped in ascending pattern order. Recorded
//! depths do not depend on this order.
//!
//! # Example
//!
//! ```
//! use fws_search::{Discovery, Params, RuleTable, Search, StopReason};
//!
//! let table = RuleTable::build(&Params::new(9, 3, 4, 5).unwrap());
//! let mut events: Vec<Discovery> = Vec::new();
//! let outcome = Search::new(&table).run(&mut events);
//!
//! assert_eq!(outcome.stop, StopReason::Exhausted);
//! assert_eq!(outcome.state.pattern_depth(&table.start()), Some(1));
//! assert_eq!(outcome.state.max_word_depth(), Some(61));
//! ```

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, info, warn};

use crate::expand::expand;
use crate::grid::{Pattern, Word};
use crate::rules::RuleTable;
use crate::sink::{Depth, Discovery, DiscoverySink};

/// Depth of the seed pattern.
pub const SEED_DEPTH: Depth = 1;

/// External cutoffs, checked once per expansion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SearchLimits {
    /// Do not expand patterns recorded at this depth or deeper, so nothing is
    /// recorded below it. `Some(0)` records nothing, not even the seed.
    pub max_depth: Option<Depth>,
    /// Stop after this many expansions.
    pub max_steps: Option<u64>,
}

impl SearchLimits {
    /// No cutoff: run until the frontier drains.
    pub const UNLIMITED: Self = Self {
        max_depth: None,
        max_steps: None,
    };
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The frontier drained: every reachable pattern and word is recorded.
    Exhausted,
    /// The next pending pattern sits at or below the depth ceiling.
    DepthLimit,
    /// The expansion budget ran out.
    StepLimit,
}

/// Seen maps and frontier of one search.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    patterns: HashMap<Pattern, Depth>,
    words: HashMap<Word, Depth>,
    frontier: BinaryHeap<Reverse<(Depth, Pattern)>>,
    steps: u64,
}

impl SearchState {
    /// Empty state with nothing seeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `start` at depth 1 and queue it.
    pub fn seed<S: DiscoverySink>(&mut self, start: Pattern, sink: &mut S) {
        self.record_pattern(start, SEED_DEPTH, sink);
    }

    /// Record `pattern` at `depth` unless already seen; queue it if new.
    ///
    /// Returns whether the pattern was new.
    pub fn record_pattern<S: DiscoverySink>(
        &mut self,
        pattern: Pattern,
        depth: Depth,
        sink: &mut S,
    ) -> bool {
        match self.patterns.entry(pattern) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(depth);
                self.frontier.push(Reverse((depth, pattern)));
                sink.on_discovery(Discovery::Pattern { depth, pattern });
                true
            }
        }
    }

    /// Record `word` at `depth` unless already seen.
    ///
    /// Returns whether the word was new.
    pub fn record_word<S: DiscoverySink>(
        &mut self,
        word: Word,
        depth: Depth,
        sink: &mut S,
    ) -> bool {
        match self.words.entry(word) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(depth);
                sink.on_discovery(Discovery::Word { depth, word });
                true
            }
        }
    }

    /// Depth of the next pattern to expand.
    pub fn next_depth(&self) -> Option<Depth> {
        self.frontier.peek().map(|Reverse((depth, _))| *depth)
    }

    /// Expand one pending pattern of minimal depth.
    ///
    /// Returns the expanded pattern and its depth, or `None` when the
    /// frontier is empty.
    pub fn step<S: DiscoverySink>(
        &mut self,
        table: &RuleTable,
        sink: &mut S,
    ) -> Option<(Depth, Pattern)> {
        let Reverse((depth, pattern)) = self.frontier.pop()?;
        self.steps += 1;

        let block = expand(table, pattern);
        let child = depth + 1;
        for sub in block.sub_patterns() {
            self.record_pattern(sub, child, sink);
        }
        for word in block.words() {
            self.record_word(word, child, sink);
        }
        Some((depth, pattern))
    }

    /// First-occurrence depth of `pattern`.
    pub fn pattern_depth(&self, pattern: &Pattern) -> Option<Depth> {
        self.patterns.get(pattern).copied()
    }

    /// First-occurrence depth of `word`.
    pub fn word_depth(&self, word: &Word) -> Option<Depth> {
        self.words.get(word).copied()
    }

    /// Every recorded pattern with its depth, in no particular order.
    pub fn patterns(&self) -> impl Iterator<Item = (Pattern, Depth)> + '_ {
        self.patterns.iter().map(|(p, d)| (*p, *d))
    }

    /// Every recorded word with its depth, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = (Word, Depth)> + '_ {
        self.words.iter().map(|(w, d)| (*w, *d))
    }

    /// Number of distinct patterns recorded.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of distinct words recorded.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Patterns still waiting for expansion.
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }

    /// Expansions performed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Deepest pattern depth recorded.
    pub fn max_pattern_depth(&self) -> Option<Depth> {
        self.patterns.values().copied().max()
    }

    /// Deepest word depth recorded.
    pub fn max_word_depth(&self) -> Option<Depth> {
        self.words.values().copied().max()
    }
}

/// Result of [`Search::run`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Final seen maps and any unexpanded frontier.
    pub state: SearchState,
    /// Why the loop ended.
    pub stop: StopReason,
}

/// Search driver over one rule table.
#[derive(Debug, Clone, Copy)]
pub struct Search<'t> {
    table: &'t RuleTable,
    limits: SearchLimits,
}

impl<'t> Search<'t> {
    /// Unlimited search over `table`.
    pub fn new(table: &'t RuleTable) -> Self {
        Self {
            table,
            limits: SearchLimits::UNLIMITED,
        }
    }

    /// Apply cutoffs.
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Report the rule table, seed, and expand until the frontier drains or a
    /// limit fires.
    pub fn run<S: DiscoverySink>(&self, mut sink: S) -> SearchOutcome {
        let table = self.table;
        info!(params = %table.params(), start = %table.start(), "starting search");
        sink.on_rules(table);

        let mut state = SearchState::new();
        let stop = if self.limits.max_depth.is_some_and(|max| max < SEED_DEPTH) {
            // A ceiling shallower than the seed admits nothing.
            StopReason::DepthLimit
        } else {
            state.seed(table.start(), &mut sink);
            self.drive(&mut state, &mut sink)
        };

        if stop != StopReason::Exhausted {
            warn!(
                ?stop,
                pending = state.pending(),
                steps = state.steps(),
                "search cut off before the frontier drained"
            );
        }
        info!(
            patterns = state.pattern_count(),
            words = state.word_count(),
            steps = state.steps(),
            max_word_depth = state.max_word_depth(),
            "search finished"
        );

        SearchOutcome { state, stop }
    }

    /// Expand pending patterns until the frontier drains or a limit fires.
    fn drive<S: DiscoverySink>(&self, state: &mut SearchState, sink: &mut S) -> StopReason {
        let mut level = SEED_DEPTH;
        loop {
            let Some(next) = state.next_depth() else {
                return StopReason::Exhausted;
            };
            if self.limits.max_depth.is_some_and(|max| next >= max) {
                return StopReason::DepthLimit;
            }
            if self.limits.max_steps.is_some_and(|max| state.steps() >= max) {
                return StopReason::StepLimit;
            }
            if next > level {
                level = next;
                debug!(
                    depth = level,
                    patterns = state.pattern_count(),
                    words = state.word_count(),
                    pending = state.pending(),
                    "expanding next level"
                );
            }
            state.step(self.table, sink);
        }
    }
}
