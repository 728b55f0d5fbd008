//! Per-depth tallies of a search run.

use std::collections::BTreeMap;

use crate::grid::{Pattern, Word};
use crate::sink::{Depth, Discovery, DiscoverySink};

/// Sink that counts discoveries per depth and keeps the deepest entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    patterns_by_depth: BTreeMap<Depth, usize>,
    words_by_depth: BTreeMap<Depth, usize>,
    deepest_patterns: Vec<Pattern>,
    deepest_words: Vec<Word>,
}

impl Summary {
    /// Empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct patterns discovered.
    pub fn pattern_total(&self) -> usize {
        self.patterns_by_depth.values().sum()
    }

    /// Distinct words discovered.
    pub fn word_total(&self) -> usize {
        self.words_by_depth.values().sum()
    }

    /// `(depth, count)` of pattern discoveries, shallowest first.
    pub fn patterns_by_depth(&self) -> impl Iterator<Item = (Depth, usize)> + '_ {
        self.patterns_by_depth.iter().map(|(d, n)| (*d, *n))
    }

    /// `(depth, count)` of word discoveries, shallowest first.
    pub fn words_by_depth(&self) -> impl Iterator<Item = (Depth, usize)> + '_ {
        self.words_by_depth.iter().map(|(d, n)| (*d, *n))
    }

    /// Deepest pattern depth seen.
    pub fn max_pattern_depth(&self) -> Option<Depth> {
        self.patterns_by_depth.keys().next_back().copied()
    }

    /// Deepest word depth seen.
    pub fn max_word_depth(&self) -> Option<Depth> {
        self.words_by_depth.keys().next_back().copied()
    }

    /// Patterns first seen at [`Summary::max_pattern_depth`], in discovery order.
    pub fn deepest_patterns(&self) -> &[Pattern] {
        &self.deepest_patterns
    }

    /// Words first seen at [`Summary::max_word_depth`], in discovery order.
    pub fn deepest_words(&self) -> &[Word] {
        &self.deepest_words
    }
}

/// Push `item` if it sits at the new maximum, resetting the list when the
/// maximum grows.
fn track_deepest<T>(deepest: &mut Vec<T>, previous_max: Option<Depth>, depth: Depth, item: T) {
    match previous_max {
        Some(max) if depth < max => {}
        Some(max) if depth == max => deepest.push(item),
        _ => {
            deepest.clear();
            deepest.push(item);
        }
    }
}

impl DiscoverySink for Summary {
    fn on_discovery(&mut self, discovery: Discovery) {
        match discovery {
            Discovery::Pattern { depth, pattern } => {
                let max = self.max_pattern_depth();
                track_deepest(&mut self.deepest_patterns, max, depth, pattern);
                *self.patterns_by_depth.entry(depth).or_default() += 1;
            }
            Discovery::Word { depth, word } => {
                let max = self.max_word_depth();
                track_deepest(&mut self.deepest_words, max, depth, word);
                *self.words_by_depth.entry(depth).or_default() += 1;
            }
        }
    }
}
