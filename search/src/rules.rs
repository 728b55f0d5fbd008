//! Substitution rule table.
//!
//! Every symbol maps to a 2×2 pattern. Three slots of the image carry a
//! self-incrementing chain that wraps back to symbol 1:
//!
//! | Slot | Chain | Period |
//! |------|-------|--------|
//! | top-left | `i -> i + 1` for `1 <= i < A`, `A -> 1` | `A` |
//! | top-right | `i -> i + 1` for `1 <= i < B`, `B -> 1` | `B` |
//! | bottom-left | `i -> i + 1` for `1 <= i < C`, `C -> 1` | `C` |
//!
//! The bottom-right slot is zero except at the closing points of the `B` and
//! `C` chains, which emit the markers `N - 2` and `N - 1`. Symbol 0 maps to
//! the all-zero pattern and acts as background.
//!
//! # Example
//!
//! ```
//! use fws_search::{Params, Pattern, RuleTable};
//!
//! let table = RuleTable::build(&Params::DEFAULT);
//! assert_eq!(table.len(), 10);
//! assert_eq!(table.rule(5), Pattern::new([[1, 6], [6, 0]]));
//! assert_eq!(table.rule(6), Pattern::new([[0, 1], [7, 8]]));
//! assert_eq!(table.rule(7), Pattern::new([[0, 0], [1, 9]]));
//! ```

use crate::grid::{Pattern, Symbol};
use crate::params::Params;

/// Seed of every search: `0,1/1,2`.
pub const START: Pattern = Pattern::new([[0, 1], [1, 2]]);

/// Immutable substitution table, one image per symbol of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    params: Params,
    rules: Vec<Pattern>,
}

impl RuleTable {
    /// Build the table for a validated parameter set.
    pub fn build(params: &Params) -> Self {
        let n = params.alphabet() as usize;
        let (a, b, c) = (params.a() as usize, params.b() as usize, params.c() as usize);
        let mut rules = vec![Pattern::ZERO; n];

        for (slot, period) in [((0, 0), a), ((0, 1), b), ((1, 0), c)] {
            let (y, x) = slot;
            for (i, rule) in rules.iter_mut().enumerate().take(period).skip(1) {
                rule.set(y, x, (i + 1) as Symbol);
            }
            rules[period].set(y, x, 1);
        }
        rules[b].set(1, 1, params.marker_b());
        rules[c].set(1, 1, params.marker_c());

        Self {
            params: *params,
            rules,
        }
    }

    /// Parameters the table was built from.
    #[inline]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The seed pattern.
    #[inline]
    pub const fn start(&self) -> Pattern {
        START
    }

    /// Image of `symbol`.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is outside the alphabet. Patterns produced by the
    /// table itself never contain such a symbol.
    #[inline]
    pub fn rule(&self, symbol: Symbol) -> Pattern {
        self.rules[symbol as usize]
    }

    /// Image of `symbol`, or `None` outside the alphabet.
    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<Pattern> {
        self.rules.get(symbol as usize).copied()
    }

    /// Alphabet size.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false: a valid alphabet has at least nine symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// `(symbol, image)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Pattern)> + '_ {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| (i as Symbol, *rule))
    }

    /// Whether every symbol of `pattern` lies inside the alphabet.
    pub fn contains(&self, pattern: &Pattern) -> bool {
        pattern.cells().all(|s| (s as usize) < self.rules.len())
    }
}
