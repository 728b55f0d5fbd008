//! Closed-form depths predicted by the construction.
//!
//! The three chains return to symbol 1 every `A`, `B` and `C` steps. The word
//! `N-2, 2, N-1` needs both markers next to each other, which only happens
//! once all three chains are in phase again: after `lcm(A, B, C)` steps, so
//! the word first occurs at depth `lcm(A, B, C) + 1`.
//!
//! Choosing the pairwise coprime periods `N-6, N-5, N-4` (with `N` odd) gives
//! the lower bound `(N-4)(N-5)(N-6) + 1` on the worst-case depth for an
//! alphabet of size `N`. These values are reported next to the computed depths;
//! nothing here proves them.
//!
//! # Example
//!
//! ```
//! use fws_search::{bounds, Params};
//!
//! let b = bounds::Bounds::for_params(&Params::DEFAULT);
//! assert_eq!(b.period_lcm, 210);
//! assert_eq!(b.delayed_word_depth, 211);
//! assert_eq!(bounds::worst_case_lower_bound(11), Some(211));
//! ```

use crate::grid::{Symbol, Word};
use crate::params::Params;

/// Greatest common divisor.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple. `lcm(0, x) == 0`.
pub const fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        0
    } else {
        a / gcd(a, b) * b
    }
}

/// `(N-4)(N-5)(N-6) + 1`, or `None` for alphabets too small to hold three
/// valid periods.
pub const fn worst_case_lower_bound(n: u32) -> Option<u64> {
    if n < 9 {
        return None;
    }
    let n = n as u64;
    Some((n - 4) * (n - 5) * (n - 6) + 1)
}

/// Predicted values for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bounds {
    /// `lcm(A, B, C)`.
    pub period_lcm: u64,
    /// `lcm(A, B, C) + 1`: first-occurrence depth of the delayed word.
    pub delayed_word_depth: u64,
    /// The smallest period, below which any chain-driven word would appear.
    pub min_period: u32,
    /// `(N-4)(N-5)(N-6) + 1` for this alphabet.
    pub worst_case_lower_bound: Option<u64>,
}

impl Bounds {
    /// Compute the predictions for `params`.
    pub fn for_params(params: &Params) -> Self {
        let period_lcm = lcm(lcm(params.a() as u64, params.b() as u64), params.c() as u64);
        Self {
            period_lcm,
            delayed_word_depth: period_lcm + 1,
            min_period: params.a(),
            worst_case_lower_bound: worst_case_lower_bound(params.alphabet()),
        }
    }
}

/// The two orientations of the delayed word: `N-2, 2, N-1` and its reverse.
pub fn delayed_words(params: &Params) -> [Word; 2] {
    let w = Word::new([params.marker_b(), 2 as Symbol, params.marker_c()]);
    [w, w.reversed()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(0, 6), 0);
        assert_eq!(lcm(lcm(5, 6), 7), 210);
    }

    #[test]
    fn predictions() {
        let b = Bounds::for_params(&Params::new(12, 4, 5, 9).unwrap());
        assert_eq!(b.period_lcm, 180);
        assert_eq!(b.delayed_word_depth, 181);
        assert_eq!(b.min_period, 4);
        assert_eq!(b.worst_case_lower_bound, Some(8 * 7 * 6 + 1));
    }

    #[test]
    fn lower_bound_domain() {
        assert_eq!(worst_case_lower_bound(8), None);
        assert_eq!(worst_case_lower_bound(9), Some(61));
    }

    #[test]
    fn delayed_word_orientations() {
        let [fwd, back] = delayed_words(&Params::DEFAULT);
        assert_eq!(fwd, Word::new([8, 2, 9]));
        assert_eq!(back, Word::new([9, 2, 8]));
    }
}
