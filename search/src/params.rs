//! Alphabet size and rule periods.
//!
//! A [`Params`] value is the only input to the whole search. It can only be
//! obtained through [`Params::new`], so every value in circulation satisfies
//! `3 <= A < B < C <= N - 3`.
//!
//! # Examples
//!
//! ```
//! use fws_search::{ConfigError, Params};
//!
//! let params = Params::new(10, 5, 6, 7).unwrap();
//! assert_eq!(params.marker_b(), 8);
//! assert_eq!(params.marker_c(), 9);
//!
//! assert_eq!(
//!     Params::new(10, 5, 5, 7),
//!     Err(ConfigError::PeriodsNotIncreasing { a: 5, b: 5, c: 7 })
//! );
//! ```

use core::fmt;

use crate::error::ConfigError;
use crate::grid::Symbol;

/// Largest supported alphabet size (every symbol must fit in a [`Symbol`]).
pub const MAX_ALPHABET: u32 = Symbol::MAX as u32 + 1;

/// Smallest period accepted for `A`.
pub const MIN_PERIOD: u32 = 3;

/// Validated alphabet size `N` and periods `A < B < C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Params {
    n: u32,
    a: u32,
    b: u32,
    c: u32,
}

impl Params {
    /// The configuration used throughout the write-up: `N = 10`, periods 5, 6, 7.
    pub const DEFAULT: Self = Self {
        n: 10,
        a: 5,
        b: 6,
        c: 7,
    };

    /// Validate and build a parameter set.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first violated bound of
    /// `3 <= A < B < C <= N - 3`, or [`ConfigError::AlphabetTooLarge`] when
    /// `N` does not fit the symbol type.
    pub fn new(n: u32, a: u32, b: u32, c: u32) -> Result<Self, ConfigError> {
        if a < MIN_PERIOD {
            return Err(ConfigError::PeriodTooShort { a });
        }
        if !(a < b && b < c) {
            return Err(ConfigError::PeriodsNotIncreasing { a, b, c });
        }
        if n > MAX_ALPHABET {
            return Err(ConfigError::AlphabetTooLarge {
                n,
                max: MAX_ALPHABET,
            });
        }
        if c.checked_add(3).map_or(true, |min_n| min_n > n) {
            return Err(ConfigError::AlphabetTooSmall { n, c });
        }
        Ok(Self { n, a, b, c })
    }

    /// Alphabet size `N`.
    #[inline]
    pub const fn alphabet(&self) -> u32 {
        self.n
    }

    /// Period of the top-left chain.
    #[inline]
    pub const fn a(&self) -> u32 {
        self.a
    }

    /// Period of the top-right chain.
    #[inline]
    pub const fn b(&self) -> u32 {
        self.b
    }

    /// Period of the bottom-left chain.
    #[inline]
    pub const fn c(&self) -> u32 {
        self.c
    }

    /// Marker symbol injected where the `B` chain closes (`N - 2`).
    #[inline]
    pub const fn marker_b(&self) -> Symbol {
        (self.n - 2) as Symbol
    }

    /// Marker symbol injected where the `C` chain closes (`N - 1`).
    #[inline]
    pub const fn marker_c(&self) -> Symbol {
        (self.n - 1) as Symbol
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N={} A={} B={} C={}", self.n, self.a, self.b, self.c)
    }
}
