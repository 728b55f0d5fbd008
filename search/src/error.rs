//! Error types for the search library.

use thiserror::Error;

/// Fatal configuration error.
///
/// Raised by [`crate::Params::new`] when the alphabet size and rule periods do
/// not satisfy `3 <= A < B < C <= N - 3`. No rule table is built and nothing is
/// reported once this error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shortest period is below 3.
    #[error("period A = {a} must be at least 3")]
    PeriodTooShort {
        /// The offending period.
        a: u32,
    },

    /// The periods are not strictly increasing.
    #[error("periods must be strictly increasing, got A = {a}, B = {b}, C = {c}")]
    PeriodsNotIncreasing {
        /// First period.
        a: u32,
        /// Second period.
        b: u32,
        /// Third period.
        c: u32,
    },

    /// The longest period leaves no room for the two marker symbols.
    #[error("period C = {c} exceeds N - 3 for alphabet size N = {n}")]
    AlphabetTooSmall {
        /// Alphabet size.
        n: u32,
        /// Longest period.
        c: u32,
    },

    /// The alphabet does not fit the symbol representation.
    #[error("alphabet size N = {n} exceeds the maximum of {max} symbols")]
    AlphabetTooLarge {
        /// Alphabet size.
        n: u32,
        /// Largest supported alphabet size.
        max: u32,
    },
}
