//! Self-check suite for the fractal word search.
//!
//! Builds one rule table, runs one search over it, and verifies the
//! structural properties every run must satisfy.
//!
//! # Checks
//!
//! | Component | Property |
//! |-----------|----------|
//! | Rules | deterministic table, chain periods `A`, `B`, `C`, marker cells, zero background |
//! | Expansion | each quadrant is the image of its cell |
//! | Extraction | nine sub-patterns, 48 words, out-of-bounds walks rejected |
//! | Search | seed at depth 1, ordered and unique events, minimal depths, idempotence, delayed word at `lcm(A, B, C) + 1` |
//!
//! # Entry Point
//!
//! ```
//! use fws_conformance::run_all;
//! use fws_search::{Params, SearchLimits};
//!
//! let report = run_all(Params::new(9, 3, 4, 5).unwrap(), SearchLimits::UNLIMITED);
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod checks;
pub mod report;

pub use checks::Fixture;
pub use report::{CheckResult, ConformanceReport, Severity};

use fws_search::{Params, SearchLimits};
use tracing::info;

/// Runs every check against one search over `params` and returns the
/// aggregated report.
///
/// Checks run in this order:
/// 1. Rule table
/// 2. Expansion over every recorded pattern
/// 3. Extraction on the counting block
/// 4. Search properties
pub fn run_all(params: Params, limits: SearchLimits) -> ConformanceReport {
    let fixture = Fixture::new(params, limits);
    let mut report = ConformanceReport::new();

    report.extend(checks::rules::validate(&fixture));
    report.extend(checks::expansion::validate(&fixture));
    report.extend(checks::extraction::validate());
    report.extend(checks::search::validate(&fixture));

    info!(
        params = %params,
        checks = report.results.len(),
        failures = report.failure_count(),
        "self-check finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_no_failures(report: &ConformanceReport) {
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "check failures: {:#?}", failures);
    }

    #[test]
    fn default_configuration_passes() {
        let report = run_all(Params::DEFAULT, SearchLimits::UNLIMITED);
        assert_no_failures(&report);
        assert_eq!(report.count(Severity::Warning), 0);
    }

    #[test]
    fn other_configurations_pass() {
        for (n, a, b, c) in [(9, 3, 4, 5), (12, 4, 5, 9)] {
            let report = run_all(Params::new(n, a, b, c).unwrap(), SearchLimits::UNLIMITED);
            assert_no_failures(&report);
        }
    }

    #[test]
    fn step_budget_only_warns() {
        let limits = SearchLimits {
            max_depth: None,
            max_steps: Some(25),
        };
        let report = run_all(Params::DEFAULT, limits);
        assert_no_failures(&report);
        assert_eq!(report.count(Severity::Warning), 2);
    }

    #[test]
    fn checks_run_in_component_order() {
        let report = run_all(Params::new(9, 3, 4, 5).unwrap(), SearchLimits::UNLIMITED);
        let components: Vec<&str> = report
            .results
            .iter()
            .filter_map(|r| r.check.split('/').next())
            .collect();
        let mut deduped = components.clone();
        deduped.dedup();
        assert_eq!(deduped, ["rules", "expansion", "extraction", "search"]);
    }
}
