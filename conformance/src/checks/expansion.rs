//! Expansion checks: each quadrant of a block is the image of its cell.

use fws_search::expand;

use super::Fixture;
use crate::report::{CheckResult, ConformanceReport};

/// Runs the expansion checks over every pattern the search recorded.
pub fn validate(fixture: &Fixture) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let mut checked = 0usize;
    let mut violations = Vec::new();

    for (pattern, _) in fixture.outcome.state.patterns() {
        checked += 1;
        let block = expand(&fixture.table, pattern);
        for qy in 0..2 {
            for qx in 0..2 {
                let cell = pattern.get(qy, qx);
                let quadrant = block.quadrant(qy, qx);
                if quadrant != fixture.table.rule(cell) {
                    violations.push(format!(
                        "{}: quadrant ({}, {}) is {}, rule {} is {}",
                        pattern,
                        qy,
                        qx,
                        quadrant,
                        cell,
                        fixture.table.rule(cell)
                    ));
                }
            }
        }
    }

    report.push(CheckResult::from_violations(
        "expansion/locality",
        format!("{} recorded pattern(s) expand quadrant by quadrant", checked),
        violations,
    ));
    report
}
