//! Rule table checks: determinism, chain periods, marker placement.

use fws_search::{Pattern, RuleTable, Symbol};

use super::Fixture;
use crate::report::{CheckResult, ConformanceReport};

/// Runs every rule table check.
pub fn validate(fixture: &Fixture) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(check_deterministic(fixture));
    report.push(check_chains(fixture));
    report.push(check_markers(fixture));
    report.push(check_background(fixture));
    report
}

fn check_deterministic(fixture: &Fixture) -> CheckResult {
    if RuleTable::build(&fixture.params) == fixture.table {
        CheckResult::pass("rules/deterministic", "rebuilding gives an identical table")
    } else {
        CheckResult::fail("rules/deterministic", "rebuilding gave a different table")
    }
}

/// Steps needed to walk from symbol 1 back to 1 along slot `(y, x)`.
fn cycle_length(table: &RuleTable, y: usize, x: usize) -> Option<usize> {
    let mut symbol: Symbol = 1;
    for steps in 1..=table.len() {
        symbol = table.get(symbol)?.get(y, x);
        if symbol == 1 {
            return Some(steps);
        }
    }
    None
}

fn check_chains(fixture: &Fixture) -> CheckResult {
    let p = &fixture.params;
    let slots = [
        ("top-left", 0, 0, p.a()),
        ("top-right", 0, 1, p.b()),
        ("bottom-left", 1, 0, p.c()),
    ];
    let violations = slots
        .iter()
        .filter_map(|&(name, y, x, period)| {
            let found = cycle_length(&fixture.table, y, x);
            (found != Some(period as usize))
                .then(|| format!("{} chain: expected period {}, found {:?}", name, period, found))
        })
        .collect();
    CheckResult::from_violations(
        "rules/chains",
        format!("chains cycle with periods {}, {}, {}", p.a(), p.b(), p.c()),
        violations,
    )
}

fn check_markers(fixture: &Fixture) -> CheckResult {
    let p = &fixture.params;
    let violations = fixture
        .table
        .iter()
        .filter_map(|(symbol, image)| {
            let expected = match symbol as u32 {
                s if s == p.b() => p.marker_b(),
                s if s == p.c() => p.marker_c(),
                _ => 0,
            };
            let found = image.get(1, 1);
            (found != expected).then(|| {
                format!("rule {}: bottom-right is {}, expected {}", symbol, found, expected)
            })
        })
        .collect();
    CheckResult::from_violations(
        "rules/markers",
        format!("markers {} and {} close the B and C chains", p.marker_b(), p.marker_c()),
        violations,
    )
}

fn check_background(fixture: &Fixture) -> CheckResult {
    match fixture.table.get(0) {
        Some(image) if image == Pattern::ZERO => {
            CheckResult::pass("rules/background", "symbol 0 maps to 0,0/0,0")
        }
        Some(image) => {
            CheckResult::fail("rules/background", format!("symbol 0 maps to {}", image))
        }
        None => CheckResult::fail("rules/background", "table has no entry for symbol 0"),
    }
}
