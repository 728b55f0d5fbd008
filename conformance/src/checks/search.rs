//! Search checks: seed depth, event order, uniqueness, minimality,
//! idempotence and the delayed word.

use std::collections::{HashMap, HashSet};

use fws_search::bounds::{delayed_words, Bounds};
use fws_search::{expand, Discovery, Search, StopReason, SEED_DEPTH};

use super::Fixture;
use crate::report::{CheckResult, ConformanceReport};

/// Runs every search check against the fixture's run.
pub fn validate(fixture: &Fixture) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(check_seed(fixture));
    report.push(check_order(fixture));
    report.push(check_unique(fixture));
    report.push(check_minimal(fixture));
    report.push(check_idempotent(fixture));
    report.push(check_delayed_word(fixture));
    report
}

fn check_seed(fixture: &Fixture) -> CheckResult {
    let start = fixture.table.start();
    let depth = fixture.outcome.state.pattern_depth(&start);
    let first = fixture.events.first().copied();
    let expected = Discovery::Pattern {
        depth: SEED_DEPTH,
        pattern: start,
    };
    if fixture.limits.max_depth.is_some_and(|max| max < SEED_DEPTH) {
        let state = &fixture.outcome.state;
        let recorded = state.pattern_count() + state.word_count();
        return CheckResult::from_violations(
            "search/seed",
            "depth ceiling 0 records nothing",
            (recorded > 0)
                .then(|| format!("{} entries recorded under depth ceiling 0", recorded))
                .into_iter()
                .collect(),
        );
    }
    if depth == Some(SEED_DEPTH) && first == Some(expected) {
        CheckResult::pass("search/seed", format!("{} recorded first, at depth 1", start))
    } else {
        CheckResult::fail(
            "search/seed",
            format!("{} recorded at {:?}, first event {:?}", start, depth, first),
        )
    }
}

fn check_order(fixture: &Fixture) -> CheckResult {
    let violations = fixture
        .events
        .windows(2)
        .filter(|w| w[0].depth() > w[1].depth())
        .map(|w| format!("'{}' before '{}'", w[0], w[1]))
        .collect();
    CheckResult::from_violations(
        "search/order",
        format!("{} events in non-decreasing depth order", fixture.events.len()),
        violations,
    )
}

fn check_unique(fixture: &Fixture) -> CheckResult {
    let mut patterns = HashSet::new();
    let mut words = HashSet::new();
    let violations = fixture
        .events
        .iter()
        .filter(|event| match event {
            Discovery::Pattern { pattern, .. } => !patterns.insert(*pattern),
            Discovery::Word { word, .. } => !words.insert(*word),
        })
        .map(|event| format!("reported twice: {}", event))
        .collect();
    CheckResult::from_violations(
        "search/unique",
        format!(
            "{} patterns and {} words reported once each",
            patterns.len(),
            words.len()
        ),
        violations,
    )
}

/// Every child of an expanded depth-d pattern sits at depth <= d + 1, and
/// every non-seed entry has a parent exactly one level up.
fn check_minimal(fixture: &Fixture) -> CheckResult {
    if fixture.outcome.stop == StopReason::StepLimit {
        return CheckResult::warn(
            "search/minimal-depth",
            "skipped: a step budget leaves a level partially expanded",
        );
    }

    let state = &fixture.outcome.state;
    let max_depth = fixture.limits.max_depth;
    let mut violations = Vec::new();
    let mut parented_patterns = HashSet::new();
    let mut parented_words = HashSet::new();

    for (parent, d) in state.patterns() {
        // Left on the frontier by the depth ceiling.
        if max_depth.is_some_and(|max| d >= max) {
            continue;
        }
        let block = expand(&fixture.table, parent);
        for child in block.sub_patterns() {
            match state.pattern_depth(&child) {
                Some(cd) if cd <= d + 1 => {
                    if cd == d + 1 {
                        parented_patterns.insert(child);
                    }
                }
                found => violations.push(format!(
                    "pattern {} under {} (depth {}) recorded at {:?}",
                    child, parent, d, found
                )),
            }
        }
        for word in block.words() {
            match state.word_depth(&word) {
                Some(wd) if wd <= d + 1 => {
                    if wd == d + 1 {
                        parented_words.insert(word);
                    }
                }
                found => violations.push(format!(
                    "word {} under {} (depth {}) recorded at {:?}",
                    word, parent, d, found
                )),
            }
        }
    }

    for (pattern, d) in state.patterns() {
        if d != SEED_DEPTH && !parented_patterns.contains(&pattern) {
            violations.push(format!("pattern {} at {} has no parent one level up", pattern, d));
        }
    }
    for (word, d) in state.words() {
        if !parented_words.contains(&word) {
            violations.push(format!("word {} at {} has no parent one level up", word, d));
        }
    }

    CheckResult::from_violations(
        "search/minimal-depth",
        "every entry sits one level below its shallowest parent",
        violations,
    )
}

fn check_idempotent(fixture: &Fixture) -> CheckResult {
    let rerun = Search::new(&fixture.table).with_limits(fixture.limits).run(());
    let first: HashMap<_, _> = fixture.outcome.state.patterns().collect();
    let second: HashMap<_, _> = rerun.state.patterns().collect();
    let first_words: HashMap<_, _> = fixture.outcome.state.words().collect();
    let second_words: HashMap<_, _> = rerun.state.words().collect();

    if first == second && first_words == second_words {
        CheckResult::pass("search/idempotent", "a second run assigns identical depths")
    } else {
        CheckResult::fail(
            "search/idempotent",
            format!(
                "second run differs: {} vs {} patterns, {} vs {} words",
                first.len(),
                second.len(),
                first_words.len(),
                second_words.len()
            ),
        )
    }
}

fn check_delayed_word(fixture: &Fixture) -> CheckResult {
    let bounds = Bounds::for_params(&fixture.params);
    let state = &fixture.outcome.state;
    let deepest = state.max_word_depth();
    let delayed: Vec<_> = delayed_words(&fixture.params)
        .iter()
        .map(|w| (*w, state.word_depth(w)))
        .collect();

    let on_time = deepest.map(u64::from) == Some(bounds.delayed_word_depth)
        && delayed
            .iter()
            .all(|(_, d)| d.map(u64::from) == Some(bounds.delayed_word_depth));
    let beyond_min_period = deepest.is_some_and(|d| d > bounds.min_period);
    let details = delayed
        .iter()
        .map(|(w, d)| format!("word {} first at {:?}", w, d))
        .collect();

    if on_time && beyond_min_period {
        CheckResult::pass(
            "search/delayed-word",
            format!(
                "deepest word at depth {} = lcm(A, B, C) + 1",
                bounds.delayed_word_depth
            ),
        )
    } else if fixture.outcome.stop != StopReason::Exhausted {
        CheckResult::warn(
            "search/delayed-word",
            format!(
                "search cut off at {:?} before depth {}",
                deepest, bounds.delayed_word_depth
            ),
        )
        .with_details(details)
    } else {
        CheckResult::fail(
            "search/delayed-word",
            format!(
                "deepest word at {:?}, predicted {}",
                deepest, bounds.delayed_word_depth
            ),
        )
        .with_details(details)
    }
}
