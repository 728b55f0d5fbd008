//! Extraction checks on the counting block `0..15`.

use fws_search::{Block, Direction, Pattern, Symbol, Word};

use crate::report::{CheckResult, ConformanceReport};

/// The 4×4 block holding `0..15` in row-major order.
pub fn counting_block() -> Block {
    Block::new(core::array::from_fn(|y| {
        core::array::from_fn(|x| (y * 4 + x) as Symbol)
    }))
}

/// Runs the extraction checks.
pub fn validate() -> ConformanceReport {
    let block = counting_block();
    let mut report = ConformanceReport::new();

    let subs: Vec<Pattern> = block.sub_patterns().collect();
    let expected_first = Pattern::new([[0, 1], [4, 5]]);
    let expected_last = Pattern::new([[10, 11], [14, 15]]);
    if subs.len() == 9
        && subs.first() == Some(&expected_first)
        && subs.last() == Some(&expected_last)
    {
        report.push(CheckResult::pass(
            "extraction/sub-patterns",
            "nine sub-patterns from 0,1/4,5 to 10,11/14,15",
        ));
    } else {
        report.push(
            CheckResult::fail("extraction/sub-patterns", "unexpected sub-patterns")
                .with_details(subs.iter().map(ToString::to_string).collect()),
        );
    }

    let words = block.words().count();
    if words == 48 {
        report.push(CheckResult::pass("extraction/word-count", "48 in-bounds words"));
    } else {
        report.push(CheckResult::fail(
            "extraction/word-count",
            format!("{} in-bounds words, expected 48", words),
        ));
    }

    let cases = [
        (0, 0, Direction::East, Some(Word::new([0, 1, 2]))),
        (0, 0, Direction::SouthEast, Some(Word::new([0, 5, 10]))),
        (0, 3, Direction::East, None),
    ];
    let violations = cases
        .iter()
        .filter_map(|&(y, x, direction, expected)| {
            let found = block.word_at(y, x, direction);
            (found != expected).then(|| {
                format!(
                    "({}, {}) {:?}: found {:?}, expected {:?}",
                    y, x, direction, found, expected
                )
            })
        })
        .collect();
    report.push(CheckResult::from_violations(
        "extraction/boundary",
        "directional words clip at the block edge",
        violations,
    ));

    report
}
