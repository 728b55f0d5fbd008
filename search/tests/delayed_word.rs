//! End-to-end runs over concrete configurations: the delayed word appears
//! exactly at `lcm(A, B, C) + 1`.

use fws_search::bounds::{delayed_words, Bounds};
use fws_search::{
    Discovery, OutputFormat, Params, Pattern, RuleTable, Search, StopReason, Summary, WriterSink,
};

struct Expected {
    params: (u32, u32, u32, u32),
    patterns: usize,
    words: usize,
    deepest_word: u32,
}

const CASES: [Expected; 3] = [
    Expected {
        params: (10, 5, 6, 7),
        patterns: 439,
        words: 374,
        deepest_word: 211,
    },
    Expected {
        params: (9, 3, 4, 5),
        patterns: 175,
        words: 212,
        deepest_word: 61,
    },
    Expected {
        params: (12, 4, 5, 9),
        patterns: 398,
        words: 373,
        deepest_word: 181,
    },
];

#[test]
fn default_scenario() {
    let params = Params::new(10, 5, 6, 7).unwrap();
    let table = RuleTable::build(&params);
    let mut summary = Summary::new();
    let outcome = Search::new(&table).run(&mut summary);

    assert_eq!(
        outcome.state.pattern_depth(&Pattern::new([[0, 1], [1, 2]])),
        Some(1)
    );
    let min_period = params.a().min(params.b()).min(params.c());
    assert!(outcome.state.words().any(|(_, d)| d > min_period));
    let mut deepest = summary.deepest_words().to_vec();
    deepest.sort();
    let mut expected = delayed_words(&params).to_vec();
    expected.sort();
    assert_eq!(deepest, expected);
}

#[test]
fn delayed_word_depth_matches_lcm() {
    for case in &CASES {
        let (n, a, b, c) = case.params;
        let params = Params::new(n, a, b, c).unwrap();
        let table = RuleTable::build(&params);
        let outcome = Search::new(&table).run(());
        let bounds = Bounds::for_params(&params);

        assert_eq!(outcome.stop, StopReason::Exhausted, "{params}");
        assert_eq!(outcome.state.pattern_count(), case.patterns, "{params}");
        assert_eq!(outcome.state.word_count(), case.words, "{params}");
        assert_eq!(outcome.state.max_word_depth(), Some(case.deepest_word), "{params}");
        assert_eq!(u64::from(case.deepest_word), bounds.delayed_word_depth, "{params}");
        for word in delayed_words(&params) {
            assert_eq!(outcome.state.word_depth(&word), Some(case.deepest_word), "{params}");
        }
    }
}

#[test]
fn text_report_layout() {
    let table = RuleTable::build(&Params::DEFAULT);
    let mut sink = WriterSink::new(Vec::new(), OutputFormat::Text);
    Search::new(&table).run(&mut sink);
    let text = String::from_utf8(sink.finish().unwrap()).unwrap();
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some("Start: 0,1/1,2"));
    assert_eq!(lines.next(), Some("Rule: 0 -> 0,0/0,0"));
    let discoveries: Vec<_> = lines.skip_while(|l| !l.starts_with("Depth ")).collect();
    assert_eq!(discoveries[0], "Depth 1: First occurrence of pattern 0,1/1,2");
    assert_eq!(discoveries.len(), 439 + 374);
    assert!(discoveries
        .iter()
        .any(|l| *l == "Depth 211: First occurrence of word 8 2 9"));
}

#[test]
fn summary_matches_state() {
    let table = RuleTable::build(&Params::DEFAULT);
    let mut events: Vec<Discovery> = Vec::new();
    let mut summary = Summary::new();
    let outcome = Search::new(&table).run((&mut events, &mut summary));

    assert_eq!(summary.pattern_total(), outcome.state.pattern_count());
    assert_eq!(summary.word_total(), outcome.state.word_count());
    assert_eq!(summary.max_pattern_depth(), outcome.state.max_pattern_depth());
    assert_eq!(summary.patterns_by_depth().next(), Some((1, 1)));
    assert_eq!(events.len(), summary.pattern_total() + summary.word_total());
}
