//! Property-based tests for the rule table, expansion and search.
//!
//! Parameter sets are drawn from small valid alphabets so that every search
//! runs to exhaustion.

use std::collections::{HashMap, HashSet};

use fws_search::{
    expand, Depth, Discovery, Params, Pattern, RuleTable, Search, SearchLimits, SearchState,
    StopReason, Symbol, Word, SEED_DEPTH,
};
use proptest::prelude::*;

fn valid_params() -> impl Strategy<Value = Params> {
    (3u32..7, 1u32..4, 1u32..4, 0u32..4).prop_map(|(a, db, dc, extra)| {
        let b = a + db;
        let c = b + dc;
        Params::new(c + 3 + extra, a, b, c).unwrap()
    })
}

fn params_and_pattern() -> impl Strategy<Value = (Params, Pattern)> {
    valid_params().prop_flat_map(|params| {
        let sym = 0..params.alphabet() as Symbol;
        (
            Just(params),
            [[sym.clone(), sym.clone()], [sym.clone(), sym]].prop_map(Pattern::new),
        )
    })
}

fn full_search(params: &Params) -> (RuleTable, SearchState, Vec<Discovery>) {
    let table = RuleTable::build(params);
    let mut events: Vec<Discovery> = Vec::new();
    let outcome = Search::new(&table).run(&mut events);
    assert_eq!(outcome.stop, StopReason::Exhausted);
    (table, outcome.state, events)
}

// =============================================================================
// Rule table and expansion
// =============================================================================

proptest! {
    /// Building twice from the same parameters gives the same table.
    #[test]
    fn prop_rule_table_deterministic(params in valid_params()) {
        prop_assert_eq!(RuleTable::build(&params), RuleTable::build(&params));
    }

    /// Every image stays inside the alphabet.
    #[test]
    fn prop_rule_images_in_alphabet(params in valid_params()) {
        let table = RuleTable::build(&params);
        prop_assert_eq!(table.len(), params.alphabet() as usize);
        for (_, image) in table.iter() {
            prop_assert!(table.contains(&image));
        }
    }

    /// Each quadrant of the expansion is the rule image of the matching cell.
    #[test]
    fn prop_expand_locality((params, p) in params_and_pattern()) {
        let table = RuleTable::build(&params);
        let block = expand(&table, p);
        prop_assert_eq!(block.quadrant(0, 0), table.rule(p.get(0, 0)));
        for qy in 0..2 {
            for qx in 0..2 {
                prop_assert_eq!(block.quadrant(qy, qx), table.rule(p.get(qy, qx)));
            }
        }
    }

    /// Extraction always yields nine sub-patterns and 48 words.
    #[test]
    fn prop_extraction_counts((params, p) in params_and_pattern()) {
        let table = RuleTable::build(&params);
        let block = expand(&table, p);
        prop_assert_eq!(block.sub_patterns().count(), 9);
        prop_assert_eq!(block.words().count(), 48);
    }
}

// =============================================================================
// Search
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// The seed sits at depth 1 and nothing is shallower.
    #[test]
    fn prop_seed_depth(params in valid_params()) {
        let (table, state, events) = full_search(&params);
        prop_assert_eq!(state.pattern_depth(&table.start()), Some(SEED_DEPTH));
        prop_assert!(state.patterns().all(|(_, d)| d >= SEED_DEPTH));
        prop_assert!(state.words().all(|(_, d)| d > SEED_DEPTH));
        prop_assert_eq!(
            events.first().copied(),
            Some(Discovery::Pattern { depth: SEED_DEPTH, pattern: table.start() })
        );
    }

    /// Events arrive in non-decreasing depth order and nothing is reported twice.
    #[test]
    fn prop_events_ordered_and_unique(params in valid_params()) {
        let (_, state, events) = full_search(&params);
        prop_assert!(events.windows(2).all(|w| w[0].depth() <= w[1].depth()));

        let mut patterns: HashMap<Pattern, Depth> = HashMap::new();
        let mut words: HashMap<Word, Depth> = HashMap::new();
        for event in &events {
            match *event {
                Discovery::Pattern { depth, pattern } => {
                    prop_assert!(patterns.insert(pattern, depth).is_none());
                }
                Discovery::Word { depth, word } => {
                    prop_assert!(words.insert(word, depth).is_none());
                }
            }
        }
        prop_assert_eq!(patterns.len(), state.pattern_count());
        prop_assert_eq!(words.len(), state.word_count());
    }

    /// Children of a depth-d pattern are recorded no deeper than d + 1, and
    /// every non-seed entry has a parent exactly one level up.
    #[test]
    fn prop_depths_are_minimal(params in valid_params()) {
        let (table, state, _) = full_search(&params);
        let mut has_parent: HashSet<Pattern> = HashSet::new();
        let mut word_has_parent: HashSet<Word> = HashSet::new();

        for (parent, d) in state.patterns() {
            let block = expand(&table, parent);
            for child in block.sub_patterns() {
                let cd = state.pattern_depth(&child);
                prop_assert!(cd.is_some_and(|cd| cd <= d + 1));
                if cd == Some(d + 1) {
                    has_parent.insert(child);
                }
            }
            for word in block.words() {
                let wd = state.word_depth(&word);
                prop_assert!(wd.is_some_and(|wd| wd <= d + 1));
                if wd == Some(d + 1) {
                    word_has_parent.insert(word);
                }
            }
        }

        for (p, d) in state.patterns() {
            prop_assert!(d == SEED_DEPTH || has_parent.contains(&p), "{} at {}", p, d);
        }
        for (w, _) in state.words() {
            prop_assert!(word_has_parent.contains(&w), "{}", w);
        }
    }

    /// Two runs with the same parameters assign identical depths.
    #[test]
    fn prop_search_idempotent(params in valid_params()) {
        let (_, first, _) = full_search(&params);
        let (_, second, _) = full_search(&params);
        let a: HashMap<_, _> = first.patterns().collect();
        let b: HashMap<_, _> = second.patterns().collect();
        prop_assert_eq!(a, b);
        let a: HashMap<_, _> = first.words().collect();
        let b: HashMap<_, _> = second.words().collect();
        prop_assert_eq!(a, b);
    }

    /// A depth ceiling records exactly the shallow part of the full search.
    #[test]
    fn prop_depth_limit_is_a_prefix(params in valid_params(), max_depth in 0u32..12) {
        let (_, full, _) = full_search(&params);
        let table = RuleTable::build(&params);
        let limits = SearchLimits { max_depth: Some(max_depth), max_steps: None };
        let cut = Search::new(&table).with_limits(limits).run(()).state;

        let expected: HashMap<_, _> = full.patterns().filter(|(_, d)| *d <= max_depth).collect();
        let got: HashMap<_, _> = cut.patterns().collect();
        prop_assert_eq!(got, expected);
        let expected: HashMap<_, _> = full.words().filter(|(_, d)| *d <= max_depth).collect();
        let got: HashMap<_, _> = cut.words().collect();
        prop_assert_eq!(got, expected);
    }
}
