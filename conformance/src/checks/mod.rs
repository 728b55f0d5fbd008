//! Property checks, grouped by component.
//!
//! Every check takes a shared [`Fixture`]: one rule table and one search run
//! over it, so the expensive part happens once per report.

pub mod expansion;
pub mod extraction;
pub mod rules;
pub mod search;

use fws_search::{Discovery, Params, RuleTable, Search, SearchLimits, SearchOutcome};

/// A rule table and the recorded output of one search over it.
pub struct Fixture {
    /// Parameters under test.
    pub params: Params,
    /// Table built from `params`.
    pub table: RuleTable,
    /// Limits the search ran with.
    pub limits: SearchLimits,
    /// Every discovery event, in emission order.
    pub events: Vec<Discovery>,
    /// Final search state.
    pub outcome: SearchOutcome,
}

impl Fixture {
    /// Build the table and run the search once.
    pub fn new(params: Params, limits: SearchLimits) -> Self {
        let table = RuleTable::build(&params);
        let mut events: Vec<Discovery> = Vec::new();
        let outcome = Search::new(&table).with_limits(limits).run(&mut events);
        Self {
            params,
            table,
            limits,
            events,
            outcome,
        }
    }
}
