//! The backtracking search engine.
//!
//! One search step selects the most constrained unassigned region, tries
//! its candidates in least-constraining order, and propagates after every
//! tentative placement. A placement whose propagation survives recurses
//! into a child state; one that does not is reverted and the next candidate
//! is tried. Exhausting the root's candidates proves the puzzle unsolvable.
//!
//! The search is strictly deterministic: with the fixed tie-breaking rules
//! of the heuristics, identical input explores identical branches in the
//! same order on every run.

use tracing::{debug, trace};

use crate::{
    landscape::Landscape,
    solver::{
        domains::initial_domains,
        heuristics::{
            value::{LeastConstrainingValue, PlacementOrdering},
            variable::{MinimumRemainingValues, RegionSelection, Selection},
        },
        propagation::{self, Propagation},
        solution::Placement,
        state::SearchState,
        stats::SearchStats,
    },
};

/// Terminal result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A complete assignment meeting every region's targets.
    Solved(Placement),
    /// The search space is exhausted; no assignment exists.
    Unsolvable,
    /// The step budget ran out before the search reached a verdict.
    Aborted,
}

/// Result of exploring one branch.
enum Walk {
    Solved(Placement),
    Exhausted,
    Aborted,
}

/// Drives the search over a landscape.
///
/// The solver borrows the landscape mutably for the duration of the run:
/// tile coverage is applied to the live grid while a branch is explored and
/// reverted when it fails. On success the winning branch's tiles are left
/// in place, so the landscape shows the solved grid afterwards.
pub struct Solver<'a> {
    landscape: &'a mut Landscape,
    select: Box<dyn RegionSelection>,
    order: Box<dyn PlacementOrdering>,
    step_budget: Option<u64>,
    stats: SearchStats,
}

impl<'a> Solver<'a> {
    /// A solver with the standard heuristics: minimum-remaining-values
    /// region selection and least-constraining-value placement ordering.
    pub fn new(landscape: &'a mut Landscape) -> Self {
        Self::with_heuristics(
            landscape,
            Box::new(MinimumRemainingValues),
            Box::new(LeastConstrainingValue),
        )
    }

    pub fn with_heuristics(
        landscape: &'a mut Landscape,
        select: Box<dyn RegionSelection>,
        order: Box<dyn PlacementOrdering>,
    ) -> Self {
        Self {
            landscape,
            select,
            order,
            step_budget: None,
            stats: SearchStats::default(),
        }
    }

    /// Caps the number of region selections before the search gives up
    /// with [`SearchOutcome::Aborted`]. The budget is checked once per
    /// selection, so it bounds work without changing what the search would
    /// otherwise decide.
    pub fn with_step_budget(mut self, steps: u64) -> Self {
        self.step_budget = Some(steps);
        self
    }

    /// Runs propagation and search to a terminal outcome.
    pub fn solve(mut self) -> (SearchOutcome, SearchStats) {
        let domains = initial_domains(self.landscape);
        let root = SearchState::root(domains, self.landscape.pool());

        let root = match propagation::enforce(self.landscape, root, &mut self.stats) {
            Propagation::Consistent(state) => state,
            Propagation::Inconsistent => {
                debug!("inconsistent before any placement");
                return (SearchOutcome::Unsolvable, self.stats);
            }
        };

        let outcome = match self.search(root) {
            Walk::Solved(placement) => SearchOutcome::Solved(placement),
            Walk::Exhausted => SearchOutcome::Unsolvable,
            Walk::Aborted => SearchOutcome::Aborted,
        };
        debug!(
            nodes = self.stats.nodes_visited,
            backtracks = self.stats.backtracks,
            "search finished"
        );
        (outcome, self.stats)
    }

    fn search(&mut self, state: SearchState) -> Walk {
        if let Some(limit) = self.step_budget {
            if self.stats.nodes_visited >= limit {
                return Walk::Aborted;
            }
        }
        self.stats.nodes_visited += 1;

        let region = match self.select.select_region(&state) {
            Selection::Complete => {
                return Walk::Solved(Placement::from_assignments(&state.assignments));
            }
            Selection::NoCandidates(region) => {
                trace!(region, "no candidates left");
                return Walk::Exhausted;
            }
            Selection::Region(region) => region,
        };

        for variant in self.order.order_placements(region, &state, self.landscape) {
            trace!(region, %variant, "trying placement");
            self.landscape.apply(region, variant);
            self.stats.applies += 1;

            let child = state.assign(region, variant);
            let walked = match propagation::enforce(self.landscape, child, &mut self.stats) {
                Propagation::Consistent(pruned) => self.search(pruned),
                Propagation::Inconsistent => Walk::Exhausted,
            };

            match walked {
                // The winning branch keeps its tiles on the landscape.
                Walk::Solved(placement) => return Walk::Solved(placement),
                Walk::Aborted => {
                    self.landscape.undo(region, variant);
                    self.stats.undos += 1;
                    return Walk::Aborted;
                }
                Walk::Exhausted => {
                    self.landscape.undo(region, variant);
                    self.stats.undos += 1;
                    self.stats.backtracks += 1;
                }
            }
        }

        Walk::Exhausted
    }
}
