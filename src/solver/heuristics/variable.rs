//! Heuristics for selecting which region to branch on next.

use crate::{landscape::RegionId, solver::state::SearchState};

/// Outcome of region selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Branch on this region next.
    Region(RegionId),
    /// The chosen region has no candidates left; the search must backtrack
    /// immediately, without attempting propagation.
    NoCandidates(RegionId),
    /// Every region is assigned.
    Complete,
}

/// A strategy for choosing which unassigned region the search branches on.
pub trait RegionSelection {
    fn select_region(&self, state: &SearchState) -> Selection;
}

/// Minimum-remaining-values selection.
///
/// A "fail-first" strategy: the region with the fewest remaining placements
/// is tackled first, so dead ends surface as early as possible. Ties are
/// broken by region index (row-major order) to keep the search tree
/// reproducible across runs.
pub struct MinimumRemainingValues;

impl RegionSelection for MinimumRemainingValues {
    fn select_region(&self, state: &SearchState) -> Selection {
        state
            .domains
            .iter()
            .filter(|(region, _)| !state.assignments.contains_key(*region))
            .min_by(|(region_a, domain_a), (region_b, domain_b)| {
                // Primary criterion: domain size. Secondary: region index.
                (domain_a.len(), *region_a).cmp(&(domain_b.len(), *region_b))
            })
            .map_or(Selection::Complete, |(&region, domain)| {
                if domain.is_empty() {
                    Selection::NoCandidates(region)
                } else {
                    Selection::Region(region)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::domains::{Domain, Domains};
    use crate::tiles::{Rotation, TilePool, TileVariant};

    fn state_with(domains: Domains) -> SearchState {
        SearchState::root(domains, TilePool::new(4, 4, 4))
    }

    #[test]
    fn smallest_domain_wins() {
        let domains: Domains = [
            (0u32, Domain::from_iter([TileVariant::Full, TileVariant::Outer])),
            (1, Domain::from_iter([TileVariant::Outer])),
        ]
        .into_iter()
        .collect();

        let selection = MinimumRemainingValues.select_region(&state_with(domains));
        assert_eq!(selection, Selection::Region(1));
    }

    #[test]
    fn ties_break_on_region_index() {
        let domains: Domains = [
            (2u32, Domain::from_iter([TileVariant::Full])),
            (0, Domain::from_iter([TileVariant::Outer])),
            (1, Domain::from_iter([TileVariant::El(Rotation::R0)])),
        ]
        .into_iter()
        .collect();

        let selection = MinimumRemainingValues.select_region(&state_with(domains));
        assert_eq!(selection, Selection::Region(0));
    }

    #[test]
    fn empty_domain_signals_no_candidates() {
        let domains: Domains = [
            (0u32, Domain::from_iter([TileVariant::Full])),
            (1, Domain::new()),
        ]
        .into_iter()
        .collect();

        let selection = MinimumRemainingValues.select_region(&state_with(domains));
        assert_eq!(selection, Selection::NoCandidates(1));
    }

    #[test]
    fn all_assigned_is_complete() {
        let domains: Domains = [(0u32, Domain::from_iter([TileVariant::Full]))]
            .into_iter()
            .collect();
        let state = state_with(domains).assign(0, TileVariant::Full);

        let selection = MinimumRemainingValues.select_region(&state);
        assert_eq!(selection, Selection::Complete);
    }
}
