use crate::{
    landscape::{Landscape, RegionId},
    solver::state::SearchState,
    tiles::TileVariant,
};

/// A strategy for ordering the candidate placements of a chosen region.
pub trait PlacementOrdering {
    /// Returns the region's candidates in the order the search should try
    /// them.
    fn order_placements(
        &self,
        region: RegionId,
        state: &SearchState,
        landscape: &Landscape,
    ) -> Vec<TileVariant>;
}

/// Least-constraining-value ordering.
///
/// Each candidate is scored by how many entries it would eliminate from the
/// domains of unassigned neighboring regions — a cheap forward check on the
/// pool, not a full propagation pass. Candidates that leave neighbors the
/// most room come first. Equal scores fall back to the canonical variant
/// order, so the sequence is identical across runs.
pub struct LeastConstrainingValue;

impl PlacementOrdering for LeastConstrainingValue {
    fn order_placements(
        &self,
        region: RegionId,
        state: &SearchState,
        landscape: &Landscape,
    ) -> Vec<TileVariant> {
        let Some(domain) = state.domains.get(&region) else {
            return Vec::new();
        };

        let neighbors: Vec<RegionId> = landscape
            .neighbors(region)
            .iter()
            .copied()
            .filter(|neighbor| !state.assignments.contains_key(neighbor))
            .collect();

        let mut ranked: Vec<(usize, TileVariant)> = domain
            .iter()
            .copied()
            .filter(|candidate| state.pool.remaining(candidate.kind()) > 0)
            .map(|candidate| {
                let mut pool = state.pool;
                pool.take(candidate.kind());
                let eliminated: usize = neighbors
                    .iter()
                    .map(|neighbor| {
                        state.domains.get(neighbor).map_or(0, |other| {
                            other
                                .iter()
                                .filter(|entry| pool.remaining(entry.kind()) == 0)
                                .count()
                        })
                    })
                    .sum();
                (eliminated, candidate)
            })
            .collect();

        // Tuple order: elimination count first, canonical variant order on
        // ties.
        ranked.sort_unstable();
        ranked.into_iter().map(|(_, candidate)| candidate).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::domains::initial_domains;
    use crate::solver::state::SearchState;
    use crate::tiles::Rotation;

    // Two empty regions side by side; any available tile satisfies an
    // all-zero target, so both domains hold every pool-backed variant.
    const TWO_OPEN_REGIONS: &str = "\
# landscape
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
# tiles
FULL_BLOCK=1 EL_SHAPE=1
# targets
0 0 0 0 0
1 0 0 0 0
";

    #[test]
    fn scarce_kinds_rank_by_neighbor_eliminations() {
        let landscape = Landscape::build(TWO_OPEN_REGIONS).unwrap();
        let state = SearchState::root(initial_domains(&landscape), landscape.pool());

        let ordered = LeastConstrainingValue.order_placements(0, &state, &landscape);

        // Taking the one full block removes a single entry from the
        // neighbor's domain; taking the one el removes all four rotations.
        assert_eq!(
            ordered,
            vec![
                TileVariant::Full,
                TileVariant::El(Rotation::R0),
                TileVariant::El(Rotation::R90),
                TileVariant::El(Rotation::R180),
                TileVariant::El(Rotation::R270),
            ],
        );
    }

    #[test]
    fn exhausted_kinds_are_skipped() {
        let landscape = Landscape::build(TWO_OPEN_REGIONS).unwrap();
        let root = SearchState::root(initial_domains(&landscape), landscape.pool());
        let state = root.assign(1, TileVariant::Full);

        let ordered = LeastConstrainingValue.order_placements(0, &state, &landscape);
        assert!(!ordered.contains(&TileVariant::Full));
        assert_eq!(ordered.len(), 4);
    }
}
