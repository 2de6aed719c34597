use im::{OrdMap, OrdSet};

use crate::{
    landscape::{Landscape, RegionId},
    tiles::TileVariant,
};

/// The placements still open for one region.
///
/// Ordered so that iteration, and therefore the whole search, is
/// deterministic. Shrinks monotonically under propagation within one
/// search state; backtracking restores it by discarding the state.
pub type Domain = OrdSet<TileVariant>;

/// Domains of every region, keyed by region index.
pub type Domains = OrdMap<RegionId, Domain>;

/// Builds the initial domain of every region: the variants that meet its
/// targets in isolation, for kinds the pool holds at all.
pub fn initial_domains(landscape: &Landscape) -> Domains {
    let pool = landscape.pool();
    landscape
        .regions()
        .iter()
        .map(|region| {
            (
                region.index(),
                region.legal_placements(landscape.cells(), &pool),
            )
        })
        .collect()
}
