use im::{OrdMap, OrdSet};

use crate::{
    landscape::RegionId,
    solver::domains::Domains,
    tiles::{TilePool, TileVariant},
};

/// One node of the search: the domains still open, the tiles committed so
/// far, and the remaining pool.
///
/// States are cheap to clone thanks to the persistent maps, and a parent is
/// never mutated once a child exists; abandoning a branch is just dropping
/// its state.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub domains: Domains,
    pub assignments: OrdMap<RegionId, TileVariant>,
    pub pool: TilePool,
}

impl SearchState {
    pub fn root(domains: Domains, pool: TilePool) -> Self {
        Self {
            domains,
            assignments: OrdMap::new(),
            pool,
        }
    }

    /// Child state with `region` committed to `variant`: the region's
    /// domain collapses to the singleton and the variant's kind is drawn
    /// from the pool.
    pub fn assign(&self, region: RegionId, variant: TileVariant) -> Self {
        let mut pool = self.pool;
        pool.take(variant.kind());
        Self {
            domains: self.domains.update(region, OrdSet::unit(variant)),
            assignments: self.assignments.update(region, variant),
            pool,
        }
    }

    pub fn is_assigned(&self, region: RegionId) -> bool {
        self.assignments.contains_key(&region)
    }

    pub fn is_complete(&self) -> bool {
        self.assignments.len() == self.domains.len()
    }
}
