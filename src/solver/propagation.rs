//! Arc-consistency propagation (AC-3) over the region graph.
//!
//! Arcs are ordered pairs of orthogonally adjacent regions. Two candidates
//! on an arc are compatible when the remaining tile pool can supply both at
//! once; a candidate with no compatible counterpart on the far side of some
//! arc can never appear in a complete assignment and is pruned.

use std::time::Instant;

use tracing::trace;

use crate::{
    landscape::{Landscape, RegionId},
    solver::{domains::Domain, state::SearchState, stats::SearchStats, work_list::WorkList},
    tiles::{TilePool, TileVariant},
};

/// Result of a propagation pass.
#[derive(Debug)]
pub enum Propagation {
    /// Fixpoint reached; the pruned state is returned.
    Consistent(SearchState),
    /// Some region's domain was wiped out under the current assignments.
    Inconsistent,
}

/// Runs AC-3 to fixpoint on the given state.
///
/// Every arc is revised until no domain changes; when a revision shrinks a
/// region's domain, all arcs pointing at that region are re-queued. Returns
/// [`Propagation::Inconsistent`] as soon as any domain empties. The state
/// is a working copy owned by the caller's search node, so an inconsistent
/// result is discarded rather than undone.
pub fn enforce(landscape: &Landscape, state: SearchState, stats: &mut SearchStats) -> Propagation {
    let mut state = state;

    let mut worklist = WorkList::new();
    for region in landscape.regions() {
        for &neighbor in landscape.neighbors(region.index()) {
            worklist.push_back(region.index(), neighbor);
        }
    }

    while let Some((target, against)) = worklist.pop_front() {
        // A committed region's tile is already drawn from the pool; its
        // singleton domain is never revised.
        if state.assignments.contains_key(&target) {
            continue;
        }

        stats.revisions += 1;
        let started = Instant::now();
        let revised = revise(&state, target, against);
        stats.propagation_micros += started.elapsed().as_micros() as u64;

        let Some(pruned) = revised else {
            continue;
        };
        stats.prunings += 1;

        if pruned.is_empty() {
            trace!(region = target, "domain wiped out");
            return Propagation::Inconsistent;
        }

        state.domains = state.domains.update(target, pruned);
        for &incoming in landscape.neighbors(target) {
            if incoming != against {
                worklist.push_back(incoming, target);
            }
        }
    }

    Propagation::Consistent(state)
}

/// Revises `target`'s domain against `against`: drops every candidate
/// without a supporting candidate on the far side of the arc. Returns the
/// shrunk domain, or `None` when nothing was dropped.
fn revise(state: &SearchState, target: RegionId, against: RegionId) -> Option<Domain> {
    let domain = state.domains.get(&target)?;
    let other = state.domains.get(&against)?;
    let other_assigned = state.assignments.contains_key(&against);

    let kept: Domain = domain
        .iter()
        .copied()
        .filter(|candidate| {
            other
                .iter()
                .any(|support| supports(&state.pool, *candidate, *support, other_assigned))
        })
        .collect();

    if kept.len() < domain.len() {
        Some(kept)
    } else {
        None
    }
}

/// Whether the remaining pool lets `candidate` coexist with `support` on an
/// arc. A support drawn by an already-committed region costs nothing more.
fn supports(
    pool: &TilePool,
    candidate: TileVariant,
    support: TileVariant,
    support_assigned: bool,
) -> bool {
    if support_assigned {
        pool.remaining(candidate.kind()) >= 1
    } else {
        pool.can_supply(candidate.kind(), support.kind())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::domains::initial_domains;
    use crate::solver::stats::SearchStats;

    // Four regions; the top two hold interior bushes that only a full block
    // can hide, but the pool holds a single full block.
    const CONTESTED_FULL_BLOCK: &str = "\
# landscape
. . . . . . . .
. 1 . . . 1 . .
. . 1 . . . 1 .
. . . . . . . .
2 . . . 2 . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
# tiles
FULL_BLOCK=1 EL_SHAPE=3
# targets
0 0 0 0 0
1 0 0 0 0
2 0 1 0 0
3 0 1 0 0
";

    #[test]
    fn contested_scarce_kind_is_inconsistent_at_the_root() {
        let landscape = Landscape::build(CONTESTED_FULL_BLOCK).unwrap();
        let root = SearchState::root(initial_domains(&landscape), landscape.pool());
        let mut stats = SearchStats::default();

        assert!(matches!(
            enforce(&landscape, root, &mut stats),
            Propagation::Inconsistent
        ));
        assert!(stats.prunings >= 1);
    }

    // Same shape, but two full blocks: enough for both contested regions.
    const SHARED_FULL_BLOCKS: &str = "\
# landscape
. . . . . . . .
. 1 . . . 1 . .
. . 1 . . . 1 .
. . . . . . . .
2 . . . 2 . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
# tiles
FULL_BLOCK=2 EL_SHAPE=2
# targets
0 0 0 0 0
1 0 0 0 0
2 0 1 0 0
3 0 1 0 0
";

    #[test]
    fn enforce_is_idempotent_at_fixpoint() {
        let landscape = Landscape::build(SHARED_FULL_BLOCKS).unwrap();
        let root = SearchState::root(initial_domains(&landscape), landscape.pool());
        let mut stats = SearchStats::default();

        let Propagation::Consistent(first) = enforce(&landscape, root, &mut stats) else {
            panic!("expected a consistent fixpoint");
        };
        let Propagation::Consistent(second) = enforce(&landscape, first.clone(), &mut stats)
        else {
            panic!("expected the fixpoint to stay consistent");
        };

        assert_eq!(first.domains, second.domains);
    }

    #[test]
    fn assigned_support_only_charges_the_candidate() {
        let landscape = Landscape::build(SHARED_FULL_BLOCKS).unwrap();
        let root = SearchState::root(initial_domains(&landscape), landscape.pool());
        let mut stats = SearchStats::default();

        // Commit region 0 to a full block; region 1 still deserves the
        // other one, so propagation must keep it available.
        let child = root.assign(0, TileVariant::Full);
        let Propagation::Consistent(pruned) = enforce(&landscape, child, &mut stats) else {
            panic!("one full block should remain for region 1");
        };
        assert!(pruned
            .domains
            .get(&1)
            .unwrap()
            .contains(&TileVariant::Full));
    }
}
