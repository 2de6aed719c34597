use im::OrdSet;

use crate::{
    landscape::{CategoryCounts, Cell, RegionId, CATEGORY_COUNT},
    tiles::{TilePool, TileVariant, REGION_CELLS, REGION_SIDE},
};

/// One 4x4 section of the landscape.
///
/// A region knows where it sits, which cells are its own, and how many
/// bushes of each category must stay visible once a tile is placed on it.
/// Regions partition the landscape: every cell belongs to exactly one.
#[derive(Debug, Clone)]
pub struct Region {
    index: RegionId,
    row: usize,
    col: usize,
    cell_indices: [usize; REGION_CELLS],
    target: CategoryCounts,
}

impl Region {
    pub(crate) fn new(
        index: RegionId,
        row: usize,
        col: usize,
        landscape_width: usize,
        target: CategoryCounts,
    ) -> Self {
        let mut cell_indices = [0; REGION_CELLS];
        for r in 0..REGION_SIDE {
            for c in 0..REGION_SIDE {
                cell_indices[r * REGION_SIDE + c] = (row + r) * landscape_width + (col + c);
            }
        }
        Self {
            index,
            row,
            col,
            cell_indices,
            target,
        }
    }

    pub fn index(&self) -> RegionId {
        self.index
    }

    /// Top-left cell position of this region in the landscape grid.
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// The visible-bush counts this region must end up with.
    pub fn target_counts(&self) -> CategoryCounts {
        self.target
    }

    /// Visible-bush counts derived from live cell state.
    pub fn current_counts(&self, cells: &[Cell]) -> CategoryCounts {
        let mut counts = [0; CATEGORY_COUNT];
        for &index in &self.cell_indices {
            if let Some(category) = cells[index].visible_marker() {
                counts[(category - 1) as usize] += 1;
            }
        }
        counts
    }

    /// Counts that would be visible were `variant` covering this region.
    pub fn counts_after(&self, cells: &[Cell], variant: TileVariant) -> CategoryCounts {
        let mut counts = [0; CATEGORY_COUNT];
        for slot in 0..REGION_CELLS {
            if variant.covers(slot / REGION_SIDE, slot % REGION_SIDE) {
                continue;
            }
            if let Some(category) = cells[self.cell_indices[slot]].visible_marker() {
                counts[(category - 1) as usize] += 1;
            }
        }
        counts
    }

    /// Every variant that meets this region's targets in isolation.
    ///
    /// "In isolation" means neighbor interactions through the shared pool
    /// are ignored beyond requiring at least one tile of the kind to exist;
    /// the propagation engine owns the rest.
    pub fn legal_placements(&self, cells: &[Cell], pool: &TilePool) -> OrdSet<TileVariant> {
        TileVariant::CATALOG
            .iter()
            .copied()
            .filter(|variant| pool.remaining(variant.kind()) > 0)
            .filter(|variant| self.counts_after(cells, *variant) == self.target)
            .collect()
    }

    /// Covers this region's cells under `variant`'s footprint.
    pub(crate) fn apply(&self, cells: &mut [Cell], variant: TileVariant) {
        self.set_covered(cells, variant, true);
    }

    /// Reverts a previous [`Region::apply`] of the same variant.
    pub(crate) fn undo(&self, cells: &mut [Cell], variant: TileVariant) {
        self.set_covered(cells, variant, false);
    }

    fn set_covered(&self, cells: &mut [Cell], variant: TileVariant, covered: bool) {
        for slot in 0..REGION_CELLS {
            if variant.covers(slot / REGION_SIDE, slot % REGION_SIDE) {
                cells[self.cell_indices[slot]].set_covered(covered);
            }
        }
    }
}
