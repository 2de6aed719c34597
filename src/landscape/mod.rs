//! The landscape grid and its partition into 4x4 regions.

mod parse;
pub mod region;

pub use region::Region;

use std::fmt;

use tracing::debug;

use crate::{
    error::{FormatError, Result},
    tiles::{TilePool, TileVariant, REGION_SIDE},
};

/// Identifier of a region, row-major across the landscape.
pub type RegionId = u32;

/// Number of bush categories a landscape distinguishes.
pub const CATEGORY_COUNT: usize = 4;

/// Visible-bush counts indexed by category (category `1` at index 0).
pub type CategoryCounts = [u16; CATEGORY_COUNT];

/// One grid position: an optional bush marker fixed at build time, and a
/// coverage flag toggled by tile placement. A cell's identity is its index
/// in the grid; only the coverage flag ever changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    marker: Option<u8>,
    covered: bool,
}

impl Cell {
    fn with_marker(marker: Option<u8>) -> Self {
        Self {
            marker,
            covered: false,
        }
    }

    pub fn marker(&self) -> Option<u8> {
        self.marker
    }

    pub fn covered(&self) -> bool {
        self.covered
    }

    /// The marker, while no tile covers the cell.
    pub fn visible_marker(&self) -> Option<u8> {
        if self.covered {
            None
        } else {
            self.marker
        }
    }

    pub(crate) fn set_covered(&mut self, covered: bool) {
        self.covered = covered;
    }
}

/// The full puzzle: the cell grid, its regions, and the shared tile pool.
///
/// Built once from input text and then owned by the run; the solver mutates
/// only cell coverage, through [`Landscape::apply`] and [`Landscape::undo`].
#[derive(Debug, Clone)]
pub struct Landscape {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    regions: Vec<Region>,
    neighbors: Vec<Vec<RegionId>>,
    pool: TilePool,
}

impl Landscape {
    /// Parses `text` and constructs the landscape.
    ///
    /// # Errors
    ///
    /// Fails with a [`FormatError`] when the grid's sides are not positive
    /// multiples of 4, a marker names an unknown category, the declared
    /// tile counts do not sum to the region count, or a section is missing
    /// or malformed. Rows shorter than the widest row are padded with
    /// empty cells before the dimension check.
    pub fn build(text: &str) -> Result<Self> {
        let sections = parse::parse_sections(text)?;
        let pool = parse::parse_tiles(&sections.tiles)?;
        let rows = parse::parse_landscape(&sections.landscape)?;

        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 || width % REGION_SIDE != 0 || height % REGION_SIDE != 0 {
            return Err(FormatError::BadDimensions { width, height }.into());
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in &rows {
            for col in 0..width {
                cells.push(Cell::with_marker(row.get(col).copied().flatten()));
            }
        }

        let regions_across = width / REGION_SIDE;
        let regions_down = height / REGION_SIDE;
        let region_count = regions_across * regions_down;
        if pool.total() != region_count {
            return Err(FormatError::TileCountMismatch {
                declared: pool.total(),
                regions: region_count,
            }
            .into());
        }

        let targets = parse::parse_targets(&sections.targets, region_count)?;

        let mut regions = Vec::with_capacity(region_count);
        let mut neighbors = Vec::with_capacity(region_count);
        for rr in 0..regions_down {
            for rc in 0..regions_across {
                let index = (rr * regions_across + rc) as RegionId;
                regions.push(Region::new(
                    index,
                    rr * REGION_SIDE,
                    rc * REGION_SIDE,
                    width,
                    targets[index as usize],
                ));

                let mut adjacent = Vec::new();
                if rr > 0 {
                    adjacent.push(((rr - 1) * regions_across + rc) as RegionId);
                }
                if rc > 0 {
                    adjacent.push((rr * regions_across + rc - 1) as RegionId);
                }
                if rc + 1 < regions_across {
                    adjacent.push((rr * regions_across + rc + 1) as RegionId);
                }
                if rr + 1 < regions_down {
                    adjacent.push(((rr + 1) * regions_across + rc) as RegionId);
                }
                neighbors.push(adjacent);
            }
        }

        debug!(width, height, regions = region_count, "landscape built");

        Ok(Self {
            width,
            height,
            cells,
            regions,
            neighbors,
            pool,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Regions orthogonally adjacent to `region`, in ascending index order.
    pub fn neighbors(&self, region: RegionId) -> &[RegionId] {
        &self.neighbors[region as usize]
    }

    /// The initial tile pool. Copy semantics: the search tracks its own
    /// remaining counts per state.
    pub fn pool(&self) -> TilePool {
        self.pool
    }

    /// Covers `region`'s cells under `variant`'s footprint.
    pub fn apply(&mut self, region: RegionId, variant: TileVariant) {
        let region = &self.regions[region as usize];
        region.apply(&mut self.cells, variant);
    }

    /// Reverts a previous [`Landscape::apply`] of the same variant.
    pub fn undo(&mut self, region: RegionId, variant: TileVariant) {
        let region = &self.regions[region as usize];
        region.undo(&mut self.cells, variant);
    }
}

impl fmt::Display for Landscape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let cell = &self.cells[row * self.width + col];
                if cell.covered() {
                    f.write_str("#")?;
                } else {
                    match cell.marker() {
                        Some(category) => write!(f, "{category}")?,
                        None => f.write_str(".")?,
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
