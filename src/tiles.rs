//! Tile shapes, their footprints, and the shared tile pool.
//!
//! A tile is a fixed 4x4 stencil dropped onto exactly one region of the
//! landscape. Wherever the stencil is solid, the cell underneath is covered
//! and its bush marker stops being visible. Rotations are distinct
//! [`TileVariant`]s; the pool is tracked per [`TileKind`], so a rotatable
//! kind may be placed in any orientation without consuming extra tiles.

use std::fmt;

use serde::Serialize;

/// Side length of a region and of every tile stencil.
pub const REGION_SIDE: usize = 4;

/// Number of cells a region (and a tile stencil) spans.
pub const REGION_CELLS: usize = REGION_SIDE * REGION_SIDE;

/// Orientation of a rotatable tile, in clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    const fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }
}

/// The three shape families a puzzle declares counts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    /// Covers the whole region.
    Full,
    /// Covers the 12-cell border ring, leaving the 2x2 interior visible.
    Outer,
    /// Covers one full edge plus one full adjacent edge (7 cells).
    El,
}

impl TileKind {
    pub const COUNT: usize = 3;
}

/// A placeable tile: shape family plus orientation.
///
/// The derived ordering (declaration order, then rotation) is the canonical
/// variant order used for deterministic tie-breaking everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "String")]
pub enum TileVariant {
    Full,
    Outer,
    El(Rotation),
}

/// Builds a footprint mask from four pattern rows; `#` marks a covered cell.
const fn stencil(rows: [&str; 4]) -> u16 {
    let mut mask = 0u16;
    let mut row = 0;
    while row < REGION_SIDE {
        let bytes = rows[row].as_bytes();
        let mut col = 0;
        while col < REGION_SIDE {
            if bytes[col] == b'#' {
                mask |= 1 << (row * REGION_SIDE + col);
            }
            col += 1;
        }
        row += 1;
    }
    mask
}

const FULL_FOOTPRINT: u16 = stencil(["####", "####", "####", "####"]);
const OUTER_FOOTPRINT: u16 = stencil(["####", "#..#", "#..#", "####"]);
const EL_FOOTPRINTS: [u16; 4] = [
    stencil(["####", "#...", "#...", "#..."]),
    stencil(["####", "...#", "...#", "...#"]),
    stencil(["...#", "...#", "...#", "####"]),
    stencil(["#...", "#...", "#...", "####"]),
];

impl TileVariant {
    /// Every placeable variant, in canonical order.
    pub const CATALOG: [TileVariant; 6] = [
        TileVariant::Full,
        TileVariant::Outer,
        TileVariant::El(Rotation::R0),
        TileVariant::El(Rotation::R90),
        TileVariant::El(Rotation::R180),
        TileVariant::El(Rotation::R270),
    ];

    pub const fn kind(self) -> TileKind {
        match self {
            TileVariant::Full => TileKind::Full,
            TileVariant::Outer => TileKind::Outer,
            TileVariant::El(_) => TileKind::El,
        }
    }

    /// Footprint as a 16-bit mask; bit `row * 4 + col` is set when that
    /// position of the region is covered.
    pub const fn footprint(self) -> u16 {
        match self {
            TileVariant::Full => FULL_FOOTPRINT,
            TileVariant::Outer => OUTER_FOOTPRINT,
            TileVariant::El(rotation) => EL_FOOTPRINTS[rotation as usize],
        }
    }

    /// Whether this variant covers the given position of its region.
    pub const fn covers(self, row: usize, col: usize) -> bool {
        self.footprint() & (1 << (row * REGION_SIDE + col)) != 0
    }
}

impl fmt::Display for TileVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileVariant::Full => f.write_str("FULL_BLOCK"),
            TileVariant::Outer => f.write_str("OUTER_BOUNDARY"),
            TileVariant::El(rotation) => write!(f, "EL_SHAPE_{}", rotation.degrees()),
        }
    }
}

impl From<TileVariant> for String {
    fn from(variant: TileVariant) -> Self {
        variant.to_string()
    }
}

/// Remaining tiles of each kind, shared by every region.
///
/// The pool is the only constraint that couples regions to each other: a
/// region consuming the last tile of a kind removes that kind from every
/// other region's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePool {
    counts: [u16; TileKind::COUNT],
}

impl TilePool {
    pub fn new(full: u16, outer: u16, el: u16) -> Self {
        Self {
            counts: [full, outer, el],
        }
    }

    pub fn remaining(&self, kind: TileKind) -> u16 {
        self.counts[kind as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Draws one tile of `kind` from the pool. Callers check `remaining`
    /// first; drawing from an empty slot leaves it empty.
    pub fn take(&mut self, kind: TileKind) {
        debug_assert!(self.counts[kind as usize] > 0);
        self.counts[kind as usize] = self.counts[kind as usize].saturating_sub(1);
    }

    pub fn put_back(&mut self, kind: TileKind) {
        self.counts[kind as usize] += 1;
    }

    /// Whether the pool can supply a tile of each kind at the same time.
    pub fn can_supply(&self, a: TileKind, b: TileKind) -> bool {
        if a == b {
            self.remaining(a) >= 2
        } else {
            self.remaining(a) >= 1 && self.remaining(b) >= 1
        }
    }
}
