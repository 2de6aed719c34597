use std::fmt;

use im::OrdMap;
use serde::Serialize;

use crate::{landscape::RegionId, tiles::TileVariant};

/// A tile variant committed to one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedTile {
    pub region: RegionId,
    pub variant: TileVariant,
}

/// The completed assignment, one tile per region in row-major order.
///
/// The [`fmt::Display`] rendering emits one line per region in the form
/// `<region> 4 <VARIANT>`, the `4` being the tile's side length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub tiles: Vec<PlacedTile>,
}

impl Placement {
    pub(crate) fn from_assignments(assignments: &OrdMap<RegionId, TileVariant>) -> Self {
        let tiles = assignments
            .iter()
            .map(|(&region, &variant)| PlacedTile { region, variant })
            .collect();
        Self { tiles }
    }

    /// The variant placed on `region`, if the placement covers it.
    pub fn variant_for(&self, region: RegionId) -> Option<TileVariant> {
        self.tiles
            .iter()
            .find(|tile| tile.region == region)
            .map(|tile| tile.variant)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            writeln!(f, "{} 4 {}", tile.region, tile.variant)?;
        }
        Ok(())
    }
}
