//! The map: root of a loaded TMX document.
//!
//! Every collection owned by a [`Map`] (and by its layers and object
//! groups) lists its entries in *reverse* document order: index 0 is the
//! last sibling that appeared in the file. Callers that care about the
//! authoring order should iterate with `.iter().rev()`.

use std::fmt;
use std::str::FromStr;

use super::{Layer, ObjectGroup, Property, Tileset};

/// Map projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Orthogonal,
    Isometric,
    Staggered,
    Hexagonal,
}

impl Orientation {
    /// The attribute value naming this orientation.
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Orthogonal => "orthogonal",
            Orientation::Isometric => "isometric",
            Orientation::Staggered => "staggered",
            Orientation::Hexagonal => "hexagonal",
        }
    }
}

impl FromStr for Orientation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orthogonal" => Ok(Orientation::Orthogonal),
            "isometric" => Ok(Orientation::Isometric),
            "staggered" => Ok(Orientation::Staggered),
            "hexagonal" => Ok(Orientation::Hexagonal),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully loaded tile map.
///
/// Dropping the map releases every tileset, layer, object group and
/// property it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub orientation: Orientation,

    /// Width in tiles.
    pub width: u32,

    /// Height in tiles.
    pub height: u32,

    /// Tile width in pixels.
    pub tile_width: u32,

    /// Tile height in pixels.
    pub tile_height: u32,

    pub tilesets: Vec<Tileset>,
    pub layers: Vec<Layer>,
    pub object_groups: Vec<ObjectGroup>,
    pub properties: Vec<Property>,
}

impl Map {
    /// Create an empty map with the given geometry.
    pub fn new(
        orientation: Orientation,
        width: u32,
        height: u32,
        tile_width: u32,
        tile_height: u32,
    ) -> Self {
        Self {
            orientation,
            width,
            height,
            tile_width,
            tile_height,
            tilesets: Vec::new(),
            layers: Vec::new(),
            object_groups: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Number of cells in every tile layer (`width * height`).
    pub fn tile_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Find a layer by name.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Find a tileset by name.
    pub fn tileset(&self, name: &str) -> Option<&Tileset> {
        self.tilesets.iter().find(|t| t.name == name)
    }

    /// Find an object group by name.
    pub fn object_group(&self, name: &str) -> Option<&ObjectGroup> {
        self.object_groups.iter().find(|g| g.name == name)
    }

    /// Get a map property value by name.
    pub fn property(&self, name: &str) -> Option<&str> {
        super::property::lookup(&self.properties, name)
    }
}
