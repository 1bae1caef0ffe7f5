//! Tile layers.

use super::Property;

/// Set on a gid when the tile is mirrored horizontally.
pub const FLIPPED_HORIZONTALLY: u32 = 0x8000_0000;
/// Set on a gid when the tile is mirrored vertically.
pub const FLIPPED_VERTICALLY: u32 = 0x4000_0000;
/// Set on a gid when the tile is mirrored along its diagonal.
pub const FLIPPED_DIAGONALLY: u32 = 0x2000_0000;

/// All flip flags.
pub const FLIP_FLAGS_MASK: u32 = FLIPPED_HORIZONTALLY | FLIPPED_VERTICALLY | FLIPPED_DIAGONALLY;

/// Clear the flip flags from a gid.
pub fn strip_flip_flags(gid: u32) -> u32 {
    gid & !FLIP_FLAGS_MASK
}

/// A grid of global tile ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub visible: bool,
    pub opacity: f32,

    /// Row-major gids, `map.width * map.height` long. Empty when the layer
    /// has no `data` element. Values still carry their flip flags.
    pub tiles: Vec<u32>,

    pub properties: Vec<Property>,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            opacity: 1.0,
            tiles: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Get a layer property value by name.
    pub fn property(&self, name: &str) -> Option<&str> {
        super::property::lookup(&self.properties, name)
    }
}
