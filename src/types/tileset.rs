//! Tilesets and their source images.

use super::Colour;

/// An embedded tileset.
#[derive(Debug, Clone, PartialEq)]
pub struct Tileset {
    pub name: String,

    /// Global id of the first tile in this set.
    pub first_gid: u32,

    pub tile_width: u32,
    pub tile_height: u32,

    /// Pixels between adjacent tiles in the image.
    pub spacing: u32,

    /// Pixels around the tiles in the image.
    pub margin: u32,

    /// Drawing offset applied to every tile of the set.
    pub offset: TileOffset,

    pub image: Option<Image>,
}

impl Tileset {
    pub fn new(name: impl Into<String>, first_gid: u32, tile_width: u32, tile_height: u32) -> Self {
        Self {
            name: name.into(),
            first_gid,
            tile_width,
            tile_height,
            spacing: 0,
            margin: 0,
            offset: TileOffset::default(),
            image: None,
        }
    }
}

/// Pixel offset from a `tileoffset` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileOffset {
    pub x: i32,
    pub y: i32,
}

/// The image a tileset is cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Path as written in the document, relative to the map file.
    pub source: String,
    pub width: u32,
    pub height: u32,

    /// Colour treated as transparent.
    pub trans: Option<Colour>,
}
