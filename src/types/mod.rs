//! Document model for loaded TMX maps.

pub mod colour;
pub mod layer;
pub mod map;
pub mod object;
pub mod property;
pub mod tileset;

pub use colour::{Colour, ParseColourError};
pub use layer::{
    strip_flip_flags, Layer, FLIPPED_DIAGONALLY, FLIPPED_HORIZONTALLY, FLIPPED_VERTICALLY,
    FLIP_FLAGS_MASK,
};
pub use map::{Map, Orientation};
pub use object::{Object, ObjectGroup, Shape};
pub use property::Property;
pub use tileset::{Image, TileOffset, Tileset};
