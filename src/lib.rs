//! tmx - Streaming loader for TMX tile maps
//!
//! Loads maps written by the Tiled editor into an owned document model:
//! tilesets, tile layers (CSV or base64 + zlib/gzip data), object groups
//! and properties. The XML is parsed as a stream and every required
//! attribute is validated; failures come back as a [`TmxError`] and never
//! leave a partially built [`Map`] behind.
//!
//! ```ignore
//! let map = tmx::load("levels/intro.tmx")?;
//! println!("{}x{} tiles", map.width, map.height);
//! ```

pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod load;
pub mod output;
pub mod parser;
pub mod types;

pub use config::LoadOptions;
pub use error::{ErrorKind, Result, TmxError};
pub use load::{load, load_with, Format};
pub use parser::{parse_reader, parse_str};
pub use types::{
    strip_flip_flags, Colour, Image, Layer, Map, Object, ObjectGroup, Orientation, Property,
    Shape, TileOffset, Tileset, FLIPPED_DIAGONALLY, FLIPPED_HORIZONTALLY, FLIPPED_VERTICALLY,
    FLIP_FLAGS_MASK,
};
