//! Streaming TMX parser.
//!
//! The parser walks the XML token stream once, top to bottom, without
//! building a DOM. Each element kind has a validating sub-parser that is
//! entered on the element's start tag and returns after its end tag:
//!
//! - `map` → `tileset`, `layer`, `objectgroup`, `properties`
//! - `tileset` → `image`, `tileoffset`
//! - `layer` → `properties`, `data`
//! - `objectgroup` → `object` → `polygon` | `polyline`
//!
//! Unknown elements are skipped with their whole subtree. The first error
//! aborts the walk; nodes under construction are dropped with it, so a
//! caller never sees a partially built map.
//!
//! # Usage
//!
//! ```ignore
//! let map = tmx::parser::parse_str(source)?;
//! for layer in map.layers.iter().rev() {
//!     println!("{}: {} tiles", layer.name, layer.tiles.len());
//! }
//! ```

mod layer;
mod map;
mod object;
mod properties;
mod reader;
mod tag;
mod tileset;

use std::io::BufRead;

use crate::config::LoadOptions;
use crate::error::{Result, TmxError};
use crate::types::Map;

pub use reader::{Element, Token, TokenReader};
pub use tag::Tag;

/// Parse a TMX document held in memory, with default options.
pub fn parse_str(source: &str) -> Result<Map> {
    parse_reader(source.as_bytes(), &LoadOptions::default())
}

/// Parse a TMX document from a buffered stream.
pub fn parse_reader<R: BufRead>(source: R, options: &LoadOptions) -> Result<Map> {
    let mut reader = TokenReader::new(source);

    let root = loop {
        match reader.next_token()? {
            Token::Start(element) => break element,
            Token::Eof => {
                return Err(TmxError::content("document", "no root element found"));
            }
            Token::End { .. } | Token::Other => {}
        }
    };

    if root.tag() != Tag::Map {
        return Err(TmxError::content(
            "document",
            format!("root is '{}', expected a 'map' element", root.name()),
        ));
    }

    map::parse_map(&mut reader, &root, options)
}

/// Interpret a `visible` attribute. Only `true` makes an element visible.
fn parse_visible(value: &str) -> bool {
    value.trim() == "true"
}
