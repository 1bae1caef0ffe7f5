//! `tileset`, `image` and `tileoffset` element parsers.

use std::io::BufRead;

use log::{debug, warn};

use crate::error::{Result, TmxError};
use crate::types::{Image, TileOffset, Tileset};

use super::{Element, Tag, TokenReader};

pub(super) fn parse_tileset<R: BufRead>(
    reader: &mut TokenReader<R>,
    element: &Element,
) -> Result<Tileset> {
    if let Some(source) = element.attr("source")? {
        return Err(TmxError::unsupported(
            format!("external tileset '{}'", source),
            Some("Embed the tileset in the map before loading it"),
        ));
    }

    let name = element.required("name")?;
    let first_gid = element.required_parsed("firstgid")?;
    let tile_width = element.required_parsed("tilewidth")?;
    let tile_height = element.required_parsed("tileheight")?;

    let mut tileset = Tileset::new(name, first_gid, tile_width, tile_height);
    tileset.spacing = element.parsed("spacing")?.unwrap_or(0);
    tileset.margin = element.parsed("margin")?.unwrap_or(0);

    reader.children(element, |reader, child| {
        match child.tag() {
            Tag::Image => {
                let image = parse_image(reader, &child)?;
                if let Some(previous) = tileset.image.replace(image) {
                    warn!(
                        "tileset '{}' has several images, '{}' replaced by the next one",
                        tileset.name, previous.source
                    );
                }
            }
            Tag::TileOffset => tileset.offset = parse_tile_offset(reader, &child)?,
            Tag::Tile => {
                return Err(TmxError::unsupported(
                    format!("per-tile data in tileset '{}'", tileset.name),
                    Some("Tile properties, animations and collision shapes cannot be loaded"),
                ));
            }
            _ => reader.skip(&child)?,
        }
        Ok(())
    })?;

    debug!(
        "parsed tileset '{}' (firstgid {})",
        tileset.name, tileset.first_gid
    );
    Ok(tileset)
}

fn parse_image<R: BufRead>(reader: &mut TokenReader<R>, element: &Element) -> Result<Image> {
    let image = Image {
        source: element.required("source")?,
        height: element.required_parsed("height")?,
        width: element.required_parsed("width")?,
        trans: element.colour("trans")?,
    };
    reader.skip(element)?;
    Ok(image)
}

fn parse_tile_offset<R: BufRead>(
    reader: &mut TokenReader<R>,
    element: &Element,
) -> Result<TileOffset> {
    let offset = TileOffset {
        x: element.required_parsed("x")?,
        y: element.required_parsed("y")?,
    };
    reader.skip(element)?;
    Ok(offset)
}
