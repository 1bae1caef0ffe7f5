//! `map` element parser.

use std::io::BufRead;

use log::debug;

use crate::config::LoadOptions;
use crate::error::{Result, TmxError};
use crate::types::{Map, Orientation};

use super::layer::parse_layer;
use super::object::parse_object_group;
use super::properties::parse_properties;
use super::tileset::parse_tileset;
use super::{Element, Tag, TokenReader};

/// Parse the root `map` element and everything below it.
pub(super) fn parse_map<R: BufRead>(
    reader: &mut TokenReader<R>,
    element: &Element,
    options: &LoadOptions,
) -> Result<Map> {
    let orientation = element.required("orientation")?;
    let orientation = orientation.parse::<Orientation>().map_err(|_| {
        TmxError::content("map", format!("unsupported orientation '{}'", orientation))
    })?;

    let height = element.required_parsed("height")?;
    let width = element.required_parsed("width")?;
    let tile_height = element.required_parsed("tileheight")?;
    let tile_width = element.required_parsed("tilewidth")?;

    if let Some(infinite) = element.attr("infinite")? {
        if infinite.trim() != "0" {
            return Err(TmxError::unsupported(
                "infinite maps are not supported",
                Some("Turn off 'Infinite' in the map properties and save again"),
            ));
        }
    }

    let tile_count = tile_budget(width, height, options)?;
    let mut map = Map::new(orientation, width, height, tile_width, tile_height);

    reader.children(element, |reader, child| {
        match child.tag() {
            Tag::Tileset => map.tilesets.push(parse_tileset(reader, &child)?),
            Tag::Layer => map.layers.push(parse_layer(reader, &child, tile_count)?),
            Tag::ObjectGroup => map
                .object_groups
                .push(parse_object_group(reader, &child, options)?),
            Tag::Properties => map.properties.extend(parse_properties(reader, &child)?),
            Tag::Group => {
                return Err(TmxError::unsupported("group layers are not supported", None));
            }
            _ => reader.skip(&child)?,
        }
        Ok(())
    })?;

    map.tilesets.reverse();
    map.layers.reverse();
    map.object_groups.reverse();
    map.properties.reverse();

    debug!(
        "parsed {}x{} {} map: {} tilesets, {} layers, {} object groups",
        map.width,
        map.height,
        map.orientation,
        map.tilesets.len(),
        map.layers.len(),
        map.object_groups.len()
    );

    Ok(map)
}

/// Number of tiles every layer of a `width` x `height` map holds.
fn tile_budget(width: u32, height: u32, options: &LoadOptions) -> Result<usize> {
    let count = width as u64 * height as u64;
    if count > options.max_tiles {
        return Err(TmxError::Allocation {
            message: format!(
                "{}x{} map exceeds the limit of {} tiles",
                width, height, options.max_tiles
            ),
        });
    }

    usize::try_from(count).map_err(|_| TmxError::Allocation {
        message: format!("{}x{} map does not fit in memory", width, height),
    })
}
