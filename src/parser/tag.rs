//! Element names understood by the walker.

/// Closed set of TMX element names. Anything else is [`Tag::Unknown`]
/// and gets skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Map,
    Tileset,
    Image,
    TileOffset,
    Tile,
    Layer,
    Data,
    Chunk,
    ObjectGroup,
    Object,
    Polygon,
    Polyline,
    Properties,
    Property,
    Group,
    Unknown,
}

impl Tag {
    pub fn from_name(name: &[u8]) -> Self {
        match name {
            b"map" => Tag::Map,
            b"tileset" => Tag::Tileset,
            b"image" => Tag::Image,
            b"tileoffset" => Tag::TileOffset,
            b"tile" => Tag::Tile,
            b"layer" => Tag::Layer,
            b"data" => Tag::Data,
            b"chunk" => Tag::Chunk,
            b"objectgroup" => Tag::ObjectGroup,
            b"object" => Tag::Object,
            b"polygon" => Tag::Polygon,
            b"polyline" => Tag::Polyline,
            b"properties" => Tag::Properties,
            b"property" => Tag::Property,
            b"group" => Tag::Group,
            _ => Tag::Unknown,
        }
    }

    /// The element name, or `None` for unknown elements.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Tag::Map => "map",
            Tag::Tileset => "tileset",
            Tag::Image => "image",
            Tag::TileOffset => "tileoffset",
            Tag::Tile => "tile",
            Tag::Layer => "layer",
            Tag::Data => "data",
            Tag::Chunk => "chunk",
            Tag::ObjectGroup => "objectgroup",
            Tag::Object => "object",
            Tag::Polygon => "polygon",
            Tag::Polyline => "polyline",
            Tag::Properties => "properties",
            Tag::Property => "property",
            Tag::Group => "group",
            Tag::Unknown => return None,
        };
        Some(name)
    }
}
