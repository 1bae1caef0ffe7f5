//! `layer` and `data` element parsers.

use std::io::BufRead;

use log::debug;

use crate::decode::{decode_compressed, decode_csv, Compression};
use crate::error::{Result, TmxError};
use crate::types::Layer;

use super::properties::parse_properties;
use super::{parse_visible, Element, Tag, TokenReader};

/// Parse a `layer` whose tile data covers `tile_count` cells.
pub(super) fn parse_layer<R: BufRead>(
    reader: &mut TokenReader<R>,
    element: &Element,
    tile_count: usize,
) -> Result<Layer> {
    let mut layer = Layer::new(element.required("name")?);

    if let Some(visible) = element.attr("visible")? {
        layer.visible = parse_visible(&visible);
    }
    if let Some(opacity) = element.parsed("opacity")? {
        layer.opacity = opacity;
    }

    reader.children(element, |reader, child| {
        match child.tag() {
            Tag::Properties => layer.properties.extend(parse_properties(reader, &child)?),
            Tag::Data => layer.tiles = parse_data(reader, &child, tile_count)?,
            _ => reader.skip(&child)?,
        }
        Ok(())
    })?;

    layer.properties.reverse();

    debug!("parsed layer '{}' ({} tiles)", layer.name, layer.tiles.len());
    Ok(layer)
}

/// How a `data` element's text is encoded.
enum Encoding {
    Csv,
    Base64(Compression),
}

fn parse_data<R: BufRead>(
    reader: &mut TokenReader<R>,
    element: &Element,
    tile_count: usize,
) -> Result<Vec<u32>> {
    let encoding = match element.required("encoding")?.as_str() {
        "csv" => Encoding::Csv,
        "base64" => {
            let compression = element.required("compression")?;
            let compression = Compression::from_attribute(&compression).ok_or_else(|| {
                TmxError::UnsupportedEncoding {
                    message: format!("unsupported data compression '{}'", compression),
                    help: Some("Save the map with zlib or gzip compression".to_string()),
                }
            })?;
            Encoding::Base64(compression)
        }
        "xml" => {
            return Err(TmxError::unsupported(
                "XML tile data encoding",
                Some("Save the map with CSV or base64 tile layer format"),
            ));
        }
        other => {
            return Err(TmxError::UnsupportedEncoding {
                message: format!("unknown data encoding '{}'", other),
                help: Some("Use CSV or base64 tile layer format".to_string()),
            });
        }
    };

    let text = reader.read_text(element, |child| match child.tag() {
        Tag::Chunk => TmxError::unsupported("infinite map chunks", None),
        _ => TmxError::content("data", format!("unexpected '{}' element", child.name())),
    })?;

    let tiles = match encoding {
        Encoding::Csv => decode_csv(&text, tile_count)?,
        Encoding::Base64(compression) => decode_compressed(&text, compression, tile_count)?,
    };
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::super::parse_str;
    use crate::types::Layer;
    use crate::ErrorKind;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use flate2::write::ZlibEncoder;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn parse_layer_doc(layer: &str) -> crate::Result<Layer> {
        let map = parse_str(&format!(
            r#"<map orientation="orthogonal" width="3" height="2" tilewidth="16" tileheight="16">{}</map>"#,
            layer
        ))?;
        Ok(map.layers.into_iter().next().expect("one layer"))
    }

    fn zlib_base64(gids: &[u32]) -> String {
        let bytes: Vec<u8> = gids.iter().flat_map(|g| g.to_le_bytes()).collect();
        let mut encoder = ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(&bytes).unwrap();
        STANDARD.encode(encoder.finish().unwrap())
    }

    #[test]
    fn test_csv_layer() {
        let layer = parse_layer_doc(
            r#"<layer name="ground" width="3" height="2">
                 <data encoding="csv">
1,2,3,
4,5,6
</data>
               </layer>"#,
        )
        .unwrap();

        assert_eq!(layer.name, "ground");
        assert!(layer.visible);
        assert_eq!(layer.opacity, 1.0);
        assert_eq!(layer.tiles, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_visibility_and_opacity() {
        let layer = parse_layer_doc(r#"<layer name="fog" visible="0" opacity="0.25"/>"#).unwrap();
        assert!(!layer.visible);
        assert_eq!(layer.opacity, 0.25);
        assert!(layer.tiles.is_empty());

        let layer = parse_layer_doc(r#"<layer name="fog" visible="1"/>"#).unwrap();
        assert!(!layer.visible);
    }

    #[test]
    fn test_zlib_layer() {
        let gids = [1, 0, 0x8000_0002, 3, 3, 3];
        let layer = parse_layer_doc(&format!(
            r#"<layer name="z"><data encoding="base64" compression="zlib">
               {}
               </data></layer>"#,
            zlib_base64(&gids)
        ))
        .unwrap();
        assert_eq!(layer.tiles, gids.to_vec());
    }

    #[test]
    fn test_zlib_length_mismatch() {
        let err = parse_layer_doc(&format!(
            r#"<layer name="z"><data encoding="base64" compression="zlib">{}</data></layer>"#,
            zlib_base64(&[1, 2, 3, 4, 5])
        ))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidElementContent);
        insta::assert_snapshot!(err.to_string(), @"invalid content in the 'data' element: decompressed payload is 20 bytes, expected 24");
    }

    #[test]
    fn test_csv_wrong_count() {
        let err = parse_layer_doc(r#"<layer name="a"><data encoding="csv">1,2,3,4,5</data></layer>"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidElementContent);
        insta::assert_snapshot!(err.to_string(), @"invalid content in the 'data' element: expected tile #5 but the list ended");

        let err = parse_layer_doc(
            r#"<layer name="a"><data encoding="csv">1,2,3,4,5,6,7</data></layer>"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid content in the 'data' element: unexpected value at tile #6"
        );
    }

    #[test]
    fn test_missing_name() {
        let err = parse_layer_doc(r#"<layer visible="1"/>"#).unwrap_err();
        assert_eq!(err.to_string(), "missing 'name' attribute in the 'layer' element");
    }

    #[test]
    fn test_missing_encoding() {
        let err = parse_layer_doc(r#"<layer name="a"><data><tile gid="1"/></data></layer>"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingAttribute);
    }

    #[test]
    fn test_xml_encoding_unsupported() {
        let err = parse_layer_doc(r#"<layer name="a"><data encoding="xml"><tile gid="1"/></data></layer>"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFunctionality);
    }

    #[test]
    fn test_base64_requires_compression() {
        let err = parse_layer_doc(r#"<layer name="a"><data encoding="base64">AAAA</data></layer>"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing 'compression' attribute in the 'data' element"
        );

        let err = parse_layer_doc(
            r#"<layer name="a"><data encoding="base64" compression="zstd">AAAA</data></layer>"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedEncoding);
    }

    #[test]
    fn test_unknown_encoding() {
        let err = parse_layer_doc(r#"<layer name="a"><data encoding="hex">00</data></layer>"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedEncoding);
    }

    #[test]
    fn test_chunks_unsupported() {
        let err = parse_layer_doc(
            r#"<layer name="a"><data encoding="csv"><chunk x="0" y="0" width="3" height="2">1,2,3,4,5,6</chunk></data></layer>"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFunctionality);
    }

    #[test]
    fn test_layer_properties() {
        let layer = parse_layer_doc(
            r#"<layer name="a">
                 <properties>
                   <property name="z" value="1"/>
                   <property name="collides" value="true"/>
                 </properties>
                 <data encoding="csv">0,0,0,0,0,0</data>
               </layer>"#,
        )
        .unwrap();

        assert_eq!(layer.properties.len(), 2);
        assert_eq!(layer.properties[0].name, "collides");
        assert_eq!(layer.property("z"), Some("1"));
    }
}
