//! `properties` and `property` element parsers.

use std::io::BufRead;

use crate::error::Result;
use crate::types::Property;

use super::{Element, Tag, TokenReader};

/// Parse a `properties` block. Properties are returned in document order;
/// the owner reverses its full list once it is complete.
pub(super) fn parse_properties<R: BufRead>(
    reader: &mut TokenReader<R>,
    element: &Element,
) -> Result<Vec<Property>> {
    let mut properties = Vec::new();

    reader.children(element, |reader, child| {
        if child.tag() == Tag::Property {
            properties.push(Property::new(
                child.required("name")?,
                child.required("value")?,
            ));
        }
        reader.skip(&child)
    })?;

    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::super::parse_str;
    use crate::ErrorKind;

    fn map_with(properties: &str) -> String {
        format!(
            r#"<map orientation="orthogonal" width="1" height="1" tilewidth="8" tileheight="8">{}</map>"#,
            properties
        )
    }

    #[test]
    fn test_property_requires_value() {
        let err = parse_str(&map_with(
            r#"<properties><property name="a" value="1"/><property name="b"/></properties>"#,
        ))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingAttribute);
        assert_eq!(err.to_string(), "missing 'value' attribute in the 'property' element");
    }

    #[test]
    fn test_property_requires_name() {
        let err = parse_str(&map_with(r#"<properties><property value="1"/></properties>"#))
            .unwrap_err();
        assert_eq!(err.to_string(), "missing 'name' attribute in the 'property' element");
    }

    #[test]
    fn test_unknown_children_ignored() {
        let map = parse_str(&map_with(
            r#"<properties><comment>hi</comment><property name="a" value="x &lt; y"/></properties>"#,
        ))
        .unwrap();
        assert_eq!(map.properties.len(), 1);
        assert_eq!(map.property("a"), Some("x < y"));
    }
}
