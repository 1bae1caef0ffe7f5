//! `objectgroup`, `object`, `polygon` and `polyline` element parsers.

use std::io::BufRead;

use log::debug;

use crate::config::LoadOptions;
use crate::error::{Result, TmxError};
use crate::types::{Object, ObjectGroup, Shape};

use super::{parse_visible, Element, Tag, TokenReader};

pub(super) fn parse_object_group<R: BufRead>(
    reader: &mut TokenReader<R>,
    element: &Element,
    options: &LoadOptions,
) -> Result<ObjectGroup> {
    let mut group = ObjectGroup::new(element.required("name")?);

    if let Some(visible) = element.attr("visible")? {
        group.visible = parse_visible(&visible);
    }
    group.colour = element.colour("color")?;
    if let Some(opacity) = element.parsed("opacity")? {
        group.opacity = opacity;
    }

    reader.children(element, |reader, child| {
        match child.tag() {
            Tag::Object => group.objects.push(parse_object(reader, &child, options)?),
            _ => reader.skip(&child)?,
        }
        Ok(())
    })?;

    group.objects.reverse();

    debug!(
        "parsed object group '{}' ({} objects)",
        group.name,
        group.objects.len()
    );
    Ok(group)
}

fn parse_object<R: BufRead>(
    reader: &mut TokenReader<R>,
    element: &Element,
    options: &LoadOptions,
) -> Result<Object> {
    let mut object = Object::new(element.required_parsed("x")?, element.required_parsed("y")?);
    object.name = element.attr("name")?;
    object.gid = element.parsed("gid")?;
    object.height = element.parsed("height")?;
    object.width = element.parsed("width")?;

    reader.children(element, |reader, child| {
        match child.tag() {
            Tag::Polygon => object.shape = Shape::Polygon(parse_points(reader, &child, options)?),
            Tag::Polyline => {
                object.shape = Shape::Polyline(parse_points(reader, &child, options)?)
            }
            _ => reader.skip(&child)?,
        }
        Ok(())
    })?;

    Ok(object)
}

fn parse_points<R: BufRead>(
    reader: &mut TokenReader<R>,
    element: &Element,
    options: &LoadOptions,
) -> Result<Vec<[f64; 2]>> {
    let text = element.required("points")?;
    let points = parse_point_list(&text, options.max_points)
        .map_err(|message| TmxError::content(&element.name(), message))?;
    reader.skip(element)?;
    Ok(points)
}

/// Parse a `points` attribute: whitespace-separated `x,y` pairs.
fn parse_point_list(text: &str, max_points: usize) -> std::result::Result<Vec<[f64; 2]>, String> {
    let mut points = Vec::new();

    for (index, pair) in text.split_whitespace().enumerate() {
        if index == max_points {
            return Err(format!("more than {} points", max_points));
        }

        let mut coords = pair.split(',');
        let point = match (coords.next(), coords.next(), coords.next()) {
            (Some(x), Some(y), None) => x.parse::<f64>().ok().zip(y.parse::<f64>().ok()),
            _ => None,
        };
        let (x, y) = point.ok_or_else(|| format!("point #{} '{}' is not an x,y pair", index, pair))?;
        points.push([x, y]);
    }

    if points.is_empty() {
        return Err("empty point list".to_string());
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::super::{parse_reader, parse_str};
    use super::*;
    use crate::types::Colour;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;

    fn group_doc(group: &str) -> String {
        format!(
            r#"<map orientation="orthogonal" width="4" height="4" tilewidth="16" tileheight="16">{}</map>"#,
            group
        )
    }

    fn parse_group(group: &str) -> crate::Result<ObjectGroup> {
        let map = parse_str(&group_doc(group))?;
        Ok(map.object_groups.into_iter().next().expect("one group"))
    }

    #[test]
    fn test_parse_group_and_rectangle() {
        let group = parse_group(
            r##"<objectgroup name="spawns" color="#a0a0a4" opacity="0.5" visible="0">
                 <object id="1" name="player" x="32" y="48.5" width="16" height="24"/>
               </objectgroup>"##,
        )
        .unwrap();

        assert_eq!(group.name, "spawns");
        assert_eq!(group.colour, Some(Colour::rgb(0xa0, 0xa0, 0xa4)));
        assert_eq!(group.opacity, 0.5);
        assert!(!group.visible);

        let object = &group.objects[0];
        assert_eq!(object.name.as_deref(), Some("player"));
        assert_eq!((object.x, object.y), (32.0, 48.5));
        assert_eq!((object.width, object.height), (Some(16.0), Some(24.0)));
        assert_eq!(object.gid, None);
        assert_eq!(object.shape, Shape::Rectangle);
    }

    #[test]
    fn test_polygon_and_polyline() {
        let group = parse_group(
            r#"<objectgroup name="shapes">
                 <object x="0" y="0"><polygon points="0,0 16,0 16,16"/></object>
                 <object x="8" y="8"><properties><property name="a" value="b"/></properties><polyline points="0,0 4.5,-2"/></object>
               </objectgroup>"#,
        )
        .unwrap();

        assert_eq!(group.objects[0].shape, Shape::Polyline(vec![[0.0, 0.0], [4.5, -2.0]]));
        assert_eq!(
            group.objects[1].shape,
            Shape::Polygon(vec![[0.0, 0.0], [16.0, 0.0], [16.0, 16.0]])
        );
        assert_eq!(group.objects[1].shape.points().len(), 3);
    }

    #[test]
    fn test_object_with_unknown_children_is_rectangle() {
        let group = parse_group(
            r#"<objectgroup name="g"><object x="1" y="2" gid="7"><ellipse/></object></objectgroup>"#,
        )
        .unwrap();
        assert_eq!(group.objects[0].shape, Shape::Rectangle);
        assert_eq!(group.objects[0].gid, Some(7));
    }

    #[test]
    fn test_objects_in_reverse_order() {
        let group = parse_group(
            r#"<objectgroup name="g">
                 <object name="a" x="0" y="0"/>
                 <object name="b" x="0" y="0"/>
                 <object name="c" x="0" y="0"/>
               </objectgroup>"#,
        )
        .unwrap();
        let names: Vec<_> = group.objects.iter().map(|o| o.name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_object_missing_x() {
        let err = parse_group(r#"<objectgroup name="g"><object y="0"/></objectgroup>"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingAttribute);
        insta::assert_snapshot!(err.to_string(), @"missing 'x' attribute in the 'object' element");
    }

    #[test]
    fn test_polygon_missing_points() {
        let err = parse_group(
            r#"<objectgroup name="g"><object x="0" y="0"><polygon/></object></objectgroup>"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing 'points' attribute in the 'polygon' element"
        );
    }

    #[test]
    fn test_group_colour_must_be_hex() {
        let err = parse_group(r##"<objectgroup name="g" color="#+1+2+3"/>"##).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidElementContent);
    }

    #[test]
    fn test_group_missing_name() {
        let err = parse_group(r#"<objectgroup/>"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing 'name' attribute in the 'objectgroup' element"
        );
    }

    #[test]
    fn test_point_list_strict() {
        assert_eq!(
            parse_point_list(" 0,0\n 1.5,2 ", 10).unwrap(),
            vec![[0.0, 0.0], [1.5, 2.0]]
        );

        for bad in ["", "   ", ",0,0", "0,0,", "0,,0", "0,0 1", "0;0", "a,b", "0,0 1,2,3"] {
            assert!(parse_point_list(bad, 10).is_err(), "{:?}", bad);
        }
    }

    #[test]
    fn test_point_limit() {
        assert!(parse_point_list("0,0 1,1", 2).is_ok());
        assert_eq!(
            parse_point_list("0,0 1,1 2,2", 2).unwrap_err(),
            "more than 2 points"
        );

        let options = LoadOptions {
            max_points: 1,
            ..LoadOptions::default()
        };
        let err = parse_reader(
            group_doc(r#"<objectgroup name="g"><object x="0" y="0"><polyline points="0,0 1,1"/></object></objectgroup>"#)
                .as_bytes(),
            &options,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidElementContent);
    }

    #[test]
    fn test_bad_points_report_element() {
        let err = parse_group(
            r#"<objectgroup name="g"><object x="0" y="0"><polyline points="0,0,1"/></object></objectgroup>"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid content in the 'polyline' element: point #0 '0,0,1' is not an x,y pair"
        );
    }
}
