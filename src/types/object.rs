//! Object groups and the objects placed in them.

use super::Colour;

/// A layer of free-standing objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectGroup {
    pub name: String,
    pub visible: bool,
    pub opacity: f32,

    /// Display colour of the group's objects.
    pub colour: Option<Colour>,

    pub objects: Vec<Object>,
}

impl ObjectGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
            opacity: 1.0,
            colour: None,
            objects: Vec::new(),
        }
    }
}

/// A single placed object.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,

    /// Tile drawn for this object, when it is a tile object.
    pub gid: Option<u32>,

    pub width: Option<f64>,
    pub height: Option<f64>,
    pub shape: Shape,
}

impl Object {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            name: None,
            x,
            y,
            gid: None,
            width: None,
            height: None,
            shape: Shape::Rectangle,
        }
    }
}

/// Outline of an object. Points are relative to the object's position.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Shape {
    #[default]
    Rectangle,
    Polygon(Vec<[f64; 2]>),
    Polyline(Vec<[f64; 2]>),
}

impl Shape {
    /// The outline points, empty for rectangles.
    pub fn points(&self) -> &[[f64; 2]] {
        match self {
            Shape::Rectangle => &[],
            Shape::Polygon(points) | Shape::Polyline(points) => points,
        }
    }
}
