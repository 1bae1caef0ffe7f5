//! Named text properties attached to maps and layers.

/// A `name = value` pair from a `properties` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Value of the first property called `name`.
///
/// Lists are stored in reverse document order, so when a name is repeated
/// the one written last in the file wins.
pub(crate) fn lookup<'a>(properties: &'a [Property], name: &str) -> Option<&'a str> {
    properties
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.value.as_str())
}
