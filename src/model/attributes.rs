//! Attribute maps and style tables

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::Value;

/// Attribute name to value, in insertion order
pub type AttrMap = IndexMap<String, Value>;

/// Named, reusable attribute bundles, referenced through `ref`
pub type StyleTable = IndexMap<String, AttrMap>;

/// Attribute key that expands named styles
pub const STYLE_REF_KEY: &str = "ref";
/// Attribute key that wraps the label in emphasis tags
pub const TEXT_STYLE_KEY: &str = "textstyle";
/// Attribute key holding the label text
pub const LABEL_KEY: &str = "label";

/// An attribute bucket: either a key/value map or a bare style reference.
///
/// The bare form (`"node": "box_style"`) is shorthand for
/// `{"ref": "box_style"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attributes {
    Map(AttrMap),
    Styles(Value),
}

impl Default for Attributes {
    fn default() -> Self {
        Attributes::Map(AttrMap::new())
    }
}

impl Attributes {
    pub fn is_empty(&self) -> bool {
        match self {
            Attributes::Map(map) => map.is_empty(),
            Attributes::Styles(styles) => styles.names().is_empty(),
        }
    }

    /// Mutable access to the map form, converting a bare style reference
    /// into `{"ref": ...}` first.
    pub fn as_map_mut(&mut self) -> &mut AttrMap {
        if let Attributes::Styles(styles) = self {
            let mut map = AttrMap::new();
            map.insert(STYLE_REF_KEY.to_string(), styles.clone());
            *self = Attributes::Map(map);
        }

        match self {
            Attributes::Map(map) => map,
            Attributes::Styles(_) => unreachable!("converted to a map above"),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.as_map_mut().insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Attributes::Map(map) => map.get(key),
            Attributes::Styles(styles) if key == STYLE_REF_KEY => Some(styles),
            Attributes::Styles(_) => None,
        }
    }
}

impl From<AttrMap> for Attributes {
    fn from(map: AttrMap) -> Self {
        Attributes::Map(map)
    }
}

/// Build an [`AttrMap`] from `key => value` pairs.
///
/// ```
/// use jsongraph::attrs;
///
/// let map = attrs! { "color" => "red", "penwidth" => 2 };
/// assert_eq!(map.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::model::AttrMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::model::AttrMap::new();
        $(map.insert($key.to_string(), $crate::model::Value::from($value));)+
        map
    }};
}
