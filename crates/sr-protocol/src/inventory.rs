use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single vehicle model listed under a category.
///
/// Only `model` is interpreted. Every other field in the dataset (year,
/// price, fuel type, ...) is carried through untouched in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarModel {
    /// Display name, e.g. "RAV4 Hybrid".
    pub model: String,
    /// Opaque descriptive fields.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl CarModel {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            attributes: Map::new(),
        }
    }

    /// Attach a pass-through attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// A category together with its models, as listed by the inventory API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryListing {
    pub category: String,
    pub models: Vec<CarModel>,
}
