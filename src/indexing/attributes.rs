use super::projection::ProjectionError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DENOM_KEY: &str = "denom";

/// A single key/value attribute as emitted by the chain, in emission order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: &str, value: &str) -> Self {
        Attribute {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Attribute key to raw attribute value. When a key is repeated the last
/// occurrence wins. Values are not unescaped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventAttributes(BTreeMap<String, String>);

impl EventAttributes {
    pub fn parse(attributes: &[Attribute]) -> Self {
        let mut map = BTreeMap::new();
        for attribute in attributes {
            map.insert(attribute.key.clone(), attribute.value.clone());
        }
        EventAttributes(map)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `denom` attribute with its surrounding quotes removed.
    pub fn denom(&self) -> Result<String, ProjectionError> {
        let raw = self
            .get(DENOM_KEY)
            .ok_or(ProjectionError::MissingAttribute(DENOM_KEY))?;
        let denom = strip_quotes(raw);
        if denom.is_empty() {
            return Err(ProjectionError::InvalidAttribute {
                key: DENOM_KEY,
                value: raw.to_string(),
            });
        }
        Ok(denom.to_string())
    }
}

/// Typed event attributes arrive JSON-encoded, so string values carry a
/// literal pair of quotes. Anything else is returned untouched.
pub fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
