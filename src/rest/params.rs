//! Query parameters for resource requests.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::rest::errors::ResourceError;

/// An ordered map of query parameters.
///
/// # Example
///
/// ```rust
/// use twitter_ads::rest::Params;
///
/// let caller = Params::new().set("with_deleted", false).set("count", 5);
/// let merged = caller.merged_over(Params::new().set("with_deleted", true));
///
/// // caller-supplied keys win
/// assert_eq!(merged.get("with_deleted"), Some("false"));
/// assert_eq!(merged.get("count"), Some("5"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Creates an empty parameter map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds a parameter, replacing any previous value for `key`.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a parameter in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over parameters in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Layers these parameters over `defaults`. On a key collision the value
    /// from `self` is kept.
    #[must_use]
    pub fn merged_over(self, defaults: Self) -> Self {
        let mut merged = defaults.0;
        merged.extend(self.0);
        Self(merged)
    }

    /// Converts a serializable params struct into a parameter map.
    ///
    /// `null` fields are skipped, arrays become comma-separated lists and
    /// nested objects are sent as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParams`] if `params` does not
    /// serialize to a JSON object.
    pub fn from_serialize<T: Serialize>(params: &T) -> Result<Self, ResourceError> {
        let value = serde_json::to_value(params).map_err(|e| ResourceError::InvalidParams {
            reason: format!("Failed to serialize params: {e}"),
        })?;

        let Value::Object(map) = value else {
            return Err(ResourceError::InvalidParams {
                reason: format!("expected a struct or map, found {value}"),
            });
        };

        let mut query = BTreeMap::new();
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }

        Ok(Self(query))
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
