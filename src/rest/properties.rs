//! Schema-bound property storage.
//!
//! [`Properties`] holds the transformed values of one resource instance.
//! All reads and writes are checked against the instance's
//! [`PropertySchema`]: undeclared names are rejected, read-only properties
//! cannot be set by callers, and every stored value has been passed through
//! its declared [`Transform`](crate::rest::Transform).
//!
//! The only way to write read-only properties is
//! [`Resource::from_response`](crate::rest::Resource::from_response), which
//! decodes a server object into the bag.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::rest::errors::ResourceError;
use crate::rest::schema::{PropertySchema, PropertyValue, Transform};

/// Transformed property values of one resource instance.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use twitter_ads::rest::{Properties, PropertyDef, PropertySchema, ResourceError};
///
/// const SCHEMA: PropertySchema = PropertySchema::new(
///     "Widget",
///     &[PropertyDef::readonly("id"), PropertyDef::writable("name")],
/// );
///
/// let mut props = Properties::new(&SCHEMA);
/// props.set("name", "launch").unwrap();
///
/// assert_eq!(props.get("name").unwrap().unwrap().as_str(), Some("launch"));
/// assert!(props.get("id").unwrap().is_none());
/// assert!(matches!(props.set("id", "x"), Err(ResourceError::ImmutableProperty { .. })));
/// assert!(matches!(props.get("color"), Err(ResourceError::UnknownProperty { .. })));
/// assert_eq!(props.to_json(), json!({"name": "launch"}));
/// ```
#[derive(Clone, Debug)]
pub struct Properties {
    schema: &'static PropertySchema,
    values: BTreeMap<&'static str, PropertyValue>,
}

impl Properties {
    /// Creates an empty bag bound to `schema`.
    #[must_use]
    pub const fn new(schema: &'static PropertySchema) -> Self {
        Self {
            schema,
            values: BTreeMap::new(),
        }
    }

    /// Returns the schema this bag is bound to.
    #[must_use]
    pub const fn schema(&self) -> &'static PropertySchema {
        self.schema
    }

    /// Reads a property.
    ///
    /// Returns the stored value, or the schema default when the property
    /// was never populated, or `None` when there is neither.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownProperty`] if the schema does not
    /// declare `name`.
    pub fn get(&self, name: &str) -> Result<Option<PropertyValue>, ResourceError> {
        let def = self.schema.get(name).ok_or_else(|| self.unknown(name))?;
        Ok(self
            .values
            .get(def.name)
            .cloned()
            .or_else(|| def.default.map(|d| d.to_property_value())))
    }

    /// Returns the stored value without applying defaults.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    /// Returns `true` if the property holds a populated value.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Sets a writable property.
    ///
    /// JSON values are passed through the property's transform, so a string
    /// assigned to a time property is stored as a timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownProperty`] for undeclared names,
    /// [`ResourceError::ImmutableProperty`] for read-only ones and
    /// [`ResourceError::InvalidProperty`] if the transform rejects the value
    /// or a timestamp is assigned to a property without a time transform.
    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), ResourceError> {
        let def = self.schema.get(name).ok_or_else(|| self.unknown(name))?;
        if def.readonly {
            return Err(ResourceError::ImmutableProperty {
                resource: self.schema.resource,
                property: name.to_string(),
            });
        }

        let invalid = |reason: String| ResourceError::InvalidProperty {
            resource: self.schema.resource,
            property: name.to_string(),
            reason,
        };
        let value = match value.into() {
            PropertyValue::Json(raw) if !def.transform.is_identity() => {
                def.transform.apply(&raw).map_err(invalid)?
            }
            PropertyValue::Time(_) if !matches!(def.transform, Transform::Time) => {
                return Err(invalid("not a time property".to_string()));
            }
            value => value,
        };

        self.values.insert(def.name, value);
        Ok(())
    }

    /// Decodes a server object into the bag.
    ///
    /// Fields the schema declares are transformed and stored; all others are
    /// ignored. Either every declared field present in `object` is stored or,
    /// if any transform fails, none is.
    pub(crate) fn populate(&mut self, object: &Map<String, Value>) -> Result<(), ResourceError> {
        let mut staged = Vec::with_capacity(object.len());
        for def in self.schema.properties {
            if let Some(raw) = object.get(def.name) {
                let value =
                    def.transform
                        .apply(raw)
                        .map_err(|reason| ResourceError::InvalidProperty {
                            resource: self.schema.resource,
                            property: def.name.to_string(),
                            reason,
                        })?;
                staged.push((def.name, value));
            }
        }
        self.values.extend(staged);
        Ok(())
    }

    /// Renders populated properties as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(name, value)| ((*name).to_string(), value.to_json()))
                .collect(),
        )
    }

    /// String or numeric property rendered as a string.
    pub(crate) fn string(&self, name: &str) -> Option<String> {
        match self.get(name).ok()?? {
            PropertyValue::Json(Value::String(s)) => Some(s),
            PropertyValue::Json(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    pub(crate) fn time(&self, name: &str) -> Option<DateTime<Utc>> {
        self.get(name).ok()??.as_time()
    }

    pub(crate) fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name).ok()??.as_bool()
    }

    fn unknown(&self, name: &str) -> ResourceError {
        ResourceError::UnknownProperty {
            resource: self.schema.resource,
            property: name.to_string(),
        }
    }
}
