//! Declarative property schemas.
//!
//! Every resource type declares a [`PropertySchema`]: a `const` table of
//! [`PropertyDef`] entries describing how a field of the wire JSON object
//! maps onto the local entity. A definition says whether the field is
//! read-only, which [`Transform`] converts its raw JSON value, and an
//! optional [`DefaultValue`] reported when the field is absent.
//!
//! Schemas are plain data. They are built at compile time and looked up by
//! field name; there is no runtime registration.
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::rest::{DefaultValue, PropertyDef, PropertySchema, Transform};
//!
//! const WIDGET: PropertySchema = PropertySchema::new(
//!     "Widget",
//!     &[
//!         PropertyDef::readonly("id"),
//!         PropertyDef::readonly("created_at").with_transform(Transform::Time),
//!         PropertyDef::writable("paused").with_default(DefaultValue::Bool(false)),
//!     ],
//! );
//!
//! assert!(WIDGET.get("created_at").unwrap().readonly);
//! assert!(WIDGET.get("unknown").is_none());
//! assert_eq!(WIDGET.names().collect::<Vec<_>>(), vec!["id", "created_at", "paused"]);
//! ```

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde_json::Value;

/// Converts a raw wire value into its canonical local representation.
#[derive(Clone, Copy, Debug)]
pub enum Transform {
    /// Store the JSON value unchanged.
    Identity,
    /// Parse a timestamp from an ISO-8601 string, epoch seconds, or a
    /// numeric string holding epoch seconds.
    Time,
    /// A resource-specific conversion. The error string describes why the
    /// value was rejected.
    Custom(fn(&Value) -> Result<PropertyValue, String>),
}

impl Transform {
    /// Applies the transform to a raw value.
    ///
    /// `null` passes through untransformed for every variant.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if the value cannot be converted.
    pub fn apply(&self, raw: &Value) -> Result<PropertyValue, String> {
        if raw.is_null() {
            return Ok(PropertyValue::Json(Value::Null));
        }
        match self {
            Self::Identity => Ok(PropertyValue::Json(raw.clone())),
            Self::Time => parse_time(raw).map(PropertyValue::Time),
            Self::Custom(convert) => convert(raw),
        }
    }

    /// Returns `true` for [`Transform::Identity`].
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }
}

/// Parses a wire timestamp.
fn parse_time(raw: &Value) -> Result<DateTime<Utc>, String> {
    match raw {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Ok(dt.with_timezone(&Utc));
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
                return Ok(Utc.from_utc_datetime(&naive));
            }
            s.parse::<i64>()
                .map_err(|_| format!("'{s}' is not a recognized timestamp"))
                .and_then(from_epoch)
        }
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| format!("{n} is not an integer epoch timestamp"))
            .and_then(from_epoch),
        other => Err(format!("expected a timestamp, found {other}")),
    }
}

fn from_epoch(seconds: i64) -> Result<DateTime<Utc>, String> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| format!("{seconds} is outside the representable time range"))
}

/// A default reported for a property the server did not send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultValue {
    /// A boolean default.
    Bool(bool),
    /// An integer default.
    Int(i64),
    /// A string default.
    Str(&'static str),
}

impl DefaultValue {
    /// Returns the default as a property value.
    #[must_use]
    pub fn to_property_value(&self) -> PropertyValue {
        match *self {
            Self::Bool(b) => PropertyValue::Json(Value::Bool(b)),
            Self::Int(i) => PropertyValue::Json(Value::from(i)),
            Self::Str(s) => PropertyValue::Json(Value::from(s)),
        }
    }
}

/// Metadata for a single declared property.
#[derive(Clone, Copy, Debug)]
pub struct PropertyDef {
    /// The wire field name.
    pub name: &'static str,
    /// Whether callers are barred from setting the property.
    pub readonly: bool,
    /// How raw values are converted.
    pub transform: Transform,
    /// Value reported when the property was never populated.
    pub default: Option<DefaultValue>,
}

impl PropertyDef {
    /// Declares a read-only property.
    #[must_use]
    pub const fn readonly(name: &'static str) -> Self {
        Self {
            name,
            readonly: true,
            transform: Transform::Identity,
            default: None,
        }
    }

    /// Declares a property callers may set.
    #[must_use]
    pub const fn writable(name: &'static str) -> Self {
        Self {
            name,
            readonly: false,
            transform: Transform::Identity,
            default: None,
        }
    }

    /// Sets the transform applied to raw values.
    #[must_use]
    pub const fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// The property table of one resource type.
#[derive(Clone, Copy, Debug)]
pub struct PropertySchema {
    /// The resource type name, used in error messages.
    pub resource: &'static str,
    /// Declared properties, in declaration order.
    pub properties: &'static [PropertyDef],
}

impl PropertySchema {
    /// Creates a schema.
    #[must_use]
    pub const fn new(resource: &'static str, properties: &'static [PropertyDef]) -> Self {
        Self {
            resource,
            properties,
        }
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static PropertyDef> {
        self.properties.iter().find(|def| def.name == name)
    }

    /// Returns `true` if the schema declares `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over declared property names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.properties.iter().map(|def| def.name)
    }

    /// Returns the number of declared properties.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no properties are declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// A transformed property value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// A JSON value stored as received.
    Json(Value),
    /// A parsed timestamp.
    Time(DateTime<Utc>),
}

impl PropertyValue {
    /// Returns the value as a string slice, if it is a JSON string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Json(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a boolean, if it is a JSON boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Json(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an integer, if it is a JSON integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Json(value) => value.as_i64(),
            Self::Time(_) => None,
        }
    }

    /// Returns the timestamp, if the value is one.
    #[must_use]
    pub const fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Time(t) => Some(*t),
            Self::Json(_) => None,
        }
    }

    /// Returns the raw JSON value, if the value is not a timestamp.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Time(_) => None,
        }
    }

    /// Returns `true` for JSON `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Json(Value::Null))
    }

    /// Renders the value as JSON; timestamps become RFC 3339 strings.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Json(value) => value.clone(),
            Self::Time(t) => Value::String(t.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Json(Value::String(value))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Json(Value::Bool(value))
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Json(Value::from(value))
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PropertySchema>();
    assert_send_sync::<PropertyValue>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn upper(raw: &Value) -> Result<PropertyValue, String> {
        raw.as_str()
            .map(|s| PropertyValue::from(s.to_uppercase()))
            .ok_or_else(|| "expected a string".to_string())
    }

    const SCHEMA: PropertySchema = PropertySchema::new(
        "Widget",
        &[
            PropertyDef::readonly("id"),
            PropertyDef::readonly("created_at").with_transform(Transform::Time),
            PropertyDef::writable("code").with_transform(Transform::Custom(upper)),
            PropertyDef::writable("paused").with_default(DefaultValue::Bool(false)),
        ],
    );

    #[test]
    fn test_schema_lookup() {
        assert_eq!(SCHEMA.len(), 4);
        assert!(SCHEMA.contains("paused"));
        assert!(!SCHEMA.contains("name"));
        assert!(!SCHEMA.get("code").unwrap().readonly);
        assert_eq!(
            SCHEMA.get("paused").unwrap().default,
            Some(DefaultValue::Bool(false))
        );
    }

    #[test]
    fn test_time_transform_accepts_iso_and_epoch_forms() {
        let expected = Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap();

        for raw in [
            json!("2015-06-01T00:00:00Z"),
            json!("2015-06-01T02:00:00+02:00"),
            json!("2015-06-01T00:00:00"),
            json!(1_433_116_800),
            json!("1433116800"),
        ] {
            assert_eq!(
                Transform::Time.apply(&raw).unwrap(),
                PropertyValue::Time(expected),
                "failed for {raw}"
            );
        }
    }

    #[test]
    fn test_time_transform_rejects_garbage() {
        assert!(Transform::Time.apply(&json!("yesterday")).is_err());
        assert!(Transform::Time.apply(&json!(true)).is_err());
        assert!(Transform::Time.apply(&json!(1.5)).is_err());
    }

    #[test]
    fn test_null_passes_through_every_transform() {
        for transform in [Transform::Identity, Transform::Time, Transform::Custom(upper)] {
            assert!(transform.apply(&Value::Null).unwrap().is_null());
        }
    }

    #[test]
    fn test_custom_transform() {
        let def = SCHEMA.get("code").unwrap();
        assert_eq!(def.transform.apply(&json!("abc")).unwrap().as_str(), Some("ABC"));
        assert_eq!(
            def.transform.apply(&json!(1)).unwrap_err(),
            "expected a string"
        );
    }

    #[test]
    fn test_time_renders_as_rfc3339() {
        let t = Utc.with_ymd_and_hms(2015, 6, 1, 12, 30, 0).unwrap();
        assert_eq!(PropertyValue::Time(t).to_json(), json!("2015-06-01T12:30:00Z"));
    }

    #[test]
    fn test_default_value_conversion() {
        assert_eq!(DefaultValue::Bool(true).to_property_value().as_bool(), Some(true));
        assert_eq!(DefaultValue::Int(7).to_property_value().as_i64(), Some(7));
        assert_eq!(DefaultValue::Str("x").to_property_value().as_str(), Some("x"));
    }
}
