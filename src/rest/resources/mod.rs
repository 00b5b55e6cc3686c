//! Version-specific resource implementations.
//!
//! Resources are grouped by Ads API version; the current version is
//! re-exported here:
//!
//! ```rust,ignore
//! use twitter_ads::rest::resources::Account;      // current version
//! use twitter_ads::rest::resources::v0::Account;  // explicit version
//! ```
//!
//! [`schema_for`] looks up a property schema by resource name.

pub mod v0;

pub use v0::*;

use crate::rest::{PropertySchema, Resource};

/// Property schemas of every resource type, in alphabetical order.
pub const SCHEMAS: &[&PropertySchema] = &[
    <Account as Resource>::SCHEMA,
    <AppList as Resource>::SCHEMA,
    <Campaign as Resource>::SCHEMA,
    <FundingInstrument as Resource>::SCHEMA,
    <LineItem as Resource>::SCHEMA,
    <PromotableUser as Resource>::SCHEMA,
    <TailoredAudience as Resource>::SCHEMA,
    <Video as Resource>::SCHEMA,
];

/// Returns the property schema for a resource type name such as
/// `"LineItem"`.
///
/// # Example
///
/// ```rust
/// use twitter_ads::rest::resources::schema_for;
///
/// let schema = schema_for("Account").unwrap();
/// assert!(schema.get("timezone_switch_at").unwrap().readonly);
/// assert!(schema_for("Tweet").is_none());
/// ```
#[must_use]
pub fn schema_for(kind: &str) -> Option<&'static PropertySchema> {
    SCHEMAS.iter().copied().find(|schema| schema.resource == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_schema_is_registered_under_its_name() {
        for name in [
            "Account",
            "AppList",
            "Campaign",
            "FundingInstrument",
            "LineItem",
            "PromotableUser",
            "TailoredAudience",
            "Video",
        ] {
            assert_eq!(schema_for(name).map(|s| s.resource), Some(name));
        }
    }

    #[test]
    fn test_every_schema_declares_an_id() {
        for schema in SCHEMAS {
            let id = schema.get("id").unwrap_or_else(|| panic!("{} has no id", schema.resource));
            assert!(id.readonly, "{}.id must be read-only", schema.resource);
        }
    }
}
