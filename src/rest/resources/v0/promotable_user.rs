//! Promotable user resource implementation.
//!
//! A promotable user is a Twitter handle an account may promote Tweets for.

use serde_json::Value;

use crate::clients::HttpMethod;
use crate::rest::{
    Context, Properties, PropertyDef, PropertySchema, PropertyValue, Resource, ResourceOperation,
    ResourcePath, Transform,
};

/// Property table for [`PromotableUser`].
pub const PROMOTABLE_USER_SCHEMA: PropertySchema = PropertySchema::new(
    "PromotableUser",
    &[
        PropertyDef::readonly("id"),
        PropertyDef::readonly("promotable_user_type"),
        PropertyDef::readonly("user_id").with_transform(Transform::Custom(string_id)),
        PropertyDef::readonly("created_at").with_transform(Transform::Time),
        PropertyDef::readonly("updated_at").with_transform(Transform::Time),
        PropertyDef::readonly("deleted"),
    ],
);

/// Normalizes a Twitter user id to a string.
///
/// User ids exceed the range JSON numbers can carry exactly in many
/// clients, so numeric ids are stored as their decimal text.
fn string_id(raw: &Value) -> Result<PropertyValue, String> {
    match raw {
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(PropertyValue::from(s.clone()))
        }
        Value::Number(n) if n.is_u64() => Ok(PropertyValue::from(n.to_string())),
        other => Err(format!("expected a numeric user id, found {other}")),
    }
}

/// A user the account may promote.
#[derive(Clone, Debug)]
pub struct PromotableUser {
    context: Context,
    properties: Properties,
}

impl Resource for PromotableUser {
    const NAME: &'static str = "PromotableUser";
    const SCHEMA: &'static PropertySchema = &PROMOTABLE_USER_SCHEMA;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Load,
            &["account_id", "id"],
            "/0/accounts/{account_id}/promotable_users/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["account_id"],
            "/0/accounts/{account_id}/promotable_users",
        ),
    ];
    const ID_PARAM: &'static str = "promotable_user_id";

    fn with_context(context: Context) -> Self {
        Self {
            context,
            properties: Properties::new(Self::SCHEMA),
        }
    }

    fn context(&self) -> &Context {
        &self.context
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }
}

impl PromotableUser {
    /// The promoted user's Twitter id.
    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.properties.string("user_id")
    }

    /// `FULL` or `RETWEETS_ONLY`.
    #[must_use]
    pub fn promotable_user_type(&self) -> Option<String> {
        self.properties.string("promotable_user_type")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_id_accepts_numbers_and_digit_strings() {
        assert_eq!(
            string_id(&json!(756201191646691328_u64)).unwrap().as_str(),
            Some("756201191646691328")
        );
        assert_eq!(string_id(&json!("2417045708")).unwrap().as_str(), Some("2417045708"));
    }

    #[test]
    fn test_string_id_rejects_other_values() {
        assert!(string_id(&json!("abc")).is_err());
        assert!(string_id(&json!(-4)).is_err());
        assert!(string_id(&json!({"id": 1})).is_err());
    }
}
