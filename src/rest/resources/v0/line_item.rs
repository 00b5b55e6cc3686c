//! Line item resource implementation.
//!
//! Line items sit below campaigns and carry bidding and placement settings.
//! They are listed per account at `/0/accounts/{account_id}/line_items`.

use chrono::{DateTime, Utc};

use crate::clients::HttpMethod;
use crate::rest::{
    Context, DefaultValue, Properties, PropertyDef, PropertySchema, Resource, ResourceOperation,
    ResourcePath, Transform,
};

/// Property table for [`LineItem`].
pub const LINE_ITEM_SCHEMA: PropertySchema = PropertySchema::new(
    "LineItem",
    &[
        PropertyDef::readonly("id"),
        PropertyDef::readonly("deleted").with_default(DefaultValue::Bool(false)),
        PropertyDef::readonly("created_at").with_transform(Transform::Time),
        PropertyDef::readonly("updated_at").with_transform(Transform::Time),
        PropertyDef::writable("campaign_id"),
        PropertyDef::writable("name"),
        PropertyDef::writable("advertiser_domain"),
        PropertyDef::writable("automatically_select_bid"),
        PropertyDef::writable("bid_amount_local_micro"),
        PropertyDef::writable("bid_type"),
        PropertyDef::writable("categories"),
        PropertyDef::writable("charge_by"),
        PropertyDef::writable("include_sentiment"),
        PropertyDef::writable("objective"),
        PropertyDef::writable("optimization"),
        PropertyDef::writable("paused").with_default(DefaultValue::Bool(false)),
        PropertyDef::writable("placements"),
        PropertyDef::writable("primary_web_event_tag"),
        PropertyDef::writable("product_type"),
        PropertyDef::writable("total_budget_amount_local_micro"),
    ],
);

/// A line item of a campaign.
#[derive(Clone, Debug)]
pub struct LineItem {
    context: Context,
    properties: Properties,
}

impl Resource for LineItem {
    const NAME: &'static str = "LineItem";
    const SCHEMA: &'static PropertySchema = &LINE_ITEM_SCHEMA;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Load,
            &["account_id", "id"],
            "/0/accounts/{account_id}/line_items/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["account_id"],
            "/0/accounts/{account_id}/line_items",
        ),
    ];
    const ID_PARAM: &'static str = "line_item_id";

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

impl LineItem {
    /// The owning campaign.
    #[must_use]
    pub fn campaign_id(&self) -> Option<String> {
        self.properties.string("campaign_id")
    }

    /// The line item name.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.properties.string("name")
    }

    /// The product type, e.g. `PROMOTED_TWEETS`.
    #[must_use]
    pub fn product_type(&self) -> Option<String> {
        self.properties.string("product_type")
    }

    /// The campaign objective, e.g. `WEBSITE_CLICKS`.
    #[must_use]
    pub fn objective(&self) -> Option<String> {
        self.properties.string("objective")
    }

    /// Whether the line item is paused. Defaults to `false`.
    #[must_use]
    pub fn paused(&self) -> Option<bool> {
        self.properties.boolean("paused")
    }

    /// When the line item was last updated.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.properties.time("updated_at")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_paths() {
        assert!(LineItem::PATHS
            .iter()
            .all(|p| p.template.starts_with("/0/accounts/{account_id}/line_items")));
        assert_eq!(LineItem::ID_PARAM, "line_item_id");
    }
}
