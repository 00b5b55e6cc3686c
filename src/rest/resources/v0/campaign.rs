//! Campaign resource implementation.
//!
//! Campaigns are nested under an account:
//! `/0/accounts/{account_id}/campaigns/{id}`. Load them through
//! [`Account::campaigns`](crate::rest::resources::Account::campaigns) or
//! with a context that already carries `account_id`.
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_ads::rest::{Params, Resource};
//! use twitter_ads::rest::resources::{Campaign, CampaignListParams};
//!
//! let params = CampaignListParams { count: Some(50), ..Default::default() };
//! let campaigns = account.campaigns(None, Params::try_from(&params)?)?;
//! for campaign in campaigns.collection().unwrap() {
//!     let campaign = campaign?;
//!     println!("{:?} paused={:?}", campaign.name(), campaign.paused());
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clients::HttpMethod;
use crate::rest::{
    Context, DefaultValue, Params, Properties, PropertyDef, PropertySchema, Resource,
    ResourceError, ResourceOperation, ResourcePath, Transform,
};

/// Property table for [`Campaign`].
pub const CAMPAIGN_SCHEMA: PropertySchema = PropertySchema::new(
    "Campaign",
    &[
        PropertyDef::readonly("id"),
        PropertyDef::readonly("reasons_not_servable"),
        PropertyDef::readonly("servable"),
        PropertyDef::readonly("deleted").with_default(DefaultValue::Bool(false)),
        PropertyDef::readonly("created_at").with_transform(Transform::Time),
        PropertyDef::readonly("updated_at").with_transform(Transform::Time),
        PropertyDef::writable("name"),
        PropertyDef::writable("funding_instrument_id"),
        PropertyDef::writable("start_time").with_transform(Transform::Time),
        PropertyDef::writable("end_time").with_transform(Transform::Time),
        PropertyDef::writable("paused").with_default(DefaultValue::Bool(false)),
        PropertyDef::writable("currency"),
        PropertyDef::writable("standard_delivery"),
        PropertyDef::writable("daily_budget_amount_local_micro"),
        PropertyDef::writable("total_budget_amount_local_micro"),
    ],
);

/// An advertising campaign.
#[derive(Clone, Debug)]
pub struct Campaign {
    context: Context,
    properties: Properties,
}

impl Resource for Campaign {
    const NAME: &'static str = "Campaign";
    const SCHEMA: &'static PropertySchema = &CAMPAIGN_SCHEMA;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Load,
            &["account_id", "id"],
            "/0/accounts/{account_id}/campaigns/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["account_id"],
            "/0/accounts/{account_id}/campaigns",
        ),
    ];
    const ID_PARAM: &'static str = "campaign_id";

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

impl Campaign {
    /// The campaign name.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.properties.string("name")
    }

    /// The funding instrument paying for the campaign.
    #[must_use]
    pub fn funding_instrument_id(&self) -> Option<String> {
        self.properties.string("funding_instrument_id")
    }

    /// When the campaign starts serving.
    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.properties.time("start_time")
    }

    /// When the campaign stops serving.
    #[must_use]
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.properties.time("end_time")
    }

    /// Whether the campaign is paused. Defaults to `false`.
    #[must_use]
    pub fn paused(&self) -> Option<bool> {
        self.properties.boolean("paused")
    }

    /// Whether the campaign can currently serve.
    #[must_use]
    pub fn servable(&self) -> Option<bool> {
        self.properties.boolean("servable")
    }

    /// When the campaign was created.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.properties.time("created_at")
    }
}

/// Parameters for listing campaigns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CampaignListParams {
    /// Restrict the listing to these campaign ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_ids: Option<Vec<String>>,
    /// Restrict the listing to campaigns paid for by these instruments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_instrument_ids: Option<Vec<String>>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Include deleted campaigns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_deleted: Option<bool>,
    /// Sort order, e.g. `created_at-desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

impl TryFrom<&CampaignListParams> for Params {
    type Error = ResourceError;

    fn try_from(params: &CampaignListParams) -> Result<Self, Self::Error> {
        Self::from_serialize(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    #[test]
    fn test_campaign_paths_require_account() {
        assert!(get_path(Campaign::PATHS, ResourceOperation::All, &[]).is_none());

        let path = get_path(Campaign::PATHS, ResourceOperation::Load, &["account_id", "id"]);
        assert_eq!(
            path.unwrap().template,
            "/0/accounts/{account_id}/campaigns/{id}"
        );
    }

    #[test]
    fn test_campaign_schema_flags() {
        assert!(CAMPAIGN_SCHEMA.get("servable").unwrap().readonly);
        assert!(!CAMPAIGN_SCHEMA.get("paused").unwrap().readonly);
        assert!(matches!(
            CAMPAIGN_SCHEMA.get("start_time").unwrap().transform,
            Transform::Time
        ));
    }

    #[test]
    fn test_list_params_conversion() {
        let params = Params::try_from(&CampaignListParams {
            funding_instrument_ids: Some(vec!["fi1".to_string()]),
            sort_by: Some("created_at-desc".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(params.get("funding_instrument_ids"), Some("fi1"));
        assert_eq!(params.get("sort_by"), Some("created_at-desc"));
        assert_eq!(params.len(), 2);
    }
}
