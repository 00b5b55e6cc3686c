//! Account resource implementation.
//!
//! The [`Account`] is the advertiser context nearly every other Ads API
//! call hangs off. Besides `load`/`all`/`reload` it exposes the account's
//! features, its scoped timeline and accessors for the resources nested
//! under `/0/accounts/{id}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_ads::rest::{Params, Resource};
//! use twitter_ads::rest::resources::Account;
//!
//! let account = Account::load(&client.context(), "18ce54d4x5t", Params::new())?;
//! println!("{} ({})", account.name().unwrap_or_default(), account.timezone().unwrap_or_default());
//!
//! let features = account.features()?;
//! let line_items = account.line_items(None, Params::new())?;
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::clients::HttpMethod;
use crate::rest::resources::v0::{
    AppList, Campaign, FundingInstrument, LineItem, PromotableUser, TailoredAudience, Video,
};
use crate::rest::{
    build_path, Context, Lookup, Params, Properties, PropertyDef, PropertySchema, Request,
    Resource, ResourceError, ResourceOperation, ResourcePath, Transform,
};

/// Property table for [`Account`].
pub const ACCOUNT_SCHEMA: PropertySchema = PropertySchema::new(
    "Account",
    &[
        PropertyDef::readonly("id"),
        PropertyDef::readonly("name"),
        PropertyDef::readonly("salt"),
        PropertyDef::readonly("timezone"),
        PropertyDef::readonly("timezone_switch_at").with_transform(Transform::Time),
        PropertyDef::readonly("created_at").with_transform(Transform::Time),
        PropertyDef::readonly("updated_at").with_transform(Transform::Time),
        PropertyDef::readonly("deleted"),
    ],
);

const FEATURES_PATH: &str = "/0/accounts/{id}/features";
const SCOPED_TIMELINE_PATH: &str = "/0/accounts/{id}/scoped_timeline";

/// An advertising account.
///
/// All properties are read-only.
#[derive(Clone, Debug)]
pub struct Account {
    context: Context,
    properties: Properties,
}

impl Resource for Account {
    const NAME: &'static str = "Account";
    const SCHEMA: &'static PropertySchema = &ACCOUNT_SCHEMA;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Load,
            &["id"],
            "/0/accounts/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "/0/accounts"),
    ];
    const ID_PARAM: &'static str = "account_id";

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

impl Account {
    /// The account name.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.properties.string("name")
    }

    /// The account salt.
    #[must_use]
    pub fn salt(&self) -> Option<String> {
        self.properties.string("salt")
    }

    /// The account's timezone, e.g. `America/Los_Angeles`.
    #[must_use]
    pub fn timezone(&self) -> Option<String> {
        self.properties.string("timezone")
    }

    /// When the account last switched timezone.
    #[must_use]
    pub fn timezone_switch_at(&self) -> Option<DateTime<Utc>> {
        self.properties.time("timezone_switch_at")
    }

    /// When the account was created.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.properties.time("created_at")
    }

    /// When the account was last updated.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.properties.time("updated_at")
    }

    /// Whether the account is deleted.
    #[must_use]
    pub fn deleted(&self) -> Option<bool> {
        self.properties.boolean("deleted")
    }

    /// Returns the features enabled for this account.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UninitializedResource`] if the account has
    /// not been loaded, or the request failure.
    pub fn features(&self) -> Result<Value, ResourceError> {
        let path = self.member_path(FEATURES_PATH, "features")?;
        let response =
            Request::new(self.context.client(), HttpMethod::Get, path, Params::new()).perform()?;
        Ok(response.into_data())
    }

    /// Returns the most recent promotable Tweets by the given users.
    ///
    /// `user_ids` are sent comma-separated; `params` override it on
    /// collision.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UninitializedResource`] if the account has
    /// not been loaded, [`ResourceError::InvalidParams`] if `user_ids` is
    /// empty, or the request failure.
    pub fn scoped_timeline<S: AsRef<str>>(
        &self,
        user_ids: &[S],
        params: Params,
    ) -> Result<Value, ResourceError> {
        let path = self.member_path(SCOPED_TIMELINE_PATH, "scoped_timeline")?;
        if user_ids.is_empty() {
            return Err(ResourceError::InvalidParams {
                reason: "scoped_timeline needs at least one user id".to_string(),
            });
        }
        let ids = user_ids
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        let params = params.merged_over(Params::new().set("user_ids", ids));

        let response =
            Request::new(self.context.client(), HttpMethod::Get, path, params).perform()?;
        Ok(response.into_data())
    }

    /// Campaigns of this account: one by id, or a cursor over all.
    ///
    /// # Errors
    ///
    /// See [`Resource::load_resource`].
    pub fn campaigns(
        &self,
        id: Option<&str>,
        params: Params,
    ) -> Result<Lookup<Campaign>, ResourceError> {
        self.load_resource(id, params)
    }

    /// Line items of this account.
    ///
    /// # Errors
    ///
    /// See [`Resource::load_resource`].
    pub fn line_items(
        &self,
        id: Option<&str>,
        params: Params,
    ) -> Result<Lookup<LineItem>, ResourceError> {
        self.load_resource(id, params)
    }

    /// Funding instruments of this account.
    ///
    /// # Errors
    ///
    /// See [`Resource::load_resource`].
    pub fn funding_instruments(
        &self,
        id: Option<&str>,
        params: Params,
    ) -> Result<Lookup<FundingInstrument>, ResourceError> {
        self.load_resource(id, params)
    }

    /// Users this account may promote.
    ///
    /// # Errors
    ///
    /// See [`Resource::load_resource`].
    pub fn promotable_users(
        &self,
        id: Option<&str>,
        params: Params,
    ) -> Result<Lookup<PromotableUser>, ResourceError> {
        self.load_resource(id, params)
    }

    /// App lists of this account.
    ///
    /// # Errors
    ///
    /// See [`Resource::load_resource`].
    pub fn app_lists(
        &self,
        id: Option<&str>,
        params: Params,
    ) -> Result<Lookup<AppList>, ResourceError> {
        self.load_resource(id, params)
    }

    /// Tailored audiences of this account.
    ///
    /// # Errors
    ///
    /// See [`Resource::load_resource`].
    pub fn tailored_audiences(
        &self,
        id: Option<&str>,
        params: Params,
    ) -> Result<Lookup<TailoredAudience>, ResourceError> {
        self.load_resource(id, params)
    }

    /// Videos of this account.
    ///
    /// # Errors
    ///
    /// See [`Resource::load_resource`].
    pub fn videos(
        &self,
        id: Option<&str>,
        params: Params,
    ) -> Result<Lookup<Video>, ResourceError> {
        self.load_resource(id, params)
    }

    fn member_path(
        &self,
        template: &str,
        operation: &'static str,
    ) -> Result<String, ResourceError> {
        let id = self.loaded_id(operation)?;
        let mut ids = BTreeMap::new();
        ids.insert("id", urlencoding::encode(&id).into_owned());
        Ok(build_path(template, &ids))
    }
}

/// Parameters for listing accounts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountListParams {
    /// Restrict the listing to these account ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_ids: Option<Vec<String>>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Include deleted accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_deleted: Option<bool>,
}

impl TryFrom<&AccountListParams> for Params {
    type Error = ResourceError;

    fn try_from(params: &AccountListParams) -> Result<Self, Self::Error> {
        Self::from_serialize(params)
    }
}
