//! Tailored audience resource implementation.
//!
//! Tailored audiences are advertiser-supplied user lists (emails, device ids,
//! Twitter handles) used for targeting.

use chrono::{DateTime, Utc};

use crate::clients::HttpMethod;
use crate::rest::{
    Context, Properties, PropertyDef, PropertySchema, Resource, ResourceOperation, ResourcePath,
    Transform,
};

/// Property table for [`TailoredAudience`].
pub const TAILORED_AUDIENCE_SCHEMA: PropertySchema = PropertySchema::new(
    "TailoredAudience",
    &[
        PropertyDef::readonly("id"),
        PropertyDef::readonly("created_at").with_transform(Transform::Time),
        PropertyDef::readonly("updated_at").with_transform(Transform::Time),
        PropertyDef::readonly("deleted"),
        PropertyDef::readonly("audience_size"),
        PropertyDef::readonly("audience_type"),
        PropertyDef::readonly("metadata"),
        PropertyDef::readonly("partner_source"),
        PropertyDef::readonly("reasons_not_targetable"),
        PropertyDef::readonly("targetable"),
        PropertyDef::readonly("targetable_types"),
        PropertyDef::writable("name"),
        PropertyDef::writable("list_type"),
    ],
);

/// An advertiser-supplied audience.
#[derive(Clone, Debug)]
pub struct TailoredAudience {
    context: Context,
    properties: Properties,
}

impl Resource for TailoredAudience {
    const NAME: &'static str = "TailoredAudience";
    const SCHEMA: &'static PropertySchema = &TAILORED_AUDIENCE_SCHEMA;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Load,
            &["account_id", "id"],
            "/0/accounts/{account_id}/tailored_audiences/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["account_id"],
            "/0/accounts/{account_id}/tailored_audiences",
        ),
    ];
    const ID_PARAM: &'static str = "tailored_audience_id";

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

impl TailoredAudience {
    /// The audience name.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.properties.string("name")
    }

    /// Matched audience size; the API reports a bucketed string.
    #[must_use]
    pub fn audience_size(&self) -> Option<String> {
        self.properties.string("audience_size")
    }

    /// Whether the audience can be targeted yet.
    #[must_use]
    pub fn targetable(&self) -> Option<bool> {
        self.properties.boolean("targetable")
    }

    /// When the audience was created.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.properties.time("created_at")
    }
}
