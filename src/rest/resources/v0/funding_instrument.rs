//! Funding instrument resource implementation.
//!
//! Funding instruments (credit cards, insertion orders, credit lines) pay for
//! campaigns. They are read-only through the API.

use chrono::{DateTime, Utc};

use crate::clients::HttpMethod;
use crate::rest::{
    Context, Properties, PropertyDef, PropertySchema, Resource, ResourceOperation, ResourcePath,
    Transform,
};

/// Property table for [`FundingInstrument`].
pub const FUNDING_INSTRUMENT_SCHEMA: PropertySchema = PropertySchema::new(
    "FundingInstrument",
    &[
        PropertyDef::readonly("id"),
        PropertyDef::readonly("name"),
        PropertyDef::readonly("type"),
        PropertyDef::readonly("description"),
        PropertyDef::readonly("currency"),
        PropertyDef::readonly("cancelled"),
        PropertyDef::readonly("able_to_fund"),
        PropertyDef::readonly("reasons_not_able_to_fund"),
        PropertyDef::readonly("credit_limit_local_micro"),
        PropertyDef::readonly("credit_remaining_local_micro"),
        PropertyDef::readonly("funded_amount_local_micro"),
        PropertyDef::readonly("io_header"),
        PropertyDef::readonly("start_time").with_transform(Transform::Time),
        PropertyDef::readonly("end_time").with_transform(Transform::Time),
        PropertyDef::readonly("created_at").with_transform(Transform::Time),
        PropertyDef::readonly("updated_at").with_transform(Transform::Time),
        PropertyDef::readonly("deleted"),
    ],
);

/// A funding instrument of an account.
#[derive(Clone, Debug)]
pub struct FundingInstrument {
    context: Context,
    properties: Properties,
}

impl Resource for FundingInstrument {
    const NAME: &'static str = "FundingInstrument";
    const SCHEMA: &'static PropertySchema = &FUNDING_INSTRUMENT_SCHEMA;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Load,
            &["account_id", "id"],
            "/0/accounts/{account_id}/funding_instruments/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["account_id"],
            "/0/accounts/{account_id}/funding_instruments",
        ),
    ];
    const ID_PARAM: &'static str = "funding_instrument_id";

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

impl FundingInstrument {
    /// The instrument's display name.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.properties.string("name")
    }

    /// The instrument type, e.g. `CREDIT_CARD`.
    #[must_use]
    pub fn instrument_type(&self) -> Option<String> {
        self.properties.string("type")
    }

    /// ISO 4217 currency code.
    #[must_use]
    pub fn currency(&self) -> Option<String> {
        self.properties.string("currency")
    }

    /// Whether the instrument can currently fund campaigns.
    #[must_use]
    pub fn able_to_fund(&self) -> Option<bool> {
        self.properties.boolean("able_to_fund")
    }

    /// When the instrument becomes usable.
    #[must_use]
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.properties.time("start_time")
    }

    /// When the instrument expires.
    #[must_use]
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.properties.time("end_time")
    }
}
