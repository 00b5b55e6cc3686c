//! App list resource implementation.

use crate::clients::HttpMethod;
use crate::rest::{
    Context, Properties, PropertyDef, PropertySchema, Resource, ResourceOperation, ResourcePath,
};

/// Property table for [`AppList`].
pub const APP_LIST_SCHEMA: PropertySchema = PropertySchema::new(
    "AppList",
    &[
        PropertyDef::readonly("id"),
        PropertyDef::readonly("name"),
        PropertyDef::readonly("apps"),
    ],
);

/// A named list of mobile apps used for targeting.
#[derive(Clone, Debug)]
pub struct AppList {
    context: Context,
    properties: Properties,
}

impl Resource for AppList {
    const NAME: &'static str = "AppList";
    const SCHEMA: &'static PropertySchema = &APP_LIST_SCHEMA;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Load,
            &["account_id", "id"],
            "/0/accounts/{account_id}/app_lists/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["account_id"],
            "/0/accounts/{account_id}/app_lists",
        ),
    ];
    const ID_PARAM: &'static str = "app_list_id";

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

impl AppList {
    /// The list name.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.properties.string("name")
    }

    /// The app store identifiers in the list.
    #[must_use]
    pub fn apps(&self) -> Vec<String> {
        self.properties
            .raw("apps")
            .and_then(|value| value.as_json())
            .and_then(|value| value.as_array())
            .map(|apps| {
                apps.iter()
                    .filter_map(|app| {
                        app.get("app_store_identifier")
                            .or(Some(app))
                            .and_then(|v| v.as_str())
                            .map(ToString::to_string)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
