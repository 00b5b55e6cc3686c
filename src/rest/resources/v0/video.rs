//! Video resource implementation.

use chrono::{DateTime, Utc};

use crate::clients::HttpMethod;
use crate::rest::{
    Context, Properties, PropertyDef, PropertySchema, Resource, ResourceOperation, ResourcePath,
    Transform,
};

/// Property table for [`Video`].
pub const VIDEO_SCHEMA: PropertySchema = PropertySchema::new(
    "Video",
    &[
        PropertyDef::readonly("id"),
        PropertyDef::readonly("tweeted"),
        PropertyDef::readonly("ready_to_tweet"),
        PropertyDef::readonly("duration"),
        PropertyDef::readonly("reasons_not_preview_able"),
        PropertyDef::readonly("preview_url"),
        PropertyDef::readonly("created_at").with_transform(Transform::Time),
        PropertyDef::readonly("updated_at").with_transform(Transform::Time),
        PropertyDef::readonly("deleted"),
        PropertyDef::writable("title"),
        PropertyDef::writable("description"),
        PropertyDef::writable("video_media_id"),
    ],
);

/// An uploaded video.
#[derive(Clone, Debug)]
pub struct Video {
    context: Context,
    properties: Properties,
}

impl Resource for Video {
    const NAME: &'static str = "Video";
    const SCHEMA: &'static PropertySchema = &VIDEO_SCHEMA;
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Load,
            &["account_id", "id"],
            "/0/accounts/{account_id}/videos/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["account_id"],
            "/0/accounts/{account_id}/videos",
        ),
    ];
    const ID_PARAM: &'static str = "video_id";

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

impl Video {
    /// The video title.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.properties.string("title")
    }

    /// Duration in milliseconds.
    #[must_use]
    pub fn duration(&self) -> Option<i64> {
        self.properties.raw("duration").and_then(|v| v.as_i64())
    }

    /// Whether the video has finished processing.
    #[must_use]
    pub fn ready_to_tweet(&self) -> Option<bool> {
        self.properties.boolean("ready_to_tweet")
    }

    /// When the video was uploaded.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.properties.time("created_at")
    }
}
