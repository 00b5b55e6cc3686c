//! The resource trait.
//!
//! This module defines [`Resource`], the contract every Ads API entity
//! implements. A type supplies its name, its [`PropertySchema`], its path
//! templates and the name its id takes when it scopes child resources; the
//! trait provides the operations:
//!
//! - [`load`](Resource::load): fetch one entity by id
//! - [`all`](Resource::all): a lazy [`Cursor`] over a collection
//! - [`reload`](Resource::reload): refresh a loaded instance in place
//! - [`from_response`](Resource::from_response): decode a server object
//! - [`load_resource`](Resource::load_resource): the parent-to-child
//!   dispatch used by sub-resource accessors
//!
//! # Implementing a Resource
//!
//! ```rust
//! use twitter_ads::rest::{
//!     Context, Properties, PropertyDef, PropertySchema, Resource, ResourceOperation,
//!     ResourcePath,
//! };
//! use twitter_ads::HttpMethod;
//!
//! const GADGET_SCHEMA: PropertySchema = PropertySchema::new(
//!     "Gadget",
//!     &[PropertyDef::readonly("id"), PropertyDef::writable("name")],
//! );
//!
//! #[derive(Debug)]
//! struct Gadget {
//!     context: Context,
//!     properties: Properties,
//! }
//!
//! impl Resource for Gadget {
//!     const NAME: &'static str = "Gadget";
//!     const SCHEMA: &'static PropertySchema = &GADGET_SCHEMA;
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Load, &["account_id", "id"],
//!             "/0/accounts/{account_id}/gadgets/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &["account_id"],
//!             "/0/accounts/{account_id}/gadgets"),
//!     ];
//!     const ID_PARAM: &'static str = "gadget_id";
//!
//!     fn with_context(context: Context) -> Self {
//!         Self { context, properties: Properties::new(Self::SCHEMA) }
//!     }
//!     fn context(&self) -> &Context { &self.context }
//!     fn properties(&self) -> &Properties { &self.properties }
//!     fn properties_mut(&mut self) -> &mut Properties { &mut self.properties }
//! }
//! ```

use std::collections::BTreeMap;

use serde_json::Value;

use crate::clients::HttpMethod;
use crate::rest::context::Context;
use crate::rest::cursor::Cursor;
use crate::rest::errors::ResourceError;
use crate::rest::params::Params;
use crate::rest::path::{build_path, get_path, has_placeholders, ResourceOperation, ResourcePath};
use crate::rest::properties::Properties;
use crate::rest::request::Request;
use crate::rest::schema::{PropertySchema, PropertyValue};

/// Parameter merged into every [`reload`](Resource::reload).
const RELOAD_DEFAULTS: (&str, bool) = ("with_deleted", true);

/// A remote Ads API entity mapped onto local, schema-checked properties.
///
/// Instances start empty, bound to a [`Context`], and are populated only by
/// [`from_response`](Self::from_response). There is no write-back: nothing
/// set locally is sent to the server.
pub trait Resource: Sized {
    /// The resource type name (e.g., "Account").
    const NAME: &'static str;

    /// The declared properties.
    const SCHEMA: &'static PropertySchema;

    /// Path templates for [`ResourceOperation::Load`] and
    /// [`ResourceOperation::All`].
    const PATHS: &'static [ResourcePath];

    /// The path parameter name under which this resource's id is passed to
    /// its children (e.g., `account_id`).
    const ID_PARAM: &'static str;

    /// Creates an empty instance bound to `context`.
    fn with_context(context: Context) -> Self;

    /// Returns the context the instance was created in.
    fn context(&self) -> &Context;

    /// Returns the property bag.
    fn properties(&self) -> &Properties;

    /// Returns the property bag mutably.
    fn properties_mut(&mut self) -> &mut Properties;

    /// Returns the `id` property, if the instance has been populated.
    fn id(&self) -> Option<String> {
        self.properties().string("id")
    }

    /// Reads a declared property.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownProperty`] for undeclared names.
    fn get(&self, name: &str) -> Result<Option<PropertyValue>, ResourceError> {
        self.properties().get(name)
    }

    /// Sets a writable property locally.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownProperty`],
    /// [`ResourceError::ImmutableProperty`] or
    /// [`ResourceError::InvalidProperty`].
    fn set(&mut self, name: &str, value: impl Into<PropertyValue>) -> Result<(), ResourceError> {
        self.properties_mut().set(name, value)
    }

    /// Populates the instance from a server object.
    ///
    /// Declared fields present in `value` are transformed and stored; other
    /// fields are ignored. On error the instance is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if `value` is not a JSON object and
    /// [`ResourceError::InvalidProperty`] if a transform rejects a field.
    fn from_response(&mut self, value: &Value) -> Result<(), ResourceError> {
        let Value::Object(object) = value else {
            return Err(ResourceError::Decode {
                resource: Self::NAME,
                message: format!("expected an object, found {value}"),
            });
        };
        self.properties_mut().populate(object)
    }

    /// Creates an instance in `context` and populates it from `value`.
    ///
    /// # Errors
    ///
    /// See [`from_response`](Self::from_response).
    fn from_value(context: &Context, value: &Value) -> Result<Self, ResourceError> {
        let mut resource = Self::with_context(context.clone());
        resource.from_response(value)?;
        Ok(resource)
    }

    /// Loads a single entity by id.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotFound`] if the server answers 404
    /// - [`ResourceError::PathResolutionFailed`] if `context` lacks a
    ///   required parent id
    /// - [`ResourceError::Http`] for other failures
    fn load(context: &Context, id: &str, params: Params) -> Result<Self, ResourceError> {
        let (method, path) = resolve_path::<Self>(ResourceOperation::Load, context, Some(id))?;
        let response = Request::new(context.client(), method, path, params)
            .perform()
            .map_err(|e| ResourceError::from_load_error(e, Self::NAME, id))?;

        let data = response.data().ok_or_else(missing_data::<Self>)?;
        Self::from_value(context, data)
    }

    /// Returns a cursor over the collection. No request is made until the
    /// cursor is first advanced.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if `context` lacks a
    /// required parent id.
    fn all(context: &Context, params: Params) -> Result<Cursor<Self>, ResourceError> {
        let (method, path) = resolve_path::<Self>(ResourceOperation::All, context, None)?;
        let request = Request::new(context.client(), method, path, params);
        Ok(Cursor::new(context.clone(), request))
    }

    /// Re-fetches the instance by id and overwrites it in place.
    ///
    /// `with_deleted=true` is sent unless `params` sets it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UninitializedResource`], without making a
    /// request, if the instance has no id. Otherwise as for
    /// [`load`](Self::load).
    fn reload(&mut self, params: Params) -> Result<(), ResourceError> {
        let id = self.loaded_id("reload")?;
        let (key, value) = RELOAD_DEFAULTS;
        let params = params.merged_over(Params::new().set(key, value));

        let (method, path) = resolve_path::<Self>(ResourceOperation::Load, self.context(), Some(&id))?;
        let response = Request::new(self.context().client(), method, path, params)
            .perform()
            .map_err(|e| ResourceError::from_load_error(e, Self::NAME, &id))?;

        let data = response.data().ok_or_else(missing_data::<Self>)?;
        self.from_response(data)
    }

    /// Returns the id, or fails if the instance has not been loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UninitializedResource`] naming `operation`.
    fn loaded_id(&self, operation: &'static str) -> Result<String, ResourceError> {
        self.id().ok_or(ResourceError::UninitializedResource {
            resource: Self::NAME,
            operation,
        })
    }

    /// Returns the context child resources are loaded in: this instance's
    /// context extended with [`ID_PARAM`](Self::ID_PARAM) set to its id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UninitializedResource`] if the instance has
    /// no id.
    fn scope(&self, operation: &'static str) -> Result<Context, ResourceError> {
        let id = self.loaded_id(operation)?;
        Ok(self.context().clone().with_path_param(Self::ID_PARAM, id))
    }

    /// Loads child resources scoped to this instance.
    ///
    /// With an id, loads that single child; without one, returns a cursor
    /// over all children.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UninitializedResource`] if this instance has
    /// no id, or the child's `load`/`all` error.
    fn load_resource<C: Resource>(
        &self,
        id: Option<&str>,
        params: Params,
    ) -> Result<Lookup<C>, ResourceError> {
        let context = self.scope(C::NAME)?;
        match id {
            Some(id) => C::load(&context, id, params).map(Lookup::Single),
            None => C::all(&context, params).map(Lookup::Collection),
        }
    }
}

/// Result of a sub-resource lookup: one child, or a cursor over all of them.
#[derive(Debug)]
pub enum Lookup<C> {
    /// The child loaded by id.
    Single(C),
    /// A cursor over the child collection.
    Collection(Cursor<C>),
}

impl<C> Lookup<C> {
    /// Returns the single child, if this is one.
    #[must_use]
    pub fn single(self) -> Option<C> {
        match self {
            Self::Single(child) => Some(child),
            Self::Collection(_) => None,
        }
    }

    /// Returns the cursor, if this is a collection.
    #[must_use]
    pub fn collection(self) -> Option<Cursor<C>> {
        match self {
            Self::Collection(cursor) => Some(cursor),
            Self::Single(_) => None,
        }
    }
}

/// Selects and fills the path template for `operation`.
///
/// Path parameters come from `context` plus `id`; values are
/// percent-encoded.
pub(crate) fn resolve_path<R: Resource>(
    operation: ResourceOperation,
    context: &Context,
    id: Option<&str>,
) -> Result<(HttpMethod, String), ResourceError> {
    let mut ids: BTreeMap<&str, String> = context
        .path_params()
        .iter()
        .map(|(name, value)| (*name, urlencoding::encode(value).into_owned()))
        .collect();
    if let Some(id) = id {
        ids.insert("id", urlencoding::encode(id).into_owned());
    }

    let failed = || ResourceError::PathResolutionFailed {
        resource: R::NAME,
        operation: operation.as_str(),
    };

    let available: Vec<&str> = ids.keys().copied().collect();
    let path = get_path(R::PATHS, operation, &available).ok_or_else(failed)?;
    let url = build_path(path.template, &ids);
    if has_placeholders(&url) {
        return Err(failed());
    }

    Ok((path.http_method, url))
}

fn missing_data<R: Resource>() -> ResourceError {
    ResourceError::Decode {
        resource: R::NAME,
        message: "response has no data member".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;
    use crate::clients::{Client, HttpRequest, HttpResponse, HttpTransport, TransportError};
    use crate::config::{AccessToken, AccessTokenSecret, AdsConfig, ConsumerKey, ConsumerSecret};
    use crate::rest::schema::{PropertyDef, Transform};
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Debug)]
    struct UnreachableTransport;

    impl HttpTransport for UnreachableTransport {
        fn send(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            panic!("no request expected");
        }
    }

    const GADGET_SCHEMA: PropertySchema = PropertySchema::new(
        "Gadget",
        &[
            PropertyDef::readonly("id"),
            PropertyDef::writable("name"),
            PropertyDef::readonly("created_at").with_transform(Transform::Time),
        ],
    );

    #[derive(Debug)]
    struct Gadget {
        context: Context,
        properties: Properties,
    }

    impl Resource for Gadget {
        const NAME: &'static str = "Gadget";
        const SCHEMA: &'static PropertySchema = &GADGET_SCHEMA;
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Load,
                &["account_id", "id"],
                "/0/accounts/{account_id}/gadgets/{id}",
            ),
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::All,
                &["account_id"],
                "/0/accounts/{account_id}/gadgets",
            ),
        ];
        const ID_PARAM: &'static str = "gadget_id";

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

    fn context() -> Context {
        let config = AdsConfig::builder()
            .consumer_key(ConsumerKey::new("ck").unwrap())
            .consumer_secret(ConsumerSecret::new("cs").unwrap())
            .build()
            .unwrap();
        let credentials = Credentials::new(
            AccessToken::new("at").unwrap(),
            AccessTokenSecret::new("ats").unwrap(),
        );
        Client::with_transport(config, credentials, Arc::new(UnreachableTransport)).context()
    }

    #[test]
    fn test_resolve_path_uses_context_and_id() {
        let ctx = context().with_path_param("account_id", "abc");

        let (method, path) =
            resolve_path::<Gadget>(ResourceOperation::Load, &ctx, Some("g 1")).unwrap();

        assert_eq!(method, HttpMethod::Get);
        assert_eq!(path, "/0/accounts/abc/gadgets/g%201");
    }

    #[test]
    fn test_resolve_path_fails_without_parent_id() {
        let result = resolve_path::<Gadget>(ResourceOperation::All, &context(), None);

        assert!(matches!(
            result,
            Err(ResourceError::PathResolutionFailed { resource: "Gadget", operation: "all" })
        ));
    }

    #[test]
    fn test_all_defers_network_access() {
        let ctx = context().with_path_param("account_id", "abc");

        let cursor = Gadget::all(&ctx, Params::new()).unwrap();

        assert_eq!(cursor.fetch_count(), 0);
        assert!(!cursor.is_exhausted());
    }

    #[test]
    fn test_reload_without_id_makes_no_request() {
        let mut gadget = Gadget::with_context(context());

        let result = gadget.reload(Params::new());

        assert!(matches!(
            result,
            Err(ResourceError::UninitializedResource { resource: "Gadget", operation: "reload" })
        ));
    }

    #[test]
    fn test_from_value_ignores_unknown_fields() {
        let gadget = Gadget::from_value(
            &context(),
            &json!({"id": "g1", "name": "widget", "color": "blue"}),
        )
        .unwrap();

        assert_eq!(gadget.id().as_deref(), Some("g1"));
        assert_eq!(gadget.properties().to_json(), json!({"id": "g1", "name": "widget"}));
        assert!(matches!(gadget.get("color"), Err(ResourceError::UnknownProperty { .. })));
    }

    #[test]
    fn test_from_response_rejects_non_objects() {
        let mut gadget = Gadget::with_context(context());
        assert!(matches!(
            gadget.from_response(&json!(["g1"])),
            Err(ResourceError::Decode { resource: "Gadget", .. })
        ));
    }

    #[test]
    fn test_readonly_properties_cannot_be_set() {
        let mut gadget = Gadget::from_value(&context(), &json!({"id": "g1"})).unwrap();

        assert!(matches!(
            gadget.set("id", "g2"),
            Err(ResourceError::ImmutableProperty { .. })
        ));
        gadget.set("name", "renamed").unwrap();
        assert_eq!(gadget.id().as_deref(), Some("g1"));
    }

    #[test]
    fn test_scope_adds_id_param() {
        let gadget = Gadget::from_value(&context(), &json!({"id": "g1"})).unwrap();

        let scoped = gadget.scope("children").unwrap();

        assert_eq!(scoped.path_param("gadget_id"), Some("g1"));
        assert!(matches!(
            Gadget::with_context(context()).scope("children"),
            Err(ResourceError::UninitializedResource { operation: "children", .. })
        ));
    }
}
