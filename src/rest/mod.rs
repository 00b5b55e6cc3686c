//! The resource core: schemas, requests, cursors and the resource trait.
//!
//! This module maps the Ads API's JSON resource graph onto local objects:
//!
//! - **[`PropertySchema`]**: Declarative per-resource property table
//! - **[`Properties`]**: Schema-checked property storage for one instance
//! - **[`Request`]**: A single-use HTTP call, executed at most once
//! - **[`Response`]**: A decoded 2xx response with its pagination token
//! - **[`Cursor`]**: Lazy, forward-only pagination over a collection
//! - **[`Resource`]**: The trait providing `load`, `all` and `reload`
//! - **[`ResourceError`]**: Everything that can go wrong on the way
//!
//! Concrete resources live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_ads::rest::{Params, Resource};
//! use twitter_ads::rest::resources::{Account, Campaign};
//!
//! let ctx = client.context();
//!
//! // Load one account
//! let mut account = Account::load(&ctx, "18ce54d4x5t", Params::new())?;
//! println!("{:?}", account.name());
//!
//! // Page through campaigns lazily
//! for campaign in account.campaigns(None, Params::new().set("count", 50))?.collection().unwrap() {
//!     let campaign = campaign?;
//!     println!("{:?}", campaign.name());
//! }
//!
//! // Refresh in place
//! account.reload(Params::new())?;
//! ```

mod context;
mod cursor;
mod errors;
mod params;
mod path;
mod properties;
mod request;
mod resource;
mod response;
mod schema;

pub mod resources;

pub use context::Context;
pub use cursor::{Cursor, CursorState, CURSOR_PARAM};
pub use errors::ResourceError;
pub use params::Params;
pub use path::{build_path, get_path, has_placeholders, ResourceOperation, ResourcePath};
pub use properties::Properties;
pub use request::Request;
pub use resource::{Lookup, Resource};
pub use response::Response;
pub use schema::{DefaultValue, PropertyDef, PropertySchema, PropertyValue, Transform};
