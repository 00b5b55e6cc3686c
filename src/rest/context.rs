//! The authorization context threaded through resource operations.

use std::collections::BTreeMap;

use crate::clients::Client;

/// Client plus the path parameters inherited from parent resources.
///
/// A root context (from [`Client::context`]) carries no parameters. When an
/// [`Account`](crate::rest::resources::Account) hands out its campaigns, it
/// passes a context extended with `account_id`, so child operations resolve
/// `/0/accounts/{account_id}/campaigns` without holding a reference to the
/// parent object.
///
/// # Example
///
/// ```rust,ignore
/// let scoped = client.context().with_path_param("account_id", "18ce54d4x5t");
/// assert_eq!(scoped.path_param("account_id"), Some("18ce54d4x5t"));
/// ```
#[derive(Clone, Debug)]
pub struct Context {
    client: Client,
    path_params: BTreeMap<&'static str, String>,
}

impl Context {
    /// Creates a root context for `client`.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self {
            client,
            path_params: BTreeMap::new(),
        }
    }

    /// Returns a copy of this context with an extra path parameter.
    #[must_use]
    pub fn with_path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.insert(name, value.into());
        self
    }

    /// Returns the client requests are made through.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// Returns a path parameter by name.
    #[must_use]
    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    /// Returns all path parameters.
    #[must_use]
    pub const fn path_params(&self) -> &BTreeMap<&'static str, String> {
        &self.path_params
    }
}
