//! Path building infrastructure for REST resources.
//!
//! Resources declare their endpoints as [`ResourcePath`] templates with
//! `{placeholder}` segments. A path is selected by operation and by the ids
//! available at call time, and the most specific candidate wins.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use twitter_ads::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use twitter_ads::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Load, &["account_id", "id"],
//!         "/0/accounts/{account_id}/campaigns/{id}"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &["account_id"],
//!         "/0/accounts/{account_id}/campaigns"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Load, &["account_id", "id"]).unwrap();
//!
//! let mut ids = BTreeMap::new();
//! ids.insert("account_id", "18ce54d4x5t");
//! ids.insert("id", "7fyv");
//! assert_eq!(build_path(path.template, &ids), "/0/accounts/18ce54d4x5t/campaigns/7fyv");
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::clients::HttpMethod;

/// Operations that can be performed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Load a single resource by id.
    Load,
    /// List a collection.
    All,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Load | Self::All => HttpMethod::Get,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::All => "all",
        }
    }
}

/// A path configuration for a resource operation.
///
/// Templates use `{id_name}` placeholders, e.g.
/// `/0/accounts/{account_id}/line_items/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order (e.g., `["account_id", "id"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Among the paths for `operation` whose required ids are all available,
/// the one requiring the most ids is returned.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Replaces `{id_name}` placeholders in `template` with values from `ids`.
///
/// Placeholders without a value are left in place.
#[must_use]
pub fn build_path<V: Display>(template: &str, ids: &BTreeMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

/// Returns `true` if `path` still contains an unresolved placeholder.
#[must_use]
pub fn has_placeholders(path: &str) -> bool {
    path.find('{')
        .is_some_and(|open| path[open..].contains('}'))
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &[ResourcePath] = &[
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
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "/0/campaigns",
        ),
    ];

    #[test]
    fn test_resource_path_stores_fields_correctly() {
        let path = PATHS[0];

        assert_eq!(path.http_method, HttpMethod::Get);
        assert_eq!(path.operation, ResourceOperation::Load);
        assert_eq!(path.ids, &["account_id", "id"]);
        assert_eq!(path.id_count(), 2);
    }

    #[test]
    fn test_path_template_interpolation_multiple_ids() {
        let mut ids = BTreeMap::new();
        ids.insert("account_id", "abc");
        ids.insert("id", "123");

        let result = build_path("/0/accounts/{account_id}/campaigns/{id}", &ids);
        assert_eq!(result, "/0/accounts/abc/campaigns/123");
    }

    #[test]
    fn test_get_path_selects_most_specific_path() {
        let path = get_path(PATHS, ResourceOperation::All, &["account_id"]).unwrap();
        assert_eq!(path.template, "/0/accounts/{account_id}/campaigns");
    }

    #[test]
    fn test_get_path_falls_back_to_less_specific() {
        let path = get_path(PATHS, ResourceOperation::All, &[]).unwrap();
        assert_eq!(path.template, "/0/campaigns");
    }

    #[test]
    fn test_get_path_returns_none_when_no_match() {
        assert!(get_path(PATHS, ResourceOperation::Load, &["id"]).is_none());
    }

    #[test]
    fn test_has_placeholders() {
        assert!(has_placeholders("/0/accounts/{id}/features"));
        assert!(!has_placeholders("/0/accounts/abc/features"));
    }

    #[test]
    fn test_operation_metadata() {
        assert_eq!(ResourceOperation::Load.as_str(), "load");
        assert_eq!(ResourceOperation::All.default_http_method(), HttpMethod::Get);
    }
}
