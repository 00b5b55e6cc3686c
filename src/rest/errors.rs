//! Resource-specific error types.
//!
//! [`ResourceError`] covers everything that can go wrong between a caller
//! and a populated resource: schema violations detected locally, missing
//! preconditions, unresolvable paths and the wrapped [`HttpError`] for
//! anything that happened on the wire.
//!
//! # Error Handling
//!
//! - **Schema violations** ([`ResourceError::UnknownProperty`],
//!   [`ResourceError::ImmutableProperty`]) never reach the network
//! - **404 on load**: [`ResourceError::NotFound`]
//! - **Other non-2xx, transport and decode failures**: [`ResourceError::Http`]
//!
//! Nothing is retried.
//!
//! # Example
//!
//! ```rust
//! use twitter_ads::rest::ResourceError;
//!
//! let error = ResourceError::NotFound {
//!     resource: "Account",
//!     id: "18ce54d4x5t".to_string(),
//!     request_id: Some("abc-123".to_string()),
//! };
//!
//! assert_eq!(error.status(), Some(404));
//! assert_eq!(error.request_id(), Some("abc-123"));
//! assert!(error.to_string().contains("18ce54d4x5t"));
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A property name the resource's schema does not declare.
    #[error("{resource} has no property '{property}'")]
    UnknownProperty {
        /// The resource type name.
        resource: &'static str,
        /// The property that was requested.
        property: String,
    },

    /// An attempt to set a read-only property.
    #[error("{resource}.{property} is read-only")]
    ImmutableProperty {
        /// The resource type name.
        resource: &'static str,
        /// The property that was written.
        property: String,
    },

    /// An instance-bound operation on a resource that has no id yet.
    #[error("{resource} is not loaded; call {resource}::load before {operation}")]
    UninitializedResource {
        /// The resource type name.
        resource: &'static str,
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource type name.
        resource: &'static str,
        /// The id that was requested.
        id: String,
        /// The request ID for debugging.
        request_id: Option<String>,
    },

    /// No declared path matches the ids available in the context.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The resource type name.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// A wire value its property's transform rejected.
    #[error("Invalid value for {resource}.{property}: {reason}")]
    InvalidProperty {
        /// The resource type name.
        resource: &'static str,
        /// The offending property.
        property: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A response whose `data` member does not have the expected shape.
    #[error("Failed to decode {resource}: {message}")]
    Decode {
        /// The resource type name.
        resource: &'static str,
        /// What was wrong with the payload.
        message: String,
    },

    /// Request parameters that could not be converted to a query string.
    #[error("Invalid request parameters: {reason}")]
    InvalidParams {
        /// Why conversion failed.
        reason: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Maps a failed load to `NotFound` when the server answered 404.
    #[must_use]
    pub fn from_load_error(error: HttpError, resource: &'static str, id: &str) -> Self {
        match error {
            HttpError::Response(response) if response.code == 404 => Self::NotFound {
                resource,
                id: id.to_string(),
                request_id: response.request_id,
            },
            other => Self::Http(other),
        }
    }

    /// Returns the HTTP status code associated with this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::NotFound { request_id, .. } => request_id.as_deref(),
            Self::Http(HttpError::Response(e)) => e.request_id.as_deref(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, TransportError};
    use serde_json::json;

    fn response_error(code: u16) -> HttpError {
        HttpError::Response(HttpResponseError {
            code,
            body: json!({"errors": [{"code": "NOT_FOUND"}]}),
            request_id: Some("req-1".to_string()),
        })
    }

    #[test]
    fn test_from_load_error_maps_404_to_not_found() {
        let error = ResourceError::from_load_error(response_error(404), "Campaign", "7fyv");

        assert!(matches!(
            &error,
            ResourceError::NotFound { resource: "Campaign", id, .. } if id == "7fyv"
        ));
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.request_id(), Some("req-1"));
    }

    #[test]
    fn test_from_load_error_passes_other_statuses_through() {
        let error = ResourceError::from_load_error(response_error(503), "Campaign", "7fyv");

        assert!(matches!(error, ResourceError::Http(HttpError::Response(_))));
        assert_eq!(error.status(), Some(503));
    }

    #[test]
    fn test_connection_error_has_no_status() {
        let error: ResourceError = HttpError::from(TransportError::timeout("timed out")).into();
        assert_eq!(error.status(), None);
        assert!(error.to_string().contains("timed out"));
    }

    #[test]
    fn test_schema_error_messages() {
        let error = ResourceError::ImmutableProperty {
            resource: "Account",
            property: "name".to_string(),
        };
        assert_eq!(error.to_string(), "Account.name is read-only");

        let error = ResourceError::UninitializedResource {
            resource: "Account",
            operation: "reload",
        };
        assert!(error.to_string().contains("before reload"));
    }
}
