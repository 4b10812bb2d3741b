//! # Data Source Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest::Error / HTTP status / bad JSON                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FetchError (this module) ← tags the failing resource                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in app) ← "Failed to fetch products"                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog shows "Error loading products" + retry hint                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// A failed catalog request.
///
/// Every variant names the resource being fetched (`products`,
/// `categories`, `product 3`, ...), which is what the catalog view reports.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-success status.
    #[error("Failed to fetch {resource}: HTTP {status}")]
    Status { resource: String, status: u16 },

    /// Connection refused, DNS failure, timeout, ...
    #[error("Failed to fetch {resource}: {source}")]
    Transport {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not the expected JSON.
    #[error("Failed to decode {resource}: {message}")]
    Decode { resource: String, message: String },

    /// The request URL could not be built.
    #[error("Invalid URL for {resource}: {reason}")]
    InvalidUrl { resource: String, reason: String },
}

impl FetchError {
    /// Name of the resource whose request failed.
    pub fn resource(&self) -> &str {
        match self {
            FetchError::Status { resource, .. }
            | FetchError::Transport { resource, .. }
            | FetchError::Decode { resource, .. }
            | FetchError::InvalidUrl { resource, .. } => resource,
        }
    }

    /// True for transport-level timeouts.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Transport { source, .. } if source.is_timeout())
    }
}

/// Errors building a [`crate::FakeStoreClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL does not parse.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// Base URL is not http or https.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// reqwest rejected the client configuration.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_resource() {
        let err = FetchError::Status {
            resource: "products".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "Failed to fetch products: HTTP 503");
        assert_eq!(err.resource(), "products");
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_decode_resource() {
        let err = FetchError::Decode {
            resource: "categories".to_string(),
            message: "expected a sequence".to_string(),
        };
        assert_eq!(err.resource(), "categories");
    }
}
