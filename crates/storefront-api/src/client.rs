//! # Fake Store Client
//!
//! reqwest-based implementation of [`ProductSource`].
//!
//! ## Request Flow
//! ```text
//! list_products()
//!      │
//!      ▼
//! GET {base}/products ──► status 2xx? ──no──► FetchError::Status
//!      │                       │
//!      │ transport error       yes
//!      ▼                       ▼
//! FetchError::Transport   serde_json ──fail──► FetchError::Decode
//!                              │
//!                              ▼
//!                        Vec<Product>
//! ```

use std::time::Duration;

use serde::de::DeserializeOwned;
use storefront_core::{Product, ProductId};
use tracing::{debug, error};
use url::Url;

use crate::error::{ClientError, FetchError};
use crate::source::ProductSource;

/// Public catalog used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Longest body excerpt kept in decode errors.
const BODY_PREVIEW_LEN: usize = 200;

// =============================================================================
// Client Configuration
// =============================================================================

/// Settings for [`FakeStoreClient::new`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://fakestoreapi.com`.
    pub base_url: String,

    /// Transport timeout applied to every request.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

// =============================================================================
// Client
// =============================================================================

/// Async client for the Fake Store catalog.
#[derive(Debug, Clone)]
pub struct FakeStoreClient {
    http: reqwest::Client,
    base_url: Url,
}

impl FakeStoreClient {
    /// Builds a client with its own connection pool.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::UnsupportedScheme(base_url.scheme().to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Wraps an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Appends path segments to the base URL, percent-encoding each one
    /// (category names contain spaces and apostrophes).
    fn url(&self, resource: &str, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl {
                resource: resource.to_string(),
                reason: format!("{} cannot be a base URL", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── HTTP ─────────────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        segments: &[&str],
    ) -> Result<T, FetchError> {
        let url = self.url(resource, segments)?;
        debug!(%url, resource, "GET");

        let result = match self.http.get(url).send().await {
            Ok(resp) => Self::handle_response(resource, resp).await,
            Err(source) => Err(FetchError::Transport {
                resource: resource.to_string(),
                source,
            }),
        };

        if let Err(ref e) = result {
            error!(resource, timeout = e.is_timeout(), error = %e, "Catalog request failed");
        }
        result
    }

    async fn handle_response<T: DeserializeOwned>(
        resource: &str,
        resp: reqwest::Response,
    ) -> Result<T, FetchError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|source| FetchError::Transport {
            resource: resource.to_string(),
            source,
        })?;

        if body.trim().is_empty() {
            return Err(FetchError::Decode {
                resource: resource.to_string(),
                message: "empty response body".to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(BODY_PREVIEW_LEN).collect();
            FetchError::Decode {
                resource: resource.to_string(),
                message: format!("{e} (body preview: {preview:?})"),
            }
        })
    }
}

impl ProductSource for FakeStoreClient {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        self.get("products", &["products"]).await
    }

    async fn list_categories(&self) -> Result<Vec<String>, FetchError> {
        self.get("categories", &["products", "categories"]).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, FetchError> {
        let id = id.to_string();
        self.get(&format!("product {id}"), &["products", id.as_str()]).await
    }

    async fn list_products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, FetchError> {
        self.get(
            &format!("products in category {category}"),
            &["products", "category", category],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> FakeStoreClient {
        FakeStoreClient::new(&ClientConfig::new(base)).unwrap()
    }

    #[test]
    fn test_url_joins_segments() {
        let c = client("https://fakestoreapi.com");
        let url = c.url("product 3", &["products", "3"]).unwrap();
        assert_eq!(url.as_str(), "https://fakestoreapi.com/products/3");
    }

    #[test]
    fn test_url_keeps_base_path() {
        let c = client("http://localhost:9000/api/");
        let url = c.url("products", &["products"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/api/products");
    }

    #[test]
    fn test_url_encodes_category() {
        let c = client("https://fakestoreapi.com");
        let url = c
            .url("x", &["products", "category", "men's clothing"])
            .unwrap();
        assert!(url.as_str().ends_with("/products/category/men's%20clothing"));
    }

    #[test]
    fn test_rejects_non_http_base() {
        let err = FakeStoreClient::new(&ClientConfig::new("ftp://example.com")).unwrap_err();
        assert!(matches!(err, ClientError::UnsupportedScheme(s) if s == "ftp"));

        let err = FakeStoreClient::new(&ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }
}
