//! # Catalog Client
//!
//! Thin HTTP client for the remote product-catalog service. One GET per
//! call, no retries, no caching.

use super::category::Category;
use super::product::Product;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Production catalog endpoint
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// The single user-facing load failure message. Transport errors, non-2xx
/// responses, and malformed payloads all surface as this.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Why a catalog fetch failed. Only ever used for logs; the store collapses
/// every variant into [`LOAD_FAILED_MESSAGE`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure or undecodable payload
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Service answered with a non-2xx status
    #[error("catalog service returned {0}")]
    Status(StatusCode),
}

/// HTTP client for the catalog service
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against the given base endpoint
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Request URL for a category filter.
    ///
    /// `All` hits the unscoped listing; scoped filters hit
    /// `/products/category/<urlencoded service name>`.
    pub fn products_url(&self, category: Category) -> String {
        match category.service_name() {
            None => format!("{}/products", self.base_url),
            Some(name) => format!(
                "{}/products/category/{}",
                self.base_url,
                urlencoding::encode(name)
            ),
        }
    }

    /// Fetch the product listing for a category. Exactly one outbound GET.
    pub async fn fetch(&self, category: Category) -> Result<Vec<Product>, CatalogError> {
        let url = self.products_url(category);
        tracing::debug!(%url, "fetching catalog");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        Ok(response.json().await?)
    }
}
