//! Shopify Storefront API client implementation.
//!
//! Uses `graphql_client` envelopes with `reqwest` 0.13 for HTTP.
//! Caches products and collections using `moka` (5-minute TTL).

mod cache;
mod conversions;
pub mod queries;

use std::sync::Arc;
use std::time::Duration;

use graphql_client::{GraphQLQuery, Response};
use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};
use woolstep_core::{CollectionGid, ProductGid};

use crate::config::ShopifyStorefrontConfig;
use crate::shopify::ShopifyError;
use crate::shopify::types::{Collection, Locale, Product};

use cache::{CacheKey, CacheValue};
use conversions::{convert_collection, convert_product};
use queries::{
    GetCollectionById, GetProductByHandle, GetProductById, HandleVariables, NodeVariables,
};

// =============================================================================
// StorefrontClient
// =============================================================================

/// Client for the Shopify Storefront API.
///
/// Read-only access to products and collections. Found records are cached
/// for 5 minutes per locale; absent records are not cached.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: SecretString,
    cache: Cache<CacheKey, CacheValue>,
}

impl StorefrontClient {
    /// Create a new Storefront API client.
    #[must_use]
    pub fn new(config: &ShopifyStorefrontConfig) -> Self {
        Self::with_endpoint(config.endpoint(), config.storefront_private_token.clone())
    }

    /// Create a client against an explicit GraphQL endpoint.
    ///
    /// Used to point the client at a mock server in tests.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>, access_token: SecretString) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(StorefrontClientInner {
                client: reqwest::Client::new(),
                endpoint: endpoint.into(),
                access_token,
                cache,
            }),
        }
    }

    /// Execute a GraphQL query.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, ShopifyError>
    where
        Q::Variables: serde::Serialize,
    {
        let request_body = Q::build_query(variables);

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            // Private access tokens use a different header than public tokens
            .header(
                "Shopify-Storefront-Private-Token",
                self.inner.access_token.expose_secret(),
            )
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ShopifyError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify API returned non-success status"
            );
            return Err(ShopifyError::GraphQL(vec![super::GraphQLError {
                message: format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
                locations: vec![],
                path: vec![],
            }]));
        }

        let response: Response<Q::ResponseData> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Shopify GraphQL response"
                );
                return Err(ShopifyError::Parse(e));
            }
        };

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            tracing::debug!(errors = ?errors, "GraphQL errors in response");

            return Err(ShopifyError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| super::GraphQLError {
                        message: e.message,
                        locations: e.locations.map_or_else(Vec::new, |locs| {
                            locs.into_iter()
                                .map(|l| super::GraphQLErrorLocation {
                                    line: i64::from(l.line),
                                    column: i64::from(l.column),
                                })
                                .collect()
                        }),
                        path: e.path.map_or_else(Vec::new, |p| {
                            p.into_iter()
                                .map(|fragment| match fragment {
                                    graphql_client::PathFragment::Key(s) => {
                                        serde_json::Value::String(s)
                                    }
                                    graphql_client::PathFragment::Index(i) => {
                                        serde_json::Value::Number(i.into())
                                    }
                                })
                                .collect()
                        }),
                    })
                    .collect(),
            ));
        }

        response.data.ok_or_else(|| {
            tracing::error!(
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify GraphQL response has no data and no errors"
            );
            ShopifyError::GraphQL(vec![super::GraphQLError {
                message: "No data in response".to_string(),
                locations: vec![],
                path: vec![],
            }])
        })
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get a product by its global ID.
    ///
    /// Returns `Ok(None)` when no product has this ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the payload is malformed.
    #[instrument(skip(self, locale), fields(product_id = %id))]
    pub async fn product_by_id(
        &self,
        id: &ProductGid,
        locale: &Locale,
    ) -> Result<Option<Product>, ShopifyError> {
        let cache_key = CacheKey::ProductById(id.as_str().to_string(), locale.clone());

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(Some(*product));
        }

        let variables = NodeVariables {
            id: id.as_str().to_string(),
            country: locale.country.clone(),
            language: locale.language.clone(),
        };

        let data = self.execute::<GetProductById>(variables).await?;
        self.cache_product(cache_key, data.product.map(convert_product).transpose()?)
            .await
    }

    /// Get a product by its URL handle.
    ///
    /// Returns `Ok(None)` when no product has this handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the payload is malformed.
    #[instrument(skip(self, locale), fields(handle = %handle))]
    pub async fn product_by_handle(
        &self,
        handle: &str,
        locale: &Locale,
    ) -> Result<Option<Product>, ShopifyError> {
        let cache_key = CacheKey::ProductByHandle(handle.to_string(), locale.clone());

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(Some(*product));
        }

        let variables = HandleVariables {
            handle: handle.to_string(),
            country: locale.country.clone(),
            language: locale.language.clone(),
        };

        let data = self.execute::<GetProductByHandle>(variables).await?;
        self.cache_product(cache_key, data.product.map(convert_product).transpose()?)
            .await
    }

    async fn cache_product(
        &self,
        cache_key: CacheKey,
        product: Option<Product>,
    ) -> Result<Option<Product>, ShopifyError> {
        if let Some(product) = &product {
            self.inner
                .cache
                .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
                .await;
        }
        Ok(product)
    }

    // =========================================================================
    // Collection Methods
    // =========================================================================

    /// Get a collection by its global ID.
    ///
    /// Returns `Ok(None)` when no collection has this ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the payload is malformed.
    #[instrument(skip(self, locale), fields(collection_id = %id))]
    pub async fn collection_by_id(
        &self,
        id: &CollectionGid,
        locale: &Locale,
    ) -> Result<Option<Collection>, ShopifyError> {
        let cache_key = CacheKey::CollectionById(id.as_str().to_string(), locale.clone());

        if let Some(CacheValue::Collection(collection)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for collection");
            return Ok(Some(*collection));
        }

        let variables = NodeVariables {
            id: id.as_str().to_string(),
            country: locale.country.clone(),
            language: locale.language.clone(),
        };

        let data = self.execute::<GetCollectionById>(variables).await?;
        let collection = data.collection.map(convert_collection).transpose()?;

        if let Some(collection) = &collection {
            self.inner
                .cache
                .insert(
                    cache_key,
                    CacheValue::Collection(Box::new(collection.clone())),
                )
                .await;
        }

        Ok(collection)
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Invalidate all cached data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}
