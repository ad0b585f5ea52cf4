//! Application state shared across handlers.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::config::StorefrontConfig;
use crate::shopify::{Locale, StorefrontClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration and the Storefront API client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    storefront: StorefrontClient,
}

impl AppState {
    /// Create a new application state with a client for the configured store.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let storefront = StorefrontClient::new(&config.shopify);
        Self::with_client(config, storefront)
    }

    /// Create application state around an existing client.
    #[must_use]
    pub fn with_client(config: StorefrontConfig, storefront: StorefrontClient) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, storefront }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the Shopify Storefront API client.
    #[must_use]
    pub fn storefront(&self) -> &StorefrontClient {
        &self.inner.storefront
    }

    /// Buyer context for Storefront queries.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.inner.config.locale
    }

    /// Cart subtotal at which shipping becomes free.
    #[must_use]
    pub fn free_shipping_threshold(&self) -> Decimal {
        self.inner.config.free_shipping_threshold
    }
}
