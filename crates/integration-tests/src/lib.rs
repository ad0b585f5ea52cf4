//! Integration tests for Woolstep storefront sections.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p woolstep-integration-tests
//! ```
//!
//! No Shopify store is needed: every test points the storefront client at a
//! `wiremock` server that answers the GraphQL endpoint.
//!
//! # Test Categories
//!
//! - `storefront_client` - Storefront API client against a mock endpoint
//! - `routes` - Full router requests (pages, fragments, drawer)
//! - `sections` - Section previews and the schema catalogue

use std::net::{IpAddr, Ipv4Addr};

use axum::Router;
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use woolstep_storefront::config::{
    DEFAULT_FREE_SHIPPING_THRESHOLD, ShopifyStorefrontConfig, StorefrontConfig,
};
use woolstep_storefront::routes::routes;
use woolstep_storefront::shopify::{Locale, StorefrontClient};
use woolstep_storefront::state::AppState;

/// Path the mock server answers GraphQL on.
pub const GRAPHQL_PATH: &str = "/api/2026-01/graphql.json";

/// Token sent in the private token header.
pub const TEST_TOKEN: &str = "3f9c1e7a5b2d8046e1c7f9a3b5d20e84";

// =============================================================================
// Test Context
// =============================================================================

/// A mock Shopify endpoint plus the storefront wired to it.
pub struct TestContext {
    pub shopify: MockServer,
    pub state: AppState,
}

impl TestContext {
    /// Start a mock server with no mounted responses.
    pub async fn new() -> Self {
        let shopify = MockServer::start().await;
        let state = AppState::with_client(test_config(), client_for(&shopify));
        Self { shopify, state }
    }

    /// Answer every GraphQL request with `body`.
    pub async fn respond_with(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.shopify)
            .await;
    }

    /// The full storefront router over this context's state.
    #[must_use]
    pub fn app(&self) -> Router {
        routes().with_state(self.state.clone())
    }
}

/// Storefront client pointed at `server`.
#[must_use]
pub fn client_for(server: &MockServer) -> StorefrontClient {
    StorefrontClient::with_endpoint(
        format!("{}{GRAPHQL_PATH}", server.uri()),
        SecretString::from(TEST_TOKEN),
    )
}

/// Configuration with test values; the Shopify store is never contacted.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        shopify: ShopifyStorefrontConfig {
            store: "woolstep-test.myshopify.com".to_string(),
            api_version: "2026-01".to_string(),
            storefront_private_token: SecretString::from(TEST_TOKEN),
        },
        locale: Locale::default(),
        free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
        sentry_dsn: None,
        sentry_environment: None,
    }
}

// =============================================================================
// GraphQL Fixtures
// =============================================================================

/// `{ "data": { "product": null } }`
#[must_use]
pub fn no_product() -> Value {
    json!({ "data": { "product": null } })
}

/// `{ "data": { "collection": null } }`
#[must_use]
pub fn no_collection() -> Value {
    json!({ "data": { "collection": null } })
}

/// A GraphQL error response.
#[must_use]
pub fn graphql_error(message: &str) -> Value {
    json!({ "errors": [{ "message": message, "locations": [], "path": ["product"] }] })
}

/// Product payload with two colors, two sizes and two media images.
///
/// Variant 1 (Medium Grey / 10) is sold out; variant 2 (Dark Camel / 11) is
/// available at $66 marked down from $110.
#[must_use]
pub fn product_payload() -> Value {
    json!({
        "data": {
            "product": {
                "id": "gid://shopify/Product/7205168250960",
                "handle": "womens-kiwi-slipper",
                "title": "Women's Kiwi Slipper",
                "description": "Elevated everyday slipper.",
                "options": [
                    {
                        "name": "Color",
                        "optionValues": [
                            {
                                "name": "Medium Grey",
                                "swatch": null,
                                "firstSelectableVariant": {
                                    "id": "gid://shopify/ProductVariant/1",
                                    "availableForSale": false
                                }
                            },
                            {
                                "name": "Dark Camel",
                                "swatch": { "color": "#b38b58" },
                                "firstSelectableVariant": {
                                    "id": "gid://shopify/ProductVariant/2",
                                    "availableForSale": true
                                }
                            }
                        ]
                    },
                    {
                        "name": "Shoe Size",
                        "optionValues": [
                            { "name": "10", "swatch": null, "firstSelectableVariant": null },
                            {
                                "name": "11",
                                "swatch": null,
                                "firstSelectableVariant": {
                                    "id": "gid://shopify/ProductVariant/2",
                                    "availableForSale": true
                                }
                            }
                        ]
                    }
                ],
                "variants": {
                    "nodes": [
                        variant_json(1, false, "Medium Grey", "10"),
                        variant_json(2, true, "Dark Camel", "11")
                    ]
                },
                "media": {
                    "nodes": [
                        {
                            "__typename": "MediaImage",
                            "image": { "url": "https://cdn.shopify.com/kiwi-left.png", "altText": null, "width": 1024, "height": 1024 }
                        },
                        { "__typename": "Video", "image": null },
                        {
                            "__typename": "MediaImage",
                            "image": { "url": "https://cdn.shopify.com/kiwi-right.png", "altText": null, "width": 1024, "height": 1024 }
                        }
                    ]
                }
            }
        }
    })
}

fn variant_json(id: u32, available: bool, color: &str, size: &str) -> Value {
    json!({
        "id": format!("gid://shopify/ProductVariant/{id}"),
        "title": format!("{color} / {size}"),
        "availableForSale": available,
        "price": { "amount": "66.0", "currencyCode": "USD" },
        "compareAtPrice": { "amount": "110.0", "currencyCode": "USD" },
        "selectedOptions": [
            { "name": "Color", "value": color },
            { "name": "Shoe Size", "value": size }
        ],
        "image": null
    })
}

/// Collection payload with an image.
#[must_use]
pub fn collection_payload() -> Value {
    json!({
        "data": {
            "collection": {
                "id": "gid://shopify/Collection/99",
                "title": "Men's Sale",
                "handle": "mens-sale",
                "image": {
                    "url": "https://cdn.shopify.com/mens-sale.png",
                    "altText": "Men's sale shoes",
                    "width": 800,
                    "height": 1000
                }
            }
        }
    })
}
