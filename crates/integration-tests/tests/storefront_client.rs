//! Storefront API client tests against a mock GraphQL endpoint.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use woolstep_core::{CollectionGid, ProductGid};
use woolstep_integration_tests::{
    GRAPHQL_PATH, TEST_TOKEN, client_for, collection_payload, graphql_error, no_product,
    product_payload,
};
use woolstep_storefront::shopify::{Locale, ShopifyError};

fn ok(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

// =============================================================================
// Request Shape
// =============================================================================

#[tokio::test]
async fn test_request_carries_token_operation_and_buyer_context() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("Shopify-Storefront-Private-Token", TEST_TOKEN))
        .and(body_partial_json(json!({
            "operationName": "GetProductByHandle",
            "variables": { "handle": "womens-kiwi-slipper", "country": "CA", "language": "FR" }
        })))
        .respond_with(ok(product_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let locale = Locale {
        country: "CA".to_string(),
        language: "FR".to_string(),
    };
    let product = client_for(&server)
        .product_by_handle("womens-kiwi-slipper", &locale)
        .await
        .unwrap();
    assert!(product.is_some());
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn test_product_payload_is_converted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok(product_payload()))
        .mount(&server)
        .await;

    let product = client_for(&server)
        .product_by_handle("womens-kiwi-slipper", &Locale::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(product.title, "Women's Kiwi Slipper");
    assert_eq!(product.variants.len(), 2);
    assert_eq!(product.options.len(), 2);
    // Only MediaImage nodes become gallery images
    assert_eq!(
        product.images,
        vec![
            "https://cdn.shopify.com/kiwi-left.png".to_string(),
            "https://cdn.shopify.com/kiwi-right.png".to_string(),
        ]
    );
    assert_eq!(
        product.first_available_variant().unwrap().title,
        "Dark Camel / 11"
    );
}

#[tokio::test]
async fn test_product_by_id_sends_global_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operationName": "GetProductById",
            "variables": { "id": "gid://shopify/Product/7205168250960" }
        })))
        .respond_with(ok(product_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let id = ProductGid::parse("7205168250960").unwrap();
    let product = client_for(&server)
        .product_by_id(&id, &Locale::default())
        .await
        .unwrap();
    assert_eq!(product.unwrap().handle, "womens-kiwi-slipper");
}

#[tokio::test]
async fn test_missing_product_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok(no_product()))
        .mount(&server)
        .await;

    let product = client_for(&server)
        .product_by_handle("does-not-exist", &Locale::default())
        .await
        .unwrap();
    assert!(product.is_none());
}

// =============================================================================
// Caching
// =============================================================================

#[tokio::test]
async fn test_found_product_is_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok(product_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    for _ in 0..3 {
        let product = client
            .product_by_handle("womens-kiwi-slipper", &Locale::default())
            .await
            .unwrap();
        assert!(product.is_some());
    }
}

#[tokio::test]
async fn test_missing_product_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok(no_product()))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    for _ in 0..2 {
        let product = client
            .product_by_handle("coming-soon", &Locale::default())
            .await
            .unwrap();
        assert!(product.is_none());
    }
}

#[tokio::test]
async fn test_cache_is_per_locale() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok(product_payload()))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let canada = Locale {
        country: "CA".to_string(),
        language: "EN".to_string(),
    };
    client
        .product_by_handle("womens-kiwi-slipper", &Locale::default())
        .await
        .unwrap();
    client
        .product_by_handle("womens-kiwi-slipper", &canada)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalidate_all_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok(product_payload()))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .product_by_handle("womens-kiwi-slipper", &Locale::default())
        .await
        .unwrap();
    client.invalidate_all().await;
    client
        .product_by_handle("womens-kiwi-slipper", &Locale::default())
        .await
        .unwrap();
}

// =============================================================================
// Collections
// =============================================================================

#[tokio::test]
async fn test_collection_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operationName": "GetCollectionById",
            "variables": { "id": "gid://shopify/Collection/99" }
        })))
        .respond_with(ok(collection_payload()))
        .mount(&server)
        .await;

    let id = CollectionGid::parse("99").unwrap();
    let collection = client_for(&server)
        .collection_by_id(&id, &Locale::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(collection.title, "Men's Sale");
    let image = collection.image.unwrap();
    assert_eq!(image.alt_text.as_deref(), Some("Men's sale shoes"));
    assert_eq!((image.width, image.height), (Some(800), Some(1000)));
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_graphql_errors_are_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok(graphql_error("Throttled")))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .product_by_handle("womens-kiwi-slipper", &Locale::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ShopifyError::GraphQL(_)));
    assert!(err.to_string().contains("Throttled"));
}

#[tokio::test]
async fn test_rate_limit_reads_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .product_by_handle("womens-kiwi-slipper", &Locale::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ShopifyError::RateLimited(30)));
}

#[tokio::test]
async fn test_server_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .product_by_handle("womens-kiwi-slipper", &Locale::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("HTTP 503"));
}

#[tokio::test]
async fn test_malformed_payload_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok(json!({ "data": { "product": { "id": 42 } } })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .product_by_handle("womens-kiwi-slipper", &Locale::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ShopifyError::Parse(_)));
}

#[tokio::test]
async fn test_unrepresentable_id_is_invalid_data() {
    let server = MockServer::start().await;
    let mut payload = product_payload();
    payload["data"]["product"]["id"] = json!("gid://shopify/Collection/1");
    Mock::given(method("POST"))
        .respond_with(ok(payload))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .product_by_handle("womens-kiwi-slipper", &Locale::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ShopifyError::InvalidData(_)));
}
