//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                                  - Home page (section presets)
//! GET  /health                            - Health check
//!
//! # Products
//! GET  /products/{handle}                 - Product page (?variant=)
//! GET  /products/{handle}/gallery         - Gallery fragment (?index=&action=&width=)
//!
//! # Cart drawer (HTMX fragments, state carried in form fields)
//! POST /drawer/add                        - Open the drawer with a line item
//! POST /drawer/quantity                   - Increment/decrement (?action=)
//! POST /drawer/close                      - Close the drawer
//!
//! # Fit guide
//! GET  /fit-guide                         - Fit guide fragment (?open=)
//!
//! # Page builder
//! GET  /sections/schemas                  - Section schema catalogue (JSON)
//! GET  /sections/{type}                   - Section preview with preset content
//! GET  /sections/featured-product-card    - Product card fragment (?product=)
//! GET  /sections/sales-item               - Sales item fragment (?collection=&hover=)
//! ```

pub mod drawer;
pub mod fit_guide;
pub mod home;
pub mod products;
pub mod sections;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/{handle}", get(products::show))
        .route("/{handle}/gallery", get(products::gallery))
}

/// Create the cart drawer routes router.
pub fn drawer_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(drawer::add))
        .route("/quantity", post(drawer::quantity))
        .route("/close", post(drawer::close))
}

/// Create the page-builder section routes router.
pub fn section_routes() -> Router<AppState> {
    Router::new()
        .route("/schemas", get(sections::schemas))
        .route(
            "/main-product-details",
            get(sections::main_product_details),
        )
        .route("/featured-product-card", get(sections::featured_product_card))
        .route("/sales-item", get(sections::sales_item))
        .route("/featured-products1", get(sections::featured_products))
        .route(
            "/featured-collections-sales",
            get(sections::featured_collections_sales),
        )
        .route("/featured-gifts-grid", get(sections::featured_gifts_grid))
        .route(
            "/middle-collections-list",
            get(sections::middle_collections_list),
        )
        .route("/sale-hero-banner", get(sections::sale_hero_banner))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/products", product_routes())
        .nest("/drawer", drawer_routes())
        .route("/fit-guide", get(fit_guide::show))
        .nest("/sections", section_routes())
}
