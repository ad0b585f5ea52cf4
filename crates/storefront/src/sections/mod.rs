//! Page-builder sections.
//!
//! Each section module owns its schema (served to the builder as JSON), a
//! view model built from settings plus fetched Shopify records, and an
//! Askama template. Sections never fail to render: missing data falls back
//! to defaults or a placeholder.

pub mod carousel;
pub mod cart_drawer;
pub mod common;
pub mod featured_collections_sales;
pub mod featured_gifts_grid;
pub mod featured_products;
pub mod fit_guide;
pub mod main_product_details;
pub mod middle_collections_list;
pub mod sale_hero_banner;
pub mod ui_state;
pub mod variant;

use woolstep_core::SectionSchema;

/// Every section and child block schema, in builder sidebar order.
#[must_use]
pub fn schemas() -> Vec<SectionSchema> {
    vec![
        sale_hero_banner::schema(),
        featured_products::schema(),
        featured_products::card_schema(),
        featured_collections_sales::schema(),
        featured_collections_sales::item_schema(),
        featured_collections_sales::default_button_schema(),
        featured_collections_sales::hover_buttons_schema(),
        featured_gifts_grid::schema(),
        featured_gifts_grid::hero_schema(),
        featured_gifts_grid::square_card_schema(),
        featured_gifts_grid::tall_card_schema(),
        middle_collections_list::schema(),
        main_product_details::schema(),
        main_product_details::breadcrumb_schema(),
        main_product_details::gallery_schema(),
    ]
}
