//! Page-builder endpoints: the schema catalogue and section previews.
//!
//! Previews render a section's preset content. Query parameters override
//! top-level settings, so the builder can preview edits without saving.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
};
use woolstep_core::{Preset, PresetChild, SectionSchema};

use crate::sections::common::Settings;
use crate::sections::featured_collections_sales::{
    self, FeaturedCollectionsSalesTemplate, SalesItemTemplate,
};
use crate::sections::featured_gifts_grid::{self, FeaturedGiftsGridTemplate};
use crate::sections::featured_products::{
    self, FeaturedProductCardTemplate, FeaturedProductsTemplate,
};
use crate::sections::main_product_details::{
    self, MainProductDetailsTemplate, ProductDetails,
};
use crate::sections::middle_collections_list::{self, MiddleCollectionsListTemplate};
use crate::sections::sale_hero_banner::{self, SaleHeroBannerTemplate};
use crate::sections::schemas as all_schemas;
use crate::sections::ui_state::HoverState;
use crate::state::AppState;

type SettingsQuery = Query<HashMap<String, String>>;

/// Preset of `schema` with `overrides` applied to its top-level settings.
fn preset_with(schema: &SectionSchema, overrides: HashMap<String, String>) -> Preset {
    let mut preset = schema.presets.clone().unwrap_or_default();
    for (name, value) in overrides {
        preset = preset.setting(&name, value);
    }
    preset
}

/// Every section and block schema.
pub async fn schemas() -> Json<Vec<SectionSchema>> {
    Json(all_schemas())
}

/// Product panel with the preset mock product.
pub async fn main_product_details(
    State(state): State<AppState>,
    Query(query): SettingsQuery,
) -> MainProductDetailsTemplate {
    let settings = Settings::from_preset(&preset_with(&main_product_details::schema(), query));
    MainProductDetailsTemplate::new(
        &settings,
        ProductDetails::mock(),
        state.free_shipping_threshold(),
    )
}

/// One featured product card.
pub async fn featured_product_card(
    State(state): State<AppState>,
    Query(mut query): SettingsQuery,
) -> FeaturedProductCardTemplate {
    let slot = query
        .remove("slot")
        .unwrap_or_else(|| "featured-card-preview".to_string());
    let settings = Settings::from_query(query);
    featured_products::load_card(state.storefront(), state.locale(), &settings, &slot).await
}

/// One sales grid item. `hover=true` previews the hover state.
pub async fn sales_item(
    State(state): State<AppState>,
    Query(mut query): SettingsQuery,
) -> SalesItemTemplate {
    let mut hover = HoverState::default();
    if query
        .remove("hover")
        .is_some_and(|v| matches!(v.as_str(), "1" | "true" | "on"))
    {
        hover.enter();
    }

    let mut child = PresetChild::new(featured_collections_sales::ITEM_TYPE);
    for (name, value) in query {
        child = child.setting(&name, value);
    }
    featured_collections_sales::load_item(state.storefront(), state.locale(), &child, hover).await
}

pub async fn featured_products(
    State(state): State<AppState>,
    Query(query): SettingsQuery,
) -> FeaturedProductsTemplate {
    let preset = preset_with(&featured_products::schema(), query);
    featured_products::load_section(state.storefront(), state.locale(), &preset).await
}

pub async fn featured_collections_sales(
    State(state): State<AppState>,
    Query(query): SettingsQuery,
) -> FeaturedCollectionsSalesTemplate {
    let preset = preset_with(&featured_collections_sales::schema(), query);
    featured_collections_sales::load_section(state.storefront(), state.locale(), &preset).await
}

pub async fn featured_gifts_grid(Query(query): SettingsQuery) -> FeaturedGiftsGridTemplate {
    FeaturedGiftsGridTemplate::from_preset(&preset_with(&featured_gifts_grid::schema(), query))
}

pub async fn middle_collections_list(
    Query(query): SettingsQuery,
) -> MiddleCollectionsListTemplate {
    let preset = preset_with(&middle_collections_list::schema(), query);
    MiddleCollectionsListTemplate::new(&Settings::from_preset(&preset))
}

pub async fn sale_hero_banner(Query(query): SettingsQuery) -> SaleHeroBannerTemplate {
    SaleHeroBannerTemplate::from_preset(&preset_with(&sale_hero_banner::schema(), query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_with_overrides_settings_and_keeps_children() {
        let overrides = HashMap::from([("contentPosition".to_string(), "top left".to_string())]);
        let preset = preset_with(&sale_hero_banner::schema(), overrides);
        assert_eq!(preset.children.len(), 3);
        assert_eq!(
            Settings::from_preset(&preset).text("contentPosition"),
            Some("top left")
        );
        assert_eq!(Settings::from_preset(&preset).text("backgroundFit"), Some("cover"));
    }

    #[test]
    fn test_preset_with_schema_without_presets() {
        let preset = preset_with(&middle_collections_list::schema(), HashMap::new());
        assert!(preset.children.is_empty());
        assert!(preset.settings.is_empty());
    }
}
