//! Variant resolution for product views.
//!
//! Turns a product plus an optional selected variant into the display data
//! the product panels need: formatted prices, discount, the selected color
//! and the size and color selectors.

use woolstep_core::{Price, VariantGid};

use super::common::slugify;
use crate::shopify::{Product, ProductVariant};

/// Swatch used for color values that carry no swatch color.
pub const FALLBACK_SWATCH_GRADIENT: &str =
    "linear-gradient(135deg, rgb(139, 138, 143) 50%, rgb(101, 101, 102) 50%)";

/// Option name that identifies the color option. Matched case-sensitively.
pub const COLOR_OPTION: &str = "Color";

/// One entry in the size selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeEntry {
    pub label: String,
    pub available: bool,
}

/// One swatch in the color selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: String,
    pub handle: String,
    pub swatch: String,
    pub selected: bool,
}

/// Display data for the selected variant of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariant {
    pub variant_id: Option<VariantGid>,
    pub variant_title: String,
    pub unit_price: Option<Price>,
    pub compare_at: Option<Price>,
    /// Integer-rounded price, e.g. `$66`. Empty when the product has no variants.
    pub price: String,
    pub compare_at_price: Option<String>,
    pub discount_percent: Option<i64>,
    pub selected_color: String,
    pub selected_size: Option<String>,
    pub sizes: Vec<SizeEntry>,
    pub colors: Vec<ColorEntry>,
    pub image_url: Option<String>,
}

impl ResolvedVariant {
    /// Discount label, e.g. `40% off`.
    #[must_use]
    pub fn discount_label(&self) -> Option<String> {
        self.discount_percent.map(|pct| format!("{pct}% off"))
    }

    #[must_use]
    pub fn has_size_selector(&self) -> bool {
        !self.sizes.is_empty()
    }

    #[must_use]
    pub fn is_selected_size(&self, label: &str) -> bool {
        self.selected_size.as_deref() == Some(label)
    }
}

/// Resolve display data for `selected`, or for the default variant when
/// `selected` is `None` or unknown.
///
/// The default variant is the first available one, else the first one.
#[must_use]
pub fn resolve(product: &Product, selected: Option<&VariantGid>) -> ResolvedVariant {
    let variant = selected
        .and_then(|id| product.variant(id))
        .or_else(|| product.first_available_variant());

    let selected_color = variant
        .and_then(|v| v.option_value(COLOR_OPTION))
        .unwrap_or_default()
        .to_string();

    let compare_at = variant
        .and_then(|v| v.compare_at_price)
        .filter(|p| !p.is_zero());
    let unit_price = variant.map(|v| v.price);

    ResolvedVariant {
        variant_id: variant.map(|v| v.id.clone()),
        variant_title: variant.map(|v| v.title.clone()).unwrap_or_default(),
        unit_price,
        compare_at,
        price: unit_price.map(|p| p.display_rounded()).unwrap_or_default(),
        compare_at_price: compare_at.map(|p| p.display_rounded()),
        discount_percent: unit_price
            .zip(compare_at)
            .and_then(|(price, compare)| price.discount_percent(&compare)),
        selected_size: variant.and_then(|v| selected_size(product, v)),
        sizes: size_entries(product),
        colors: color_entries(product, &selected_color),
        selected_color,
        image_url: variant
            .and_then(|v| v.image.as_ref())
            .map(|i| i.url.clone())
            .or_else(|| product.images.first().cloned()),
    }
}

/// First option whose name contains "size", case-insensitively.
fn size_option_name(product: &Product) -> Option<&str> {
    product
        .options
        .iter()
        .find(|opt| opt.name.to_lowercase().contains("size"))
        .map(|opt| opt.name.as_str())
}

fn selected_size(product: &Product, variant: &ProductVariant) -> Option<String> {
    size_option_name(product)
        .and_then(|name| variant.option_value(name))
        .map(String::from)
}

fn size_entries(product: &Product) -> Vec<SizeEntry> {
    let Some(name) = size_option_name(product) else {
        return Vec::new();
    };
    product
        .option(name)
        .map(|opt| {
            opt.values
                .iter()
                .map(|value| SizeEntry {
                    label: value.name.clone(),
                    available: value
                        .first_selectable_variant
                        .as_ref()
                        .is_some_and(|v| v.available_for_sale),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn color_entries(product: &Product, selected_color: &str) -> Vec<ColorEntry> {
    product
        .option(COLOR_OPTION)
        .map(|opt| {
            opt.values
                .iter()
                .map(|value| ColorEntry {
                    handle: format!("{}-{}", product.handle, slugify(&value.name)),
                    swatch: value
                        .swatch
                        .as_ref()
                        .and_then(|s| s.color.clone())
                        .filter(|c| !c.trim().is_empty())
                        .unwrap_or_else(|| FALLBACK_SWATCH_GRADIENT.to_string()),
                    selected: value.name == selected_color,
                    name: value.name.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}
