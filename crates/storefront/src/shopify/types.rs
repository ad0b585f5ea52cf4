//! Domain types for Shopify Storefront API.
//!
//! These types are the explicit, validated shape of the product and
//! collection payloads. Raw GraphQL responses are converted into them at the
//! fetch boundary (see `storefront::conversions`), so sections never make
//! runtime assumptions about loosely-shaped JSON.

use serde::{Deserialize, Serialize};
use woolstep_core::{CollectionGid, Price, ProductGid, VariantGid};

// =============================================================================
// Locale
// =============================================================================

/// Buyer context passed to every Storefront query via `@inContext`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// ISO 3166-1 alpha-2 country code (e.g., `US`).
    pub country: String,
    /// ISO 639-1 language code, uppercase (e.g., `EN`).
    pub language: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            country: "US".to_string(),
            language: "EN".to_string(),
        }
    }
}

// =============================================================================
// Image Types
// =============================================================================

/// Product, variant, or collection image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
    /// Image width in pixels.
    pub width: Option<i64>,
    /// Image height in pixels.
    pub height: Option<i64>,
}

impl Image {
    /// Image with only a URL.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt_text: None,
            width: None,
            height: None,
        }
    }
}

// =============================================================================
// Product Types
// =============================================================================

/// Selected option on a product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name (e.g., "Size", "Color").
    pub name: String,
    /// Selected value (e.g., "11", "Dark Camel").
    pub value: String,
}

/// Swatch attached to an option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    /// CSS color (e.g., `#b38b58`).
    pub color: Option<String>,
}

/// Reference to the first variant that selects an option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRef {
    /// Variant ID.
    pub id: VariantGid,
    /// Whether that variant is available for sale.
    pub available_for_sale: bool,
}

/// A single value of a product option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValue {
    /// Value name (e.g., "Dark Camel").
    pub name: String,
    /// Optional swatch.
    pub swatch: Option<Swatch>,
    /// First variant that selects this value, if any is selectable.
    pub first_selectable_variant: Option<VariantRef>,
}

/// Product option definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Option name (e.g., "Size").
    pub name: String,
    /// Values in merchant-defined order.
    pub values: Vec<OptionValue>,
}

/// A product variant (specific combination of options).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID.
    pub id: VariantGid,
    /// Variant title (combination of option values).
    pub title: String,
    /// Whether this variant is available for sale.
    pub available_for_sale: bool,
    /// Current price.
    pub price: Price,
    /// Compare-at price (original price if on sale).
    pub compare_at_price: Option<Price>,
    /// Selected options for this variant.
    pub selected_options: Vec<SelectedOption>,
    /// Variant image.
    pub image: Option<Image>,
}

impl ProductVariant {
    /// Value this variant selects for the named option.
    #[must_use]
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.selected_options
            .iter()
            .find(|opt| opt.name == name)
            .map(|opt| opt.value.as_str())
    }
}

/// A product in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductGid,
    /// URL handle.
    pub handle: String,
    /// Product title.
    pub title: String,
    /// Plain text description.
    pub description: String,
    /// Product options.
    pub options: Vec<ProductOption>,
    /// Product variants.
    pub variants: Vec<ProductVariant>,
    /// Image URLs from `MediaImage` media, in gallery order.
    pub images: Vec<String>,
}

impl Product {
    /// First available variant, falling back to the first variant.
    #[must_use]
    pub fn first_available_variant(&self) -> Option<&ProductVariant> {
        self.variants
            .iter()
            .find(|v| v.available_for_sale)
            .or_else(|| self.variants.first())
    }

    /// Variant by ID.
    #[must_use]
    pub fn variant(&self, id: &VariantGid) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == id)
    }

    /// Option whose name matches exactly.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&ProductOption> {
        self.options.iter().find(|opt| opt.name == name)
    }
}

// =============================================================================
// Collection Types
// =============================================================================

/// A collection of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection ID.
    pub id: CollectionGid,
    /// URL handle.
    pub handle: String,
    /// Collection title.
    pub title: String,
    /// Collection image.
    pub image: Option<Image>,
}
