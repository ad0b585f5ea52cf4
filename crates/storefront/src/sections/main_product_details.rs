//! Main product details section.
//!
//! Breadcrumb, image gallery, info panel (price, rating, color swatches),
//! size grid with the fit guide trigger, and the add-to-cart action that
//! opens the cart drawer. Builder previews without a product render a preset
//! mock slipper.

use askama::Template;
use askama_web::WebTemplate;
use rust_decimal::Decimal;
use woolstep_core::{CurrencyCode, PageType, Preset, Price, ProductGid, SectionSchema, VariantGid};

use super::carousel::CarouselState;
use super::cart_drawer::CartSnapshot;
use super::common::{SectionLayout, Settings, absolute_url, background_inputs, layout_inputs};
use super::variant::{self, ResolvedVariant};
use crate::shopify::{
    OptionValue, Product, ProductOption, ProductVariant, SelectedOption, Swatch, VariantRef,
};

pub const SECTION_TYPE: &str = "main-product-details";
pub const BREADCRUMB_TYPE: &str = "mpd--breadcrumb";
pub const GALLERY_TYPE: &str = "mpd--gallery";

/// Handle of the preset mock product.
pub const MOCK_HANDLE: &str = "womens-kiwi-slipper";
const MOCK_IMAGES: &[&str] = &[
    "//www.allbirds.com/cdn/shop/files/A12142_25Q4_Kiwi-Slipper-Dark-Camel-Stony-Cream-Sole_PDP_LEFT.png?v=1761687976&width=1024",
    "//www.allbirds.com/cdn/shop/files/A12142_25Q4_Kiwi-Slipper-Dark-Camel-Stony-Cream-Sole_PDP_BACK.png?v=1761687975&width=1024",
    "//www.allbirds.com/cdn/shop/files/A12142_25Q4_Kiwi-Slipper-Dark-Camel-Stony-Cream-Sole_PDP_TD_49fe6f45-b3d5-44d6-9ba0-836f9c849d04.png?v=1761687976&width=1024",
    "//www.allbirds.com/cdn/shop/files/A12142_25Q4_Kiwi-Slipper-Dark-Camel-Stony-Cream-Sole_PDP_SOLE.png?v=1761687975&width=1024",
    "//www.allbirds.com/cdn/shop/files/A12142_25Q4_Kiwi-Slipper-Dark-Camel-Stony-Cream-Sole_PDP_PAIR_3Q.png?v=1761687976&width=1024",
];
const DARK_CAMEL_SWATCH: &str =
    "linear-gradient(135deg, rgb(179, 139, 88) 50%, rgb(229, 220, 194) 50%)";
const MOCK_SOLE: &str = "Stony Cream Sole";

// =============================================================================
// Schemas
// =============================================================================

#[must_use]
pub fn schema() -> SectionSchema {
    SectionSchema::new(SECTION_TYPE, "Main Product Details")
        .child_types(&[BREADCRUMB_TYPE, GALLERY_TYPE])
        .group("Layout", layout_inputs())
        .group("Background", background_inputs(false))
        .presets(Preset::new())
}

#[must_use]
pub fn breadcrumb_schema() -> SectionSchema {
    SectionSchema::new(BREADCRUMB_TYPE, "Breadcrumb").enabled_on(&[PageType::Product])
}

#[must_use]
pub fn gallery_schema() -> SectionSchema {
    SectionSchema::new(GALLERY_TYPE, "Product Gallery").enabled_on(&[PageType::Product])
}

// =============================================================================
// Mock product
// =============================================================================

/// Preset product shown in builder previews.
#[must_use]
pub fn mock_product() -> Product {
    let usd = |dollars: i64| Price::new(Decimal::from(dollars), CurrencyCode::USD);
    let variant_id = VariantGid::from_numeric(42_000_000_011);

    let sizes = ["5", "6", "7", "8", "9", "10", "11"];
    let size_values = sizes
        .iter()
        .map(|size| OptionValue {
            name: (*size).to_string(),
            swatch: None,
            first_selectable_variant: (*size == "11").then(|| VariantRef {
                id: variant_id.clone(),
                available_for_sale: true,
            }),
        })
        .collect();

    Product {
        id: ProductGid::from_numeric(7_205_168_250_960),
        handle: MOCK_HANDLE.to_string(),
        title: "Women's Kiwi Slipper".to_string(),
        description: "Elevated everyday slipper that proves comfort goes with everything."
            .to_string(),
        options: vec![
            ProductOption {
                name: "Color".to_string(),
                values: vec![
                    OptionValue {
                        name: "Medium Grey".to_string(),
                        swatch: None,
                        first_selectable_variant: None,
                    },
                    OptionValue {
                        name: "Dark Camel".to_string(),
                        swatch: Some(Swatch {
                            color: Some(DARK_CAMEL_SWATCH.to_string()),
                        }),
                        first_selectable_variant: Some(VariantRef {
                            id: variant_id.clone(),
                            available_for_sale: true,
                        }),
                    },
                ],
            },
            ProductOption {
                name: "Size".to_string(),
                values: size_values,
            },
        ],
        variants: vec![ProductVariant {
            id: variant_id,
            title: "Dark Camel / 11".to_string(),
            available_for_sale: true,
            price: usd(66),
            compare_at_price: Some(usd(95)),
            selected_options: vec![
                SelectedOption {
                    name: "Color".to_string(),
                    value: "Dark Camel".to_string(),
                },
                SelectedOption {
                    name: "Size".to_string(),
                    value: "11".to_string(),
                },
            ],
            image: None,
        }],
        images: MOCK_IMAGES.iter().map(|url| absolute_url(url)).collect(),
    }
}

// =============================================================================
// View
// =============================================================================

/// Star rating shown under the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    pub stars: u8,
    pub review_count: u32,
}

/// Everything the product panel renders.
#[derive(Debug, Clone)]
pub struct ProductDetails {
    pub handle: String,
    pub title: String,
    pub description: String,
    pub variant: ResolvedVariant,
    pub rating: Option<Rating>,
    pub images: Vec<String>,
    pub cart: Option<CartSnapshot>,
}

impl ProductDetails {
    /// Details for `product` with `selected` (or the default variant).
    #[must_use]
    pub fn from_product(product: &Product, selected: Option<&VariantGid>) -> Self {
        let variant = variant::resolve(product, selected);
        let cart = variant.unit_price.map(|price| CartSnapshot {
            title: product.title.clone(),
            variant: if variant.selected_color.is_empty() {
                variant.variant_title.clone()
            } else {
                variant.selected_color.clone()
            },
            size: variant.selected_size.clone().unwrap_or_default(),
            price: price.amount.to_string(),
            compare_at_price: variant.compare_at.map(|p| p.amount.to_string()),
            currency: Some(price.currency_code.code().to_string()),
            image: variant
                .image_url
                .clone()
                .or_else(|| product.images.first().cloned())
                .unwrap_or_default(),
            quantity: 1,
        });

        Self {
            handle: product.handle.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            variant,
            rating: None,
            images: product.images.clone(),
            cart,
        }
    }

    /// Details for the preset mock product.
    #[must_use]
    pub fn mock() -> Self {
        let mut details = Self::from_product(&mock_product(), None);
        details.rating = Some(Rating {
            stars: 5,
            review_count: 2,
        });
        if let Some(cart) = details.cart.as_mut() {
            cart.variant = format!("{} ({MOCK_SOLE})", details.variant.selected_color);
        }
        details
    }

    /// Text on the add-to-cart buttons.
    #[must_use]
    pub fn add_to_cart_label(&self) -> String {
        if self.variant.price.is_empty() {
            "Add to Cart".to_string()
        } else {
            format!("Add to Cart - {}", self.variant.price)
        }
    }
}

/// Image gallery fragment; also embedded in the full section.
#[derive(Template, WebTemplate)]
#[template(path = "sections/product_gallery.html")]
pub struct ProductGalleryTemplate {
    pub title: String,
    pub handle: String,
    pub carousel: CarouselState,
    /// Offset to scroll to, when the request supplied the slide width.
    pub scroll_offset: Option<u32>,
}

impl ProductGalleryTemplate {
    #[must_use]
    pub fn new(details: &ProductDetails, carousel: CarouselState) -> Self {
        Self {
            title: details.title.clone(),
            handle: details.handle.clone(),
            carousel,
            scroll_offset: None,
        }
    }
}

/// Full main product details section.
#[derive(Template, WebTemplate)]
#[template(path = "sections/main_product_details.html")]
pub struct MainProductDetailsTemplate {
    pub layout: SectionLayout,
    pub details: ProductDetails,
    pub gallery: ProductGalleryTemplate,
    pub free_shipping_label: String,
    pub sizing_note: &'static str,
}

impl MainProductDetailsTemplate {
    #[must_use]
    pub fn new(
        settings: &Settings,
        details: ProductDetails,
        free_shipping_threshold: Decimal,
    ) -> Self {
        let gallery =
            ProductGalleryTemplate::new(&details, CarouselState::new(details.images.clone()));
        let threshold = Price::new(free_shipping_threshold, CurrencyCode::USD);
        Self {
            layout: SectionLayout::from_settings(settings),
            free_shipping_label: format!(
                "Free Shipping on Orders over {}",
                threshold.display_rounded()
            ),
            sizing_note: super::fit_guide::SIZING_NOTE,
            details,
            gallery,
        }
    }
}
