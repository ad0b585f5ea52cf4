//! Featured products carousel (`featured-products1`) and its product cards.

use askama::Template;
use askama_web::WebTemplate;
use woolstep_core::{InputSetting, InputType, Preset, PresetChild, ProductGid, SectionSchema};

use super::carousel::StepScroller;
use super::common::{SectionLayout, Settings, background_inputs, layout_inputs};
use super::variant::COLOR_OPTION;
use crate::filters;
use crate::shopify::{Locale, Product, StorefrontClient};

pub const SECTION_TYPE: &str = "featured-products1";
pub const CARD_TYPE: &str = "featured-product1--card";

pub const HEADER_LABEL: &str = "Explore More";
pub const PLACEHOLDER_TEXT: &str = "Select a product";
const FALLBACK_TITLE: &str = "Product Title";
const FALLBACK_SWATCH: &str = "rgb(128, 128, 128)";

#[must_use]
pub fn schema() -> SectionSchema {
    SectionSchema::new(SECTION_TYPE, "Featured Products1")
        .child_types(&[CARD_TYPE])
        .group("Layout", layout_inputs())
        .group("Background", background_inputs(true))
        .presets(Preset::new().child(PresetChild::new(CARD_TYPE)))
}

#[must_use]
pub fn card_schema() -> SectionSchema {
    SectionSchema::new(CARD_TYPE, "Product Card").group(
        "Product",
        vec![InputSetting::new(InputType::Product, "product", "Select Product")],
    )
}

// =============================================================================
// Card
// =============================================================================

/// Display data for one product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub title: String,
    pub variant_label: String,
    pub href: String,
    pub image_url: String,
    pub sale_price: String,
    pub original_price: Option<String>,
    pub swatch_color: String,
}

impl ProductCard {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        let variant = product.first_available_variant();
        let color_value = product
            .option(COLOR_OPTION)
            .and_then(|opt| opt.values.first());
        let title = if product.title.trim().is_empty() {
            FALLBACK_TITLE.to_string()
        } else {
            product.title.clone()
        };

        Self {
            title,
            variant_label: color_value
                .map(|v| v.name.clone())
                .filter(|name| !name.is_empty())
                .or_else(|| variant.map(|v| v.title.clone()))
                .unwrap_or_default(),
            href: format!("/products/{}", product.handle),
            image_url: variant
                .and_then(|v| v.image.as_ref())
                .map(|i| i.url.clone())
                .or_else(|| product.images.first().cloned())
                .unwrap_or_default(),
            sale_price: variant
                .map(|v| v.price.display_rounded())
                .unwrap_or_default(),
            original_price: variant
                .and_then(|v| v.compare_at_price)
                .filter(|p| !p.is_zero())
                .map(|p| p.display_rounded()),
            swatch_color: color_value
                .and_then(|v| v.swatch.as_ref())
                .and_then(|s| s.color.clone())
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_SWATCH.to_string()),
        }
    }

    /// Image alt and swatch title, e.g. `Runner - Natural Black`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.title, self.variant_label)
    }
}

/// A card, or the placeholder shown until a product is picked and found.
#[derive(Template, WebTemplate)]
#[template(path = "sections/featured_product_card.html")]
pub struct FeaturedProductCardTemplate {
    pub card: Option<ProductCard>,
    pub placeholder: &'static str,
    pub card_width: u32,
    pub slot: String,
}

impl FeaturedProductCardTemplate {
    #[must_use]
    pub fn new(card: Option<ProductCard>, slot: impl Into<String>) -> Self {
        Self {
            card,
            placeholder: PLACEHOLDER_TEXT,
            card_width: StepScroller::CARD_WIDTH,
            slot: slot.into(),
        }
    }
}

/// Load the card for the `product` setting.
///
/// A missing or malformed id, an absent product, and a failed query all
/// render the placeholder.
pub async fn load_card(
    client: &StorefrontClient,
    locale: &Locale,
    settings: &Settings,
    slot: &str,
) -> FeaturedProductCardTemplate {
    let Some(raw_id) = settings.resource_id("product") else {
        return FeaturedProductCardTemplate::new(None, slot);
    };

    let id = match ProductGid::parse(&raw_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid product id");
            return FeaturedProductCardTemplate::new(None, slot);
        }
    };

    let card = match client.product_by_id(&id, locale).await {
        Ok(product) => product.as_ref().map(ProductCard::from_product),
        Err(e) => {
            tracing::warn!(error = %e, product_id = %id, "Failed to load featured product");
            None
        }
    };
    FeaturedProductCardTemplate::new(card, slot)
}

// =============================================================================
// Section
// =============================================================================

/// Featured products row with fixed-step scrolling.
#[derive(Template, WebTemplate)]
#[template(path = "sections/featured_products.html")]
pub struct FeaturedProductsTemplate {
    pub layout: SectionLayout,
    pub header_label: &'static str,
    pub scroller: StepScroller,
    pub step: u32,
    pub cards: Vec<FeaturedProductCardTemplate>,
}

impl FeaturedProductsTemplate {
    #[must_use]
    pub fn new(settings: &Settings, cards: Vec<FeaturedProductCardTemplate>) -> Self {
        Self {
            layout: SectionLayout::from_settings(settings),
            header_label: HEADER_LABEL,
            scroller: StepScroller::new(cards.len()),
            step: StepScroller::STEP,
            cards,
        }
    }
}

/// Load every card child of a preset.
pub async fn load_section(
    client: &StorefrontClient,
    locale: &Locale,
    preset: &Preset,
) -> FeaturedProductsTemplate {
    let mut cards = Vec::new();
    for (index, child) in preset
        .children
        .iter()
        .filter(|c| c.kind == CARD_TYPE)
        .enumerate()
    {
        let slot = format!("featured-card-{index}");
        cards.push(load_card(client, locale, &Settings::from_child(child), &slot).await);
    }
    FeaturedProductsTemplate::new(&Settings::from_preset(preset), cards)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::sections::variant::tests::sample_product;

    #[test]
    fn test_card_from_product() {
        let card = ProductCard::from_product(&sample_product());
        assert_eq!(card.title, "Women's Kiwi Slipper");
        assert_eq!(card.variant_label, "Medium Grey");
        assert_eq!(card.href, "/products/womens-kiwi-slipper");
        assert_eq!(card.image_url, "https://cdn.shopify.com/kiwi.png");
        assert_eq!(card.sale_price, "$66");
        assert_eq!(card.original_price.as_deref(), Some("$110"));
        assert_eq!(card.swatch_color, FALLBACK_SWATCH);
    }

    #[test]
    fn test_card_fallbacks() {
        let mut product = sample_product();
        product.title = String::new();
        product.options.clear();
        product.images.clear();
        for v in &mut product.variants {
            v.compare_at_price = None;
        }
        let card = ProductCard::from_product(&product);
        assert_eq!(card.title, FALLBACK_TITLE);
        assert_eq!(card.variant_label, "Dark Camel / 11");
        assert_eq!(card.image_url, "");
        assert!(card.original_price.is_none());
        assert_eq!(card.swatch_color, FALLBACK_SWATCH);
    }

    #[test]
    fn test_card_uses_first_color_swatch() {
        let mut product = sample_product();
        product.options[0].values.swap(0, 1);
        let card = ProductCard::from_product(&product);
        assert_eq!(card.variant_label, "Dark Camel");
        assert_eq!(card.swatch_color, "#b38b58");
    }

    #[test]
    fn test_placeholder_renders() {
        let html = FeaturedProductCardTemplate::new(None, "featured-card-0")
            .render()
            .unwrap();
        assert!(html.contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn test_schema_presets_one_card() {
        let section = schema();
        assert!(section.accepts_child(CARD_TYPE));
        let presets = section.presets.unwrap();
        assert_eq!(presets.children.len(), 1);
        assert_eq!(presets.children[0].kind, CARD_TYPE);
        assert!(card_schema().input("product").is_some());
    }

    #[test]
    fn test_section_renders_header_and_cards() {
        let card = FeaturedProductCardTemplate::new(
            Some(ProductCard::from_product(&sample_product())),
            "featured-card-0",
        );
        let html = FeaturedProductsTemplate::new(&Settings::new(), vec![card])
            .render()
            .unwrap();
        assert!(html.contains(HEADER_LABEL));
        assert!(html.contains("/products/womens-kiwi-slipper"));
        assert!(html.contains("data-step=\"420\""));
    }
}
