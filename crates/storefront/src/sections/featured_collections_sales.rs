//! Featured collection sales grid.
//!
//! A two/four column grid of sales items. Each item shows a collection image
//! (or a fallback image), swaps in an optional hover image, and carries a
//! default button plus a set of hover buttons.

use askama::Template;
use askama_web::WebTemplate;
use woolstep_core::{CollectionGid, InputSetting, InputType, Preset, PresetChild, SectionSchema};

use super::common::{
    ButtonBlock, PLACEHOLDER_BANNER, SectionLayout, Settings, background_inputs, gap_class,
    layout_inputs,
};
use super::ui_state::HoverState;
use crate::shopify::{Collection, Image, Locale, StorefrontClient};

pub const SECTION_TYPE: &str = "featured-collections-sales";
pub const ITEM_TYPE: &str = "featured-collections-sales-item";
pub const DEFAULT_BUTTON_TYPE: &str = "default-button";
pub const HOVER_BUTTONS_TYPE: &str = "hover-buttons";

const DEFAULT_GAP: i64 = 10;

// =============================================================================
// Schemas
// =============================================================================

#[must_use]
pub fn schema() -> SectionSchema {
    let mut presets = Preset::new();
    for _ in 0..4 {
        presets = presets.child(PresetChild::new(ITEM_TYPE));
    }

    SectionSchema::new(SECTION_TYPE, "Featured Collection Sales")
        .child_types(&[ITEM_TYPE])
        .group("Layout", layout_inputs())
        .group("Background", background_inputs(false))
        .presets(presets)
}

#[must_use]
pub fn item_schema() -> SectionSchema {
    SectionSchema::new(ITEM_TYPE, "Sales Item")
        .child_types(&[DEFAULT_BUTTON_TYPE, HOVER_BUTTONS_TYPE])
        .group(
            "Collection",
            vec![InputSetting::new(
                InputType::Collection,
                "collection",
                "Select Collection",
            )],
        )
        .group(
            "Images",
            vec![
                InputSetting::new(InputType::Image, "mainImage", "Fallback Image")
                    .help_text("Used if collection has no image"),
                InputSetting::new(InputType::Image, "hoverImage", "Hover Image (optional)"),
                InputSetting::new(InputType::Select, "imageAspectRatio", "Image aspect ratio")
                    .options(&[
                        ("adapt", "Adapt to image"),
                        ("1/1", "Square (1/1)"),
                        ("3/4", "Portrait (3/4)"),
                        ("4/3", "Landscape (4/3)"),
                        ("16/9", "Widescreen (16/9)"),
                    ])
                    .default_value("adapt"),
            ],
        )
        .presets(item_preset())
}

/// Preset content for a new sales item.
#[must_use]
pub fn item_preset() -> Preset {
    Preset::new()
        .setting("mainImage", PLACEHOLDER_BANNER)
        .child(
            PresetChild::new(DEFAULT_BUTTON_TYPE).child(
                PresetChild::new("button")
                    .setting("text", "Button Default")
                    .setting("variant", "circle"),
            ),
        )
        .child(
            PresetChild::new(HOVER_BUTTONS_TYPE)
                .child(
                    PresetChild::new("button")
                        .setting("text", "Shop Men")
                        .setting("variant", "circle")
                        .setting("to", "/collections/mens"),
                )
                .child(
                    PresetChild::new("button")
                        .setting("text", "Shop Women")
                        .setting("variant", "circle")
                        .setting("to", "/collections/womens"),
                ),
        )
}

#[must_use]
pub fn default_button_schema() -> SectionSchema {
    SectionSchema::new(DEFAULT_BUTTON_TYPE, "Default Button")
        .limit(1)
        .child_types(&["button"])
}

#[must_use]
pub fn hover_buttons_schema() -> SectionSchema {
    SectionSchema::new(HOVER_BUTTONS_TYPE, "Hover Buttons")
        .limit(1)
        .child_types(&["button"])
}

// =============================================================================
// Sales item
// =============================================================================

/// Aspect ratio setting of a sales item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Adapt,
    Square,
    Portrait,
    Landscape,
    Widescreen,
}

impl AspectRatio {
    #[must_use]
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some("1/1") => Self::Square,
            Some("3/4") => Self::Portrait,
            Some("4/3") => Self::Landscape,
            Some("16/9") => Self::Widescreen,
            _ => Self::Adapt,
        }
    }

    /// CSS `aspect-ratio` value for `image`. `Adapt` uses the image's own
    /// dimensions and falls back to square when they are unknown.
    #[must_use]
    pub fn css(self, image: Option<&Image>) -> String {
        match self {
            Self::Square => "1/1".to_string(),
            Self::Portrait => "3/4".to_string(),
            Self::Landscape => "4/3".to_string(),
            Self::Widescreen => "16/9".to_string(),
            Self::Adapt => match image.map(|i| (i.width, i.height)) {
                Some((Some(w), Some(h))) if w > 0 && h > 0 => format!("{w}/{h}"),
                _ => "1/1".to_string(),
            },
        }
    }
}

/// One grid cell.
#[derive(Template, WebTemplate)]
#[template(path = "sections/sales_item.html")]
pub struct SalesItemTemplate {
    pub image: Option<Image>,
    pub alt: String,
    pub hover_image: Option<Image>,
    pub hover: HoverState,
    pub aspect_ratio: String,
    pub default_buttons: Vec<ButtonBlock>,
    pub hover_buttons: Vec<ButtonBlock>,
}

impl SalesItemTemplate {
    /// Build an item from its settings, the loaded collection and the
    /// buttons of its `default-button` / `hover-buttons` children.
    #[must_use]
    pub fn new(
        settings: &Settings,
        collection: Option<&Collection>,
        default_buttons: Vec<ButtonBlock>,
        hover_buttons: Vec<ButtonBlock>,
        hover: HoverState,
    ) -> Self {
        let image = collection
            .and_then(|c| c.image.clone())
            .or_else(|| settings.image("mainImage"));
        let aspect_ratio = AspectRatio::from_setting(settings.text("imageAspectRatio"));

        Self {
            aspect_ratio: aspect_ratio.css(image.as_ref()),
            alt: image
                .as_ref()
                .and_then(|i| i.alt_text.clone())
                .or_else(|| collection.map(|c| c.title.clone()))
                .unwrap_or_default(),
            image,
            hover_image: settings.image("hoverImage"),
            hover,
            default_buttons,
            hover_buttons,
        }
    }

    /// Class for the hover image layer.
    #[must_use]
    pub const fn hover_class(&self) -> &'static str {
        if self.hover.is_hovered() {
            "opacity-100"
        } else {
            "opacity-0 group-hover:opacity-100"
        }
    }
}

/// Buttons nested in the first child of `kind`.
#[must_use]
pub fn buttons_for(children: &[PresetChild], kind: &str) -> Vec<ButtonBlock> {
    children
        .iter()
        .find(|c| c.kind == kind)
        .map(ButtonBlock::from_wrapper)
        .unwrap_or_default()
}

/// Load the collection for a sales item.
///
/// Absent ids, absent collections, and failed queries all fall back to the
/// item's fallback image.
pub async fn load_collection(
    client: &StorefrontClient,
    locale: &Locale,
    settings: &Settings,
) -> Option<Collection> {
    let raw_id = settings.resource_id("collection")?;
    let id = match CollectionGid::parse(&raw_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid collection id");
            return None;
        }
    };

    match client.collection_by_id(&id, locale).await {
        Ok(collection) => collection,
        Err(e) => {
            tracing::warn!(error = %e, collection_id = %id, "Failed to load sales collection");
            None
        }
    }
}

/// Load a sales item described by a preset child.
pub async fn load_item(
    client: &StorefrontClient,
    locale: &Locale,
    child: &PresetChild,
    hover: HoverState,
) -> SalesItemTemplate {
    let defaults = item_preset();
    let settings = merged_settings(&defaults, child);
    let collection = load_collection(client, locale, &settings).await;

    let children = if child.children.is_empty() {
        &defaults.children
    } else {
        &child.children
    };

    SalesItemTemplate::new(
        &settings,
        collection.as_ref(),
        buttons_for(children, DEFAULT_BUTTON_TYPE),
        buttons_for(children, HOVER_BUTTONS_TYPE),
        hover,
    )
}

/// Item settings over the item preset's settings.
fn merged_settings(defaults: &Preset, child: &PresetChild) -> Settings {
    let mut settings = Settings::from_preset(defaults);
    for (name, value) in &child.settings {
        settings = settings.with(name, value.clone());
    }
    settings
}

// =============================================================================
// Section
// =============================================================================

#[derive(Template, WebTemplate)]
#[template(path = "sections/featured_collections_sales.html")]
pub struct FeaturedCollectionsSalesTemplate {
    pub layout: SectionLayout,
    pub gap_class: &'static str,
    pub items: Vec<SalesItemTemplate>,
}

impl FeaturedCollectionsSalesTemplate {
    #[must_use]
    pub fn new(settings: &Settings, items: Vec<SalesItemTemplate>) -> Self {
        Self {
            layout: SectionLayout::from_settings(settings),
            gap_class: gap_class(settings.number("gap"), DEFAULT_GAP),
            items,
        }
    }
}

/// Load every item of a preset.
pub async fn load_section(
    client: &StorefrontClient,
    locale: &Locale,
    preset: &Preset,
) -> FeaturedCollectionsSalesTemplate {
    let mut items = Vec::new();
    for child in preset.children.iter().filter(|c| c.kind == ITEM_TYPE) {
        items.push(load_item(client, locale, child, HoverState::default()).await);
    }
    FeaturedCollectionsSalesTemplate::new(&Settings::from_preset(preset), items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn collection(image: Option<Image>) -> Collection {
        Collection {
            id: CollectionGid::parse("99").unwrap(),
            handle: "sale".to_string(),
            title: "Sale".to_string(),
            image,
        }
    }

    fn sized(url: &str, w: i64, h: i64) -> Image {
        Image {
            url: url.to_string(),
            alt_text: None,
            width: Some(w),
            height: Some(h),
        }
    }

    #[test]
    fn test_collection_image_wins_over_fallback() {
        let settings = Settings::new().with("mainImage", "https://cdn.shopify.com/fallback.jpg");
        let coll = collection(Some(sized("https://cdn.shopify.com/c.jpg", 800, 1000)));
        let item = SalesItemTemplate::new(
            &settings,
            Some(&coll),
            Vec::new(),
            Vec::new(),
            HoverState::default(),
        );
        assert_eq!(item.image.unwrap().url, "https://cdn.shopify.com/c.jpg");
        assert_eq!(item.aspect_ratio, "800/1000");
        assert_eq!(item.alt, "Sale");
    }

    #[test]
    fn test_fallback_image_when_collection_has_none() {
        let settings = Settings::new().with("mainImage", "https://cdn.shopify.com/fallback.jpg");
        let item = SalesItemTemplate::new(
            &settings,
            Some(&collection(None)),
            Vec::new(),
            Vec::new(),
            HoverState::default(),
        );
        assert_eq!(item.image.unwrap().url, "https://cdn.shopify.com/fallback.jpg");
        assert_eq!(item.aspect_ratio, "1/1");
    }

    #[test]
    fn test_fixed_aspect_ratio() {
        let settings = Settings::new()
            .with("mainImage", "https://cdn.shopify.com/fallback.jpg")
            .with("imageAspectRatio", "16/9");
        let item = SalesItemTemplate::new(
            &settings,
            None,
            Vec::new(),
            Vec::new(),
            HoverState::default(),
        );
        assert_eq!(item.aspect_ratio, "16/9");
    }

    #[test]
    fn test_hover_class() {
        let mut hover = HoverState::default();
        hover.enter();
        let item = SalesItemTemplate::new(&Settings::new(), None, Vec::new(), Vec::new(), hover);
        assert_eq!(item.hover_class(), "opacity-100");
    }

    #[test]
    fn test_preset_buttons() {
        let preset = item_preset();
        let defaults = buttons_for(&preset.children, DEFAULT_BUTTON_TYPE);
        let hovers = buttons_for(&preset.children, HOVER_BUTTONS_TYPE);
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].label, "Button Default");
        assert_eq!(defaults[0].variant, "circle");
        assert_eq!(hovers.len(), 2);
        assert_eq!(hovers[1].href, "/collections/womens");
    }

    #[test]
    fn test_schemas() {
        let section = schema();
        assert_eq!(section.presets.as_ref().unwrap().children.len(), 4);
        assert!(section.input("backgroundFor").is_none());
        assert_eq!(default_button_schema().limit, Some(1));
        assert!(hover_buttons_schema().accepts_child("button"));
        assert!(item_schema().accepts_child(HOVER_BUTTONS_TYPE));
    }

    #[test]
    fn test_section_gap_default() {
        let section = FeaturedCollectionsSalesTemplate::new(&Settings::new(), Vec::new());
        assert_eq!(section.gap_class, "gap-2.5");
        let html = section.render().unwrap();
        assert!(html.contains("grid-cols-2"));
    }

    #[test]
    fn test_item_renders_buttons() {
        let preset = item_preset();
        let item = SalesItemTemplate::new(
            &Settings::from_preset(&preset),
            None,
            buttons_for(&preset.children, DEFAULT_BUTTON_TYPE),
            buttons_for(&preset.children, HOVER_BUTTONS_TYPE),
            HoverState::default(),
        );
        let html = item.render().unwrap();
        assert!(html.contains("Button Default"));
        assert!(html.contains("/collections/mens"));
        assert!(html.contains(PLACEHOLDER_BANNER));
    }
}
