//! Featured gifts grid: a hero tile with text blocks and three gift cards.

use askama::Template;
use askama_web::WebTemplate;
use woolstep_core::{InputSetting, InputType, Preset, PresetChild, SectionSchema};

use super::common::{
    CONTENT_CHILD_TYPES, ContentBlock, PLACEHOLDER_BANNER, SectionLayout, Settings, layout_inputs,
};

pub const SECTION_TYPE: &str = "featured-gifts-grid";
pub const HERO_TYPE: &str = "featured-gifts-grid--hero";
pub const SQUARE_CARD_TYPE: &str = "featured-gifts-grid--square-card";
pub const TALL_CARD_TYPE: &str = "featured-gifts-grid--tall-card";

pub const DEFAULT_HERO_IMAGE: &str = "https://www.allbirds.com/cdn/shop/files/25Q4_Holiday_Site_ColorGrid-01_Desktop-Mobile_1x1_565e2d02-794c-483e-9d0b-15386857e996.jpg?v=1761846551&width=1024";

const FALLBACK_CARD_TITLE: &str = "Featured gift";

/// Default content for one gift card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDefaults {
    pub title: &'static str,
    pub image: &'static str,
    pub href: &'static str,
}

pub const DEFAULT_TOP_CARD: CardDefaults = CardDefaults {
    title: "Women's Breezer Mary Jane",
    image: "https://www.allbirds.com/cdn/shop/files/25Q4_Holiday_Batch2_Site_ColorGrid-02_Womens_MaryJaneDesktop-Mobile_1x1_b80f3bc7-419a-43e0-bab5-98db12f96994.jpg?v=1762910389&width=1024",
    href: "https://www.allbirds.com/products/womens-breezer-mary-jane",
};

pub const DEFAULT_TALL_CARD: CardDefaults = CardDefaults {
    title: "Allbirds Wool Slipper",
    image: "https://www.allbirds.com/cdn/shop/files/25Q4_Holiday_Site_ColorGrid-04_Desktop-Mobile_9x16_b29b3c9c-8ecc-43ea-9739-46c2df3a008a.jpg?v=1761846550&width=1024",
    href: "https://www.allbirds.com/products/allbirds-slipper",
};

pub const DEFAULT_BOTTOM_CARD: CardDefaults = CardDefaults {
    title: "Men's Wool Cruiser Mid Select",
    image: "https://www.allbirds.com/cdn/shop/files/25Q4_Holiday_Site_ColorGrid-05_Desktop-Mobile_1x1_151d7121-1b2d-455c-8a6d-df7a69a81d02.jpg?v=1761846550&width=1024",
    href: "https://www.allbirds.com/products/mens-wool-cruiser-mid-select",
};

// =============================================================================
// Schemas
// =============================================================================

#[must_use]
pub fn schema() -> SectionSchema {
    SectionSchema::new(SECTION_TYPE, "Featured Gifts Grid")
        .child_types(CONTENT_CHILD_TYPES)
        .group("Layout", layout_inputs())
        .group("Content", content_inputs())
        .presets(hero_children(Preset::new()).setting("heroImage", DEFAULT_HERO_IMAGE))
}

/// Setting names and labels for one card slot.
struct CardSlot {
    title_key: &'static str,
    image_key: &'static str,
    href_key: &'static str,
    labels: [&'static str; 3],
    defaults: CardDefaults,
    class: &'static str,
}

const CARD_SLOTS: [CardSlot; 3] = [
    CardSlot {
        title_key: "topCardTitle",
        image_key: "topCardImage",
        href_key: "topCardHref",
        labels: ["Top card title", "Top card image", "Top card link"],
        defaults: DEFAULT_TOP_CARD,
        class: "aspect-square",
    },
    CardSlot {
        title_key: "tallCardTitle",
        image_key: "tallCardImage",
        href_key: "tallCardHref",
        labels: ["Tall card title", "Tall card image", "Tall card link"],
        defaults: DEFAULT_TALL_CARD,
        class: "row-span-2 aspect-[1/2]",
    },
    CardSlot {
        title_key: "bottomCardTitle",
        image_key: "bottomCardImage",
        href_key: "bottomCardHref",
        labels: ["Bottom card title", "Bottom card image", "Bottom card link"],
        defaults: DEFAULT_BOTTOM_CARD,
        class: "aspect-square",
    },
];

fn content_inputs() -> Vec<InputSetting> {
    let mut inputs = vec![InputSetting::new(InputType::Image, "heroImage", "Hero image")];
    for slot in &CARD_SLOTS {
        let [title, image, link] = slot.labels;
        inputs.push(
            InputSetting::new(InputType::Text, slot.title_key, title)
                .default_value(slot.defaults.title),
        );
        inputs.push(
            InputSetting::new(InputType::Image, slot.image_key, image)
                .default_value(slot.defaults.image),
        );
        inputs.push(
            InputSetting::new(InputType::Url, slot.href_key, link)
                .default_value(slot.defaults.href),
        );
    }
    inputs
}

/// Text and button blocks shared by the grid and its hero block presets.
fn hero_children(preset: Preset) -> Preset {
    preset
        .child(
            PresetChild::new("subheading")
                .setting("content", "The Holiday Collection")
                .setting("color", "#ffffff")
                .setting("alignment", "center"),
        )
        .child(
            PresetChild::new("heading")
                .setting("content", "Feel Good Gifting")
                .setting("color", "#ffffff")
                .setting("size", "scale")
                .setting("minSize", 24)
                .setting("maxSize", 40),
        )
        .child(
            PresetChild::new("button")
                .setting("label", "Shop Gifts")
                .setting("href", "https://www.allbirds.com/pages/holiday-gift-guide")
                .setting("buttonStyle", "primary"),
        )
}

#[must_use]
pub fn hero_schema() -> SectionSchema {
    SectionSchema::new(HERO_TYPE, "Hero")
        .child_types(CONTENT_CHILD_TYPES)
        .group(
            "Hero",
            vec![
                InputSetting::new(InputType::Image, "heroImage", "Hero image")
                    .default_value(PLACEHOLDER_BANNER),
            ],
        )
        .presets(hero_children(Preset::new()).setting("heroImage", PLACEHOLDER_BANNER))
}

fn card_block_schema(kind: &'static str, title: &'static str) -> SectionSchema {
    SectionSchema::new(kind, title)
        .group(
            "Card",
            vec![
                InputSetting::new(InputType::Image, "cardImage", "Card image")
                    .default_value(PLACEHOLDER_BANNER),
                InputSetting::new(InputType::Url, "cardHref", "Card link")
                    .placeholder("https://example.com/product"),
                InputSetting::new(InputType::Text, "cardTitle", "Card title")
                    .placeholder("Product name"),
            ],
        )
        .presets(Preset::new().setting("cardImage", PLACEHOLDER_BANNER))
}

#[must_use]
pub fn square_card_schema() -> SectionSchema {
    card_block_schema(SQUARE_CARD_TYPE, "Square Card")
}

#[must_use]
pub fn tall_card_schema() -> SectionSchema {
    card_block_schema(TALL_CARD_TYPE, "Tall Card")
}

// =============================================================================
// View
// =============================================================================

/// A resolved gift card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftCard {
    pub title: String,
    pub image: String,
    pub href: String,
    /// Extra grid classes for the card's slot.
    pub class: &'static str,
}

impl GiftCard {
    /// Resolve a card from the `[title, image, href]` settings over `defaults`.
    ///
    /// Returns `None` when the resolved card has no image.
    #[must_use]
    pub fn resolve(
        settings: &Settings,
        keys: [&str; 3],
        defaults: CardDefaults,
        class: &'static str,
    ) -> Option<Self> {
        let [title_key, image_key, href_key] = keys;
        let image = settings
            .image(image_key)
            .map(|i| i.url)
            .unwrap_or_else(|| defaults.image.to_string());
        if image.trim().is_empty() {
            return None;
        }
        Some(Self {
            title: settings.text_or(title_key, defaults.title),
            image,
            href: settings.text_or(href_key, defaults.href),
            class,
        })
    }

    /// Alt/title text; never empty.
    #[must_use]
    pub fn alt(&self) -> &str {
        if self.title.is_empty() {
            FALLBACK_CARD_TITLE
        } else {
            &self.title
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "sections/featured_gifts_grid.html")]
pub struct FeaturedGiftsGridTemplate {
    pub layout: SectionLayout,
    pub hero_image: String,
    pub blocks: Vec<ContentBlock>,
    pub cards: Vec<GiftCard>,
}

impl FeaturedGiftsGridTemplate {
    #[must_use]
    pub fn new(settings: &Settings, children: &[PresetChild]) -> Self {
        let cards = CARD_SLOTS.iter().filter_map(|slot| {
            GiftCard::resolve(
                settings,
                [slot.title_key, slot.image_key, slot.href_key],
                slot.defaults,
                slot.class,
            )
        });

        Self {
            layout: SectionLayout::from_settings(settings),
            hero_image: settings
                .image("heroImage")
                .map_or_else(|| DEFAULT_HERO_IMAGE.to_string(), |i| i.url),
            blocks: children.iter().filter_map(ContentBlock::from_child).collect(),
            cards: cards.collect(),
        }
    }

    /// Render from a preset (settings plus text children).
    #[must_use]
    pub fn from_preset(preset: &Preset) -> Self {
        Self::new(&Settings::from_preset(preset), &preset.children)
    }
}
