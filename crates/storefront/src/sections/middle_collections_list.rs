//! "Complete the Collection" grid of product tiles.

use askama::Template;
use askama_web::WebTemplate;
use woolstep_core::{InputSetting, InputType, SectionSchema};

use super::common::{SectionLayout, Settings, absolute_url, background_inputs, layout_inputs};

pub const SECTION_TYPE: &str = "middle-collections-list";

pub const DEFAULT_HEADING: &str = "Complete the Collection";
pub const DEFAULT_SUBHEADING: &str = "Tap or click any style to learn more";

/// A linked product tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductTile {
    pub id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    pub image: &'static str,
}

pub const TILES: [ProductTile; 8] = [
    ProductTile {
        id: "7205168250960",
        title: "Women's Kiwi Clog - Dark Camel (Stony Cream Sole)",
        url: "/products/womens-kiwi-clog",
        image: "//www.allbirds.com/cdn/shop/files/A12147_25Q4_Kiwi-Clog-Dark-Camel-Stony-Cream-Sole_PDP_LEFT_bd7c1a74-a561-4b72-9ea1-3c9f425b8d3d.png?v=1761687828&width=1024",
    },
    ProductTile {
        id: "7204717297744",
        title: "Allbirds Wool Slipper - Natural White",
        url: "/products/allbirds-slipper-natural-white",
        image: "//www.allbirds.com/cdn/shop/files/A12034_25Q4_Wool-Slipper-Natural-White-Natural-White-Sole_PDP_LEFT.png?v=1759335779&width=1024",
    },
    ProductTile {
        id: "7204716838992",
        title: "Allbirds Slipper - Dark Grey",
        url: "/products/allbirds-slipper-dark-grey-tweed",
        image: "//www.allbirds.com/cdn/shop/files/A11582_25Q4_Slipper-Tweed-Dark-Grey-Dark-Grey-Sole_PDP_LEFT.png?v=1759335422&width=1024",
    },
    ProductTile {
        id: "7222321315920",
        title: "Allbirds Slipper - Natural Black Fluff",
        url: "/products/allbirds-slipper-natural-black-fluff",
        image: "//www.allbirds.com/cdn/shop/files/A11805_25Q4_Wool-Slipper-Fluff-Natural-Black-Natural-Black-Sole_PDP_LEFT.png?v=1758757533&width=1024",
    },
    ProductTile {
        id: "7234438135888",
        title: "Women's Wool Cruiser Slip On Fluff - Natural White",
        url: "/products/womens-wool-cruiser-slip-on-fluff",
        image: "//www.allbirds.com/cdn/shop/files/A11827_25Q4_Wool-Cruiser-Slip-On-Fluff-Natural-White-Natural-White-Sole_PDP_LEFT_968d7840-4494-4668-af40-2315da199ffe.png?v=1761692209&width=1024",
    },
    ProductTile {
        id: "7234392981584",
        title: "Women's Cruiser Slip On Tweed - Dark Grey",
        url: "/products/womens-cruiser-slip-on-tweed",
        image: "//www.allbirds.com/cdn/shop/files/A11550_25Q4_Cruiser-Slip-On-Tweed-Dark-Grey-Stormy-Grey-Sole_PDP_LEFT_f8d75b7b-bab3-44f9-a4a1-1fb26875c0d5.png?v=1761685238&width=1024",
    },
    ProductTile {
        id: "7199660212304",
        title: "Women's Wool Cruiser Slip On - Dark Grey",
        url: "/products/womens-wool-cruiser-slip-on",
        image: "//www.allbirds.com/cdn/shop/files/A11636_25Q3_Wool-Cruiser-Slip-On-Dark-Grey-Light-Grey-Sole_PDP_LEFT__1_056967a9-8421-46db-a3ed-cae6cdae557a.png?v=1754513164&width=1024",
    },
    ProductTile {
        id: "7234402779216",
        title: "Women's Lounger Lift Velvet - Sienna Blush",
        url: "/products/womens-lounger-lift-velvet",
        image: "//www.allbirds.com/cdn/shop/files/A11863_25Q4_Lounger-Lift-Velvet-Sienna-Blush-Blizzard-Sole_PDP_LEFT.png?v=1761770613&width=1024",
    },
];

#[must_use]
pub fn schema() -> SectionSchema {
    SectionSchema::new(SECTION_TYPE, "Middle Collections List")
        .group(
            "Text",
            vec![
                InputSetting::new(InputType::Text, "heading", "Heading")
                    .default_value(DEFAULT_HEADING),
                InputSetting::new(InputType::Text, "subheading", "Subheading")
                    .default_value(DEFAULT_SUBHEADING),
            ],
        )
        .group("Layout", layout_inputs())
        .group("Background", background_inputs(false))
}

/// Tile with its image URL made absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub title: &'static str,
    pub url: &'static str,
    pub image: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "sections/middle_collections_list.html")]
pub struct MiddleCollectionsListTemplate {
    pub layout: SectionLayout,
    pub heading: String,
    pub subheading: String,
    pub tiles: Vec<TileView>,
}

impl MiddleCollectionsListTemplate {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            layout: SectionLayout::from_settings(settings),
            heading: settings.text_or("heading", DEFAULT_HEADING),
            subheading: settings.text_or("subheading", DEFAULT_SUBHEADING),
            tiles: TILES
                .iter()
                .map(|tile| TileView {
                    title: tile.title,
                    url: tile.url,
                    image: absolute_url(tile.image),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let section = MiddleCollectionsListTemplate::new(&Settings::new());
        assert_eq!(section.heading, DEFAULT_HEADING);
        assert_eq!(section.subheading, DEFAULT_SUBHEADING);
        assert_eq!(section.tiles.len(), 8);
        assert!(section.tiles[0].image.starts_with("https://www.allbirds.com/"));
    }

    #[test]
    fn test_heading_override() {
        let settings = Settings::new().with("heading", "Stay Cozy");
        let section = MiddleCollectionsListTemplate::new(&settings);
        assert_eq!(section.heading, "Stay Cozy");
        assert_eq!(section.subheading, DEFAULT_SUBHEADING);
    }

    #[test]
    fn test_schema_groups() {
        let section = schema();
        let groups: Vec<_> = section.settings.iter().map(|g| g.group).collect();
        assert_eq!(groups, vec!["Text", "Layout", "Background"]);
        assert!(section.input("backgroundFor").is_none());
    }

    #[test]
    fn test_renders_tiles() {
        let html = MiddleCollectionsListTemplate::new(&Settings::new())
            .render()
            .unwrap();
        assert!(html.contains(DEFAULT_HEADING));
        assert!(html.contains("/products/womens-lounger-lift-velvet"));
        assert_eq!(html.matches("loading=\"lazy\"").count(), 8);
    }
}
