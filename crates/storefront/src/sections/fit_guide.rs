//! Fit guide overlay: width/length indicators and the size chart.

use askama::Template;
use askama_web::WebTemplate;

use super::common::absolute_url;
use super::ui_state::Overlay;

pub const TITLE: &str = "Women's Kiwi Slipper";
pub const SIZING_NOTE: &str = "This style is offered in full sizes only. If you have wide feet or are between sizes we suggest you size up.";
pub const UNISEX_HEADING: &str = "Our Shoes are Unisex";
pub const UNISEX_NOTE: &str = "If you wear a women's size 11.5-12, try a men's size 10.5-11. If you wear a men's size 7-7.5, try a women's size 8-8.5.";

const WIDTH_IMAGE: &str = "//www.allbirds.com/cdn/shop/files/A12142_25Q4_Kiwi-Slipper-Dark-Camel-Stony-Cream-Sole_PDP_TD_49fe6f45-b3d5-44d6-9ba0-836f9c849d04.png?v=1761687976&width=1024";
const LENGTH_IMAGE: &str = "//www.allbirds.com/cdn/shop/files/A12142_25Q4_Kiwi-Slipper-Dark-Camel-Stony-Cream-Sole_PDP_LEFT.png?v=1761687976&width=1024";

/// One row of the size chart: a sizing system and its sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeChartRow {
    pub system: &'static str,
    pub sizes: &'static [&'static str],
}

pub const SIZE_CHART: &[SizeChartRow] = &[
    SizeChartRow {
        system: "US",
        sizes: &["5", "6", "7", "8", "9", "10", "11"],
    },
    SizeChartRow {
        system: "UK",
        sizes: &[
            "2 - 2.5", "3 - 3.5", "4-4.5", "5 - 5.5", "6 - 6.5", "7 - 7.5", "8 - 8.5",
        ],
    },
    SizeChartRow {
        system: "cm",
        sizes: &["22", "23", "24", "25", "26", "27", "28"],
    },
];

/// Average width/length indicator with its illustration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitIndicator {
    pub label: &'static str,
    pub image_url: String,
}

/// Fit guide fragment.
#[derive(Template, WebTemplate)]
#[template(path = "sections/fit_guide.html")]
pub struct FitGuideTemplate {
    pub overlay: Overlay,
    pub title: &'static str,
    pub sizing_note: &'static str,
    pub unisex_heading: &'static str,
    pub unisex_note: &'static str,
    pub indicators: Vec<FitIndicator>,
    pub chart: &'static [SizeChartRow],
}

impl FitGuideTemplate {
    #[must_use]
    pub fn new(overlay: Overlay) -> Self {
        Self {
            overlay,
            title: TITLE,
            sizing_note: SIZING_NOTE,
            unisex_heading: UNISEX_HEADING,
            unisex_note: UNISEX_NOTE,
            indicators: vec![
                FitIndicator {
                    label: "Average Width",
                    image_url: absolute_url(WIDTH_IMAGE),
                },
                FitIndicator {
                    label: "Average Length",
                    image_url: absolute_url(LENGTH_IMAGE),
                },
            ],
            chart: SIZE_CHART,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_rows_line_up() {
        assert_eq!(SIZE_CHART.len(), 3);
        for row in SIZE_CHART {
            assert_eq!(row.sizes.len(), 7);
        }
    }

    #[test]
    fn test_indicator_images_are_absolute() {
        let guide = FitGuideTemplate::new(Overlay::Open);
        assert!(
            guide
                .indicators
                .iter()
                .all(|i| i.image_url.starts_with("https://www.allbirds.com/"))
        );
    }

    #[test]
    fn test_closed_guide_renders_nothing_visible() {
        let html = FitGuideTemplate::new(Overlay::Closed).render().unwrap();
        assert!(!html.contains("Size Chart Table"));
        assert!(!html.contains("Kiwi Slipper"));
    }

    #[test]
    fn test_open_guide_renders_chart() {
        let html = FitGuideTemplate::new(Overlay::Open).render().unwrap();
        assert!(html.contains("Kiwi Slipper"));
        assert!(html.contains("2 - 2.5"));
        assert!(html.contains("Our Shoes are Unisex"));
    }
}
