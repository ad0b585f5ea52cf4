//! Full-bleed sale banner with stacked text blocks and a button row.

use std::str::FromStr;

use askama::Template;
use askama_web::WebTemplate;
use woolstep_core::{InputSetting, InputType, Preset, PresetChild, SectionSchema};

use super::common::{
    CONTENT_CHILD_TYPES, ContentBlock, SectionLayout, Settings, background_image_inputs, gap_class,
    layout_inputs, overlay_inputs,
};

pub const SECTION_TYPE: &str = "sale-hero-banner";

const DEFAULT_GAP: i64 = 20;

/// Gap value that is on the shared spacing scale but not offered here.
const UNSUPPORTED_GAP: i64 = 10;

pub const BUTTON_ROW_CLASS: &str =
    "button-wrapper flex flex-row items-center justify-center gap-4 md:gap-2 lg:gap-4 pt-4 md:pt-6";

/// Where the text stack sits inside the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentPosition {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    #[default]
    CenterCenter,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ContentPosition {
    /// Flexbox alignment classes for this position.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::TopLeft => "items-start justify-start [&_.paragraph]:text-left",
            Self::TopCenter => "items-center justify-start [&_.paragraph]:text-center",
            Self::TopRight => "items-end justify-start [&_.paragraph]:text-right",
            Self::CenterLeft => "items-start justify-center [&_.paragraph]:text-left",
            Self::CenterCenter => "items-center justify-center [&_.paragraph]:text-center",
            Self::CenterRight => "items-end justify-center [&_.paragraph]:text-right",
            Self::BottomLeft => "items-start justify-end [&_.paragraph]:text-left",
            Self::BottomCenter => "items-center justify-end [&_.paragraph]:text-center",
            Self::BottomRight => "items-end justify-end [&_.paragraph]:text-right",
        }
    }
}

impl FromStr for ContentPosition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(vertical), Some(horizontal), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(());
        };
        Ok(match (vertical, horizontal) {
            ("top", "left") => Self::TopLeft,
            ("top", "center") => Self::TopCenter,
            ("top", "right") => Self::TopRight,
            ("center", "left") => Self::CenterLeft,
            ("center", "center") => Self::CenterCenter,
            ("center", "right") => Self::CenterRight,
            ("bottom", "left") => Self::BottomLeft,
            ("bottom", "center") => Self::BottomCenter,
            ("bottom", "right") => Self::BottomRight,
            _ => return Err(()),
        })
    }
}

#[must_use]
pub fn schema() -> SectionSchema {
    SectionSchema::new(SECTION_TYPE, "Sale Hero Banner")
        .child_types(CONTENT_CHILD_TYPES)
        .group("Layout", layout_inputs())
        .group(
            "Content",
            vec![
                InputSetting::new(InputType::Position, "contentPosition", "Content Position")
                    .default_value("center center"),
            ],
        )
        .group("Background", background_image_inputs())
        .group("Overlay", overlay_inputs())
        .presets(
            Preset::new()
                .setting("backgroundFit", "cover")
                .child(
                    PresetChild::new("subheading")
                        .setting("content", "Black Friday Preview Sale")
                        .setting("color", "#fff")
                        .setting("size", "base"),
                )
                .child(
                    PresetChild::new("heading")
                        .setting("content", "Up to 50% Off Select Styles")
                        .setting("color", "#fff")
                        .setting("size", "scale")
                        .setting("minSize", 23)
                        .setting("maxSize", 60),
                )
                .child(
                    PresetChild::new("paragraph")
                        .setting("content", "Early Access Starts Now")
                        .setting("color", "#fff")
                        .setting("textSize", "xs"),
                ),
        )
}

#[derive(Template, WebTemplate)]
#[template(path = "sections/sale_hero_banner.html")]
pub struct SaleHeroBannerTemplate {
    pub layout: SectionLayout,
    pub position: ContentPosition,
    pub gap_class: &'static str,
    /// Text blocks in authored order.
    pub text_blocks: Vec<ContentBlock>,
    /// Buttons, rendered together in one row after the text.
    pub buttons: Vec<ContentBlock>,
    pub button_row_class: &'static str,
}

impl SaleHeroBannerTemplate {
    #[must_use]
    pub fn new(settings: &Settings, children: &[PresetChild]) -> Self {
        let position = settings
            .text("contentPosition")
            .and_then(|p| p.parse().ok())
            .unwrap_or_default();
        let gap = settings.number("gap").filter(|g| *g != UNSUPPORTED_GAP);
        let (buttons, text_blocks) = children
            .iter()
            .filter_map(ContentBlock::from_child)
            .partition(ContentBlock::is_button);

        Self {
            layout: SectionLayout::from_settings(settings),
            position,
            gap_class: gap_class(gap, DEFAULT_GAP),
            text_blocks,
            buttons,
            button_row_class: BUTTON_ROW_CLASS,
        }
    }

    #[must_use]
    pub fn from_preset(preset: &Preset) -> Self {
        Self::new(&Settings::from_preset(preset), &preset.children)
    }

    /// Classes for the inner content stack.
    #[must_use]
    pub fn content_class(&self) -> String {
        format!(
            "sale-hero__content flex flex-col text-center {} {}",
            self.gap_class,
            self.position.class()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_content_position_parse() {
        assert_eq!("top left".parse(), Ok(ContentPosition::TopLeft));
        assert_eq!(" bottom   right ".parse(), Ok(ContentPosition::BottomRight));
        assert!("middle".parse::<ContentPosition>().is_err());
        assert!("top left right".parse::<ContentPosition>().is_err());
    }

    #[test]
    fn test_defaults() {
        let banner = SaleHeroBannerTemplate::new(&Settings::new(), &[]);
        assert_eq!(banner.position, ContentPosition::CenterCenter);
        assert_eq!(banner.gap_class, "gap-5");
    }

    #[test]
    fn test_gap_ten_falls_back_to_default() {
        let banner = SaleHeroBannerTemplate::new(&Settings::new().with("gap", 10), &[]);
        assert_eq!(banner.gap_class, "gap-5");
        let banner = SaleHeroBannerTemplate::new(&Settings::new().with("gap", 52), &[]);
        assert_eq!(banner.gap_class, "gap-[52px]");
    }

    #[test]
    fn test_buttons_collected_into_row() {
        let children = [
            PresetChild::new("button").setting("text", "Shop Women").setting("to", "/w"),
            PresetChild::new("heading").setting("content", "Up to 50% Off"),
            PresetChild::new("button").setting("text", "Shop Men").setting("to", "/m"),
        ];
        let banner = SaleHeroBannerTemplate::new(&Settings::new(), &children);
        assert_eq!(banner.text_blocks.len(), 1);
        assert_eq!(banner.buttons.len(), 2);
        assert_eq!(banner.buttons[1].text(), "Shop Men");

        let html = banner.render().unwrap();
        let heading = html.find("Up to 50% Off").unwrap();
        let row = html.find("button-wrapper").unwrap();
        assert!(heading < row);
    }

    #[test]
    fn test_preset_renders() {
        let preset = schema().presets.unwrap();
        let banner = SaleHeroBannerTemplate::from_preset(&preset);
        assert!(banner.buttons.is_empty());
        assert_eq!(banner.layout.background_fit, "cover");
        let html = banner.render().unwrap();
        assert!(html.contains("Black Friday Preview Sale"));
        assert!(!html.contains("button-wrapper"));
    }

    #[test]
    fn test_schema_background_is_image_only() {
        let section = schema();
        assert!(section.input("backgroundColor").is_none());
        assert!(section.input("backgroundImage").is_some());
        assert!(section.input("overlayOpacity").is_some());
    }
}
