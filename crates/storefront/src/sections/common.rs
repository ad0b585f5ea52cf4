//! Settings, inputs, and content blocks shared by every section.

use std::collections::HashMap;

use serde_json::{Map, Value};
use url::Url;
use woolstep_core::{InputSetting, InputType, Preset, PresetChild};

use crate::shopify::Image;

// =============================================================================
// Settings
// =============================================================================

/// Setting values for one section instance, keyed by input name.
///
/// Values arrive either from a schema preset or from query parameters on a
/// preview request. Empty strings count as unset so that every section can
/// fall back to its defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings(Map<String, Value>);

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level values of a preset.
    #[must_use]
    pub fn from_preset(preset: &Preset) -> Self {
        Self(preset.settings.clone())
    }

    /// Values of a preset child block.
    #[must_use]
    pub fn from_child(child: &PresetChild) -> Self {
        Self(child.settings.clone())
    }

    /// String values from a query string.
    #[must_use]
    pub fn from_query(query: HashMap<String, String>) -> Self {
        Self(
            query
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        )
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    /// Non-empty text value.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Text value, or `default` when unset.
    #[must_use]
    pub fn text_or(&self, name: &str, default: &str) -> String {
        self.text(name).unwrap_or(default).to_string()
    }

    /// Integer value given as a JSON number or a numeric string.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<i64> {
        match self.0.get(name)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Boolean switch. Accepts `true`, `"true"`, `"on"` and `"1"`.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        match self.0.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => matches!(s.trim(), "true" | "on" | "1"),
            _ => false,
        }
    }

    /// Image given either as a URL string or as an `{url, altText, width, height}` object.
    #[must_use]
    pub fn image(&self, name: &str) -> Option<Image> {
        match self.0.get(name)? {
            Value::String(url) if !url.trim().is_empty() => Some(Image::from_url(url.trim())),
            Value::Object(obj) => {
                let url = obj.get("url")?.as_str()?.trim();
                if url.is_empty() {
                    return None;
                }
                Some(Image {
                    url: url.to_string(),
                    alt_text: obj
                        .get("altText")
                        .and_then(Value::as_str)
                        .map(String::from),
                    width: obj.get("width").and_then(Value::as_i64),
                    height: obj.get("height").and_then(Value::as_i64),
                })
            }
            _ => None,
        }
    }

    /// Resource picker value. Pickers hand back either a bare id or `{ "id": ... }`.
    #[must_use]
    pub fn resource_id(&self, name: &str) -> Option<String> {
        match self.0.get(name)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Object(obj) => match obj.get("id")? {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            },
            _ => None,
        }
    }
}

// =============================================================================
// Shared Inputs
// =============================================================================

/// Layout group shared by every full-width section.
#[must_use]
pub fn layout_inputs() -> Vec<InputSetting> {
    vec![
        InputSetting::new(InputType::Select, "width", "Content width")
            .options(&[("full", "Full page"), ("stretch", "Stretch"), ("fixed", "Fixed")])
            .default_value("fixed"),
        InputSetting::new(InputType::Range, "gap", "Items spacing")
            .range(0, 60, 4, "px")
            .default_value(20),
        InputSetting::new(InputType::Select, "verticalPadding", "Vertical padding")
            .options(&[
                ("none", "None"),
                ("small", "Small"),
                ("medium", "Medium"),
                ("large", "Large"),
            ])
            .default_value("medium"),
    ]
}

/// Background group. `backgroundFor` is left out for sections that only
/// paint their own box.
#[must_use]
pub fn background_inputs(with_target: bool) -> Vec<InputSetting> {
    let mut inputs = Vec::new();
    if with_target {
        inputs.push(
            InputSetting::new(InputType::Select, "backgroundFor", "Background for")
                .options(&[("section", "Section"), ("content", "Content")])
                .default_value("section"),
        );
    }
    inputs.extend(background_image_inputs());
    inputs.insert(
        usize::from(with_target),
        InputSetting::new(InputType::Color, "backgroundColor", "Background color"),
    );
    inputs
}

/// Image-only background inputs.
#[must_use]
pub fn background_image_inputs() -> Vec<InputSetting> {
    vec![
        InputSetting::new(InputType::Image, "backgroundImage", "Background image"),
        InputSetting::new(InputType::Select, "backgroundFit", "Background fit")
            .options(&[("fill", "Fill"), ("cover", "Cover"), ("contain", "Contain")])
            .default_value("cover"),
        InputSetting::new(InputType::Position, "backgroundPosition", "Background position")
            .default_value("center center"),
    ]
}

#[must_use]
pub fn overlay_inputs() -> Vec<InputSetting> {
    vec![
        InputSetting::new(InputType::Switch, "enableOverlay", "Enable overlay").default_value(false),
        InputSetting::new(InputType::Color, "overlayColor", "Overlay color")
            .default_value("#000000"),
        InputSetting::new(InputType::Color, "overlayColorHover", "Overlay color (hover)")
            .default_value("#000000"),
        InputSetting::new(InputType::Range, "overlayOpacity", "Overlay opacity")
            .range(0, 100, 1, "%")
            .default_value(30),
    ]
}

// =============================================================================
// Section Chrome
// =============================================================================

/// Outer box of a section: width, padding and background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLayout {
    pub width: String,
    pub vertical_padding: String,
    pub background_color: Option<String>,
    pub background_image: Option<String>,
    pub background_fit: String,
    pub background_position: String,
    pub overlay: Option<ColorOverlay>,
}

/// Color overlay painted above the background image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorOverlay {
    pub color: String,
    pub color_hover: String,
    pub opacity: i64,
}

impl SectionLayout {
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let overlay = settings.flag("enableOverlay").then(|| ColorOverlay {
            color: settings.text_or("overlayColor", "#000000"),
            color_hover: settings.text_or("overlayColorHover", "#000000"),
            opacity: settings.number("overlayOpacity").unwrap_or(30).clamp(0, 100),
        });

        Self {
            width: one_of(settings.text("width"), &["full", "stretch", "fixed"], "fixed"),
            vertical_padding: one_of(
                settings.text("verticalPadding"),
                &["none", "small", "medium", "large"],
                "medium",
            ),
            background_color: settings.text("backgroundColor").map(String::from),
            background_image: settings.image("backgroundImage").map(|i| i.url),
            background_fit: one_of(
                settings.text("backgroundFit"),
                &["fill", "cover", "contain"],
                "cover",
            ),
            background_position: settings.text_or("backgroundPosition", "center center"),
            overlay,
        }
    }

    /// Classes for the outer `<section>` element.
    #[must_use]
    pub fn class(&self) -> String {
        format!(
            "section section--{} section--pad-{}",
            self.width, self.vertical_padding
        )
    }

    /// Inline style for the background layer, empty when there is none.
    #[must_use]
    pub fn background_style(&self) -> String {
        let mut style = String::new();
        if let Some(color) = &self.background_color {
            style.push_str(&format!("background-color: {color};"));
        }
        if let Some(url) = &self.background_image {
            style.push_str(&format!(
                "background-image: url('{url}'); background-size: {}; background-position: {};",
                if self.background_fit == "fill" {
                    "100% 100%"
                } else {
                    &self.background_fit
                },
                self.background_position
            ));
        }
        style
    }
}

impl ColorOverlay {
    /// Inline style for the overlay layer.
    #[must_use]
    pub fn style(&self) -> String {
        #[allow(clippy::cast_precision_loss)] // clamped to 0..=100
        let opacity = self.opacity as f64 / 100.0;
        format!(
            "background-color: {}; opacity: {opacity}; --overlay-hover: {};",
            self.color, self.color_hover
        )
    }
}

/// Spacing scale for the `gap` setting, in pixels.
const GAP_CLASSES: &[(i64, &str)] = &[
    (0, "gap-0"),
    (4, "gap-1"),
    (8, "gap-2"),
    (10, "gap-2.5"),
    (12, "gap-3"),
    (16, "gap-4"),
    (20, "gap-5"),
    (24, "gap-6"),
    (28, "gap-7"),
    (32, "gap-8"),
    (36, "gap-9"),
    (40, "gap-10"),
    (44, "gap-11"),
    (48, "gap-12"),
    (52, "gap-[52px]"),
    (56, "gap-14"),
    (60, "gap-[60px]"),
];

/// Spacing class for `gap`. Values off the scale use `default`.
#[must_use]
pub fn gap_class(gap: Option<i64>, default: i64) -> &'static str {
    let lookup = |value: i64| {
        GAP_CLASSES
            .iter()
            .find(|(px, _)| *px == value)
            .map(|(_, class)| *class)
    };
    gap.and_then(lookup)
        .or_else(|| lookup(default))
        .unwrap_or("gap-0")
}

fn one_of(value: Option<&str>, allowed: &[&str], default: &str) -> String {
    value
        .filter(|v| allowed.contains(v))
        .unwrap_or(default)
        .to_string()
}

// =============================================================================
// Content Blocks
// =============================================================================

/// Text and button blocks nested in hero-style sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Subheading { content: String, color: Option<String> },
    Heading { content: String, color: Option<String> },
    Paragraph { content: String, color: Option<String> },
    Button(ButtonBlock),
}

/// A link styled as a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonBlock {
    pub label: String,
    pub href: String,
    pub variant: String,
}

/// Builder placeholder image used by presets.
pub const PLACEHOLDER_BANNER: &str = "/static/images/placeholder-banner.svg";

/// Child block types accepted by hero-style sections.
pub const CONTENT_CHILD_TYPES: &[&str] = &["subheading", "heading", "paragraph", "button"];

impl ContentBlock {
    /// Build a block from a preset child. Unknown types and empty blocks
    /// yield `None`.
    #[must_use]
    pub fn from_child(child: &PresetChild) -> Option<Self> {
        let settings = Settings::from_child(child);
        let text = || settings.text("content").map(String::from);
        let color = settings.text("color").map(String::from);

        match child.kind {
            "subheading" => Some(Self::Subheading {
                content: text()?,
                color,
            }),
            "heading" => Some(Self::Heading {
                content: text()?,
                color,
            }),
            "paragraph" => Some(Self::Paragraph {
                content: text()?,
                color,
            }),
            "button" => ButtonBlock::from_settings(&settings).map(Self::Button),
            _ => None,
        }
    }

    /// CSS class hook, matching the block type.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Subheading { .. } => "subheading",
            Self::Heading { .. } => "heading",
            Self::Paragraph { .. } => "paragraph",
            Self::Button(_) => "button",
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Subheading { content, .. }
            | Self::Heading { content, .. }
            | Self::Paragraph { content, .. } => content,
            Self::Button(button) => &button.label,
        }
    }

    /// Inline color style, empty when unset.
    #[must_use]
    pub fn style(&self) -> String {
        match self {
            Self::Subheading { color, .. }
            | Self::Heading { color, .. }
            | Self::Paragraph { color, .. } => color
                .as_ref()
                .map(|c| format!("color: {c};"))
                .unwrap_or_default(),
            Self::Button(_) => String::new(),
        }
    }

    #[must_use]
    pub const fn is_button(&self) -> bool {
        matches!(self, Self::Button(_))
    }

    #[must_use]
    pub const fn button(&self) -> Option<&ButtonBlock> {
        match self {
            Self::Button(button) => Some(button),
            _ => None,
        }
    }
}

impl ButtonBlock {
    /// Read `text`/`label` and `to`/`href`; a button needs a label.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let label = settings.text("text").or_else(|| settings.text("label"))?;
        Some(Self {
            label: label.to_string(),
            href: settings
                .text("to")
                .or_else(|| settings.text("href"))
                .unwrap_or("#")
                .to_string(),
            variant: settings
                .text("variant")
                .or_else(|| settings.text("buttonStyle"))
                .unwrap_or("primary")
                .to_string(),
        })
    }

    /// Buttons nested one level down in a wrapper block (e.g. `hover-buttons`).
    #[must_use]
    pub fn from_wrapper(wrapper: &PresetChild) -> Vec<Self> {
        wrapper
            .children
            .iter()
            .filter(|c| c.kind == "button")
            .filter_map(|c| Self::from_settings(&Settings::from_child(c)))
            .collect()
    }
}

/// Resolve protocol-relative CDN URLs (`//host/path`) to `https`.
///
/// Anything that still fails to parse is returned unchanged.
#[must_use]
pub fn absolute_url(raw: &str) -> String {
    let candidate = raw
        .strip_prefix("//")
        .map_or_else(|| raw.to_string(), |rest| format!("https://{rest}"));
    Url::parse(&candidate).map_or_else(|_| raw.to_string(), String::from)
}

/// URL slug: lowercase alphanumerics (any script) joined by single hyphens.
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for c in input.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
