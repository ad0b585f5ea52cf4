//! Declarative section schemas for the page-builder host.
//!
//! A schema names a section type, lists the child block types it accepts,
//! groups its editable settings, and carries preset content for newly
//! inserted instances. Schemas are pass-through configuration: the storefront
//! serves them as JSON and never interprets them at render time.

use serde::Serialize;
use serde_json::{Map, Value};

/// Schema for one section or child block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSchema {
    /// Unique section type (e.g. `main-product-details`).
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Title shown in the builder sidebar.
    pub title: &'static str,
    /// Block types that may be nested inside this section.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub child_types: Vec<&'static str>,
    /// Maximum number of instances inside one parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page types this block may be placed on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_on: Option<EnabledOn>,
    /// Grouped settings inputs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub settings: Vec<SettingGroup>,
    /// Preset content for new instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presets: Option<Preset>,
}

impl SectionSchema {
    /// Create a schema with no children, settings, or presets.
    #[must_use]
    pub const fn new(kind: &'static str, title: &'static str) -> Self {
        Self {
            kind,
            title,
            child_types: Vec::new(),
            limit: None,
            enabled_on: None,
            settings: Vec::new(),
            presets: None,
        }
    }

    #[must_use]
    pub fn child_types(mut self, child_types: &[&'static str]) -> Self {
        self.child_types = child_types.to_vec();
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn enabled_on(mut self, pages: &[PageType]) -> Self {
        self.enabled_on = Some(EnabledOn {
            pages: pages.to_vec(),
        });
        self
    }

    #[must_use]
    pub fn group(mut self, group: &'static str, inputs: Vec<InputSetting>) -> Self {
        self.settings.push(SettingGroup { group, inputs });
        self
    }

    #[must_use]
    pub fn presets(mut self, presets: Preset) -> Self {
        self.presets = Some(presets);
        self
    }

    /// Whether `child` may be nested directly inside this section.
    #[must_use]
    pub fn accepts_child(&self, child: &str) -> bool {
        self.child_types.contains(&child)
    }

    /// Look up an input by name across all setting groups.
    #[must_use]
    pub fn input(&self, name: &str) -> Option<&InputSetting> {
        self.settings
            .iter()
            .flat_map(|group| group.inputs.iter())
            .find(|input| input.name == name)
    }
}

/// Page restriction for a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnabledOn {
    pub pages: Vec<PageType>,
}

/// Page types known to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageType {
    Index,
    Product,
    Collection,
}

/// A named group of inputs in the settings panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingGroup {
    pub group: &'static str,
    pub inputs: Vec<InputSetting>,
}

/// Input control types understood by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    Text,
    Textarea,
    Image,
    Url,
    Select,
    ToggleGroup,
    Position,
    Product,
    Collection,
    Range,
    Color,
    Switch,
}

/// One editable setting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSetting {
    #[serde(rename = "type")]
    pub input_type: InputType,
    pub name: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<InputConfigs>,
}

/// Extra configuration for select-like and range inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputConfigs {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
}

/// A value/label pair for select inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl InputSetting {
    #[must_use]
    pub const fn new(input_type: InputType, name: &'static str, label: &'static str) -> Self {
        Self {
            input_type,
            name,
            label,
            default_value: None,
            help_text: None,
            placeholder: None,
            configs: None,
        }
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn help_text(mut self, text: &'static str) -> Self {
        self.help_text = Some(text);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    #[must_use]
    pub fn options(mut self, options: &[(&'static str, &'static str)]) -> Self {
        let options = options
            .iter()
            .map(|&(value, label)| SelectOption { value, label })
            .collect();
        self.configs = Some(InputConfigs {
            options,
            min: None,
            max: None,
            step: None,
            unit: None,
        });
        self
    }

    #[must_use]
    pub fn range(mut self, min: i64, max: i64, step: i64, unit: &'static str) -> Self {
        self.configs = Some(InputConfigs {
            options: Vec::new(),
            min: Some(min),
            max: Some(max),
            step: Some(step),
            unit: Some(unit),
        });
        self
    }
}

/// Preset content: top-level setting values plus child blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Preset {
    #[serde(flatten)]
    pub settings: Map<String, Value>,
    pub children: Vec<PresetChild>,
}

impl Preset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn setting(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.settings.insert(name.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: PresetChild) -> Self {
        self.children.push(child);
        self
    }
}

/// A preset child block, itself possibly carrying children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetChild {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(flatten)]
    pub settings: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PresetChild>,
}

impl PresetChild {
    #[must_use]
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            settings: Map::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn setting(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.settings.insert(name.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> SectionSchema {
        SectionSchema::new("featured-gifts-grid", "Featured Gifts Grid")
            .child_types(&["heading", "button"])
            .group(
                "Content",
                vec![
                    InputSetting::new(InputType::Text, "topCardTitle", "Top card title")
                        .default_value("Women's Breezer Mary Jane"),
                ],
            )
            .presets(
                Preset::new()
                    .setting("heroImage", "https://example.com/hero.jpg")
                    .child(PresetChild::new("heading").setting("content", "Feel Good Gifting")),
            )
    }

    #[test]
    fn test_schema_serializes_builder_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["type"], "featured-gifts-grid");
        assert_eq!(value["childTypes"], json!(["heading", "button"]));
        assert_eq!(value["settings"][0]["inputs"][0]["type"], "text");
        assert_eq!(
            value["settings"][0]["inputs"][0]["defaultValue"],
            "Women's Breezer Mary Jane"
        );
        assert_eq!(value["presets"]["heroImage"], "https://example.com/hero.jpg");
        assert_eq!(value["presets"]["children"][0]["type"], "heading");
        assert!(value.get("limit").is_none());
    }

    #[test]
    fn test_accepts_child() {
        let schema = sample();
        assert!(schema.accepts_child("heading"));
        assert!(!schema.accepts_child("paragraph"));
    }

    #[test]
    fn test_input_lookup() {
        let schema = sample();
        assert_eq!(
            schema.input("topCardTitle").map(|i| i.input_type),
            Some(InputType::Text)
        );
        assert!(schema.input("missing").is_none());
    }

    #[test]
    fn test_enabled_on_serializes_uppercase() {
        let schema = SectionSchema::new("mpd--gallery", "Product Gallery")
            .enabled_on(&[PageType::Product]);
        let value = serde_json::to_value(schema).unwrap();
        assert_eq!(value["enabledOn"]["pages"], json!(["PRODUCT"]));
    }
}
