//! Core types for Woolstep.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod schema;

pub use id::*;
pub use price::{CurrencyCode, Price, PriceError};
pub use schema::{
    EnabledOn, InputConfigs, InputSetting, InputType, PageType, Preset, PresetChild, SectionSchema,
    SelectOption, SettingGroup,
};
