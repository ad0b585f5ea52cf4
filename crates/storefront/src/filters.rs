//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use url::Url;

/// Width requested from the CDN for product card images.
pub const CARD_IMAGE_WIDTH: u32 = 600;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Resizes a CDN image URL to card width.
///
/// Usage in templates: `{{ card.image_url|card_image }}`
#[askama::filter_fn]
pub fn card_image(url: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(with_width(&url.to_string(), CARD_IMAGE_WIDTH))
}

/// Set the `width` query parameter, replacing any existing one.
///
/// Strings that are not absolute URLs are returned unchanged.
#[must_use]
pub fn with_width(raw: &str, width: u32) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != "width")
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("width", &width.to_string());
    url.into()
}
