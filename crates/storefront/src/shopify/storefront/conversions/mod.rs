//! Type conversion functions for Shopify Storefront API responses.
//!
//! Raw response structs become validated domain types here. IDs must be
//! well-formed global IDs and prices must be decimal strings; anything else
//! surfaces as [`ShopifyError::InvalidData`](crate::shopify::ShopifyError).

pub mod collections;
pub mod products;

pub use collections::convert_collection;
pub use products::convert_product;

use tracing::warn;
use woolstep_core::{CurrencyCode, Price};

use crate::shopify::ShopifyError;
use crate::shopify::types::Image;

use super::queries::{RawImage, RawMoney};

fn convert_image(i: RawImage) -> Image {
    Image {
        url: i.url,
        alt_text: i.alt_text,
        width: i.width,
        height: i.height,
    }
}

/// Convert a money payload. Unknown currencies fall back to USD.
fn convert_money(m: &RawMoney) -> Result<Price, ShopifyError> {
    let currency = m.currency_code.parse::<CurrencyCode>().unwrap_or_else(|_| {
        warn!(currency = %m.currency_code, "Unsupported currency, formatting as USD");
        CurrencyCode::USD
    });
    Price::parse(&m.amount, currency).map_err(|e| ShopifyError::InvalidData(e.to_string()))
}
