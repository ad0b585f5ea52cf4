//! Cache types for Storefront API responses.

use crate::shopify::types::{Collection, Locale, Product};

/// Cache key for products and collections.
///
/// Every key carries the locale, since prices and titles vary by buyer
/// context.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    ProductById(String, Locale),
    ProductByHandle(String, Locale),
    CollectionById(String, Locale),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<Product>),
    Collection(Box<Collection>),
}
