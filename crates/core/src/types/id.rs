//! Newtype wrappers for Shopify global IDs.
//!
//! The page builder hands sections bare numeric IDs (`"7205168250960"`),
//! while the Storefront API expects global IDs
//! (`"gid://shopify/Product/7205168250960"`). Use the `define_gid!` macro to
//! create wrappers that normalize either form and prevent mixing resource
//! types.

use thiserror::Error;

/// Errors raised when parsing a Shopify global ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GidError {
    #[error("empty {0} id")]
    Empty(&'static str),
    #[error("invalid {0} id: {1}")]
    Invalid(&'static str, String),
}

/// Macro to define a type-safe Shopify global ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `parse()` accepting a numeric ID or a full global ID of the same resource
/// - `as_str()` and `numeric()` accessors
///
/// # Example
///
/// ```rust
/// # use woolstep_core::define_gid;
/// define_gid!(ProductGid, "Product");
///
/// let id = ProductGid::parse("42").unwrap();
/// assert_eq!(id.as_str(), "gid://shopify/Product/42");
/// assert_eq!(id.numeric(), "42");
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident, $resource:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Global ID prefix for this resource type.
            pub const PREFIX: &'static str = concat!("gid://shopify/", $resource, "/");

            /// Parse a numeric ID or a global ID of this resource type.
            ///
            /// # Errors
            ///
            /// Returns an error if the input is empty, belongs to another
            /// resource type, or its numeric part is not all digits.
            pub fn parse(raw: &str) -> Result<Self, $crate::types::id::GidError> {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Err($crate::types::id::GidError::Empty($resource));
                }
                let numeric = raw.strip_prefix(Self::PREFIX).unwrap_or(raw);
                if numeric.is_empty() || !numeric.bytes().all(|b| b.is_ascii_digit()) {
                    return Err($crate::types::id::GidError::Invalid(
                        $resource,
                        raw.to_string(),
                    ));
                }
                Ok(Self(format!("{}{numeric}", Self::PREFIX)))
            }

            /// Build from a numeric ID.
            #[must_use]
            pub fn from_numeric(id: u64) -> Self {
                Self(format!("{}{id}", Self::PREFIX))
            }

            /// Get the full global ID.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Get the numeric part of the global ID.
            #[must_use]
            pub fn numeric(&self) -> &str {
                self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::types::id::GidError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_gid!(ProductGid, "Product");
define_gid!(CollectionGid, "Collection");
define_gid!(VariantGid, "ProductVariant");
