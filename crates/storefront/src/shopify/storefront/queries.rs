//! GraphQL query definitions for Shopify Storefront API.
//!
//! Each query is a unit struct implementing [`GraphQLQuery`] over a
//! hand-written document, with serde response types that mirror exactly the
//! fields the document selects. Anything Shopify returns outside that shape
//! fails deserialization here instead of leaking into the sections.

use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

/// Product selection shared by the id and handle lookups.
macro_rules! product_fields {
    () => {
        r"
    id
    handle
    title
    description
    options {
      name
      optionValues {
        name
        swatch { color }
        firstSelectableVariant { id availableForSale }
      }
    }
    variants(first: 100) {
      nodes {
        id
        title
        availableForSale
        price { amount currencyCode }
        compareAtPrice { amount currencyCode }
        selectedOptions { name value }
        image { url altText width height }
      }
    }
    media(first: 20) {
      nodes {
        __typename
        ... on MediaImage {
          image { url altText width height }
        }
      }
    }
"
    };
}

// =============================================================================
// Variables
// =============================================================================

/// Variables for lookups by global ID.
#[derive(Debug, Clone, Serialize)]
pub struct NodeVariables {
    pub id: String,
    pub country: String,
    pub language: String,
}

/// Variables for lookups by URL handle.
#[derive(Debug, Clone, Serialize)]
pub struct HandleVariables {
    pub handle: String,
    pub country: String,
    pub language: String,
}

// =============================================================================
// Queries
// =============================================================================

pub struct GetProductById;

impl GraphQLQuery for GetProductById {
    type Variables = NodeVariables;
    type ResponseData = ProductData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: concat!(
                "query GetProductById($id: ID!, $country: CountryCode, $language: LanguageCode) ",
                "@inContext(country: $country, language: $language) {\n  product(id: $id) {",
                product_fields!(),
                "  }\n}\n"
            ),
            operation_name: "GetProductById",
        }
    }
}

pub struct GetProductByHandle;

impl GraphQLQuery for GetProductByHandle {
    type Variables = HandleVariables;
    type ResponseData = ProductData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: concat!(
                "query GetProductByHandle($handle: String!, $country: CountryCode, $language: LanguageCode) ",
                "@inContext(country: $country, language: $language) {\n  product(handle: $handle) {",
                product_fields!(),
                "  }\n}\n"
            ),
            operation_name: "GetProductByHandle",
        }
    }
}

pub struct GetCollectionById;

impl GraphQLQuery for GetCollectionById {
    type Variables = NodeVariables;
    type ResponseData = CollectionData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: r"query GetCollectionById($id: ID!, $country: CountryCode, $language: LanguageCode) @inContext(country: $country, language: $language) {
  collection(id: $id) {
    id
    title
    handle
    image { url altText width height }
  }
}
",
            operation_name: "GetCollectionById",
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ProductData {
    pub product: Option<RawProduct>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionData {
    pub collection: Option<RawCollection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub options: Vec<RawOption>,
    pub variants: Nodes<RawVariant>,
    pub media: Nodes<RawMedia>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOption {
    pub name: String,
    pub option_values: Vec<RawOptionValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptionValue {
    pub name: String,
    pub swatch: Option<RawSwatch>,
    pub first_selectable_variant: Option<RawVariantRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSwatch {
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariantRef {
    pub id: String,
    pub available_for_sale: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariant {
    pub id: String,
    pub title: String,
    pub available_for_sale: bool,
    pub price: RawMoney,
    pub compare_at_price: Option<RawMoney>,
    pub selected_options: Vec<RawSelectedOption>,
    pub image: Option<RawImage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMoney {
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSelectedOption {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawImage {
    pub url: String,
    pub alt_text: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

/// One media node. Only `MediaImage` nodes carry `image`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMedia {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub image: Option<RawImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCollection {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub image: Option<RawImage>,
}

/// Connection flattened with `nodes`.
#[derive(Debug, Clone, Deserialize)]
pub struct Nodes<T> {
    pub nodes: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> NodeVariables {
        NodeVariables {
            id: "gid://shopify/Product/1".to_string(),
            country: "US".to_string(),
            language: "EN".to_string(),
        }
    }

    #[test]
    fn test_product_query_selects_media_images() {
        let body = GetProductById::build_query(vars());
        assert_eq!(body.operation_name, "GetProductById");
        assert!(body.query.contains("product(id: $id)"));
        assert!(body.query.contains("... on MediaImage"));
        assert!(body.query.contains("@inContext(country: $country, language: $language)"));
    }

    #[test]
    fn test_handle_query_uses_handle_argument() {
        let body = GetProductByHandle::build_query(HandleVariables {
            handle: "womens-kiwi-slipper".to_string(),
            country: "US".to_string(),
            language: "EN".to_string(),
        });
        assert!(body.query.contains("product(handle: $handle)"));
        assert!(body.query.contains("firstSelectableVariant"));
    }

    #[test]
    fn test_collection_query_shape() {
        let body = GetCollectionById::build_query(vars());
        assert!(body.query.contains("collection(id: $id)"));
        assert!(body.query.contains("image { url altText width height }"));
    }

    #[test]
    fn test_variables_serialize() {
        let json = serde_json::to_value(GetCollectionById::build_query(vars())).unwrap_or_default();
        assert_eq!(json["variables"]["country"], "US");
        assert_eq!(json["operationName"], "GetCollectionById");
    }
}
