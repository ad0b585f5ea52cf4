//! Product type conversion functions.

use woolstep_core::{ProductGid, VariantGid};

use crate::shopify::ShopifyError;
use crate::shopify::types::{
    OptionValue, Product, ProductOption, ProductVariant, SelectedOption, Swatch, VariantRef,
};

use super::super::queries::{RawMedia, RawOption, RawProduct, RawVariant};
use super::{convert_image, convert_money};

fn invalid(e: impl std::fmt::Display) -> ShopifyError {
    ShopifyError::InvalidData(e.to_string())
}

pub fn convert_product(product: RawProduct) -> Result<Product, ShopifyError> {
    Ok(Product {
        id: ProductGid::parse(&product.id).map_err(invalid)?,
        handle: product.handle,
        title: product.title,
        description: product.description,
        options: product
            .options
            .into_iter()
            .map(convert_option)
            .collect::<Result<_, _>>()?,
        variants: product
            .variants
            .nodes
            .into_iter()
            .map(convert_variant)
            .collect::<Result<_, _>>()?,
        images: extract_media_images(product.media.nodes),
    })
}

fn convert_option(option: RawOption) -> Result<ProductOption, ShopifyError> {
    let values = option
        .option_values
        .into_iter()
        .map(|value| {
            let first_selectable_variant = value
                .first_selectable_variant
                .map(|v| {
                    Ok::<_, ShopifyError>(VariantRef {
                        id: VariantGid::parse(&v.id).map_err(invalid)?,
                        available_for_sale: v.available_for_sale,
                    })
                })
                .transpose()?;
            Ok(OptionValue {
                name: value.name,
                swatch: value.swatch.map(|s| Swatch { color: s.color }),
                first_selectable_variant,
            })
        })
        .collect::<Result<_, ShopifyError>>()?;

    Ok(ProductOption {
        name: option.name,
        values,
    })
}

fn convert_variant(variant: RawVariant) -> Result<ProductVariant, ShopifyError> {
    Ok(ProductVariant {
        id: VariantGid::parse(&variant.id).map_err(invalid)?,
        title: variant.title,
        available_for_sale: variant.available_for_sale,
        price: convert_money(&variant.price)?,
        compare_at_price: variant
            .compare_at_price
            .as_ref()
            .map(convert_money)
            .transpose()?,
        selected_options: variant
            .selected_options
            .into_iter()
            .map(|o| SelectedOption {
                name: o.name,
                value: o.value,
            })
            .collect(),
        image: variant.image.map(convert_image),
    })
}

/// Keep `MediaImage` nodes with a non-empty URL, in order.
fn extract_media_images(media: Vec<RawMedia>) -> Vec<String> {
    media
        .into_iter()
        .filter(|m| m.typename == "MediaImage")
        .filter_map(|m| m.image)
        .map(|image| image.url)
        .filter(|url| !url.trim().is_empty())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw_product() -> RawProduct {
        serde_json::from_value(json!({
            "id": "gid://shopify/Product/7205168250960",
            "handle": "womens-kiwi-slipper",
            "title": "Women's Kiwi Slipper",
            "description": "Cozy.",
            "options": [
                {
                    "name": "Color",
                    "optionValues": [
                        {
                            "name": "Dark Camel",
                            "swatch": { "color": "#b38b58" },
                            "firstSelectableVariant": {
                                "id": "gid://shopify/ProductVariant/1",
                                "availableForSale": true
                            }
                        }
                    ]
                },
                {
                    "name": "Size",
                    "optionValues": [
                        { "name": "10", "swatch": null, "firstSelectableVariant": null }
                    ]
                }
            ],
            "variants": { "nodes": [
                {
                    "id": "gid://shopify/ProductVariant/1",
                    "title": "Dark Camel / 11",
                    "availableForSale": true,
                    "price": { "amount": "66.0", "currencyCode": "USD" },
                    "compareAtPrice": { "amount": "95.0", "currencyCode": "USD" },
                    "selectedOptions": [
                        { "name": "Color", "value": "Dark Camel" },
                        { "name": "Size", "value": "11" }
                    ],
                    "image": null
                }
            ]},
            "media": { "nodes": [
                { "__typename": "MediaImage", "image": { "url": "https://cdn.shopify.com/a.jpg", "altText": null, "width": 1000, "height": 1000 } },
                { "__typename": "Video" },
                { "__typename": "MediaImage", "image": { "url": "", "altText": null, "width": null, "height": null } },
                { "__typename": "MediaImage", "image": null },
                { "__typename": "MediaImage", "image": { "url": "https://cdn.shopify.com/b.jpg", "altText": "side", "width": null, "height": null } }
            ]}
        }))
        .unwrap()
    }

    #[test]
    fn test_convert_product() {
        let product = convert_product(raw_product()).unwrap();
        assert_eq!(product.id.numeric(), "7205168250960");
        assert_eq!(product.options.len(), 2);
        assert_eq!(product.variants[0].price.display_rounded(), "$66");
        assert_eq!(
            product.variants[0]
                .compare_at_price
                .map(|p| p.display_rounded()),
            Some("$95".to_string())
        );
        assert!(product.options[1].values[0].first_selectable_variant.is_none());
    }

    #[test]
    fn test_media_keeps_only_images_with_urls() {
        let product = convert_product(raw_product()).unwrap();
        assert_eq!(
            product.images,
            vec![
                "https://cdn.shopify.com/a.jpg".to_string(),
                "https://cdn.shopify.com/b.jpg".to_string()
            ]
        );
    }

    #[test]
    fn test_invalid_variant_id_is_rejected() {
        let mut raw = raw_product();
        raw.variants.nodes[0].id = "not-an-id".to_string();
        assert!(matches!(
            convert_product(raw),
            Err(ShopifyError::InvalidData(_))
        ));
    }
}
