//! Collection type conversion functions.

use woolstep_core::CollectionGid;

use crate::shopify::ShopifyError;
use crate::shopify::types::Collection;

use super::super::queries::RawCollection;
use super::convert_image;

pub fn convert_collection(collection: RawCollection) -> Result<Collection, ShopifyError> {
    Ok(Collection {
        id: CollectionGid::parse(&collection.id)
            .map_err(|e| ShopifyError::InvalidData(e.to_string()))?,
        handle: collection.handle,
        title: collection.title,
        image: collection.image.map(convert_image),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::super::queries::RawImage;
    use super::*;

    #[test]
    fn test_convert_collection() {
        let collection = convert_collection(RawCollection {
            id: "gid://shopify/Collection/42".to_string(),
            title: "Mens".to_string(),
            handle: "mens".to_string(),
            image: Some(RawImage {
                url: "https://cdn.shopify.com/mens.jpg".to_string(),
                alt_text: None,
                width: Some(800),
                height: Some(600),
            }),
        })
        .unwrap();
        assert_eq!(collection.id.numeric(), "42");
        assert_eq!(collection.image.unwrap().width, Some(800));
    }

    #[test]
    fn test_convert_collection_rejects_bad_id() {
        let result = convert_collection(RawCollection {
            id: "gid://shopify/Product/42".to_string(),
            title: "Mens".to_string(),
            handle: "mens".to_string(),
            image: None,
        });
        assert!(matches!(result, Err(ShopifyError::InvalidData(_))));
    }
}
