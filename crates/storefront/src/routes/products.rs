//! Product page and gallery fragment handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use tracing::instrument;
use woolstep_core::VariantGid;

use crate::error::{AppError, Result};
use crate::filters;
use crate::sections::carousel::{CarouselAction, CarouselState};
use crate::sections::common::Settings;
use crate::sections::main_product_details::{
    MOCK_HANDLE, MainProductDetailsTemplate, ProductDetails, ProductGalleryTemplate,
};
use crate::state::AppState;

/// Product page query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    /// Numeric or global variant ID.
    pub variant: Option<String>,
}

/// Gallery navigation query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct GalleryQuery {
    /// Index the client is currently showing.
    pub index: Option<usize>,
    /// `next`, `prev`, or a slide index.
    pub action: Option<String>,
    /// Rendered slide width, used to compute the scroll offset.
    pub width: Option<u32>,
}

/// Product detail page.
#[derive(Template, WebTemplate)]
#[template(path = "pages/product.html")]
pub struct ProductPageTemplate {
    pub title: String,
    pub section: MainProductDetailsTemplate,
}

/// Display the product page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Query(query): Query<ProductQuery>,
) -> Result<ProductPageTemplate> {
    let product = state
        .storefront()
        .product_by_handle(&handle, state.locale())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {handle}")))?;

    // An unparseable variant falls back to the default variant
    let selected = query
        .variant
        .as_deref()
        .and_then(|raw| VariantGid::parse(raw).ok());
    let details = ProductDetails::from_product(&product, selected.as_ref());

    Ok(ProductPageTemplate {
        title: details.title.clone(),
        section: MainProductDetailsTemplate::new(
            &Settings::new(),
            details,
            state.free_shipping_threshold(),
        ),
    })
}

/// Gallery fragment after a navigation request.
///
/// The mock product handle renders the preset gallery when the store does
/// not carry it, so builder previews can navigate too.
#[instrument(skip(state))]
pub async fn gallery(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Query(query): Query<GalleryQuery>,
) -> Result<ProductGalleryTemplate> {
    let details = match state
        .storefront()
        .product_by_handle(&handle, state.locale())
        .await
    {
        Ok(Some(product)) => ProductDetails::from_product(&product, None),
        Ok(None) if handle == MOCK_HANDLE => ProductDetails::mock(),
        Ok(None) => return Err(AppError::NotFound(format!("product {handle}"))),
        Err(e) if handle == MOCK_HANDLE => {
            tracing::warn!(error = %e, "Falling back to preset gallery");
            ProductDetails::mock()
        }
        Err(e) => return Err(e.into()),
    };

    let mut carousel = CarouselState::at(details.images.clone(), query.index.unwrap_or(0));
    let slide_width = query.width.unwrap_or(0);
    if let Some(action) = query.action.as_deref() {
        let action = action
            .parse::<CarouselAction>()
            .map_err(|()| AppError::BadRequest(format!("unknown gallery action: {action}")))?;
        carousel.apply(action, slide_width);
    }

    let mut fragment = ProductGalleryTemplate::new(&details, carousel);
    fragment.scroll_offset = query
        .width
        .map(|width| fragment.carousel.scroll_offset(width));
    Ok(fragment)
}
