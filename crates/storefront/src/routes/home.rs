//! Home page route handler.
//!
//! Composes the landing-page sections from their preset content.

use std::fmt;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::filters;
use crate::sections::common::Settings;
use crate::sections::featured_collections_sales::{self, FeaturedCollectionsSalesTemplate};
use crate::sections::featured_gifts_grid::{self, FeaturedGiftsGridTemplate};
use crate::sections::featured_products::{self, FeaturedProductsTemplate};
use crate::sections::middle_collections_list::MiddleCollectionsListTemplate;
use crate::sections::sale_hero_banner::{self, SaleHeroBannerTemplate};
use crate::state::AppState;

/// A rendered section on the home page.
pub enum HomeSection {
    SaleHero(SaleHeroBannerTemplate),
    FeaturedProducts(FeaturedProductsTemplate),
    CollectionsSales(FeaturedCollectionsSalesTemplate),
    GiftsGrid(FeaturedGiftsGridTemplate),
    CollectionsList(MiddleCollectionsListTemplate),
}

impl fmt::Display for HomeSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SaleHero(section) => fmt::Display::fmt(section, f),
            Self::FeaturedProducts(section) => fmt::Display::fmt(section, f),
            Self::CollectionsSales(section) => fmt::Display::fmt(section, f),
            Self::GiftsGrid(section) => fmt::Display::fmt(section, f),
            Self::CollectionsList(section) => fmt::Display::fmt(section, f),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub sections: Vec<HomeSection>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    let client = state.storefront();
    let locale = state.locale();

    let preset = |schema: woolstep_core::SectionSchema| schema.presets.unwrap_or_default();

    let featured = featured_products::load_section(
        client,
        locale,
        &preset(featured_products::schema()),
    )
    .await;
    let sales = featured_collections_sales::load_section(
        client,
        locale,
        &preset(featured_collections_sales::schema()),
    )
    .await;

    HomeTemplate {
        sections: vec![
            HomeSection::SaleHero(SaleHeroBannerTemplate::from_preset(&preset(
                sale_hero_banner::schema(),
            ))),
            HomeSection::FeaturedProducts(featured),
            HomeSection::CollectionsSales(sales),
            HomeSection::GiftsGrid(FeaturedGiftsGridTemplate::from_preset(&preset(
                featured_gifts_grid::schema(),
            ))),
            HomeSection::CollectionsList(MiddleCollectionsListTemplate::new(&Settings::new())),
        ],
    }
}
