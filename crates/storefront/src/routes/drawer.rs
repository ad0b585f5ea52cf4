//! Cart drawer fragment handlers.
//!
//! The drawer keeps no server-side state: each request carries the line
//! item in form fields and gets back the re-rendered drawer.

use axum::{
    Form,
    extract::{Query, State},
    response::{AppendHeaders, IntoResponse},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::sections::cart_drawer::{CartDrawer, CartDrawerTemplate, CartSnapshot};
use crate::state::AppState;

/// HTMX event fired whenever the drawer changes.
pub const DRAWER_EVENT: &str = "cart-drawer-updated";

/// Quantity step requested by the drawer controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityAction {
    Increment,
    Decrement,
}

#[derive(Debug, Deserialize)]
pub struct QuantityQuery {
    pub action: QuantityAction,
}

fn respond(state: &AppState, drawer: &CartDrawer) -> impl IntoResponse + use<> {
    (
        AppendHeaders([("HX-Trigger", DRAWER_EVENT)]),
        CartDrawerTemplate::new(drawer, state.free_shipping_threshold()),
    )
}

/// Open the drawer with the submitted line item.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(snapshot): Form<CartSnapshot>,
) -> Result<impl IntoResponse> {
    add_breadcrumb("cart", "Added to cart", Some(&[("title", snapshot.title.as_str())]));
    let item = snapshot.into_line_item()?;
    let drawer = CartDrawer::default().add_to_cart(item);
    Ok(respond(&state, &drawer))
}

/// Step the quantity of the submitted line item.
#[instrument(skip(state))]
pub async fn quantity(
    State(state): State<AppState>,
    Query(query): Query<QuantityQuery>,
    Form(snapshot): Form<CartSnapshot>,
) -> Result<impl IntoResponse> {
    let drawer = CartDrawer::default().add_to_cart(snapshot.into_line_item()?);
    let drawer = match query.action {
        QuantityAction::Increment => drawer.increment(),
        QuantityAction::Decrement => drawer.decrement(),
    };
    Ok(respond(&state, &drawer))
}

/// Close the drawer.
pub async fn close(State(state): State<AppState>) -> impl IntoResponse {
    respond(&state, &CartDrawer::default().close())
}
