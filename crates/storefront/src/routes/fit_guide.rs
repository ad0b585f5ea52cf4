//! Fit guide fragment handler.

use axum::extract::Query;
use serde::Deserialize;

use crate::sections::fit_guide::FitGuideTemplate;
use crate::sections::ui_state::Overlay;

#[derive(Debug, Default, Deserialize)]
pub struct FitGuideQuery {
    /// `true`/`false`; absent means open.
    pub open: Option<String>,
}

/// Render the fit guide open or closed.
pub async fn show(Query(query): Query<FitGuideQuery>) -> FitGuideTemplate {
    let overlay = match query.open.as_deref() {
        Some(value) => value.parse().unwrap_or_default(),
        None => Overlay::default().open(),
    };
    FitGuideTemplate::new(overlay)
}
