//! Cart drawer state machine.
//!
//! The drawer holds at most one ephemeral line item. Nothing is persisted:
//! each drawer fragment request carries the line item and the drawer renders
//! the next state from it.

use askama::Template;
use askama_web::WebTemplate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use woolstep_core::{CurrencyCode, Price, PriceError};

/// Largest quantity the drawer stepper reaches.
pub const MAX_QUANTITY: u32 = 99;

/// Largest unit or compare-at amount accepted from drawer form fields.
pub const MAX_FORM_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Snapshot of the product added from the product panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineItem {
    pub title: String,
    pub variant_label: String,
    pub size: String,
    pub unit_price: Price,
    pub compare_at_price: Option<Price>,
    pub image_url: String,
    quantity: u32,
}

impl CartLineItem {
    /// Line item with `quantity` clamped to `1..=MAX_QUANTITY`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        variant_label: impl Into<String>,
        size: impl Into<String>,
        unit_price: Price,
        compare_at_price: Option<Price>,
        image_url: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            title: title.into(),
            variant_label: variant_label.into(),
            size: size.into(),
            unit_price,
            compare_at_price,
            image_url: image_url.into(),
            quantity: quantity.clamp(1, MAX_QUANTITY),
        }
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Open/closed drawer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CartDrawer {
    #[default]
    Closed,
    Open(CartLineItem),
}

impl CartDrawer {
    /// Open the drawer with `item`, replacing any item already shown.
    #[must_use]
    pub fn add_to_cart(self, item: CartLineItem) -> Self {
        Self::Open(item)
    }

    /// Close the drawer. Used for both the close button and the backdrop.
    #[must_use]
    pub fn close(self) -> Self {
        Self::Closed
    }

    /// Increase the quantity by one, never above `MAX_QUANTITY`. No-op while closed.
    #[must_use]
    pub fn increment(self) -> Self {
        match self {
            Self::Open(mut item) => {
                item.quantity = item.quantity.saturating_add(1).min(MAX_QUANTITY);
                Self::Open(item)
            }
            Self::Closed => Self::Closed,
        }
    }

    /// Decrease the quantity by one, never below 1. No-op while closed.
    #[must_use]
    pub fn decrement(self) -> Self {
        match self {
            Self::Open(mut item) => {
                item.quantity = item.quantity.saturating_sub(1).max(1);
                Self::Open(item)
            }
            Self::Closed => Self::Closed,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub const fn item(&self) -> Option<&CartLineItem> {
        match self {
            Self::Open(item) => Some(item),
            Self::Closed => None,
        }
    }
}

// =============================================================================
// Free shipping
// =============================================================================

/// Progress toward the free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingProgress {
    subtotal: Price,
    threshold: Decimal,
}

impl ShippingProgress {
    #[must_use]
    pub const fn new(subtotal: Price, threshold: Decimal) -> Self {
        Self {
            subtotal,
            threshold,
        }
    }

    /// `min(1, subtotal / threshold)`. A non-positive threshold counts as reached.
    #[must_use]
    pub fn progress(&self) -> Decimal {
        if self.threshold <= Decimal::ZERO {
            return Decimal::ONE;
        }
        self.subtotal
            .amount
            .checked_div(self.threshold)
            .unwrap_or(Decimal::ONE)
            .min(Decimal::ONE)
            .max(Decimal::ZERO)
    }

    /// `max(0, threshold - subtotal)`.
    #[must_use]
    pub fn remaining(&self) -> Price {
        Price::new(
            self.threshold
                .saturating_sub(self.subtotal.amount)
                .max(Decimal::ZERO),
            self.subtotal.currency_code,
        )
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.remaining().is_zero()
    }

    /// Progress bar width, e.g. `40%`.
    #[must_use]
    pub fn bar_width(&self) -> String {
        let percent = (self.progress() * Decimal::ONE_HUNDRED).round_dp(2).normalize();
        format!("{percent}%")
    }

    /// Header message shown above the progress bar.
    #[must_use]
    pub fn message(&self) -> String {
        if self.is_free() {
            "You've earned free shipping!".to_string()
        } else {
            format!(
                "Spend {} more to earn free shipping!",
                self.remaining().display_rounded()
            )
        }
    }
}

// =============================================================================
// Form snapshot
// =============================================================================

/// Line item as carried in drawer form fields.
///
/// Prices travel as plain decimal amounts (`66.00`) plus a currency code so
/// the drawer can recompute subtotals without another storefront query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub title: String,
    #[serde(default)]
    pub variant: String,
    #[serde(default)]
    pub size: String,
    pub price: String,
    #[serde(default)]
    pub compare_at_price: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

impl CartSnapshot {
    /// Snapshot of an existing line item.
    #[must_use]
    pub fn from_item(item: &CartLineItem) -> Self {
        Self {
            title: item.title.clone(),
            variant: item.variant_label.clone(),
            size: item.size.clone(),
            price: item.unit_price.amount.to_string(),
            compare_at_price: item.compare_at_price.map(|p| p.amount.to_string()),
            currency: Some(item.unit_price.currency_code.code().to_string()),
            image: item.image_url.clone(),
            quantity: item.quantity,
        }
    }

    /// Validate the snapshot into a line item.
    ///
    /// # Errors
    ///
    /// Returns `PriceError` if a price or the currency does not parse, or if a
    /// price is negative or above `MAX_FORM_AMOUNT`.
    pub fn into_line_item(self) -> Result<CartLineItem, PriceError> {
        let currency = match self.currency.as_deref().filter(|c| !c.trim().is_empty()) {
            Some(code) => code.parse()?,
            None => CurrencyCode::default(),
        };
        let unit_price =
            Price::parse_within(&self.price, currency, Decimal::ZERO, MAX_FORM_AMOUNT)?;
        let compare_at_price = self
            .compare_at_price
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(|p| Price::parse_within(p, currency, Decimal::ZERO, MAX_FORM_AMOUNT))
            .transpose()?;

        Ok(CartLineItem::new(
            self.title,
            self.variant,
            self.size,
            unit_price,
            compare_at_price,
            self.image,
            self.quantity,
        ))
    }
}

// =============================================================================
// Template
// =============================================================================

/// Display data for an open drawer.
#[derive(Debug, Clone)]
pub struct DrawerView {
    pub title: String,
    pub variant_label: String,
    pub size: String,
    pub price: String,
    pub compare_at_price: Option<String>,
    pub image_url: String,
    pub quantity: u32,
    pub at_max_quantity: bool,
    pub subtotal: String,
    pub shipping_message: String,
    pub shipping_bar_width: String,
    pub snapshot: CartSnapshot,
}

impl DrawerView {
    #[must_use]
    pub fn new(item: &CartLineItem, free_shipping_threshold: Decimal) -> Self {
        let shipping = ShippingProgress::new(item.subtotal(), free_shipping_threshold);
        Self {
            title: item.title.clone(),
            variant_label: item.variant_label.clone(),
            size: item.size.clone(),
            price: item.unit_price.display_rounded(),
            compare_at_price: item.compare_at_price.map(|p| p.display_rounded()),
            image_url: item.image_url.clone(),
            quantity: item.quantity,
            at_max_quantity: item.quantity >= MAX_QUANTITY,
            subtotal: item.subtotal().display_rounded(),
            shipping_message: shipping.message(),
            shipping_bar_width: shipping.bar_width(),
            snapshot: CartSnapshot::from_item(item),
        }
    }
}

/// Cart drawer fragment. Renders an empty container while closed.
#[derive(Template, WebTemplate)]
#[template(path = "sections/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub view: Option<DrawerView>,
}

impl CartDrawerTemplate {
    #[must_use]
    pub fn new(drawer: &CartDrawer, free_shipping_threshold: Decimal) -> Self {
        Self {
            view: drawer
                .item()
                .map(|item| DrawerView::new(item, free_shipping_threshold)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use woolstep_core::CurrencyCode;

    use super::*;

    const THRESHOLD: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

    fn usd(amount: &str) -> Price {
        Price::parse(amount, CurrencyCode::USD).unwrap()
    }

    fn item(price: &str, quantity: u32) -> CartLineItem {
        CartLineItem::new(
            "Women's Kiwi Slipper",
            "Dark Camel (Stony Cream Sole)",
            "11",
            usd(price),
            Some(usd("95")),
            "https://cdn.shopify.com/kiwi.png",
            quantity,
        )
    }

    #[test]
    fn test_add_to_cart_opens_drawer() {
        let drawer = CartDrawer::default().add_to_cart(item("66", 1));
        assert!(drawer.is_open());
        assert_eq!(drawer.item().unwrap().quantity(), 1);
    }

    #[test]
    fn test_add_while_open_replaces_snapshot() {
        let drawer = CartDrawer::default()
            .add_to_cart(item("66", 3))
            .add_to_cart(item("40", 1));
        assert_eq!(drawer.item().unwrap().unit_price, usd("40"));
        assert_eq!(drawer.item().unwrap().quantity(), 1);
    }

    #[test]
    fn test_close() {
        let drawer = CartDrawer::default().add_to_cart(item("66", 1)).close();
        assert_eq!(drawer, CartDrawer::Closed);
    }

    #[test]
    fn test_decrement_floor_is_one() {
        let drawer = CartDrawer::Open(item("66", 1)).decrement();
        assert_eq!(drawer.item().unwrap().quantity(), 1);
    }

    #[test]
    fn test_increment_then_decrement() {
        let drawer = CartDrawer::Open(item("66", 1)).increment().increment();
        assert_eq!(drawer.item().unwrap().quantity(), 3);
        assert_eq!(drawer.decrement().item().unwrap().quantity(), 2);
    }

    #[test]
    fn test_quantity_changes_ignored_while_closed() {
        assert_eq!(CartDrawer::Closed.increment(), CartDrawer::Closed);
        assert_eq!(CartDrawer::Closed.decrement(), CartDrawer::Closed);
    }

    #[test]
    fn test_zero_quantity_is_raised_to_one() {
        assert_eq!(item("66", 0).quantity(), 1);
    }

    #[test]
    fn test_subtotal() {
        assert_eq!(item("66", 2).subtotal(), usd("132"));
    }

    #[test]
    fn test_shipping_progress_reached() {
        let progress = ShippingProgress::new(usd("80"), THRESHOLD);
        assert_eq!(progress.progress(), Decimal::ONE);
        assert!(progress.remaining().is_zero());
        assert_eq!(progress.message(), "You've earned free shipping!");
        assert_eq!(progress.bar_width(), "100%");
    }

    #[test]
    fn test_shipping_progress_partial() {
        let progress = ShippingProgress::new(usd("30"), THRESHOLD);
        assert_eq!(progress.remaining(), usd("45"));
        assert_eq!(progress.bar_width(), "40%");
        assert_eq!(progress.message(), "Spend $45 more to earn free shipping!");
    }

    #[test]
    fn test_snapshot_round_trip_keeps_quantity() {
        let snapshot = CartSnapshot::from_item(&item("66", 2));
        assert_eq!(snapshot.price, "66");
        assert_eq!(snapshot.into_line_item().unwrap(), item("66", 2));
    }

    #[test]
    fn test_snapshot_with_empty_compare_at() {
        let snapshot = CartSnapshot {
            title: "Tee".to_string(),
            variant: String::new(),
            size: String::new(),
            price: "30.00".to_string(),
            compare_at_price: Some(String::new()),
            currency: None,
            image: String::new(),
            quantity: 0,
        };
        let item = snapshot.into_line_item().unwrap();
        assert!(item.compare_at_price.is_none());
        assert_eq!(item.quantity(), 1);
    }

    #[test]
    fn test_snapshot_rejects_bad_price() {
        let mut snapshot = CartSnapshot::from_item(&item("66", 1));
        snapshot.price = "sixty".to_string();
        assert!(matches!(
            snapshot.into_line_item(),
            Err(PriceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_quantity_is_capped() {
        assert_eq!(item("66", u32::MAX).quantity(), MAX_QUANTITY);
        let drawer = CartDrawer::Open(item("66", MAX_QUANTITY)).increment();
        assert_eq!(drawer.item().unwrap().quantity(), MAX_QUANTITY);
    }

    #[test]
    fn test_snapshot_rejects_negative_price() {
        let mut snapshot = CartSnapshot::from_item(&item("66", 1));
        snapshot.price = "-30".to_string();
        assert!(matches!(
            snapshot.into_line_item(),
            Err(PriceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_snapshot_rejects_huge_prices() {
        let mut snapshot = CartSnapshot::from_item(&item("66", 2));
        snapshot.price = "79228162514264337593543950335".to_string();
        assert!(matches!(
            snapshot.clone().into_line_item(),
            Err(PriceError::OutOfRange(_))
        ));

        snapshot.price = "66".to_string();
        snapshot.compare_at_price = Some("-79228162514264337593543950335".to_string());
        assert!(matches!(
            snapshot.into_line_item(),
            Err(PriceError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_largest_accepted_order_renders() {
        let snapshot = CartSnapshot {
            title: "Tee".to_string(),
            variant: String::new(),
            size: String::new(),
            price: MAX_FORM_AMOUNT.to_string(),
            compare_at_price: None,
            currency: None,
            image: String::new(),
            quantity: u32::MAX,
        };
        let drawer = CartDrawer::default().add_to_cart(snapshot.into_line_item().unwrap());
        let html = CartDrawerTemplate::new(&drawer, THRESHOLD).render().unwrap();
        assert!(html.contains("You've earned free shipping!"));
    }

    #[test]
    fn test_shipping_progress_extreme_subtotal() {
        let subtotal = Price::new(Decimal::MIN, CurrencyCode::USD);
        let progress = ShippingProgress::new(subtotal, Decimal::MAX);
        assert_eq!(progress.remaining().amount, Decimal::MAX);
        assert_eq!(progress.progress(), Decimal::ZERO);
    }

    #[test]
    fn test_drawer_template_renders_header_and_subtotal() {
        let drawer = CartDrawer::default().add_to_cart(item("66", 1));
        let html = CartDrawerTemplate::new(&drawer, THRESHOLD).render().unwrap();
        assert!(html.contains("Cart (1)"));
        assert!(html.contains("Spend $9 more to earn free shipping!"));
        assert!(html.contains("$66"));
    }

    #[test]
    fn test_closed_drawer_renders_no_panel() {
        let html = CartDrawerTemplate::new(&CartDrawer::Closed, THRESHOLD)
            .render()
            .unwrap();
        assert!(!html.contains("Cart ("));
    }

    #[test]
    fn test_zero_threshold_counts_as_reached() {
        let progress = ShippingProgress::new(usd("10"), Decimal::ZERO);
        assert_eq!(progress.progress(), Decimal::ONE);
        assert!(progress.is_free());
    }
}
