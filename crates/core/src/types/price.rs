//! Type-safe price representation using decimal arithmetic.
//!
//! Storefront sections show whole-currency prices (`$66`, not `$66.00`) and
//! a rounded discount percentage derived from the compare-at price.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a price from API strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("amount out of range: {0}")]
    OutOfRange(String),
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Parse a decimal amount string as returned by the Storefront API.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::InvalidAmount` if the amount is not a decimal.
    pub fn parse(amount: &str, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| PriceError::InvalidAmount(amount.to_string()))?;
        Ok(Self::new(amount, currency_code))
    }

    /// Whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Amount rounded to a whole currency unit, half away from zero.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format as a whole-unit price string, e.g. `$66`.
    #[must_use]
    pub fn display_rounded(&self) -> String {
        format!("{}{}", self.currency_code.symbol(), self.rounded())
    }

    /// Parse an amount that must lie in `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::InvalidAmount` if the amount is not a decimal and
    /// `PriceError::OutOfRange` if it falls outside the bounds.
    pub fn parse_within(
        amount: &str,
        currency_code: CurrencyCode,
        min: Decimal,
        max: Decimal,
    ) -> Result<Self, PriceError> {
        let price = Self::parse(amount, currency_code)?;
        if price.amount < min || price.amount > max {
            return Err(PriceError::OutOfRange(amount.trim().to_string()));
        }
        Ok(price)
    }

    /// Multiply the price by a quantity, saturating at the decimal bounds.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(
            self.amount.saturating_mul(Decimal::from(quantity)),
            self.currency_code,
        )
    }

    /// Rounded percentage saved relative to a compare-at price.
    ///
    /// Returns `None` when the compare-at price is zero, so callers never
    /// divide by zero. A compare-at below the price yields a negative
    /// percentage, which callers are free to hide.
    #[must_use]
    pub fn discount_percent(&self, compare_at: &Self) -> Option<i64> {
        if compare_at.amount.is_zero() {
            return None;
        }
        compare_at
            .amount
            .checked_sub(self.amount)?
            .checked_div(compare_at.amount)?
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    NZD,
    JPY,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD | Self::NZD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::NZD => "NZD",
            Self::JPY => "JPY",
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            "NZD" => Ok(Self::NZD),
            "JPY" => Ok(Self::JPY),
            other => Err(PriceError::UnsupportedCurrency(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn usd(amount: &str) -> Price {
        Price::parse(amount, CurrencyCode::USD).unwrap()
    }

    #[test]
    fn test_display_rounded_drops_cents() {
        assert_eq!(usd("66.0").display_rounded(), "$66");
        assert_eq!(usd("110.00").display_rounded(), "$110");
        assert_eq!(usd("94.5").display_rounded(), "$95");
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(usd("66.00").discount_percent(&usd("110.00")), Some(40));
        assert_eq!(usd("66").discount_percent(&usd("95")), Some(31));
    }

    #[test]
    fn test_discount_percent_zero_compare_at() {
        assert_eq!(usd("66").discount_percent(&usd("0")), None);
    }

    #[test]
    fn test_times() {
        assert_eq!(usd("66").times(3).display_rounded(), "$198");
    }

    #[test]
    fn test_times_saturates_instead_of_overflowing() {
        let max = Price::new(Decimal::MAX, CurrencyCode::USD);
        assert_eq!(max.times(2).amount, Decimal::MAX);
        assert_eq!(usd("100000000000000000000").times(u32::MAX).amount, Decimal::MAX);
    }

    #[test]
    fn test_discount_percent_extreme_amounts() {
        let min = Price::new(Decimal::MIN, CurrencyCode::USD);
        let max = Price::new(Decimal::MAX, CurrencyCode::USD);
        assert_eq!(min.discount_percent(&max), None);
    }

    #[test]
    fn test_parse_within() {
        let max = Decimal::from(1000);
        assert_eq!(
            Price::parse_within("66", CurrencyCode::USD, Decimal::ZERO, max),
            Ok(usd("66"))
        );
        assert!(matches!(
            Price::parse_within("-30", CurrencyCode::USD, Decimal::ZERO, max),
            Err(PriceError::OutOfRange(_))
        ));
        assert!(matches!(
            Price::parse_within("1000.01", CurrencyCode::USD, Decimal::ZERO, max),
            Err(PriceError::OutOfRange(_))
        ));
        assert!(matches!(
            Price::parse_within("abc", CurrencyCode::USD, Decimal::ZERO, max),
            Err(PriceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_invalid_amount() {
        assert!(matches!(
            Price::parse("abc", CurrencyCode::USD),
            Err(PriceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("gbp".parse::<CurrencyCode>().unwrap(), CurrencyCode::GBP);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(usd("19.5").to_string(), "$19.50");
    }
}
