//! Price and discount types using decimal arithmetic.
//!
//! Money is carried as [`rust_decimal::Decimal`] end to end. The backend
//! serializes decimal fields as strings, which the default `Decimal` serde
//! impl round-trips without precision loss.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount with currency information.
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
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

/// Errors that can occur when constructing a [`DiscountPercent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DiscountError {
    /// The percentage is outside the 1-100 range.
    #[error("discount percentage must be between 1 and 100 (got {0})")]
    OutOfRange(u8),
}

/// A variant discount percentage, constrained to 1-100.
///
/// A value of 0 is not representable: "no discount" is modeled as the
/// absence of a `DiscountPercent`, matching the backend contract where an
/// inactive discount clears both percentage and discount price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// Create a discount percentage.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::OutOfRange`] unless `1 <= pct <= 100`.
    pub const fn new(pct: u8) -> Result<Self, DiscountError> {
        if pct >= 1 && pct <= 100 {
            Ok(Self(pct))
        } else {
            Err(DiscountError::OutOfRange(pct))
        }
    }

    /// Get the percentage as a plain number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Compute the discounted price for a variant.
///
/// `price - price * pct / 100`, rounded to 2 decimal places away from zero
/// (the same rounding the dashboard applied for display). The result
/// always carries two decimal places, so it serializes as e.g. `90.00`.
#[must_use]
pub fn discount_price(price: Decimal, pct: DiscountPercent) -> Decimal {
    let discount = price * Decimal::from(pct.get()) / Decimal::from(100);
    let mut result =
        (price - discount).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    result.rescale(2);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_discount_percent_range() {
        assert!(DiscountPercent::new(1).is_ok());
        assert!(DiscountPercent::new(100).is_ok());
        assert_eq!(DiscountPercent::new(0), Err(DiscountError::OutOfRange(0)));
        assert_eq!(
            DiscountPercent::new(101),
            Err(DiscountError::OutOfRange(101))
        );
    }

    #[test]
    fn test_discount_price_ten_percent() {
        let pct = DiscountPercent::new(10).unwrap();
        let result = discount_price(d("100"), pct);
        assert_eq!(result, d("90.00"));
        // The serialized form keeps two decimal places.
        assert_eq!(result.to_string(), "90.00");
    }

    #[test]
    fn test_discount_price_rounds_to_two_places() {
        // 19.99 * 0.85 = 16.9915 -> 16.99
        let pct = DiscountPercent::new(15).unwrap();
        assert_eq!(discount_price(d("19.99"), pct), d("16.99"));

        // 10.01 * 0.67 = 6.7067 -> 6.71
        let pct = DiscountPercent::new(33).unwrap();
        assert_eq!(discount_price(d("10.01"), pct), d("6.71"));
    }

    #[test]
    fn test_discount_price_midpoint_rounds_away_from_zero() {
        // 1.25 at 50% -> 0.625 -> 0.63
        let pct = DiscountPercent::new(50).unwrap();
        assert_eq!(discount_price(d("1.25"), pct), d("0.63"));
    }

    #[test]
    fn test_discount_price_full() {
        let pct = DiscountPercent::new(100).unwrap();
        assert_eq!(discount_price(d("42.50"), pct), d("0.00"));
    }

    #[test]
    fn test_price_serde() {
        let price = Price::new(d("19.99"), CurrencyCode::USD);
        let json = serde_json::to_string(&price).unwrap();
        assert!(json.contains("\"19.99\""));
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
