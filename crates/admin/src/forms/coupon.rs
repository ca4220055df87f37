//! Coupon form validation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shopdesk_core::{CategoryId, CouponDiscountType, ProductId};

use super::{FormError, validate_required};
use crate::types::NewCoupon;

/// Raw coupon form input.
#[derive(Debug, Clone)]
pub struct CouponForm {
    /// Customer-facing code; normalized to uppercase on validation.
    pub code: String,
    /// How `discount_value` is interpreted.
    pub discount_type: CouponDiscountType,
    /// Percentage or flat amount, per `discount_type`.
    pub discount_value: Decimal,
    /// Cap on the computed discount.
    pub max_discount: Option<Decimal>,
    /// Minimum purchase amount.
    pub min_purchase: Decimal,
    /// Start of the validity window.
    pub valid_from: DateTime<Utc>,
    /// End of the validity window.
    pub valid_to: DateTime<Utc>,
    /// Maximum number of redemptions.
    pub usage_limit: i64,
    /// Categories the coupon applies to; empty means all.
    pub categories: Vec<CategoryId>,
    /// Products the coupon applies to; empty means all.
    pub products: Vec<ProductId>,
}

impl CouponForm {
    /// Validate the form and build the request payload.
    ///
    /// # Errors
    ///
    /// - [`FormError::Required`] when the code is blank
    /// - [`FormError::DateOrder`] when `valid_to <= valid_from`
    /// - [`FormError::NonPositiveDiscount`] when `discount_value <= 0`
    /// - [`FormError::PercentTooLarge`] for percentage discounts over 100
    /// - [`FormError::UsageLimitTooSmall`] when `usage_limit < 1`
    pub fn validate(self) -> Result<NewCoupon, FormError> {
        validate_required(&self.code, "code")?;

        if self.valid_to <= self.valid_from {
            return Err(FormError::DateOrder);
        }
        if self.discount_value <= Decimal::ZERO {
            return Err(FormError::NonPositiveDiscount);
        }
        if self.discount_type == CouponDiscountType::Percent
            && self.discount_value > Decimal::from(100)
        {
            return Err(FormError::PercentTooLarge);
        }
        if self.usage_limit < 1 {
            return Err(FormError::UsageLimitTooSmall);
        }

        Ok(NewCoupon {
            code: self.code.trim().to_uppercase(),
            discount_type: self.discount_type,
            discount_value: self.discount_value,
            max_discount: self.max_discount,
            min_purchase: self.min_purchase,
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            usage_limit: self.usage_limit,
            categories: self.categories,
            products: self.products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_form() -> CouponForm {
        CouponForm {
            code: "summer10".to_string(),
            discount_type: CouponDiscountType::Percent,
            discount_value: Decimal::from(10),
            max_discount: None,
            min_purchase: Decimal::ZERO,
            valid_from: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            valid_to: Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap(),
            usage_limit: 100,
            categories: vec![],
            products: vec![],
        }
    }

    #[test]
    fn test_valid_form_normalizes_code_uppercase() {
        let coupon = base_form().validate().unwrap();
        assert_eq!(coupon.code, "SUMMER10");
    }

    #[test]
    fn test_rejects_inverted_window() {
        let mut form = base_form();
        form.valid_to = form.valid_from;
        assert_eq!(form.validate().unwrap_err(), FormError::DateOrder);
    }

    #[test]
    fn test_rejects_non_positive_value() {
        let mut form = base_form();
        form.discount_value = Decimal::ZERO;
        assert_eq!(form.validate().unwrap_err(), FormError::NonPositiveDiscount);
    }

    #[test]
    fn test_rejects_percent_over_100() {
        let mut form = base_form();
        form.discount_value = Decimal::from(150);
        assert_eq!(form.validate().unwrap_err(), FormError::PercentTooLarge);
    }

    #[test]
    fn test_flat_discount_over_100_is_fine() {
        let mut form = base_form();
        form.discount_type = CouponDiscountType::Flat;
        form.discount_value = Decimal::from(150);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_rejects_usage_limit_below_one() {
        let mut form = base_form();
        form.usage_limit = 0;
        assert_eq!(form.validate().unwrap_err(), FormError::UsageLimitTooSmall);
    }

    #[test]
    fn test_rejects_blank_code() {
        let mut form = base_form();
        form.code = "   ".to_string();
        assert_eq!(form.validate().unwrap_err(), FormError::Required("code"));
    }
}
