//! Variant form validation and payload derivation.
//!
//! Besides range checks, this is where the two client-side derivations
//! live: the SKU uniqueness suffix and the discounted price.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shopdesk_core::{DiscountPercent, Sku, discount_price};

use super::FormError;
use crate::types::NewVariant;

/// Raw variant form input.
#[derive(Debug, Clone)]
pub struct VariantForm {
    /// Size label; may be empty, in which case the SKU suffix falls back
    /// to a timestamp.
    pub size: String,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock.
    pub stock: i64,
    /// Base SKU as entered; the suffix is appended on validation.
    pub sku: Sku,
    /// Whether the discount fields apply.
    pub is_discount_active: bool,
    /// Discount percentage input; ignored while the flag is unset.
    pub discount_percentage: Option<u8>,
}

impl VariantForm {
    /// Validate the form and build the request payload.
    ///
    /// Applies the SKU suffix (size-derived, or timestamp-derived from
    /// `now` when the size is empty). When the discount flag is set the
    /// percentage must be 1-100 and the discounted price is derived;
    /// when unset both discount fields are cleared regardless of input.
    ///
    /// # Errors
    ///
    /// - [`FormError::NonPositivePrice`] when `price <= 0`
    /// - [`FormError::NegativeStock`] when `stock < 0`
    /// - [`FormError::DiscountOutOfRange`] when the flag is set and the
    ///   percentage is missing or outside 1-100
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewVariant, FormError> {
        if self.price <= Decimal::ZERO {
            return Err(FormError::NonPositivePrice);
        }
        if self.stock < 0 {
            return Err(FormError::NegativeStock);
        }

        let (discount_percentage, derived_price) = if self.is_discount_active {
            let pct = self
                .discount_percentage
                .and_then(|raw| DiscountPercent::new(raw).ok())
                .ok_or(FormError::DiscountOutOfRange)?;
            (Some(pct), Some(discount_price(self.price, pct)))
        } else {
            (None, None)
        };

        let sku = if self.size.trim().is_empty() {
            self.sku.with_timestamp_suffix(now)
        } else {
            self.sku.with_size_suffix(&self.size)
        };

        Ok(NewVariant {
            size: self.size,
            price: self.price,
            stock: self.stock,
            sku,
            is_discount_active: self.is_discount_active,
            discount_percentage,
            discount_price: derived_price,
        })
    }
}
