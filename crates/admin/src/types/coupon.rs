//! Coupon domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopdesk_core::{CategoryId, CouponDiscountType, CouponId, ProductId};

/// A coupon as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    /// Coupon ID.
    pub id: CouponId,
    /// Customer-facing code, stored uppercase.
    pub code: String,
    /// How `discount_value` is interpreted.
    pub discount_type: CouponDiscountType,
    /// Percentage or flat amount, per `discount_type`.
    pub discount_value: Decimal,
    /// Cap on the computed discount, if any.
    #[serde(default)]
    pub max_discount: Option<Decimal>,
    /// Minimum purchase amount for the coupon to apply.
    pub min_purchase: Decimal,
    /// Start of the validity window.
    pub valid_from: DateTime<Utc>,
    /// End of the validity window.
    pub valid_to: DateTime<Utc>,
    /// Maximum number of redemptions.
    pub usage_limit: i64,
    /// Redemptions so far. Read-only; the backend maintains it.
    #[serde(default)]
    pub used_count: i64,
    /// Categories the coupon applies to; empty means all.
    #[serde(default)]
    pub categories: Vec<CategoryId>,
    /// Products the coupon applies to; empty means all.
    #[serde(default)]
    pub products: Vec<ProductId>,
}

/// Payload for creating or replacing a coupon.
///
/// Built by [`crate::forms::CouponForm::validate`], which enforces the
/// client-side rules and normalizes the code to uppercase.
#[derive(Debug, Clone, Serialize)]
pub struct NewCoupon {
    /// Customer-facing code, normalized uppercase.
    pub code: String,
    /// How `discount_value` is interpreted.
    pub discount_type: CouponDiscountType,
    /// Percentage or flat amount, per `discount_type`.
    pub discount_value: Decimal,
    /// Cap on the computed discount, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<Decimal>,
    /// Minimum purchase amount for the coupon to apply.
    pub min_purchase: Decimal,
    /// Start of the validity window.
    pub valid_from: DateTime<Utc>,
    /// End of the validity window.
    pub valid_to: DateTime<Utc>,
    /// Maximum number of redemptions.
    pub usage_limit: i64,
    /// Categories the coupon applies to; empty means all.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryId>,
    /// Products the coupon applies to; empty means all.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<ProductId>,
}

/// Request payload for `POST /api/coupons/validate/`.
#[derive(Debug, Clone, Serialize)]
pub struct CouponValidationRequest {
    /// Code to check, normalized uppercase before sending.
    pub code: String,
    /// Current cart total the discount would apply to.
    pub cart_total: Decimal,
}

/// Backend verdict on a coupon code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponValidation {
    /// Whether the coupon applies to the given cart.
    pub valid: bool,
    /// Computed discount amount when valid.
    #[serde(default)]
    pub discount: Option<Decimal>,
    /// Human-readable reason when invalid.
    #[serde(default)]
    pub message: Option<String>,
}
