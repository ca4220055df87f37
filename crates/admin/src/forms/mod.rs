//! Pre-submission form validation.
//!
//! Every screen validated its inputs before calling the backend; a
//! validation failure yields a specific message and no network call.
//! Each form's `validate` consumes the raw input and produces the typed
//! request payload.

mod banner;
mod coupon;
mod shipping;
mod variant;

pub use banner::BannerForm;
pub use coupon::CouponForm;
pub use shipping::ShippingForm;
pub use variant::VariantForm;

use thiserror::Error;

/// A client-side validation failure. One variant per rule, so each
/// rejection carries its specific message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field is empty.
    #[error("{0} is required")]
    Required(&'static str),

    /// A URL field is not a valid http(s) URL.
    #[error("{0} must be a valid http(s) URL")]
    InvalidUrl(&'static str),

    /// The coupon validity window is inverted or empty.
    #[error("valid_to must be after valid_from")]
    DateOrder,

    /// The coupon discount value is zero or negative.
    #[error("discount value must be greater than zero")]
    NonPositiveDiscount,

    /// A percentage coupon exceeds 100%.
    #[error("percentage discounts cannot exceed 100")]
    PercentTooLarge,

    /// The coupon usage limit is below one.
    #[error("usage limit must be at least 1")]
    UsageLimitTooSmall,

    /// A variant price is zero or negative.
    #[error("price must be greater than zero")]
    NonPositivePrice,

    /// A variant stock count is negative.
    #[error("stock cannot be negative")]
    NegativeStock,

    /// A variant discount percentage is outside 1-100.
    #[error("discount percentage must be between 1 and 100")]
    DiscountOutOfRange,
}

/// Check that an optional URL string parses as http or https.
pub(crate) fn validate_http_url(value: &str, field: &'static str) -> Result<(), FormError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(FormError::InvalidUrl(field)),
    }
}

/// Check that a text field is non-blank after trimming.
pub(crate) fn validate_required(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_http_url() {
        assert!(validate_http_url("https://track.example/x", "tracking_url").is_ok());
        assert!(validate_http_url("http://track.example", "tracking_url").is_ok());
        assert_eq!(
            validate_http_url("not-a-url", "tracking_url"),
            Err(FormError::InvalidUrl("tracking_url"))
        );
        assert_eq!(
            validate_http_url("ftp://files.example", "tracking_url"),
            Err(FormError::InvalidUrl("tracking_url"))
        );
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("x", "name").is_ok());
        assert_eq!(
            validate_required("  ", "name"),
            Err(FormError::Required("name"))
        );
    }

    #[test]
    fn test_error_messages_are_specific() {
        assert_eq!(
            FormError::Required("delivery_partner").to_string(),
            "delivery_partner is required"
        );
        assert_eq!(
            FormError::DateOrder.to_string(),
            "valid_to must be after valid_from"
        );
    }
}
