//! Shipping form validation, gating the transition to `shipped`.

use chrono::NaiveDate;

use super::{FormError, validate_http_url, validate_required};
use crate::types::ShippingDetails;

/// Raw shipping form input, collected before an order can be marked
/// shipped.
#[derive(Debug, Clone, Default)]
pub struct ShippingForm {
    /// Courier handling the shipment.
    pub delivery_partner: String,
    /// Courier tracking number.
    pub tracking_number: String,
    /// Courier tracking page, optional.
    pub tracking_url: Option<String>,
    /// Promised delivery date.
    pub expected_delivery: Option<NaiveDate>,
}

impl ShippingForm {
    /// Validate the form and build the shipping payload.
    ///
    /// # Errors
    ///
    /// - [`FormError::Required`] when partner, tracking number or
    ///   expected delivery date are missing
    /// - [`FormError::InvalidUrl`] when a tracking URL is present but not
    ///   http(s)
    pub fn validate(self) -> Result<ShippingDetails, FormError> {
        validate_required(&self.delivery_partner, "delivery_partner")?;
        validate_required(&self.tracking_number, "tracking_number")?;

        if let Some(url) = &self.tracking_url {
            validate_http_url(url, "tracking_url")?;
        }

        let expected_delivery = self
            .expected_delivery
            .ok_or(FormError::Required("expected_delivery"))?;

        Ok(ShippingDetails {
            delivery_partner: self.delivery_partner.trim().to_owned(),
            tracking_number: self.tracking_number.trim().to_owned(),
            tracking_url: self.tracking_url,
            expected_delivery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> ShippingForm {
        ShippingForm {
            delivery_partner: "FastShip".to_string(),
            tracking_number: "FS-123".to_string(),
            tracking_url: Some("https://track.fastship.test/FS-123".to_string()),
            expected_delivery: NaiveDate::from_ymd_opt(2024, 6, 1),
        }
    }

    #[test]
    fn test_valid_form() {
        let details = base_form().validate().unwrap();
        assert_eq!(details.delivery_partner, "FastShip");
        assert_eq!(details.tracking_number, "FS-123");
    }

    #[test]
    fn test_rejects_invalid_tracking_url() {
        let mut form = base_form();
        form.tracking_url = Some("not-a-url".to_string());
        assert_eq!(
            form.validate().unwrap_err(),
            FormError::InvalidUrl("tracking_url")
        );
    }

    #[test]
    fn test_tracking_url_is_optional() {
        let mut form = base_form();
        form.tracking_url = None;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_rejects_missing_partner() {
        let mut form = base_form();
        form.delivery_partner = String::new();
        assert_eq!(
            form.validate().unwrap_err(),
            FormError::Required("delivery_partner")
        );
    }

    #[test]
    fn test_rejects_missing_expected_delivery() {
        let mut form = base_form();
        form.expected_delivery = None;
        assert_eq!(
            form.validate().unwrap_err(),
            FormError::Required("expected_delivery")
        );
    }
}
