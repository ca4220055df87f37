//! Coupon operations.

use rust_decimal::Decimal;
use tracing::instrument;

use shopdesk_core::CouponId;

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::forms::CouponForm;
use crate::types::{Coupon, CouponValidation, CouponValidationRequest, Paginated};

impl AdminClient {
    /// Get a paginated list of coupons.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn list_coupons(&self, page: Option<u32>) -> Result<Paginated<Coupon>, ApiError> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        self.get_json("api/coupons/", &query).await
    }

    /// Get a coupon by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the coupon does not
    /// exist.
    #[instrument(skip(self))]
    pub async fn get_coupon(&self, id: CouponId) -> Result<Coupon, ApiError> {
        self.get_json(&format!("api/coupons/{id}/"), &[]).await
    }

    /// Validate the form client-side, then create the coupon.
    ///
    /// A validation failure blocks the request entirely.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a rejected form, otherwise
    /// an error if the API request fails.
    #[instrument(skip(self, form))]
    pub async fn create_coupon(&self, form: CouponForm) -> Result<Coupon, ApiError> {
        let coupon = form.validate()?;
        self.post_json("api/coupons/", &coupon).await
    }

    /// Validate the form client-side, then replace the coupon.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a rejected form, otherwise
    /// an error if the API request fails.
    #[instrument(skip(self, form))]
    pub async fn update_coupon(&self, id: CouponId, form: CouponForm) -> Result<Coupon, ApiError> {
        let coupon = form.validate()?;
        self.put_json(&format!("api/coupons/{id}/"), &coupon).await
    }

    /// Delete a coupon.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn delete_coupon(&self, id: CouponId) -> Result<(), ApiError> {
        self.delete(&format!("api/coupons/{id}/")).await
    }

    /// Ask the backend whether a code applies to a cart total.
    ///
    /// The code is uppercased before sending, matching the stored form.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn validate_coupon(
        &self,
        code: &str,
        cart_total: Decimal,
    ) -> Result<CouponValidation, ApiError> {
        let request = CouponValidationRequest {
            code: code.trim().to_uppercase(),
            cart_total,
        };
        self.post_json("api/coupons/validate/", &request).await
    }
}
