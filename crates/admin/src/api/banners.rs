//! Banner operations.

use tracing::instrument;

use shopdesk_core::BannerId;

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::forms::BannerForm;
use crate::types::{Banner, Paginated};

impl AdminClient {
    /// Get a paginated list of banners.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn list_banners(&self, page: Option<u32>) -> Result<Paginated<Banner>, ApiError> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        self.get_json("api/banners/", &query).await
    }

    /// Validate the form client-side, then create the banner.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a rejected form, otherwise
    /// an error if the API request fails.
    #[instrument(skip(self, form))]
    pub async fn create_banner(&self, form: BannerForm) -> Result<Banner, ApiError> {
        let banner = form.validate()?;
        self.post_json("api/banners/", &banner).await
    }

    /// Validate the form client-side, then replace the banner.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a rejected form, otherwise
    /// an error if the API request fails.
    #[instrument(skip(self, form))]
    pub async fn update_banner(&self, id: BannerId, form: BannerForm) -> Result<Banner, ApiError> {
        let banner = form.validate()?;
        self.put_json(&format!("api/banners/{id}/"), &banner).await
    }

    /// Delete a banner.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn delete_banner(&self, id: BannerId) -> Result<(), ApiError> {
        self.delete(&format!("api/banners/{id}/")).await
    }

    /// Flip a banner's active flag, returning the updated banner.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn toggle_banner_status(&self, id: BannerId) -> Result<Banner, ApiError> {
        self.patch_empty(&format!("api/banners/{id}/toggle_status/"))
            .await
    }
}
