//! Category operations.

use tracing::instrument;

use shopdesk_core::CategoryId;

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::types::{Category, CategoryUpdate, NewCategory, Paginated};

impl AdminClient {
    /// Get a paginated list of categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn list_categories(
        &self,
        page: Option<u32>,
    ) -> Result<Paginated<Category>, ApiError> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        self.get_json("api/categories/", &query).await
    }

    /// Get a category by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the category does
    /// not exist.
    #[instrument(skip(self))]
    pub async fn get_category(&self, id: CategoryId) -> Result<Category, ApiError> {
        self.get_json(&format!("api/categories/{id}/"), &[]).await
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self, category), fields(name = %category.name))]
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.post_json("api/categories/", category).await
    }

    /// Update a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self, update))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        update: &CategoryUpdate,
    ) -> Result<Category, ApiError> {
        self.put_json(&format!("api/categories/{id}/"), update).await
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError> {
        self.delete(&format!("api/categories/{id}/")).await
    }
}
