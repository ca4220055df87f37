//! User management operations.

use tracing::instrument;

use shopdesk_core::{UserId, UserRole};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::types::user::ChangeRole;
use crate::types::{AdminUser, Paginated};

impl AdminClient {
    /// Get a paginated list of users, optionally filtered by role or a
    /// search term.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn list_users(
        &self,
        role: Option<UserRole>,
        search: Option<&str>,
        page: Option<u32>,
    ) -> Result<Paginated<AdminUser>, ApiError> {
        let mut query = Vec::new();
        if let Some(role) = role {
            query.push(("role", role.to_string()));
        }
        if let Some(search) = search {
            query.push(("search", search.to_string()));
        }
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        self.get_json("api/users/", &query).await
    }

    /// Flip a user's active flag, returning the updated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn toggle_user_status(&self, id: UserId) -> Result<AdminUser, ApiError> {
        self.patch_empty(&format!("api/users/{id}/toggle_status/"))
            .await
    }

    /// Assign a role to a user. The backend rewrites the three role
    /// flags so that only the assigned one is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn change_user_role(
        &self,
        id: UserId,
        role: UserRole,
    ) -> Result<AdminUser, ApiError> {
        self.patch_json(&format!("api/users/{id}/change_role/"), &ChangeRole { role })
            .await
    }
}
