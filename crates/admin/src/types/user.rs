//! User domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopdesk_core::{Email, UserId, UserRole};

/// A platform user as seen from the admin.
///
/// Roles are stored as three independent booleans that are meant to be
/// mutually exclusive; [`Self::role`] resolves them in admin > vendor >
/// customer precedence for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Admin role flag.
    pub is_admin: bool,
    /// Vendor role flag.
    pub is_vendor: bool,
    /// Customer role flag.
    pub is_customer: bool,
    /// Whether the account is enabled.
    pub is_active: bool,
    /// Signup timestamp.
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
}

impl AdminUser {
    /// Resolve the role flags into a single role for display.
    #[must_use]
    pub const fn role(&self) -> Option<UserRole> {
        if self.is_admin {
            Some(UserRole::Admin)
        } else if self.is_vendor {
            Some(UserRole::Vendor)
        } else if self.is_customer {
            Some(UserRole::Customer)
        } else {
            None
        }
    }
}

/// Payload for `PATCH /api/users/{id}/change_role/`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChangeRole {
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool, is_vendor: bool, is_customer: bool) -> AdminUser {
        AdminUser {
            id: UserId::new(1),
            name: "Jo".to_string(),
            email: Email::parse("jo@shop.test").unwrap(),
            is_admin,
            is_vendor,
            is_customer,
            is_active: true,
            date_joined: None,
        }
    }

    #[test]
    fn test_role_precedence() {
        assert_eq!(user(true, true, true).role(), Some(UserRole::Admin));
        assert_eq!(user(false, true, true).role(), Some(UserRole::Vendor));
        assert_eq!(user(false, false, true).role(), Some(UserRole::Customer));
        assert_eq!(user(false, false, false).role(), None);
    }
}
