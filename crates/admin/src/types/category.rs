//! Category domain types.

use serde::{Deserialize, Serialize};
use shopdesk_core::CategoryId;

/// A category as returned by the backend. Categories form a tree of
/// unconstrained depth via `parent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Parent category, absent for roots.
    #[serde(default)]
    pub parent: Option<CategoryId>,
    /// Ordering weight within a level.
    #[serde(default)]
    pub display_order: i64,
    /// Whether the category is visible.
    pub is_active: bool,
    /// Category image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    /// Display name.
    pub name: String,
    /// Parent category, absent for roots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<CategoryId>,
    /// Ordering weight within a level.
    pub display_order: i64,
    /// Whether the category starts active.
    pub is_active: bool,
    /// Category image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Payload for updating a category.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New parent category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<CategoryId>,
    /// New ordering weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i64>,
    /// New active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// New image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
