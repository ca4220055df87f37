//! Banner domain types.

use serde::{Deserialize, Serialize};
use shopdesk_core::{BannerId, BannerPosition};

/// A promotional banner as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    /// Banner ID.
    pub id: BannerId,
    /// Headline text.
    pub title: String,
    /// Secondary text.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Call-to-action label.
    #[serde(default)]
    pub button_text: Option<String>,
    /// Where the call-to-action links.
    #[serde(default)]
    pub target_url: Option<String>,
    /// Storefront slot the banner renders into.
    pub position: BannerPosition,
    /// Whether the banner is live.
    pub is_active: bool,
    /// Banner image URL.
    pub image: String,
}

/// Payload for creating or replacing a banner.
///
/// Built by [`crate::forms::BannerForm::validate`].
#[derive(Debug, Clone, Serialize)]
pub struct NewBanner {
    /// Headline text.
    pub title: String,
    /// Secondary text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Call-to-action label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    /// Where the call-to-action links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    /// Storefront slot the banner renders into.
    pub position: BannerPosition,
    /// Whether the banner starts live.
    pub is_active: bool,
    /// Banner image URL.
    pub image: String,
}
