//! SKU type with the client-side uniqueness suffix.
//!
//! The backend requires SKUs to be unique per product. The dashboard never
//! had authoritative knowledge of existing SKUs, so it lowered the
//! collision risk by appending a suffix derived from the variant's size
//! label, falling back to a timestamp when no size is available. The
//! heuristic is weak by design; the backend remains the authority and will
//! reject true collisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stock keeping unit code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Create a SKU from a raw string.
    #[must_use]
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    /// Append a size-derived suffix: the size label lowercased with
    /// spaces replaced by hyphens.
    ///
    /// `Sku("ABC")` with size `"M"` becomes `ABC-m`; with size
    /// `"Extra Large"` it becomes `ABC-extra-large`.
    #[must_use]
    pub fn with_size_suffix(&self, size: &str) -> Self {
        let suffix = size.trim().to_lowercase().replace(' ', "-");
        Self(format!("{}-{suffix}", self.0))
    }

    /// Append a timestamp-derived suffix, for variants without a size
    /// label.
    #[must_use]
    pub fn with_timestamp_suffix(&self, now: DateTime<Utc>) -> Self {
        Self(format!("{}-{}", self.0, now.timestamp_millis()))
    }

    /// Returns the SKU as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Sku {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Sku {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_size_suffix_lowercases() {
        assert_eq!(Sku::new("ABC").with_size_suffix("M").as_str(), "ABC-m");
    }

    #[test]
    fn test_size_suffix_replaces_spaces() {
        assert_eq!(
            Sku::new("TEE-01").with_size_suffix("Extra Large").as_str(),
            "TEE-01-extra-large"
        );
    }

    #[test]
    fn test_size_suffix_trims() {
        assert_eq!(Sku::new("ABC").with_size_suffix(" XL ").as_str(), "ABC-xl");
    }

    #[test]
    fn test_timestamp_suffix() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let sku = Sku::new("ABC").with_timestamp_suffix(now);
        assert_eq!(sku.as_str(), format!("ABC-{}", now.timestamp_millis()));
    }
}
