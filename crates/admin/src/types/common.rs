//! Shared response envelopes.

use serde::{Deserialize, Serialize};

/// Paginated list envelope returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Total number of matching records across all pages.
    pub count: i64,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// Records in this page.
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// Whether a further page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_deserializes_envelope() {
        let json = r#"{"count": 3, "next": "http://x/api/products/?page=2", "previous": null, "results": [1, 2]}"#;
        let page: Paginated<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 3);
        assert!(page.has_next_page());
        assert_eq!(page.results, vec![1, 2]);
    }
}
