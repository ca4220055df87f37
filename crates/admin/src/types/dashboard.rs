//! Dashboard and sales-report payloads.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopdesk_core::ReportPeriod;

/// Headline figures for the dashboard landing screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewStats {
    /// Lifetime sales total.
    pub total_sales: Decimal,
    /// Lifetime order count.
    pub total_orders: i64,
    /// Registered customer count.
    pub total_customers: i64,
    /// Catalog size.
    pub total_products: i64,
    /// Orders awaiting processing.
    pub pending_orders: i64,
    /// Variants at or below the low-stock threshold.
    pub low_stock_count: i64,
}

/// One period bucket of the sales report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRow {
    /// Bucket label (a date or period start, backend-formatted).
    pub date: String,
    /// Orders in the bucket.
    pub orders: i64,
    /// Sales total in the bucket.
    pub sales: Decimal,
    /// Sales divided by orders for the bucket.
    pub average_order_value: Decimal,
}

/// Totals across the report range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Orders across the range.
    pub total_orders: i64,
    /// Sales across the range.
    pub total_sales: Decimal,
    /// Sales divided by orders across the range.
    pub average_order_value: Decimal,
}

/// The sales report payload, fetched once and exported to any format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReport {
    /// Bucketing period.
    pub period: ReportPeriod,
    /// Range start, when the caller constrained it.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Range end, when the caller constrained it.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Period buckets, oldest first.
    pub data: Vec<SalesRow>,
    /// Totals across the range.
    pub summary: ReportSummary,
}

/// Per-category slice of sales, for the category chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySales {
    /// Category display name.
    pub category: String,
    /// Orders containing the category.
    pub orders: i64,
    /// Sales attributed to the category.
    pub sales: Decimal,
}
