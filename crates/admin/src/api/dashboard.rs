//! Dashboard and reporting operations.

use chrono::NaiveDate;
use tracing::instrument;

use shopdesk_core::ReportPeriod;

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::types::{CategorySales, OverviewStats, SalesReport};

impl AdminClient {
    /// Get the headline figures for the dashboard landing screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn dashboard_overview(&self) -> Result<OverviewStats, ApiError> {
        self.get_json("api/dashboard/overview/", &[]).await
    }

    /// Fetch the period-bucketed sales report.
    ///
    /// The returned payload is the single in-memory source for every
    /// export format; see [`crate::reports`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn sales_report(
        &self,
        period: ReportPeriod,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<SalesReport, ApiError> {
        let mut query = vec![("period", period.to_string())];
        if let Some(start) = start_date {
            query.push(("start_date", start.to_string()));
        }
        if let Some(end) = end_date {
            query.push(("end_date", end.to_string()));
        }
        self.get_json("api/dashboard/sales-report/", &query).await
    }

    /// Fetch the per-category sales breakdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn category_sales(&self) -> Result<Vec<CategorySales>, ApiError> {
        self.get_json("api/dashboard/category-sales/", &[]).await
    }
}
