//! Dashboard screens: overview, sales report with export, receipts.

use std::path::PathBuf;

use clap::Subcommand;
use chrono::NaiveDate;

use shopdesk_admin::AdminClient;
use shopdesk_admin::reports::{
    ExportFormat, order_receipt_pdf, receipt_filename, sales_report_csv, sales_report_filename,
    sales_report_pdf, sales_report_xlsx,
};
use shopdesk_core::{OrderId, ReportPeriod};

use super::print_json;

#[derive(Subcommand)]
pub enum DashboardAction {
    /// Headline figures
    Overview,
    /// Period-bucketed sales report, optionally exported to a file
    SalesReport {
        /// Bucketing period (daily, weekly, monthly, yearly)
        #[arg(long, default_value = "daily")]
        period: String,

        /// Range start, YYYY-MM-DD
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Range end, YYYY-MM-DD
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// Export format (csv, xlsx, pdf); prints JSON when omitted
        #[arg(long)]
        export: Option<String>,

        /// Output path (defaults to `sales-report-{period}-{date}.{ext}`)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Per-category sales breakdown
    CategorySales,
}

pub async fn run(
    client: &AdminClient,
    action: DashboardAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DashboardAction::Overview => {
            let stats = client.dashboard_overview().await?;
            print_json(&stats)
        }
        DashboardAction::SalesReport {
            period,
            start_date,
            end_date,
            export,
            out,
        } => {
            let period: ReportPeriod = period.parse()?;
            let report = client.sales_report(period, start_date, end_date).await?;

            let Some(export) = export else {
                return print_json(&report);
            };
            let format: ExportFormat = export.parse()?;

            let bytes = match format {
                ExportFormat::Csv => sales_report_csv(&report)?.into_bytes(),
                ExportFormat::Xlsx => sales_report_xlsx(&report)?,
                ExportFormat::Pdf => sales_report_pdf(&report)?,
            };

            let path = out.unwrap_or_else(|| {
                let today = chrono::Utc::now().date_naive();
                PathBuf::from(sales_report_filename(period, today, format))
            });
            std::fs::write(&path, bytes)?;
            eprintln!("wrote {}", path.display());
            Ok(())
        }
        DashboardAction::CategorySales => {
            let breakdown = client.category_sales().await?;
            print_json(&breakdown)
        }
    }
}

/// Generate `Receipt_{orderNumber}.pdf` for an order.
pub async fn receipt(
    client: &AdminClient,
    order_id: i64,
    out: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = client.get_order(OrderId::new(order_id)).await?;
    let bytes = order_receipt_pdf(&order)?;
    let path = out.unwrap_or_else(|| PathBuf::from(receipt_filename(&order.order_number)));
    std::fs::write(&path, bytes)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
