//! Sales-report and receipt export.
//!
//! The report payload is fetched once ([`crate::AdminClient::sales_report`])
//! and each export transforms the same in-memory payload independently:
//! a failure in one format does not affect the others, and nothing is
//! streamed - report sizes are bounded by the requested date range.

mod csv;
mod pdf;
mod xlsx;

pub use self::csv::sales_report_csv;
pub use self::pdf::{order_receipt_pdf, sales_report_pdf};
pub use self::xlsx::sales_report_xlsx;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use shopdesk_core::ReportPeriod;

/// Errors that can occur while serializing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV export error: {0}")]
    Csv(#[from] ::csv::Error),

    /// Workbook serialization failed.
    #[error("XLSX export error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// PDF rendering failed.
    #[error("PDF export error: {0}")]
    Pdf(String),

    /// Buffer I/O failed.
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV buffer was not valid UTF-8.
    #[error("export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Target format for a sales-report export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    /// File extension for the format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!("invalid export format: {s}")),
        }
    }
}

/// Download name for a sales-report export:
/// `sales-report-{period}-{date}.{ext}`.
#[must_use]
pub fn sales_report_filename(
    period: ReportPeriod,
    date: NaiveDate,
    format: ExportFormat,
) -> String {
    format!("sales-report-{period}-{date}.{}", format.extension())
}

/// Download name for an order receipt: `Receipt_{orderNumber}.pdf`.
#[must_use]
pub fn receipt_filename(order_number: &str) -> String {
    format!("Receipt_{order_number}.pdf")
}

/// Format a monetary amount with two decimal places for display cells.
pub(crate) fn fmt_money(amount: Decimal) -> String {
    format!("{amount:.2}")
}
