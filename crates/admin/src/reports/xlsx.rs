//! XLSX rendering of the sales report.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};

use super::ExportError;
use crate::types::SalesReport;

/// Render the report as a single-worksheet workbook: a bold header row,
/// typed number cells per bucket, and the summary rows beneath the data.
///
/// # Errors
///
/// Returns an error if workbook serialization fails.
pub fn sales_report_xlsx(report: &SalesReport) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Sales Report")?;
    worksheet.set_column_width(0, 18)?;
    worksheet.set_column_width(2, 14)?;
    worksheet.set_column_width(3, 24)?;

    worksheet.write_string_with_format(0, 0, "Date", &bold)?;
    worksheet.write_string_with_format(0, 1, "Orders", &bold)?;
    worksheet.write_string_with_format(0, 2, "Sales ($)", &bold)?;
    worksheet.write_string_with_format(0, 3, "Average Order Value ($)", &bold)?;

    let mut row_idx: u32 = 1;
    for row in &report.data {
        worksheet.write_string(row_idx, 0, &row.date)?;
        worksheet.write_number(row_idx, 1, as_f64_count(row.orders))?;
        worksheet.write_number(row_idx, 2, as_f64(row.sales))?;
        worksheet.write_number(row_idx, 3, as_f64(row.average_order_value))?;
        row_idx += 1;
    }

    // Summary block, separated from the data by one empty row.
    row_idx += 1;
    worksheet.write_string_with_format(row_idx, 0, "Total Orders", &bold)?;
    worksheet.write_number(row_idx, 1, as_f64_count(report.summary.total_orders))?;
    row_idx += 1;
    worksheet.write_string_with_format(row_idx, 0, "Total Sales ($)", &bold)?;
    worksheet.write_number(row_idx, 1, as_f64(report.summary.total_sales))?;
    row_idx += 1;
    worksheet.write_string_with_format(row_idx, 0, "Average Order Value ($)", &bold)?;
    worksheet.write_number(row_idx, 1, as_f64(report.summary.average_order_value))?;

    Ok(workbook.save_to_buffer()?)
}

fn as_f64(amount: rust_decimal::Decimal) -> f64 {
    amount.to_f64().unwrap_or(0.0)
}

// Order counts will never exceed f64's integer-safe range (2^53)
#[allow(clippy::cast_precision_loss)]
fn as_f64_count(count: i64) -> f64 {
    count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ReportSummary, SalesRow};
    use shopdesk_core::ReportPeriod;

    fn report() -> SalesReport {
        SalesReport {
            period: ReportPeriod::Daily,
            start_date: None,
            end_date: None,
            data: vec![SalesRow {
                date: "2024-06-01".to_string(),
                orders: 3,
                sales: "150".parse().unwrap(),
                average_order_value: "50".parse().unwrap(),
            }],
            summary: ReportSummary {
                total_orders: 3,
                total_sales: "150".parse().unwrap(),
                average_order_value: "50".parse().unwrap(),
            },
        }
    }

    #[test]
    fn test_xlsx_produces_zip_container() {
        let bytes = sales_report_xlsx(&report()).unwrap();
        // XLSX is a zip archive; check the magic bytes.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_xlsx_empty_report_serializes() {
        let mut report = report();
        report.data.clear();
        assert!(!sales_report_xlsx(&report).unwrap().is_empty());
    }
}
