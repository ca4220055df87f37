//! CSV rendering of the sales report.

use ::csv::WriterBuilder;

use super::{ExportError, fmt_money};
use crate::types::SalesReport;

/// Column header row. The exact text is part of the export contract.
const HEADER: [&str; 4] = ["Date", "Orders", "Sales ($)", "Average Order Value ($)"];

/// Render the report as CSV: the header, one line per period bucket, a
/// blank separator line, then the summary block.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn sales_report_csv(report: &SalesReport) -> Result<String, ExportError> {
    let mut buf = Vec::new();

    {
        let mut writer = WriterBuilder::new().flexible(true).from_writer(&mut buf);
        writer.write_record(HEADER)?;
        for row in &report.data {
            writer.write_record([
                row.date.clone(),
                row.orders.to_string(),
                fmt_money(row.sales),
                fmt_money(row.average_order_value),
            ])?;
        }
        writer.flush()?;
    }

    // Blank separator line; a csv writer would quote a lone empty field.
    buf.push(b'\n');

    {
        let mut writer = WriterBuilder::new().flexible(true).from_writer(&mut buf);
        let total_orders = report.summary.total_orders.to_string();
        writer.write_record(["Total Orders", total_orders.as_str()])?;
        let total_sales = fmt_money(report.summary.total_sales);
        writer.write_record(["Total Sales ($)", total_sales.as_str()])?;
        let average = fmt_money(report.summary.average_order_value);
        writer.write_record(["Average Order Value ($)", average.as_str()])?;
        writer.flush()?;
    }

    Ok(String::from_utf8(buf)?)
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
            data: vec![
                SalesRow {
                    date: "2024-06-01".to_string(),
                    orders: 3,
                    sales: "150".parse().unwrap(),
                    average_order_value: "50".parse().unwrap(),
                },
                SalesRow {
                    date: "2024-06-02".to_string(),
                    orders: 1,
                    sales: "19.99".parse().unwrap(),
                    average_order_value: "19.99".parse().unwrap(),
                },
            ],
            summary: ReportSummary {
                total_orders: 4,
                total_sales: "169.99".parse().unwrap(),
                average_order_value: "42.50".parse().unwrap(),
            },
        }
    }

    #[test]
    fn test_csv_layout() {
        let csv = sales_report_csv(&report()).unwrap();
        let expected = "\
Date,Orders,Sales ($),Average Order Value ($)
2024-06-01,3,150.00,50.00
2024-06-02,1,19.99,19.99

Total Orders,4
Total Sales ($),169.99
Average Order Value ($),42.50
";
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_csv_header_is_first_line() {
        let csv = sales_report_csv(&report()).unwrap();
        assert_eq!(
            csv.lines().next().unwrap(),
            "Date,Orders,Sales ($),Average Order Value ($)"
        );
    }

    #[test]
    fn test_csv_empty_report_still_has_summary() {
        let mut report = report();
        report.data.clear();
        report.summary.total_orders = 0;
        report.summary.total_sales = "0".parse().unwrap();
        report.summary.average_order_value = "0".parse().unwrap();
        let csv = sales_report_csv(&report).unwrap();
        assert!(csv.starts_with("Date,Orders,Sales ($),Average Order Value ($)\n\n"));
        assert!(csv.contains("Total Orders,0"));
    }
}
