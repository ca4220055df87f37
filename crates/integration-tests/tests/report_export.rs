//! End-to-end report fetch and export: one payload, three formats.

use serde_json::json;
use shopdesk_admin::reports::{
    ExportFormat, sales_report_csv, sales_report_filename, sales_report_pdf, sales_report_xlsx,
};
use shopdesk_core::ReportPeriod;
use shopdesk_integration_tests::TestBackend;

fn seed_report(backend: &TestBackend) {
    backend.state.set_report(json!({
        "period": "daily",
        "start_date": "2024-06-01",
        "end_date": "2024-06-02",
        "data": [
            {"date": "2024-06-01", "orders": 3, "sales": "150.00", "average_order_value": "50.00"},
            {"date": "2024-06-02", "orders": 1, "sales": "19.99", "average_order_value": "19.99"}
        ],
        "summary": {
            "total_orders": 4,
            "total_sales": "169.99",
            "average_order_value": "42.50"
        }
    }));
}

#[tokio::test]
async fn fetched_report_exports_to_exact_csv() {
    let backend = TestBackend::spawn().await;
    seed_report(&backend);
    let session = backend.authed_session();

    let report = session
        .client
        .sales_report(ReportPeriod::Daily, None, None)
        .await
        .unwrap();

    let csv = sales_report_csv(&report).unwrap();
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

#[tokio::test]
async fn one_payload_feeds_all_three_formats_independently() {
    let backend = TestBackend::spawn().await;
    seed_report(&backend);
    let session = backend.authed_session();

    let report = session
        .client
        .sales_report(ReportPeriod::Daily, None, None)
        .await
        .unwrap();

    // The report endpoint was hit once; each export reuses the payload.
    let csv = sales_report_csv(&report).unwrap();
    let xlsx = sales_report_xlsx(&report).unwrap();
    let pdf = sales_report_pdf(&report).unwrap();

    assert_eq!(
        backend
            .state
            .count_requests("GET /api/dashboard/sales-report/"),
        1
    );
    assert!(csv.starts_with("Date,Orders"));
    assert_eq!(&xlsx[..2], b"PK");
    assert_eq!(&pdf[..4], b"%PDF");
}

#[tokio::test]
async fn export_filenames_follow_the_download_convention() {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    assert_eq!(
        sales_report_filename(ReportPeriod::Daily, date, ExportFormat::Csv),
        "sales-report-daily-2024-06-15.csv"
    );
    assert_eq!(
        sales_report_filename(ReportPeriod::Yearly, date, ExportFormat::Pdf),
        "sales-report-yearly-2024-06-15.pdf"
    );
}

#[tokio::test]
async fn empty_report_still_exports() {
    let backend = TestBackend::spawn().await;
    let session = backend.authed_session();

    let report = session
        .client
        .sales_report(ReportPeriod::Daily, None, None)
        .await
        .unwrap();

    assert!(report.data.is_empty());
    let csv = sales_report_csv(&report).unwrap();
    assert!(csv.contains("Total Orders,0"));
    assert!(!sales_report_xlsx(&report).unwrap().is_empty());
    assert_eq!(&sales_report_pdf(&report).unwrap()[..4], b"%PDF");
}
