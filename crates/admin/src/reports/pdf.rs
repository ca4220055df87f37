//! PDF rendering of the sales report and order receipts.
//!
//! Tables are laid out manually on A4 pages with a fixed row step; when
//! the cursor reaches the bottom margin a new page is started and the
//! column header is repeated.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use super::{ExportError, fmt_money};
use crate::types::{Order, SalesReport};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 20.0;
const TOP_BASELINE: f32 = 277.0;
const BOTTOM_MARGIN: f32 = 20.0;
const ROW_STEP: f32 = 7.0;

const COL_DATE: f32 = 20.0;
const COL_ORDERS: f32 = 75.0;
const COL_SALES: f32 = 110.0;
const COL_AOV: f32 = 150.0;

/// Render the report as a paginated PDF table.
///
/// # Errors
///
/// Returns an error if PDF rendering fails.
pub fn sales_report_pdf(report: &SalesReport) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        "Sales Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut layer_ref = doc.get_page(page).get_layer(layer);
    let mut y = TOP_BASELINE;

    layer_ref.use_text("Sales Report", 16.0, Mm(MARGIN_LEFT), Mm(y), &bold);
    y -= 9.0;

    let mut period_line = format!("Period: {}", report.period);
    if let (Some(start), Some(end)) = (report.start_date, report.end_date) {
        period_line.push_str(&format!(" ({start} to {end})"));
    }
    layer_ref.use_text(period_line.as_str(), 10.0, Mm(MARGIN_LEFT), Mm(y), &font);
    y -= 12.0;

    draw_report_header(&layer_ref, &bold, y);
    y -= ROW_STEP;

    for row in &report.data {
        if y < BOTTOM_MARGIN {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            layer_ref = doc.get_page(next_page).get_layer(next_layer);
            y = TOP_BASELINE;
            draw_report_header(&layer_ref, &bold, y);
            y -= ROW_STEP;
        }
        layer_ref.use_text(row.date.as_str(), 10.0, Mm(COL_DATE), Mm(y), &font);
        layer_ref.use_text(row.orders.to_string(), 10.0, Mm(COL_ORDERS), Mm(y), &font);
        layer_ref.use_text(fmt_money(row.sales), 10.0, Mm(COL_SALES), Mm(y), &font);
        layer_ref.use_text(
            fmt_money(row.average_order_value),
            10.0,
            Mm(COL_AOV),
            Mm(y),
            &font,
        );
        y -= ROW_STEP;
    }

    // Summary block under the table.
    if y - 3.0 * ROW_STEP < BOTTOM_MARGIN {
        let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        layer_ref = doc.get_page(next_page).get_layer(next_layer);
        y = TOP_BASELINE;
    }
    y -= 4.0;
    let summary = [
        format!("Total Orders: {}", report.summary.total_orders),
        format!("Total Sales ($): {}", fmt_money(report.summary.total_sales)),
        format!(
            "Average Order Value ($): {}",
            fmt_money(report.summary.average_order_value)
        ),
    ];
    for line in summary {
        layer_ref.use_text(line, 10.0, Mm(MARGIN_LEFT), Mm(y), &bold);
        y -= ROW_STEP;
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

fn draw_report_header(layer: &PdfLayerReference, bold: &IndirectFontRef, y: f32) {
    layer.use_text("Date", 10.0, Mm(COL_DATE), Mm(y), bold);
    layer.use_text("Orders", 10.0, Mm(COL_ORDERS), Mm(y), bold);
    layer.use_text("Sales ($)", 10.0, Mm(COL_SALES), Mm(y), bold);
    layer.use_text("Average Order Value ($)", 10.0, Mm(COL_AOV), Mm(y), bold);
}

const COL_ITEM: f32 = 20.0;
const COL_SIZE: f32 = 95.0;
const COL_QTY: f32 = 120.0;
const COL_PRICE: f32 = 140.0;
const COL_TOTAL: f32 = 170.0;

/// Render an order receipt.
///
/// # Errors
///
/// Returns an error if PDF rendering fails.
pub fn order_receipt_pdf(order: &Order) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Receipt {}", order.order_number),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut layer_ref = doc.get_page(page).get_layer(layer);
    let mut y = TOP_BASELINE;

    layer_ref.use_text("Receipt", 18.0, Mm(MARGIN_LEFT), Mm(y), &bold);
    y -= 10.0;
    layer_ref.use_text(
        format!("Order {}", order.order_number),
        11.0,
        Mm(MARGIN_LEFT),
        Mm(y),
        &font,
    );
    y -= 6.0;
    if let Some(created) = order.created_at {
        layer_ref.use_text(
            format!("Placed {}", created.format("%Y-%m-%d %H:%M UTC")),
            10.0,
            Mm(MARGIN_LEFT),
            Mm(y),
            &font,
        );
        y -= 6.0;
    }
    layer_ref.use_text(
        format!("{} <{}>", order.customer_name, order.customer_email),
        10.0,
        Mm(MARGIN_LEFT),
        Mm(y),
        &font,
    );
    y -= 12.0;

    draw_receipt_header(&layer_ref, &bold, y);
    y -= ROW_STEP;

    for item in &order.items {
        if y < BOTTOM_MARGIN {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            layer_ref = doc.get_page(next_page).get_layer(next_layer);
            y = TOP_BASELINE;
            draw_receipt_header(&layer_ref, &bold, y);
            y -= ROW_STEP;
        }
        layer_ref.use_text(item.product_name.as_str(), 10.0, Mm(COL_ITEM), Mm(y), &font);
        layer_ref.use_text(item.size.as_str(), 10.0, Mm(COL_SIZE), Mm(y), &font);
        layer_ref.use_text(item.quantity.to_string(), 10.0, Mm(COL_QTY), Mm(y), &font);
        layer_ref.use_text(fmt_money(item.price), 10.0, Mm(COL_PRICE), Mm(y), &font);
        layer_ref.use_text(fmt_money(item.line_total()), 10.0, Mm(COL_TOTAL), Mm(y), &font);
        y -= ROW_STEP;
    }

    if y - 4.0 * ROW_STEP < BOTTOM_MARGIN {
        let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        layer_ref = doc.get_page(next_page).get_layer(next_layer);
        y = TOP_BASELINE;
    }
    y -= 4.0;
    layer_ref.use_text(
        format!("Subtotal: {}", fmt_money(order.subtotal)),
        10.0,
        Mm(COL_PRICE),
        Mm(y),
        &font,
    );
    y -= ROW_STEP;
    if order.discount > rust_decimal::Decimal::ZERO {
        let coupon = order
            .coupon_code
            .as_ref()
            .map(|code| format!(" ({code})"))
            .unwrap_or_default();
        layer_ref.use_text(
            format!("Discount{coupon}: -{}", fmt_money(order.discount)),
            10.0,
            Mm(COL_PRICE),
            Mm(y),
            &font,
        );
        y -= ROW_STEP;
    }
    layer_ref.use_text(
        format!("Total: {}", fmt_money(order.total)),
        11.0,
        Mm(COL_PRICE),
        Mm(y),
        &bold,
    );

    doc.save_to_bytes()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}

fn draw_receipt_header(layer: &PdfLayerReference, bold: &IndirectFontRef, y: f32) {
    layer.use_text("Item", 10.0, Mm(COL_ITEM), Mm(y), bold);
    layer.use_text("Size", 10.0, Mm(COL_SIZE), Mm(y), bold);
    layer.use_text("Qty", 10.0, Mm(COL_QTY), Mm(y), bold);
    layer.use_text("Unit ($)", 10.0, Mm(COL_PRICE), Mm(y), bold);
    layer.use_text("Total ($)", 10.0, Mm(COL_TOTAL), Mm(y), bold);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderItem, ReportSummary, SalesRow};
    use shopdesk_core::{OrderId, OrderStatus, ProductId, ReportPeriod, VariantId};

    fn report(rows: usize) -> SalesReport {
        SalesReport {
            period: ReportPeriod::Daily,
            start_date: None,
            end_date: None,
            data: (0..rows)
                .map(|i| SalesRow {
                    date: format!("2024-06-{:02}", (i % 28) + 1),
                    orders: 2,
                    sales: "100".parse().unwrap(),
                    average_order_value: "50".parse().unwrap(),
                })
                .collect(),
            summary: ReportSummary {
                total_orders: 2 * rows as i64,
                total_sales: "100".parse().unwrap(),
                average_order_value: "50".parse().unwrap(),
            },
        }
    }

    fn order() -> Order {
        Order {
            id: OrderId::new(7),
            order_number: "ORD-1042".to_string(),
            status: OrderStatus::Delivered,
            customer_name: "Jo Doe".to_string(),
            customer_email: "jo@shop.test".to_string(),
            items: vec![OrderItem {
                product: ProductId::new(1),
                variant: VariantId::new(2),
                product_name: "Black Tee".to_string(),
                size: "M".to_string(),
                price: "19.99".parse().unwrap(),
                quantity: 2,
            }],
            coupon_code: Some("SUMMER10".to_string()),
            subtotal: "39.98".parse().unwrap(),
            discount: "4.00".parse().unwrap(),
            total: "35.98".parse().unwrap(),
            delivery_partner: None,
            tracking_number: None,
            tracking_url: None,
            expected_delivery: None,
            created_at: None,
        }
    }

    #[test]
    fn test_report_pdf_magic_bytes() {
        let bytes = sales_report_pdf(&report(3)).unwrap();
        assert_eq!(&bytes[..4], b"%PDF");
    }

    #[test]
    fn test_report_pdf_paginates_long_tables() {
        // Enough rows to spill over at least one page boundary.
        let bytes = sales_report_pdf(&report(80)).unwrap();
        assert_eq!(&bytes[..4], b"%PDF");
    }

    #[test]
    fn test_receipt_pdf_magic_bytes() {
        let bytes = order_receipt_pdf(&order()).unwrap();
        assert_eq!(&bytes[..4], b"%PDF");
    }
}
