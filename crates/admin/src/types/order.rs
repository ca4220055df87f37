//! Order domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopdesk_core::{OrderId, OrderStatus, ProductId, VariantId};

/// An order as returned by the backend. Totals are computed server-side
/// and read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order ID.
    pub id: OrderId,
    /// Human-facing order number (e.g., "ORD-1042").
    pub order_number: String,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Customer display name.
    pub customer_name: String,
    /// Customer email.
    pub customer_email: String,
    /// Line items.
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Applied coupon code, if any.
    #[serde(default)]
    pub coupon_code: Option<String>,
    /// Sum of line totals before discount.
    pub subtotal: Decimal,
    /// Discount applied by the coupon.
    #[serde(default)]
    pub discount: Decimal,
    /// Grand total.
    pub total: Decimal,
    /// Courier handling the shipment; set when the order ships.
    #[serde(default)]
    pub delivery_partner: Option<String>,
    /// Courier tracking number; set when the order ships.
    #[serde(default)]
    pub tracking_number: Option<String>,
    /// Courier tracking page; set when the order ships.
    #[serde(default)]
    pub tracking_url: Option<String>,
    /// Promised delivery date; set when the order ships.
    #[serde(default)]
    pub expected_delivery: Option<NaiveDate>,
    /// Placement timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Ordered product.
    pub product: ProductId,
    /// Ordered variant.
    pub variant: VariantId,
    /// Product name at time of purchase.
    pub product_name: String,
    /// Variant size label at time of purchase.
    pub size: String,
    /// Unit price at time of purchase.
    pub price: Decimal,
    /// Units ordered.
    pub quantity: i64,
}

impl OrderItem {
    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Shipping fields required for the transition to
/// [`OrderStatus::Shipped`].
///
/// Built by [`crate::forms::ShippingForm::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingDetails {
    /// Courier handling the shipment.
    pub delivery_partner: String,
    /// Courier tracking number.
    pub tracking_number: String,
    /// Courier tracking page, validated as http(s) when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,
    /// Promised delivery date.
    pub expected_delivery: NaiveDate,
}

/// Payload for `POST /api/orders/{id}/update_status/`.
///
/// Shipping fields are merged into the payload only for the transition
/// to `shipped`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderStatusUpdate {
    /// Target status.
    pub status: OrderStatus,
    /// Shipping fields, present only when `status` is `shipped`.
    /// A flattened `None` contributes no keys to the payload.
    #[serde(flatten)]
    pub shipping: Option<ShippingDetails>,
}

impl OrderStatusUpdate {
    /// A plain transition without shipping fields.
    #[must_use]
    pub const fn to_status(status: OrderStatus) -> Self {
        Self {
            status,
            shipping: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = OrderItem {
            product: ProductId::new(1),
            variant: VariantId::new(2),
            product_name: "Tee".to_string(),
            size: "M".to_string(),
            price: "19.99".parse().unwrap(),
            quantity: 3,
        };
        assert_eq!(item.line_total(), "59.97".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_plain_status_update_has_no_shipping_keys() {
        let update = OrderStatusUpdate::to_status(OrderStatus::Processing);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["status"], "processing");
    }

    #[test]
    fn test_shipped_update_merges_shipping_fields() {
        let update = OrderStatusUpdate {
            status: OrderStatus::Shipped,
            shipping: Some(ShippingDetails {
                delivery_partner: "FastShip".to_string(),
                tracking_number: "FS-123".to_string(),
                tracking_url: Some("https://track.fastship.test/FS-123".to_string()),
                expected_delivery: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            }),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["status"], "shipped");
        assert_eq!(json["delivery_partner"], "FastShip");
        assert_eq!(json["tracking_number"], "FS-123");
        assert_eq!(json["expected_delivery"], "2024-06-01");
    }
}
