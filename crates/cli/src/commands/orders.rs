//! Order screens: browsing and status transitions.

use clap::Subcommand;
use chrono::NaiveDate;

use shopdesk_admin::AdminClient;
use shopdesk_admin::forms::ShippingForm;
use shopdesk_core::{OrderId, OrderStatus};

use super::print_json;

#[derive(Subcommand)]
pub enum OrderAction {
    /// List orders
    List {
        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Page size
        #[arg(long)]
        page_size: Option<u32>,

        /// Filter by status (pending, processing, shipped, delivered,
        /// cancelled)
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one order
    Show {
        /// Order ID
        id: i64,
    },
    /// Transition an order to a new status
    ///
    /// The transition to `shipped` requires the shipping fields; they
    /// are validated before any request is made.
    SetStatus {
        /// Order ID
        id: i64,

        /// Target status
        status: String,

        /// Courier handling the shipment (required for shipped)
        #[arg(long)]
        delivery_partner: Option<String>,

        /// Courier tracking number (required for shipped)
        #[arg(long)]
        tracking_number: Option<String>,

        /// Courier tracking page, http(s)
        #[arg(long)]
        tracking_url: Option<String>,

        /// Promised delivery date, YYYY-MM-DD (required for shipped)
        #[arg(long)]
        expected_delivery: Option<NaiveDate>,
    },
}

pub async fn run(
    client: &AdminClient,
    action: OrderAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        OrderAction::List {
            page,
            page_size,
            status,
        } => {
            let status = status.as_deref().map(str::parse::<OrderStatus>).transpose()?;
            let orders = client.list_orders(page, page_size, status).await?;
            print_json(&orders)
        }
        OrderAction::Show { id } => {
            let order = client.get_order(OrderId::new(id)).await?;
            print_json(&order)
        }
        OrderAction::SetStatus {
            id,
            status,
            delivery_partner,
            tracking_number,
            tracking_url,
            expected_delivery,
        } => {
            let id = OrderId::new(id);
            let status: OrderStatus = status.parse()?;

            let order = if status == OrderStatus::Shipped {
                let form = ShippingForm {
                    delivery_partner: delivery_partner.unwrap_or_default(),
                    tracking_number: tracking_number.unwrap_or_default(),
                    tracking_url,
                    expected_delivery,
                };
                client.ship_order(id, form).await?
            } else {
                client.update_order_status(id, status).await?
            };

            eprintln!("order {} is now {}", order.order_number, order.status);
            print_json(&order)
        }
    }
}
