//! Order operations.

use tracing::instrument;

use shopdesk_core::{OrderId, OrderStatus};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::forms::ShippingForm;
use crate::types::{Order, OrderStatusUpdate, Paginated};

impl AdminClient {
    /// Get a paginated list of orders, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn list_orders(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
        status: Option<OrderStatus>,
    ) -> Result<Paginated<Order>, ApiError> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if let Some(page_size) = page_size {
            query.push(("page_size", page_size.to_string()));
        }
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        self.get_json("api/orders/", &query).await
    }

    /// Get an order by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the order does not
    /// exist.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.get_json(&format!("api/orders/{id}/"), &[]).await
    }

    /// Transition an order to a non-shipped status.
    ///
    /// The UI places no restriction on which statuses are reachable; the
    /// backend enforces the lifecycle. Use [`Self::ship_order`] for the
    /// transition to `shipped`, which requires the shipping form.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let update = OrderStatusUpdate::to_status(status);
        self.post_json(&format!("api/orders/{id}/update_status/"), &update)
            .await
    }

    /// Transition an order to `shipped`.
    ///
    /// The shipping form is validated first; a rejected form yields
    /// [`ApiError::Validation`] and no request is made. On success the
    /// returned order carries the new status with the shipping fields
    /// merged in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a rejected form, otherwise
    /// an error if the API request fails.
    #[instrument(skip(self, form))]
    pub async fn ship_order(&self, id: OrderId, form: ShippingForm) -> Result<Order, ApiError> {
        let shipping = form.validate()?;
        let update = OrderStatusUpdate {
            status: OrderStatus::Shipped,
            shipping: Some(shipping),
        };
        self.post_json(&format!("api/orders/{id}/update_status/"), &update)
            .await
    }
}
