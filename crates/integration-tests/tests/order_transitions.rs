//! Tests for order status transitions and the shipping gate.

use chrono::NaiveDate;
use shopdesk_admin::ApiError;
use shopdesk_admin::forms::{FormError, ShippingForm};
use shopdesk_core::{OrderId, OrderStatus, Slug};
use shopdesk_integration_tests::{TestBackend, sample_order};

fn shipping_form() -> ShippingForm {
    ShippingForm {
        delivery_partner: "FastShip".to_string(),
        tracking_number: "FS-123".to_string(),
        tracking_url: Some("https://track.fastship.test/FS-123".to_string()),
        expected_delivery: NaiveDate::from_ymd_opt(2024, 6, 1),
    }
}

#[tokio::test]
async fn invalid_tracking_url_blocks_the_request() {
    let backend = TestBackend::spawn().await;
    let session = backend.authed_session();
    backend.state.seed_order(sample_order(42, "processing"));

    let mut form = shipping_form();
    form.tracking_url = Some("not-a-url".to_string());

    let err = session
        .client
        .ship_order(OrderId::new(42), form)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Validation(FormError::InvalidUrl("tracking_url"))
    ));
    // No API call was made; the stored order is untouched.
    assert_eq!(
        backend.state.count_requests("POST /api/orders/42/update_status/"),
        0
    );
    let stored = backend.state.order(42).unwrap();
    assert_eq!(stored["status"], "processing");
}

#[tokio::test]
async fn missing_shipping_fields_block_the_request() {
    let backend = TestBackend::spawn().await;
    let session = backend.authed_session();
    backend.state.seed_order(sample_order(42, "processing"));

    let mut form = shipping_form();
    form.tracking_number = String::new();

    let err = session
        .client
        .ship_order(OrderId::new(42), form)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Validation(FormError::Required("tracking_number"))
    ));
    assert_eq!(
        backend.state.count_requests("POST /api/orders/42/update_status/"),
        0
    );
}

#[tokio::test]
async fn valid_shipping_form_merges_fields_into_the_order() {
    let backend = TestBackend::spawn().await;
    let session = backend.authed_session();
    backend.state.seed_order(sample_order(42, "processing"));

    let order = session
        .client
        .ship_order(OrderId::new(42), shipping_form())
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Shipped);
    assert_eq!(order.delivery_partner.as_deref(), Some("FastShip"));
    assert_eq!(order.tracking_number.as_deref(), Some("FS-123"));
    assert_eq!(
        order.tracking_url.as_deref(),
        Some("https://track.fastship.test/FS-123")
    );
    assert_eq!(
        order.expected_delivery,
        NaiveDate::from_ymd_opt(2024, 6, 1)
    );

    // The backend's stored copy reflects the same merge.
    let stored = backend.state.order(42).unwrap();
    assert_eq!(stored["status"], "shipped");
    assert_eq!(stored["delivery_partner"], "FastShip");
}

#[tokio::test]
async fn any_status_is_reachable_from_any_other() {
    let backend = TestBackend::spawn().await;
    let session = backend.authed_session();
    backend.state.seed_order(sample_order(7, "delivered"));

    // The UI does not restrict transitions; the backend owns the rules.
    let order = session
        .client
        .update_order_status(OrderId::new(7), OrderStatus::Pending)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Pending);

    let order = session
        .client
        .update_order_status(OrderId::new(7), OrderStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
}

#[tokio::test]
async fn list_orders_filters_by_status() {
    let backend = TestBackend::spawn().await;
    let session = backend.authed_session();
    backend.state.seed_order(sample_order(1, "pending"));
    backend.state.seed_order(sample_order(2, "shipped"));
    backend.state.seed_order(sample_order(3, "pending"));

    let page = session
        .client
        .list_orders(None, None, Some(OrderStatus::Pending))
        .await
        .unwrap();

    assert_eq!(page.count, 2);
    assert!(
        page.results
            .iter()
            .all(|order| order.status == OrderStatus::Pending)
    );
}

#[tokio::test]
async fn toggling_a_product_twice_restores_its_original_state() {
    let backend = TestBackend::spawn().await;
    let session = backend.authed_session();

    let product = session
        .client
        .create_product(&shopdesk_admin::types::NewProduct {
            name: "Toggle Me".to_string(),
            description: "<p>x</p>".to_string(),
            category: shopdesk_core::CategoryId::new(1),
            brand: None,
            is_active: true,
        })
        .await
        .unwrap();
    let slug = Slug::new(product.slug.as_str());

    let once = session.client.toggle_product_status(&slug).await.unwrap();
    assert!(!once.is_active);

    let twice = session.client.toggle_product_status(&slug).await.unwrap();
    assert_eq!(twice.is_active, product.is_active);
}
