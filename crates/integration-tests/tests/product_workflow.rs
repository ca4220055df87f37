//! Tests for the multi-step product creation workflow.

use rust_decimal::Decimal;
use shopdesk_admin::ApiError;
use shopdesk_admin::forms::VariantForm;
use shopdesk_admin::types::{ImageUpload, NewProduct};
use shopdesk_admin::workflow::CreationStep;
use shopdesk_core::{CategoryId, Sku};
use shopdesk_integration_tests::TestBackend;

fn base_product() -> NewProduct {
    NewProduct {
        name: "Test".to_string(),
        description: "<p>x</p>".to_string(),
        category: CategoryId::new(1),
        brand: None,
        is_active: true,
    }
}

fn variant(sku: &str, size: &str, discount: Option<u8>) -> VariantForm {
    VariantForm {
        size: size.to_string(),
        price: Decimal::from(100),
        stock: 5,
        sku: Sku::new(sku),
        is_discount_active: discount.is_some(),
        discount_percentage: discount,
    }
}

fn image(filename: &str) -> ImageUpload {
    ImageUpload {
        filename: filename.to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
        alt_text: Some("Front".to_string()),
    }
}

#[tokio::test]
async fn create_sends_suffixed_sku_and_derived_discount_price() {
    let backend = TestBackend::spawn().await;
    let session = backend.authed_session();

    let outcome = session
        .client
        .create_product_with_details(
            base_product(),
            vec![variant("ABC", "M", Some(10))],
            vec![image("front.jpg")],
        )
        .await
        .unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.product.slug.as_str(), "test");
    assert_eq!(outcome.variants.len(), 1);
    assert_eq!(outcome.images.len(), 1);

    // What actually went over the wire.
    let payloads = backend.state.variant_payloads();
    assert_eq!(payloads.len(), 1);
    let sent = &payloads[0];
    assert_eq!(sent["sku"], "ABC-m");
    assert_eq!(sent["discount_price"], "90.00");
    assert_eq!(sent["discount_percentage"], 10);
    assert_eq!(sent["is_discount_active"], true);
    assert_eq!(sent["price"], "100");
    assert_eq!(sent["stock"], 5);
}

#[tokio::test]
async fn partial_failures_are_collected_not_fatal() {
    let backend = TestBackend::spawn().await;
    let session = backend.authed_session();
    backend.state.fail_variant_sku("DUP-m");
    backend.state.fail_image_filename("broken.jpg");

    let outcome = session
        .client
        .create_product_with_details(
            base_product(),
            vec![variant("ABC", "M", None), variant("DUP", "M", None)],
            vec![image("front.jpg"), image("broken.jpg")],
        )
        .await
        .unwrap();

    // The base product and the healthy siblings survive.
    assert_eq!(outcome.variants.len(), 1);
    assert_eq!(outcome.images.len(), 1);
    assert!(backend.state.product("test").is_some());

    // Both failures are recorded, in order.
    assert_eq!(outcome.failures.len(), 2);
    assert_eq!(
        outcome.failures[0].step,
        CreationStep::Variant {
            sku: "DUP-m".to_string()
        }
    );
    assert_eq!(
        outcome.failures[1].step,
        CreationStep::Image {
            filename: "broken.jpg".to_string()
        }
    );
    assert!(!outcome.is_complete());
}

#[tokio::test]
async fn a_failed_variant_does_not_stop_later_steps() {
    let backend = TestBackend::spawn().await;
    let session = backend.authed_session();
    backend.state.fail_variant_sku("DUP-m");

    let outcome = session
        .client
        .create_product_with_details(
            base_product(),
            // The failing variant comes first; the rest still run.
            vec![variant("DUP", "M", None), variant("ABC", "M", None)],
            vec![image("front.jpg")],
        )
        .await
        .unwrap();

    assert_eq!(outcome.variants.len(), 1);
    assert_eq!(outcome.variants[0].sku.as_str(), "ABC-m");
    assert_eq!(outcome.images.len(), 1);
    assert_eq!(outcome.failures.len(), 1);
}

#[tokio::test]
async fn invalid_variant_form_blocks_every_request() {
    let backend = TestBackend::spawn().await;
    let session = backend.authed_session();

    let mut bad = variant("ABC", "M", Some(10));
    bad.price = Decimal::ZERO;

    let err = session
        .client
        .create_product_with_details(base_product(), vec![bad], vec![image("front.jpg")])
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    // Client-side validation blocks the whole sequence: no base product,
    // no variant, no image request was made.
    assert!(backend.state.requests().is_empty());
}

#[tokio::test]
async fn base_product_failure_aborts_the_sequence() {
    let backend = TestBackend::spawn().await;
    let session = backend.authed_session();

    let mut product = base_product();
    product.name = String::new();

    let err = session
        .client
        .create_product_with_details(product, vec![variant("ABC", "M", None)], vec![])
        .await
        .unwrap_err();

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "name: This field is required.");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    // Nothing after the base product was attempted.
    assert_eq!(backend.state.count_requests("POST /api/products/"), 1);
    assert_eq!(
        backend.state.count_requests("POST /api/product-variants/"),
        0
    );
}
