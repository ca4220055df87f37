//! Test harness for Shopdesk integration tests.
//!
//! Spawns an in-process axum mock of the REST backend on an ephemeral
//! port and wires an [`AdminClient`] at it. The mock tracks every
//! request, lets tests invalidate tokens or inject per-item failures,
//! and echoes created entities back the way the real backend does.
//!
//! # Example
//!
//! ```rust,ignore
//! let backend = TestBackend::spawn().await;
//! let session = backend.authed_session();
//! let products = session.client.list_products(None, None).await?;
//! ```

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::missing_panics_doc)]

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use shopdesk_admin::auth::{AuthTokens, MemoryTokenStore, TokenStore, TokenStoreError};
use shopdesk_admin::{AdminClient, AdminConfig};

/// Credentials the mock login endpoint accepts.
pub const TEST_EMAIL: &str = "admin@shop.test";
pub const TEST_PASSWORD: &str = "kb7#Qp2!vX9z";

// =============================================================================
// Shared token store
// =============================================================================

/// Token store handle that tests can inspect after handing a clone to
/// the client.
#[derive(Clone)]
pub struct SharedStore(pub Arc<MemoryTokenStore>);

impl TokenStore for SharedStore {
    fn load(&self) -> Result<Option<AuthTokens>, TokenStoreError> {
        self.0.load()
    }

    fn save(&self, tokens: &AuthTokens) -> Result<(), TokenStoreError> {
        self.0.save(tokens)
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        self.0.clear()
    }
}

/// A client plus the store backing it.
pub struct TestSession {
    pub client: AdminClient,
    pub store: SharedStore,
}

// =============================================================================
// Mock state
// =============================================================================

#[derive(Default)]
struct Inner {
    valid_access: HashSet<String>,
    valid_refresh: HashSet<String>,
    /// When false, the refresh endpoint rejects everything.
    refresh_enabled: bool,
    /// When false, refreshed access tokens are issued but never
    /// accepted, so the retried request 401s again.
    accept_refreshed_access: bool,
    refresh_calls: u32,
    token_seq: u32,
    /// Request log: "METHOD path" per handled request.
    requests: Vec<String>,
    next_id: i64,
    products: HashMap<String, Value>,
    /// Variant payloads exactly as received.
    variant_payloads: Vec<Value>,
    fail_variant_skus: HashSet<String>,
    fail_image_filenames: HashSet<String>,
    orders: HashMap<i64, Value>,
    report: Option<Value>,
}

/// Handle on the mock backend's state.
#[derive(Clone)]
pub struct MockState(Arc<Mutex<Inner>>);

impl Default for MockState {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Inner {
            refresh_enabled: true,
            accept_refreshed_access: true,
            next_id: 1,
            ..Inner::default()
        })))
    }
}

impl MockState {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.0.lock().expect("mock state poisoned")
    }

    /// Register a token pair the backend will accept.
    pub fn add_session(&self, access: &str, refresh: &str) {
        let mut inner = self.lock();
        inner.valid_access.insert(access.to_owned());
        inner.valid_refresh.insert(refresh.to_owned());
    }

    /// Register only a refresh token; the matching access token is
    /// treated as already expired.
    pub fn add_expired_session(&self, refresh: &str) {
        self.lock().valid_refresh.insert(refresh.to_owned());
    }

    /// Make every refresh attempt fail.
    pub fn disable_refresh(&self) {
        self.lock().refresh_enabled = false;
    }

    /// Issue refreshed access tokens that the backend then rejects.
    pub fn reject_refreshed_access(&self) {
        self.lock().accept_refreshed_access = false;
    }

    /// Number of refresh attempts seen.
    pub fn refresh_calls(&self) -> u32 {
        self.lock().refresh_calls
    }

    /// The request log.
    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    /// Count log entries matching a "METHOD path" line.
    pub fn count_requests(&self, line: &str) -> usize {
        self.lock().requests.iter().filter(|r| *r == line).count()
    }

    /// Variant payloads exactly as the backend received them.
    pub fn variant_payloads(&self) -> Vec<Value> {
        self.lock().variant_payloads.clone()
    }

    /// Reject variant creations carrying this (already suffixed) SKU.
    pub fn fail_variant_sku(&self, sku: &str) {
        self.lock().fail_variant_skus.insert(sku.to_owned());
    }

    /// Reject image uploads carrying this filename.
    pub fn fail_image_filename(&self, filename: &str) {
        self.lock().fail_image_filenames.insert(filename.to_owned());
    }

    /// Seed an order the tests can transition.
    pub fn seed_order(&self, order: Value) {
        let id = order["id"].as_i64().expect("order id");
        self.lock().orders.insert(id, order);
    }

    /// Current stored copy of an order.
    pub fn order(&self, id: i64) -> Option<Value> {
        self.lock().orders.get(&id).cloned()
    }

    /// Stored copy of a product by slug.
    pub fn product(&self, slug: &str) -> Option<Value> {
        self.lock().products.get(slug).cloned()
    }

    /// Set the payload the sales-report endpoint returns.
    pub fn set_report(&self, report: Value) {
        self.lock().report = Some(report);
    }
}

// =============================================================================
// Backend harness
// =============================================================================

/// An in-process mock backend bound to an ephemeral port.
pub struct TestBackend {
    pub addr: SocketAddr,
    pub state: MockState,
}

impl TestBackend {
    /// Bind the mock router and serve it in the background.
    pub async fn spawn() -> Self {
        let state = MockState::default();
        let router = build_router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock");
        });

        Self { addr, state }
    }

    /// Base URL for client configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn config(&self) -> AdminConfig {
        AdminConfig::new(&self.base_url(), PathBuf::from("/tmp/shopdesk-test-unused.json"))
            .expect("test config")
    }

    /// A session whose tokens the backend accepts.
    #[must_use]
    pub fn authed_session(&self) -> TestSession {
        self.state.add_session("access-valid", "refresh-valid");
        self.session_with_tokens("access-valid", "refresh-valid")
    }

    /// A session carrying the given token pair, registered or not.
    #[must_use]
    pub fn session_with_tokens(&self, access: &str, refresh: &str) -> TestSession {
        let store = SharedStore(Arc::new(MemoryTokenStore::with_tokens(AuthTokens {
            access: access.to_owned(),
            refresh: refresh.to_owned(),
            obtained_at: 0,
        })));
        let client = AdminClient::new(&self.config(), Box::new(store.clone()))
            .expect("build test client");
        TestSession { client, store }
    }

    /// A session with no tokens at all.
    #[must_use]
    pub fn anonymous_session(&self) -> TestSession {
        let store = SharedStore(Arc::new(MemoryTokenStore::new()));
        let client = AdminClient::new(&self.config(), Box::new(store.clone()))
            .expect("build test client");
        TestSession { client, store }
    }
}

/// A pending order fixture.
#[must_use]
pub fn sample_order(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "order_number": format!("ORD-{id}"),
        "status": status,
        "customer_name": "Jo Doe",
        "customer_email": "jo@shop.test",
        "items": [{
            "product": 1,
            "variant": 2,
            "product_name": "Black Tee",
            "size": "M",
            "price": "19.99",
            "quantity": 2
        }],
        "coupon_code": null,
        "subtotal": "39.98",
        "discount": "0.00",
        "total": "39.98",
        "delivery_partner": null,
        "tracking_number": null,
        "tracking_url": null,
        "expected_delivery": null,
        "created_at": null
    })
}

// =============================================================================
// Router & handlers
// =============================================================================

fn build_router(state: MockState) -> Router {
    Router::new()
        .route("/api/auth/login/", post(auth_login))
        .route("/api/auth/refresh/", post(auth_refresh))
        .route("/api/products/", post(products_create).get(products_list))
        .route("/api/products/{slug}/", get(product_get))
        .route("/api/products/{slug}/toggle_status/", patch(product_toggle))
        .route("/api/product-variants/", post(variants_create))
        .route("/api/product-images/", post(images_create))
        .route("/api/orders/", get(orders_list))
        .route("/api/orders/{id}/", get(order_get))
        .route("/api/orders/{id}/update_status/", post(order_update_status))
        .route("/api/dashboard/sales-report/", get(sales_report))
        .with_state(state)
}

type Reply = (StatusCode, Json<Value>);

fn unauthorized() -> Reply {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Token is invalid or expired"})),
    )
}

/// Record the request and check the bearer token.
fn authorize(state: &MockState, headers: &HeaderMap, line: &str) -> Result<(), Reply> {
    let mut inner = state.lock();
    inner.requests.push(line.to_owned());

    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    match token {
        Some(token) if inner.valid_access.contains(token) => Ok(()),
        _ => Err(unauthorized()),
    }
}

async fn auth_login(State(state): State<MockState>, Json(body): Json<Value>) -> Reply {
    let mut inner = state.lock();
    inner.requests.push("POST /api/auth/login/".to_owned());

    if body["email"] == TEST_EMAIL && body["password"] == TEST_PASSWORD {
        inner.token_seq += 1;
        let access = format!("access-{}", inner.token_seq);
        let refresh = format!("refresh-{}", inner.token_seq);
        inner.valid_access.insert(access.clone());
        inner.valid_refresh.insert(refresh.clone());
        (
            StatusCode::OK,
            Json(json!({"access": access, "refresh": refresh})),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid credentials"})),
        )
    }
}

async fn auth_refresh(State(state): State<MockState>, Json(body): Json<Value>) -> Reply {
    let mut inner = state.lock();
    inner.requests.push("POST /api/auth/refresh/".to_owned());
    inner.refresh_calls += 1;

    let refresh = body["refresh"].as_str().unwrap_or_default();
    if !inner.refresh_enabled || !inner.valid_refresh.contains(refresh) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Refresh token expired"})),
        );
    }

    inner.token_seq += 1;
    let access = format!("access-refreshed-{}", inner.token_seq);
    if inner.accept_refreshed_access {
        inner.valid_access.insert(access.clone());
    }
    (StatusCode::OK, Json(json!({"access": access})))
}

fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

async fn products_create(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    if let Err(reply) = authorize(&state, &headers, "POST /api/products/") {
        return reply;
    }
    let mut inner = state.lock();

    let Some(name) = body["name"].as_str().filter(|name| !name.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"name": ["This field is required."]})),
        );
    };

    let id = inner.next_id;
    inner.next_id += 1;
    let slug = slugify(name);
    let product = json!({
        "id": id,
        "slug": slug.clone(),
        "name": name,
        "description": body["description"],
        "category": body["category"],
        "brand": body.get("brand").cloned().unwrap_or(Value::Null),
        "is_active": body.get("is_active").cloned().unwrap_or(Value::Bool(true)),
        "variants": [],
        "images": [],
        "created_at": null
    });
    inner.products.insert(slug.clone(), product.clone());
    (StatusCode::CREATED, Json(product))
}

async fn products_list(State(state): State<MockState>, headers: HeaderMap) -> Reply {
    if let Err(reply) = authorize(&state, &headers, "GET /api/products/") {
        return reply;
    }
    let inner = state.lock();
    let results: Vec<Value> = inner.products.values().cloned().collect();
    (
        StatusCode::OK,
        Json(json!({
            "count": results.len(),
            "next": null,
            "previous": null,
            "results": results
        })),
    )
}

async fn product_get(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Reply {
    if let Err(reply) = authorize(&state, &headers, &format!("GET /api/products/{slug}/")) {
        return reply;
    }
    let inner = state.lock();
    inner.products.get(&slug).map_or_else(
        || {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"detail": "Not found."})),
            )
        },
        |product| (StatusCode::OK, Json(product.clone())),
    )
}

async fn product_toggle(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Reply {
    let line = format!("PATCH /api/products/{slug}/toggle_status/");
    if let Err(reply) = authorize(&state, &headers, &line) {
        return reply;
    }
    let mut inner = state.lock();
    let Some(product) = inner.products.get_mut(&slug) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Not found."})),
        );
    };
    let flipped = !product["is_active"].as_bool().unwrap_or(true);
    product["is_active"] = Value::Bool(flipped);
    (StatusCode::OK, Json(product.clone()))
}

async fn variants_create(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    if let Err(reply) = authorize(&state, &headers, "POST /api/product-variants/") {
        return reply;
    }
    let mut inner = state.lock();
    inner.variant_payloads.push(body.clone());

    let sku = body["sku"].as_str().unwrap_or_default();
    if inner.fail_variant_skus.contains(sku) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"sku": ["Variant with this SKU already exists."]})),
        );
    }

    let id = inner.next_id;
    inner.next_id += 1;
    let mut variant = body;
    variant["id"] = json!(id);
    (StatusCode::CREATED, Json(variant))
}

async fn images_create(
    State(state): State<MockState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Reply {
    if let Err(reply) = authorize(&state, &headers, "POST /api/product-images/") {
        return reply;
    }

    let mut product: Option<i64> = None;
    let mut filename: Option<String> = None;
    let mut alt_text: Option<String> = None;

    while let Some(field) = multipart.next_field().await.unwrap_or(None) {
        match field.name() {
            Some("product") => {
                product = field.text().await.ok().and_then(|t| t.parse().ok());
            }
            Some("image") => {
                filename = field.file_name().map(ToOwned::to_owned);
                let _ = field.bytes().await;
            }
            Some("alt_text") => {
                alt_text = field.text().await.ok();
            }
            _ => {}
        }
    }

    let mut inner = state.lock();
    let filename = filename.unwrap_or_default();
    if inner.fail_image_filenames.contains(&filename) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"image": ["Upload failed."]})),
        );
    }

    let id = inner.next_id;
    inner.next_id += 1;
    (
        StatusCode::CREATED,
        Json(json!({
            "id": id,
            "product": product,
            "image": format!("https://cdn.shop.test/media/{filename}"),
            "alt_text": alt_text
        })),
    )
}

async fn orders_list(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Reply {
    if let Err(reply) = authorize(&state, &headers, "GET /api/orders/") {
        return reply;
    }
    let inner = state.lock();
    let mut results: Vec<Value> = inner
        .orders
        .values()
        .filter(|order| {
            params
                .get("status")
                .is_none_or(|status| order["status"] == status.as_str())
        })
        .cloned()
        .collect();
    results.sort_by_key(|order| order["id"].as_i64().unwrap_or(0));
    (
        StatusCode::OK,
        Json(json!({
            "count": results.len(),
            "next": null,
            "previous": null,
            "results": results
        })),
    )
}

async fn order_get(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Reply {
    if let Err(reply) = authorize(&state, &headers, &format!("GET /api/orders/{id}/")) {
        return reply;
    }
    let inner = state.lock();
    inner.orders.get(&id).map_or_else(
        || {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"detail": "Not found."})),
            )
        },
        |order| (StatusCode::OK, Json(order.clone())),
    )
}

async fn order_update_status(
    State(state): State<MockState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Reply {
    let line = format!("POST /api/orders/{id}/update_status/");
    if let Err(reply) = authorize(&state, &headers, &line) {
        return reply;
    }
    let mut inner = state.lock();
    let Some(order) = inner.orders.get_mut(&id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Not found."})),
        );
    };

    order["status"] = body["status"].clone();
    for field in [
        "delivery_partner",
        "tracking_number",
        "tracking_url",
        "expected_delivery",
    ] {
        if let Some(value) = body.get(field) {
            order[field] = value.clone();
        }
    }
    (StatusCode::OK, Json(order.clone()))
}

async fn sales_report(State(state): State<MockState>, headers: HeaderMap) -> Reply {
    if let Err(reply) = authorize(&state, &headers, "GET /api/dashboard/sales-report/") {
        return reply;
    }
    let inner = state.lock();
    let report = inner.report.clone().unwrap_or_else(|| {
        json!({
            "period": "daily",
            "start_date": null,
            "end_date": null,
            "data": [],
            "summary": {"total_orders": 0, "total_sales": "0.00", "average_order_value": "0.00"}
        })
    });
    (StatusCode::OK, Json(report))
}
