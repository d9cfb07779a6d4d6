//! Shared helpers for the API integration tests.
//!
//! Builds the same router + middleware stack production uses, backed by
//! the per-test SQLite pool `#[sqlx::test]` hands out.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, Response};
use axum::Router;
use sqlx::SqlitePool;
use tower::ServiceExt;

use grocer_api::auth::password::hash_password;
use grocer_api::auth::session::SessionConfig;
use grocer_api::config::{AdminConfig, ServerConfig};
use grocer_api::routes::build_app_router;
use grocer_api::state::AppState;
use grocer_db::models::CreateItem;
use grocer_db::repositories::ItemRepo;

pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "test-password";

/// Build a test `ServerConfig` with safe defaults and a known admin
/// credential, none of it read from the environment.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        session: SessionConfig {
            secret: "integration-test-secret-0123456789".to_string(),
            expiry_mins: 60,
        },
        admin: AdminConfig {
            username: TEST_ADMIN_USERNAME.to_string(),
            password_hash: hash_password(TEST_ADMIN_PASSWORD).expect("hashing test password"),
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Send a GET request with a `Cookie` header.
pub async fn get_with_cookie(app: Router, path: &str, cookie: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .header(COOKIE, cookie)
            .body(Body::empty())
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Send a POST with a urlencoded form body.
pub async fn post_form(app: Router, path: &str, form: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Send a POST with a urlencoded form body and a `Cookie` header.
pub async fn post_form_with_cookie(
    app: Router,
    path: &str,
    form: &str,
    cookie: &str,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(COOKIE, cookie)
            .body(Body::from(form.to_string()))
            .expect("request build"),
    )
    .await
    .expect("request send")
}

/// Read a response body to a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .expect("body read")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body utf8")
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let text = body_string(response).await;
    serde_json::from_str(&text).expect("body json")
}

/// Log in as the test admin and return the session `Cookie` value.
pub async fn admin_login_cookie(app: Router) -> String {
    let response = post_form(
        app,
        "/admin/login",
        &format!("username={TEST_ADMIN_USERNAME}&password={TEST_ADMIN_PASSWORD}"),
    )
    .await;

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .expect("cookie utf8");

    // "grocer_admin=<token>; Path=/; ..." -> "grocer_admin=<token>"
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Insert one item with the given stock and optional discount.
pub async fn seed_item(
    pool: &SqlitePool,
    name: &str,
    price: f64,
    quantity: i64,
    discount_percent: Option<i64>,
) {
    let item = ItemRepo::create(
        pool,
        &CreateItem {
            name: name.to_string(),
            category: Some("Fruits".to_string()),
            price,
            quantity,
            expiry_date: None,
            notes: None,
        },
    )
    .await
    .expect("seed item");

    if let Some(discount) = discount_percent {
        ItemRepo::set_discount(pool, item.id, discount)
            .await
            .expect("seed discount");
    }
}

/// Current stock for an item.
pub async fn stock_of(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar("SELECT quantity FROM items WHERE name = ?")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("stock query")
}

/// Cart quantity for an item, if a line exists.
pub async fn cart_quantity_of(pool: &SqlitePool, name: &str) -> Option<i64> {
    sqlx::query_scalar(
        "SELECT c.quantity FROM cart_lines c JOIN items i ON i.id = c.item_id WHERE i.name = ?",
    )
    .bind(name)
    .fetch_optional(pool)
    .await
    .expect("cart query")
}
