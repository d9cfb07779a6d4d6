//! Integration tests for the inventory CSV export.

mod common;

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use common::{body_string, get, seed_item};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn export_streams_a_csv_attachment(pool: SqlitePool) {
    seed_item(&pool, "Apple", 2.50, 12, None).await;

    let response = get(common::build_test_app(pool), "/export").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/csv"));

    let disposition = response
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"grocery_export_"));
    assert!(disposition.ends_with(".csv\""));

    let csv = body_string(response).await;
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,category,price,quantity,expiry_date,notes,created_at")
    );
    let row = lines.next().expect("one data row");
    assert!(row.contains("Apple"));
    assert!(row.contains("2.50"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn export_orders_rows_by_name(pool: SqlitePool) {
    seed_item(&pool, "Zucchini", 1.00, 1, None).await;
    seed_item(&pool, "Apple", 1.00, 1, None).await;

    let response = get(common::build_test_app(pool), "/export").await;
    let csv = body_string(response).await;

    let names: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(1).unwrap())
        .collect();
    assert_eq!(names, vec!["Apple", "Zucchini"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn export_quotes_free_text_fields(pool: SqlitePool) {
    sqlx::query(
        "INSERT INTO items (name, category, price, quantity, notes) \
         VALUES ('Apple', 'Fruits', 2.0, 5, 'red, ripe')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let response = get(common::build_test_app(pool), "/export").await;
    let csv = body_string(response).await;
    assert!(csv.contains("\"red, ripe\""));
}
