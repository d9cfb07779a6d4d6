//! Handler for the inventory CSV export.

use axum::body::Body;
use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::Response;

use grocer_core::export::{build_csv, export_filename, INVENTORY_HEADER};
use grocer_db::models::Item;
use grocer_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /export
///
/// The full inventory as a CSV attachment, rows ordered by name,
/// filename stamped with the download time.
pub async fn export_inventory(State(state): State<AppState>) -> AppResult<Response> {
    let items = ItemRepo::list(&state.pool, None).await?;

    let rows: Vec<Vec<String>> = items.iter().map(csv_fields).collect();
    let csv = build_csv(&INVENTORY_HEADER, &rows);
    let filename = export_filename(chrono::Utc::now());

    tracing::info!(rows = items.len(), %filename, "Inventory exported");

    Response::builder()
        .status(200)
        .header(CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(csv))
        .map_err(|e| AppError::InternalError(format!("Response build error: {e}")))
}

/// One item as export fields, in [`INVENTORY_HEADER`] column order.
fn csv_fields(item: &Item) -> Vec<String> {
    vec![
        item.id.to_string(),
        item.name.clone(),
        item.category.clone().unwrap_or_default(),
        format!("{:.2}", item.price),
        item.quantity.to_string(),
        item.expiry_date
            .map(|d| d.to_string())
            .unwrap_or_default(),
        item.notes.clone().unwrap_or_default(),
        item.created_at.to_rfc3339(),
    ]
}
