//! Route definitions for the shopper-facing catalog pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::{export, storefront};
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /         -> index (catalog, optional ?search=)
/// GET /suggest  -> suggest (JSON, up to 5 names for ?q=)
/// GET /track    -> track_order (static page)
/// GET /export   -> export_inventory (CSV attachment)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(storefront::index))
        .route("/suggest", get(storefront::suggest))
        .route("/track", get(storefront::track_order))
        .route("/export", get(export::export_inventory))
}
