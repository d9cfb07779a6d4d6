//! Route definitions for the admin console.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// Login and logout are public; everything else is gated by the
/// `AdminSession` extractor inside the handlers and redirects to
/// `/admin/login` without a valid session cookie.
///
/// ```text
/// GET  /login                 -> login_page
/// POST /login                 -> login (sets session cookie)
/// GET  /logout                -> logout (clears session cookie)
/// GET  /dashboard             -> dashboard
/// GET  /increase/{name}       -> increase_stock
/// GET  /decrease/{name}       -> decrease_stock (guarded at zero)
/// GET  /delete/{name}         -> delete_item
/// POST /update-discount/{id}  -> update_discount (form field `discount`)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(admin::login_page).post(admin::login))
        .route("/logout", get(admin::logout))
        .route("/dashboard", get(admin::dashboard))
        .route("/increase/{name}", get(admin::increase_stock))
        .route("/decrease/{name}", get(admin::decrease_stock))
        .route("/delete/{name}", get(admin::delete_item))
        .route("/update-discount/{id}", post(admin::update_discount))
}
