//! Handlers for the admin console: login, dashboard, and inventory CRUD.
//!
//! Every mutating route is gated by the [`AdminSession`] extractor.
//! Operations on names or ids that no longer exist are logged and then
//! answered with the dashboard redirect; the refreshed table is the
//! feedback.

use axum::extract::{Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use chrono::Utc;
use serde::Deserialize;

use grocer_core::error::CoreError;
use grocer_core::expiry::{ExpiryStatus, LOW_STOCK_THRESHOLD};
use grocer_core::types::DbId;
use grocer_db::repositories::ItemRepo;

use crate::auth::password::verify_password;
use crate::auth::session::{clear_session_cookie, generate_session_token, session_cookie};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::found;
use crate::state::AppState;
use crate::views::admin::{DashboardRow, DashboardStats};
use crate::views::{admin, layout};

/// Form body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Form body for `POST /admin/update-discount/{id}`.
#[derive(Debug, Deserialize)]
pub struct DiscountForm {
    pub discount: i64,
}

/// GET /admin/login
pub async fn login_page() -> Html<String> {
    Html(layout::render_admin_page("Login", &admin::render_login(None)))
}

/// POST /admin/login
///
/// Check the submitted credentials against the configured admin
/// principal. Success installs the session cookie and redirects to the
/// dashboard; failure re-renders the form with an error message.
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    let admin_config = &state.config.admin;

    let credentials_ok = input.username == admin_config.username
        && verify_password(&input.password, &admin_config.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !credentials_ok {
        tracing::warn!(username = %input.username, "Failed admin login attempt");
        let body = admin::render_login(Some("Invalid credentials"));
        return Ok(Html(layout::render_admin_page("Login", &body)).into_response());
    }

    let token = generate_session_token(&admin_config.username, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let cookie = HeaderValue::from_str(&session_cookie(&token, &state.config.session))
        .map_err(|e| AppError::InternalError(format!("Cookie encoding error: {e}")))?;

    tracing::info!(username = %admin_config.username, "Admin logged in");

    let mut response = found("/admin/dashboard");
    response.headers_mut().insert(SET_COOKIE, cookie);
    Ok(response)
}

/// GET /admin/logout
///
/// Clears the session cookie. Deliberately not gated: logging out of an
/// expired session should still land on the login page.
pub async fn logout() -> Response {
    let cookie = HeaderValue::from_str(&clear_session_cookie())
        .unwrap_or_else(|_| HeaderValue::from_static(""));

    let mut response = found("/admin/login");
    response.headers_mut().insert(SET_COOKIE, cookie);
    response
}

/// GET /admin/dashboard
///
/// Full inventory table with expiry flags and low-stock markers.
pub async fn dashboard(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> AppResult<Html<String>> {
    let items = ItemRepo::list(&state.pool, None).await?;
    let today = Utc::now().date_naive();

    let mut low_stock = 0;
    let mut expiring_soon = 0;
    let rows: Vec<DashboardRow> = items
        .into_iter()
        .map(|item| {
            let status = ExpiryStatus::classify(item.expiry_date, today);
            let row_class = match status {
                ExpiryStatus::Expired => "table-danger",
                ExpiryStatus::ExpiresToday | ExpiryStatus::ExpiringSoon(_) => "table-warning",
                ExpiryStatus::None | ExpiryStatus::Fresh => "",
            };
            if matches!(
                status,
                ExpiryStatus::ExpiresToday | ExpiryStatus::ExpiringSoon(_)
            ) {
                expiring_soon += 1;
            }

            let is_low = item.quantity <= LOW_STOCK_THRESHOLD;
            if is_low {
                low_stock += 1;
            }

            DashboardRow {
                expiry_badge: status.badge(),
                row_class,
                low_stock: is_low,
                item,
            }
        })
        .collect();

    let stats = DashboardStats {
        total_items: rows.len(),
        low_stock,
        expiring_soon,
    };

    let body = admin::render_dashboard(&rows, &stats);
    Ok(Html(layout::render_admin_page("Dashboard", &body)))
}

/// GET /admin/increase/{name}
pub async fn increase_stock(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(name): Path<String>,
) -> AppResult<Response> {
    if !ItemRepo::increase_stock(&state.pool, &name).await? {
        tracing::warn!(item = %name, "Stock increase on unknown item");
    }
    Ok(found("/admin/dashboard"))
}

/// GET /admin/decrease/{name}
///
/// Guarded at zero: an item already out of stock stays at zero.
pub async fn decrease_stock(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(name): Path<String>,
) -> AppResult<Response> {
    if !ItemRepo::decrease_stock(&state.pool, &name).await? {
        tracing::warn!(item = %name, "Stock decrease refused (unknown item or at zero)");
    }
    Ok(found("/admin/dashboard"))
}

/// GET /admin/delete/{name}
pub async fn delete_item(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(name): Path<String>,
) -> AppResult<Response> {
    if ItemRepo::delete_by_name(&state.pool, &name).await? {
        tracing::info!(item = %name, "Item deleted");
    } else {
        tracing::warn!(item = %name, "Delete on unknown item");
    }
    Ok(found("/admin/dashboard"))
}

/// POST /admin/update-discount/{id}
pub async fn update_discount(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<DbId>,
    Form(input): Form<DiscountForm>,
) -> AppResult<Response> {
    if !(0..=100).contains(&input.discount) {
        return Err(AppError::Core(CoreError::Validation(
            "Discount must be between 0 and 100".into(),
        )));
    }

    if !ItemRepo::set_discount(&state.pool, id, input.discount).await? {
        tracing::warn!(item_id = id, "Discount update on unknown item");
    }
    Ok(found("/admin/dashboard"))
}
