//! Handlers for the cart: ledger transitions, cart/checkout views, and
//! order placement.
//!
//! Ledger refusals (unknown item, empty shelf, missing line) are logged
//! and answered with the same redirect a success gets; the storefront
//! shows the resulting state rather than an error page.

use axum::extract::{Path, State};
use axum::response::{Html, Response};
use axum::Form;
use serde::Deserialize;
use validator::Validate;

use grocer_core::error::CoreError;
use grocer_core::pricing::order_total;
use grocer_db::models::CartLineView;
use grocer_db::repositories::{CartRepo, LedgerError};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::response::found;
use crate::views::{cart, checkout, layout};

/// Form body for `POST /place-order`.
#[derive(Debug, Deserialize, Validate)]
pub struct PlaceOrderForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
}

/// GET /add-to-cart/{name}
///
/// Move one unit from the shelf into the cart, then back to the catalog.
/// Refusals land on the cart page so the shopper sees what they hold.
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    match CartRepo::add(&state.pool, &name).await {
        Ok(()) => Ok(found("/")),
        Err(LedgerError::Database(e)) => Err(AppError::Database(e)),
        Err(refused) => {
            tracing::warn!(item = %name, reason = %refused, "Add to cart refused");
            Ok(found("/cart"))
        }
    }
}

/// GET /increase/{name}
pub async fn increase(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    match CartRepo::increase(&state.pool, &name).await {
        Ok(()) => Ok(found("/cart")),
        Err(LedgerError::Database(e)) => Err(AppError::Database(e)),
        Err(refused) => {
            tracing::warn!(item = %name, reason = %refused, "Cart increase refused");
            Ok(found("/cart"))
        }
    }
}

/// GET /decrease/{name}
pub async fn decrease(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    match CartRepo::decrease(&state.pool, &name).await {
        Ok(()) => Ok(found("/cart")),
        Err(LedgerError::Database(e)) => Err(AppError::Database(e)),
        Err(refused) => {
            tracing::warn!(item = %name, reason = %refused, "Cart decrease refused");
            Ok(found("/cart"))
        }
    }
}

/// GET /remove/{name}
pub async fn remove(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    match CartRepo::remove(&state.pool, &name).await {
        Ok(()) => Ok(found("/cart")),
        Err(LedgerError::Database(e)) => Err(AppError::Database(e)),
        Err(refused) => {
            tracing::warn!(item = %name, reason = %refused, "Cart remove refused");
            Ok(found("/cart"))
        }
    }
}

/// GET /cart
///
/// Cart lines with discounted subtotals and the discounted grand total.
pub async fn view_cart(State(state): State<AppState>) -> AppResult<Html<String>> {
    let lines = CartRepo::lines(&state.pool).await?;
    let total = discounted_total(&lines);
    let cart_count = lines.iter().map(|l| l.quantity).sum();

    let body = cart::render_cart(&lines, total);
    Ok(Html(layout::render_page("Cart", cart_count, &body)))
}

/// GET /checkout
///
/// Order summary and delivery form. Uses the same discounted total as
/// the cart page.
pub async fn view_checkout(State(state): State<AppState>) -> AppResult<Html<String>> {
    let lines = CartRepo::lines(&state.pool).await?;
    let total = discounted_total(&lines);
    let cart_count = lines.iter().map(|l| l.quantity).sum();

    let body = checkout::render_checkout(&lines, total);
    Ok(Html(layout::render_page("Checkout", cart_count, &body)))
}

/// POST /place-order
///
/// Validate the delivery details, drain the cart, and confirm the order
/// with the discounted total for the drained lines.
pub async fn place_order(
    State(state): State<AppState>,
    Form(input): Form<PlaceOrderForm>,
) -> AppResult<Html<String>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let lines = CartRepo::drain(&state.pool).await?;
    let total = discounted_total(&lines);
    tracing::info!(
        customer = %input.name,
        line_count = lines.len(),
        total,
        "Order placed"
    );

    let body = checkout::render_order_confirmation(&input.name, total);
    Ok(Html(layout::render_page("Order Placed", 0, &body)))
}

/// Grand total over cart lines at discounted unit prices.
fn discounted_total(lines: &[CartLineView]) -> f64 {
    order_total(
        lines
            .iter()
            .map(|l| (l.price, l.discount_percent, l.quantity)),
    )
}
