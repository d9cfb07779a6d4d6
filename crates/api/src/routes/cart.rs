//! Route definitions for the cart and checkout flow.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::cart;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// The ledger transitions are GET routes because the storefront drives
/// them from plain links; each answers with a 302.
///
/// ```text
/// GET  /add-to-cart/{name}  -> add_to_cart (302 to / or /cart)
/// GET  /increase/{name}     -> increase    (302 to /cart)
/// GET  /decrease/{name}     -> decrease    (302 to /cart)
/// GET  /remove/{name}       -> remove      (302 to /cart)
/// GET  /cart                -> view_cart
/// GET  /checkout            -> view_checkout
/// POST /place-order         -> place_order (clears the cart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-to-cart/{name}", get(cart::add_to_cart))
        .route("/increase/{name}", get(cart::increase))
        .route("/decrease/{name}", get(cart::decrease))
        .route("/remove/{name}", get(cart::remove))
        .route("/cart", get(cart::view_cart))
        .route("/checkout", get(cart::view_checkout))
        .route("/place-order", post(cart::place_order))
}
