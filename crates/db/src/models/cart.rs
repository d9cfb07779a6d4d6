//! Cart line read model.

use grocer_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A cart line joined with its item's name and current discount,
/// as shown on the cart and checkout pages.
///
/// `price` is the unit price captured when the line was first added, so a
/// later price edit in the admin console does not reprice an open cart.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CartLineView {
    pub item_id: DbId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub discount_percent: Option<i64>,
}

impl CartLineView {
    /// Unit price after the item's discount, if any.
    pub fn effective_price(&self) -> f64 {
        grocer_core::pricing::discounted_unit_price(self.price, self.discount_percent)
    }

    /// Line subtotal at the discounted unit price.
    pub fn subtotal(&self) -> f64 {
        grocer_core::pricing::line_subtotal(self.price, self.discount_percent, self.quantity)
    }
}
