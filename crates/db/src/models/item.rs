//! Inventory item entity model and DTOs.
//!
//! An item is one product on the shelf. `quantity` counts units still in
//! stock, not units sitting in the cart; the cart keeps its own count.

use chrono::NaiveDate;
use grocer_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub discount_percent: Option<i64>,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl Item {
    /// Unit price after applying the item's discount, if any.
    pub fn effective_price(&self) -> f64 {
        grocer_core::pricing::discounted_unit_price(self.price, self.discount_percent)
    }
}

/// DTO for creating a new item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
