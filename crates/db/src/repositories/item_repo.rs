//! Repository for the `items` table.
//!
//! Stock mutations that pair with cart mutations live in
//! [`crate::repositories::cart_repo`]; the operations here touch
//! inventory alone (catalog reads, admin restock, CLI seeding).

use sqlx::SqlitePool;

use grocer_core::types::DbId;

use crate::models::item::{CreateItem, Item};

/// Column list for `items` queries.
const COLUMNS: &str = "\
    id, name, category, price, quantity, discount_percent, \
    expiry_date, notes, created_at";

/// How many names the search box suggestion endpoint returns at most.
const SUGGEST_LIMIT: i64 = 5;

/// Provides data access for inventory items.
pub struct ItemRepo;

impl ItemRepo {
    /// List the catalog, optionally filtered by a case-insensitive
    /// substring match on name or category. Ordered by name.
    pub async fn list(pool: &SqlitePool, search: Option<&str>) -> Result<Vec<Item>, sqlx::Error> {
        match search {
            Some(term) if !term.trim().is_empty() => {
                let pattern = format!("%{}%", term.trim().to_lowercase());
                let query = format!(
                    "SELECT {COLUMNS} FROM items \
                     WHERE LOWER(name) LIKE ? OR LOWER(category) LIKE ? \
                     ORDER BY name"
                );
                sqlx::query_as::<_, Item>(&query)
                    .bind(&pattern)
                    .bind(&pattern)
                    .fetch_all(pool)
                    .await
            }
            _ => {
                let query = format!("SELECT {COLUMNS} FROM items ORDER BY name");
                sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
            }
        }
    }

    /// Up to [`SUGGEST_LIMIT`] item names containing `term`
    /// (case-insensitive), ordered by name.
    pub async fn suggest(pool: &SqlitePool, term: &str) -> Result<Vec<String>, sqlx::Error> {
        let pattern = format!("%{}%", term.trim().to_lowercase());
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM items WHERE LOWER(name) LIKE ? ORDER BY name LIMIT ?",
        )
        .bind(&pattern)
        .bind(SUGGEST_LIMIT)
        .fetch_all(pool)
        .await
    }

    /// Insert a new item. Fails with a unique-constraint violation if the
    /// name is already taken.
    pub async fn create(pool: &SqlitePool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (name, category, price, quantity, expiry_date, notes) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.price)
            .bind(input.quantity)
            .bind(input.expiry_date)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Add one unit of stock. Returns `false` if no item has that name.
    pub async fn increase_stock(pool: &SqlitePool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE items SET quantity = quantity + 1 WHERE name = ?")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove one unit of stock, never going below zero.
    ///
    /// Returns `false` if the item is missing or already at zero.
    pub async fn decrease_stock(pool: &SqlitePool, name: &str) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE items SET quantity = quantity - 1 WHERE name = ? AND quantity > 0")
                .bind(name)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set or clear an item's discount percentage.
    ///
    /// Returns `false` if no item has that ID. Range validation happens
    /// at the edge; the schema also enforces 0..=100.
    pub async fn set_discount(
        pool: &SqlitePool,
        id: DbId,
        discount_percent: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE items SET discount_percent = ? WHERE id = ?")
            .bind(discount_percent)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an item by name. Any cart line for it goes too, via
    /// `ON DELETE CASCADE`. Returns `false` if no item has that name.
    pub async fn delete_by_name(pool: &SqlitePool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE name = ?")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
