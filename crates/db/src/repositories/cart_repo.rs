//! Repository for the `cart_lines` table and the stock/cart ledger.
//!
//! Every unit is either on the shelf (`items.quantity`) or in the cart
//! (`cart_lines.quantity`), never both and never neither. Each transition
//! here moves units between the two sides inside a single transaction, so
//! the sum is the same before and after no matter how requests interleave.

use sqlx::{Sqlite, SqlitePool, Transaction};
use thiserror::Error;

use grocer_core::types::DbId;

use crate::models::cart::CartLineView;

/// Column list for cart lines joined with their items.
const VIEW_COLUMNS: &str = "\
    c.item_id, i.name, c.price, c.quantity, i.discount_percent";

/// Why a ledger transition was refused. Surfaced to the caller so the
/// edge can log it and pick a redirect, instead of the failure being
/// silently swallowed.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No item with the given name exists.
    #[error("no item named {0:?}")]
    ItemNotFound(String),

    /// The item exists but has no units left on the shelf.
    #[error("no stock left for {0:?}")]
    InsufficientStock(String),

    /// The cart holds no line for the item.
    #[error("no cart line for {0:?}")]
    LineNotFound(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Provides the ledger transitions and cart reads.
pub struct CartRepo;

impl CartRepo {
    /// Move one unit of `name` from the shelf into the cart.
    ///
    /// Creates the cart line at the item's current price on first add;
    /// later adds only bump the line quantity, keeping the captured price.
    pub async fn add(pool: &SqlitePool, name: &str) -> Result<(), LedgerError> {
        let mut tx = pool.begin().await?;

        let Some((item_id, price)) =
            sqlx::query_as::<_, (DbId, f64)>("SELECT id, price FROM items WHERE name = ?")
                .bind(name)
                .fetch_optional(&mut *tx)
                .await?
        else {
            return Err(LedgerError::ItemNotFound(name.to_string()));
        };

        // The guard and the decrement are one statement, so two shoppers
        // racing for the last unit cannot both win.
        let taken =
            sqlx::query("UPDATE items SET quantity = quantity - 1 WHERE id = ? AND quantity > 0")
                .bind(item_id)
                .execute(&mut *tx)
                .await?;
        if taken.rows_affected() == 0 {
            return Err(LedgerError::InsufficientStock(name.to_string()));
        }

        sqlx::query(
            "INSERT INTO cart_lines (item_id, price, quantity) VALUES (?, ?, 1) \
             ON CONFLICT (item_id) DO UPDATE SET quantity = quantity + 1",
        )
        .bind(item_id)
        .bind(price)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Move one more unit of `name` into an existing cart line.
    ///
    /// Unlike [`CartRepo::add`], this never creates a line.
    pub async fn increase(pool: &SqlitePool, name: &str) -> Result<(), LedgerError> {
        let mut tx = pool.begin().await?;
        let item_id = Self::item_id(&mut tx, name).await?;

        let bumped = sqlx::query("UPDATE cart_lines SET quantity = quantity + 1 WHERE item_id = ?")
            .bind(item_id)
            .execute(&mut *tx)
            .await?;
        if bumped.rows_affected() == 0 {
            return Err(LedgerError::LineNotFound(name.to_string()));
        }

        let taken =
            sqlx::query("UPDATE items SET quantity = quantity - 1 WHERE id = ? AND quantity > 0")
                .bind(item_id)
                .execute(&mut *tx)
                .await?;
        if taken.rows_affected() == 0 {
            // Dropping the transaction rolls the line bump back.
            return Err(LedgerError::InsufficientStock(name.to_string()));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Move one unit of `name` from the cart back to the shelf.
    ///
    /// A line at quantity one is deleted rather than left at zero.
    pub async fn decrease(pool: &SqlitePool, name: &str) -> Result<(), LedgerError> {
        let mut tx = pool.begin().await?;
        let item_id = Self::item_id(&mut tx, name).await?;

        let Some(line_quantity) =
            sqlx::query_scalar::<_, i64>("SELECT quantity FROM cart_lines WHERE item_id = ?")
                .bind(item_id)
                .fetch_optional(&mut *tx)
                .await?
        else {
            return Err(LedgerError::LineNotFound(name.to_string()));
        };

        if line_quantity <= 1 {
            sqlx::query("DELETE FROM cart_lines WHERE item_id = ?")
                .bind(item_id)
                .execute(&mut *tx)
                .await?;
        } else {
            sqlx::query("UPDATE cart_lines SET quantity = quantity - 1 WHERE item_id = ?")
                .bind(item_id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("UPDATE items SET quantity = quantity + 1 WHERE id = ?")
            .bind(item_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Return every unit of `name` in the cart to the shelf and drop the line.
    pub async fn remove(pool: &SqlitePool, name: &str) -> Result<(), LedgerError> {
        let mut tx = pool.begin().await?;
        let item_id = Self::item_id(&mut tx, name).await?;

        let Some(line_quantity) =
            sqlx::query_scalar::<_, i64>("SELECT quantity FROM cart_lines WHERE item_id = ?")
                .bind(item_id)
                .fetch_optional(&mut *tx)
                .await?
        else {
            return Err(LedgerError::LineNotFound(name.to_string()));
        };

        sqlx::query("UPDATE items SET quantity = quantity + ? WHERE id = ?")
            .bind(line_quantity)
            .bind(item_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM cart_lines WHERE item_id = ?")
            .bind(item_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// All cart lines joined with item name and discount, ordered by name.
    pub async fn lines(pool: &SqlitePool) -> Result<Vec<CartLineView>, sqlx::Error> {
        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM cart_lines c \
             JOIN items i ON i.id = c.item_id \
             ORDER BY i.name"
        );
        sqlx::query_as::<_, CartLineView>(&query)
            .fetch_all(pool)
            .await
    }

    /// Total number of units in the cart, for the navbar badge.
    pub async fn unit_count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(quantity), 0) FROM cart_lines")
            .fetch_one(pool)
            .await
    }

    /// Take the whole cart as a placed order: read the lines and clear
    /// the table in one transaction.
    ///
    /// The cleared units are sold, not returned to the shelf. Reading and
    /// clearing atomically means a line added mid-checkout is either in
    /// the order or still in the cart, never dropped.
    pub async fn drain(pool: &SqlitePool) -> Result<Vec<CartLineView>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {VIEW_COLUMNS} FROM cart_lines c \
             JOIN items i ON i.id = c.item_id \
             ORDER BY i.name"
        );
        let lines = sqlx::query_as::<_, CartLineView>(&query)
            .fetch_all(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM cart_lines")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(lines)
    }

    /// Resolve an item name to its ID inside an open transaction.
    async fn item_id(tx: &mut Transaction<'_, Sqlite>, name: &str) -> Result<DbId, LedgerError> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM items WHERE name = ?")
            .bind(name)
            .fetch_optional(&mut **tx)
            .await?
            .ok_or_else(|| LedgerError::ItemNotFound(name.to_string()))
    }
}
