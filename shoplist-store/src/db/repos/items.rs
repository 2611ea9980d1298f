//! Item repository
//!
//! The five operations of the shopping list service, each a single
//! round trip against the caller's pool.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::error::StoreResult;
use crate::models::{ItemPatch, NewItem, ShoppingListItem};

/// Shopping list repository
pub struct ItemRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all items in insertion order.
    pub async fn list(&self) -> StoreResult<Vec<ShoppingListItem>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, date_added, checked, category
            FROM shopping_list
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(item_from_row).collect())
    }

    /// Get a single item by id.
    ///
    /// Returns `None` when no row matches.
    pub async fn get(&self, id: i32) -> StoreResult<Option<ShoppingListItem>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, date_added, checked, category
            FROM shopping_list
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(item_from_row))
    }

    /// Insert a new item, returning the created row with its generated id.
    ///
    /// Omitted `date_added`/`checked` fall through to the column defaults.
    pub async fn create(&self, new_item: NewItem) -> StoreResult<ShoppingListItem> {
        let row = sqlx::query(
            r#"
            INSERT INTO shopping_list (name, price, date_added, checked, category)
            VALUES ($1, $2, COALESCE($3, NOW()), COALESCE($4, FALSE), $5)
            RETURNING id, name, price, date_added, checked, category
            "#,
        )
        .bind(&new_item.name)
        .bind(&new_item.price)
        .bind(new_item.date_added)
        .bind(new_item.checked)
        .bind(new_item.category.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(item_from_row(row))
    }

    /// Delete an item by id, returning the affected-count (0 or 1).
    pub async fn delete(&self, id: i32) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM shopping_list WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Partially update an item by id, returning the affected-count
    /// (0 or 1). `None` fields keep their stored value.
    pub async fn update(&self, id: i32, patch: ItemPatch) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE shopping_list
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                date_added = COALESCE($4, date_added),
                checked = COALESCE($5, checked),
                category = COALESCE($6, category)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.price)
        .bind(patch.date_added)
        .bind(patch.checked)
        .bind(patch.category.map(|c| c.as_str()))
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

fn item_from_row(row: PgRow) -> ShoppingListItem {
    ShoppingListItem {
        id: row.get("id"),
        name: row.get("name"),
        price: row.get("price"),
        date_added: row.get("date_added"),
        checked: row.get("checked"),
        category: row
            .get::<String, _>("category")
            .parse()
            .unwrap_or_default(),
    }
}
