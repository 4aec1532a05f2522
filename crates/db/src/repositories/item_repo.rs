//! Repository for the `items` table.

use diary_core::item::ItemFields;
use diary_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::Item;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, image, created_at, updated_at";

/// Provides CRUD operations for diary items.
///
/// Every call is a single statement; nothing is cached between calls.
pub struct ItemRepo;

impl ItemRepo {
    /// Count all items.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// List all items, most recently created first.
    ///
    /// Ties on `created_at` fall back to the higher id so rows inserted in
    /// the same instant still list newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Find an item by id. Absence is `Ok(None)`, not an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new item, returning the created row.
    ///
    /// `created_at` and `updated_at` come from the same `NOW()` and are equal.
    pub async fn create(pool: &PgPool, input: &ItemFields) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (title, description, image)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Replace the mutable fields of an item and refresh `updated_at`.
    ///
    /// `updated_at` always moves forward, even when two writes land within
    /// the same clock tick. `id` and `created_at` are never touched.
    ///
    /// Fails with [`sqlx::Error::RowNotFound`] if no row has the given `id`.
    pub async fn update(pool: &PgPool, id: DbId, input: &ItemFields) -> Result<Item, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                title = $2,
                description = $3,
                image = $4,
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete an item.
    ///
    /// Fails with [`sqlx::Error::RowNotFound`] if no row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }
        Ok(())
    }
}
