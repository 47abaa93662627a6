use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;

/// Placeholder service row the add-on records hang off. Carries no data of
/// its own, so there is nothing to update.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Service {
    pub id: i64,
}

impl Service {
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT id FROM service ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn create(pool: &SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>("INSERT INTO service DEFAULT VALUES RETURNING id")
            .fetch_one(pool)
            .await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM service WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
