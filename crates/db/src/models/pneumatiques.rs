use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;

use crate::validation::{ValidationError, price_in_range, required_text};

/// A tire offering in the service catalog.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Pneumatiques {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct CreatePneumatiques {
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
}

impl CreatePneumatiques {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("title", &self.title, 1, 190)?;
        required_text("description", &self.description, 1, 10_000)?;
        if let Some(price) = self.price {
            price_in_range("price", price)?;
        }
        Ok(())
    }
}

impl Pneumatiques {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, title, description, price FROM pneumatiques WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, title, description, price FROM pneumatiques ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreatePneumatiques) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO pneumatiques (title, description, price)
             VALUES ($1, $2, $3)
             RETURNING id, title, description, price",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.price)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &CreatePneumatiques,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE pneumatiques
                SET title = $2, description = $3, price = $4
              WHERE id = $1
             RETURNING id, title, description, price",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.price)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pneumatiques WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
