use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;

use crate::validation::{ValidationError, price_in_range, required_text};

/// A maintenance offering in the service catalog. Price is optional for
/// entries quoted on request.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Entretien {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct CreateEntretien {
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
}

impl CreateEntretien {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("title", &self.title, 1, 190)?;
        required_text("description", &self.description, 1, 10_000)?;
        if let Some(price) = self.price {
            price_in_range("price", price)?;
        }
        Ok(())
    }
}

impl Entretien {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, title, description, price FROM entretien WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT id, title, description, price FROM entretien ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreateEntretien) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO entretien (title, description, price)
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
        data: &CreateEntretien,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE entretien
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
        let result = sqlx::query("DELETE FROM entretien WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_pool;

    #[tokio::test]
    async fn nullable_price_roundtrips() {
        let pool = test_pool().await;

        let quoted = Entretien::create(
            &pool,
            &CreateEntretien {
                title: "Revision complete".to_string(),
                description: "Controle des 50 points constructeur".to_string(),
                price: Some(189.0),
            },
        )
        .await
        .unwrap();
        assert_eq!(quoted.price, Some(189.0));

        let on_request = Entretien::create(
            &pool,
            &CreateEntretien {
                title: "Diagnostic electronique".to_string(),
                description: "Sur devis selon le vehicule".to_string(),
                price: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(on_request.price, None);

        assert_eq!(Entretien::find_all(&pool).await.unwrap().len(), 2);
    }
}
