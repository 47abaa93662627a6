use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;

use crate::validation::{ValidationError, price_in_range, required_text};

/// A price quote request. `create_at` is assigned by the database at insert.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Devis {
    pub id: i64,
    pub firstname: String,
    pub create_at: DateTime<Utc>,
    pub price: f64,
    pub lastname: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct CreateDevis {
    pub firstname: String,
    pub price: f64,
    pub lastname: String,
    pub email: String,
}

impl CreateDevis {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("firstname", &self.firstname, 1, 40)?;
        required_text("lastname", &self.lastname, 1, 80)?;
        required_text("email", &self.email, 1, 50)?;
        price_in_range("price", self.price)?;
        Ok(())
    }
}

impl Devis {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, firstname, create_at, price, lastname, email
               FROM devis
              WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, firstname, create_at, price, lastname, email
               FROM devis
              ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreateDevis) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO devis (firstname, create_at, price, lastname, email)
             VALUES ($1, datetime('now', 'subsec'), $2, $3, $4)
             RETURNING id, firstname, create_at, price, lastname, email",
        )
        .bind(&data.firstname)
        .bind(data.price)
        .bind(&data.lastname)
        .bind(&data.email)
        .fetch_one(pool)
        .await
    }

    /// Full replace; the creation timestamp is preserved.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &CreateDevis,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE devis
                SET firstname = $2, price = $3, lastname = $4, email = $5
              WHERE id = $1
             RETURNING id, firstname, create_at, price, lastname, email",
        )
        .bind(id)
        .bind(&data.firstname)
        .bind(data.price)
        .bind(&data.lastname)
        .bind(&data.email)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM devis WHERE id = $1")
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

    fn sample() -> CreateDevis {
        CreateDevis {
            firstname: "Jean".to_string(),
            price: 149.90,
            lastname: "Martin".to_string(),
            email: "jean.martin@example.com".to_string(),
        }
    }

    #[test]
    fn price_must_fit_column_precision() {
        let mut data = sample();
        assert!(data.validate().is_ok());
        data.price = 1000.0;
        assert!(data.validate().is_err());
        data.price = -1.0;
        assert!(data.validate().is_err());
    }

    #[tokio::test]
    async fn create_assigns_timestamp() {
        let pool = test_pool().await;
        let devis = Devis::create(&pool, &sample()).await.unwrap();
        assert!(devis.create_at <= Utc::now());
        assert!((devis.price - 149.90).abs() < 1e-9);
    }

    #[tokio::test]
    async fn whole_number_price_reads_back() {
        let pool = test_pool().await;

        let mut data = sample();
        data.price = 150.0;
        let devis = Devis::create(&pool, &data).await.unwrap();

        // The column must keep REAL affinity: a fractionless price stored
        // as an integer would no longer decode into f64.
        let fetched = Devis::find_by_id(&pool, devis.id).await.unwrap().unwrap();
        assert_eq!(fetched.price, 150.0);
    }

    #[tokio::test]
    async fn list_is_id_ordered() {
        let pool = test_pool().await;

        let first = Devis::create(&pool, &sample()).await.unwrap();
        let second = Devis::create(&pool, &sample()).await.unwrap();

        let ids: Vec<i64> = Devis::find_all(&pool)
            .await
            .unwrap()
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn update_preserves_create_at() {
        let pool = test_pool().await;
        let devis = Devis::create(&pool, &sample()).await.unwrap();

        let mut changed = sample();
        changed.price = 99.0;
        let updated = Devis::update(&pool, devis.id, &changed)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.create_at, devis.create_at);
        assert!((updated.price - 99.0).abs() < 1e-9);
    }
}
