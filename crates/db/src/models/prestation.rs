use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;

use crate::validation::{ValidationError, optional_text};

/// A sparse record of named service add-ons. Every field is optional; an
/// absent field means the add-on is not offered.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Prestation {
    pub id: i64,
    pub montage: Option<String>,
    pub depannage: Option<String>,
    pub equilibre: Option<String>,
    pub valve: Option<String>,
    pub plaquette: Option<String>,
    pub disque: Option<String>,
    pub vidange: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct CreatePrestation {
    pub montage: Option<String>,
    pub depannage: Option<String>,
    pub equilibre: Option<String>,
    pub valve: Option<String>,
    pub plaquette: Option<String>,
    pub disque: Option<String>,
    pub vidange: Option<String>,
}

impl CreatePrestation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        optional_text("montage", self.montage.as_deref(), 40)?;
        optional_text("depannage", self.depannage.as_deref(), 40)?;
        optional_text("equilibre", self.equilibre.as_deref(), 40)?;
        optional_text("valve", self.valve.as_deref(), 40)?;
        optional_text("plaquette", self.plaquette.as_deref(), 40)?;
        optional_text("disque", self.disque.as_deref(), 40)?;
        optional_text("vidange", self.vidange.as_deref(), 50)?;
        Ok(())
    }
}

impl Prestation {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, montage, depannage, equilibre, valve, plaquette, disque, vidange
               FROM prestation
              WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, montage, depannage, equilibre, valve, plaquette, disque, vidange
               FROM prestation
              ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreatePrestation) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO prestation (montage, depannage, equilibre, valve, plaquette, disque, vidange)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, montage, depannage, equilibre, valve, plaquette, disque, vidange",
        )
        .bind(&data.montage)
        .bind(&data.depannage)
        .bind(&data.equilibre)
        .bind(&data.valve)
        .bind(&data.plaquette)
        .bind(&data.disque)
        .bind(&data.vidange)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &CreatePrestation,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE prestation
                SET montage = $2, depannage = $3, equilibre = $4, valve = $5,
                    plaquette = $6, disque = $7, vidange = $8
              WHERE id = $1
             RETURNING id, montage, depannage, equilibre, valve, plaquette, disque, vidange",
        )
        .bind(id)
        .bind(&data.montage)
        .bind(&data.depannage)
        .bind(&data.equilibre)
        .bind(&data.valve)
        .bind(&data.plaquette)
        .bind(&data.disque)
        .bind(&data.vidange)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prestation WHERE id = $1")
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
    async fn sparse_rows_are_accepted() {
        let pool = test_pool().await;

        let data = CreatePrestation {
            montage: Some("offert des 4 pneus".to_string()),
            vidange: Some("huile 5W30 incluse".to_string()),
            ..Default::default()
        };
        assert!(data.validate().is_ok());

        let row = Prestation::create(&pool, &data).await.unwrap();
        assert_eq!(row.montage.as_deref(), Some("offert des 4 pneus"));
        assert!(row.depannage.is_none());
    }
}
