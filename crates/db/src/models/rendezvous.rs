use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;

use crate::validation::{ValidationError, required_text};

/// Bounds on the customer name, mirrored by the booking form.
pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 50;

/// A customer appointment booking.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Rendezvous {
    pub id: i64,
    pub name: String,
    pub prenom: String,
    pub mail: String,
    pub numero: i64,
    pub adresse: String,
    pub code: i64,
    pub ville: String,
    pub domaine: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct CreateRendezvous {
    pub name: String,
    pub prenom: String,
    pub mail: String,
    pub numero: i64,
    pub adresse: String,
    pub code: i64,
    pub ville: String,
    pub domaine: String,
}

impl CreateRendezvous {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("name", &self.name, NAME_MIN, NAME_MAX)?;
        required_text("prenom", &self.prenom, 1, 80)?;
        required_text("mail", &self.mail, 1, 80)?;
        required_text("adresse", &self.adresse, 1, 120)?;
        required_text("ville", &self.ville, 1, 120)?;
        required_text("domaine", &self.domaine, 1, 80)?;
        Ok(())
    }
}

impl Rendezvous {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, name, prenom, mail, numero, adresse, code, ville, domaine
               FROM rendezvous
              WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, name, prenom, mail, numero, adresse, code, ville, domaine
               FROM rendezvous
              ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreateRendezvous) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO rendezvous (name, prenom, mail, numero, adresse, code, ville, domaine)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, name, prenom, mail, numero, adresse, code, ville, domaine",
        )
        .bind(&data.name)
        .bind(&data.prenom)
        .bind(&data.mail)
        .bind(data.numero)
        .bind(&data.adresse)
        .bind(data.code)
        .bind(&data.ville)
        .bind(&data.domaine)
        .fetch_one(pool)
        .await
    }

    /// Full replace of every column.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &CreateRendezvous,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "UPDATE rendezvous
                SET name = $2, prenom = $3, mail = $4, numero = $5,
                    adresse = $6, code = $7, ville = $8, domaine = $9
              WHERE id = $1
             RETURNING id, name, prenom, mail, numero, adresse, code, ville, domaine",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.prenom)
        .bind(&data.mail)
        .bind(data.numero)
        .bind(&data.adresse)
        .bind(data.code)
        .bind(&data.ville)
        .bind(&data.domaine)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rendezvous WHERE id = $1")
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

    fn sample() -> CreateRendezvous {
        CreateRendezvous {
            name: "Dupont".to_string(),
            prenom: "Marie".to_string(),
            mail: "marie.dupont@example.com".to_string(),
            numero: 612345678,
            adresse: "12 rue des Lilas".to_string(),
            code: 75011,
            ville: "Paris".to_string(),
            domaine: "vidange".to_string(),
        }
    }

    #[test]
    fn name_rules() {
        let mut data = sample();
        assert!(data.validate().is_ok());
        data.name = "ab".to_string();
        assert!(data.validate().is_err());
        data.name = "   ".to_string();
        assert!(data.validate().is_err());
        data.name = "x".repeat(51);
        assert!(data.validate().is_err());
    }

    #[tokio::test]
    async fn crud_roundtrip() {
        let pool = test_pool().await;

        let created = Rendezvous::create(&pool, &sample()).await.unwrap();
        assert_eq!(created.name, "Dupont");

        let fetched = Rendezvous::find_by_id(&pool, created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.ville, "Paris");

        let mut changed = sample();
        changed.ville = "Lyon".to_string();
        let updated = Rendezvous::update(&pool, created.id, &changed)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.ville, "Lyon");

        assert_eq!(Rendezvous::delete(&pool, created.id).await.unwrap(), 1);
        assert!(
            Rendezvous::find_by_id(&pool, created.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn update_of_missing_row_is_none() {
        let pool = test_pool().await;
        assert!(
            Rendezvous::update(&pool, 42, &sample())
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(Rendezvous::delete(&pool, 42).await.unwrap(), 0);
    }
}
