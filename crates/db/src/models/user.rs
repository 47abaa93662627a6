use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;

use crate::validation::{ValidationError, required_text};

/// A back-office account. The only entity with a uniqueness constraint:
/// inserting a second row with the same email fails at the database level.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// JSON-serialized role list, see [`User::parsed_roles`].
    pub roles: String,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub password: String,
    pub firstname: String,
    pub lastname: String,
    pub birthday: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateUser {
    pub email: String,
    pub roles: Vec<String>,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
    pub birthday: NaiveDate,
}

impl CreateUser {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("email", &self.email, 1, 180)?;
        required_text("password", &self.password, 1, 255)?;
        required_text("firstname", &self.firstname, 1, 40)?;
        required_text("lastname", &self.lastname, 1, 40)?;
        Ok(())
    }
}

fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

impl User {
    /// Parse the roles JSON column back into a list.
    pub fn parsed_roles(&self) -> Vec<String> {
        serde_json::from_str(&self.roles).unwrap_or_default()
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, email, roles, password, firstname, lastname, birthday
               FROM user
              WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, email, roles, password, firstname, lastname, birthday
               FROM user
              WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT id, email, roles, password, firstname, lastname, birthday
               FROM user
              ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a new account. The plain password is hashed before it is
    /// stored; a duplicate email surfaces as a unique-violation error.
    pub async fn create(pool: &SqlitePool, data: &CreateUser) -> Result<Self, sqlx::Error> {
        let roles =
            serde_json::to_string(&data.roles).map_err(|e| sqlx::Error::Protocol(e.to_string()))?;
        sqlx::query_as::<_, Self>(
            "INSERT INTO user (email, roles, password, firstname, lastname, birthday)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, email, roles, password, firstname, lastname, birthday",
        )
        .bind(&data.email)
        .bind(roles)
        .bind(hash_password(&data.password))
        .bind(&data.firstname)
        .bind(&data.lastname)
        .bind(data.birthday)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &CreateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let roles =
            serde_json::to_string(&data.roles).map_err(|e| sqlx::Error::Protocol(e.to_string()))?;
        sqlx::query_as::<_, Self>(
            "UPDATE user
                SET email = $2, roles = $3, password = $4, firstname = $5,
                    lastname = $6, birthday = $7
              WHERE id = $1
             RETURNING id, email, roles, password, firstname, lastname, birthday",
        )
        .bind(id)
        .bind(&data.email)
        .bind(roles)
        .bind(hash_password(&data.password))
        .bind(&data.firstname)
        .bind(&data.lastname)
        .bind(data.birthday)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
