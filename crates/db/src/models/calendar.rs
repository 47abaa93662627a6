use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;

use crate::validation::{ValidationError, ValidationErrorKind, required_text};

/// A booking slot on the workshop calendar.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Calendar {
    pub id: i64,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub description: String,
    pub all_day: bool,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateCalendar {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub description: String,
    pub all_day: bool,
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
}

impl CreateCalendar {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_text("title", &self.title, 1, 100)?;
        required_text("background_color", &self.background_color, 1, 7)?;
        required_text("border_color", &self.border_color, 1, 7)?;
        required_text("text_color", &self.text_color, 1, 7)?;
        // An event must not end before it starts.
        if self.end < self.start {
            return Err(ValidationError {
                field: "end",
                kind: ValidationErrorKind::EndBeforeStart,
            });
        }
        Ok(())
    }
}

impl Calendar {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, title, start, "end", description, all_day,
                      background_color, border_color, text_color
                 FROM calendar
                WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"SELECT id, title, start, "end", description, all_day,
                      background_color, border_color, text_color
                 FROM calendar
                ORDER BY start"#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreateCalendar) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO calendar
                   (title, start, "end", description, all_day,
                    background_color, border_color, text_color)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING id, title, start, "end", description, all_day,
                         background_color, border_color, text_color"#,
        )
        .bind(&data.title)
        .bind(data.start)
        .bind(data.end)
        .bind(&data.description)
        .bind(data.all_day)
        .bind(&data.background_color)
        .bind(&data.border_color)
        .bind(&data.text_color)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &CreateCalendar,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE calendar
                  SET title = $2, start = $3, "end" = $4, description = $5,
                      all_day = $6, background_color = $7, border_color = $8,
                      text_color = $9
                WHERE id = $1
                RETURNING id, title, start, "end", description, all_day,
                          background_color, border_color, text_color"#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(data.start)
        .bind(data.end)
        .bind(&data.description)
        .bind(data.all_day)
        .bind(&data.background_color)
        .bind(&data.border_color)
        .bind(&data.text_color)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM calendar WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
