pub mod models;
pub mod validation;

use std::str::FromStr;

use sqlx::{
    SqlitePool,
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::info;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Shared database handle. Opens (or creates) the SQLite database and runs
/// the embedded migrations before handing out the pool.
#[derive(Clone)]
pub struct DBService {
    pub pool: SqlitePool,
}

impl DBService {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        MIGRATOR.run(&pool).await?;
        info!(database_url, "database ready");

        Ok(Self { pool })
    }

    /// Wrap an existing pool. The caller is responsible for migrations.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
