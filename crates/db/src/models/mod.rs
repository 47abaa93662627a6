pub mod calendar;
pub mod devis;
pub mod entretien;
pub mod pneumatiques;
pub mod prestation;
pub mod rendezvous;
pub mod service;
pub mod user;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    // A single connection keeps the in-memory schema alive for the whole test.
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    crate::MIGRATOR.run(&pool).await.unwrap();
    pool
}
