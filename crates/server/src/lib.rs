pub mod error;
pub mod routes;

use axum::Router;
use db::DBService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: DBService,
}

/// Assemble the full application router. CORS is permissive: the SPA is
/// served from a different origin in development.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
