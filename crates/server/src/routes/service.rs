//! Routes for the id-only service rows. No payload, nothing to update.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::service::Service;
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

pub async fn list_services(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Service>>>, ApiError> {
    let items = Service::find_all(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn create_service(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Service>>, ApiError> {
    let item = Service::create(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if Service::delete(&state.db.pool, id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/services",
        Router::new()
            .route("/", get(list_services).post(create_service))
            .route("/{id}", axum::routing::delete(delete_service)),
    )
}
