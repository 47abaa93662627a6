//! Routes for appointment bookings.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::rendezvous::{CreateRendezvous, Rendezvous};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

/// GET /api/rendezvous
pub async fn list_rendezvous(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Rendezvous>>>, ApiError> {
    let items = Rendezvous::find_all(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

/// GET /api/rendezvous/{id}
pub async fn get_rendezvous(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<Rendezvous>>, ApiError> {
    let item = Rendezvous::find_by_id(&state.db.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

/// POST /api/rendezvous
pub async fn create_rendezvous(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateRendezvous>,
) -> Result<ResponseJson<ApiResponse<Rendezvous>>, ApiError> {
    payload.validate()?;
    let item = Rendezvous::create(&state.db.pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

/// PUT /api/rendezvous/{id} (full replace)
pub async fn update_rendezvous(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    axum::Json(payload): axum::Json<CreateRendezvous>,
) -> Result<ResponseJson<ApiResponse<Rendezvous>>, ApiError> {
    payload.validate()?;
    let item = Rendezvous::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

/// DELETE /api/rendezvous/{id}
pub async fn delete_rendezvous(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    let deleted = Rendezvous::delete(&state.db.pool, id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/rendezvous",
        Router::new()
            .route("/", get(list_rendezvous).post(create_rendezvous))
            .route(
                "/{id}",
                get(get_rendezvous)
                    .put(update_rendezvous)
                    .delete(delete_rendezvous),
            ),
    )
}
