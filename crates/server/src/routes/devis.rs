//! Routes for quote requests.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::devis::{CreateDevis, Devis};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

pub async fn list_devis(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Devis>>>, ApiError> {
    let items = Devis::find_all(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn get_devis(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<Devis>>, ApiError> {
    let item = Devis::find_by_id(&state.db.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn create_devis(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateDevis>,
) -> Result<ResponseJson<ApiResponse<Devis>>, ApiError> {
    payload.validate()?;
    let item = Devis::create(&state.db.pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn update_devis(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    axum::Json(payload): axum::Json<CreateDevis>,
) -> Result<ResponseJson<ApiResponse<Devis>>, ApiError> {
    payload.validate()?;
    let item = Devis::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn delete_devis(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if Devis::delete(&state.db.pool, id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/devis",
        Router::new()
            .route("/", get(list_devis).post(create_devis))
            .route(
                "/{id}",
                get(get_devis).put(update_devis).delete(delete_devis),
            ),
    )
}
