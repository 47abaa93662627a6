//! Routes for the tire catalog.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::pneumatiques::{CreatePneumatiques, Pneumatiques};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

pub async fn list_pneumatiques(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Pneumatiques>>>, ApiError> {
    let items = Pneumatiques::find_all(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn get_pneumatiques(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<Pneumatiques>>, ApiError> {
    let item = Pneumatiques::find_by_id(&state.db.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn create_pneumatiques(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreatePneumatiques>,
) -> Result<ResponseJson<ApiResponse<Pneumatiques>>, ApiError> {
    payload.validate()?;
    let item = Pneumatiques::create(&state.db.pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn update_pneumatiques(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    axum::Json(payload): axum::Json<CreatePneumatiques>,
) -> Result<ResponseJson<ApiResponse<Pneumatiques>>, ApiError> {
    payload.validate()?;
    let item = Pneumatiques::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn delete_pneumatiques(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if Pneumatiques::delete(&state.db.pool, id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/pneumatiques",
        Router::new()
            .route("/", get(list_pneumatiques).post(create_pneumatiques))
            .route(
                "/{id}",
                get(get_pneumatiques)
                    .put(update_pneumatiques)
                    .delete(delete_pneumatiques),
            ),
    )
}
