//! Routes for service add-ons.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::prestation::{CreatePrestation, Prestation};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

pub async fn list_prestation(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Prestation>>>, ApiError> {
    let items = Prestation::find_all(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn get_prestation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<Prestation>>, ApiError> {
    let item = Prestation::find_by_id(&state.db.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn create_prestation(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreatePrestation>,
) -> Result<ResponseJson<ApiResponse<Prestation>>, ApiError> {
    payload.validate()?;
    let item = Prestation::create(&state.db.pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn update_prestation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    axum::Json(payload): axum::Json<CreatePrestation>,
) -> Result<ResponseJson<ApiResponse<Prestation>>, ApiError> {
    payload.validate()?;
    let item = Prestation::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn delete_prestation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if Prestation::delete(&state.db.pool, id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/prestation",
        Router::new()
            .route("/", get(list_prestation).post(create_prestation))
            .route(
                "/{id}",
                get(get_prestation)
                    .put(update_prestation)
                    .delete(delete_prestation),
            ),
    )
}
