//! Routes for the maintenance catalog.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::entretien::{CreateEntretien, Entretien};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

pub async fn list_entretien(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Entretien>>>, ApiError> {
    let items = Entretien::find_all(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn get_entretien(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<Entretien>>, ApiError> {
    let item = Entretien::find_by_id(&state.db.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn create_entretien(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateEntretien>,
) -> Result<ResponseJson<ApiResponse<Entretien>>, ApiError> {
    payload.validate()?;
    let item = Entretien::create(&state.db.pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn update_entretien(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    axum::Json(payload): axum::Json<CreateEntretien>,
) -> Result<ResponseJson<ApiResponse<Entretien>>, ApiError> {
    payload.validate()?;
    let item = Entretien::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn delete_entretien(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if Entretien::delete(&state.db.pool, id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/entretien",
        Router::new()
            .route("/", get(list_entretien).post(create_entretien))
            .route(
                "/{id}",
                get(get_entretien)
                    .put(update_entretien)
                    .delete(delete_entretien),
            ),
    )
}
