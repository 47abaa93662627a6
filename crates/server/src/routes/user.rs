//! Routes for back-office accounts. Duplicate emails come back as 409.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::user::{CreateUser, User};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<User>>>, ApiError> {
    let items = User::find_all(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<User>>, ApiError> {
    let item = User::find_by_id(&state.db.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn create_user(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateUser>,
) -> Result<ResponseJson<ApiResponse<User>>, ApiError> {
    payload.validate()?;
    let item = User::create(&state.db.pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    axum::Json(payload): axum::Json<CreateUser>,
) -> Result<ResponseJson<ApiResponse<User>>, ApiError> {
    payload.validate()?;
    let item = User::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if User::delete(&state.db.pool, id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/users",
        Router::new()
            .route("/", get(list_users).post(create_user))
            .route("/{id}", get(get_user).put(update_user).delete(delete_user)),
    )
}
