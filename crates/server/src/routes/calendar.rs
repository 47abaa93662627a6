//! Routes for the booking calendar.

use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use db::models::calendar::{Calendar, CreateCalendar};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

pub async fn list_calendar(
    State(state): State<AppState>,
) -> Result<ResponseJson<ApiResponse<Vec<Calendar>>>, ApiError> {
    let items = Calendar::find_all(&state.db.pool).await?;
    Ok(ResponseJson(ApiResponse::success(items)))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<Calendar>>, ApiError> {
    let item = Calendar::find_by_id(&state.db.pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn create_calendar(
    State(state): State<AppState>,
    axum::Json(payload): axum::Json<CreateCalendar>,
) -> Result<ResponseJson<ApiResponse<Calendar>>, ApiError> {
    payload.validate()?;
    let item = Calendar::create(&state.db.pool, &payload).await?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn update_calendar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    axum::Json(payload): axum::Json<CreateCalendar>,
) -> Result<ResponseJson<ApiResponse<Calendar>>, ApiError> {
    payload.validate()?;
    let item = Calendar::update(&state.db.pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(ResponseJson(ApiResponse::success(item)))
}

pub async fn delete_calendar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ResponseJson<ApiResponse<()>>, ApiError> {
    if Calendar::delete(&state.db.pool, id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(ResponseJson(ApiResponse::success(())))
}

pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/calendar",
        Router::new()
            .route("/", get(list_calendar).post(create_calendar))
            .route(
                "/{id}",
                get(get_calendar)
                    .put(update_calendar)
                    .delete(delete_calendar),
            ),
    )
}
