//! Localized literals consumed by the forms at startup.

use std::collections::HashMap;

use axum::{
    Router,
    extract::Query,
    response::Json as ResponseJson,
    routing::get,
};
use serde::Deserialize;
use services::services::i18n::{DEFAULT_LANG, I18nService};
use utils::response::ApiResponse;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct LiteralsQuery {
    pub lang: Option<String>,
    pub context: Option<String>,
}

/// GET /api/literals?lang=&context=
pub async fn get_literals(
    Query(query): Query<LiteralsQuery>,
) -> Result<ResponseJson<ApiResponse<HashMap<String, String>>>, ApiError> {
    let lang = query.lang.as_deref().unwrap_or(DEFAULT_LANG);
    let literals = I18nService::literals(lang, query.context.as_deref())?;
    Ok(ResponseJson(ApiResponse::success(literals)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/literals", get(get_literals))
}
