use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeus_core::domain::session::ports::SessionService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClearHistoryResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "",
    tag = "history",
    summary = "Clear the history",
    description = "Empties the persisted history. Clearing an empty history succeeds.",
    responses(
        (status = 200, body = ClearHistoryResponse)
    ),
)]
pub async fn clear_history(
    State(state): State<AppState>,
) -> Result<Response<ClearHistoryResponse>, ApiError> {
    state.service.clear_history().await.map_err(ApiError::from)?;

    Ok(Response::OK(ClearHistoryResponse {
        message: "History cleared".to_string(),
    }))
}
