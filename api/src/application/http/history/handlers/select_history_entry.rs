use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeus_core::domain::{food_analysis::entities::AnalysisHistory, session::ports::SessionService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SelectHistoryEntryResponse {
    pub data: AnalysisHistory,
}

#[utoipa::path(
    post,
    path = "/{entry_id}/select",
    tag = "history",
    summary = "Reopen a past analysis",
    description = "Puts the entry's image and result back on screen and leaves the history view.",
    responses(
        (status = 200, body = SelectHistoryEntryResponse),
        (status = 401, description = "Nobody is logged in"),
        (status = 404, description = "No entry with this id")
    ),
    params(
        ("entry_id" = String, Path, description = "History entry id"),
    ),
)]
pub async fn select_history_entry(
    Path(entry_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<SelectHistoryEntryResponse>, ApiError> {
    let entry = state
        .service
        .select_history_entry(entry_id)
        .map_err(ApiError::from)?;

    Ok(Response::OK(SelectHistoryEntryResponse { data: entry }))
}
