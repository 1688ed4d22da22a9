use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeus_core::domain::{food_analysis::entities::AnalysisHistory, session::ports::SessionService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetHistoryResponse {
    /// Newest first, at most ten entries.
    pub data: Vec<AnalysisHistory>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "List past analyses",
    responses(
        (status = 200, body = GetHistoryResponse)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    let history = state.service.history().map_err(ApiError::from)?;

    Ok(Response::OK(GetHistoryResponse { data: history }))
}
