use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeus_core::domain::session::ports::SessionService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResetAnalysisResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "",
    tag = "food-analysis",
    summary = "Reset the current analysis",
    description = "Discards the current image, result and error. An analysis still in flight is not cancelled.",
    responses(
        (status = 200, body = ResetAnalysisResponse)
    ),
)]
pub async fn reset_analysis(
    State(state): State<AppState>,
) -> Result<Response<ResetAnalysisResponse>, ApiError> {
    state.service.reset_analysis().map_err(ApiError::from)?;

    Ok(Response::OK(ResetAnalysisResponse {
        message: "Analysis reset".to_string(),
    }))
}
