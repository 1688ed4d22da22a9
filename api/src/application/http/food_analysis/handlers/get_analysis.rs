use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeus_core::domain::{
    food_analysis::insights::AnalysisInsights,
    session::{entities::CaptureState, ports::SessionService},
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetAnalysisResponse {
    pub data: CaptureState,
    pub insights: Option<AnalysisInsights>,
    pub analyzing: bool,
}

#[utoipa::path(
    get,
    path = "",
    tag = "food-analysis",
    summary = "Get the current analysis",
    description = "Returns the image on screen with its result or user-facing error, plus the derived calorie and macro insights.",
    responses(
        (status = 200, body = GetAnalysisResponse)
    ),
)]
pub async fn get_analysis(
    State(state): State<AppState>,
) -> Result<Response<GetAnalysisResponse>, ApiError> {
    let snapshot = state.service.snapshot().map_err(ApiError::from)?;

    Ok(Response::OK(GetAnalysisResponse {
        data: snapshot.capture,
        insights: snapshot.insights,
        analyzing: snapshot.analyzing,
    }))
}
