use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeus_core::domain::session::ports::SessionService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ToggleHistoryResponse {
    pub show_history: bool,
}

#[utoipa::path(
    post,
    path = "/toggle",
    tag = "history",
    summary = "Show or hide the history view",
    responses(
        (status = 200, body = ToggleHistoryResponse),
        (status = 401, description = "Nobody is logged in")
    ),
)]
pub async fn toggle_history(
    State(state): State<AppState>,
) -> Result<Response<ToggleHistoryResponse>, ApiError> {
    let show_history = state.service.toggle_history().map_err(ApiError::from)?;

    Ok(Response::OK(ToggleHistoryResponse { show_history }))
}
