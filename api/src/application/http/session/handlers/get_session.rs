use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeus_core::domain::session::{entities::SessionSnapshot, ports::SessionService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetSessionResponse {
    pub data: SessionSnapshot,
}

#[utoipa::path(
    get,
    path = "/session",
    tag = "session",
    summary = "Get the session snapshot",
    description = "Returns the current view, the logged-in user, the image being analyzed with its result or error, the history and the in-flight flags.",
    responses(
        (status = 200, body = GetSessionResponse)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
) -> Result<Response<GetSessionResponse>, ApiError> {
    let snapshot = state.service.snapshot().map_err(ApiError::from)?;

    Ok(Response::OK(GetSessionResponse { data: snapshot }))
}
