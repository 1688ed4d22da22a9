use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeus_core::domain::session::ports::SessionService;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "session",
    summary = "Log out",
    description = "Forgets the current user. The analysis history is kept.",
    responses(
        (status = 200, body = LogoutResponse)
    ),
)]
pub async fn logout(State(state): State<AppState>) -> Result<Response<LogoutResponse>, ApiError> {
    state.service.logout().await.map_err(ApiError::from)?;

    Ok(Response::OK(LogoutResponse {
        message: "Logged out".to_string(),
    }))
}
