use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetConfigResponse {
    pub app_version: String,
    pub gemini_model: String,
    pub root_path: String,
    pub metrics_enabled: bool,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get runtime configuration",
    description = "Returns the non-secret settings the server was started with.",
    responses(
        (status = 200, body = GetConfigResponse)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Response<GetConfigResponse> {
    Response::OK(GetConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        gemini_model: state.args.llm.gemini_model.clone(),
        root_path: state.args.server.root_path.clone(),
        metrics_enabled: state.args.server.metrics_enabled,
    })
}
