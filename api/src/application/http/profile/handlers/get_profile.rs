use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeus_core::domain::{
    profile::{entities::User, value_objects::WeightStatus},
    session::ports::SessionService,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetProfileResponse {
    pub data: User,
    pub weight_status: Option<WeightStatus>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "profile",
    summary = "Get the current user",
    responses(
        (status = 200, body = GetProfileResponse),
        (status = 404, description = "Nobody is logged in")
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let user = state
        .service
        .current_user()
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("No user is logged in".to_string()))?;

    let weight_status = user
        .analysis
        .as_ref()
        .map(|analysis| WeightStatus::compute(user.weight, &analysis.ideal_weight_range));

    Ok(Response::OK(GetProfileResponse {
        data: user,
        weight_status,
    }))
}
