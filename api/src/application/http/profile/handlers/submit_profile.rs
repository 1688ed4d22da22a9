use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeus_core::domain::{
    profile::entities::User,
    session::{ports::SessionService, value_objects::SubmitProfileInput},
};

use crate::application::http::{
    profile::validators::SubmitProfileValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubmitProfileResponse {
    pub data: User,
}

#[utoipa::path(
    post,
    path = "",
    tag = "profile",
    summary = "Submit the body profile",
    description = "Assesses the profile with the inference service, then logs the user in and persists it. Rejected with 409 while a previous submission is pending.",
    responses(
        (status = 201, body = SubmitProfileResponse),
        (status = 409, description = "Assessment already in progress"),
        (status = 502, description = "Inference service failed or answered malformed JSON")
    ),
    request_body = SubmitProfileValidator
)]
pub async fn submit_profile(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SubmitProfileValidator>,
) -> Result<Response<SubmitProfileResponse>, ApiError> {
    let user = state
        .service
        .submit_profile(SubmitProfileInput {
            email: payload.email,
            name: payload.name,
            gender: payload.gender,
            age: payload.age,
            weight: payload.weight,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SubmitProfileResponse { data: user }))
}
