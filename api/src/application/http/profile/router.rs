use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_profile::{__path_get_profile, get_profile},
    submit_profile::{__path_submit_profile, submit_profile},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(submit_profile, get_profile))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/profile", state.args.server.root_path),
        get(get_profile).post(submit_profile),
    )
}
