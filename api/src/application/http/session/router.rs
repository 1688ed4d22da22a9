use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_session::{__path_get_session, get_session},
    logout::{__path_logout, logout},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_session, logout))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/session", state.args.server.root_path),
            get(get_session),
        )
        .route(
            &format!("{}/logout", state.args.server.root_path),
            post(logout),
        )
}
