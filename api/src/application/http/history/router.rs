use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    clear_history::{__path_clear_history, clear_history},
    get_history::{__path_get_history, get_history},
    select_history_entry::{__path_select_history_entry, select_history_entry},
    toggle_history::{__path_toggle_history, toggle_history},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_history, clear_history, toggle_history, select_history_entry))]
pub struct HistoryApiDoc;

pub fn history_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/history", state.args.server.root_path),
            get(get_history).delete(clear_history),
        )
        .route(
            &format!("{}/history/toggle", state.args.server.root_path),
            post(toggle_history),
        )
        .route(
            &format!("{}/history/{{entry_id}}/select", state.args.server.root_path),
            post(select_history_entry),
        )
}
