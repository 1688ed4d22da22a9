use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    analyze_food_image::{__path_analyze_food_image, MAX_IMAGE_SIZE, analyze_food_image},
    get_analysis::{__path_get_analysis, get_analysis},
    reset_analysis::{__path_reset_analysis, reset_analysis},
};
use crate::application::http::server::app_state::AppState;

// Room for the multipart envelope and the base64 expansion of a data URL.
const MAX_UPLOAD_BODY: usize = MAX_IMAGE_SIZE / 3 * 4 + 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_food_image, get_analysis, reset_analysis))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analysis/image", state.args.server.root_path),
            post(analyze_food_image).layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY)),
        )
        .route(
            &format!("{}/analysis", state.args.server.root_path),
            get(get_analysis).delete(reset_analysis),
        )
}
