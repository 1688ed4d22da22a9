use utoipa::OpenApi;

use crate::application::http::{
    food_analysis::router::FoodAnalysisApiDoc, health::HealthApiDoc,
    history::router::HistoryApiDoc, profile::router::ProfileApiDoc,
    server::config::__path_get_config, session::router::SessionApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Zeus API",
        description = "Photo-based calorie estimates and body-profile assessments"
    ),
    paths(get_config),
    nest(
        (path = "/profile", api = ProfileApiDoc),
        (path = "/analysis", api = FoodAnalysisApiDoc),
        (path = "/history", api = HistoryApiDoc),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document, including the session and health routes that do not
    /// live under a shared prefix.
    pub fn document() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(SessionApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
