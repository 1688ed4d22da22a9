use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    food_analysis::{
        entities::{AnalysisHistory, FoodAnalysisResponse},
        insights::AnalysisInsights,
    },
    profile::{entities::User, value_objects::WeightStatus},
};

pub const ANALYSIS_FAILED_MESSAGE: &str = "A conexão com o Olimpo falhou. Tente novamente.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    Camera,
    Gallery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionView {
    LoggedOut,
    Idle,
    Capturing,
    History,
}

/// The image currently on screen and what came back for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CaptureState {
    pub image_url: Option<String>,
    pub source: Option<ImageSource>,
    pub result: Option<FoodAnalysisResponse>,
    pub error: Option<String>,
}

impl CaptureState {
    pub fn is_empty(&self) -> bool {
        self.image_url.is_none() && self.result.is_none() && self.error.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub history: Vec<AnalysisHistory>,
    pub show_history: bool,
    pub capture: CaptureState,
    pub profile_error: Option<String>,
}

impl SessionState {
    pub fn restored(user: Option<User>, history: Vec<AnalysisHistory>) -> Self {
        Self {
            user,
            history,
            ..Default::default()
        }
    }

    pub fn view(&self) -> SessionView {
        if self.user.is_none() {
            SessionView::LoggedOut
        } else if self.show_history {
            SessionView::History
        } else if self.capture.is_empty() {
            SessionView::Idle
        } else {
            SessionView::Capturing
        }
    }
}

/// Read-only picture of the session handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionSnapshot {
    pub view: SessionView,
    pub user: Option<User>,
    pub weight_status: Option<WeightStatus>,
    pub capture: CaptureState,
    pub insights: Option<AnalysisInsights>,
    pub analyzing: bool,
    pub profile_pending: bool,
    pub profile_error: Option<String>,
    pub history: Vec<AnalysisHistory>,
}
