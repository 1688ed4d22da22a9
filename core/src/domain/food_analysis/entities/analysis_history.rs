use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::generate_uuid_v7, food_analysis::entities::FoodAnalysisResponse};

/// One persisted past analysis together with the image it was made from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisHistory {
    pub id: String,
    /// Creation instant in milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Data URL of the analyzed image.
    pub image_url: String,
    pub data: FoodAnalysisResponse,
}

impl AnalysisHistory {
    pub fn new(image_url: String, data: FoodAnalysisResponse) -> Self {
        Self {
            id: generate_uuid_v7().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            image_url,
            data,
        }
    }
}
