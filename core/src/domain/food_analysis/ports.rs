use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{entities::FoodAnalysisResponse, value_objects::ImagePayload},
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for food image analysis
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    fn analyze_food_image(
        &self,
        image: ImagePayload,
    ) -> impl Future<Output = Result<FoodAnalysisResponse, CoreError>> + Send;
}
