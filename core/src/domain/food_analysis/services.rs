use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::FoodAnalysisResponse,
        ports::{FoodAnalysisService, LLMClient},
        prompts::food_analysis_prompt,
        schema::get_food_analysis_schema,
        validation::parse_food_analysis,
        value_objects::ImagePayload,
    },
    storage::ports::LocalStore,
};

impl<LLM, ST> FoodAnalysisService for Service<LLM, ST>
where
    LLM: LLMClient,
    ST: LocalStore,
{
    #[instrument(skip(self, image), fields(mime_type = %image.mime_type))]
    async fn analyze_food_image(
        &self,
        image: ImagePayload,
    ) -> Result<FoodAnalysisResponse, CoreError> {
        let raw_response = self
            .llm_client
            .generate_with_image(food_analysis_prompt(), image, get_food_analysis_schema())
            .await?;

        let analysis = parse_food_analysis(&raw_response)?;

        info!(
            meal_type = analysis.meal_type.as_str(),
            total_calories = analysis.total_calories,
            items = analysis.items.len(),
            "Food image analyzed"
        );

        Ok(analysis)
    }
}
