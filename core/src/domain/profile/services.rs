use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::LLMClient,
    profile::{
        entities::ProfileAnalysis, ports::ProfileService, prompts::profile_assessment_prompt,
        schema::get_profile_analysis_schema, validation::parse_profile_analysis,
        value_objects::AssessProfileInput,
    },
    storage::ports::LocalStore,
};

impl<LLM, ST> ProfileService for Service<LLM, ST>
where
    LLM: LLMClient,
    ST: LocalStore,
{
    #[instrument(skip(self, input), fields(gender = input.gender.as_str(), age = input.age))]
    async fn assess_profile(&self, input: AssessProfileInput) -> Result<ProfileAnalysis, CoreError> {
        let raw_response = self
            .llm_client
            .generate_with_text(
                profile_assessment_prompt(&input),
                get_profile_analysis_schema(),
            )
            .await?;

        let analysis = parse_profile_analysis(&raw_response)?;

        info!(health_status = %analysis.health_status, "Profile assessed");

        Ok(analysis)
    }
}
