use tracing::info;

use crate::{
    domain::common::{ZeusConfig, services::Service},
    infrastructure::{llm::GeminiLLMClient, storage::JsonFileStore},
};

pub type ZeusService = Service<GeminiLLMClient, JsonFileStore>;

pub async fn create_service(config: ZeusConfig) -> ZeusService {
    let llm_client = GeminiLLMClient::from(&config.llm);
    let local_store = JsonFileStore::new(&config.storage.data_dir);

    info!(
        model = %config.llm.gemini_model,
        data_dir = %config.storage.data_dir.display(),
        "Creating Zeus service"
    );

    Service::new(llm_client, local_store).await
}
