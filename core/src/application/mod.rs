use std::path::Path;

use tracing::info;

use crate::{
    domain::common::{HealthScanConfig, services::Service},
    infrastructure::{
        llm::{GeminiProductNameExtractor, OpenAIAgentRunner},
        scan::JsonScanRepository,
        store::JsonFileStore,
        user::JsonUserRepository,
    },
};

pub type HealthScanService = Service<
    JsonUserRepository,
    JsonScanRepository,
    OpenAIAgentRunner,
    GeminiProductNameExtractor,
>;

pub async fn create_service(config: HealthScanConfig) -> Result<HealthScanService, anyhow::Error> {
    let data_dir = Path::new(&config.storage.data_dir);
    tokio::fs::create_dir_all(data_dir).await?;

    info!("Using data directory {}", data_dir.display());

    let user_repository = JsonUserRepository::new(JsonFileStore::new(data_dir.join("users.json")));
    let scan_repository = JsonScanRepository::new(JsonFileStore::new(data_dir.join("scans.json")));

    let agent_runner = OpenAIAgentRunner::new(&config.llm);
    let name_extractor = GeminiProductNameExtractor::new(&config.vision);

    Ok(Service::new(
        user_repository,
        scan_repository,
        agent_runner,
        name_extractor,
    ))
}
