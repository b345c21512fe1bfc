use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct HealthScanConfig {
    pub llm: LLMConfig,
    pub vision: VisionConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub web_search_context_size: String,
}

#[derive(Clone, Debug)]
pub struct VisionConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub image_mime_type: String,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
