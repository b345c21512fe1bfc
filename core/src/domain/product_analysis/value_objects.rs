use crate::domain::product_analysis::entities::WebSearchResult;

#[derive(Debug, Clone)]
pub struct AnalyzeProductInput {
    pub image_data: Vec<u8>,
    pub mime_type: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ScoreIngredientsInput {
    pub ingredients: WebSearchResult,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecommendAlternativesInput {
    pub product_name: String,
    pub overall_score: f64,
}

#[derive(Debug, Clone)]
pub struct UpdatePreferencesFromTextInput {
    pub user_id: String,
    pub text: String,
}

/// Stage identity carried on every pipeline log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    ImageExtraction,
    WebSearch,
    Scoring,
    Recommendation,
    PreferenceUpdate,
}

impl PipelineStage {
    pub fn as_str(&self) -> &str {
        match self {
            PipelineStage::ImageExtraction => "image_extraction",
            PipelineStage::WebSearch => "web_search",
            PipelineStage::Scoring => "scoring",
            PipelineStage::Recommendation => "recommendation",
            PipelineStage::PreferenceUpdate => "preference_update",
        }
    }
}
