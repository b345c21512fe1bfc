use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product_analysis::{
        agents::AgentDefinition,
        entities::{
            PreferenceConfirmation, ProductAnalysis, RecommendationResult, ResearchedProduct,
            ScoringResult,
        },
        value_objects::{
            AnalyzeProductInput, RecommendAlternativesInput, ScoreIngredientsInput,
            UpdatePreferencesFromTextInput,
        },
    },
};

/// Raw outcome of one agent invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRun {
    /// Final message text, expected to be JSON matching the agent's output schema.
    pub output: String,
    pub tool_calls: u32,
}

/// Runtime able to execute an agent definition against an input
#[cfg_attr(test, mockall::automock)]
pub trait AgentRunner: Send + Sync {
    fn run(
        &self,
        agent: AgentDefinition,
        input: String,
    ) -> impl Future<Output = Result<AgentRun, CoreError>> + Send;
}

/// Turns a product photo into a cleaned product name. An empty string means
/// no product was recognized.
#[cfg_attr(test, mockall::automock)]
pub trait ProductNameExtractor: Send + Sync {
    fn extract_product_name(
        &self,
        image_data: Vec<u8>,
        mime_type: Option<String>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the product analysis pipeline
#[cfg_attr(test, mockall::automock)]
pub trait ProductAnalysisService: Send + Sync {
    fn extract_and_research(
        &self,
        input: AnalyzeProductInput,
    ) -> impl Future<Output = Result<ResearchedProduct, CoreError>> + Send;

    fn score_ingredients(
        &self,
        input: ScoreIngredientsInput,
    ) -> impl Future<Output = Result<ScoringResult, CoreError>> + Send;

    fn recommend_alternatives(
        &self,
        input: RecommendAlternativesInput,
    ) -> impl Future<Output = Result<RecommendationResult, CoreError>> + Send;

    fn update_preferences_from_text(
        &self,
        input: UpdatePreferencesFromTextInput,
    ) -> impl Future<Output = Result<PreferenceConfirmation, CoreError>> + Send;

    fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> impl Future<Output = Result<ProductAnalysis, CoreError>> + Send;
}
