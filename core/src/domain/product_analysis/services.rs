use serde::de::DeserializeOwned;
use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    product_analysis::{
        agents::{
            AgentDefinition, AgentTool, PREFERENCE_AGENT, RECOMMENDER_AGENT, SCORER_AGENT,
            WEB_SEARCH_AGENT,
        },
        entities::{
            OutputContract, PreferenceConfirmation, PreferenceUpdate, ProductAnalysis,
            RecommendationResult, ResearchedProduct, ScoringResult, WebSearchResult,
        },
        helpers::{
            build_preference_update_input, build_recommendation_input, build_scoring_input,
            parse_stage_output,
        },
        policies::recommendation_regressions,
        ports::{AgentRunner, ProductAnalysisService, ProductNameExtractor},
        value_objects::{
            AnalyzeProductInput, PipelineStage, RecommendAlternativesInput, ScoreIngredientsInput,
            UpdatePreferencesFromTextInput,
        },
    },
    user::{
        entities::{PreferencesPatch, UserPreferences},
        ports::{ScanRepository, UserRepository},
    },
};

impl<U, S, A, X> Service<U, S, A, X>
where
    U: UserRepository,
    S: ScanRepository,
    A: AgentRunner,
    X: ProductNameExtractor,
{
    /// Runs one agent stage and validates its output at the boundary.
    async fn run_stage<T>(
        &self,
        stage: PipelineStage,
        agent: AgentDefinition,
        input: String,
    ) -> Result<T, CoreError>
    where
        T: DeserializeOwned + OutputContract + Send,
    {
        info!(stage = stage.as_str(), agent = agent.name, "stage started");

        let run = self
            .agent_runner
            .run(agent, input)
            .await
            .inspect_err(|e| {
                error!(stage = stage.as_str(), agent = agent.name, error = %e, "stage failed");
            })?;

        if agent.requires_tool_call() && run.tool_calls == 0 {
            error!(
                stage = stage.as_str(),
                agent = agent.name,
                "stage failed: answered without the required tool call"
            );
            return Err(CoreError::ExternalServiceError(format!(
                "{} answered without calling a tool",
                agent.name
            )));
        }

        let parsed = parse_stage_output::<T>(&run.output).inspect_err(|e| {
            error!(
                stage = stage.as_str(),
                agent = agent.name,
                error = %e,
                raw_output = %run.output,
                "stage failed"
            );
        })?;

        info!(
            stage = stage.as_str(),
            agent = agent.name,
            tool_calls = run.tool_calls,
            "stage succeeded"
        );

        Ok(parsed)
    }

    async fn extract_product_name(
        &self,
        image_data: Vec<u8>,
        mime_type: Option<String>,
    ) -> Result<String, CoreError> {
        let stage = PipelineStage::ImageExtraction;

        if image_data.is_empty() {
            warn!(stage = stage.as_str(), "stage failed: empty image payload");
            return Err(CoreError::Invalid("image payload is empty".to_string()));
        }

        info!(stage = stage.as_str(), bytes = image_data.len(), "stage started");

        let name = self
            .name_extractor
            .extract_product_name(image_data, mime_type)
            .await
            .inspect_err(|e| error!(stage = stage.as_str(), error = %e, "stage failed"))?;

        let name = name.trim().to_string();
        if name.is_empty() {
            warn!(stage = stage.as_str(), "stage failed: no product recognized");
            return Err(CoreError::NotFound);
        }

        info!(stage = stage.as_str(), product_name = %name, "stage succeeded");
        Ok(name)
    }

    /// Stored preferences for personalization. Lookup failures degrade to
    /// no personalization.
    async fn personalization_for(&self, user_id: Option<&str>) -> Option<UserPreferences> {
        let user_id = user_id?;

        match self.user_repository.get_preferences(user_id.to_string()).await {
            Ok(preferences) => preferences.filter(|p| !p.is_empty()),
            Err(e) => {
                warn!(
                    stage = PipelineStage::Scoring.as_str(),
                    user_id,
                    error = %e,
                    "preference lookup failed, scoring without personalization"
                );
                None
            }
        }
    }

    /// Commits a preference update on behalf of a stage holding write access.
    async fn commit_preference_update(
        &self,
        agent: AgentDefinition,
        user_id: String,
        update: PreferenceUpdate,
    ) -> Result<UserPreferences, CoreError> {
        if !agent.allows(AgentTool::PreferenceStore) {
            error!(agent = agent.name, "agent has no write access to the preference store");
            return Err(CoreError::InternalServerError);
        }

        let patch = PreferencesPatch {
            allergies: update.allergies,
            diet_goals: update.diet_goals,
            avoid_ingredients: update.avoid_ingredients,
        };

        self.user_repository
            .merge_preferences(user_id, patch)
            .await
            .inspect_err(|e| {
                error!(
                    stage = PipelineStage::PreferenceUpdate.as_str(),
                    error = %e,
                    "failed to store preferences"
                );
            })
    }
}

impl<U, S, A, X> ProductAnalysisService for Service<U, S, A, X>
where
    U: UserRepository,
    S: ScanRepository,
    A: AgentRunner,
    X: ProductNameExtractor,
{
    #[instrument(skip(self, input), fields(user_id = ?input.user_id))]
    async fn extract_and_research(
        &self,
        input: AnalyzeProductInput,
    ) -> Result<ResearchedProduct, CoreError> {
        // 1. Image -> product name
        let product_name = self
            .extract_product_name(input.image_data, input.mime_type)
            .await?;

        // 2. Product name -> ingredients
        let ingredients: WebSearchResult = self
            .run_stage(PipelineStage::WebSearch, WEB_SEARCH_AGENT, product_name.clone())
            .await?;

        Ok(ResearchedProduct {
            product_name,
            ingredients,
        })
    }

    #[instrument(skip(self, input), fields(user_id = ?input.user_id, ingredients = input.ingredients.ingredients.len()))]
    async fn score_ingredients(
        &self,
        input: ScoreIngredientsInput,
    ) -> Result<ScoringResult, CoreError> {
        let preferences = self.personalization_for(input.user_id.as_deref()).await;
        let scoring_input = build_scoring_input(&input.ingredients, preferences.as_ref())?;

        let scoring: ScoringResult = self
            .run_stage(PipelineStage::Scoring, SCORER_AGENT, scoring_input)
            .await?;

        if !(0.0..=10.0).contains(&scoring.overall_score) {
            warn!(
                overall_score = scoring.overall_score,
                "scoring stage returned an overall score outside [0, 10]"
            );
        }
        if scoring.ingredient_scores.len() != input.ingredients.ingredients.len() {
            warn!(
                expected = input.ingredients.ingredients.len(),
                actual = scoring.ingredient_scores.len(),
                "scoring stage did not score every ingredient once"
            );
        }

        Ok(scoring)
    }

    #[instrument(skip(self, input), fields(product_name = %input.product_name))]
    async fn recommend_alternatives(
        &self,
        input: RecommendAlternativesInput,
    ) -> Result<RecommendationResult, CoreError> {
        let product_name = input.product_name.trim();
        if product_name.is_empty() {
            return Err(CoreError::Invalid("product name is required".to_string()));
        }
        if !input.overall_score.is_finite() {
            return Err(CoreError::Invalid("overall score must be a number".to_string()));
        }

        let result: RecommendationResult = self
            .run_stage(
                PipelineStage::Recommendation,
                RECOMMENDER_AGENT,
                build_recommendation_input(product_name, input.overall_score),
            )
            .await?;

        for item in recommendation_regressions(&result, input.overall_score) {
            warn!(
                recommended = %item.product_name,
                health_score = %item.health_score,
                overall_score = input.overall_score,
                "recommendation does not score above the original product"
            );
        }

        Ok(result)
    }

    #[instrument(skip(self, input), fields(user_id = %input.user_id))]
    async fn update_preferences_from_text(
        &self,
        input: UpdatePreferencesFromTextInput,
    ) -> Result<PreferenceConfirmation, CoreError> {
        if input.text.trim().is_empty() {
            return Err(CoreError::Invalid("preference text is empty".to_string()));
        }

        // Fields the agent returns replace stored ones, so it must start from
        // the real current set. A failed lookup aborts the update.
        let current = self
            .user_repository
            .get_preferences(input.user_id.clone())
            .await
            .inspect_err(|e| {
                error!(
                    stage = PipelineStage::PreferenceUpdate.as_str(),
                    error = %e,
                    "preference lookup failed, update aborted"
                );
            })?
            .ok_or(CoreError::NotFound)?;

        let update: PreferenceUpdate = self
            .run_stage(
                PipelineStage::PreferenceUpdate,
                PREFERENCE_AGENT,
                build_preference_update_input(&current, &input.text)?,
            )
            .await?;

        let message = update.confirmation.clone();
        let preferences = self
            .commit_preference_update(PREFERENCE_AGENT, input.user_id.clone(), update)
            .await?;

        Ok(PreferenceConfirmation {
            user_id: input.user_id,
            preferences,
            message,
        })
    }

    #[instrument(skip(self, input), fields(user_id = ?input.user_id))]
    async fn analyze_product(
        &self,
        input: AnalyzeProductInput,
    ) -> Result<ProductAnalysis, CoreError> {
        let user_id = input.user_id.clone();

        let research = self.extract_and_research(input).await?;

        let scoring = self
            .score_ingredients(ScoreIngredientsInput {
                ingredients: research.ingredients.clone(),
                user_id,
            })
            .await?;

        let analysis = ProductAnalysis::new(research, scoring);
        info!(
            analysis_id = %analysis.id,
            product_name = %analysis.product_name,
            overall_score = analysis.scoring.overall_score,
            "Product analysis completed"
        );

        Ok(analysis)
    }
}
