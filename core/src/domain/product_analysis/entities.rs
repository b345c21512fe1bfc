use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, user::entities::UserPreferences};

/// One ingredient found by the web-search stage, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WebSearchResult {
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyScore {
    Low,
    Medium,
    High,
}

impl SafetyScore {
    pub fn as_str(&self) -> &str {
        match self {
            SafetyScore::Low => "LOW",
            SafetyScore::Medium => "MEDIUM",
            SafetyScore::High => "HIGH",
        }
    }

    /// Numeric anchor used when averaging ingredient scores.
    pub fn anchor(&self) -> f64 {
        match self {
            SafetyScore::Low => 1.0,
            SafetyScore::Medium => 5.0,
            SafetyScore::High => 9.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientScore {
    pub ingredient_name: String,
    pub safety_score: SafetyScore,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoringResult {
    pub ingredient_scores: Vec<IngredientScore>,
    /// 0 to 10, higher is safer. Computed by the scoring stage.
    pub overall_score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub product_name: String,
    pub health_score: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResult {
    pub recommendations: Vec<Recommendation>,
}

/// Structured write request produced by the preference-update stage.
/// `None` leaves the stored field untouched, `Some(vec![])` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PreferenceUpdate {
    pub allergies: Option<Vec<String>>,
    pub diet_goals: Option<Vec<String>>,
    pub avoid_ingredients: Option<Vec<String>>,
    pub confirmation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PreferenceConfirmation {
    pub user_id: String,
    pub preferences: UserPreferences,
    pub message: String,
}

/// Output of the extract-and-research step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResearchedProduct {
    pub product_name: String,
    pub ingredients: WebSearchResult,
}

/// Envelope returned by a full image analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductAnalysis {
    pub id: Uuid,
    pub product_name: String,
    pub ingredients: WebSearchResult,
    pub scoring: ScoringResult,
    pub created_at: DateTime<Utc>,
}

impl ProductAnalysis {
    pub fn new(research: ResearchedProduct, scoring: ScoringResult) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            product_name: research.product_name,
            ingredients: research.ingredients,
            scoring,
            created_at: now,
        }
    }
}

/// Checks a stage output must pass beyond deserialization.
pub trait OutputContract {
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

impl OutputContract for WebSearchResult {}

impl OutputContract for ScoringResult {
    fn check(&self) -> Result<(), String> {
        if !self.overall_score.is_finite() {
            return Err("overall_score is not a finite number".to_string());
        }
        Ok(())
    }
}

pub const RECOMMENDATION_COUNT: usize = 3;

impl OutputContract for RecommendationResult {
    fn check(&self) -> Result<(), String> {
        if self.recommendations.len() != RECOMMENDATION_COUNT {
            return Err(format!(
                "expected {} recommendations, got {}",
                RECOMMENDATION_COUNT,
                self.recommendations.len()
            ));
        }
        Ok(())
    }
}

impl OutputContract for PreferenceUpdate {}
