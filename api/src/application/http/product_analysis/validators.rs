use healthscan_core::domain::product_analysis::entities::Ingredient;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScoreIngredientsValidator {
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    #[validate(length(min = 1, message = "user_id must not be blank"))]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePreferencesFromTextValidator {
    #[validate(length(min = 1, message = "text is required"))]
    pub text: String,
}
