use axum::extract::State;
use healthscan_core::domain::product_analysis::{
    entities::{ScoringResult, WebSearchResult},
    ports::ProductAnalysisService,
    value_objects::ScoreIngredientsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    product_analysis::validators::ScoreIngredientsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ScoreIngredientsResponse {
    pub data: ScoringResult,
}

#[utoipa::path(
    post,
    path = "/score",
    tag = "product-analysis",
    summary = "Score an ingredient list",
    description = "Rates each ingredient LOW, MEDIUM or HIGH and computes an overall 0-10 score, personalized when user_id is given.",
    request_body = ScoreIngredientsValidator,
    responses(
        (status = 200, body = ScoreIngredientsResponse),
        (status = 502, description = "An upstream service failed")
    ),
)]
pub async fn score_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ScoreIngredientsValidator>,
) -> Result<Response<ScoreIngredientsResponse>, ApiError> {
    let scoring = state
        .service
        .score_ingredients(ScoreIngredientsInput {
            ingredients: WebSearchResult {
                ingredients: payload.ingredients,
            },
            user_id: payload.user_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ScoreIngredientsResponse { data: scoring }))
}
