use axum::extract::{Path, State};
use healthscan_core::domain::product_analysis::{
    entities::RecommendationResult, ports::ProductAnalysisService,
    value_objects::RecommendAlternativesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RecommendAlternativesResponse {
    pub data: RecommendationResult,
}

#[utoipa::path(
    get,
    path = "/recommendations/{product_name}/{overall_score}",
    tag = "product-analysis",
    summary = "Recommend healthier alternatives",
    description = "Returns exactly three alternative products found by web search.",
    responses(
        (status = 200, body = RecommendAlternativesResponse),
        (status = 400, description = "Blank product name or invalid score"),
        (status = 502, description = "An upstream service failed")
    ),
    params(
        ("product_name" = String, Path, description = "Product name"),
        ("overall_score" = f64, Path, description = "Overall safety score of the product"),
    ),
)]
pub async fn recommend_alternatives(
    Path((product_name, overall_score)): Path<(String, f64)>,
    State(state): State<AppState>,
) -> Result<Response<RecommendAlternativesResponse>, ApiError> {
    let recommendations = state
        .service
        .recommend_alternatives(RecommendAlternativesInput {
            product_name,
            overall_score,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendAlternativesResponse {
        data: recommendations,
    }))
}
