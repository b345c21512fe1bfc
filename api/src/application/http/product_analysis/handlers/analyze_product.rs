use axum::extract::{Multipart, State};
use healthscan_core::domain::product_analysis::{
    entities::ProductAnalysis, ports::ProductAnalysisService, value_objects::AnalyzeProductInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    product_analysis::multipart::read_image_upload,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeProductResponse {
    pub data: ProductAnalysis,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "product-analysis",
    summary = "Analyze a product photo",
    description = "Extracts the product name from the image, researches its ingredients and scores them. When user_id is given, stored preferences personalize the score.",
    request_body(content_type = "multipart/form-data", description = "`image` file and optional `user_id` text field"),
    responses(
        (status = 200, body = AnalyzeProductResponse),
        (status = 400, description = "Empty or unreadable image"),
        (status = 404, description = "No product recognized"),
        (status = 502, description = "An upstream service failed")
    ),
)]
pub async fn analyze_product(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<AnalyzeProductResponse>, ApiError> {
    let upload = read_image_upload(multipart).await?;

    let analysis = state
        .service
        .analyze_product(AnalyzeProductInput {
            image_data: upload.image_data,
            mime_type: upload.mime_type,
            user_id: upload.user_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeProductResponse { data: analysis }))
}
