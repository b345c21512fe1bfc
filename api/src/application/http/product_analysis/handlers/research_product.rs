use axum::extract::{Multipart, State};
use healthscan_core::domain::product_analysis::{
    entities::ResearchedProduct, ports::ProductAnalysisService, value_objects::AnalyzeProductInput,
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
pub struct ResearchProductResponse {
    pub data: ResearchedProduct,
}

#[utoipa::path(
    post,
    path = "/research",
    tag = "product-analysis",
    summary = "Identify a product and research its ingredients",
    description = "Extracts the product name from the image and returns the ingredient list found by web search, without scoring.",
    request_body(content_type = "multipart/form-data", description = "`image` file"),
    responses(
        (status = 200, body = ResearchProductResponse),
        (status = 400, description = "Empty or unreadable image"),
        (status = 404, description = "No product recognized"),
        (status = 502, description = "An upstream service failed")
    ),
)]
pub async fn research_product(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<ResearchProductResponse>, ApiError> {
    let upload = read_image_upload(multipart).await?;

    let research = state
        .service
        .extract_and_research(AnalyzeProductInput {
            image_data: upload.image_data,
            mime_type: upload.mime_type,
            user_id: None,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ResearchProductResponse { data: research }))
}
