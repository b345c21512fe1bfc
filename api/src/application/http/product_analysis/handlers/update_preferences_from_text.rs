use axum::extract::{Path, State};
use healthscan_core::domain::product_analysis::{
    entities::PreferenceConfirmation, ports::ProductAnalysisService,
    value_objects::UpdatePreferencesFromTextInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    product_analysis::validators::UpdatePreferencesFromTextValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdatePreferencesFromTextResponse {
    pub data: PreferenceConfirmation,
}

#[utoipa::path(
    post,
    path = "/users/{user_id}/preferences/text",
    tag = "product-analysis",
    summary = "Update preferences from a free-text statement",
    description = "Interprets statements such as \"I'm allergic to peanuts\" and merges the result into the stored preferences.",
    request_body = UpdatePreferencesFromTextValidator,
    responses(
        (status = 200, body = UpdatePreferencesFromTextResponse),
        (status = 404, description = "Unknown user"),
        (status = 502, description = "An upstream service failed")
    ),
    params(
        ("user_id" = String, Path, description = "User id"),
    ),
)]
pub async fn update_preferences_from_text(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdatePreferencesFromTextValidator>,
) -> Result<Response<UpdatePreferencesFromTextResponse>, ApiError> {
    let confirmation = state
        .service
        .update_preferences_from_text(UpdatePreferencesFromTextInput {
            user_id,
            text: payload.text,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdatePreferencesFromTextResponse {
        data: confirmation,
    }))
}
