use axum::extract::State;
use healthscan_core::domain::user::{
    entities::UserProfile, ports::UserService, value_objects::UpsertUserInput,
};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::UpsertUserValidator,
};

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Create or update a user",
    description = "Creates the user or updates its profile. createdAt is kept and preference fields left out of the body are preserved.",
    request_body = UpsertUserValidator,
    responses(
        (status = 200, body = UserProfile)
    ),
)]
pub async fn upsert_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpsertUserValidator>,
) -> Result<Response<UserProfile>, ApiError> {
    let preferences = payload.preferences();

    let user = state
        .service
        .upsert_user(UpsertUserInput {
            id: payload.id,
            email: payload.email,
            name: payload.name,
            picture: payload.picture,
            preferences,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
