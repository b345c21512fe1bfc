use axum::extract::{Path, State};
use healthscan_core::domain::user::{entities::UserPreferences, ports::UserService};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::UpdatePreferencesValidator,
};

#[utoipa::path(
    post,
    path = "/{user_id}/preferences",
    tag = "user",
    summary = "Update dietary preferences",
    description = "Each field present replaces the stored list. Omitted fields are kept and an empty list clears the field.",
    request_body = UpdatePreferencesValidator,
    responses(
        (status = 200, body = UserPreferences),
        (status = 404, description = "Unknown user")
    ),
    params(
        ("user_id" = String, Path, description = "User id"),
    ),
)]
pub async fn update_preferences(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdatePreferencesValidator>,
) -> Result<Response<UserPreferences>, ApiError> {
    let preferences = state
        .service
        .update_preferences(user_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(preferences))
}
