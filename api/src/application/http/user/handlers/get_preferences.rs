use axum::extract::{Path, State};
use healthscan_core::domain::user::{entities::UserPreferences, ports::UserService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{user_id}/preferences",
    tag = "user",
    summary = "Get dietary preferences",
    responses(
        (status = 200, body = UserPreferences),
        (status = 404, description = "Unknown user")
    ),
    params(
        ("user_id" = String, Path, description = "User id"),
    ),
)]
pub async fn get_preferences(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<UserPreferences>, ApiError> {
    let preferences = state
        .service
        .get_preferences(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(preferences))
}
