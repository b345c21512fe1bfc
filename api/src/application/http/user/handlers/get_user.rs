use axum::extract::{Path, State};
use healthscan_core::domain::user::{entities::UserProfile, ports::UserService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "user",
    summary = "Get a user",
    responses(
        (status = 200, body = UserProfile),
        (status = 404, description = "Unknown user")
    ),
    params(
        ("user_id" = String, Path, description = "User id"),
    ),
)]
pub async fn get_user(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<UserProfile>, ApiError> {
    let user = state
        .service
        .get_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
