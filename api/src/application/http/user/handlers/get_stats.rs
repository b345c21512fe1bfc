use axum::extract::{Path, State};
use healthscan_core::domain::user::{entities::UserStats, ports::UserService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{user_id}/stats",
    tag = "user",
    summary = "Get scan statistics",
    description = "Totals over the whole history plus today's counts (UTC).",
    responses(
        (status = 200, body = UserStats)
    ),
    params(
        ("user_id" = String, Path, description = "User id"),
    ),
)]
pub async fn get_stats(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<UserStats>, ApiError> {
    let stats = state
        .service
        .get_stats(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(stats))
}
