use axum::extract::{Path, Query, State};
use healthscan_core::domain::user::{
    entities::Scan, ports::UserService, value_objects::GetScansInput,
};

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user::validators::ScansQuery,
};

#[utoipa::path(
    get,
    path = "/{user_id}/scans",
    tag = "user",
    summary = "List scan history",
    responses(
        (status = 200, body = [Scan])
    ),
    params(
        ("user_id" = String, Path, description = "User id"),
        ScansQuery,
    ),
)]
pub async fn get_scans(
    Path(user_id): Path<String>,
    Query(query): Query<ScansQuery>,
    State(state): State<AppState>,
) -> Result<Response<Vec<Scan>>, ApiError> {
    let scans = state
        .service
        .get_scans(GetScansInput {
            user_id,
            limit: query.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(scans))
}
