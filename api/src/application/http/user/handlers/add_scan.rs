use axum::extract::{Path, State};
use healthscan_core::domain::user::{entities::Scan, ports::UserService};

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::AddScanValidator,
};

#[utoipa::path(
    post,
    path = "/{user_id}/scans",
    tag = "user",
    summary = "Record a scan",
    description = "Prepends the scan to the user's history. id and timestamp are generated when missing.",
    request_body = AddScanValidator,
    responses(
        (status = 201, body = Scan)
    ),
    params(
        ("user_id" = String, Path, description = "User id"),
    ),
)]
pub async fn add_scan(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddScanValidator>,
) -> Result<Response<Scan>, ApiError> {
    let scan = state
        .service
        .add_scan(user_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(scan))
}
