use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    add_scan::{__path_add_scan, add_scan},
    get_preferences::{__path_get_preferences, get_preferences},
    get_scans::{__path_get_scans, get_scans},
    get_stats::{__path_get_stats, get_stats},
    get_user::{__path_get_user, get_user},
    update_preferences::{__path_update_preferences, update_preferences},
    upsert_user::{__path_upsert_user, upsert_user},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    upsert_user,
    get_user,
    get_preferences,
    update_preferences,
    get_scans,
    add_scan,
    get_stats
))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/users", state.args.server.root_path),
            post(upsert_user),
        )
        .route(
            &format!("{}/api/users/{{user_id}}", state.args.server.root_path),
            get(get_user),
        )
        .route(
            &format!(
                "{}/api/users/{{user_id}}/preferences",
                state.args.server.root_path
            ),
            get(get_preferences).post(update_preferences),
        )
        .route(
            &format!("{}/api/users/{{user_id}}/scans", state.args.server.root_path),
            get(get_scans).post(add_scan),
        )
        .route(
            &format!("{}/api/users/{{user_id}}/stats", state.args.server.root_path),
            get(get_stats),
        )
}
