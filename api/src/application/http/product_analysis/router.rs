use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::{
    handlers::{
        analyze_product::{__path_analyze_product, analyze_product},
        recommend_alternatives::{__path_recommend_alternatives, recommend_alternatives},
        research_product::{__path_research_product, research_product},
        score_ingredients::{__path_score_ingredients, score_ingredients},
        update_preferences_from_text::{
            __path_update_preferences_from_text, update_preferences_from_text,
        },
    },
    multipart::MAX_IMAGE_SIZE,
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    analyze_product,
    research_product,
    score_ingredients,
    recommend_alternatives,
    update_preferences_from_text
))]
pub struct ProductAnalysisApiDoc;

pub fn product_analysis_routes(state: AppState) -> Router<AppState> {
    // Leave room for multipart framing around a full-size image.
    let upload_limit = DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024);

    Router::new()
        .route(
            &format!("{}/api/analyze", state.args.server.root_path),
            post(analyze_product).layer(upload_limit.clone()),
        )
        .route(
            &format!("{}/api/research", state.args.server.root_path),
            post(research_product).layer(upload_limit),
        )
        .route(
            &format!("{}/api/score", state.args.server.root_path),
            post(score_ingredients),
        )
        .route(
            &format!(
                "{}/api/recommendations/{{product_name}}/{{overall_score}}",
                state.args.server.root_path
            ),
            get(recommend_alternatives),
        )
        .route(
            &format!(
                "{}/api/users/{{user_id}}/preferences/text",
                state.args.server.root_path
            ),
            post(update_preferences_from_text),
        )
}
