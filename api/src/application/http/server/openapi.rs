use utoipa::OpenApi;

use crate::application::http::{
    health::{__path_health, __path_root, health, root},
    product_analysis::router::ProductAnalysisApiDoc,
    user::router::UserApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HealthScan API",
        description = "Product photo analysis, ingredient scoring and dietary preferences"
    ),
    paths(root, health),
    nest(
        (path = "/api", api = ProductAnalysisApiDoc),
        (path = "/api/users", api = UserApiDoc),
    )
)]
pub struct ApiDoc;
