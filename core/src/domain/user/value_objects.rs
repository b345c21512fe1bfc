use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::user::entities::{PreferencesPatch, ScannedIngredient};

#[derive(Debug, Clone)]
pub struct UpsertUserInput {
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub preferences: PreferencesPatch,
}

/// Scan as submitted by a client; `id` and `timestamp` are filled in when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewScan {
    #[serde(default)]
    pub id: Option<String>,
    pub product_name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub image: String,
    pub safety_score: f64,
    pub is_safe: bool,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<ScannedIngredient>,
}

#[derive(Debug, Clone)]
pub struct GetScansInput {
    pub user_id: String,
    pub limit: Option<usize>,
}
