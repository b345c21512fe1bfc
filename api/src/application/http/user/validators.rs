use healthscan_core::domain::user::{
    entities::{PreferencesPatch, ScannedIngredient},
    value_objects::NewScan,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserValidator {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub picture: Option<String>,

    #[serde(default)]
    pub allergies: Option<Vec<String>>,

    #[serde(default)]
    pub diet_goals: Option<Vec<String>>,

    #[serde(default)]
    pub avoid_ingredients: Option<Vec<String>>,
}

impl UpsertUserValidator {
    pub fn preferences(&self) -> PreferencesPatch {
        PreferencesPatch {
            allergies: self.allergies.clone(),
            diet_goals: self.diet_goals.clone(),
            avoid_ingredients: self.avoid_ingredients.clone(),
        }
    }
}

/// Omitted fields are left untouched, an explicit `[]` clears the field.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferencesValidator {
    #[serde(default)]
    pub allergies: Option<Vec<String>>,

    #[serde(default)]
    pub diet_goals: Option<Vec<String>>,

    #[serde(default)]
    pub avoid_ingredients: Option<Vec<String>>,
}

impl From<UpdatePreferencesValidator> for PreferencesPatch {
    fn from(payload: UpdatePreferencesValidator) -> Self {
        PreferencesPatch {
            allergies: payload.allergies,
            diet_goals: payload.diet_goals,
            avoid_ingredients: payload.avoid_ingredients,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddScanValidator {
    #[serde(default)]
    pub id: Option<String>,

    #[validate(length(min = 1, message = "productName is required"))]
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

impl From<AddScanValidator> for NewScan {
    fn from(payload: AddScanValidator) -> Self {
        NewScan {
            id: payload.id,
            product_name: payload.product_name,
            brand: payload.brand,
            image: payload.image,
            safety_score: payload.safety_score,
            is_safe: payload.is_safe,
            timestamp: payload.timestamp,
            ingredients: payload.ingredients,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ScansQuery {
    /// Maximum number of scans to return, most recent first.
    pub limit: Option<usize>,
}
