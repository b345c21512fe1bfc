use serde::de::DeserializeOwned;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product_analysis::entities::{OutputContract, WebSearchResult},
    user::entities::UserPreferences,
};

/// Builds the text block describing a user's stored preferences.
/// Returns `None` when all three sets are empty.
pub fn preference_context(preferences: &UserPreferences) -> Option<String> {
    if preferences.is_empty() {
        return None;
    }

    let mut lines = vec!["USER PREFERENCES (apply these when scoring):".to_string()];
    let sections = [
        ("Allergies", &preferences.allergies),
        ("Diet goals", &preferences.diet_goals),
        ("Avoid ingredients", &preferences.avoid_ingredients),
    ];
    for (label, values) in sections {
        if !values.is_empty() {
            lines.push(format!("- {}: {}", label, values.join(", ")));
        }
    }

    Some(lines.join("\n"))
}

/// Serializes the search result for the scoring stage, prefixed with the
/// preference context when there is one.
pub fn build_scoring_input(
    ingredients: &WebSearchResult,
    preferences: Option<&UserPreferences>,
) -> Result<String, CoreError> {
    let serialized = serde_json::to_string(ingredients).map_err(|e| {
        tracing::error!("Failed to serialize ingredients: {}", e);
        CoreError::InternalServerError
    })?;

    match preferences.and_then(preference_context) {
        Some(context) => Ok(format!("{}\n\nINGREDIENTS:\n{}", context, serialized)),
        None => Ok(serialized),
    }
}

pub fn build_recommendation_input(product_name: &str, overall_score: f64) -> String {
    format!(
        "Product name: {}\nOverall safety score: {}",
        product_name, overall_score
    )
}

pub fn build_preference_update_input(
    current: &UserPreferences,
    statement: &str,
) -> Result<String, CoreError> {
    let current = serde_json::to_string(current).map_err(|e| {
        tracing::error!("Failed to serialize preferences: {}", e);
        CoreError::InternalServerError
    })?;

    Ok(format!(
        "CURRENT PREFERENCES:\n{}\n\nSTATEMENT:\n{}",
        current,
        statement.trim()
    ))
}

/// Parses a stage's raw output into its typed record. Anything that does
/// not match the schema is reported as an upstream failure.
pub fn parse_stage_output<T>(raw: &str) -> Result<T, CoreError>
where
    T: DeserializeOwned + OutputContract,
{
    let parsed: T = serde_json::from_str(raw.trim()).map_err(|e| {
        CoreError::ExternalServiceError(format!("Invalid stage output: {}", e))
    })?;

    parsed
        .check()
        .map_err(|reason| CoreError::ExternalServiceError(format!("Invalid stage output: {}", reason)))?;

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product_analysis::entities::{Ingredient, RecommendationResult};

    fn diet_cola() -> WebSearchResult {
        WebSearchResult {
            ingredients: vec![
                Ingredient {
                    name: "Aspartame".to_string(),
                    description: "Artificial sweetener.".to_string(),
                },
                Ingredient {
                    name: "Caramel Color".to_string(),
                    description: "Colorant.".to_string(),
                },
            ],
        }
    }

    #[test]
    fn empty_preferences_produce_no_context() {
        assert_eq!(preference_context(&UserPreferences::default()), None);
    }

    #[test]
    fn context_lists_only_non_empty_sets() {
        let preferences = UserPreferences {
            allergies: vec!["peanut".to_string(), "shellfish".to_string()],
            diet_goals: vec![],
            avoid_ingredients: vec!["palm oil".to_string()],
        };

        let context = preference_context(&preferences).unwrap();
        assert!(context.contains("- Allergies: peanut, shellfish"));
        assert!(context.contains("- Avoid ingredients: palm oil"));
        assert!(!context.contains("Diet goals"));
    }

    #[test]
    fn scoring_input_is_plain_json_without_preferences() {
        let plain = build_scoring_input(&diet_cola(), None).unwrap();
        let empty = build_scoring_input(&diet_cola(), Some(&UserPreferences::default())).unwrap();

        assert_eq!(plain, empty);
        let round: WebSearchResult = serde_json::from_str(&plain).unwrap();
        assert_eq!(round, diet_cola());
    }

    #[test]
    fn scoring_input_prepends_context() {
        let preferences = UserPreferences {
            allergies: vec!["peanut".to_string()],
            ..Default::default()
        };

        let input = build_scoring_input(&diet_cola(), Some(&preferences)).unwrap();
        assert!(input.starts_with("USER PREFERENCES"));
        assert!(input.ends_with(&serde_json::to_string(&diet_cola()).unwrap()));
    }

    #[test]
    fn parse_rejects_schema_mismatch() {
        let err = parse_stage_output::<WebSearchResult>(r#"{"List_of_ingredients": []}"#)
            .unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[test]
    fn parse_applies_output_contract() {
        let raw = r#"{"recommendations": [{"product_name": "A", "health_score": "8", "reason": "r"}]}"#;
        let err = parse_stage_output::<RecommendationResult>(raw).unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
