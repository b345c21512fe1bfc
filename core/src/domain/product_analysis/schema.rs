use serde_json::json;

use crate::domain::product_analysis::entities::RECOMMENDATION_COUNT;

/// Returns the JSON schema for web-search stage responses
pub fn get_web_search_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" }
                    },
                    "required": ["name", "description"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["ingredients"],
        "additionalProperties": false
    })
}

/// Returns the JSON schema for scoring stage responses
pub fn get_scoring_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredient_scores": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "ingredient_name": { "type": "string" },
                        "safety_score": {
                            "type": "string",
                            "enum": ["LOW", "MEDIUM", "HIGH"]
                        },
                        "reasoning": { "type": "string" }
                    },
                    "required": ["ingredient_name", "safety_score", "reasoning"],
                    "additionalProperties": false
                }
            },
            "overall_score": { "type": "number" }
        },
        "required": ["ingredient_scores", "overall_score"],
        "additionalProperties": false
    })
}

/// Returns the JSON schema for recommendation stage responses
pub fn get_recommendation_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recommendations": {
                "type": "array",
                "minItems": RECOMMENDATION_COUNT,
                "maxItems": RECOMMENDATION_COUNT,
                "items": {
                    "type": "object",
                    "properties": {
                        "product_name": { "type": "string" },
                        "health_score": { "type": "string" },
                        "reason": { "type": "string" }
                    },
                    "required": ["product_name", "health_score", "reason"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["recommendations"],
        "additionalProperties": false
    })
}

/// Returns the JSON schema for preference-update stage responses.
/// A `null` field means "leave unchanged", an empty array clears it.
pub fn get_preference_update_schema() -> serde_json::Value {
    let nullable_list = json!({
        "type": ["array", "null"],
        "items": { "type": "string" }
    });

    json!({
        "type": "object",
        "properties": {
            "allergies": nullable_list,
            "diet_goals": nullable_list,
            "avoid_ingredients": nullable_list,
            "confirmation": { "type": "string" }
        },
        "required": ["allergies", "diet_goals", "avoid_ingredients", "confirmation"],
        "additionalProperties": false
    })
}
