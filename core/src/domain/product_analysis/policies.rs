//! Deterministic reference for the scoring and recommendation rules given to
//! the model. The pipeline does not rewrite model output with these; they
//! back quality checks and fixture tests.

use crate::domain::{
    product_analysis::entities::{Recommendation, RecommendationResult, SafetyScore},
    user::entities::UserPreferences,
};

pub const ALLERGY_PENALTY: f64 = 4.0;
pub const AVOID_PENALTY: f64 = 1.5;
pub const AVOID_PENALTY_CAP: f64 = 6.0;
pub const DIET_PENALTY: f64 = 1.0;
pub const DIET_PENALTY_CAP: f64 = 3.0;

fn mentions(ingredient_name: &str, entry: &str) -> bool {
    let entry = entry.trim().to_lowercase();
    !entry.is_empty() && ingredient_name.to_lowercase().contains(&entry)
}

pub fn matches_allergy(ingredient_name: &str, preferences: &UserPreferences) -> bool {
    preferences
        .allergies
        .iter()
        .any(|allergy| mentions(ingredient_name, allergy))
}

pub fn matches_avoid_list(ingredient_name: &str, preferences: &UserPreferences) -> bool {
    preferences
        .avoid_ingredients
        .iter()
        .any(|avoid| mentions(ingredient_name, avoid))
}

/// An allergy match forces `LOW` regardless of the general classification.
/// An avoid-list match caps the score at `MEDIUM`.
pub fn reference_safety_score(
    ingredient_name: &str,
    general: SafetyScore,
    preferences: &UserPreferences,
) -> SafetyScore {
    if matches_allergy(ingredient_name, preferences) {
        return SafetyScore::Low;
    }
    if matches_avoid_list(ingredient_name, preferences) && general == SafetyScore::High {
        return SafetyScore::Medium;
    }
    general
}

/// Average of the 1/5/9 anchors minus capped preference penalties, clamped
/// to [0, 10]. `None` when there is nothing to average.
pub fn reference_overall_score(
    scores: &[SafetyScore],
    allergy_match: bool,
    avoid_matches: usize,
    diet_violations: usize,
) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }

    let average = scores.iter().map(SafetyScore::anchor).sum::<f64>() / scores.len() as f64;

    let mut penalty = 0.0;
    if allergy_match {
        penalty += ALLERGY_PENALTY;
    }
    penalty += (avoid_matches as f64 * AVOID_PENALTY).min(AVOID_PENALTY_CAP);
    penalty += (diet_violations as f64 * DIET_PENALTY).min(DIET_PENALTY_CAP);

    Some((average - penalty).clamp(0.0, 10.0))
}

/// Reads the leading number of a model-written score such as "8.5" or "8/10".
pub fn parse_health_score(raw: &str) -> Option<f64> {
    let head = raw.split('/').next()?.trim();
    head.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Recommendations whose score is not above the original product's score.
/// Unreadable scores are reported as well.
pub fn recommendation_regressions(
    result: &RecommendationResult,
    overall_score: f64,
) -> Vec<&Recommendation> {
    result
        .recommendations
        .iter()
        .filter(|item| match parse_health_score(&item.health_score) {
            Some(score) => score <= overall_score,
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allergic_to_peanut() -> UserPreferences {
        UserPreferences {
            allergies: vec!["peanut".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn allergy_overrides_general_safety() {
        let score =
            reference_safety_score("Peanut Oil", SafetyScore::High, &allergic_to_peanut());
        assert_eq!(score, SafetyScore::Low);
    }

    #[test]
    fn unrelated_ingredient_keeps_general_safety() {
        let score = reference_safety_score("Water", SafetyScore::High, &allergic_to_peanut());
        assert_eq!(score, SafetyScore::High);
    }

    #[test]
    fn avoid_list_caps_at_medium() {
        let preferences = UserPreferences {
            avoid_ingredients: vec!["palm oil".to_string()],
            ..Default::default()
        };

        assert_eq!(
            reference_safety_score("Palm Oil", SafetyScore::High, &preferences),
            SafetyScore::Medium
        );
        assert_eq!(
            reference_safety_score("Palm Oil", SafetyScore::Low, &preferences),
            SafetyScore::Low
        );
    }

    #[test]
    fn allergy_outranks_avoid_list() {
        let preferences = UserPreferences {
            allergies: vec!["peanut".to_string()],
            avoid_ingredients: vec!["peanut".to_string()],
            ..Default::default()
        };

        assert_eq!(
            reference_safety_score("Peanut Butter", SafetyScore::High, &preferences),
            SafetyScore::Low
        );
    }

    #[test]
    fn overall_score_averages_anchors() {
        let score = reference_overall_score(&[SafetyScore::Low, SafetyScore::High], false, 0, 0);
        assert_eq!(score, Some(5.0));
    }

    #[test]
    fn allergy_penalty_applies_once() {
        let score = reference_overall_score(&[SafetyScore::Low, SafetyScore::High], true, 0, 0);
        assert_eq!(score, Some(1.0));
    }

    #[test]
    fn penalties_are_capped() {
        // 9 - min(5 * 1.5, 6) - min(4 * 1, 3) = 0
        let score = reference_overall_score(&[SafetyScore::High], false, 5, 4);
        assert_eq!(score, Some(0.0));

        // 9 - 1.5 - 1 = 6.5
        let score = reference_overall_score(&[SafetyScore::High], false, 1, 1);
        assert_eq!(score, Some(6.5));
    }

    #[test]
    fn overall_score_is_clamped() {
        let score = reference_overall_score(&[SafetyScore::Low], true, 4, 3);
        assert_eq!(score, Some(0.0));
    }

    #[test]
    fn no_ingredients_has_no_reference_score() {
        assert_eq!(reference_overall_score(&[], false, 0, 0), None);
    }

    #[test]
    fn health_score_parsing() {
        assert_eq!(parse_health_score("8.5"), Some(8.5));
        assert_eq!(parse_health_score(" 7/10"), Some(7.0));
        assert_eq!(parse_health_score("great"), None);
    }

    #[test]
    fn regressions_flag_scores_not_above_original() {
        let result = RecommendationResult {
            recommendations: vec![
                Recommendation {
                    product_name: "Better".to_string(),
                    health_score: "8".to_string(),
                    reason: "r".to_string(),
                },
                Recommendation {
                    product_name: "Same".to_string(),
                    health_score: "4".to_string(),
                    reason: "r".to_string(),
                },
                Recommendation {
                    product_name: "Vague".to_string(),
                    health_score: "healthy".to_string(),
                    reason: "r".to_string(),
                },
            ],
        };

        let names: Vec<&str> = recommendation_regressions(&result, 4.0)
            .iter()
            .map(|item| item.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["Same", "Vague"]);
    }
}
