use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub diet_goals: Vec<String>,
    #[serde(default)]
    pub avoid_ingredients: Vec<String>,
}

impl UserPreferences {
    pub fn is_empty(&self) -> bool {
        self.allergies.is_empty() && self.diet_goals.is_empty() && self.avoid_ingredients.is_empty()
    }

    /// Each field present in the patch replaces the stored set; absent
    /// fields are kept. An explicitly empty list clears the field.
    pub fn merge(&mut self, patch: PreferencesPatch) {
        if let Some(allergies) = patch.allergies {
            self.allergies = normalize_entries(allergies);
        }
        if let Some(diet_goals) = patch.diet_goals {
            self.diet_goals = normalize_entries(diet_goals);
        }
        if let Some(avoid_ingredients) = patch.avoid_ingredients {
            self.avoid_ingredients = normalize_entries(avoid_ingredients);
        }
    }
}

/// Partial preference update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    #[serde(default)]
    pub allergies: Option<Vec<String>>,
    #[serde(default)]
    pub diet_goals: Option<Vec<String>>,
    #[serde(default)]
    pub avoid_ingredients: Option<Vec<String>>,
}

impl PreferencesPatch {
    pub fn is_empty(&self) -> bool {
        self.allergies.is_none() && self.diet_goals.is_none() && self.avoid_ingredients.is_none()
    }
}

/// Trims entries, drops blanks and removes case-insensitive duplicates,
/// keeping the first spelling seen.
pub fn normalize_entries(entries: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut normalized = Vec::new();

    for entry in entries {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = trimmed.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        normalized.push(trimmed.to_string());
    }

    normalized
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IngredientStatus {
    Safe,
    Moderate,
    Risky,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScannedIngredient {
    pub name: String,
    pub status: IngredientStatus,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Scan {
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub image: String,
    pub safety_score: f64,
    pub is_safe: bool,
    pub timestamp: String,
    #[serde(default)]
    pub ingredients: Vec<ScannedIngredient>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_scans: usize,
    pub today_scans: usize,
    pub safe_today: usize,
    pub risky_today: usize,
    pub average_score: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> UserPreferences {
        UserPreferences {
            allergies: vec!["peanut".to_string()],
            diet_goals: vec!["low sugar".to_string()],
            avoid_ingredients: vec!["palm oil".to_string()],
        }
    }

    #[test]
    fn explicit_empty_list_clears_field() {
        let mut preferences = stored();
        preferences.merge(PreferencesPatch {
            allergies: Some(vec![]),
            ..Default::default()
        });

        assert!(preferences.allergies.is_empty());
        assert_eq!(preferences.diet_goals, vec!["low sugar".to_string()]);
    }

    #[test]
    fn empty_patch_leaves_everything_untouched() {
        let mut preferences = stored();
        preferences.merge(PreferencesPatch::default());
        assert_eq!(preferences, stored());
    }

    #[test]
    fn patch_replaces_rather_than_appends() {
        let mut preferences = stored();
        preferences.merge(PreferencesPatch {
            avoid_ingredients: Some(vec!["aspartame".to_string()]),
            ..Default::default()
        });
        assert_eq!(preferences.avoid_ingredients, vec!["aspartame".to_string()]);
    }

    #[test]
    fn merging_the_same_patch_twice_is_stable() {
        let patch = PreferencesPatch {
            allergies: Some(vec!["Peanut".to_string(), "peanut ".to_string()]),
            ..Default::default()
        };
        let mut once = UserPreferences::default();
        once.merge(patch.clone());
        let mut twice = once.clone();
        twice.merge(patch);

        assert_eq!(once, twice);
        assert_eq!(once.allergies, vec!["Peanut".to_string()]);
    }

    #[test]
    fn patch_distinguishes_missing_from_empty() {
        let patch: PreferencesPatch = serde_json::from_str(r#"{"allergies": []}"#).unwrap();
        assert_eq!(patch.allergies, Some(vec![]));
        assert_eq!(patch.diet_goals, None);

        let patch: PreferencesPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn profile_keeps_camel_case_preference_keys() {
        let profile = UserProfile {
            id: "u1".to_string(),
            email: "a@b.c".to_string(),
            name: "A".to_string(),
            picture: None,
            created_at: Utc::now(),
            preferences: stored(),
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["dietGoals"][0], "low sugar");
        assert_eq!(value["avoidIngredients"][0], "palm oil");
        assert!(value.get("picture").is_none());
    }
}
