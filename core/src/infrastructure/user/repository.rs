use std::{collections::BTreeMap, sync::Arc};

use chrono::Utc;
use tracing::instrument;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{
            entities::{PreferencesPatch, UserPreferences, UserProfile},
            ports::UserRepository,
            value_objects::UpsertUserInput,
        },
    },
    infrastructure::store::JsonFileStore,
};

type UsersDocument = BTreeMap<String, UserProfile>;

/// Users keyed by id in a single `users.json` document. Also serves as the
/// preference store.
#[derive(Debug, Clone)]
pub struct JsonUserRepository {
    store: Arc<JsonFileStore>,
}

impl JsonUserRepository {
    pub fn new(store: JsonFileStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl UserRepository for JsonUserRepository {
    async fn get_user(&self, user_id: String) -> Result<Option<UserProfile>, CoreError> {
        let users: UsersDocument = self.store.read().await?;
        Ok(users.get(&user_id).cloned())
    }

    #[instrument(skip(self, input), fields(user_id = %input.id))]
    async fn upsert_user(&self, input: UpsertUserInput) -> Result<UserProfile, CoreError> {
        self.store
            .update(move |users: &mut UsersDocument| {
                let existing = users.get(&input.id);

                let created_at = existing.map(|u| u.created_at).unwrap_or_else(Utc::now);
                let picture = input
                    .picture
                    .or_else(|| existing.and_then(|u| u.picture.clone()));
                let mut preferences = existing
                    .map(|u| u.preferences.clone())
                    .unwrap_or_default();
                preferences.merge(input.preferences);

                let user = UserProfile {
                    id: input.id.clone(),
                    email: input.email,
                    name: input.name,
                    picture,
                    created_at,
                    preferences,
                };
                users.insert(input.id, user.clone());

                Ok(user)
            })
            .await
    }

    async fn get_preferences(&self, user_id: String) -> Result<Option<UserPreferences>, CoreError> {
        Ok(self.get_user(user_id).await?.map(|user| user.preferences))
    }

    #[instrument(skip(self, patch))]
    async fn merge_preferences(
        &self,
        user_id: String,
        patch: PreferencesPatch,
    ) -> Result<UserPreferences, CoreError> {
        self.store
            .update(move |users: &mut UsersDocument| {
                let user = users.get_mut(&user_id).ok_or(CoreError::NotFound)?;
                user.preferences.merge(patch);
                Ok(user.preferences.clone())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository(dir: &tempfile::TempDir) -> JsonUserRepository {
        JsonUserRepository::new(JsonFileStore::new(dir.path().join("users.json")))
    }

    fn new_user(id: &str, preferences: PreferencesPatch) -> UpsertUserInput {
        UpsertUserInput {
            id: id.to_string(),
            email: format!("{}@example.com", id),
            name: "Sam".to_string(),
            picture: None,
            preferences,
        }
    }

    fn full_patch() -> PreferencesPatch {
        PreferencesPatch {
            allergies: Some(vec!["peanut".to_string()]),
            diet_goals: Some(vec!["low sugar".to_string()]),
            avoid_ingredients: Some(vec!["palm oil".to_string()]),
        }
    }

    #[tokio::test]
    async fn explicit_empty_list_clears_stored_field() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository(&dir);
        repository.upsert_user(new_user("u1", full_patch())).await.unwrap();

        repository
            .merge_preferences(
                "u1".to_string(),
                PreferencesPatch {
                    allergies: Some(vec![]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let preferences = repository
            .get_preferences("u1".to_string())
            .await
            .unwrap()
            .unwrap();
        assert!(preferences.allergies.is_empty());
        assert_eq!(preferences.diet_goals, vec!["low sugar".to_string()]);
        assert_eq!(preferences.avoid_ingredients, vec!["palm oil".to_string()]);
    }

    #[tokio::test]
    async fn empty_merge_leaves_preferences_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository(&dir);
        repository.upsert_user(new_user("u1", full_patch())).await.unwrap();
        let before = repository.get_preferences("u1".to_string()).await.unwrap();

        repository
            .merge_preferences("u1".to_string(), PreferencesPatch::default())
            .await
            .unwrap();

        let after = repository.get_preferences("u1".to_string()).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn repeated_merge_reconciles_to_same_state() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository(&dir);
        repository
            .upsert_user(new_user("u1", PreferencesPatch::default()))
            .await
            .unwrap();
        let patch = PreferencesPatch {
            allergies: Some(vec!["peanut".to_string()]),
            ..Default::default()
        };

        let first = repository
            .merge_preferences("u1".to_string(), patch.clone())
            .await
            .unwrap();
        let second = repository
            .merge_preferences("u1".to_string(), patch)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.allergies, vec!["peanut".to_string()]);
    }

    #[tokio::test]
    async fn merge_for_unknown_user_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = repository(&dir)
            .merge_preferences("ghost".to_string(), full_patch())
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn upsert_preserves_creation_time_and_omitted_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository(&dir);
        let created = repository.upsert_user(new_user("u1", full_patch())).await.unwrap();

        let mut update = new_user("u1", PreferencesPatch::default());
        update.name = "Samantha".to_string();
        let updated = repository.upsert_user(update).await.unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Samantha");
        assert_eq!(updated.preferences, created.preferences);
    }

    #[tokio::test]
    async fn unknown_user_has_no_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let preferences = repository(&dir)
            .get_preferences("ghost".to_string())
            .await
            .unwrap();

        assert_eq!(preferences, None);
    }
}
