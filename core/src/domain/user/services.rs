use chrono::Utc;
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    product_analysis::ports::{AgentRunner, ProductNameExtractor},
    user::{
        entities::{PreferencesPatch, Scan, UserPreferences, UserProfile, UserStats},
        helpers::compute_user_stats,
        ports::{ScanRepository, UserRepository, UserService},
        value_objects::{GetScansInput, NewScan, UpsertUserInput},
    },
};

impl<U, S, A, X> UserService for Service<U, S, A, X>
where
    U: UserRepository,
    S: ScanRepository,
    A: AgentRunner,
    X: ProductNameExtractor,
{
    async fn get_user(&self, user_id: String) -> Result<UserProfile, CoreError> {
        self.user_repository
            .get_user(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(user_id = %input.id))]
    async fn upsert_user(&self, input: UpsertUserInput) -> Result<UserProfile, CoreError> {
        if input.id.trim().is_empty() {
            return Err(CoreError::Invalid("user id is required".to_string()));
        }

        let user = self.user_repository.upsert_user(input).await?;
        tracing::info!("User saved");

        Ok(user)
    }

    async fn get_preferences(&self, user_id: String) -> Result<UserPreferences, CoreError> {
        self.user_repository
            .get_preferences(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, patch))]
    async fn update_preferences(
        &self,
        user_id: String,
        patch: PreferencesPatch,
    ) -> Result<UserPreferences, CoreError> {
        self.user_repository.merge_preferences(user_id, patch).await
    }

    async fn get_scans(&self, input: GetScansInput) -> Result<Vec<Scan>, CoreError> {
        self.scan_repository
            .get_scans(input.user_id, input.limit)
            .await
    }

    #[instrument(skip(self, scan))]
    async fn add_scan(&self, user_id: String, scan: NewScan) -> Result<Scan, CoreError> {
        if scan.product_name.trim().is_empty() {
            return Err(CoreError::Invalid("productName is required".to_string()));
        }

        let scan = self.scan_repository.add_scan(user_id, scan).await?;
        tracing::info!(scan_id = %scan.id, "Scan recorded");

        Ok(scan)
    }

    async fn get_stats(&self, user_id: String) -> Result<UserStats, CoreError> {
        let scans = self.scan_repository.get_scans(user_id, None).await?;
        Ok(compute_user_stats(&scans, Utc::now()))
    }
}
