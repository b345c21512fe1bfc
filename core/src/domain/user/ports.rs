use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{PreferencesPatch, Scan, UserPreferences, UserProfile, UserStats},
        value_objects::{GetScansInput, NewScan, UpsertUserInput},
    },
};

/// User profiles and the preference store
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_user(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn upsert_user(
        &self,
        input: UpsertUserInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_preferences(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<Option<UserPreferences>, CoreError>> + Send;

    /// Fails with `NotFound` for an unknown user.
    fn merge_preferences(
        &self,
        user_id: String,
        patch: PreferencesPatch,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;
}

/// Scan history, most recent first
#[cfg_attr(test, mockall::automock)]
pub trait ScanRepository: Send + Sync {
    fn get_scans(
        &self,
        user_id: String,
        limit: Option<usize>,
    ) -> impl Future<Output = Result<Vec<Scan>, CoreError>> + Send;

    fn add_scan(
        &self,
        user_id: String,
        scan: NewScan,
    ) -> impl Future<Output = Result<Scan, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn get_user(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn upsert_user(
        &self,
        input: UpsertUserInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_preferences(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;

    fn update_preferences(
        &self,
        user_id: String,
        patch: PreferencesPatch,
    ) -> impl Future<Output = Result<UserPreferences, CoreError>> + Send;

    fn get_scans(
        &self,
        input: GetScansInput,
    ) -> impl Future<Output = Result<Vec<Scan>, CoreError>> + Send;

    fn add_scan(
        &self,
        user_id: String,
        scan: NewScan,
    ) -> impl Future<Output = Result<Scan, CoreError>> + Send;

    fn get_stats(
        &self,
        user_id: String,
    ) -> impl Future<Output = Result<UserStats, CoreError>> + Send;
}
