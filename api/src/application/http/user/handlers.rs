pub mod add_scan;
pub mod get_preferences;
pub mod get_scans;
pub mod get_stats;
pub mod get_user;
pub mod update_preferences;
pub mod upsert_user;
