use std::{collections::BTreeMap, sync::Arc};

use chrono::{SecondsFormat, Utc};
use tracing::instrument;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{entities::Scan, ports::ScanRepository, value_objects::NewScan},
    },
    infrastructure::store::JsonFileStore,
};

type ScansDocument = BTreeMap<String, Vec<Scan>>;

/// Scan history keyed by user id in `scans.json`, most recent first.
#[derive(Debug, Clone)]
pub struct JsonScanRepository {
    store: Arc<JsonFileStore>,
}

impl JsonScanRepository {
    pub fn new(store: JsonFileStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl ScanRepository for JsonScanRepository {
    async fn get_scans(&self, user_id: String, limit: Option<usize>) -> Result<Vec<Scan>, CoreError> {
        let mut scans: ScansDocument = self.store.read().await?;
        let mut user_scans = scans.remove(&user_id).unwrap_or_default();

        if let Some(limit) = limit.filter(|limit| *limit > 0) {
            user_scans.truncate(limit);
        }

        Ok(user_scans)
    }

    #[instrument(skip(self, scan))]
    async fn add_scan(&self, user_id: String, scan: NewScan) -> Result<Scan, CoreError> {
        self.store
            .update(move |scans: &mut ScansDocument| {
                let user_scans = scans.entry(user_id.clone()).or_default();

                let scan = Scan {
                    id: scan
                        .id
                        .unwrap_or_else(|| format!("scan_{}_{}", user_id, user_scans.len())),
                    product_name: scan.product_name,
                    brand: scan.brand,
                    image: scan.image,
                    safety_score: scan.safety_score,
                    is_safe: scan.is_safe,
                    timestamp: scan
                        .timestamp
                        .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
                    ingredients: scan.ingredients,
                };
                user_scans.insert(0, scan.clone());

                Ok(scan)
            })
            .await
    }
}
