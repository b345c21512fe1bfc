use std::sync::Arc;

use healthscan_core::application::HealthScanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HealthScanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HealthScanService) -> Self {
        Self { args, service }
    }
}
