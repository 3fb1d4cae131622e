//! Dashboard service
//!
//! Serves the dashboard aggregates, recomputing them only when the data
//! snapshot changes.

use std::sync::{Arc, Mutex, PoisonError};

use shared::{dashboard, AppData, DashboardSummary};

use crate::store::AppStore;

/// Last computed summary together with the snapshot it was computed from
type CachedSummary = Option<(Arc<AppData>, DashboardSummary)>;

/// Dashboard service
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<AppStore>,
    cache: Arc<Mutex<CachedSummary>>,
}

impl DashboardService {
    pub fn new(store: Arc<AppStore>) -> Self {
        Self {
            store,
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Stats, quality distribution and monthly volume for the current snapshot
    pub fn get_dashboard(&self) -> DashboardSummary {
        let data = self.store.snapshot();
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some((cached_for, summary)) = cache.as_ref() {
            if Arc::ptr_eq(cached_for, &data) {
                return summary.clone();
            }
        }

        tracing::debug!("Recomputing dashboard aggregates");
        let summary = dashboard(&data);
        *cache = Some((data, summary.clone()));
        summary
    }
}
