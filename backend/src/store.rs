//! Session state container
//!
//! Holds the current `AppData` snapshot for the lifetime of the process.
//! There is no save step: restarting the server resets to the startup data.

use std::sync::{Arc, PoisonError, RwLock};

use shared::AppData;

/// Current snapshot of the dashboard data
#[derive(Debug, Default)]
pub struct AppStore {
    current: RwLock<Arc<AppData>>,
}

impl AppStore {
    pub fn new(data: AppData) -> Self {
        Self {
            current: RwLock::new(Arc::new(data)),
        }
    }

    /// Store initialised with the demo snapshot
    pub fn seeded() -> Self {
        Self::new(AppData::seed())
    }

    /// The current snapshot. Later mutations never change it.
    pub fn snapshot(&self) -> Arc<AppData> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*current)
    }

    /// Replace the snapshot with `mutation(current)`.
    ///
    /// Runs under the write lock, so mutations are applied one at a time.
    /// Returns whether the snapshot changed; a mutation that changes nothing
    /// leaves the previous `Arc` in place.
    pub fn update(&self, mutation: impl FnOnce(&AppData) -> AppData) -> bool {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = mutation(&**current);
        if AppData::ptr_eq(&**current, &next) {
            return false;
        }
        *current = Arc::new(next);
        true
    }
}
