//! Dashboard statistics over the current snapshot.

use crate::metrics::compute_dashboard_stats;
use crate::models::DashboardStats;
use crate::store::LogStore;

pub struct DashboardQuery<'a> {
    store: &'a LogStore,
}

impl<'a> DashboardQuery<'a> {
    /// Create a new `DashboardQuery` bound to the given store.
    pub fn new(store: &'a LogStore) -> Self {
        Self { store }
    }

    /// Recompute the summary from the store's current fill-ups and trips.
    pub fn stats(&self) -> DashboardStats {
        compute_dashboard_stats(self.store.fuel(), self.store.trips())
    }
}
