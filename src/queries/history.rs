//! Combined fill-up and trip history, ordered for display.
//!
//! History is ordered by calendar date while fuel metrics are ordered by
//! odometer. A backdated fill-up therefore shows up by its date here even
//! though its metrics follow its odometer position.

use crate::models::LogRecord;
use crate::store::LogStore;

// ---------------------------------------------------------------------------
// HistoryQuery
// ---------------------------------------------------------------------------

pub struct HistoryQuery<'a> {
    store: &'a LogStore,
}

impl<'a> HistoryQuery<'a> {
    /// Create a new `HistoryQuery` bound to the given store.
    pub fn new(store: &'a LogStore) -> Self {
        Self { store }
    }

    /// Every fill-up and trip, newest date first. Records on the same date
    /// are ordered by odometer, highest first.
    pub fn list(&self) -> Vec<LogRecord> {
        let mut records: Vec<LogRecord> = self
            .store
            .fuel()
            .iter()
            .cloned()
            .map(LogRecord::Fuel)
            .chain(self.store.trips().iter().cloned().map(LogRecord::Trip))
            .collect();

        records.sort_by(|a, b| {
            b.date()
                .cmp(&a.date())
                .then_with(|| b.odometer().total_cmp(&a.odometer()))
        });
        records
    }

    /// Same as [`list`](Self::list), truncated to the `limit` most recent
    /// records.
    pub fn recent(&self, limit: usize) -> Vec<LogRecord> {
        let mut records = self.list();
        records.truncate(limit);
        records
    }

    pub fn is_empty(&self) -> bool {
        self.store.fuel().is_empty() && self.store.trips().is_empty()
    }
}
