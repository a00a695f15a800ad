//! Trip queries and the odometer context used to prefill new trips.

use crate::metrics::odometer_bounds;
use crate::models::TripEntry;
use crate::store::LogStore;

// ---------------------------------------------------------------------------
// TripQuery
// ---------------------------------------------------------------------------

/// Query interface for logged trips.
pub struct TripQuery<'a> {
    store: &'a LogStore,
}

impl<'a> TripQuery<'a> {
    /// Create a new `TripQuery` bound to the given store.
    pub fn new(store: &'a LogStore) -> Self {
        Self { store }
    }

    /// All trips, most recent date first.
    pub fn list(&self) -> Vec<&'a TripEntry> {
        let mut trips: Vec<&TripEntry> = self.store.trips().iter().collect();
        trips.sort_by(|a, b| b.date.cmp(&a.date));
        trips
    }

    pub fn get(&self, id: &str) -> Option<&'a TripEntry> {
        self.store.trips().iter().find(|t| t.id == id)
    }

    pub fn count(&self) -> usize {
        self.store.trips().len()
    }

    /// Highest odometer snapshot among trips. Trips stamped with 0 (logged
    /// before any fill-up) or without a snapshot are ignored.
    pub fn last_trip_odometer(&self) -> f64 {
        self.store
            .trips()
            .iter()
            .filter_map(|t| t.odometer)
            .filter(|o| *o != 0.0 && !o.is_nan())
            .max_by(f64::total_cmp)
            .unwrap_or(0.0)
    }

    /// Kilometers driven since the last trip was logged.
    ///
    /// Used to prefill the distance of a new trip. With no trip snapshot yet,
    /// this is the whole span covered by the fill-ups.
    pub fn distance_since_last_trip(&self) -> f64 {
        let fuel = self.store.fuel();
        let last_odometer = self.store.last_odometer();
        let last_trip = self.last_trip_odometer();

        if last_odometer > 0.0 && last_trip > 0.0 && last_odometer > last_trip {
            return last_odometer - last_trip;
        }
        if last_odometer > 0.0 && last_trip == 0.0 {
            if let Some((first, _)) = odometer_bounds(fuel) {
                return last_odometer - first;
            }
        }
        0.0
    }
}
