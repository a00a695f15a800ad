//! Fill-up queries against the store's recomputed fuel collection.

use crate::metrics::odometer_bounds;
use crate::models::{FuelEntry, FuelPreview};
use crate::store::LogStore;

// ---------------------------------------------------------------------------
// FuelQuery
// ---------------------------------------------------------------------------

/// Query interface for fuel fill-ups.
pub struct FuelQuery<'a> {
    store: &'a LogStore,
}

impl<'a> FuelQuery<'a> {
    /// Create a new `FuelQuery` bound to the given store.
    pub fn new(store: &'a LogStore) -> Self {
        Self { store }
    }

    /// All fill-ups in ascending odometer order, derived fields populated.
    pub fn list(&self) -> &'a [FuelEntry] {
        self.store.fuel()
    }

    /// Look up a single fill-up by id.
    pub fn get(&self, id: &str) -> Option<&'a FuelEntry> {
        self.store.fuel().iter().find(|e| e.id == id)
    }

    pub fn count(&self) -> usize {
        self.store.fuel().len()
    }

    /// Highest odometer reading, 0 if nothing has been logged.
    pub fn last_odometer(&self) -> f64 {
        self.store.last_odometer()
    }

    /// Lowest odometer reading, 0 if nothing has been logged.
    pub fn first_odometer(&self) -> f64 {
        odometer_bounds(self.store.fuel())
            .map(|(min, _)| min)
            .unwrap_or(0.0)
    }

    /// Values to show next to a fill-up form before it is submitted.
    ///
    /// Price per liter appears once both liters and price are positive.
    /// Distance appears once the typed odometer is past a non-zero last
    /// reading.
    pub fn preview(&self, odometer: f64, liters: f64, total_price: f64) -> FuelPreview {
        let price_per_liter = (liters > 0.0 && total_price > 0.0)
            .then(|| total_price / liters)
            .filter(|p| p.is_finite());

        let last = self.last_odometer();
        let distance = (last > 0.0 && odometer > last)
            .then(|| odometer - last)
            .filter(|d| d.is_finite());

        FuelPreview {
            price_per_liter,
            distance,
        }
    }
}
