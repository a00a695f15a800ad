//! Entry store: validated mutations, persistence and change notification.
//!
//! Every successful mutation follows the same sequence: build the complete
//! replacement collection, persist it, swap it in, run one full
//! [`recalculate_fuel_metrics`] pass, then notify subscribers with the fresh
//! snapshot. If persisting fails the in-memory state is left untouched.

use crate::config;
use crate::error::{FuelControlError, Result};
use crate::metrics::{odometer_bounds, recalculate_fuel_metrics};
use crate::models::{FuelEntry, LogSnapshot, NewFuelEntry, NewTripEntry, TripEntry};
use crate::storage::LogStorage;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Handle returned by [`LogStore::subscribe`].
pub type SubscriptionId = u64;

type Subscriber = Box<dyn FnMut(&LogSnapshot) + Send>;

/// Owns the fuel and trip collections and keeps derived metrics current.
pub struct LogStore {
    storage: Box<dyn LogStorage>,
    snapshot: LogSnapshot,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: SubscriptionId,
}

impl LogStore {
    /// Load both collections from `storage` and compute fuel metrics.
    pub fn open(storage: Box<dyn LogStorage>) -> Result<Self> {
        let mut store = Self {
            storage,
            snapshot: LogSnapshot::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        store.snapshot = store.load_snapshot()?;
        Ok(store)
    }

    /// Current state: fuel entries in odometer order with derived fields,
    /// trips in insertion order.
    pub fn snapshot(&self) -> &LogSnapshot {
        &self.snapshot
    }

    pub fn fuel(&self) -> &[FuelEntry] {
        &self.snapshot.fuel
    }

    pub fn trips(&self) -> &[TripEntry] {
        &self.snapshot.trips
    }

    /// Highest fuel odometer, 0 when there are no fill-ups.
    pub fn last_odometer(&self) -> f64 {
        odometer_bounds(&self.snapshot.fuel)
            .map(|(_, max)| max)
            .unwrap_or(0.0)
    }

    // -- Mutations ---------------------------------------------------------

    /// Validate and record a new fill-up. Returns the stored entry with its
    /// derived fields as of this insert.
    pub fn add_fuel(&mut self, new: NewFuelEntry) -> Result<FuelEntry> {
        let current_max = odometer_bounds(&self.snapshot.fuel).map(|(_, max)| max);
        if let Err(e) = validate_fuel(&new, current_max) {
            tracing::warn!(error = %e, "rejected fuel entry");
            return Err(e);
        }

        let id = self.fresh_id();
        let mut entries = self.snapshot.fuel.clone();
        entries.push(FuelEntry::new(
            id.clone(),
            new.date,
            new.odometer,
            new.liters,
            new.total_price,
        ));
        self.commit_fuel(entries)?;
        tracing::info!(id = %id, odometer = new.odometer, "added fuel entry");

        self.snapshot
            .fuel
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| FuelControlError::NotFound(format!("Fuel entry {} vanished", id)))
    }

    /// Validate and record a new trip, stamping it with the current highest
    /// fuel odometer.
    pub fn add_trip(&mut self, new: NewTripEntry) -> Result<TripEntry> {
        if let Err(e) = validate_trip(&new) {
            tracing::warn!(error = %e, "rejected trip entry");
            return Err(e);
        }

        let trip = TripEntry {
            id: self.fresh_id(),
            date: new.date,
            distance: new.distance,
            earnings: new.earnings,
            odometer: Some(self.last_odometer()),
        };
        let mut trips = self.snapshot.trips.clone();
        trips.push(trip.clone());
        self.commit_trips(trips)?;
        tracing::info!(id = %trip.id, earnings = trip.earnings, "added trip entry");
        Ok(trip)
    }

    /// Delete a fill-up by id. Neighbouring entries get their metrics
    /// recomputed.
    pub fn delete_fuel(&mut self, id: &str) -> Result<()> {
        if !self.snapshot.fuel.iter().any(|e| e.id == id) {
            return Err(FuelControlError::NotFound(format!("Fuel entry {}", id)));
        }
        let entries: Vec<FuelEntry> = self
            .snapshot
            .fuel
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        self.commit_fuel(entries)?;
        tracing::info!(id = %id, "deleted fuel entry");
        Ok(())
    }

    pub fn delete_trip(&mut self, id: &str) -> Result<()> {
        if !self.snapshot.trips.iter().any(|t| t.id == id) {
            return Err(FuelControlError::NotFound(format!("Trip entry {}", id)));
        }
        let trips: Vec<TripEntry> = self
            .snapshot
            .trips
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        self.commit_trips(trips)?;
        tracing::info!(id = %id, "deleted trip entry");
        Ok(())
    }

    /// Re-read both collections from storage, e.g. after another writer
    /// changed them, and notify subscribers.
    pub fn reload(&mut self) -> Result<()> {
        self.snapshot = self.load_snapshot()?;
        self.notify();
        Ok(())
    }

    // -- Observers ---------------------------------------------------------

    /// Register a callback invoked with the fresh snapshot after every
    /// successful mutation or reload.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&LogSnapshot) + Send + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    // -- Internals ---------------------------------------------------------

    fn load_snapshot(&self) -> Result<LogSnapshot> {
        let fuel = self.storage.load_fuel()?;
        let trips = self.storage.load_trips()?;
        Ok(LogSnapshot {
            fuel: recalculate_fuel_metrics(&fuel),
            trips,
        })
    }

    fn commit_fuel(&mut self, entries: Vec<FuelEntry>) -> Result<()> {
        if let Err(e) = self.storage.save_fuel(&entries) {
            tracing::warn!(error = %e, "failed to persist fuel entries");
            return Err(e);
        }
        self.snapshot.fuel = recalculate_fuel_metrics(&entries);
        self.notify();
        Ok(())
    }

    fn commit_trips(&mut self, trips: Vec<TripEntry>) -> Result<()> {
        if let Err(e) = self.storage.save_trips(&trips) {
            tracing::warn!(error = %e, "failed to persist trip entries");
            return Err(e);
        }
        self.snapshot.trips = trips;
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.snapshot);
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            let taken = self.snapshot.fuel.iter().any(|e| e.id == id)
                || self.snapshot.trips.iter().any(|t| t.id == id);
            if !taken {
                return id;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check a fill-up before it is stored.
///
/// `current_max_odometer` is the highest odometer already recorded, or
/// `None` when there are no fill-ups yet.
pub fn validate_fuel(new: &NewFuelEntry, current_max_odometer: Option<f64>) -> Result<()> {
    require_finite("odometer", new.odometer)?;
    require_finite("liters", new.liters)?;
    require_finite("total price", new.total_price)?;

    if new.odometer < 0.0 {
        return Err(invalid("odometer must not be negative"));
    }
    if new.liters <= 0.0 {
        return Err(invalid("liters must be greater than zero"));
    }
    if new.total_price <= 0.0 {
        return Err(invalid("total price must be greater than zero"));
    }
    if let Some(max) = current_max_odometer {
        if new.odometer <= max {
            return Err(invalid(format!(
                "odometer must be greater than the last reading ({} km)",
                max
            )));
        }
    }
    Ok(())
}

/// Check a trip before it is stored.
pub fn validate_trip(new: &NewTripEntry) -> Result<()> {
    require_finite("distance", new.distance)?;
    require_finite("earnings", new.earnings)?;

    if new.distance < 0.0 {
        return Err(invalid("distance must not be negative"));
    }
    if new.earnings < 0.0 {
        return Err(invalid("earnings must not be negative"));
    }
    Ok(())
}

fn require_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{} must be a number", field)))
    }
}

fn invalid(msg: impl Into<String>) -> FuelControlError {
    FuelControlError::Validation(msg.into())
}

fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(config::ID_LENGTH)
        .map(char::from)
        .collect()
}
