//! Fuel economy and ride earnings tracker.
//!
//! Records fuel fill-ups (odometer, liters, total price) and trips
//! (distance, earnings), and derives per-tank economy, price per liter and
//! dashboard statistics. Derived values are never stored: every change to
//! the fill-up collection triggers one full recomputation pass over the
//! whole collection.
//!
//! # Quick start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use fuel_control::models::NewFuelEntry;
//! use fuel_control::FuelControl;
//!
//! let mut app = FuelControl::builder().in_memory(true).build().unwrap();
//!
//! app.add_fuel(NewFuelEntry {
//!     date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
//!     odometer: 1000.0,
//!     liters: 40.0,
//!     total_price: 200.0,
//! })
//! .unwrap();
//!
//! let stats = app.dashboard().stats();
//! println!("{:.2} per km", stats.cost_per_km);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod queries;
pub mod storage;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncFuelControl;
pub use error::{FuelControlError, Result};
pub use metrics::{compute_dashboard_stats, recalculate_fuel_metrics};
pub use storage::{JsonFileStorage, LogStorage, MemoryStorage};
pub use store::{LogStore, SubscriptionId};

use models::{
    DashboardStats, FuelEntry, LogSnapshot, NewFuelEntry, NewTripEntry, TripEntry,
};
use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// FuelControlBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`FuelControl`] instance.
///
/// Use [`FuelControl::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](FuelControlBuilder::build) to open the store.
pub struct FuelControlBuilder {
    data_dir: Option<PathBuf>,
    profile: String,
    in_memory: bool,
    storage: Option<Box<dyn LogStorage>>,
}

impl Default for FuelControlBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            profile: config::DEFAULT_PROFILE.to_string(),
            in_memory: false,
            storage: None,
        }
    }
}

impl FuelControlBuilder {
    /// Set a custom data directory for the JSON file backend.
    ///
    /// If not set, the platform data directory is used (e.g.
    /// `~/.local/share/fuel-control` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep each user's logs apart. Defaults to `"default"`.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Keep everything in memory; nothing is written to disk.
    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Use a custom storage backend. Takes precedence over the other
    /// storage options.
    pub fn storage(mut self, storage: Box<dyn LogStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Open the storage, load existing entries and compute their metrics.
    pub fn build(self) -> Result<FuelControl> {
        let storage: Box<dyn LogStorage> = match self.storage {
            Some(storage) => storage,
            None if self.in_memory => Box::new(MemoryStorage::new()),
            None => {
                let dir = self.data_dir.unwrap_or_else(config::default_data_dir);
                Box::new(JsonFileStorage::new(dir, &self.profile)?)
            }
        };
        let store = LogStore::open(storage)?;
        tracing::debug!(
            profile = %self.profile,
            fuel = store.fuel().len(),
            trips = store.trips().len(),
            "opened log store"
        );
        Ok(FuelControl {
            store,
            profile: self.profile,
        })
    }
}

// ---------------------------------------------------------------------------
// FuelControl
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Wraps a [`LogStore`] and exposes mutations plus read-only query
/// interfaces as lightweight borrowing wrappers.
///
/// Created via [`FuelControl::builder()`].
pub struct FuelControl {
    store: LogStore,
    profile: String,
}

impl FuelControl {
    /// Create a new builder.
    pub fn builder() -> FuelControlBuilder {
        FuelControlBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the fill-up query interface.
    pub fn fuel(&self) -> queries::fuel::FuelQuery<'_> {
        queries::fuel::FuelQuery::new(&self.store)
    }

    /// Access the trip query interface.
    pub fn trips(&self) -> queries::trips::TripQuery<'_> {
        queries::trips::TripQuery::new(&self.store)
    }

    /// Access the combined history, ordered by date.
    pub fn history(&self) -> queries::history::HistoryQuery<'_> {
        queries::history::HistoryQuery::new(&self.store)
    }

    /// Access the dashboard statistics.
    pub fn dashboard(&self) -> queries::dashboard::DashboardQuery<'_> {
        queries::dashboard::DashboardQuery::new(&self.store)
    }

    // -- Mutations ---------------------------------------------------------

    /// Record a fill-up. See [`LogStore::add_fuel`].
    pub fn add_fuel(&mut self, entry: NewFuelEntry) -> Result<FuelEntry> {
        self.store.add_fuel(entry)
    }

    /// Record a trip. See [`LogStore::add_trip`].
    pub fn add_trip(&mut self, entry: NewTripEntry) -> Result<TripEntry> {
        self.store.add_trip(entry)
    }

    pub fn delete_fuel(&mut self, id: &str) -> Result<()> {
        self.store.delete_fuel(id)
    }

    pub fn delete_trip(&mut self, id: &str) -> Result<()> {
        self.store.delete_trip(id)
    }

    /// Re-read entries from storage and recompute.
    pub fn reload(&mut self) -> Result<()> {
        self.store.reload()
    }

    /// Register a callback invoked with the fresh snapshot after every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&LogSnapshot) + Send + 'static,
    {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    // -- Snapshot ------------------------------------------------------------

    /// Current fill-ups (recomputed) and trips.
    pub fn snapshot(&self) -> &LogSnapshot {
        self.store.snapshot()
    }

    /// Shorthand for `self.dashboard().stats()`.
    pub fn stats(&self) -> DashboardStats {
        self.dashboard().stats()
    }

    /// Name of the profile this client was opened with.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Return a reference to the underlying [`LogStore`].
    pub fn store(&self) -> &LogStore {
        &self.store
    }

    /// Return a mutable reference to the underlying [`LogStore`].
    pub fn store_mut(&mut self) -> &mut LogStore {
        &mut self.store
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for FuelControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FuelControl(profile={}, fuel_entries={}, trip_entries={})",
            self.profile,
            self.store.fuel().len(),
            self.store.trips().len()
        )
    }
}
