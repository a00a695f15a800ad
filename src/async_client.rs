//! Async wrapper around [`FuelControl`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the file backend reads and writes.
//!
//! # Example
//!
//! ```no_run
//! use fuel_control::AsyncFuelControl;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let app = AsyncFuelControl::builder().build().await.unwrap();
//!
//!     // Run any sync method via closure
//!     let last = app.run(|c| Ok(c.fuel().last_odometer())).await.unwrap();
//!
//!     let stats = app.stats().await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config;
use crate::error::{FuelControlError, Result};
use crate::models::{DashboardStats, FuelEntry, NewFuelEntry, NewTripEntry, TripEntry};
use crate::FuelControl;

// ---------------------------------------------------------------------------
// AsyncFuelControlBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncFuelControl`] instance.
pub struct AsyncFuelControlBuilder {
    data_dir: Option<PathBuf>,
    profile: String,
    in_memory: bool,
}

impl Default for AsyncFuelControlBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            profile: config::DEFAULT_PROFILE.to_string(),
            in_memory: false,
        }
    }
}

impl AsyncFuelControlBuilder {
    /// Set a custom data directory.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Keep everything in memory.
    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Build the client. Loading runs on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncFuelControl> {
        tokio::task::spawn_blocking(move || {
            let mut builder = FuelControl::builder()
                .profile(self.profile)
                .in_memory(self.in_memory);
            if let Some(dir) = self.data_dir {
                builder = builder.data_dir(dir);
            }
            let inner = builder.build()?;
            Ok(AsyncFuelControl {
                inner: Arc::new(Mutex::new(inner)),
            })
        })
        .await
        .map_err(|e| FuelControlError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncFuelControl
// ---------------------------------------------------------------------------

/// Async wrapper around [`FuelControl`].
///
/// The inner client sits behind a [`Mutex`], which also serializes
/// mutations so each recompute pass sees a complete collection.
#[derive(Clone)]
pub struct AsyncFuelControl {
    inner: Arc<Mutex<FuelControl>>,
}

impl AsyncFuelControl {
    /// Create a new builder for configuring the async client.
    pub fn builder() -> AsyncFuelControlBuilder {
        AsyncFuelControlBuilder::default()
    }

    /// Run a sync operation on the blocking thread pool.
    ///
    /// The closure receives a `&mut FuelControl` and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut FuelControl) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let inner = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = inner
                .lock()
                .map_err(|_| FuelControlError::InvalidArgument("client lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| FuelControlError::InvalidArgument(format!("Task join error: {e}")))?
    }

    pub async fn add_fuel(&self, entry: NewFuelEntry) -> Result<FuelEntry> {
        self.run(move |c| c.add_fuel(entry)).await
    }

    pub async fn add_trip(&self, entry: NewTripEntry) -> Result<TripEntry> {
        self.run(move |c| c.add_trip(entry)).await
    }

    pub async fn delete_fuel(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.run(move |c| c.delete_fuel(&id)).await
    }

    pub async fn delete_trip(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.run(move |c| c.delete_trip(&id)).await
    }

    /// Current dashboard statistics.
    pub async fn stats(&self) -> Result<DashboardStats> {
        self.run(|c| Ok(c.stats())).await
    }
}
