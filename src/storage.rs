//! Persistence backends for fuel and trip collections.
//!
//! A backend only ever sees raw fields: derived fuel metrics are stripped
//! before saving and recomputed after loading. Each collection is loaded and
//! saved as a whole.

use crate::config;
use crate::error::{FuelControlError, Result};
use crate::models::{FuelEntry, TripEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Storage seam used by [`LogStore`](crate::store::LogStore).
///
/// `save_*` receives the complete replacement collection. A failed save must
/// leave the previously stored collection intact.
pub trait LogStorage: Send {
    fn load_fuel(&self) -> Result<Vec<FuelEntry>>;
    fn load_trips(&self) -> Result<Vec<TripEntry>>;
    fn save_fuel(&mut self, entries: &[FuelEntry]) -> Result<()>;
    fn save_trips(&mut self, entries: &[TripEntry]) -> Result<()>;
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// Keeps both collections in memory. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    fuel: Vec<FuelEntry>,
    trips: Vec<TripEntry>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the storage with existing records.
    pub fn with_entries(fuel: Vec<FuelEntry>, trips: Vec<TripEntry>) -> Self {
        Self {
            fuel: fuel.iter().map(FuelEntry::raw).collect(),
            trips,
        }
    }
}

impl LogStorage for MemoryStorage {
    fn load_fuel(&self) -> Result<Vec<FuelEntry>> {
        Ok(self.fuel.clone())
    }

    fn load_trips(&self) -> Result<Vec<TripEntry>> {
        Ok(self.trips.clone())
    }

    fn save_fuel(&mut self, entries: &[FuelEntry]) -> Result<()> {
        self.fuel = entries.iter().map(FuelEntry::raw).collect();
        Ok(())
    }

    fn save_trips(&mut self, entries: &[TripEntry]) -> Result<()> {
        self.trips = entries.to_vec();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JsonFileStorage
// ---------------------------------------------------------------------------

/// Stores each collection as a JSON array under `<data_dir>/<profile>/`.
///
/// Writes go to a temp file in the same directory which is then renamed
/// over the target, so an interrupted write never leaves a truncated file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Open (creating if needed) the profile directory inside `data_dir`.
    ///
    /// The profile name must be a single, non-empty path component.
    pub fn new<P: AsRef<Path>>(data_dir: P, profile: &str) -> Result<Self> {
        let valid = !profile.is_empty()
            && profile != "."
            && profile != ".."
            && !profile.contains(['/', '\\']);
        if !valid {
            return Err(FuelControlError::InvalidArgument(format!(
                "Invalid profile name: {:?}",
                profile
            )));
        }

        let dir = data_dir.as_ref().join(profile);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding this profile's files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, filename: &str) -> Result<Vec<T>> {
        let path = self.dir.join(filename);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "unreadable log file");
            FuelControlError::from(e)
        })
    }

    fn write<T: Serialize>(&self, filename: &str, items: &[T]) -> Result<()> {
        let path = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut tmp, items)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path)
            .map_err(|e| FuelControlError::Io(e.error))?;
        Ok(())
    }
}

impl LogStorage for JsonFileStorage {
    fn load_fuel(&self) -> Result<Vec<FuelEntry>> {
        let entries: Vec<FuelEntry> = self.read(config::FUEL_LOGS_FILE)?;
        Ok(entries.iter().map(FuelEntry::raw).collect())
    }

    fn load_trips(&self) -> Result<Vec<TripEntry>> {
        self.read(config::TRIP_LOGS_FILE)
    }

    fn save_fuel(&mut self, entries: &[FuelEntry]) -> Result<()> {
        let raw: Vec<FuelEntry> = entries.iter().map(FuelEntry::raw).collect();
        self.write(config::FUEL_LOGS_FILE, &raw)
    }

    fn save_trips(&mut self, entries: &[TripEntry]) -> Result<()> {
        self.write(config::TRIP_LOGS_FILE, entries)
    }
}
