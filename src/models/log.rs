use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::fuel::FuelEntry;
use super::trip::TripEntry;

// ---------------------------------------------------------------------------
// LogRecord — Either kind of entry, for the combined history listing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LogRecord {
    Fuel(FuelEntry),
    Trip(TripEntry),
}

impl LogRecord {
    pub fn id(&self) -> &str {
        match self {
            LogRecord::Fuel(f) => &f.id,
            LogRecord::Trip(t) => &t.id,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            LogRecord::Fuel(f) => f.date,
            LogRecord::Trip(t) => t.date,
        }
    }

    /// Odometer used to break ties between records on the same date.
    /// Trips without a snapshot count as 0.
    pub fn odometer(&self) -> f64 {
        match self {
            LogRecord::Fuel(f) => f.odometer,
            LogRecord::Trip(t) => t.odometer.unwrap_or(0.0),
        }
    }

    pub fn is_fuel(&self) -> bool {
        matches!(self, LogRecord::Fuel(_))
    }
}

// ---------------------------------------------------------------------------
// LogSnapshot — Full, recomputed state handed to observers
// ---------------------------------------------------------------------------

/// The complete current state of a store.
///
/// `fuel` is sorted by odometer with derived fields populated; `trips` are
/// kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSnapshot {
    pub fuel: Vec<FuelEntry>,
    pub trips: Vec<TripEntry>,
}
