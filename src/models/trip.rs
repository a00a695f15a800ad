use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TripEntry — One earnings event
// ---------------------------------------------------------------------------

/// A logged trip.
///
/// `odometer` is a snapshot of the highest fuel odometer at the moment the
/// trip was created. It is stamped once and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripEntry {
    pub id: String,
    pub date: NaiveDate,
    pub distance: f64,
    pub earnings: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer: Option<f64>,
}

// ---------------------------------------------------------------------------
// NewTripEntry — Raw form input for a trip
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTripEntry {
    pub date: NaiveDate,
    pub distance: f64,
    pub earnings: f64,
}
