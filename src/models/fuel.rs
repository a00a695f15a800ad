use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FuelEntry — One fill-up with its derived metrics
// ---------------------------------------------------------------------------

/// A single fuel fill-up.
///
/// `date`, `odometer`, `liters` and `total_price` are raw input. The three
/// `Option` fields are derived by
/// [`recalculate_fuel_metrics`](crate::metrics::recalculate_fuel_metrics)
/// from the whole collection and are `None` whenever they are not computable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelEntry {
    pub id: String,
    pub date: NaiveDate,
    pub odometer: f64,
    pub liters: f64,
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_liter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub km_per_liter: Option<f64>,
}

impl FuelEntry {
    /// Build an entry from raw fields. Derived fields start out empty.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        odometer: f64,
        liters: f64,
        total_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            odometer,
            liters,
            total_price,
            price_per_liter: None,
            distance: None,
            km_per_liter: None,
        }
    }

    /// Copy of this entry with every derived field cleared.
    pub fn raw(&self) -> Self {
        Self::new(
            self.id.clone(),
            self.date,
            self.odometer,
            self.liters,
            self.total_price,
        )
    }
}

// ---------------------------------------------------------------------------
// NewFuelEntry — Raw form input for a fill-up
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFuelEntry {
    pub date: NaiveDate,
    pub odometer: f64,
    pub liters: f64,
    pub total_price: f64,
}

// ---------------------------------------------------------------------------
// FuelPreview — Live values shown while a fill-up is being typed in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelPreview {
    pub price_per_liter: Option<f64>,
    pub distance: Option<f64>,
}
