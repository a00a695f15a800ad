//! Fuel metrics engine.
//!
//! Derives per-fill-up distance, economy and price per liter from the full
//! set of fuel entries, and aggregates dashboard statistics. Everything here
//! is a pure function of its input: no I/O, no shared state, no errors.
//! Degenerate arithmetic (zero or negative denominators, non-finite results)
//! leaves the dependent value out instead of producing `NaN` or infinity.

use crate::models::{DashboardStats, FuelEntry, TripEntry};

// ---------------------------------------------------------------------------
// Per-entry metrics
// ---------------------------------------------------------------------------

/// Recompute every derived field of every fuel entry.
///
/// Returns a new collection of the same size, sorted ascending by odometer
/// (stable, so entries sharing an odometer keep their input order). Derived
/// values already present on the input are ignored; only `odometer`,
/// `liters` and `total_price` are read.
///
/// For the entry at position `i` in odometer order:
///
/// * `price_per_liter` = `total_price / liters` when `liters > 0`.
/// * `distance` = `odometer[i] - odometer[i - 1]` for every entry but the first.
/// * `km_per_liter` = `(odometer[i + 1] - odometer[i]) / liters` when there is
///   a next entry, that distance is strictly positive and `liters > 0`. The
///   fuel bought at a fill-up is attributed to the distance driven until the
///   next one.
pub fn recalculate_fuel_metrics(entries: &[FuelEntry]) -> Vec<FuelEntry> {
    let mut sorted: Vec<FuelEntry> = entries.iter().map(FuelEntry::raw).collect();
    sorted.sort_by(|a, b| a.odometer.total_cmp(&b.odometer));

    let odometers: Vec<f64> = sorted.iter().map(|e| e.odometer).collect();

    for (i, entry) in sorted.iter_mut().enumerate() {
        let liters = entry.liters;

        entry.price_per_liter = if liters > 0.0 {
            finite(entry.total_price / liters)
        } else {
            None
        };

        entry.distance = if i > 0 {
            finite(odometers[i] - odometers[i - 1])
        } else {
            None
        };

        entry.km_per_liter = odometers
            .get(i + 1)
            .map(|next| next - odometers[i])
            .filter(|tank_distance| *tank_distance > 0.0 && liters > 0.0)
            .and_then(|tank_distance| finite(tank_distance / liters));
    }

    tracing::debug!(entries = sorted.len(), "recalculated fuel metrics");
    sorted
}

// ---------------------------------------------------------------------------
// Dashboard aggregation
// ---------------------------------------------------------------------------

/// Aggregate summary statistics over all fuel and trip entries.
///
/// `fuel_entries` should be the output of [`recalculate_fuel_metrics`] so
/// that `km_per_liter` is current; the odometer span does not depend on
/// input order. Empty collections yield [`DashboardStats::default()`].
/// A total that overflows to infinity is reported as 0.
pub fn compute_dashboard_stats(
    fuel_entries: &[FuelEntry],
    trip_entries: &[TripEntry],
) -> DashboardStats {
    let total_spent: f64 = fuel_entries.iter().map(|e| e.total_price).sum();
    let total_liters: f64 = fuel_entries.iter().map(|e| e.liters).sum();
    let total_earnings: f64 = trip_entries.iter().map(|t| t.earnings).sum();

    let economies: Vec<f64> = fuel_entries
        .iter()
        .filter_map(|e| e.km_per_liter)
        .filter(|kml| *kml > 0.0 && kml.is_finite())
        .collect();
    let avg_km_l = ratio(economies.iter().sum(), economies.len() as f64);

    let total_distance = odometer_span(fuel_entries).unwrap_or(0.0);

    DashboardStats {
        total_spent: finite(total_spent).unwrap_or(0.0),
        total_earnings: finite(total_earnings).unwrap_or(0.0),
        net_profit: finite(total_earnings - total_spent).unwrap_or(0.0),
        avg_price_per_liter: ratio(total_spent, total_liters),
        avg_km_l,
        cost_per_km: ratio(total_spent, total_distance),
    }
}

/// Distance between the lowest and highest odometer reading, or `None`
/// when there are no entries.
pub fn odometer_span(entries: &[FuelEntry]) -> Option<f64> {
    let (min, max) = odometer_bounds(entries)?;
    Some(max - min)
}

/// Lowest and highest odometer reading, or `None` when there are no entries.
pub fn odometer_bounds(entries: &[FuelEntry]) -> Option<(f64, f64)> {
    let mut iter = entries.iter().map(|e| e.odometer);
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), o| (lo.min(o), hi.max(o))))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// `numerator / denominator`, or 0 when the denominator is not positive or
/// the quotient is not finite.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        finite(numerator / denominator).unwrap_or(0.0)
    } else {
        0.0
    }
}
