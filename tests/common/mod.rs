//! Shared test fixtures for the fuel control integration tests.
//!
//! Provides sample fill-ups and trips, plus helpers that open an in-memory
//! client or a client backed by a temporary data directory.

#![allow(dead_code)]

use chrono::NaiveDate;
use fuel_control::models::{FuelEntry, NewFuelEntry, NewTripEntry, TripEntry};
use fuel_control::FuelControl;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn fuel(id: &str, odometer: f64, liters: f64, total_price: f64) -> FuelEntry {
    FuelEntry::new(id, date(2024, 1, 1), odometer, liters, total_price)
}

pub fn trip(id: &str, earnings: f64) -> TripEntry {
    TripEntry {
        id: id.to_string(),
        date: date(2024, 1, 2),
        distance: 80.0,
        earnings,
        odometer: None,
    }
}

pub fn new_fuel(day: u32, odometer: f64, liters: f64, total_price: f64) -> NewFuelEntry {
    NewFuelEntry {
        date: date(2024, 2, day),
        odometer,
        liters,
        total_price,
    }
}

pub fn new_trip(day: u32, distance: f64, earnings: f64) -> NewTripEntry {
    NewTripEntry {
        date: date(2024, 2, day),
        distance,
        earnings,
    }
}

/// Four fill-ups spanning 1000 km → 2200 km, deliberately out of order.
pub fn sample_fuel() -> Vec<FuelEntry> {
    vec![
        fuel("f3", 1800.0, 36.0, 198.0),
        fuel("f1", 1000.0, 40.0, 200.0),
        fuel("f4", 2200.0, 30.0, 168.0),
        fuel("f2", 1400.0, 35.0, 180.0),
    ]
}

/// An in-memory client with no entries.
pub fn memory_client() -> FuelControl {
    FuelControl::builder().in_memory(true).build().unwrap()
}

/// A client backed by a temp directory. Keep the `TempDir` alive for the
/// duration of the test.
pub fn file_client() -> (FuelControl, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let client = FuelControl::builder()
        .data_dir(tmp.path())
        .profile("tester")
        .build()
        .unwrap();
    (client, tmp)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
