//! Query interface tests: fill-up preview, trip context and history order.

mod common;

use common::{assert_close, date, memory_client, new_fuel, new_trip};
use fuel_control::models::LogRecord;

// ---------------------------------------------------------------------------
// FuelQuery
// ---------------------------------------------------------------------------

#[test]
fn odometer_bounds_default_to_zero() {
    let app = memory_client();
    assert_eq!(app.fuel().last_odometer(), 0.0);
    assert_eq!(app.fuel().first_odometer(), 0.0);
}

#[test]
fn preview_needs_a_previous_reading_for_distance() {
    let mut app = memory_client();
    let preview = app.fuel().preview(1000.0, 40.0, 200.0);
    assert_close(preview.price_per_liter.unwrap(), 5.0);
    assert_eq!(preview.distance, None);

    app.add_fuel(new_fuel(1, 1000.0, 40.0, 200.0)).unwrap();
    let preview = app.fuel().preview(1250.5, 0.0, 200.0);
    assert_eq!(preview.price_per_liter, None);
    assert_close(preview.distance.unwrap(), 250.5);

    assert_eq!(app.fuel().preview(900.0, 1.0, 1.0).distance, None);
}

#[test]
fn get_returns_entry_with_derived_fields() {
    let mut app = memory_client();
    let a = app.add_fuel(new_fuel(1, 1000.0, 40.0, 200.0)).unwrap();
    app.add_fuel(new_fuel(2, 1200.0, 20.0, 100.0)).unwrap();

    assert_eq!(app.fuel().get(&a.id).unwrap().km_per_liter, Some(5.0));
    assert!(app.fuel().get("missing").is_none());
}

// ---------------------------------------------------------------------------
// TripQuery
// ---------------------------------------------------------------------------

#[test]
fn distance_since_last_trip_without_trips_is_fuel_span() {
    let mut app = memory_client();
    app.add_fuel(new_fuel(1, 1000.0, 40.0, 200.0)).unwrap();
    app.add_fuel(new_fuel(2, 1300.0, 40.0, 200.0)).unwrap();

    assert_eq!(app.trips().last_trip_odometer(), 0.0);
    assert_close(app.trips().distance_since_last_trip(), 300.0);
}

#[test]
fn distance_since_last_trip_uses_trip_snapshot() {
    let mut app = memory_client();
    app.add_fuel(new_fuel(1, 1000.0, 40.0, 200.0)).unwrap();
    app.add_fuel(new_fuel(2, 1300.0, 40.0, 200.0)).unwrap();
    app.add_trip(new_trip(3, 300.0, 450.0)).unwrap();
    assert_eq!(app.trips().distance_since_last_trip(), 0.0);

    app.add_fuel(new_fuel(4, 1525.0, 40.0, 200.0)).unwrap();
    assert_close(app.trips().last_trip_odometer(), 1300.0);
    assert_close(app.trips().distance_since_last_trip(), 225.0);
}

#[test]
fn trip_logged_before_any_fill_up_is_ignored() {
    let mut app = memory_client();
    let early = app.add_trip(new_trip(1, 15.0, 40.0)).unwrap();
    assert_eq!(early.odometer, Some(0.0));

    app.add_fuel(new_fuel(2, 2000.0, 40.0, 200.0)).unwrap();
    app.add_fuel(new_fuel(3, 2350.0, 40.0, 200.0)).unwrap();

    assert_eq!(app.trips().last_trip_odometer(), 0.0);
    assert_close(app.trips().distance_since_last_trip(), 350.0);
}

#[test]
fn nothing_logged_means_no_distance() {
    let app = memory_client();
    assert_eq!(app.trips().distance_since_last_trip(), 0.0);
}

#[test]
fn trips_are_listed_newest_first() {
    let mut app = memory_client();
    app.add_trip(new_trip(3, 10.0, 30.0)).unwrap();
    app.add_trip(new_trip(9, 10.0, 90.0)).unwrap();
    app.add_trip(new_trip(5, 10.0, 50.0)).unwrap();

    let earnings: Vec<f64> = app.trips().list().iter().map(|t| t.earnings).collect();
    assert_eq!(earnings, [90.0, 50.0, 30.0]);
}

// ---------------------------------------------------------------------------
// HistoryQuery
// ---------------------------------------------------------------------------

#[test]
fn history_orders_by_date_then_odometer() {
    let mut app = memory_client();
    assert!(app.history().is_empty());

    app.add_fuel(new_fuel(1, 1000.0, 40.0, 200.0)).unwrap();
    app.add_fuel(new_fuel(10, 1400.0, 40.0, 200.0)).unwrap();
    app.add_trip(new_trip(10, 400.0, 500.0)).unwrap();
    app.add_trip(new_trip(4, 50.0, 60.0)).unwrap();

    let history = app.history().list();
    let dates: Vec<_> = history.iter().map(|r| r.date()).collect();
    assert_eq!(
        dates,
        [date(2024, 2, 10), date(2024, 2, 10), date(2024, 2, 4), date(2024, 2, 1)]
    );
    // same date: fill-up at 1400 and trip stamped at 1400 tie, insertion order kept
    assert!(history[0].is_fuel());
    assert!(matches!(history[1], LogRecord::Trip(_)));
    assert!(matches!(history[2], LogRecord::Trip(_)));

    assert_eq!(app.history().recent(2).len(), 2);
}

#[test]
fn backdated_fill_up_keeps_odometer_metrics() {
    let mut app = memory_client();
    app.add_fuel(new_fuel(20, 1000.0, 40.0, 200.0)).unwrap();
    app.add_fuel(new_fuel(5, 1400.0, 40.0, 200.0)).unwrap();

    // metrics follow odometer order
    assert_eq!(app.fuel().list()[0].km_per_liter, Some(10.0));
    // history follows date order
    assert_eq!(app.history().list()[0].odometer(), 1000.0);
}

#[test]
fn log_record_serializes_with_type_tag() {
    let mut app = memory_client();
    app.add_trip(new_trip(1, 10.0, 20.0)).unwrap();

    let json = serde_json::to_value(&app.history().list()[0]).unwrap();
    assert_eq!(json["type"], "trip");
    assert_eq!(json["date"], "2024-02-01");
    assert_eq!(json["odometer"], 0.0);
}
