//! Async wrapper tests. Run with `--features async`.

#![cfg(feature = "async")]

mod common;

use common::{assert_close, new_fuel, new_trip};
use fuel_control::AsyncFuelControl;

#[tokio::test]
async fn async_client_mutates_and_reports_stats() {
    let app = AsyncFuelControl::builder().in_memory(true).build().await.unwrap();

    app.add_fuel(new_fuel(1, 1000.0, 40.0, 200.0)).await.unwrap();
    let second = app.add_fuel(new_fuel(2, 1400.0, 35.0, 200.0)).await.unwrap();
    app.add_trip(new_trip(3, 400.0, 600.0)).await.unwrap();

    let stats = app.stats().await.unwrap();
    assert_close(stats.cost_per_km, 1.0);
    assert_close(stats.net_profit, 200.0);

    app.delete_fuel(&second.id).await.unwrap();
    let count = app.run(|c| Ok(c.fuel().count())).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn async_client_propagates_not_found() {
    let app = AsyncFuelControl::builder().in_memory(true).build().await.unwrap();
    assert!(app.delete_trip("missing").await.is_err());
}
