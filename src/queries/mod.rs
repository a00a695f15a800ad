//! Query modules for the fuel control client.
//!
//! Each module provides a query struct that borrows from a
//! [`LogStore`](crate::store::LogStore) and reads its current, already
//! recomputed snapshot. Queries never mutate the store.

pub mod dashboard;
pub mod fuel;
pub mod history;
pub mod trips;

pub use dashboard::DashboardQuery;
pub use fuel::FuelQuery;
pub use history::HistoryQuery;
pub use trips::TripQuery;
