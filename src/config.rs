use std::path::PathBuf;

pub const FUEL_LOGS_FILE: &str = "fuel_logs.json";
pub const TRIP_LOGS_FILE: &str = "trip_logs.json";

/// Profile used when the builder is not given one.
pub const DEFAULT_PROFILE: &str = "default";

/// Length of generated entry ids.
pub const ID_LENGTH: usize = 20;

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("fuel-control")
    } else {
        PathBuf::from(".fuel-control-data")
    }
}
