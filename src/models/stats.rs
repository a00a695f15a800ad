use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DashboardStats — Aggregated summary over fuel and trip entries
// ---------------------------------------------------------------------------

/// Summary figures shown on the dashboard.
///
/// Always derived from the current collections, never persisted. The
/// `Default` value is the all-zero record returned for empty collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_spent: f64,
    pub total_earnings: f64,
    pub net_profit: f64,
    pub avg_price_per_liter: f64,
    pub avg_km_l: f64,
    pub cost_per_km: f64,
}
