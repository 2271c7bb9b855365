//! Alert evaluation
//!
//! Threshold rules applied to every generated snapshot. Rules are independent
//! and evaluated in a fixed order; any subset may fire.

use serde::{Deserialize, Serialize};

use super::Metrics;

/// Engine temperature above this fires [`AlertCode::EngineOvertemp`] (°C)
pub const ENGINE_OVERTEMP_C: f64 = 110.0;
/// Battery voltage below this fires [`AlertCode::LowBattery`] (V)
pub const LOW_BATTERY_V: f64 = 11.8;
/// Fuel level below this fires [`AlertCode::LowFuel`] (%)
pub const LOW_FUEL_PCT: f64 = 15.0;
/// Armor integrity below this fires [`AlertCode::ArmorImpact`] (%)
pub const ARMOR_IMPACT_PCT: f64 = 80.0;

/// Symbolic code signaling a threshold breach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertCode {
    /// Engine temperature exceeded the overtemp limit
    #[serde(rename = "ENGINE_OVERTEMP")]
    EngineOvertemp,
    /// Battery voltage dropped below the charging floor
    #[serde(rename = "LOW_BATTERY")]
    LowBattery,
    /// Fuel reserve is nearly exhausted
    #[serde(rename = "LOW_FUEL")]
    LowFuel,
    /// Armor integrity dropped enough to indicate an impact
    #[serde(rename = "ARMOR_IMPACT")]
    ArmorImpact,
}

impl AlertCode {
    /// Wire-format code string
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCode::EngineOvertemp => "ENGINE_OVERTEMP",
            AlertCode::LowBattery => "LOW_BATTERY",
            AlertCode::LowFuel => "LOW_FUEL",
            AlertCode::ArmorImpact => "ARMOR_IMPACT",
        }
    }
}

impl std::fmt::Display for AlertCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluate all threshold rules against one set of metrics
///
/// Returns the codes that fired, in evaluation order.
pub fn evaluate_alerts(metrics: &Metrics) -> Vec<AlertCode> {
    let mut alerts = Vec::new();

    if metrics.engine_temp > ENGINE_OVERTEMP_C {
        alerts.push(AlertCode::EngineOvertemp);
    }
    if metrics.battery_v < LOW_BATTERY_V {
        alerts.push(AlertCode::LowBattery);
    }
    if metrics.fuel_pct < LOW_FUEL_PCT {
        alerts.push(AlertCode::LowFuel);
    }
    if metrics.armor_integrity < ARMOR_IMPACT_PCT {
        alerts.push(AlertCode::ArmorImpact);
    }

    alerts
}
