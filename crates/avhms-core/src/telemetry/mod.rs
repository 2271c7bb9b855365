//! Telemetry Data Model
//!
//! Snapshot records produced by the simulated telemetry stream, in the same
//! wire shape the dashboard host consumes.

pub mod alerts;
mod generator;

pub use alerts::{evaluate_alerts, AlertCode};
pub use generator::TelemetryGenerator;

use serde::{Deserialize, Serialize};

/// Telemetry link between vehicle and dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionType {
    /// Direct local link
    Local,
    /// Cellular uplink
    #[serde(rename = "GSM")]
    Gsm,
    /// Satellite uplink
    Satellite,
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionType::Local => write!(f, "Local"),
            ConnectionType::Gsm => write!(f, "GSM"),
            ConnectionType::Satellite => write!(f, "Satellite"),
        }
    }
}

/// The five monitored sensor channels of one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Engine temperature (°C)
    pub engine_temp: f64,
    /// Battery voltage (V)
    #[serde(rename = "batteryV")]
    pub battery_v: f64,
    /// Tire pressure (PSI)
    #[serde(rename = "tirePSI")]
    pub tire_psi: f64,
    /// Fuel level (%), always within [0, 100]
    pub fuel_pct: f64,
    /// Armor integrity (%), always within [0, 100]
    pub armor_integrity: f64,
}

impl Metrics {
    /// Get a channel value by channel tag
    pub fn channel(&self, channel: TelemetryChannel) -> f64 {
        match channel {
            TelemetryChannel::EngineTemp => self.engine_temp,
            TelemetryChannel::BatteryV => self.battery_v,
            TelemetryChannel::TirePsi => self.tire_psi,
            TelemetryChannel::FuelPct => self.fuel_pct,
            TelemetryChannel::ArmorIntegrity => self.armor_integrity,
        }
    }
}

/// One immutable telemetry snapshot
///
/// Created by [`TelemetryGenerator::sample`], stored by the history buffer,
/// read by the display layer. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Vehicle identifier as entered in the dashboard sidebar
    #[serde(rename = "vehicleId")]
    pub vehicle_id: String,
    /// Capture time, UTC ISO-8601
    pub ts: String,
    /// Sensor channel values
    pub metrics: Metrics,
    /// Alert codes in evaluation order; empty when nominal
    pub alerts: Vec<AlertCode>,
    /// Telemetry link the snapshot arrived over
    pub conn: ConnectionType,
}

/// Identifies one of the five telemetry channels
///
/// Used by metric cards and trend extraction to address channels uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TelemetryChannel {
    /// Engine temperature
    EngineTemp,
    /// Battery voltage
    #[serde(rename = "batteryV")]
    BatteryV,
    /// Tire pressure
    #[serde(rename = "tirePSI")]
    TirePsi,
    /// Fuel level
    FuelPct,
    /// Armor integrity
    ArmorIntegrity,
}

impl TelemetryChannel {
    /// All channels in card-row display order
    pub const ALL: [TelemetryChannel; 5] = [
        TelemetryChannel::EngineTemp,
        TelemetryChannel::BatteryV,
        TelemetryChannel::TirePsi,
        TelemetryChannel::FuelPct,
        TelemetryChannel::ArmorIntegrity,
    ];

    /// Human-readable card label
    pub fn label(&self) -> &'static str {
        match self {
            TelemetryChannel::EngineTemp => "Engine Temperature",
            TelemetryChannel::BatteryV => "Battery Voltage",
            TelemetryChannel::TirePsi => "Tire Pressure",
            TelemetryChannel::FuelPct => "Fuel Level",
            TelemetryChannel::ArmorIntegrity => "Armor Integrity",
        }
    }

    /// Display units
    pub fn units(&self) -> &'static str {
        match self {
            TelemetryChannel::EngineTemp => "°C",
            TelemetryChannel::BatteryV => "V",
            TelemetryChannel::TirePsi => "PSI",
            TelemetryChannel::FuelPct => "%",
            TelemetryChannel::ArmorIntegrity => "%",
        }
    }
}
