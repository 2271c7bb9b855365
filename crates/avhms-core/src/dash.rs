//! Dashboard Module
//!
//! Display metadata for the dashboard host: the KPI card row, the trend-chart
//! channel set, and the status-banner summary. The host renders these; this
//! module only describes them.

use serde::{Deserialize, Serialize};

use crate::telemetry::alerts::{ARMOR_IMPACT_PCT, ENGINE_OVERTEMP_C, LOW_BATTERY_V, LOW_FUEL_PCT};
use crate::telemetry::{AlertCode, ConnectionType, Reading, TelemetryChannel};

/// Number of history points plotted on the trend chart
pub const TREND_WINDOW: usize = 50;

/// Configuration for a single metric card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    /// Channel the card displays
    pub channel: TelemetryChannel,
    /// Card title
    pub label: String,
    /// Display units
    pub units: String,
    /// Display precision
    pub decimals: u32,
    /// Value below this is flagged by the host
    pub low_warning: Option<f64>,
    /// Value above this is flagged by the host
    pub high_warning: Option<f64>,
    /// Render an additional progress bar (percent channels)
    pub show_progress: bool,
}

impl MetricCard {
    /// Card for a channel with its standard label and units
    pub fn for_channel(channel: TelemetryChannel) -> Self {
        let (low_warning, high_warning, show_progress) = match channel {
            TelemetryChannel::EngineTemp => (None, Some(ENGINE_OVERTEMP_C), false),
            TelemetryChannel::BatteryV => (Some(LOW_BATTERY_V), None, false),
            TelemetryChannel::TirePsi => (None, None, false),
            TelemetryChannel::FuelPct => (Some(LOW_FUEL_PCT), None, true),
            TelemetryChannel::ArmorIntegrity => (Some(ARMOR_IMPACT_PCT), None, true),
        };

        Self {
            channel,
            label: channel.label().to_string(),
            units: channel.units().to_string(),
            decimals: 2,
            low_warning,
            high_warning,
            show_progress,
        }
    }
}

/// Complete dashboard layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    /// Layout name
    pub name: String,
    /// KPI card row, in display order
    pub cards: Vec<MetricCard>,
    /// Channels plotted on the trend chart
    pub trend_channels: Vec<TelemetryChannel>,
    /// History points fed to the trend chart
    pub trend_window: usize,
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            name: "AVHMS Dashboard".to_string(),
            cards: vec![
                MetricCard::for_channel(TelemetryChannel::EngineTemp),
                MetricCard::for_channel(TelemetryChannel::BatteryV),
                MetricCard::for_channel(TelemetryChannel::TirePsi),
                MetricCard::for_channel(TelemetryChannel::FuelPct),
            ],
            trend_channels: vec![
                TelemetryChannel::EngineTemp,
                TelemetryChannel::BatteryV,
                TelemetryChannel::FuelPct,
            ],
            trend_window: TREND_WINDOW,
        }
    }
}

/// Overall vehicle condition shown in the status banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    /// No alerts, vehicle operating normally
    Nominal,
    /// One or more alert thresholds breached
    Alert,
}

/// Status-banner summary of the latest snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Overall condition
    pub status: VehicleStatus,
    /// Active alert codes, evaluation order
    pub alerts: Vec<AlertCode>,
    /// Vehicle identifier
    pub vehicle_id: String,
    /// Snapshot timestamp, UTC ISO-8601
    pub ts: String,
    /// Telemetry link
    pub conn: ConnectionType,
    /// Armor integrity (%), shown in the banner detail list
    pub armor_integrity: f64,
}

impl StatusReport {
    /// Summarize one reading for the status banner
    pub fn from_reading(reading: &Reading) -> Self {
        let status = if reading.alerts.is_empty() {
            VehicleStatus::Nominal
        } else {
            VehicleStatus::Alert
        };

        Self {
            status,
            alerts: reading.alerts.clone(),
            vehicle_id: reading.vehicle_id.clone(),
            ts: reading.ts.clone(),
            conn: reading.conn,
            armor_integrity: reading.metrics.armor_integrity,
        }
    }
}
