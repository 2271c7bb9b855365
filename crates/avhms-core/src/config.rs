//! Session configuration
//!
//! The dashboard sidebar's controls as a serializable config struct, with
//! validation of the values the sliders would otherwise constrain.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::DEFAULT_HISTORY_CAP;
use crate::telemetry::ConnectionType;

/// Minimum refresh interval selectable in the sidebar (seconds)
pub const MIN_REFRESH_SECS: u64 = 1;
/// Maximum refresh interval selectable in the sidebar (seconds)
pub const MAX_REFRESH_SECS: u64 = 10;

/// Errors from config validation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("refresh interval {0}s outside {MIN_REFRESH_SECS}-{MAX_REFRESH_SECS}s")]
    RefreshOutOfRange(u64),

    #[error("history cap must be at least 1")]
    ZeroHistoryCap,

    #[error("vehicle id must not be empty")]
    EmptyVehicleId,
}

/// Declared mission state of the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStatus {
    /// Deployed and reporting
    Active,
    /// Parked, engine available
    Standby,
    /// In the workshop
    Maintenance,
}

/// Monitoring session configuration
///
/// Defaults mirror the dashboard sidebar's initial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorConfig {
    /// Vehicle identifier shown on the banner
    pub vehicle_id: String,
    /// Declared mission state (display only, does not affect sampling)
    pub mission_status: MissionStatus,
    /// Telemetry link tag stamped on generated readings
    pub connection: ConnectionType,
    /// Generate one reading per render cycle
    pub auto_stream: bool,
    /// Delay between render cycles
    #[serde(with = "refresh_secs")]
    pub refresh: Duration,
    /// Maximum retained history length
    pub history_cap: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            vehicle_id: "AV-2025-01".to_string(),
            mission_status: MissionStatus::Active,
            connection: ConnectionType::Local,
            auto_stream: true,
            refresh: Duration::from_secs(3),
            history_cap: DEFAULT_HISTORY_CAP,
        }
    }
}

impl MonitorConfig {
    /// Validate slider/field ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vehicle_id.trim().is_empty() {
            return Err(ConfigError::EmptyVehicleId);
        }

        let secs = self.refresh.as_secs();
        if !(MIN_REFRESH_SECS..=MAX_REFRESH_SECS).contains(&secs) || self.refresh.subsec_nanos() != 0
        {
            return Err(ConfigError::RefreshOutOfRange(secs));
        }

        if self.history_cap == 0 {
            return Err(ConfigError::ZeroHistoryCap);
        }

        Ok(())
    }
}

/// Serialize the refresh interval as whole seconds, matching the sidebar slider
mod refresh_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_sidebar() {
        let config = MonitorConfig::default();

        assert_eq!(config.vehicle_id, "AV-2025-01");
        assert_eq!(config.mission_status, MissionStatus::Active);
        assert_eq!(config.connection, ConnectionType::Local);
        assert!(config.auto_stream);
        assert_eq!(config.refresh, Duration::from_secs(3));
        assert_eq!(config.history_cap, 300);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_refresh_out_of_range() {
        let mut config = MonitorConfig::default();

        config.refresh = Duration::from_secs(0);
        assert_eq!(config.validate(), Err(ConfigError::RefreshOutOfRange(0)));

        config.refresh = Duration::from_secs(11);
        assert_eq!(config.validate(), Err(ConfigError::RefreshOutOfRange(11)));

        config.refresh = Duration::from_millis(2500);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RefreshOutOfRange(_))
        ));

        config.refresh = Duration::from_secs(10);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_cap_rejected() {
        let config = MonitorConfig {
            history_cap: 0,
            ..MonitorConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroHistoryCap));
    }

    #[test]
    fn test_empty_vehicle_id_rejected() {
        let config = MonitorConfig {
            vehicle_id: "  ".to_string(),
            ..MonitorConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyVehicleId));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = MonitorConfig {
            connection: ConnectionType::Satellite,
            refresh: Duration::from_secs(5),
            ..MonitorConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: MonitorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_refresh_serializes_as_seconds() {
        let config = MonitorConfig::default();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["refresh"], 3);
    }
}
