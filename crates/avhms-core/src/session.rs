//! Monitoring session
//!
//! Drives the dashboard's render cycle: one generated reading per cycle,
//! throttled by the configured refresh interval. Single logical writer, no
//! locking; the session owns the generator and the history buffer and is torn
//! down with the host session.

use crate::config::{ConfigError, MonitorConfig};
use crate::dash::StatusReport;
use crate::history::History;
use crate::telemetry::{Reading, TelemetryChannel, TelemetryGenerator};

/// Readings pre-seeded into an empty history when auto-stream is off
pub const PRESEED_COUNT: usize = 6;

/// One dashboard session: config, telemetry source, and history
pub struct MonitorSession {
    config: MonitorConfig,
    generator: TelemetryGenerator,
    history: History,
}

impl MonitorSession {
    /// Create a session from a validated config
    pub fn new(config: MonitorConfig) -> Result<Self, ConfigError> {
        Self::with_generator(config, TelemetryGenerator::new())
    }

    /// Create a session with an injected generator (deterministic in tests)
    pub fn with_generator(
        config: MonitorConfig,
        generator: TelemetryGenerator,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let history = History::new(config.history_cap);

        Ok(Self {
            config,
            generator,
            history,
        })
    }

    /// Session configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Retained telemetry history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Generate one reading and record it
    pub fn tick(&mut self) -> Reading {
        let reading = self
            .generator
            .sample(&self.config.vehicle_id, self.config.connection);

        if !reading.alerts.is_empty() {
            tracing::warn!(
                vehicle = %reading.vehicle_id,
                alerts = ?reading.alerts,
                "telemetry alerts active"
            );
        }
        tracing::debug!(vehicle = %reading.vehicle_id, ts = %reading.ts, "telemetry tick");

        self.history.push(reading.clone());
        reading
    }

    /// Pre-seed an empty history so the trend chart has data to draw
    ///
    /// No-op when the history already holds readings or auto-stream is on;
    /// matches the dashboard's behavior before the first manual refresh.
    pub fn seed_history(&mut self, n: usize) {
        if self.config.auto_stream || !self.history.is_empty() {
            return;
        }
        for _ in 0..n {
            self.tick();
        }
    }

    /// The latest reading, generating a fallback when the history is empty
    pub fn latest(&mut self) -> Reading {
        self.history.latest_or_generate(
            &mut self.generator,
            &self.config.vehicle_id,
            self.config.connection,
        )
    }

    /// Status-banner summary of the latest reading
    pub fn status(&mut self) -> StatusReport {
        StatusReport::from_reading(&self.latest())
    }

    /// Trend-chart series for one channel over the most recent `n` readings
    pub fn trend(&self, channel: TelemetryChannel, n: usize) -> Vec<(String, f64)> {
        self.history
            .channel_series(channel, n)
            .into_iter()
            .map(|(ts, v)| (ts.to_string(), v))
            .collect()
    }

    /// Run one throttled render cycle
    ///
    /// Sleeps the configured refresh interval, then generates and records a
    /// reading when auto-stream is on, or returns the latest reading
    /// otherwise. The sleep is the only suspension point; the cycle itself
    /// runs to completion.
    pub async fn next_cycle(&mut self) -> Reading {
        tokio::time::sleep(self.config.refresh).await;

        if self.config.auto_stream {
            self.tick()
        } else {
            self.latest()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MissionStatus;
    use crate::dash::VehicleStatus;
    use crate::telemetry::ConnectionType;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn session(seed: u64) -> MonitorSession {
        MonitorSession::with_generator(
            MonitorConfig::default(),
            TelemetryGenerator::with_seed(seed),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MonitorConfig {
            history_cap: 0,
            ..MonitorConfig::default()
        };
        assert!(MonitorSession::new(config).is_err());
    }

    #[test]
    fn test_tick_records_one_reading() {
        let mut session = session(42);
        assert!(session.history().is_empty());

        let reading = session.tick();

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().latest(), Some(&reading));
        assert_eq!(reading.vehicle_id, "AV-2025-01");
        assert_eq!(reading.conn, ConnectionType::Local);
    }

    #[test]
    fn test_seed_history_fills_empty_buffer() {
        let config = MonitorConfig {
            auto_stream: false,
            ..MonitorConfig::default()
        };
        let mut session =
            MonitorSession::with_generator(config, TelemetryGenerator::with_seed(1)).unwrap();

        session.seed_history(PRESEED_COUNT);
        assert_eq!(session.history().len(), PRESEED_COUNT);

        // Second call is a no-op
        session.seed_history(PRESEED_COUNT);
        assert_eq!(session.history().len(), PRESEED_COUNT);
    }

    #[test]
    fn test_seed_history_noop_when_streaming() {
        let mut session = session(1);
        session.seed_history(PRESEED_COUNT);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_latest_does_not_grow_history() {
        let mut session = session(9);

        let fallback = session.latest();
        assert_eq!(fallback.vehicle_id, "AV-2025-01");
        assert!(session.history().is_empty());

        let recorded = session.tick();
        assert_eq!(session.latest(), recorded);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_status_reflects_alerts() {
        let mut session = session(12);
        let reading = session.tick();

        let report = session.status();
        assert_eq!(report.alerts, reading.alerts);
        let expected = if reading.alerts.is_empty() {
            VehicleStatus::Nominal
        } else {
            VehicleStatus::Alert
        };
        assert_eq!(report.status, expected);
    }

    #[test]
    fn test_trend_window() {
        let mut session = session(8);
        for _ in 0..10 {
            session.tick();
        }

        let trend = session.trend(TelemetryChannel::EngineTemp, 5);
        assert_eq!(trend.len(), 5);
    }

    #[test]
    fn test_mission_status_does_not_affect_sampling() {
        let base = MonitorConfig::default();
        let maintenance = MonitorConfig {
            mission_status: MissionStatus::Maintenance,
            ..base.clone()
        };

        let mut a = MonitorSession::with_generator(base, TelemetryGenerator::with_seed(4)).unwrap();
        let mut b =
            MonitorSession::with_generator(maintenance, TelemetryGenerator::with_seed(4)).unwrap();

        assert_eq!(a.tick().metrics, b.tick().metrics);
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_cycle_waits_refresh_interval() {
        let mut session = session(3);
        let start = tokio::time::Instant::now();

        let reading = session.next_cycle().await;

        assert_eq!(start.elapsed(), Duration::from_secs(3));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().latest(), Some(&reading));
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_cycle_without_auto_stream() {
        let config = MonitorConfig {
            auto_stream: false,
            ..MonitorConfig::default()
        };
        let mut session =
            MonitorSession::with_generator(config, TelemetryGenerator::with_seed(6)).unwrap();

        let reading = session.next_cycle().await;

        // Manual mode: the cycle only re-reads, it does not record
        assert!(session.history().is_empty());
        assert_eq!(reading.vehicle_id, "AV-2025-01");
    }
}
