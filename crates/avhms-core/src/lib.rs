//! # AVHMS Core Library
//!
//! Core functionality for the Armored Vehicle Health Monitoring System.

#![warn(missing_docs)]

//!
//! This library provides:
//! - Simulated vehicle telemetry generation (engine, battery, tires, fuel, armor)
//! - Threshold-based alert evaluation
//! - A bounded, newest-first telemetry history for trend charts
//! - Dashboard layout metadata (metric cards, status banner)
//! - A throttled monitoring session driving the dashboard's render cycle
//!
//! The dashboard UI itself (cards, sliders, chart widgets) lives in a separate
//! host application; this crate only produces the data and layout metadata
//! behind it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use avhms_core::prelude::*;
//!
//! let config = MonitorConfig::default();
//! let mut session = MonitorSession::new(config)?;
//!
//! // One render cycle: sleep the refresh interval, then sample.
//! let reading = session.next_cycle().await;
//! println!("engine: {} °C", reading.metrics.engine_temp);
//! ```

pub mod config;
pub mod dash;
pub mod history;
pub mod session;
pub mod telemetry;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{ConfigError, MissionStatus, MonitorConfig};
    pub use crate::dash::{DashboardLayout, MetricCard, StatusReport, VehicleStatus};
    pub use crate::history::History;
    pub use crate::session::MonitorSession;
    pub use crate::telemetry::{
        AlertCode, ConnectionType, Metrics, Reading, TelemetryChannel, TelemetryGenerator,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
