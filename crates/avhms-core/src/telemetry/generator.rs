//! Simulated telemetry generator
//!
//! Produces one synthetic snapshot per call from fixed per-channel
//! distributions, for driving the dashboard without a real sensor feed.

use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use super::{evaluate_alerts, ConnectionType, Metrics, Reading};

/// Engine temperature distribution (°C)
const ENGINE_TEMP_MEAN: f64 = 88.0;
const ENGINE_TEMP_SD: f64 = 6.0;

/// Battery voltage distribution (V)
const BATTERY_V_MEAN: f64 = 12.4;
const BATTERY_V_SD: f64 = 0.4;

/// Tire pressure distribution (PSI)
const TIRE_PSI_MEAN: f64 = 33.2;
const TIRE_PSI_SD: f64 = 1.2;

/// Fuel level distribution (%), clamped to [0, 100]
const FUEL_PCT_MEAN: f64 = 60.0;
const FUEL_PCT_SD: f64 = 20.0;

/// Armor integrity distribution (%), clamped to [0, 100]
const ARMOR_MEAN: f64 = 92.0;
const ARMOR_SD: f64 = 6.0;

/// Simulated telemetry source
///
/// Pure function of its random source: a generator built with
/// [`TelemetryGenerator::with_seed`] produces a reproducible stream, which
/// keeps alert-threshold tests deterministic.
pub struct TelemetryGenerator {
    /// Random number generator, injectable via seed
    rng: StdRng,
    engine_temp: Normal<f64>,
    battery_v: Normal<f64>,
    tire_psi: Normal<f64>,
    fuel_pct: Normal<f64>,
    armor_integrity: Normal<f64>,
}

impl Default for TelemetryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryGenerator {
    /// Create a generator seeded from system entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a deterministic generator from a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        // Standard deviations are positive constants, so construction
        // cannot fail.
        let normal = |mean, sd| Normal::new(mean, sd).expect("positive std dev");

        Self {
            rng,
            engine_temp: normal(ENGINE_TEMP_MEAN, ENGINE_TEMP_SD),
            battery_v: normal(BATTERY_V_MEAN, BATTERY_V_SD),
            tire_psi: normal(TIRE_PSI_MEAN, TIRE_PSI_SD),
            fuel_pct: normal(FUEL_PCT_MEAN, FUEL_PCT_SD),
            armor_integrity: normal(ARMOR_MEAN, ARMOR_SD),
        }
    }

    /// Generate one snapshot for the given vehicle and telemetry link
    ///
    /// Draws each channel from its distribution, clamps the percentage
    /// channels to [0, 100], rounds everything to 2 decimals, and evaluates
    /// the alert rules. Consumes entropy from the random source only.
    pub fn sample(&mut self, vehicle_id: &str, conn: ConnectionType) -> Reading {
        let metrics = Metrics {
            engine_temp: round2(self.engine_temp.sample(&mut self.rng)),
            battery_v: round2(self.battery_v.sample(&mut self.rng)),
            tire_psi: round2(self.tire_psi.sample(&mut self.rng)),
            fuel_pct: round2(self.fuel_pct.sample(&mut self.rng).clamp(0.0, 100.0)),
            armor_integrity: round2(self.armor_integrity.sample(&mut self.rng).clamp(0.0, 100.0)),
        };

        let alerts = evaluate_alerts(&metrics);

        Reading {
            vehicle_id: vehicle_id.to_string(),
            ts: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            metrics,
            alerts,
            conn,
        }
    }
}

/// Round to 2 decimal places, matching the card display precision
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
