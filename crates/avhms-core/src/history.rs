//! Telemetry history
//!
//! Bounded, newest-first buffer of snapshots backing the dashboard's trend
//! chart. One buffer per session, owned by the session and passed by
//! reference; there is no global state.

use std::collections::VecDeque;

use crate::telemetry::{ConnectionType, Reading, TelemetryChannel, TelemetryGenerator};

/// Default maximum number of retained snapshots
pub const DEFAULT_HISTORY_CAP: usize = 300;

/// Bounded, newest-first sequence of readings
///
/// Each push prepends one reading and truncates from the tail, so index 0 is
/// always the most recent snapshot.
#[derive(Debug, Clone)]
pub struct History {
    /// Readings, newest first
    buffer: VecDeque<Reading>,
    /// Maximum retained length
    cap: usize,
}

impl History {
    /// Create an empty history with the given cap
    pub fn new(cap: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(cap.min(DEFAULT_HISTORY_CAP)),
            cap,
        }
    }

    /// Prepend a reading, evicting the oldest once over the cap
    pub fn push(&mut self, reading: Reading) {
        self.buffer.push_front(reading);
        self.buffer.truncate(self.cap);
    }

    /// Number of retained readings
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Configured maximum length
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// The most recent reading, if any
    pub fn latest(&self) -> Option<&Reading> {
        self.buffer.front()
    }

    /// The most recent reading, or a freshly generated one when empty
    ///
    /// Empty-state fallback for the display layer: the card row always has
    /// something to show, even before the first stream insert. The generated
    /// fallback is returned but not stored.
    pub fn latest_or_generate(
        &self,
        generator: &mut TelemetryGenerator,
        vehicle_id: &str,
        conn: ConnectionType,
    ) -> Reading {
        match self.buffer.front() {
            Some(reading) => reading.clone(),
            None => generator.sample(vehicle_id, conn),
        }
    }

    /// The most recent `n` readings, ordered oldest to newest for charting
    pub fn window(&self, n: usize) -> Vec<&Reading> {
        self.buffer.iter().take(n).rev().collect()
    }

    /// Values of one channel over the most recent `n` readings
    ///
    /// Returns (timestamp, value) pairs oldest to newest, ready to plot.
    pub fn channel_series(&self, channel: TelemetryChannel, n: usize) -> Vec<(&str, f64)> {
        self.window(n)
            .into_iter()
            .map(|r| (r.ts.as_str(), r.metrics.channel(channel)))
            .collect()
    }

    /// Iterate all retained readings, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.buffer.iter()
    }

    /// Drop all retained readings
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAP)
    }
}
