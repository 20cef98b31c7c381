//! Periodic telemetry ticker.
//!
//! One background thread drives the mutate-and-broadcast cycle: every tick
//! interval it drains battery from online robots, snapshots the fleet and
//! pushes one `robot_data` frame into the broadcast channel. Socket writes
//! happen in per-connection tasks, so a slow subscriber never delays a tick.

use crate::fleet::{FleetStore, RobotRecord};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tokio::sync::broadcast;

/// Granularity of the shutdown check between ticks.
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// Drives the periodic mutate-and-broadcast cycle.
pub struct Ticker {
    fleet: FleetStore,
    broadcast_tx: broadcast::Sender<String>,
}

impl Ticker {
    pub fn new(fleet: FleetStore, broadcast_tx: broadcast::Sender<String>) -> Self {
        Self { fleet, broadcast_tx }
    }

    /// Runs exactly one tick: mutate, snapshot, broadcast.
    ///
    /// The write lock is released before the snapshot is copied, and no
    /// lock is held while sending. Returns the number of subscribers the
    /// frame was queued for (zero when nobody is connected, which is fine).
    pub fn tick_once(&self) -> usize {
        self.fleet.tick_mutate();
        let snapshot = self.fleet.snapshot();
        let frame = robot_data_frame(&snapshot);
        // Err only means there are no subscribers right now.
        self.broadcast_tx.send(frame).unwrap_or(0)
    }
}

/// Serializes a fleet snapshot into one `robot_data` broadcast frame.
pub fn robot_data_frame(robots: &[RobotRecord]) -> String {
    let message = serde_json::json!({
        "type": "robot_data",
        "data": robots,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });
    message.to_string()
}

/// Spawns the ticker thread.
///
/// The thread fires one tick per `interval` until `shutdown` is set, then
/// exits. A missed tick is not compensated; the next one fires a full
/// interval later.
pub fn spawn_ticker_thread(
    ticker: Ticker,
    interval: Duration,
    shutdown: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        tracing::info!(interval_secs = interval.as_secs(), "Ticker thread started");

        while !shutdown.load(Ordering::SeqCst) {
            let subscribers = ticker.tick_once();
            tracing::debug!(subscribers, "Tick broadcast");

            // Sleep in slices so shutdown stays responsive.
            let mut slept = Duration::ZERO;
            while slept < interval && !shutdown.load(Ordering::SeqCst) {
                let step = SHUTDOWN_POLL.min(interval - slept);
                thread::sleep(step);
                slept += step;
            }
        }

        tracing::info!("Ticker thread shutting down");
    })
}
