//! Thread-safe fleet store.
//!
//! Holds the ordered robot fleet behind a read/write lock. Exactly one
//! writer exists (the ticker); the REST route and WebSocket handshake are
//! readers. Readers always observe a consistent snapshot: the tick mutation
//! runs under the write lock, so no read can see a half-applied tick.

use crate::fleet::types::RobotRecord;
use std::sync::{Arc, RwLock};

/// Shared handle to the in-memory fleet.
///
/// Cloning is cheap and hands out another reference to the same fleet.
/// The record set is fixed at construction; ticks mutate records in place
/// and never add, remove or reorder them.
#[derive(Debug, Clone)]
pub struct FleetStore {
    robots: Arc<RwLock<Vec<RobotRecord>>>,
}

impl FleetStore {
    /// Creates a store over the given fleet, in load order.
    pub fn new(robots: Vec<RobotRecord>) -> Self {
        Self {
            robots: Arc::new(RwLock::new(robots)),
        }
    }

    /// Returns a point-in-time copy of the full fleet.
    pub fn snapshot(&self) -> Vec<RobotRecord> {
        self.robots.read().expect("fleet lock poisoned").clone()
    }

    /// Applies one tick: every online robot loses 1% battery, floored at 0.
    pub fn tick_mutate(&self) {
        let mut robots = self.robots.write().expect("fleet lock poisoned");
        for robot in robots.iter_mut() {
            robot.drain_battery();
        }
    }

    /// Number of robots in the fleet.
    pub fn len(&self) -> usize {
        self.robots.read().expect("fleet lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
