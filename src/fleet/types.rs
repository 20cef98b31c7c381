//! Data types for fleet telemetry.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single robot's telemetry record.
///
/// Field names mirror the source dataset so records round-trip unchanged
/// through `GET /robots` and the WebSocket feed. Anything beyond the three
/// known fields (location, model, firmware, ...) is carried verbatim in
/// `extra` and never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotRecord {
    /// Unique robot identifier.
    #[serde(rename = "Robot ID")]
    pub robot_id: String,

    /// Whether the robot is currently online.
    #[serde(rename = "Online/Offline")]
    pub online: bool,

    /// Battery charge, always within [0, 100]. Out-of-range dataset values
    /// are clamped on load.
    #[serde(rename = "Battery Percentage", deserialize_with = "de_battery")]
    pub battery_percentage: u8,

    /// Additional descriptive fields passed through unchanged.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl RobotRecord {
    /// Drains one tick of battery, floored at zero. No-op while offline.
    pub fn drain_battery(&mut self) {
        if self.online {
            self.battery_percentage = self.battery_percentage.saturating_sub(1);
        }
    }
}

/// Deserializes a battery reading, clamping into [0, 100].
fn de_battery<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(raw.clamp(0, 100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(online: bool, battery: u8) -> RobotRecord {
        RobotRecord {
            robot_id: "R-001".to_string(),
            online,
            battery_percentage: battery,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_drain_decrements_online_robot() {
        let mut r = record(true, 10);
        r.drain_battery();
        assert_eq!(r.battery_percentage, 9);
    }

    #[test]
    fn test_drain_skips_offline_robot() {
        let mut r = record(false, 50);
        r.drain_battery();
        assert_eq!(r.battery_percentage, 50);
    }

    #[test]
    fn test_drain_floors_at_zero() {
        let mut r = record(true, 0);
        r.drain_battery();
        assert_eq!(r.battery_percentage, 0);
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "Robot ID": "R-042",
            "Online/Offline": true,
            "Battery Percentage": 87,
            "Location Coordinates": {"lat": 40.7, "lng": -74.0}
        }"#;
        let r: RobotRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.robot_id, "R-042");
        assert!(r.online);
        assert_eq!(r.battery_percentage, 87);
        assert!(r.extra.contains_key("Location Coordinates"));
    }

    #[test]
    fn test_battery_clamped_on_load() {
        let high: RobotRecord = serde_json::from_str(
            r#"{"Robot ID":"R-1","Online/Offline":true,"Battery Percentage":250}"#,
        )
        .unwrap();
        assert_eq!(high.battery_percentage, 100);

        let low: RobotRecord = serde_json::from_str(
            r#"{"Robot ID":"R-2","Online/Offline":true,"Battery Percentage":-3}"#,
        )
        .unwrap();
        assert_eq!(low.battery_percentage, 0);
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let json = r#"{"Robot ID":"R-1","Online/Offline":false,"Battery Percentage":5,"Model":"MK-II","Year":2023}"#;
        let r: RobotRecord = serde_json::from_str(json).unwrap();
        let out: Value = serde_json::to_value(&r).unwrap();
        assert_eq!(out["Model"], "MK-II");
        assert_eq!(out["Year"], 2023);
    }
}
