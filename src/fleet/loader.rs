//! Startup dataset loader.
//!
//! Reads the robot fleet from a JSON file exactly once, before the server
//! and ticker start. Any failure here is fatal: the process must not begin
//! serving with an uninitialized fleet.

use crate::fleet::types::RobotRecord;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading the initial fleet dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset is not a valid robot array: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("dataset contains no robots")]
    EmptyFleet,
}

/// Loads the fleet from a JSON file, keeping at most `limit` records.
///
/// Records keep their file order. Battery readings outside [0, 100] are
/// clamped during deserialization.
pub fn load_fleet(path: &Path, limit: usize) -> Result<Vec<RobotRecord>, LoadError> {
    let raw = std::fs::read_to_string(path)?;
    let robots = parse_fleet(&raw, limit)?;
    tracing::info!(
        path = %path.display(),
        count = robots.len(),
        "Fleet dataset loaded"
    );
    Ok(robots)
}

fn parse_fleet(raw: &str, limit: usize) -> Result<Vec<RobotRecord>, LoadError> {
    let mut robots: Vec<RobotRecord> = serde_json::from_str(raw)?;
    robots.truncate(limit);
    if robots.is_empty() {
        return Err(LoadError::EmptyFleet);
    }
    Ok(robots)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"[
        {"Robot ID": "R-1", "Online/Offline": true, "Battery Percentage": 90, "Model": "MK-I"},
        {"Robot ID": "R-2", "Online/Offline": false, "Battery Percentage": 40},
        {"Robot ID": "R-3", "Online/Offline": true, "Battery Percentage": 120}
    ]"#;

    #[test]
    fn test_parse_keeps_file_order() {
        let robots = parse_fleet(DATASET, 30).unwrap();
        let ids: Vec<_> = robots.iter().map(|r| r.robot_id.as_str()).collect();
        assert_eq!(ids, ["R-1", "R-2", "R-3"]);
    }

    #[test]
    fn test_parse_applies_limit() {
        let robots = parse_fleet(DATASET, 2).unwrap();
        assert_eq!(robots.len(), 2);
        assert_eq!(robots[1].robot_id, "R-2");
    }

    #[test]
    fn test_parse_clamps_battery() {
        let robots = parse_fleet(DATASET, 30).unwrap();
        assert_eq!(robots[2].battery_percentage, 100);
    }

    #[test]
    fn test_empty_array_is_error() {
        assert!(matches!(parse_fleet("[]", 30), Err(LoadError::EmptyFleet)));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            parse_fleet("{\"not\": \"an array\"}", 30),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = load_fleet(Path::new("/nonexistent/fleet.json"), 30).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
