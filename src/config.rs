//! Runtime configuration.
//!
//! All settings have defaults matching the original deployment and can be
//! overridden through `FLEETMON_*` environment variables. Invalid values
//! fall back to the default with a warning rather than aborting startup.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server and ticker configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// Path to the JSON dataset providing the initial fleet.
    pub data_path: PathBuf,

    /// How often the ticker mutates and broadcasts (default: 5s).
    pub tick_interval: Duration,

    /// Maximum number of robots loaded from the dataset.
    pub fleet_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: ([0, 0, 0, 0], 8000).into(),
            data_path: PathBuf::from("fake_robot_data.json"),
            tick_interval: Duration::from_secs(5),
            fleet_limit: 30,
        }
    }
}

impl Config {
    /// Builds a config from the process environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: parse_var("FLEETMON_ADDR", defaults.bind_addr),
            data_path: std::env::var("FLEETMON_DATA")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            tick_interval: Duration::from_secs(parse_var(
                "FLEETMON_TICK_SECS",
                defaults.tick_interval.as_secs(),
            )),
            fleet_limit: parse_var("FLEETMON_FLEET_LIMIT", defaults.fleet_limit),
        }
    }
}

/// Reads and parses an environment variable, falling back to `default`.
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(var = name, value = %raw, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.tick_interval, Duration::from_secs(5));
        assert_eq!(config.fleet_limit, 30);
        assert_eq!(config.data_path, PathBuf::from("fake_robot_data.json"));
    }

    #[test]
    fn test_parse_var_fallback_on_garbage() {
        std::env::set_var("FLEETMON_TEST_GARBAGE", "not-a-number");
        let value: u64 = parse_var("FLEETMON_TEST_GARBAGE", 5);
        assert_eq!(value, 5);
        std::env::remove_var("FLEETMON_TEST_GARBAGE");
    }

    #[test]
    fn test_parse_var_reads_valid_value() {
        std::env::set_var("FLEETMON_TEST_VALID", "42");
        let value: usize = parse_var("FLEETMON_TEST_VALID", 5);
        assert_eq!(value, 42);
        std::env::remove_var("FLEETMON_TEST_VALID");
    }
}
