//! FleetMon - Robot fleet telemetry server.
//!
//! Loads a static robot dataset, serves it over `GET /robots` and pushes
//! updated telemetry to WebSocket clients every tick.

use fleetmon::config::Config;
use fleetmon::fleet::{load_fleet, FleetStore};
use fleetmon::server::start_server;
use fleetmon::ticker::{spawn_ticker_thread, Ticker};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fleetmon=info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(?config, "Starting FleetMon");

    // The dataset must load before anything starts serving.
    let robots = load_fleet(&config.data_path, config.fleet_limit)?;
    let fleet = FleetStore::new(robots);

    // Start HTTP server
    let broadcast_tx = start_server(fleet.clone(), config.bind_addr);

    // Shutdown signal
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_ctrlc = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        tracing::info!("Shutdown signal received");
        shutdown_ctrlc.store(true, Ordering::SeqCst);
    })?;

    // Start the ticker once the fleet is loaded and the server is up.
    let ticker = Ticker::new(fleet.clone(), broadcast_tx);
    let ticker_handle = spawn_ticker_thread(ticker, config.tick_interval, Arc::clone(&shutdown));

    tracing::info!(
        addr = %config.bind_addr,
        fleet_size = fleet.len(),
        tick_secs = config.tick_interval.as_secs(),
        "FleetMon is running"
    );

    // Park until the ctrlc handler flips the flag.
    while !shutdown.load(Ordering::SeqCst) {
        std::thread::sleep(std::time::Duration::from_millis(200));
    }

    ticker_handle.join().expect("Ticker thread panicked");
    tracing::info!("FleetMon has exited");
    Ok(())
}
