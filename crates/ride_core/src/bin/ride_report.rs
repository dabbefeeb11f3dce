//! Print the sample ride, driver, and rider report.
//!
//! Run with: cargo run -p ride_core --bin ride_report

use std::io::{self, Write};

use anyhow::{Context, Result};
use ride_core::demo::DemoReport;
use tracing_subscriber::{prelude::*, EnvFilter};

fn main() -> Result<()> {
    init_logging();

    let report = DemoReport::build().context("failed to build sample rides")?;
    tracing::info!(
        rides = report.registry.len(),
        driver_rides = report.driver.ride_count(),
        rider_rides = report.rider.ride_count(),
        "sample scenario built"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write(&mut out).context("failed to write report")?;
    out.flush()?;
    Ok(())
}

/// Diagnostics go to stderr so stdout carries only the report.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
