use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logs go to stderr so stdout carries only the search output.
/// `MAZEGRAPH_LOG` overrides the level picked from `--verbose`.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MAZEGRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(format!("mazegraph={level},mazegraph_core={level}"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;

    Ok(())
}
