//! fwmirror - Firmware Mirror CLI
//!
//! Queries the vendor's firmware-distribution API (production and beta
//! channels) and mirrors the firmware binaries and release notes to a local
//! directory tree keyed by device model and version.

mod mirror;
#[cfg(test)]
mod test_helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::mirror::{config, run_mirror, MirrorConfig};

#[derive(Parser)]
#[command(name = "fwmirror")]
#[command(about = "Mirror vendor firmware binaries and release notes to a local directory tree")]
#[command(version)]
struct Cli {
    /// Base directory for the mirrored tree
    #[arg(long, default_value = config::DEFAULT_EXPORT_DIR)]
    output_dir: PathBuf,

    /// Production firmware list endpoint
    #[arg(long, default_value = config::PRODUCTION_LIST_URL)]
    production_url: String,

    /// Beta firmware list endpoint
    #[arg(long, default_value = config::BETA_LIST_URL)]
    beta_url: String,

    /// Verbose logging (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("fwmirror={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = MirrorConfig::new()
        .with_production_url(cli.production_url)
        .with_beta_url(cli.beta_url)
        .with_export_dir(&cli.output_dir);

    let summary = run_mirror(&config).await?;

    info!(
        "Mirrored {} firmware entries ({} bytes) to {}",
        summary.exported,
        summary.bytes_written,
        cli.output_dir.display()
    );

    Ok(())
}
