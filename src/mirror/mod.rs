//! Firmware mirroring pipeline.
//!
//! Queries the vendor's firmware-distribution API and mirrors the binaries
//! and release notes to a local directory tree keyed by device model and
//! version. The pipeline is linear and runs once per invocation:
//!
//! 1. **Fetch** - one POST per source (production, beta) for the raw lists
//! 2. **Transform** - normalize each record into a [`FirmwareEntry`]
//! 3. **Merge** - union the two lists, deduplicated by (device, version, beta)
//! 4. **Export** - per entry: directory, `readme.txt`, `firmware.bin`
//!
//! Everything is sequential; any failure aborts the remaining run.

pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod index;
pub mod merge;
pub mod registry;
pub mod transform;

use reqwest::Client;

pub use config::{FirmwareSource, MirrorConfig};
pub use error::{MirrorError, MirrorResult};
pub use export::{Exporter, MirrorSummary};
pub use transform::FirmwareEntry;

/// Build the HTTP client shared by list fetches and binary downloads.
pub fn http_client() -> MirrorResult<Client> {
    Ok(Client::builder()
        .timeout(config::HTTP_TIMEOUT)
        .user_agent(config::USER_AGENT)
        .build()?)
}

/// Run the whole pipeline once with the given configuration.
pub async fn run_mirror(config: &MirrorConfig) -> MirrorResult<MirrorSummary> {
    let client = http_client()?;

    let production_raw =
        fetch::fetch_firmware_list(&client, config, FirmwareSource::Production).await?;
    let beta_raw = fetch::fetch_firmware_list(&client, config, FirmwareSource::Beta).await?;

    let production =
        transform::transform_firmware_list(&production_raw, FirmwareSource::Production, config)?;
    let beta = transform::transform_firmware_list(&beta_raw, FirmwareSource::Beta, config)?;

    let merged = merge::merge_entry_lists(production, beta);

    let exporter = Exporter::new(client, config.clone());
    exporter.export_all(&merged).await
}
