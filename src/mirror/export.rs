//! Writes merged firmware entries to the local mirror tree.

use std::fs;
use std::path::PathBuf;

use reqwest::Client;
use tracing::info;

use super::config::{MirrorConfig, BETA_DIR_SUFFIX, FIRMWARE_FILENAME, README_FILENAME};
use super::error::{MirrorError, MirrorResult};
use super::index::MirrorIndex;
use super::transform::FirmwareEntry;

/// Counters for one completed mirror run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorSummary {
    /// Entries written to the tree.
    pub exported: usize,
    /// Firmware bytes written (readme files excluded).
    pub bytes_written: u64,
}

/// Exports entries one at a time: directory, release notes, binary.
pub struct Exporter {
    client: Client,
    config: MirrorConfig,
    index: MirrorIndex,
}

impl Exporter {
    pub fn new(client: Client, config: MirrorConfig) -> Self {
        let index = MirrorIndex::new(&config.export_dir);
        Self {
            client,
            config,
            index,
        }
    }

    /// Output directory for an entry: `<base>/<device>/<version>[-beta]`.
    fn entry_dir(&self, entry: &FirmwareEntry) -> PathBuf {
        let version_dir = if entry.beta {
            format!("{}{}", entry.version, BETA_DIR_SUFFIX)
        } else {
            entry.version.clone()
        };
        self.config.export_dir.join(&entry.device).join(version_dir)
    }

    /// Download the firmware binary for an entry.
    async fn download_binary(&self, entry: &FirmwareEntry) -> MirrorResult<Vec<u8>> {
        let response = self.client.get(&entry.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MirrorError::UnexpectedStatus {
                url: entry.url.clone(),
                status,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Export one entry: create its directory, write the release notes,
    /// download and write the binary, record it in the index.
    ///
    /// Returns the number of firmware bytes written.
    pub async fn export_entry(&self, entry: &FirmwareEntry) -> MirrorResult<u64> {
        let dir = self.entry_dir(entry);

        info!("Processing {}", dir.display());

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(README_FILENAME), format!("{}\n", entry.readme))?;

        let data = self.download_binary(entry).await?;
        fs::write(dir.join(FIRMWARE_FILENAME), &data)?;

        self.index.record(entry, &data)?;

        Ok(data.len() as u64)
    }

    /// Export all entries in order. The first failure aborts the remaining
    /// run; entries already exported stay on disk.
    pub async fn export_all(&self, entries: &[FirmwareEntry]) -> MirrorResult<MirrorSummary> {
        let mut summary = MirrorSummary::default();

        for entry in entries {
            summary.bytes_written += self.export_entry(entry).await?;
            summary.exported += 1;
        }

        Ok(summary)
    }
}
