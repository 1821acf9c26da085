//! JSON index of mirrored firmware, kept next to the mirrored tree.
//!
//! The directory tree itself is the source of truth; the index is additive
//! metadata (sizes, digests, timestamps) so an operator can see what a run
//! produced without re-hashing the tree.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;

use super::error::MirrorResult;
use super::transform::FirmwareEntry;

/// Index file name inside the export base directory.
const INDEX_FILENAME: &str = "mirror_index.json";

/// Metadata recorded for one mirrored firmware file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MirroredFirmware {
    pub device: String,
    pub version: String,
    pub beta: bool,
    /// Source URL the binary was fetched from.
    pub url: String,
    /// Upstream MD5 when the server exposed one. Not verified locally.
    pub md5: Option<String>,
    /// SHA-256 of the bytes as written to disk.
    pub sha256: String,
    pub file_size: u64,
    /// RFC 3339 timestamp of when the file was mirrored.
    pub mirrored_at: String,
}

pub type MirrorIndexMap = HashMap<String, MirroredFirmware>;

/// Manages `mirror_index.json` in the export base directory.
pub struct MirrorIndex {
    index_path: PathBuf,
}

impl MirrorIndex {
    pub fn new(export_dir: &Path) -> Self {
        Self {
            index_path: export_dir.join(INDEX_FILENAME),
        }
    }

    /// Index key for an entry, matching its directory path relative to the
    /// export base (`Lite/1.50`, `Lite/1.60-beta`).
    pub fn entry_key(entry: &FirmwareEntry) -> String {
        if entry.beta {
            format!("{}/{}-beta", entry.device, entry.version)
        } else {
            format!("{}/{}", entry.device, entry.version)
        }
    }

    /// SHA-256 of a byte buffer as a lowercase hex string.
    pub fn sha256_hex(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        format!("{:x}", hasher.finalize())
    }

    /// Load the index from disk; a missing file is an empty index.
    pub fn load(&self) -> MirrorResult<MirrorIndexMap> {
        if !self.index_path.exists() {
            return Ok(HashMap::new());
        }

        let contents = fs::read_to_string(&self.index_path)?;
        let index: MirrorIndexMap = serde_json::from_str(&contents)?;
        Ok(index)
    }

    /// Save the index to disk, creating the parent directory if needed.
    pub fn save(&self, index: &MirrorIndexMap) -> MirrorResult<()> {
        if let Some(parent) = self.index_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(index)?;
        fs::write(&self.index_path, contents)?;
        Ok(())
    }

    /// Record one mirrored file, overwriting any prior entry for its key.
    pub fn record(&self, entry: &FirmwareEntry, data: &[u8]) -> MirrorResult<()> {
        let mut index = self.load()?;
        index.insert(
            Self::entry_key(entry),
            MirroredFirmware {
                device: entry.device.clone(),
                version: entry.version.clone(),
                beta: entry.beta,
                url: entry.url.clone(),
                md5: entry.md5.clone(),
                sha256: Self::sha256_hex(data),
                file_size: data.len() as u64,
                mirrored_at: chrono::Utc::now().to_rfc3339(),
            },
        );
        self.save(&index)
    }
}
