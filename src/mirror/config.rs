//! Mirror configuration and endpoint defaults.
//!
//! Upstream endpoints and the export location live on an explicit
//! configuration struct with documented constant defaults, so tests (and
//! operators) can substitute them.

use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Upstream Endpoints
// ============================================================================

/// Production firmware list endpoint. Queried with empty headers.
pub const PRODUCTION_LIST_URL: &str = "http://dl.8bitdo.com:8080/firmware/select";

/// Beta firmware list endpoint. Same select endpoint; beta-list inclusion
/// is signaled via request headers.
pub const BETA_LIST_URL: &str = "http://dl.8bitdo.com:8080/firmware/select";

/// Headers sent with the beta list request.
pub const BETA_LIST_HEADERS: &[(&str, &str)] = &[("beta", "1")];

// ============================================================================
// Export Layout
// ============================================================================

/// Default base directory for the mirrored tree.
pub const DEFAULT_EXPORT_DIR: &str = "./firmware";

/// File name for release notes inside each version directory.
pub const README_FILENAME: &str = "readme.txt";

/// File name for the firmware binary inside each version directory.
pub const FIRMWARE_FILENAME: &str = "firmware.bin";

/// Directory suffix appended to the version for beta-channel entries.
pub const BETA_DIR_SUFFIX: &str = "-beta";

// ============================================================================
// HTTP Client
// ============================================================================

/// Timeout applied to every HTTP request (list fetch and binary download).
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("firmware-mirror/", env!("CARGO_PKG_VERSION"));

/// Which upstream server a record came from.
///
/// Relative file paths are always resolved against the list URL of the
/// originating source; beta records are never joined against the
/// production base and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirmwareSource {
    Production,
    Beta,
}

impl FirmwareSource {
    /// Human-readable label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            FirmwareSource::Production => "production",
            FirmwareSource::Beta => "beta",
        }
    }
}

/// One list endpoint plus the headers to send with its request.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Firmware list URL. Also the base that relative file paths are
    /// joined against.
    pub list_url: String,
    /// Header name/value pairs for the list request.
    pub headers: Vec<(String, String)>,
}

/// Configuration for one mirror run.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Production list endpoint (empty headers by default).
    pub production: SourceConfig,
    /// Beta list endpoint (beta-inclusion headers by default).
    pub beta: SourceConfig,
    /// Base directory of the mirrored tree.
    pub export_dir: PathBuf,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            production: SourceConfig {
                list_url: PRODUCTION_LIST_URL.to_string(),
                headers: Vec::new(),
            },
            beta: SourceConfig {
                list_url: BETA_LIST_URL.to_string(),
                headers: BETA_LIST_HEADERS
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            },
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
        }
    }
}

impl MirrorConfig {
    /// Create a configuration with the default endpoints and export dir.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the production list URL.
    pub fn with_production_url(mut self, url: impl Into<String>) -> Self {
        self.production.list_url = url.into();
        self
    }

    /// Set the beta list URL.
    pub fn with_beta_url(mut self, url: impl Into<String>) -> Self {
        self.beta.list_url = url.into();
        self
    }

    /// Set the export base directory.
    pub fn with_export_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.export_dir = dir.as_ref().to_path_buf();
        self
    }

    /// The source config for the given server.
    pub fn source(&self, source: FirmwareSource) -> &SourceConfig {
        match source {
            FirmwareSource::Production => &self.production,
            FirmwareSource::Beta => &self.beta,
        }
    }
}
