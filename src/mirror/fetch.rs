//! Fetches raw firmware descriptor lists from the upstream servers.

use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use super::config::{FirmwareSource, MirrorConfig};
use super::error::{MirrorError, MirrorResult};

/// One raw firmware descriptor as the upstream API returns it.
///
/// Extra fields in the response are ignored. The `beta` marker and `md5`
/// checksum are only present in some server variants, so both default to
/// absent.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFirmwareRecord {
    /// File path relative to the list endpoint base.
    #[serde(rename = "filePathName")]
    pub file_path_name: String,

    /// Numeric device type code, resolved through the registry.
    #[serde(rename = "type")]
    pub device_type: u32,

    /// Raw numeric firmware version (e.g. 1.5).
    pub version: f64,

    /// English release notes, with upstream CRLF line endings.
    pub readme_en: String,

    /// Beta channel marker; any non-empty string means beta.
    #[serde(default)]
    pub beta: String,

    /// Upstream MD5 checksum of the binary, when the server exposes one.
    #[serde(default)]
    pub md5: Option<String>,
}

/// Response envelope of the list endpoint.
#[derive(Debug, Deserialize)]
struct FirmwareListResponse {
    list: Vec<RawFirmwareRecord>,
}

/// Fetch the firmware list from one source.
///
/// Issues a single POST with the source's configured headers. There is no
/// retry; a failed request or a response without the expected `list` shape
/// aborts the run.
pub async fn fetch_firmware_list(
    client: &Client,
    config: &MirrorConfig,
    source: FirmwareSource,
) -> MirrorResult<Vec<RawFirmwareRecord>> {
    let source_config = config.source(source);

    info!(
        "Fetching {} firmware list from {}",
        source.label(),
        source_config.list_url
    );

    let mut request = client.post(&source_config.list_url);
    for (name, value) in &source_config.headers {
        request = request.header(name.as_str(), value.as_str());
    }

    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(MirrorError::UnexpectedStatus {
            url: source_config.list_url.clone(),
            status,
        });
    }

    let body = response.text().await?;
    let parsed: FirmwareListResponse = serde_json::from_str(&body)?;

    info!(
        "Got {} {} firmware records",
        parsed.list.len(),
        source.label()
    );

    Ok(parsed.list)
}
