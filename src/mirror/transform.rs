//! Normalizes raw firmware records into [`FirmwareEntry`] values.

use reqwest::Url;

use super::config::{FirmwareSource, MirrorConfig};
use super::error::{MirrorError, MirrorResult};
use super::fetch::RawFirmwareRecord;
use super::registry;

/// One normalized, downloadable firmware release.
#[derive(Debug, Clone, PartialEq)]
pub struct FirmwareEntry {
    /// Absolute download URL of the firmware binary.
    pub url: String,
    /// Human-readable device name from the registry.
    pub device: String,
    /// Firmware version formatted with exactly two decimal digits.
    pub version: String,
    /// Release notes with line endings normalized to LF.
    pub readme: String,
    /// Whether the entry comes from the beta distribution channel.
    pub beta: bool,
    /// Upstream MD5 checksum, lowercased, when the server exposed one.
    /// Recorded for reference only; downloads are not verified against it.
    pub md5: Option<String>,
}

/// Format a raw numeric version with exactly two decimal digits.
///
/// `1.5` becomes `"1.50"`, `2` becomes `"2.00"`.
pub fn version_to_string(version: f64) -> String {
    format!("{:.2}", version)
}

/// Strip all carriage returns, leaving LF-only line endings.
pub fn normalize_readme(readme: &str) -> String {
    readme.replace('\r', "")
}

/// Resolve a record's relative file path against the list URL of the
/// originating server.
fn resolve_url(base: &str, file_path_name: &str) -> MirrorResult<String> {
    let invalid = || MirrorError::InvalidUrl {
        base: base.to_string(),
        path: file_path_name.to_string(),
    };

    let base_url = Url::parse(base).map_err(|_| invalid())?;
    let resolved = base_url.join(file_path_name).map_err(|_| invalid())?;
    Ok(resolved.to_string())
}

/// Transform one raw record into a normalized entry.
///
/// Pure given its inputs. The URL is always joined against the base of the
/// server that produced the record; an unmapped device type code fails the
/// whole transform.
pub fn transform_record(
    record: &RawFirmwareRecord,
    source: FirmwareSource,
    config: &MirrorConfig,
) -> MirrorResult<FirmwareEntry> {
    let base = &config.source(source).list_url;

    let device = registry::device_name(record.device_type)
        .ok_or(MirrorError::UnknownDeviceType {
            code: record.device_type,
        })?
        .to_string();

    Ok(FirmwareEntry {
        url: resolve_url(base, &record.file_path_name)?,
        device,
        version: version_to_string(record.version),
        readme: normalize_readme(&record.readme_en),
        beta: !record.beta.is_empty(),
        md5: record.md5.as_ref().map(|m| m.to_ascii_lowercase()),
    })
}

/// Transform a whole list from one source, failing on the first bad record.
pub fn transform_firmware_list(
    records: &[RawFirmwareRecord],
    source: FirmwareSource,
    config: &MirrorConfig,
) -> MirrorResult<Vec<FirmwareEntry>> {
    records
        .iter()
        .map(|record| transform_record(record, source, config))
        .collect()
}
