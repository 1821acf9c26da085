//! Merges the production and beta entry lists into one deduplicated list.

use std::collections::HashSet;

use super::transform::FirmwareEntry;

/// Dedup key: (device, version, beta flag).
///
/// `url`, `readme`, and `md5` are intentionally excluded, so two entries
/// differing only there collapse to the first-seen one. This matches the
/// upstream tool's contract and is preserved for compatibility.
fn merge_key(entry: &FirmwareEntry) -> (String, String, bool) {
    (entry.device.clone(), entry.version.clone(), entry.beta)
}

/// Union the production and beta lists, keyed by (device, version, beta).
///
/// Production entries are kept in place and in order; a beta entry is
/// appended only when no entry with the same key already exists in the
/// accumulated result.
pub fn merge_entry_lists(
    production: Vec<FirmwareEntry>,
    beta: Vec<FirmwareEntry>,
) -> Vec<FirmwareEntry> {
    let mut seen: HashSet<(String, String, bool)> = production.iter().map(merge_key).collect();

    let mut merged = production;
    for entry in beta {
        if seen.insert(merge_key(&entry)) {
            merged.push(entry);
        }
    }
    merged
}
