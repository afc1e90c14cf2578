//! JSON export of accepted purchase records.
//!
//! The serializer is deliberately dumb: it renders whatever collection it is
//! handed, in the order given, with no validation responsibility. Keys are
//! the lower-snake-case field names; `purchase_date` serializes as an ISO
//! `YYYY-MM-DD` date and `purchase_price` as an exact decimal string, so
//! neither loses information on the way out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use vpr_model::PurchaseRecord;

/// Render the accepted records as a pretty-printed JSON array.
pub fn records_to_json(records: &[PurchaseRecord]) -> Result<String> {
    let json = serde_json::to_string_pretty(records).context("serialize records")?;
    Ok(format!("{json}\n"))
}

/// Write the records document to `path`, creating parent directories as
/// needed, and return the written path.
pub fn write_records_json(path: &Path, records: &[PurchaseRecord]) -> Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let json = records_to_json(records)?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path.to_path_buf())
}
