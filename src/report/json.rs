//! JSON persistence of assessment results.

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::DomainRecord;

/// Writes the records as a pretty-printed JSON array, overwriting `path`.
///
/// Key order within each record is fixed by the record's field declaration
/// order, so successive runs produce diffable output.
pub async fn write_report(records: &[DomainRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("Failed to serialize records")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write results file: {}", path.display()))?;
    Ok(())
}
