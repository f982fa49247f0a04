//! Saves batch reports next to the working directory.

use std::{
    io,
    path::{Path, PathBuf},
};

use time::{
    format_description::well_known::Rfc3339,
    macros::format_description,
    OffsetDateTime, UtcOffset,
};
use tracing::info;

use crate::domain::BatchLookupResponse;

const EXPORT_PREFIX: &str = "slab-scout-batch";

/// `slab-scout-batch-20240131-094500.txt` for the given moment (UTC).
pub fn export_file_name(at: OffsetDateTime) -> String {
    let at = at.to_offset(UtcOffset::UTC);
    let stamp = at
        .format(format_description!("[year][month][day]-[hour][minute][second]"))
        .unwrap_or_else(|_| at.unix_timestamp().to_string());
    format!("{EXPORT_PREFIX}-{stamp}.txt")
}

/// Summary text with a generation stamp on top.
pub fn report_text(batch: &BatchLookupResponse, at: OffsetDateTime) -> String {
    let stamp = at
        .format(&Rfc3339)
        .unwrap_or_else(|_| at.unix_timestamp().to_string());
    format!("Generated: {stamp}\n\n{}\n", batch.summary_text())
}

/// Writes the report into `dir` and returns the file it created.
pub async fn save_report(dir: &Path, batch: &BatchLookupResponse) -> io::Result<PathBuf> {
    let now = OffsetDateTime::now_utc();
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(export_file_name(now));
    tokio::fs::write(&path, report_text(batch, now)).await?;
    info!(path = %path.display(), results = batch.results.len(), "saved batch report");
    Ok(path)
}

/// Reports land in the current directory, falling back to the temp dir.
pub fn default_export_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| std::env::temp_dir())
}
