use std::path::Path;

use crate::types::{JobRecord, Result};

/// Write `jobs` as csv to `path`, replacing any existing file.
///
/// The header row comes from the field names of the records. Nothing is
/// written when `jobs` is empty. Returns the number of rows written.
pub fn save_to_csv(jobs: &[JobRecord], path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    if jobs.is_empty() {
        log::info!("No jobs matched the criteria. There is nothing to save.");
        return Ok(0);
    }

    let mut writer = csv::Writer::from_path(path)?;
    for job in jobs {
        writer.serialize(job)?;
    }
    writer.flush()?;

    log::info!(
        "Scraping has been completed with {} result(s). Data saved to {}.",
        jobs.len(),
        path.display()
    );
    Ok(jobs.len())
}
