use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to scrape data from: '{url}', status code: {status}")]
    RequestNotOk {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Content not found in html: '{0}'")]
    ContentNotFound(&'static str),
    #[error("Settings file not found: '{}'", .0.display())]
    SettingsNotFound(PathBuf),
    #[error("Malformed settings: '{0}'")]
    MalformedSettings(#[from] serde_json::Error),
    #[error("File error: '{0}'")]
    IoError(#[from] std::io::Error),
    #[error("Csv error: '{0}'")]
    Csv(#[from] csv::Error),
}

/// A single job listing as it ends up in the output file.
///
/// Field order is the column order of the written header.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Taken verbatim from the card, may be relative.
    pub link: String,
}
