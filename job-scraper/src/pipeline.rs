use std::path::{Path, PathBuf};

use reqwest::Client;

use crate::export::save_to_csv;
use crate::fake_jobs::extract::extract;
use crate::fake_jobs::scraper::{fetch_document, locate_cards};
use crate::settings::{load_settings, Settings};
use crate::types::{Error, Result};

/// Why a run ended without writing any rows.
#[derive(Debug)]
pub enum EmptyReason {
    /// The page could not be retrieved.
    FetchFailed(Error),
    /// The page was retrieved but lacked the named structure.
    StructureMissing(&'static str),
    /// Cards were found but none survived filtering.
    NoMatches,
}

#[derive(Debug)]
pub enum Outcome {
    Saved { count: usize, path: PathBuf },
    SettingsMissing(PathBuf),
    NothingSaved(EmptyReason),
}

/// Load the settings at `settings_path` and scrape `url` with them.
///
/// A missing settings file ends the run with [`Outcome::SettingsMissing`].
/// Malformed settings and failures writing the output are returned as errors.
pub async fn run(client: &Client, settings_path: impl AsRef<Path>, url: &str) -> Result<Outcome> {
    let settings = match load_settings(settings_path) {
        Ok(settings) => settings,
        Err(Error::SettingsNotFound(path)) => return Ok(Outcome::SettingsMissing(path)),
        Err(e) => return Err(e),
    };
    scrape_to_csv(client, url, &settings).await
}

/// Fetch `url`, extract the jobs matching `settings` and save them.
///
/// Fetch and page structure failures are logged and end the run with
/// [`Outcome::NothingSaved`].
pub async fn scrape_to_csv(client: &Client, url: &str, settings: &Settings) -> Result<Outcome> {
    let (jobs, reason) = match fetch_document(client, url).await {
        Err(e) => {
            log::error!("Error fetching URL: {}", e);
            (Vec::new(), EmptyReason::FetchFailed(e))
        }
        Ok(doc) => match locate_cards(&doc) {
            Err(Error::ContentNotFound(what)) => {
                log::error!("Error: Could not find the {} in the page.", what);
                (Vec::new(), EmptyReason::StructureMissing(what))
            }
            Err(e) => return Err(e),
            Ok(cards) => (
                extract(
                    cards,
                    &settings.filter_keywords,
                    settings.number_of_scrapes,
                ),
                EmptyReason::NoMatches,
            ),
        },
    };

    let path = PathBuf::from(&settings.output_filename);
    let count = save_to_csv(&jobs, &path)?;
    if count == 0 {
        return Ok(Outcome::NothingSaved(reason));
    }
    Ok(Outcome::Saved { count, path })
}
