use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::types::{Error, Result};

pub const DEFAULT_SETTINGS_PATH: &str = "config.json";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Case-insensitive title filters, empty means every title matches
    pub filter_keywords: Vec<String>,
    /// Maximum number of records to keep, `<= 0` keeps all of them
    pub number_of_scrapes: i64,
    pub output_filename: String,
}

/// Read the settings file at `path`.
///
/// A missing file is logged and reported as [`Error::SettingsNotFound`] so the
/// caller can stop the run without treating it as a crash. Every key is
/// required, a file that is present but does not parse yields
/// [`Error::MalformedSettings`].
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::error!(
                "Error: {} not found. Please create it.",
                path.display()
            );
            return Err(Error::SettingsNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    let settings: Settings = serde_json::from_str(&content)?;
    log::debug!("loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    #[test]
    fn test_load_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"filter_keywords": ["Python", "Engineer"], "number_of_scrapes": 10, "output_filename": "jobs.csv"}"#,
        )
        .unwrap();

        let settings = load_settings(&path).expect("settings should load");
        assert_eq!(settings.filter_keywords, vec!["Python", "Engineer"]);
        assert_eq!(settings.number_of_scrapes, 10);
        assert_eq!(settings.output_filename, "jobs.csv");
    }

    #[test]
    fn test_negative_limit_and_empty_keywords() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"filter_keywords": [], "number_of_scrapes": -1, "output_filename": "out.csv"}"#,
        )
        .unwrap();

        let settings = load_settings(&path).unwrap();
        assert!(settings.filter_keywords.is_empty());
        assert_eq!(settings.number_of_scrapes, -1);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        match load_settings(&path) {
            Err(Error::SettingsNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected SettingsNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_key_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"filter_keywords": [], "output_filename": "out.csv"}"#).unwrap();
        assert!(matches!(
            load_settings(&path),
            Err(Error::MalformedSettings(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "filter_keywords = python").unwrap();
        assert!(matches!(
            load_settings(&path),
            Err(Error::MalformedSettings(_))
        ));
    }
}
