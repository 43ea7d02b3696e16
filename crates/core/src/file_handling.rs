//! File handling for databaseball.
//!
//! This module opens the settings file and the dataset's CSV files, turning
//! every failure into an [`Error`] that names the file involved.

use std::fs::File;
use std::path::Path;

use log::debug;

use crate::config::Settings;
use crate::error::{Error, Result};

pub(crate) fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn get_settings_reader(settings_path: &str) -> Result<Option<File>> {
    if !Path::exists(Path::new(settings_path)) {
        return Ok(None);
    }

    match get_reader("settings", settings_path) {
        Ok(f) => Ok(Some(f)),
        Err(e) => Err(e),
    }
}

/// Reads the settings file.
///
/// A missing file is not an error: the defaults are returned instead.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - The YAML doesn't match the expected structure
pub fn get_settings(settings_path: &str) -> Result<Settings> {
    let Some(settings_reader) = get_settings_reader(settings_path)? else {
        debug!("No settings file at `{}`, using defaults", settings_path);
        return Ok(Settings::default());
    };

    // An empty file deserializes to YAML null, not to an empty mapping
    let settings: serde_yaml::Result<Option<Settings>> = serde_yaml::from_reader(settings_reader);

    match settings {
        Ok(settings) => Ok(settings.unwrap_or_default()),
        Err(e) => Err(Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )),
    }
}

/// Path of one of the dataset's files inside the data directory.
pub fn data_file_path(data_directory: &str, file_name: &str) -> String {
    Path::new(data_directory)
        .join(file_name)
        .to_string_lossy()
        .to_string()
}
