//! Configuration path utilities for databaseball.
//!
//! This module resolves where the dataset lives and which helper command
//! produces random player names. Values come from command-line flags first,
//! then the optional settings file, then the defaults below. Shell expansions
//! like `~` are resolved in every path.

use serde::Deserialize;

/// Default path for the optional settings file
const DEFAULT_SETTINGS_PATH: &str = "~/.databaseball/settings.yml";
/// Default directory holding the four baseballdatabank CSV files
pub const DEFAULT_DATA_DIRECTORY: &str = "baseballdatabank-2023.1/core";

/// Default command for the random player helper
pub const DEFAULT_RANDOM_PLAYER_COMMAND: [&str; 2] = ["python", "Microservice.py"];

/// Contents of the settings YAML file. Every key is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub data_directory: Option<String>,
    pub random_player_command: Option<Vec<String>>,
}

/// Resolves the settings file path.
///
/// # Examples
///
/// ```
/// use databaseball_core::config::get_settings_path;
///
/// let default_path = get_settings_path(&None);
/// assert!(default_path.ends_with("settings.yml"));
/// ```
pub fn get_settings_path(settings_path_arg: &Option<String>) -> String {
    let settings_path = match settings_path_arg {
        Some(settings_path) => settings_path,
        None => DEFAULT_SETTINGS_PATH,
    };

    shellexpand::tilde(settings_path).to_string()
}

/// Resolves the data directory.
///
/// The command-line value wins over the settings file, which wins over
/// [`DEFAULT_DATA_DIRECTORY`].
pub fn get_data_directory(data_directory_arg: &Option<String>, settings: &Settings) -> String {
    let data_directory = data_directory_arg
        .as_deref()
        .or(settings.data_directory.as_deref())
        .unwrap_or(DEFAULT_DATA_DIRECTORY);

    shellexpand::tilde(data_directory).to_string()
}

/// Resolves the program and arguments used to generate a random player name.
pub fn get_random_player_command(settings: &Settings) -> Vec<String> {
    match &settings.random_player_command {
        Some(command) => command
            .iter()
            .map(|part| shellexpand::tilde(part).to_string())
            .collect(),
        None => DEFAULT_RANDOM_PLAYER_COMMAND
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}
