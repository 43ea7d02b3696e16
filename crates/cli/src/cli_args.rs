//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

/// Command-line arguments for the `dbb` binary.
///
/// Without a query the interactive menu is shown; with one, the lookup is
/// printed directly.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use databaseball_cli::cli_args::Args;
///
/// let args = Args::parse_from(["dbb", "Babe", "Ruth"]);
/// assert_eq!(args.query(), Some("Babe Ruth".to_string()));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Directory containing `People.csv`, `Batting.csv`, `Fielding.csv` and `Pitching.csv`.
    ///
    /// Overrides the settings file. Defaults to `baseballdatabank-2023.1/core`.
    #[arg(long, short = 'd')]
    pub data_directory: Option<String>,

    /// Path to the settings YAML file.
    ///
    /// If not provided, defaults to `~/.databaseball/settings.yml`.
    #[arg(long, short = 's')]
    pub settings_path: Option<String>,

    /// Player name to look up without entering the menu.
    ///
    /// # Examples
    /// ```bash
    /// dbb Babe Ruth
    /// ```
    #[arg(trailing_var_arg = true)]
    pub query: Vec<String>,
}

impl Args {
    /// The query words joined by single spaces, if any were given.
    pub fn query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}
