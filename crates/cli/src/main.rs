use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use databaseball_cli::cli_args::Args;
use databaseball_cli::lookup::print_lookup;
use databaseball_cli::screen::CrosstermScreen;
use databaseball_cli::shell::Shell;
use databaseball_core::dataset::Dataset;
use databaseball_core::error::Result;
use databaseball_core::execution::HelperCommand;
use databaseball_core::{config, file_handling};

fn execute() -> Result<ExitCode> {
    let args = Args::parse();

    let settings_path = config::get_settings_path(&args.settings_path);
    debug!("Settings path: `{}`", settings_path);
    let settings = file_handling::get_settings(&settings_path)?;

    let data_directory = config::get_data_directory(&args.data_directory, &settings);
    debug!("Data directory: `{}`", data_directory);
    let dataset = Dataset::load(&data_directory)?;

    if let Some(query) = args.query() {
        let found = print_lookup(&mut stdout().lock(), &dataset, &query)?;
        return Ok(if found {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let random_players = HelperCommand::new(config::get_random_player_command(&settings));
    // The terminal is restored when the screen is dropped
    let screen = CrosstermScreen::enter()?;

    Shell::new(&dataset, screen, random_players).run()?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
