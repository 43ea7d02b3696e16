use std::process::{Command, Stdio};

use log::{info, warn};

use crate::error::{Error, Result};

/// Something that can name a random MLB player.
///
/// Any `FnMut() -> Result<String>` closure is a source, which lets callers
/// substitute a stub for the external helper.
pub trait RandomPlayerSource {
    /// Returns a player name such as "Shohei Ohtani".
    ///
    /// # Errors
    ///
    /// Returns an error if no name could be produced.
    fn random_player_name(&mut self) -> Result<String>;
}

impl<F> RandomPlayerSource for F
where
    F: FnMut() -> Result<String>,
{
    fn random_player_name(&mut self) -> Result<String> {
        self()
    }
}

/// Runs an external helper program and reads the name from its stdout.
pub struct HelperCommand {
    command: Vec<String>,
}

impl HelperCommand {
    /// `command` is the program followed by its arguments.
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl RandomPlayerSource for HelperCommand {
    fn random_player_name(&mut self) -> Result<String> {
        let (program, arguments) = self
            .command
            .split_first()
            .ok_or(Error::EmptyHelperCommand)?;

        info!("Running random player helper: {:?}", self.command);

        let output = Command::new(program)
            .args(arguments)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::sub_process(program.clone(), e))?;

        if !output.status.success() {
            warn!(
                "Random player helper failed with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(Error::SubProcessExit(output.status.to_string()));
        }

        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if name.is_empty() {
            Err(Error::EmptySubProcessOutput)
        } else {
            Ok(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(script: &str) -> HelperCommand {
        HelperCommand::new(vec!["sh".to_string(), "-c".to_string(), script.to_string()])
    }

    #[test]
    fn test_helper_output_is_trimmed() {
        let mut helper = shell("printf '  Shohei Ohtani\\n'");
        assert_eq!(helper.random_player_name().unwrap(), "Shohei Ohtani");
    }

    #[test]
    fn test_helper_non_zero_exit() {
        let mut helper = shell("exit 3");
        assert!(matches!(
            helper.random_player_name(),
            Err(Error::SubProcessExit(_))
        ));
    }

    #[test]
    fn test_helper_empty_output() {
        let mut helper = shell("true");
        assert!(matches!(
            helper.random_player_name(),
            Err(Error::EmptySubProcessOutput)
        ));
    }

    #[test]
    fn test_helper_missing_program() {
        let mut helper = HelperCommand::new(vec!["/this/program/does/not/exist".to_string()]);
        assert!(matches!(
            helper.random_player_name(),
            Err(Error::SubProcess { .. })
        ));
    }

    #[test]
    fn test_empty_command() {
        let mut helper = HelperCommand::new(Vec::new());
        assert!(matches!(
            helper.random_player_name(),
            Err(Error::EmptyHelperCommand)
        ));
    }

    #[test]
    fn test_closure_source() {
        let mut calls = 0;
        let mut source = || -> Result<String> {
            calls += 1;
            Ok("Babe Ruth".to_string())
        };
        assert_eq!(source.random_player_name().unwrap(), "Babe Ruth");
        assert_eq!(calls, 1);
    }
}
