use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The random player helper exited with non-success code: {}", .0)]
    SubProcessExit(String),

    #[error("The random player helper printed no player name.")]
    EmptySubProcessOutput,

    #[error("No random player helper command is configured.")]
    EmptyHelperCommand,

    #[error("Error with sub process `{}`: {}", .program, .original)]
    SubProcess {
        program: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing {} file at `{}`: {}", .file_description, .path, .original)]
    Csv {
        file_description: String,
        path: String,
        original: csv::Error,
    },

    #[error("The {} file at `{}` has no `{}` column.", .file_description, .path, .column)]
    MissingColumn {
        file_description: String,
        path: String,
        column: String,
    },

    #[error("Terminal error: {}", .0)]
    Terminal(#[from] std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn csv_error(file_description: String, path: String, original: csv::Error) -> Self {
        Self::Csv {
            file_description,
            path,
            original,
        }
    }

    pub fn missing_column(file_description: String, path: String, column: &str) -> Self {
        Self::MissingColumn {
            file_description,
            path,
            column: column.to_string(),
        }
    }

    pub fn sub_process(program: String, original: std::io::Error) -> Self {
        Self::SubProcess { program, original }
    }
}
