use crate::constants::exit_codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The base template could not be read or is not valid TOML.
    #[error("Failed to read template '{template}'. Original error: {reason}")]
    TemplateReadError { template: String, reason: String },

    /// The template parsed but lacks the structure the manifest needs.
    #[error("Malformed template: {0}.")]
    MalformedTemplateError(String),

    #[error("Cannot proceed: target directory '{target_dir}' is not empty.")]
    TargetDirectoryNotEmptyError { target_dir: String },

    #[error("Failed to serialize manifest. Original error: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to parse defaults file '{path}'. Original error: {reason}")]
    DefaultsParseError { path: String, reason: String },
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
