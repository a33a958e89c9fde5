/// Handles argument parsing and drives a run.
pub mod cli;

/// Default dependency sets.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Sources for the base manifest template.
pub mod loader;

/// Builds and serializes the project manifest.
pub mod manifest;

/// Creates the project directory layout.
pub mod scaffold;

pub use manifest::{Destination, ManifestBuilder, ProjectName, Section};
