pub mod args;
pub mod options;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, Args};
pub use options::{OptionalGroup, ProjectOptions};
pub use runner::{run, Runner};
