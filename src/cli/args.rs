use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, ArgAction, CommandFactory, FromArgMatches, Parser};
use log::LevelFilter;
use std::ffi::OsString;
use std::path::PathBuf;

const OPTIONAL_DEPS_ID: &str = "optional_deps";

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for pyproject-scaffold.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of your project.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Version number of your project.
    #[arg(short = 'p', long = "project-version", value_name = "VERSION")]
    pub project_version: Option<String>,

    /// Dependencies to add.
    #[arg(short, long, num_args = 0.., value_name = "DEP")]
    pub deps: Vec<String>,

    /// Optional dependencies; the first value is the namespace (such as `dev`).
    ///
    /// May be given several times:
    ///
    /// > pyproject-scaffold demo -o dev pytest ruff -o docs mkdocs
    #[arg(
        id = OPTIONAL_DEPS_ID,
        short = 'o',
        long = "optional-deps",
        num_args = 1..,
        action = ArgAction::Append,
        value_name = "NAMESPACE"
    )]
    pub optional_dep_values: Vec<String>,

    /// `--optional-deps` values grouped per occurrence, filled by [`Args::try_parse_grouped_from`].
    #[arg(skip)]
    pub optional_deps: Vec<Vec<String>>,

    /// Console scripts to add.
    #[arg(short, long, num_args = 0.., value_name = "NAME")]
    pub scripts: Vec<String>,

    /// Apply default dependencies.
    #[arg(long)]
    pub defaults: bool,

    /// Read default dependencies from a JSON, YAML or TOML file (implies `--defaults`).
    #[arg(long = "defaults-file", value_name = "PATH")]
    pub defaults_file: Option<PathBuf>,

    /// Use this template instead of the bundled one.
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Directory to scaffold into; must be empty.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the manifest to stdout instead of touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parses arguments, keeping each `--optional-deps` occurrence as its own group.
    pub fn try_parse_grouped_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(itr)?;
        let mut args = Self::from_arg_matches(&matches)?;
        args.optional_deps = matches
            .get_occurrences::<String>(OPTIONAL_DEPS_ID)
            .map(|occurrences| {
                occurrences.map(|values| values.cloned().collect()).collect()
            })
            .unwrap_or_default();
        Ok(args)
    }

    pub fn parse_grouped_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_grouped_from(itr).unwrap_or_else(|e| e.exit())
    }
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse_grouped_from(std::env::args_os()).unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_grouped_from(["pyproject-scaffold", "my-app"]);
        assert_eq!(args.name, "my-app");
        assert_eq!(args.project_version, None);
        assert!(args.deps.is_empty());
        assert!(args.optional_deps.is_empty());
        assert!(args.optional_dep_values.is_empty());
        assert!(args.scripts.is_empty());
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(!args.defaults);
        assert!(!args.dry_run);
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_grouped_from([
            "pyproject-scaffold",
            "my-app",
            "-p",
            "1.2.3",
            "--deps",
            "requests",
            "httpx",
            "-o",
            "dev",
            "pytest",
            "ruff",
            "-o",
            "docs",
            "mkdocs",
            "-s",
            "serve",
            "migrate",
            "--defaults",
            "--defaults-file",
            "defaults.yaml",
            "--template",
            "base.toml",
            "--output-dir",
            "out",
            "--dry-run",
            "-vv",
        ]);
        assert_eq!(args.project_version.as_deref(), Some("1.2.3"));
        assert_eq!(args.deps, vec!["requests", "httpx"]);
        assert_eq!(
            args.optional_deps,
            vec![vec!["dev", "pytest", "ruff"], vec!["docs", "mkdocs"]]
        );
        assert_eq!(args.optional_dep_values, vec!["dev", "pytest", "ruff", "docs", "mkdocs"]);
        assert_eq!(args.scripts, vec!["serve", "migrate"]);
        assert!(args.defaults);
        assert_eq!(args.defaults_file, Some(PathBuf::from("defaults.yaml")));
        assert_eq!(args.template, Some(PathBuf::from("base.toml")));
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert!(args.dry_run);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn missing_name_is_an_error() {
        let err = Args::try_parse_grouped_from(["pyproject-scaffold"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn repeated_optional_groups_stay_separate() {
        let args = Args::parse_grouped_from([
            "pyproject-scaffold",
            "demo",
            "-o",
            "dev",
            "-o",
            "dev",
            "pytest",
            "--optional-deps",
            "lint",
            "ruff",
            "mypy",
            "--dry-run",
        ]);
        assert_eq!(
            args.optional_deps,
            vec![vec!["dev"], vec!["dev", "pytest"], vec!["lint", "ruff", "mypy"]]
        );
        assert!(args.dry_run);
    }
}
