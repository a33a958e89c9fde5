use crate::cli::Args;
use crate::loader::TemplateSource;
use std::path::PathBuf;

/// One `--optional-deps` occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalGroup {
    pub namespace: String,
    pub dependencies: Vec<String>,
}

impl OptionalGroup {
    /// Splits `[namespace, deps...]`; an empty occurrence yields `None`.
    pub fn from_values(values: &[String]) -> Option<Self> {
        let (namespace, dependencies) = values.split_first()?;
        Some(Self { namespace: namespace.clone(), dependencies: dependencies.to_vec() })
    }
}

/// What the user asked for, after argument parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectOptions {
    pub name: String,
    pub version: Option<String>,
    pub dependencies: Vec<String>,
    pub optional_dependencies: Vec<OptionalGroup>,
    pub scripts: Vec<String>,
    pub apply_defaults: bool,
    pub defaults_file: Option<PathBuf>,
    pub template: TemplateSource,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

impl From<Args> for ProjectOptions {
    fn from(args: Args) -> Self {
        Self {
            name: args.name,
            version: args.project_version,
            dependencies: args.deps,
            optional_dependencies: args
                .optional_deps
                .iter()
                .filter_map(|values| OptionalGroup::from_values(values))
                .collect(),
            scripts: args.scripts,
            apply_defaults: args.defaults || args.defaults_file.is_some(),
            defaults_file: args.defaults_file,
            template: TemplateSource::from(args.template),
            output_dir: args.output_dir,
            dry_run: args.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_namespace_from_dependencies() {
        let values = vec!["dev".to_string(), "pytest".to_string(), "ruff".to_string()];
        let group = OptionalGroup::from_values(&values).unwrap();
        assert_eq!(group.namespace, "dev");
        assert_eq!(group.dependencies, vec!["pytest", "ruff"]);
    }

    #[test]
    fn namespace_alone_has_no_dependencies() {
        let group = OptionalGroup::from_values(&["docs".to_string()]).unwrap();
        assert!(group.dependencies.is_empty());
        assert_eq!(OptionalGroup::from_values(&[]), None);
    }

    #[test]
    fn defaults_file_implies_defaults() {
        let args = Args::parse_grouped_from(["pyproject-scaffold", "demo", "--defaults-file", "d.json"]);
        let options = ProjectOptions::from(args);
        assert!(options.apply_defaults);
        assert_eq!(options.defaults_file, Some(PathBuf::from("d.json")));
        assert_eq!(options.template, TemplateSource::Bundled);
    }

    #[test]
    fn converts_parsed_args() {
        let args = Args::parse_grouped_from([
            "pyproject-scaffold",
            "demo",
            "-p",
            "0.3.0",
            "-o",
            "dev",
            "pytest",
            "--template",
            "custom.toml",
        ]);
        let options = ProjectOptions::from(args);
        assert_eq!(options.version.as_deref(), Some("0.3.0"));
        assert_eq!(
            options.optional_dependencies,
            vec![OptionalGroup {
                namespace: "dev".to_string(),
                dependencies: vec!["pytest".to_string()]
            }]
        );
        assert_eq!(options.template, TemplateSource::FileSystem(PathBuf::from("custom.toml")));
        assert!(!options.apply_defaults);
    }
}
