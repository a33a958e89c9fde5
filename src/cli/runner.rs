use crate::{
    cli::{Args, ProjectOptions},
    config::Defaults,
    error::Result,
    manifest::{Destination, ManifestBuilder},
    scaffold::Scaffolder,
};
use std::io::Write;

/// Main CLI runner that builds the manifest and scaffolds the project
pub struct Runner {
    options: ProjectOptions,
}

impl Runner {
    pub fn new(options: ProjectOptions) -> Self {
        Self { options }
    }

    /// Builds the manifest, then either prints it or scaffolds the target directory
    pub fn run(self) -> Result<()> {
        let mut manifest = self.build_manifest()?;

        if self.options.dry_run {
            return self.preview(&mut manifest, &mut std::io::stdout().lock());
        }

        let scaffolder =
            Scaffolder::new(&self.options.output_dir, manifest.name().normalized());
        scaffolder.run(&mut manifest)?;

        println!(
            "Project '{}' scaffolded successfully in {}.",
            manifest.name(),
            self.options.output_dir.display()
        );
        Ok(())
    }

    /// Applies every requested option to a fresh builder
    pub fn build_manifest(&self) -> Result<ManifestBuilder> {
        let options = &self.options;
        let mut manifest = ManifestBuilder::with_loader(options.name.as_str(), &options.template)?;

        if let Some(version) = &options.version {
            manifest.set_version(version.as_str());
        }
        if !options.dependencies.is_empty() {
            manifest.add_dependencies(options.dependencies.iter().cloned());
        }
        for group in &options.optional_dependencies {
            manifest.add_optional_dependencies(
                group.namespace.as_str(),
                group.dependencies.iter().cloned(),
            );
        }
        for script in &options.scripts {
            manifest.add_script(script.as_str());
        }
        if options.apply_defaults {
            let defaults = match &options.defaults_file {
                Some(path) => Defaults::load(path)?,
                None => Defaults::default(),
            };
            manifest.apply_defaults_from(&defaults);
        }

        Ok(manifest)
    }

    /// Writes the manifest to `out` and logs what a real run would do
    fn preview(&self, manifest: &mut ManifestBuilder, out: &mut dyn Write) -> Result<()> {
        let scaffolder =
            Scaffolder::new(&self.options.output_dir, manifest.name().normalized());
        for operation in scaffolder.plan() {
            log::info!("{}", operation.get_message(true));
        }
        manifest.serialize_to(Destination::Stream(out))
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(ProjectOptions::from(args));
    runner.run()
}
