//! Builds the `pyproject.toml` manifest on top of a base template.

use crate::config::Defaults;
use crate::constants::{keys, DEFAULT_VERSION, ENTRY_POINT_FUNCTION, ENTRY_POINT_MODULE};
use crate::error::{Error, Result};
use crate::loader::{load_base_document, TemplateLoader};
use indexmap::{IndexMap, IndexSet};
use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use toml::{Table, Value};

/// A manifest table that only exists once something has been written to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Section<T> {
    #[default]
    Absent,
    Present(T),
}

impl<T: Default> Section<T> {
    /// Materializes the section on first use and returns it for writing.
    pub fn get_or_insert_default(&mut self) -> &mut T {
        match self {
            Section::Present(value) => value,
            Section::Absent => {
                *self = Section::Present(T::default());
                self.get_or_insert_default()
            }
        }
    }
}

impl<T> Section<T> {
    pub fn get(&self) -> Option<&T> {
        match self {
            Section::Present(value) => Some(value),
            Section::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Section::Present(_))
    }
}

/// A project name as given, plus its importable package form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Package name: every character other than alphanumerics and `_` becomes `_`.
    pub fn normalized(&self) -> String {
        self.0
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
            .collect()
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a finalized manifest is written.
pub enum Destination<'a> {
    /// Overwrite the file at this path.
    File(&'a Path),
    /// Write the rendered text to a stream.
    Stream(&'a mut dyn Write),
}

/// Accumulates dependencies, optional groups, scripts and a version over a base document.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    document: Table,
    name: ProjectName,
    dependencies: Vec<String>,
    optional_dependencies: Section<IndexMap<String, Vec<String>>>,
    scripts: Section<IndexMap<String, String>>,
    version: String,
}

impl ManifestBuilder {
    /// Creates a builder seeded from the bundled template.
    pub fn new<S: Into<String>>(project_name: S) -> Result<Self> {
        Self::from_document(project_name, load_base_document()?)
    }

    /// Creates a builder seeded from whatever `loader` produces.
    pub fn with_loader<S: Into<String>>(
        project_name: S,
        loader: &dyn TemplateLoader,
    ) -> Result<Self> {
        Self::from_document(project_name, loader.load()?)
    }

    /// Creates a builder over an already parsed document.
    ///
    /// # Returns
    /// * `Err(Error::MalformedTemplateError)` - If the document has no `project` table
    pub fn from_document<S: Into<String>>(project_name: S, document: Table) -> Result<Self> {
        match document.get(keys::PROJECT) {
            Some(Value::Table(_)) => {}
            Some(other) => {
                return Err(Error::MalformedTemplateError(format!(
                    "'{}' must be a table, found {}",
                    keys::PROJECT,
                    other.type_str()
                )))
            }
            None => {
                return Err(Error::MalformedTemplateError(format!(
                    "missing '{}' table",
                    keys::PROJECT
                )))
            }
        }

        Ok(Self {
            document,
            name: ProjectName::new(project_name),
            dependencies: Vec::new(),
            optional_dependencies: Section::Absent,
            scripts: Section::Absent,
            version: DEFAULT_VERSION.to_string(),
        })
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn optional_dependencies(&self) -> Option<&IndexMap<String, Vec<String>>> {
        self.optional_dependencies.get()
    }

    pub fn scripts(&self) -> Option<&IndexMap<String, String>> {
        self.scripts.get()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The document as it stands; fields are only written by [`Self::finalize`].
    pub fn document(&self) -> &Table {
        &self.document
    }

    /// Appends dependencies, collapsing duplicates within this call only.
    pub fn add_dependencies<I, S>(&mut self, dependencies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: IndexSet<String> = dependencies.into_iter().map(Into::into).collect();
        log::debug!("Adding dependencies: {unique:?}");
        self.dependencies.extend(unique);
    }

    /// Appends dependencies to the `namespace` group, keeping order and duplicates.
    pub fn add_optional_dependencies<N, I, S>(&mut self, namespace: N, dependencies: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let namespace = namespace.into();
        let group = self
            .optional_dependencies
            .get_or_insert_default()
            .entry(namespace.clone())
            .or_default();
        let before = group.len();
        group.extend(dependencies.into_iter().map(Into::into));
        log::debug!(
            "Added {} optional dependencies to '{namespace}'",
            group.len() - before
        );
    }

    pub fn set_version<S: Into<String>>(&mut self, version: S) {
        self.version = version.into();
    }

    /// Registers a console script pointing at `<package>.main:FUNCNAME`.
    pub fn add_script<S: Into<String>>(&mut self, name: S) {
        let target = format!(
            "{}.{ENTRY_POINT_MODULE}:{ENTRY_POINT_FUNCTION}",
            self.name.normalized()
        );
        let name = name.into();
        log::debug!("Adding script '{name}' -> '{target}'");
        self.scripts.get_or_insert_default().insert(name, target);
    }

    /// Applies the built-in default dependencies and optional groups.
    pub fn apply_defaults(&mut self) {
        self.apply_defaults_from(&Defaults::default());
    }

    pub fn apply_defaults_from(&mut self, defaults: &Defaults) {
        log::info!("Applying default dependencies");
        self.add_dependencies(defaults.dependencies.iter().cloned());
        for (namespace, dependencies) in &defaults.optional_dependencies {
            self.add_optional_dependencies(namespace.as_str(), dependencies.iter().cloned());
        }
    }

    /// Writes the accumulated state into the `project` table and returns the document.
    ///
    /// Each call rewrites the same fields from the current state.
    pub fn finalize(&mut self) -> Result<&Table> {
        let project = self
            .document
            .get_mut(keys::PROJECT)
            .and_then(Value::as_table_mut)
            .ok_or_else(|| {
                Error::MalformedTemplateError(format!("missing '{}' table", keys::PROJECT))
            })?;

        project.insert(keys::NAME.into(), Value::String(self.name.raw().to_string()));
        project.insert(
            keys::DEPENDENCIES.into(),
            Value::Array(self.dependencies.iter().cloned().map(Value::String).collect()),
        );
        project.insert(keys::VERSION.into(), Value::String(self.version.clone()));

        if let Section::Present(groups) = &self.optional_dependencies {
            let table: Table = groups
                .iter()
                .map(|(namespace, deps)| {
                    let deps = deps.iter().cloned().map(Value::String).collect();
                    (namespace.clone(), Value::Array(deps))
                })
                .collect();
            project.insert(keys::OPTIONAL_DEPENDENCIES.into(), Value::Table(table));
        }

        if let Section::Present(scripts) = &self.scripts {
            let table: Table = scripts
                .iter()
                .map(|(name, target)| (name.clone(), Value::String(target.clone())))
                .collect();
            project.insert(keys::SCRIPTS.into(), Value::Table(table));
        }

        Ok(&self.document)
    }

    /// Finalizes and renders the manifest as TOML text.
    pub fn render(&mut self) -> Result<String> {
        let document = self.finalize()?;
        Ok(toml::to_string(document)?)
    }

    pub fn serialize_to(&mut self, destination: Destination<'_>) -> Result<()> {
        let content = self.render()?;
        match destination {
            Destination::File(path) => {
                log::info!("Writing manifest to {}", path.display());
                std::fs::write(path, content)?;
            }
            Destination::Stream(out) => out.write_all(content.as_bytes())?,
        }
        Ok(())
    }
}
