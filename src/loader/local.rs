use crate::error::{Error, Result};
use crate::loader::interface::TemplateLoader;
use crate::loader::parse_template;
use std::path::Path;

/// Loader for a template file on the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// Reads and parses the template file.
    ///
    /// # Returns
    /// * `Err(Error::TemplateReadError)` - If the file is missing, unreadable or not TOML
    fn load(&self) -> Result<toml::Table> {
        let path = self.path.as_ref();
        let template = path.display().to_string();
        log::debug!("Reading template from {template}");

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::TemplateReadError { template: template.clone(), reason: e.to_string() }
        })?;
        parse_template(&content, &template)
    }
}
