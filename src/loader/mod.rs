use crate::error::{Error, Result};
use crate::loader::{bundled::BundledTemplate, local::LocalLoader};
use std::path::PathBuf;

pub mod bundled;
pub mod interface;
pub mod local;

pub use bundled::BUNDLED_TEMPLATE;
pub use interface::TemplateLoader;

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSource {
    /// The template compiled into the binary
    Bundled,
    /// Template file on the local filesystem
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Bundled => write!(f, "bundled template"),
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

impl From<Option<PathBuf>> for TemplateSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => TemplateSource::FileSystem(path),
            None => TemplateSource::Bundled,
        }
    }
}

impl TemplateLoader for TemplateSource {
    fn load(&self) -> Result<toml::Table> {
        log::debug!("Loading {self}");
        match self {
            TemplateSource::Bundled => BundledTemplate.load(),
            TemplateSource::FileSystem(path) => LocalLoader::new(path).load(),
        }
    }
}

/// Returns a fresh copy of the bundled base document.
pub fn load_base_document() -> Result<toml::Table> {
    BundledTemplate.load()
}

/// Parses template text, tagging failures with where the text came from.
pub(crate) fn parse_template(content: &str, template: &str) -> Result<toml::Table> {
    content.parse::<toml::Table>().map_err(|e| Error::TemplateReadError {
        template: template.to_string(),
        reason: e.to_string(),
    })
}
