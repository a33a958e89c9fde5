use crate::error::Result;
use crate::loader::interface::TemplateLoader;
use crate::loader::parse_template;

/// The template shipped inside the binary.
pub const BUNDLED_TEMPLATE: &str = include_str!("../../static/pyproject.toml");

/// Loader for the template compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledTemplate;

impl TemplateLoader for BundledTemplate {
    /// Parses a fresh copy of the bundled template, so builders never share a document.
    fn load(&self) -> Result<toml::Table> {
        parse_template(BUNDLED_TEMPLATE, "<bundled>")
    }
}
