use crate::error::Result;

/// Trait for loading the base manifest document from different sources.
pub trait TemplateLoader {
    /// Loads the template and parses it into a TOML table.
    ///
    /// # Returns
    /// * `Result<toml::Table>` - The base document
    fn load(&self) -> Result<toml::Table>;
}
