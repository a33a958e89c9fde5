//! Default dependency sets applied by `--defaults`.

use crate::constants::defaults::{DEPENDENCIES, OPTIONAL_DEPENDENCIES};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Dependencies and optional-dependency groups merged into a manifest on request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default, rename = "optional-dependencies", alias = "optional_dependencies")]
    pub optional_dependencies: IndexMap<String, Vec<String>>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            dependencies: DEPENDENCIES.iter().map(|d| d.to_string()).collect(),
            optional_dependencies: OPTIONAL_DEPENDENCIES
                .iter()
                .map(|(namespace, deps)| {
                    (namespace.to_string(), deps.iter().map(|d| d.to_string()).collect())
                })
                .collect(),
        }
    }
}

impl Defaults {
    /// Loads defaults from a JSON, YAML or TOML file, picked by extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let parse_error = |reason: String| Error::DefaultsParseError {
            path: path.display().to_string(),
            reason,
        };

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let defaults: Defaults = match extension {
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            "toml" => toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            other => {
                return Err(parse_error(format!("unsupported file extension '{other}'")))
            }
        };

        log::debug!("Loaded defaults from {}: {defaults:?}", path.display());
        Ok(defaults)
    }
}
