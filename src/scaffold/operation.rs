use std::path::PathBuf;

/// A single filesystem step of scaffolding a project.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaffoldOperation {
    CreateDirectory { target: PathBuf },
    Touch { target: PathBuf },
    WriteManifest { target: PathBuf },
}

impl ScaffoldOperation {
    pub fn target(&self) -> &PathBuf {
        match self {
            ScaffoldOperation::CreateDirectory { target }
            | ScaffoldOperation::Touch { target }
            | ScaffoldOperation::WriteManifest { target } => target,
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            ScaffoldOperation::CreateDirectory { target } => {
                format!("{}Creating directory '{}'", prefix, target.display())
            }
            ScaffoldOperation::Touch { target } => {
                format!("{}Creating empty file '{}'", prefix, target.display())
            }
            ScaffoldOperation::WriteManifest { target } => {
                format!("{}Writing manifest '{}'", prefix, target.display())
            }
        }
    }
}
