//! Creates the on-disk layout of a new project.

use crate::constants::{MANIFEST_FILENAME, PACKAGE_FILES, SOURCE_DIR};
use crate::error::Result;
use crate::ioutils::{create_dir_all, ensure_empty_dir, touch_file};
use crate::manifest::{Destination, ManifestBuilder};
use std::path::PathBuf;

pub mod operation;

pub use operation::ScaffoldOperation;

/// Lays out `<target>/src/<package>/` and the manifest next to it.
pub struct Scaffolder {
    target_dir: PathBuf,
    package_name: String,
}

impl Scaffolder {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(target_dir: P, package_name: S) -> Self {
        Self { target_dir: target_dir.into(), package_name: package_name.into() }
    }

    pub fn package_dir(&self) -> PathBuf {
        self.target_dir.join(SOURCE_DIR).join(&self.package_name)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.target_dir.join(MANIFEST_FILENAME)
    }

    /// The operations [`Self::run`] performs, in order.
    pub fn plan(&self) -> Vec<ScaffoldOperation> {
        let package_dir = self.package_dir();
        let mut operations =
            vec![ScaffoldOperation::CreateDirectory { target: package_dir.clone() }];
        operations.extend(
            PACKAGE_FILES
                .iter()
                .map(|file| ScaffoldOperation::Touch { target: package_dir.join(file) }),
        );
        operations.push(ScaffoldOperation::WriteManifest { target: self.manifest_path() });
        operations
    }

    /// Checks the target is empty, then creates the package and writes the manifest.
    ///
    /// Nothing is written when the target directory already has entries.
    pub fn run(&self, manifest: &mut ManifestBuilder) -> Result<Vec<ScaffoldOperation>> {
        if !ensure_empty_dir(&self.target_dir)? {
            log::debug!("Target directory {} does not exist", self.target_dir.display());
        }

        let operations = self.plan();
        for operation in &operations {
            match operation {
                ScaffoldOperation::CreateDirectory { target } => create_dir_all(target)?,
                ScaffoldOperation::Touch { target } => touch_file(target)?,
                ScaffoldOperation::WriteManifest { target } => {
                    manifest.serialize_to(Destination::File(target))?
                }
            }
            log::info!("{}", operation.get_message(false));
        }
        Ok(operations)
    }
}
