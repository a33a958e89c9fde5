use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Ensures the target directory is either missing or empty.
///
/// # Returns
/// * `Ok(true)` - The directory exists and is empty
/// * `Ok(false)` - The directory does not exist yet
/// * `Err(Error::TargetDirectoryNotEmptyError)` - The directory has entries
pub fn ensure_empty_dir<P: AsRef<Path>>(target_dir: P) -> Result<bool> {
    let target_dir = target_dir.as_ref();
    if !target_dir.exists() {
        return Ok(false);
    }
    if std::fs::read_dir(target_dir)?.next().is_some() {
        return Err(Error::TargetDirectoryNotEmptyError {
            target_dir: target_dir.display().to_string(),
        });
    }
    Ok(true)
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Creates an empty file, creating parent directories as needed.
pub fn touch_file<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = absolute(dest_path.as_ref());
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dest_path)
        .map(|_| ())
        .map_err(Error::IoError)
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_directory_passes() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_empty_dir(dir.path()).unwrap());
    }

    #[test]
    fn missing_directory_passes() {
        let dir = TempDir::new().unwrap();
        assert!(!ensure_empty_dir(dir.path().join("new")).unwrap());
    }

    #[test]
    fn non_empty_directory_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".hidden"), "").unwrap();
        assert!(matches!(
            ensure_empty_dir(dir.path()),
            Err(Error::TargetDirectoryNotEmptyError { .. })
        ));
    }

    #[test]
    fn touch_creates_parents_and_keeps_content() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a/b/c.py");
        touch_file(&file).unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "");

        std::fs::write(&file, "print()").unwrap();
        touch_file(&file).unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "print()");
    }
}
