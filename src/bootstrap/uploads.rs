//! Uploads directory provisioning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};

/// Result of ensuring the uploads directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadsDir {
    /// Absolute (project-root-joined) path of the directory.
    pub path: PathBuf,
    /// Whether this call created it.
    pub created: bool,
}

/// Create the uploads directory if it does not exist.
///
/// An existing directory is left untouched. A file or other non-directory
/// entry at the path is an error, as is any OS failure during creation.
pub fn ensure_uploads_directory(project_root: &Path, dir: &Path) -> Result<UploadsDir> {
    let path = project_root.join(dir);

    if path.is_dir() {
        tracing::debug!("Uploads directory already present at {}", path.display());
        return Ok(UploadsDir {
            path,
            created: false,
        });
    }

    if path.exists() {
        return Err(SetupError::NotADirectory { path });
    }

    fs::create_dir_all(&path)?;
    tracing::info!("Created uploads directory at {}", path.display());

    Ok(UploadsDir {
        path,
        created: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_missing_directory() {
        let temp = TempDir::new().unwrap();

        let result = ensure_uploads_directory(temp.path(), Path::new("uploads")).unwrap();

        assert!(result.created);
        assert!(temp.path().join("uploads").is_dir());
        assert_eq!(result.path, temp.path().join("uploads"));
    }

    #[test]
    fn second_call_is_a_no_op() {
        let temp = TempDir::new().unwrap();

        let first = ensure_uploads_directory(temp.path(), Path::new("uploads")).unwrap();
        let second = ensure_uploads_directory(temp.path(), Path::new("uploads")).unwrap();

        assert!(first.created);
        assert!(!second.created);
        let dirs: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(dirs.len(), 1);
    }

    #[test]
    fn existing_directory_contents_are_untouched() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("uploads")).unwrap();
        fs::write(temp.path().join("uploads/serve.mp4"), "video").unwrap();

        let result = ensure_uploads_directory(temp.path(), Path::new("uploads")).unwrap();

        assert!(!result.created);
        assert_eq!(
            fs::read_to_string(temp.path().join("uploads/serve.mp4")).unwrap(),
            "video"
        );
    }

    #[test]
    fn creates_nested_directory() {
        let temp = TempDir::new().unwrap();

        let result = ensure_uploads_directory(temp.path(), Path::new("data/uploads")).unwrap();

        assert!(result.created);
        assert!(temp.path().join("data/uploads").is_dir());
    }

    #[test]
    fn file_in_the_way_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("uploads"), "not a dir").unwrap();

        let result = ensure_uploads_directory(temp.path(), Path::new("uploads"));

        assert!(matches!(result, Err(SetupError::NotADirectory { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn permission_failure_propagates() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        let result = ensure_uploads_directory(&locked, Path::new("uploads"));

        // Root ignores permission bits, so only assert when the write was refused
        if !locked.join("uploads").exists() {
            assert!(matches!(result, Err(SetupError::Io(_))));
        }
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }
}
