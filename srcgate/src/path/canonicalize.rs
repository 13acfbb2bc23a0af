//! Path canonicalization functions.
//!
//! Canonicalization follows symlinks to real paths and is the only part of
//! path handling that touches the filesystem. It is used to build the
//! sandbox directory set, never to compute source unit names.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Canonicalize a path by following symlinks.
///
/// The path must exist. `dunce` is used so that Windows results stay in
/// ordinary `C:\...` form instead of the verbatim `\\?\C:\...` form.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Another I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use srcgate::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}

/// Canonicalize a path, returning it unchanged if it does not exist.
///
/// # Errors
///
/// Returns an error only for I/O errors other than "not found".
///
/// # Examples
///
/// ```no_run
/// use srcgate::path::canonicalize::try_canonicalize;
/// use std::path::Path;
///
/// let (path, canonical) = try_canonicalize(Path::new("/nonexistent")).unwrap();
/// assert_eq!(path, Path::new("/nonexistent"));
/// assert!(!canonical);
/// ```
pub fn try_canonicalize(path: &Path) -> Result<(PathBuf, bool)> {
    match canonicalize(path) {
        Ok(canonical) => Ok((canonical, true)),
        Err(e) if e.is_not_found() => Ok((path.to_path_buf(), false)),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_canonicalize_nonexistent() {
        let result = canonicalize(Path::new("/nonexistent/path/xyz"));
        assert!(matches!(result.unwrap_err(), Error::PathNotFound { .. }));
    }

    #[test]
    fn test_try_canonicalize_existing() {
        let dir = tempdir().unwrap();
        let (path, canonical) = try_canonicalize(dir.path()).unwrap();
        assert_eq!(path, dunce::canonicalize(dir.path()).unwrap());
        assert!(canonical);
    }

    #[test]
    fn test_try_canonicalize_nonexistent() {
        let path = Path::new("/nonexistent/path");
        let (result, canonical) = try_canonicalize(path).unwrap();
        assert_eq!(result, path);
        assert!(!canonical);
    }

    #[cfg(unix)]
    #[test]
    fn test_canonicalize_symlink() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");

        fs::create_dir(&target).unwrap();
        symlink(&target, &link).unwrap();

        let canonical = canonicalize(&link).unwrap();
        assert_eq!(canonical, fs::canonicalize(&target).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_canonicalize_resolves_dot_dot_through_symlink() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("x/y/z")).unwrap();
        fs::create_dir(dir.path().join("r")).unwrap();
        symlink("../x/y", dir.path().join("r/sym")).unwrap();

        let canonical = canonicalize(&dir.path().join("r/sym/z")).unwrap();
        assert_eq!(canonical, fs::canonicalize(dir.path().join("x/y/z")).unwrap());
    }
}
