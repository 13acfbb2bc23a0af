//! The set of directories later import resolution may read from.
//!
//! Directories are stored in canonical, symlink-resolved form whenever they
//! exist, so the boundary reflects where files physically live rather than
//! how they were named. The set only ever grows during one ingestion.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::path::canonicalize::try_canonicalize;
use crate::path::WorkingDirectory;

/// Deduplicated, ordered set of allowed directories.
///
/// # Examples
///
/// ```no_run
/// use srcgate::sandbox::SandboxDirectorySet;
/// use std::path::Path;
///
/// let mut sandbox = SandboxDirectorySet::new();
/// sandbox.register(Path::new("/project/contracts/token.sol")).unwrap();
///
/// assert!(sandbox.is_allowed(Path::new("/project/contracts/lib/math.sol")));
/// assert!(!sandbox.is_allowed(Path::new("/etc/passwd")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SandboxDirectorySet {
    directories: BTreeSet<PathBuf>,
}

impl SandboxDirectorySet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the directory containing `file`.
    ///
    /// # Errors
    ///
    /// Returns an error if canonicalization fails for a reason other than
    /// the directory not existing.
    pub fn register(&mut self, file: &Path) -> Result<()> {
        match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.register_directory(parent),
            _ => self.register_directory(Path::new(".")),
        }
    }

    /// Register `directory` itself.
    ///
    /// An existing directory is inserted in canonical form. A missing one is
    /// inserted as given.
    ///
    /// # Errors
    ///
    /// Returns an error if canonicalization fails for a reason other than
    /// the directory not existing.
    pub fn register_directory(&mut self, directory: &Path) -> Result<()> {
        let (resolved, canonical) = try_canonicalize(directory)?;
        if !canonical {
            log::debug!(
                "Allowed directory {} does not exist, keeping it literally",
                directory.display()
            );
        }
        self.insert(resolved);
        Ok(())
    }

    /// Register the directory contributed by a remapping target.
    ///
    /// `directory` is the lexically cleaned target directory. If it exists
    /// (relative targets are looked up from `cwd`) its canonical form is
    /// inserted, otherwise the text itself, so relative targets stay
    /// relative.
    ///
    /// # Errors
    ///
    /// Returns an error if canonicalization fails for a reason other than
    /// the directory not existing.
    pub fn register_remapping_target(&mut self, directory: &str, cwd: &WorkingDirectory) -> Result<()> {
        let (resolved, canonical) = try_canonicalize(&cwd.host_join(directory))?;
        if canonical {
            self.insert(resolved);
        } else {
            self.insert(PathBuf::from(directory));
        }
        Ok(())
    }

    fn insert(&mut self, directory: PathBuf) {
        if self.directories.insert(directory.clone()) {
            log::debug!("Allowed directory: {}", directory.display());
        }
    }

    /// Whether `directory` is in the set exactly.
    #[must_use]
    pub fn contains(&self, directory: &Path) -> bool {
        self.directories.contains(directory)
    }

    /// Whether `path` is at or under any allowed directory.
    ///
    /// Comparison is component-wise; `path` should already be canonical.
    #[must_use]
    pub fn is_allowed(&self, path: &Path) -> bool {
        self.directories.iter().any(|dir| path.starts_with(dir))
    }

    /// Iterate over the directories in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.directories.iter().map(PathBuf::as_path)
    }

    /// Number of directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directories.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}

impl<'a> IntoIterator for &'a SandboxDirectorySet {
    type Item = &'a PathBuf;
    type IntoIter = std::collections::btree_set::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.directories.iter()
    }
}
