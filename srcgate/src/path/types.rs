//! Core path types.
//!
//! This module defines the value types that flow through ingestion:
//! - [`NormalizedPath`]: an absolute, platform-neutral, lexically clean path
//! - [`SourceUnitName`]: the key under which source content is stored
//! - [`WorkingDirectory`]: the process working directory, captured once

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::env;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::path::normalize;

/// Source unit name reserved for content read from standard input.
pub const STDIN_SOURCE_NAME: &str = "<stdin>";

/// An absolute path in platform-neutral form.
///
/// The text always has exactly one leading `/`, uses `/` between segments,
/// and contains no empty, `.` or `..` segments. A drive letter or UNC marker
/// stripped during normalization is remembered separately so the path can
/// still be handed to the host filesystem, but it takes no part in equality,
/// ordering or display: every root collapses to the same abstract root.
///
/// # Examples
///
/// ```
/// use srcgate::path::NormalizedPath;
///
/// let root = NormalizedPath::root();
/// assert_eq!(root.as_str(), "/");
/// assert!(root.is_root());
/// ```
#[derive(Debug, Clone)]
pub struct NormalizedPath {
    text: String,
    prefix: Option<String>,
}

impl NormalizedPath {
    /// The abstract filesystem root.
    #[must_use]
    pub fn root() -> Self {
        Self {
            text: "/".to_string(),
            prefix: None,
        }
    }

    /// Assemble a path from already-resolved segments.
    pub(crate) fn from_segments<S: AsRef<str>>(prefix: Option<String>, segments: &[S]) -> Self {
        let mut text = String::with_capacity(
            segments.iter().map(|s| s.as_ref().len() + 1).sum::<usize>().max(1),
        );
        for segment in segments {
            text.push('/');
            text.push_str(segment.as_ref());
        }
        if text.is_empty() {
            text.push('/');
        }
        Self { text, prefix }
    }

    /// The normalized text, e.g. `/home/user/a.sol`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The host root prefix stripped during normalization (`C:` for a drive,
    /// `/` for UNC), if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Iterate over the path segments below the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::path::{normalize, NormalizedPath};
    ///
    /// let path = normalize::normalize("/a/b/c.sol", &NormalizedPath::root());
    /// let segments: Vec<_> = path.segments().collect();
    /// assert_eq!(segments, vec!["a", "b", "c.sol"]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.text.split('/').filter(|segment| !segment.is_empty())
    }

    /// Check whether this is the root itself.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.text == "/"
    }

    /// The last segment, or `None` for the root.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// The containing directory. The root is its own parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::path::{normalize, NormalizedPath};
    ///
    /// let path = normalize::normalize("/a/b/c.sol", &NormalizedPath::root());
    /// assert_eq!(path.parent().as_str(), "/a/b");
    /// assert_eq!(NormalizedPath::root().parent().as_str(), "/");
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        let segments: Vec<&str> = self.segments().collect();
        let keep = segments.len().saturating_sub(1);
        Self::from_segments(self.prefix.clone(), &segments[..keep])
    }

    /// The path as the host filesystem should see it.
    ///
    /// On POSIX hosts this is the normalized text itself; on Windows the
    /// stripped drive or UNC prefix is put back in front.
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        match &self.prefix {
            Some(prefix) => PathBuf::from(format!("{prefix}{}", self.text)),
            None => PathBuf::from(&self.text),
        }
    }
}

impl PartialEq for NormalizedPath {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for NormalizedPath {}

impl Hash for NormalizedPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for NormalizedPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NormalizedPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for NormalizedPath {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Serialize for NormalizedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// The canonical key identifying one piece of source text to the compiler.
///
/// Source unit names always use `/` between segments. They are either
/// relative to the base path (or working directory), a fully-qualified
/// normalized path, or the literal [`STDIN_SOURCE_NAME`].
///
/// # Examples
///
/// ```
/// use srcgate::path::SourceUnitName;
///
/// let name = SourceUnitName::new("contracts/token.sol");
/// assert_eq!(name.as_str(), "contracts/token.sol");
/// assert!(!name.is_stdin());
/// assert!(SourceUnitName::stdin().is_stdin());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SourceUnitName(String);

impl SourceUnitName {
    /// Wrap a string as a source unit name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name given to standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self(STDIN_SOURCE_NAME.to_string())
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the standard input name.
    ///
    /// A file literally named `<stdin>` produces the same name; the two are
    /// indistinguishable once stored.
    #[must_use]
    pub fn is_stdin(&self) -> bool {
        self.0 == STDIN_SOURCE_NAME
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SourceUnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SourceUnitName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for SourceUnitName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for SourceUnitName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// The process working directory, captured once per invocation.
///
/// Both the host form (for filesystem calls) and the normalized form (for
/// name computation) are kept so nothing downstream reads process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDirectory {
    host: PathBuf,
    normalized: NormalizedPath,
}

impl WorkingDirectory {
    /// Use `path` as the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is relative or not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::path::WorkingDirectory;
    /// use std::path::Path;
    ///
    /// # #[cfg(unix)]
    /// # {
    /// let cwd = WorkingDirectory::new(Path::new("/work/./project/")).unwrap();
    /// assert_eq!(cwd.normalized().as_str(), "/work/project");
    /// # }
    /// assert!(WorkingDirectory::new(Path::new("relative")).is_err());
    /// ```
    pub fn new(path: &Path) -> Result<Self> {
        let host = dunce::simplified(path).to_path_buf();
        let normalized = normalize::normalize_host_path(&host)?;
        Ok(Self { host, normalized })
    }

    /// Capture the current process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined or is
    /// not valid UTF-8.
    pub fn capture() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: PathBuf::from("."),
            reason: format!("Cannot get current directory: {e}"),
        })?;
        Self::new(&cwd)
    }

    /// The working directory as given to the host.
    #[must_use]
    pub fn host(&self) -> &Path {
        &self.host
    }

    /// The working directory in normalized form.
    #[must_use]
    pub fn normalized(&self) -> &NormalizedPath {
        &self.normalized
    }

    /// Resolve a raw argument against this directory for filesystem access.
    ///
    /// Absolute arguments replace the working directory, as `Path::join`
    /// does; no lexical cleanup happens, so the host applies its own rules
    /// (including following symlinks before `..`).
    #[must_use]
    pub fn host_join(&self, raw: &str) -> PathBuf {
        self.host.join(raw)
    }
}
