//! Path relationship checking.
//!
//! This module determines how two normalized paths relate in the directory
//! hierarchy. Comparison is segment-wise, so `/a/bc` is never considered to
//! be under `/a/b`.

use crate::path::types::NormalizedPath;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use srcgate::path::{normalize, NormalizedPath, PathRelationship};
///
/// let root = NormalizedPath::root();
/// let parent = normalize::normalize("/home/user", &root);
/// let child = normalize::normalize("/home/user/project", &root);
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    #[must_use]
    pub fn between(path1: &NormalizedPath, path2: &NormalizedPath) -> Self {
        let mut left = path1.segments();
        let mut right = path2.segments();

        loop {
            match (left.next(), right.next()) {
                (None, None) => return Self::Same,
                (None, Some(_)) => return Self::Ancestor,
                (Some(_), None) => return Self::Descendant,
                (Some(a), Some(b)) if a == b => {}
                (Some(_), Some(_)) => return Self::Unrelated,
            }
        }
    }

    /// Check if a path is within a directory (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::path::{normalize, NormalizedPath, PathRelationship};
    ///
    /// let root = NormalizedPath::root();
    /// let dir = normalize::normalize("/home/user", &root);
    /// let file = normalize::normalize("/home/user/file.sol", &root);
    /// let sibling = normalize::normalize("/home/username", &root);
    ///
    /// assert!(PathRelationship::is_within(&file, &dir));
    /// assert!(PathRelationship::is_within(&dir, &dir));
    /// assert!(!PathRelationship::is_within(&sibling, &dir));
    /// ```
    #[must_use]
    pub fn is_within(path: &NormalizedPath, directory: &NormalizedPath) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// The segments of `path` below `directory`, joined with `/`.
    ///
    /// Returns `None` when `path` is not within `directory`, and an empty
    /// string when they are the same.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::path::{normalize, NormalizedPath, PathRelationship};
    ///
    /// let root = NormalizedPath::root();
    /// let base = normalize::normalize("/w/base", &root);
    /// let file = normalize::normalize("/w/base/c/d.sol", &root);
    ///
    /// assert_eq!(PathRelationship::remainder(&file, &base), Some("c/d.sol".to_string()));
    /// assert_eq!(PathRelationship::remainder(&base, &file), None);
    /// ```
    #[must_use]
    pub fn remainder(path: &NormalizedPath, directory: &NormalizedPath) -> Option<String> {
        if !Self::is_within(path, directory) {
            return None;
        }
        let depth = directory.segments().count();
        Some(path.segments().skip(depth).collect::<Vec<_>>().join("/"))
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &NormalizedPath, path2: &NormalizedPath) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}
