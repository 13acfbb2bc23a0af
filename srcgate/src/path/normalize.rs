//! Path normalization functions.
//!
//! This module turns raw command-line path text into a [`NormalizedPath`]:
//! - Relative paths are resolved against the working directory
//! - Redundant separators and `.` segments are dropped
//! - `..` pops the previous segment and is clamped at the root
//! - Drive letters and UNC prefixes collapse to a single leading `/`
//!
//! Everything here is lexical. The filesystem is never consulted, so
//! symlinks are not followed and nothing needs to exist.

use std::path::Path;

use crate::error::{Error, Result};
use crate::path::syntax::{PathSyntax, RootForm};
use crate::path::types::NormalizedPath;

/// Resolve `.` and `..` segments onto an existing segment stack.
///
/// Empty and `.` segments are dropped. `..` pops the last segment, or is
/// silently discarded when the stack is already empty.
///
/// # Examples
///
/// ```
/// use srcgate::path::normalize::resolve_segments;
///
/// let mut stack = vec!["a".to_string()];
/// resolve_segments(&mut stack, ["b", ".", "..", "..", "..", "c"]);
/// assert_eq!(stack, vec!["c".to_string()]);
/// ```
pub fn resolve_segments<'a, I>(stack: &mut Vec<String>, segments: I)
where
    I: IntoIterator<Item = &'a str>,
{
    for segment in segments {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other.to_string()),
        }
    }
}

/// Normalize raw path text using the host's path syntax.
///
/// # Examples
///
/// ```
/// use srcgate::path::normalize::normalize;
/// use srcgate::path::NormalizedPath;
///
/// let cwd = normalize("/work", &NormalizedPath::root());
///
/// assert_eq!(normalize("a/./b/../b//c.sol", &cwd).as_str(), "/work/a/b/c.sol");
/// assert_eq!(normalize("/../../x/c.sol", &cwd).as_str(), "/x/c.sol");
/// assert_eq!(normalize("../../../..", &cwd).as_str(), "/");
/// ```
#[must_use]
pub fn normalize(raw: &str, cwd: &NormalizedPath) -> NormalizedPath {
    normalize_with(raw, cwd, PathSyntax::host())
}

/// Normalize raw path text under an explicit path syntax.
///
/// URL-like text gets no special treatment: `file://x/y` is a relative path
/// whose first segment is `file:`, and the `//` after it collapses like any
/// other redundant separator.
///
/// # Examples
///
/// ```
/// use srcgate::path::normalize::normalize_with;
/// use srcgate::path::{NormalizedPath, PathSyntax};
///
/// let cwd = normalize_with("/w", &NormalizedPath::root(), PathSyntax::POSIX);
///
/// let url = normalize_with("https://example.com/c.sol", &cwd, PathSyntax::POSIX);
/// assert_eq!(url.as_str(), "/w/https:/example.com/c.sol");
///
/// let posix = normalize_with("C:\\a\\b.sol", &cwd, PathSyntax::POSIX);
/// assert_eq!(posix.as_str(), "/w/C:\\a\\b.sol");
///
/// let windows = normalize_with("C:\\a\\b.sol", &cwd, PathSyntax::WINDOWS);
/// assert_eq!(windows.as_str(), "/a/b.sol");
/// assert_eq!(windows.prefix(), Some("C:"));
/// ```
#[must_use]
pub fn normalize_with(raw: &str, cwd: &NormalizedPath, syntax: PathSyntax) -> NormalizedPath {
    let (root, rest) = syntax.split_root(raw);

    let (prefix, mut stack) = match root {
        RootForm::Relative => (
            cwd.prefix().map(str::to_string),
            cwd.segments().map(str::to_string).collect(),
        ),
        RootForm::Separator => (cwd.prefix().map(str::to_string), Vec::new()),
        RootForm::Drive(drive) => (Some(drive), Vec::new()),
        RootForm::Unc => (Some("/".to_string()), Vec::new()),
    };

    resolve_segments(&mut stack, syntax.segments(rest));
    NormalizedPath::from_segments(prefix, &stack)
}

/// Normalize an absolute host path, such as the working directory.
///
/// # Errors
///
/// Returns an error if the path is not absolute or is not valid UTF-8.
pub fn normalize_host_path(path: &Path) -> Result<NormalizedPath> {
    if !path.is_absolute() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "Path must be absolute".to_string(),
        });
    }

    let text = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    Ok(normalize(text, &NormalizedPath::root()))
}

/// Lexically clean a path without making it absolute.
///
/// Used for literal directory text such as remapping targets, which keep
/// their relative spelling when they do not exist. Leading `..` segments of
/// a relative path are kept since there is no root to clamp against.
///
/// # Examples
///
/// ```
/// use srcgate::path::normalize::clean_relative;
///
/// assert_eq!(clean_relative("./b//c/"), "b/c");
/// assert_eq!(clean_relative("../x/./y"), "../x/y");
/// assert_eq!(clean_relative("/abs/../dir"), "/dir");
/// ```
#[must_use]
pub fn clean_relative(raw: &str) -> String {
    let syntax = PathSyntax::host();
    let (root, rest) = syntax.split_root(raw);
    if root.is_absolute() {
        return normalize_with(raw, &NormalizedPath::root(), syntax)
            .to_path_buf()
            .to_string_lossy()
            .into_owned();
    }

    let mut stack: Vec<String> = Vec::new();
    for segment in syntax.segments(rest) {
        match segment {
            "." => {}
            ".." if stack.last().is_some_and(|last| last != "..") => {
                stack.pop();
            }
            other => stack.push(other.to_string()),
        }
    }
    stack.join("/")
}
