//! Import remapping rules.
//!
//! A remapping has the form `[context:]prefix=target`. It tells the compiler
//! to rewrite imports starting with `prefix` (optionally only inside files
//! whose name starts with `context`) to `target`. This module only parses
//! and stores the rules; applying them is the compiler's concern. The one
//! thing ingestion needs from a remapping is the directory its target
//! contributes to the sandbox.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::normalize::clean_relative;
use crate::path::PathSyntax;

/// A single import remapping.
///
/// # Examples
///
/// ```
/// use srcgate::remapping::Remapping;
///
/// let remapping = Remapping::parse("lib:@oz/=node_modules/@oz/").unwrap();
/// assert_eq!(remapping.context, "lib");
/// assert_eq!(remapping.prefix, "@oz/");
/// assert_eq!(remapping.target, "node_modules/@oz/");
/// assert_eq!(remapping.to_string(), "lib:@oz/=node_modules/@oz/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Remapping {
    /// Source unit name prefix the rule is limited to; empty means global.
    pub context: String,
    /// Import prefix to rewrite; empty matches every import.
    pub prefix: String,
    /// Replacement, kept verbatim including any trailing separator.
    pub target: String,
}

impl Remapping {
    /// Create a remapping from its parts.
    #[must_use]
    pub fn new(
        context: impl Into<String>,
        prefix: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            prefix: prefix.into(),
            target: target.into(),
        }
    }

    /// Parse a remapping argument.
    ///
    /// The first `=` not preceded by a backslash separates the left side
    /// from the target. On the left side `\=` stands for a literal `=`, and
    /// everything before the first `:` is the context.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRemapping` if there is no unescaped `=` or the
    /// target is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::remapping::Remapping;
    ///
    /// let remapping = Remapping::parse("a=b/c/d").unwrap();
    /// assert_eq!(remapping, Remapping::new("", "a", "b/c/d"));
    ///
    /// assert!(Remapping::parse("a=").is_err());
    /// assert!(Remapping::parse("no-equals").is_err());
    /// ```
    pub fn parse(arg: &str) -> Result<Self> {
        let invalid = || Error::InvalidRemapping {
            remapping: arg.to_string(),
        };

        let split = find_unescaped_equals(arg).ok_or_else(invalid)?;
        let left = unescape(&arg[..split]);
        let target = &arg[split + 1..];
        if target.is_empty() {
            return Err(invalid());
        }

        let (context, prefix) = match left.split_once(':') {
            Some((context, prefix)) => (context.to_string(), prefix.to_string()),
            None => (String::new(), left),
        };

        Ok(Self {
            context,
            prefix,
            target: target.to_string(),
        })
    }

    /// Whether a raw argument should be treated as a remapping rather than
    /// a path: it contains an unescaped `=`.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::remapping::Remapping;
    ///
    /// assert!(Remapping::is_remapping_shaped("a=b"));
    /// assert!(Remapping::is_remapping_shaped("=b"));
    /// assert!(!Remapping::is_remapping_shaped("dir/a\\=b.sol"));
    /// assert!(!Remapping::is_remapping_shaped("contract.sol"));
    /// ```
    #[must_use]
    pub fn is_remapping_shaped(arg: &str) -> bool {
        find_unescaped_equals(arg).is_some()
    }

    /// The directory this remapping's target contributes to the sandbox.
    ///
    /// The last segment of the target is dropped unless the target ends with
    /// a separator, in which case the target itself is the directory. The
    /// result is lexically cleaned but otherwise literal; relative targets
    /// stay relative. Returns `None` when nothing is left.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::remapping::Remapping;
    ///
    /// assert_eq!(Remapping::new("", "a", "b/c/d").target_directory().as_deref(), Some("b/c"));
    /// assert_eq!(Remapping::new("a", "b", "c/d/e/").target_directory().as_deref(), Some("c/d/e"));
    /// assert_eq!(Remapping::new("", "a", "file.sol").target_directory(), None);
    /// ```
    #[must_use]
    pub fn target_directory(&self) -> Option<String> {
        let syntax = PathSyntax::host();
        let target = self.target.as_str();

        let directory = if target.ends_with(|c| syntax.is_separator(c)) {
            target
        } else {
            let last = target.rfind(|c| syntax.is_separator(c))?;
            // keep the separator when it is the root itself
            &target[..=last]
        };

        let cleaned = clean_relative(directory);
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }
}

impl fmt::Display for Remapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.context.is_empty() {
            write!(f, "{}:", self.context)?;
        }
        write!(f, "{}={}", self.prefix, self.target)
    }
}

fn find_unescaped_equals(arg: &str) -> Option<usize> {
    let mut escaped = false;
    for (index, c) in arg.char_indices() {
        match c {
            '=' if !escaped => return Some(index),
            '\\' => escaped = !escaped,
            _ => escaped = false,
        }
    }
    None
}

fn unescape(text: &str) -> String {
    text.replace("\\=", "=")
}

/// Remappings in the order they were given.
///
/// # Examples
///
/// ```
/// use srcgate::remapping::RemappingTable;
///
/// let mut table = RemappingTable::new();
/// table.add("a=b/c/d").unwrap();
/// table.add("a:b=c/d/e/").unwrap();
///
/// assert_eq!(table.len(), 2);
/// let directories: Vec<_> = table.target_directories().collect();
/// assert_eq!(directories, vec!["b/c".to_string(), "c/d/e".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RemappingTable {
    remappings: Vec<Remapping>,
}

impl RemappingTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and append a remapping argument.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRemapping` if the argument is malformed.
    pub fn add(&mut self, arg: &str) -> Result<&Remapping> {
        let remapping = Remapping::parse(arg)?;
        Ok(self.push(remapping))
    }

    /// Append an already-parsed remapping.
    pub fn push(&mut self, remapping: Remapping) -> &Remapping {
        self.remappings.push(remapping);
        &self.remappings[self.remappings.len() - 1]
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Remapping> {
        self.remappings.iter()
    }

    /// Number of remappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.remappings.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remappings.is_empty()
    }

    /// The sandbox directories contributed by all targets, in order.
    pub fn target_directories(&self) -> impl Iterator<Item = String> + '_ {
        self.remappings.iter().filter_map(Remapping::target_directory)
    }

    /// The remappings as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Remapping] {
        &self.remappings
    }
}

impl<'a> IntoIterator for &'a RemappingTable {
    type Item = &'a Remapping;
    type IntoIter = std::slice::Iter<'a, Remapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.remappings.iter()
    }
}

impl Extend<Remapping> for RemappingTable {
    fn extend<T: IntoIterator<Item = Remapping>>(&mut self, iter: T) {
        self.remappings.extend(iter);
    }
}
