//! Base path resolution.
//!
//! Given a normalized input path, this module decides which source unit name
//! it gets and which directory it contributes to the sandbox. Names are
//! relative to the base path when the file lies under it, relative to the
//! working directory when no base path is configured, and fully qualified
//! otherwise.

use crate::path::normalize::normalize;
use crate::path::relationship::PathRelationship;
use crate::path::types::{NormalizedPath, SourceUnitName};

/// How a source unit name was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrigin {
    /// Stripped relative to the configured base path.
    BasePath,
    /// Stripped relative to the working directory (no base path configured).
    WorkingDirectory,
    /// Outside both; the full normalized path is used.
    Absolute,
}

/// The outcome of resolving one input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The name the content will be stored under.
    pub source_unit_name: SourceUnitName,
    /// The directory to register with the sandbox set.
    pub directory: NormalizedPath,
    /// Which rule produced the name.
    pub origin: NameOrigin,
}

/// Computes source unit names from normalized paths.
///
/// # Examples
///
/// ```
/// use srcgate::path::{normalize, BasePathResolver, NameOrigin, NormalizedPath};
///
/// let cwd = normalize::normalize("/work", &NormalizedPath::root());
/// let resolver = BasePathResolver::new(cwd.clone(), Some("base"));
/// assert_eq!(resolver.base_path_str(), "/work/base");
///
/// let inside = normalize::normalize("base/c/token.sol", &cwd);
/// let resolution = resolver.resolve(&inside);
/// assert_eq!(resolution.source_unit_name.as_str(), "c/token.sol");
/// assert_eq!(resolution.directory.as_str(), "/work/base");
/// assert_eq!(resolution.origin, NameOrigin::BasePath);
///
/// let outside = normalize::normalize("lib/x.sol", &cwd);
/// let resolution = resolver.resolve(&outside);
/// assert_eq!(resolution.source_unit_name.as_str(), "/work/lib/x.sol");
/// assert_eq!(resolution.directory.as_str(), "/work/lib");
/// ```
#[derive(Debug, Clone)]
pub struct BasePathResolver {
    cwd: NormalizedPath,
    base: Option<NormalizedPath>,
}

impl BasePathResolver {
    /// Create a resolver.
    ///
    /// `base` is the raw configured base path; relative values are resolved
    /// against `cwd`. `None` and the empty string both mean "no base path".
    #[must_use]
    pub fn new(cwd: NormalizedPath, base: Option<&str>) -> Self {
        let base = base
            .filter(|raw| !raw.is_empty())
            .map(|raw| normalize(raw, &cwd));
        Self { cwd, base }
    }

    /// The base path in effect, if any.
    #[must_use]
    pub fn base_path(&self) -> Option<&NormalizedPath> {
        self.base.as_ref()
    }

    /// The base path in effect as a string, empty when none is configured.
    #[must_use]
    pub fn base_path_str(&self) -> &str {
        self.base.as_ref().map_or("", NormalizedPath::as_str)
    }

    /// The working directory names are relative to when no base is set.
    #[must_use]
    pub fn working_directory(&self) -> &NormalizedPath {
        &self.cwd
    }

    /// Resolve a normalized path to its source unit name and sandbox directory.
    ///
    /// A path equal to the base path or working directory itself has no
    /// remainder to use as a name and keeps its fully-qualified form.
    #[must_use]
    pub fn resolve(&self, normalized: &NormalizedPath) -> Resolution {
        if let Some(base) = &self.base {
            if let Some(name) = Self::strip(normalized, base) {
                return Resolution {
                    source_unit_name: name,
                    directory: base.clone(),
                    origin: NameOrigin::BasePath,
                };
            }
        } else if let Some(name) = Self::strip(normalized, &self.cwd) {
            return Resolution {
                source_unit_name: name,
                directory: normalized.parent(),
                origin: NameOrigin::WorkingDirectory,
            };
        }

        let anchor = self.base.as_ref().unwrap_or(&self.cwd);
        log::trace!(
            "keeping full name: {}",
            PathRelationship::between(normalized, anchor).description(normalized, anchor)
        );

        Resolution {
            source_unit_name: SourceUnitName::new(normalized.as_str()),
            directory: normalized.parent(),
            origin: NameOrigin::Absolute,
        }
    }

    fn strip(path: &NormalizedPath, directory: &NormalizedPath) -> Option<SourceUnitName> {
        PathRelationship::remainder(path, directory)
            .filter(|remainder| !remainder.is_empty())
            .map(SourceUnitName::from)
    }
}
