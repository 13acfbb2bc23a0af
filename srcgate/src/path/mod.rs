//! Path handling for source ingestion.
//!
//! This module turns raw path arguments into stable source unit names and
//! provides the pieces needed to work out which directories the compiler may
//! read from.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization is purely lexical. It converts a raw argument into an
//! absolute [`NormalizedPath`] by:
//! - Resolving relative paths against the working directory
//! - Collapsing redundant separators and dropping `.` segments
//! - Applying `..` segments, clamped at the root
//! - Collapsing drive letters and UNC prefixes to a single leading `/`
//!
//! Symlinks are never followed during normalization, so the same file named
//! through a symlink and through its real location gets two different names.
//!
//! ## Canonicalization
//!
//! Canonicalization follows symlinks to get the real path on the
//! filesystem. It is only used for sandbox directories, where what matters
//! is the location the compiler will actually read from.
//!
//! ## Source unit names
//!
//! [`BasePathResolver`] strips the base path (or the working directory when
//! no base path is set) from a normalized path to produce its
//! [`SourceUnitName`].
//!
//! # Examples
//!
//! ```
//! use srcgate::path::{normalize, BasePathResolver, NormalizedPath};
//!
//! let cwd = normalize::normalize("/project", &NormalizedPath::root());
//! let resolver = BasePathResolver::new(cwd.clone(), None);
//!
//! let path = normalize::normalize("./contracts//token.sol", &cwd);
//! assert_eq!(path.as_str(), "/project/contracts/token.sol");
//!
//! let resolution = resolver.resolve(&path);
//! assert_eq!(resolution.source_unit_name.as_str(), "contracts/token.sol");
//! ```

pub mod base;
pub mod canonicalize;
pub mod normalize;
pub mod relationship;
pub mod syntax;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use base::{BasePathResolver, NameOrigin, Resolution};
pub use relationship::PathRelationship;
pub use syntax::{PathSyntax, RootForm};
pub use types::{NormalizedPath, SourceUnitName, WorkingDirectory, STDIN_SOURCE_NAME};
