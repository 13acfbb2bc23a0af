//! Host path syntax capabilities.
//!
//! Normalization is purely lexical, but which characters count as separators
//! and which leading forms count as roots depends on the host. This module
//! keeps that knowledge in one small table so the rest of the path code can
//! stay platform-independent and be tested against either flavor on any host.

/// The root form recognized at the start of a raw path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootForm {
    /// The path is relative and is resolved against the working directory.
    Relative,
    /// The path starts with a separator (`/x` or, on Windows, `\x`).
    Separator,
    /// A drive letter prefix such as `C:`.
    Drive(String),
    /// A UNC prefix (`\\server` or `//server` on Windows).
    Unc,
}

impl RootForm {
    /// Whether the raw path is absolute under this root form.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        !matches!(self, Self::Relative)
    }
}

/// Separator and root rules for one platform.
///
/// # Examples
///
/// ```
/// use srcgate::path::PathSyntax;
///
/// assert!(PathSyntax::POSIX.is_separator('/'));
/// assert!(!PathSyntax::POSIX.is_separator('\\'));
/// assert!(PathSyntax::WINDOWS.is_separator('\\'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSyntax {
    /// Whether `\` separates segments.
    pub backslash_separator: bool,
    /// Whether `X:` drive letters and `\\server` UNC prefixes are roots.
    pub prefixed_roots: bool,
}

impl PathSyntax {
    /// POSIX rules: only `/` separates, no drive or UNC roots.
    pub const POSIX: Self = Self {
        backslash_separator: false,
        prefixed_roots: false,
    };

    /// Windows rules: `/` and `\` separate, drive letters and UNC are roots.
    pub const WINDOWS: Self = Self {
        backslash_separator: true,
        prefixed_roots: true,
    };

    /// The rules of the platform this binary was built for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::WINDOWS
        } else {
            Self::POSIX
        }
    }

    /// Check whether `c` is a segment separator.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        c == '/' || (self.backslash_separator && c == '\\')
    }

    /// Split a raw path into its root form and the remainder to be segmented.
    ///
    /// The remainder may still begin with separators; those collapse during
    /// segmentation like any other redundant separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcgate::path::{PathSyntax, RootForm};
    ///
    /// let (root, rest) = PathSyntax::WINDOWS.split_root("C:\\a\\b");
    /// assert_eq!(root, RootForm::Drive("C:".to_string()));
    /// assert_eq!(rest, "\\a\\b");
    ///
    /// let (root, rest) = PathSyntax::POSIX.split_root("C:\\a\\b");
    /// assert_eq!(root, RootForm::Relative);
    /// assert_eq!(rest, "C:\\a\\b");
    /// ```
    #[must_use]
    pub fn split_root(self, raw: &str) -> (RootForm, &str) {
        if self.prefixed_roots {
            let bytes = raw.as_bytes();
            if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
                return (RootForm::Drive(raw[..2].to_string()), &raw[2..]);
            }

            let mut chars = raw.chars();
            if let (Some(a), Some(b)) = (chars.next(), chars.next()) {
                if self.is_separator(a) && self.is_separator(b) {
                    return (RootForm::Unc, &raw[2..]);
                }
            }
        }

        match raw.chars().next() {
            Some(c) if self.is_separator(c) => (RootForm::Separator, raw),
            _ => (RootForm::Relative, raw),
        }
    }

    /// Split text into non-empty segments on this syntax's separators.
    pub fn segments(self, text: &str) -> impl Iterator<Item = &str> {
        text.split(move |c| self.is_separator(c))
            .filter(|segment| !segment.is_empty())
    }
}

impl Default for PathSyntax {
    fn default() -> Self {
        Self::host()
    }
}
