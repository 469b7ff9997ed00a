//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors. Array entries get their index spliced in
/// with [`FieldPath::index`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteInfoConfig {
///     pub title: String,
/// }
///
/// // Generated:
/// impl SiteInfoConfig {
///     pub const FIELDS: SiteInfoConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(SiteInfoConfig::FIELDS.title, "must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn owned(path: String) -> Self {
        Self(Cow::Owned(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splice an array index after `prefix`.
    ///
    /// ```ignore
    /// FieldPath::new("sidebar.items").index("sidebar", 2)  // sidebar[2].items
    /// ```
    ///
    /// Paths that do not start with `prefix` are returned unchanged.
    pub fn index(&self, prefix: &str, index: usize) -> Self {
        match self.0.strip_prefix(prefix) {
            Some(rest) => Self::owned(format!("{prefix}[{index}]{rest}")),
            None => self.clone(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_nested() {
        let link = FieldPath::new("sidebar.items.link");
        let path = link.index("sidebar", 1).index("sidebar[1].items", 0);
        assert_eq!(path.as_str(), "sidebar[1].items[0].link");
    }

    #[test]
    fn test_index_unrelated_prefix() {
        let path = FieldPath::new("site.title").index("sidebar", 3);
        assert_eq!(path.as_str(), "site.title");
    }
}
