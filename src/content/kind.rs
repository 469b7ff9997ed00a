//! Document kinds the renderer can load.

use std::path::Path;

/// Kind of content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKind {
    /// CommonMark (.md, .markdown)
    Markdown,
    /// Markdown with components (.mdx)
    Mdx,
    /// Markdoc (.mdoc)
    Markdoc,
}

impl DocKind {
    /// Detect document kind from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "md" | "markdown" => Some(Self::Markdown),
            "mdx" => Some(Self::Mdx),
            "mdoc" => Some(Self::Markdoc),
            _ => None,
        }
    }

    /// Detect document kind from file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Display name for this document kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Mdx => "mdx",
            Self::Markdoc => "markdoc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(DocKind::from_path(Path::new("index.md")), Some(DocKind::Markdown));
        assert_eq!(DocKind::from_path(Path::new("guide/intro.MDX")), Some(DocKind::Mdx));
        assert_eq!(DocKind::from_path(Path::new("ref.mdoc")), Some(DocKind::Markdoc));
        assert_eq!(DocKind::from_path(Path::new("logo.png")), None);
        assert_eq!(DocKind::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_markdown_aliases() {
        assert_eq!(DocKind::from_extension("markdown"), Some(DocKind::Markdown));
        assert_eq!(DocKind::from_extension("typ"), None);
        assert_eq!(DocKind::Markdoc.name(), "markdoc");
    }
}
