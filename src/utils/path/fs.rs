//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_path` - resolve relative paths with fallback directory
//! - `relative_to` - express an absolute path from another directory

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a path that may be relative to cwd or a fallback directory.
///
/// Tries in order:
/// 1. If absolute, use as-is
/// 2. If exists relative to cwd, normalize to absolute
/// 3. Otherwise, resolve relative to fallback_dir
///
/// `docsite edit-link guide/intro.md` resolves against the content
/// directory when no such file exists under cwd.
#[inline]
pub fn resolve_path(path: &Path, fallback_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if path.exists() {
        return normalize_path(path);
    }

    normalize_path(&fallback_dir.join(path))
}

/// Path of `path` as seen from `base`, stepping up with `..` where needed.
///
/// Relative input is returned unchanged. Paths without a common prefix
/// (another drive on Windows) stay absolute.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    if !path.is_absolute() || !base.is_absolute() {
        return path.to_path_buf();
    }

    let mut path_parts = path.components().peekable();
    let mut base_parts = base.components().peekable();
    if path_parts.peek() != base_parts.peek() {
        return path.to_path_buf();
    }
    while let (Some(a), Some(b)) = (path_parts.peek(), base_parts.peek())
        && a == b
    {
        path_parts.next();
        base_parts.next();
    }

    let mut relative: PathBuf = base_parts
        .filter(|c| matches!(c, Component::Normal(_)))
        .map(|_| Component::ParentDir)
        .collect();
    relative.extend(path_parts);
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.md"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("relative/path/file.md"));
    }

    #[test]
    fn test_resolve_path_absolute() {
        let resolved = resolve_path(Path::new("/absolute/path"), Path::new("/fallback"));
        assert_eq!(resolved, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_resolve_path_fallback() {
        let temp = tempfile::TempDir::new().unwrap();
        let content = temp.path().join("docs");
        std::fs::create_dir_all(&content).unwrap();
        std::fs::write(content.join("intro.md"), "# Intro").unwrap();

        let resolved = resolve_path(Path::new("intro.md"), &content);
        assert_eq!(resolved, normalize_path(&content.join("intro.md")));
    }

    #[test]
    fn test_relative_to() {
        let root = Path::new("/site");
        assert_eq!(
            relative_to(Path::new("/site/src/content/docs"), root),
            PathBuf::from("src/content/docs")
        );
        assert_eq!(
            relative_to(Path::new("/shared-docs"), root),
            PathBuf::from("../shared-docs")
        );
        assert_eq!(
            relative_to(Path::new("/a/b/docs"), Path::new("/a/c/d")),
            PathBuf::from("../../b/docs")
        );
        assert_eq!(relative_to(Path::new("/site"), root), PathBuf::from("."));
        assert_eq!(
            relative_to(Path::new("docs"), root),
            PathBuf::from("docs")
        );
    }
}
