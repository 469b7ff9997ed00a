//! Content directory index.
//!
//! Maps every document under the content directory to its slug so
//! sidebar links can be resolved without rendering anything.
//!
//! | File                    | Slugs                    |
//! |-------------------------|--------------------------|
//! | `index.md`              | `index`, `` (root)       |
//! | `code-explained.md`     | `code-explained`         |
//! | `guide/index.mdx`       | `guide/index`, `guide`   |
//! | `en/Getting Started.md` | `en/getting-started`     |
//!
//! Files and directories starting with `_` or `.` are not pages.

mod kind;

pub use kind::DocKind;

use anyhow::{Result, bail};
use jwalk::WalkDir;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::path::{Component, Path, PathBuf};

use crate::{debug, log};

/// A document found in the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Absolute path of the source file.
    pub path: PathBuf,
    /// Path relative to the content directory, `/`-separated.
    pub relative: String,
    /// Canonical slug (no leading or trailing slash).
    pub slug: String,
    pub kind: DocKind,
}

/// Slug → document lookup for a content directory.
#[derive(Debug, Default)]
pub struct DocIndex {
    docs: Vec<Document>,
    slugs: FxHashMap<String, usize>,
}

impl DocIndex {
    /// Scan a content directory.
    pub fn scan(content_dir: &Path) -> Result<Self> {
        if !content_dir.is_dir() {
            bail!(
                "content directory '{}' does not exist",
                content_dir.display()
            );
        }

        let files: Vec<PathBuf> = WalkDir::new(content_dir)
            .sort(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log!("warning"; "skipped unreadable entry: {}", e);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path())
            .collect();

        Ok(Self::from_files(content_dir, &files))
    }

    /// Build an index from already collected file paths.
    ///
    /// Non-document files and files outside `content_dir` are skipped.
    pub fn from_files(content_dir: &Path, files: &[PathBuf]) -> Self {
        let mut docs: Vec<Document> = files
            .iter()
            .filter_map(|path| {
                let kind = DocKind::from_path(path)?;
                let relative = path.strip_prefix(content_dir).ok()?;
                if is_hidden(relative) {
                    return None;
                }
                let relative = to_slash(relative);
                let slug = slug_for(&relative);
                Some(Document {
                    path: path.clone(),
                    relative,
                    slug,
                    kind,
                })
            })
            .collect();
        docs.sort_by(|a, b| a.relative.cmp(&b.relative));

        let mut slugs: FxHashMap<String, usize> = FxHashMap::default();

        // Canonical slugs take precedence over `index` directory aliases
        for (i, doc) in docs.iter().enumerate() {
            match slugs.entry(doc.slug.clone()) {
                Entry::Occupied(e) => {
                    debug!("content"; "'{}' ignored, slug taken by '{}'", doc.relative, docs[*e.get()].relative);
                }
                Entry::Vacant(e) => {
                    e.insert(i);
                }
            }
        }
        for (i, doc) in docs.iter().enumerate() {
            if let Some(alias) = index_alias(&doc.slug) {
                slugs.entry(alias.to_string()).or_insert(i);
            }
        }

        for doc in &docs {
            debug!("content"; "/{} → {} ({})", doc.slug, doc.relative, doc.kind.name());
        }
        Self { docs, slugs }
    }

    /// Resolve a site-root link to a document.
    pub fn resolve(&self, link: &str) -> Option<&Document> {
        let slug = link_slug(link);
        self.slugs.get(&slug).map(|&i| &self.docs[i])
    }

    /// Find the document for a source file path.
    pub fn by_path(&self, path: &Path) -> Option<&Document> {
        self.docs.iter().find(|doc| doc.path == path)
    }

    /// All documents, ordered by relative path.
    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Convert a relative path to a `/`-separated string.
fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(s) => {
            let s = s.to_string_lossy();
            s.starts_with('_') || s.starts_with('.')
        }
        _ => false,
    })
}

/// Normalize one slug segment the way the renderer does.
///
/// Lowercased, punctuation dropped, every whitespace character becomes `-`.
/// Runs of `-` are kept: `FAQ & Help` → `faq--help`.
fn slugify_segment(segment: &str) -> String {
    segment
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('-'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}

/// Slug for a `/`-separated path relative to the content directory.
pub fn slug_for(relative: &str) -> String {
    let relative = relative.replace('\\', "/");
    let stem = match relative.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') => stem,
        _ => relative.as_str(),
    };
    stem.split('/')
        .filter(|s| !s.is_empty())
        .map(slugify_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// Slug a link points at: query, fragment and surrounding slashes removed.
///
/// Only case is folded. A link is already a URL path, so punctuation in it
/// has to match the document slug as written.
pub fn link_slug(link: &str) -> String {
    let end = link.find(['#', '?']).unwrap_or(link.len());
    link[..end]
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("/")
}

/// `guide/index` → `guide`, `index` → `` (root).
fn index_alias(slug: &str) -> Option<&str> {
    if slug == "index" {
        return Some("");
    }
    slug.strip_suffix("/index")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "---\ntitle: x\n---\n").unwrap();
    }

    fn sample_site() -> TempDir {
        let temp = TempDir::new().unwrap();
        for rel in [
            "index.md",
            "code-explained.md",
            "transport-explained.mdx",
            "config-explained.md",
            "clients-setup.md",
            "guide/index.mdoc",
            "guide/Getting Started.md",
            "_drafts/wip.md",
            ".hidden/secret.md",
            "images/logo.png",
        ] {
            write(temp.path(), rel);
        }
        temp
    }

    #[test]
    fn test_slug_for() {
        assert_eq!(slug_for("index.md"), "index");
        assert_eq!(slug_for("guide/intro.mdx"), "guide/intro");
        assert_eq!(slug_for("guide\\Intro Page.md"), "guide/intro-page");
        assert_eq!(slug_for("v1.2/notes.md"), "v12/notes");
        assert_eq!(slug_for("FAQ & Help.md"), "faq--help");
        assert_eq!(slug_for("C++ Tips.md"), "c-tips");
        assert_eq!(slug_for("snake_case.md"), "snake_case");
        assert_eq!(slug_for("指南/入门.md"), "指南/入门");
    }

    #[test]
    fn test_punctuated_file_resolves_by_renderer_link() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "FAQ & Help.md");
        let index = DocIndex::scan(temp.path()).unwrap();

        assert_eq!(index.resolve("/faq--help").unwrap().relative, "FAQ & Help.md");
        assert!(index.resolve("/faq-&-help").is_none());
    }

    #[test]
    fn test_link_slug() {
        assert_eq!(link_slug("/index"), "index");
        assert_eq!(link_slug("/guide/intro/"), "guide/intro");
        assert_eq!(link_slug("/guide/intro#setup"), "guide/intro");
        assert_eq!(link_slug("/search?q=x"), "search");
        assert_eq!(link_slug("/"), "");
    }

    #[test]
    fn test_index_alias() {
        assert_eq!(index_alias("index"), Some(""));
        assert_eq!(index_alias("guide/index"), Some("guide"));
        assert_eq!(index_alias("guide/intro"), None);
        assert_eq!(index_alias("reindex"), None);
    }

    #[test]
    fn test_scan_and_resolve() {
        let site = sample_site();
        let index = DocIndex::scan(site.path()).unwrap();

        assert_eq!(index.len(), 7);
        assert_eq!(index.resolve("/index").unwrap().relative, "index.md");
        assert_eq!(index.resolve("/").unwrap().relative, "index.md");
        assert_eq!(
            index.resolve("/transport-explained").unwrap().kind,
            DocKind::Mdx
        );
        assert_eq!(index.resolve("/guide").unwrap().relative, "guide/index.mdoc");
        assert_eq!(
            index.resolve("/guide/getting-started/").unwrap().relative,
            "guide/Getting Started.md"
        );
        assert!(index.resolve("/missing").is_none());
    }

    #[test]
    fn test_hidden_and_non_documents_skipped() {
        let site = sample_site();
        let index = DocIndex::scan(site.path()).unwrap();

        assert!(index.resolve("/_drafts/wip").is_none());
        assert!(index.resolve("/.hidden/secret").is_none());
        assert!(index.resolve("/images/logo").is_none());
    }

    #[test]
    fn test_canonical_slug_beats_alias() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "guide.md");
        write(temp.path(), "guide/index.md");
        let index = DocIndex::scan(temp.path()).unwrap();

        assert_eq!(index.resolve("/guide").unwrap().relative, "guide.md");
        assert_eq!(index.resolve("/guide/index").unwrap().relative, "guide/index.md");
    }

    #[test]
    fn test_by_path() {
        let site = sample_site();
        let index = DocIndex::scan(site.path()).unwrap();
        let doc = index.resolve("/clients-setup").unwrap();
        assert_eq!(index.by_path(&doc.path), Some(doc));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_dir_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        write(temp.path(), "index.md");
        write(temp.path(), "locked/page.md");
        let locked = temp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let index = DocIndex::scan(temp.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let index = index.unwrap();
        assert_eq!(index.resolve("/").unwrap().relative, "index.md");
    }

    #[test]
    fn test_missing_content_dir() {
        let temp = TempDir::new().unwrap();
        let err = DocIndex::scan(&temp.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
