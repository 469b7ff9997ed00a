//! `docsite edit-link`: print the edit URL of documents.

use anyhow::{Result, anyhow, bail};
use std::path::{Path, PathBuf};
use url::Url;

use crate::config::SiteConfig;
use crate::content::DocIndex;
use crate::utils::path::{normalize_path, resolve_path};

pub fn print_edit_links(config: &SiteConfig, paths: &[PathBuf]) -> Result<()> {
    let content_dir = normalize_path(config.build.content_dir());
    let index = DocIndex::scan(&content_dir)?;
    for path in paths {
        println!("{}", edit_url(config, &index, &content_dir, path)?);
    }
    Ok(())
}

/// Edit URL for a document given relative to cwd or the content directory.
fn edit_url(config: &SiteConfig, index: &DocIndex, content_dir: &Path, path: &Path) -> Result<Url> {
    let source = resolve_path(path, content_dir);
    if !source.is_file() {
        bail!("'{}' does not exist", path.display());
    }
    if !source.starts_with(content_dir) {
        bail!(
            "'{}' is not inside the content directory '{}'",
            path.display(),
            config.root_relative(content_dir).display()
        );
    }
    // Hidden files and non-documents are not pages
    let doc = index
        .by_path(&source)
        .ok_or_else(|| anyhow!("'{}' is not a document", path.display()))?;
    config.site.edit_link.url_for(Path::new(&doc.relative))
}
