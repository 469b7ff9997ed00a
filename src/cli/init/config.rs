//! Starter files for a new site.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::{
    BuildConfig, EditLinkConfig, LinksValidateConfig, LocaleConfig, SidebarGroupConfig,
    SiteInfoConfig, SocialLinkConfig,
};

/// Written to the content directory so the starter sidebar resolves.
const INDEX_PAGE: &str = "\
---
title: Introduction
description: Start here.
---

Welcome to your new documentation site.
";

/// Patterns for the renderer's build output and dependencies.
const IGNORE_PATTERNS: &[&str] = &["/dist/", "/node_modules/", "/.astro/", ".DS_Store"];

/// Generate a commented docsite.toml.
///
/// `content` is the content directory relative to the site root.
pub fn generate_config_template(content: &Path) -> String {
    let sections = [
        SiteInfoConfig::template_with_header(),
        SocialLinkConfig::template_with_header(),
        EditLinkConfig::template_with_header(),
        SidebarGroupConfig::template_with_header(),
        LocaleConfig::template_with_header(),
        BuildConfig::template_with_header(),
        LinksValidateConfig::template_with_header(),
    ];

    let mut out = format!(
        "# docsite configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&sections.join("\n"));
    out.replacen(
        &content_line(&BuildConfig::default().content),
        &content_line(content),
        1,
    )
}

fn content_line(content: &Path) -> String {
    let value = toml::Value::String(content.to_string_lossy().replace('\\', "/"));
    format!("content = {value}")
}

/// Write docsite.toml into `root`.
pub fn write_config(root: &Path, file_name: &Path, content: &Path) -> Result<()> {
    let path = root.join(file_name);
    fs::write(&path, generate_config_template(content))
        .with_context(|| format!("failed to write config file '{}'", path.display()))
}

/// Create the content directory with an index page.
pub fn write_content(content_dir: &Path) -> Result<()> {
    fs::create_dir_all(content_dir).with_context(|| {
        format!("failed to create content directory '{}'", content_dir.display())
    })?;

    let index = content_dir.join("index.md");
    if !index.exists() {
        fs::write(&index, INDEX_PAGE)
            .with_context(|| format!("failed to write '{}'", index.display()))?;
    }
    Ok(())
}

/// Write .gitignore unless the user already has one.
pub fn write_ignore_file(root: &Path) -> Result<()> {
    let path = root.join(".gitignore");
    if path.exists() {
        return Ok(());
    }
    let mut content = IGNORE_PATTERNS.join("\n");
    content.push('\n');
    fs::write(&path, content).with_context(|| format!("failed to write '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::DocIndex;
    use tempfile::TempDir;

    fn default_template() -> String {
        generate_config_template(Path::new("src/content/docs"))
    }

    #[test]
    fn test_template_sections() {
        let template = default_template();
        for header in [
            "[site]",
            "[[site.social]]",
            "[site.edit_link]",
            "[[sidebar]]",
            "[locales.root]",
            "[build]",
            "[validate.links]",
        ] {
            assert!(template.contains(header), "missing {header}");
        }
    }

    #[test]
    fn test_template_is_valid_config() {
        let template = default_template();
        let (config, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty(), "{ignored:?}");

        let diag = config.diagnostics();
        assert!(!diag.has_errors(), "{diag}");
        assert_eq!(config.site.title, "My Docs");
        assert_eq!(config.sidebar[0].items[0].link, "/index");
        assert!(!config.site.edit_link.is_enabled());
    }

    #[test]
    fn test_starter_sidebar_resolves() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("src/content/docs");
        write_content(&content).unwrap();

        let config = SiteConfig::from_str(&default_template()).unwrap();
        let index = DocIndex::scan(&content).unwrap();
        for group in &config.sidebar {
            for item in &group.items {
                assert!(index.resolve(&item.link).is_some(), "{}", item.link);
            }
        }
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), Path::new("docsite.toml"), Path::new("docs")).unwrap();
        let content = fs::read_to_string(temp.path().join("docsite.toml")).unwrap();
        assert!(content.starts_with("# docsite configuration file"));

        let config = SiteConfig::from_str(&content).unwrap();
        assert_eq!(config.build.content, Path::new("docs"));
    }

    #[test]
    fn test_template_content_override() {
        let template = generate_config_template(Path::new("../shared docs"));
        let config = SiteConfig::from_str(&template).unwrap();
        assert_eq!(config.build.content, Path::new("../shared docs"));
        assert_eq!(template.matches("content = ").count(), 1);
    }

    #[test]
    fn test_existing_files_kept() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "custom").unwrap();
        fs::write(temp.path().join("index.md"), "# mine").unwrap();

        write_ignore_file(temp.path()).unwrap();
        write_content(temp.path()).unwrap();

        assert_eq!(fs::read_to_string(temp.path().join(".gitignore")).unwrap(), "custom");
        assert_eq!(fs::read_to_string(temp.path().join("index.md")).unwrap(), "# mine");
    }

    #[test]
    fn test_ignore_file_patterns() {
        let temp = TempDir::new().unwrap();
        write_ignore_file(temp.path()).unwrap();
        let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(content.contains("/dist/"));
        assert!(content.contains("/node_modules/"));
    }
}
