//! Site validation command.
//!
//! The config record is schema-checked while loading. This command adds
//! the check that needs the filesystem: every sidebar link must resolve
//! to a document in the content directory.

mod report;

use anyhow::{Result, bail};
use rustc_hash::FxHashSet;
use std::path::Path;

use crate::config::section::sidebar::iter_items;
use crate::config::{SidebarGroupConfig, SidebarItemConfig, SiteConfig, ValidateLevel};
use crate::content::{DocIndex, Document};
use crate::{debug, log};
use crate::utils::plural_count;

use report::{ValidationError, ValidationReport};

/// Validate the site.
pub fn validate_site(config: &SiteConfig) -> Result<()> {
    log!("validate"; "config ok");

    let links = &config.validate.links;
    if !links.enable {
        log!("validate"; "link checks disabled");
        return Ok(());
    }

    let index = DocIndex::scan(config.build.content_dir())?;
    let link_count = iter_items(&config.sidebar).count();
    log!(
        "validate";
        "resolving {} against {}",
        plural_count(link_count, "sidebar link"),
        plural_count(index.len(), "document")
    );

    let report = check_sidebar(&config.sidebar, &index);
    for doc in unlisted(&config.sidebar, &index) {
        debug!("validate"; "not in sidebar: {}", doc.relative);
    }
    report.print();
    log!("validate"; "{}", report);

    finish(&report, links.level)
}

/// Resolve every sidebar link against the content index.
fn check_sidebar(groups: &[SidebarGroupConfig], index: &DocIndex) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (g, i, group, item) in iter_items(groups) {
        if index.resolve(&item.link).is_none() {
            report.add(g, &group.label, broken_link(g, i, item));
        }
    }
    report
}

/// Documents no sidebar entry points at.
fn unlisted<'a>(groups: &[SidebarGroupConfig], index: &'a DocIndex) -> Vec<&'a Document> {
    let listed: FxHashSet<&Path> = iter_items(groups)
        .filter_map(|(.., item)| index.resolve(&item.link))
        .map(|doc| doc.path.as_path())
        .collect();
    index
        .documents()
        .iter()
        .filter(|doc| !listed.contains(doc.path.as_path()))
        .collect()
}

fn broken_link(group: usize, index: usize, item: &SidebarItemConfig) -> ValidationError {
    ValidationError {
        field: format!("sidebar[{group}].items[{index}].link"),
        target: item.link.clone(),
        reason: "does not match any document".to_string(),
    }
}

/// Apply the configured level to the report.
fn finish(report: &ValidationReport, level: ValidateLevel) -> Result<()> {
    if report.is_empty() {
        return Ok(());
    }
    let summary = format!(
        "{} in {}",
        plural_count(report.error_count(), "broken sidebar link"),
        plural_count(report.group_count(), "group")
    );
    match level {
        ValidateLevel::Error => bail!("found {summary}"),
        ValidateLevel::Warn => {
            log!("warning"; "found {}", summary);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SAMPLE_CONFIG;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_docs(root: &Path, files: &[&str]) {
        for rel in files {
            let path = root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "---\ntitle: x\n---\n").unwrap();
        }
    }

    fn sample_with_content(files: &[&str]) -> (TempDir, SiteConfig) {
        let temp = TempDir::new().unwrap();
        write_docs(temp.path(), files);
        let mut config = SiteConfig::from_str(SAMPLE_CONFIG).unwrap();
        config.build.content = temp.path().to_path_buf();
        (temp, config)
    }

    const ALL_DOCS: &[&str] = &[
        "index.md",
        "code-explained.md",
        "transport-explained.md",
        "config-explained.md",
        "clients-setup.md",
    ];

    #[test]
    fn test_all_links_resolve() {
        let (_temp, config) = sample_with_content(ALL_DOCS);
        validate_site(&config).unwrap();
    }

    #[test]
    fn test_missing_document_fails() {
        let (_temp, config) = sample_with_content(&ALL_DOCS[..4]);
        let err = validate_site(&config).unwrap_err();
        assert!(err.to_string().contains("1 broken sidebar link in 1 group"));
    }

    #[test]
    fn test_warn_level_passes() {
        let (_temp, mut config) = sample_with_content(&["index.md"]);
        config.validate.links.level = ValidateLevel::Warn;
        validate_site(&config).unwrap();
    }

    #[test]
    fn test_disabled_skips_scan() {
        let mut config = SiteConfig::from_str(SAMPLE_CONFIG).unwrap();
        config.build.content = "/nonexistent/content".into();
        config.validate.links.enable = false;
        validate_site(&config).unwrap();
    }

    #[test]
    fn test_report_grouped_by_sidebar_group() {
        let temp = TempDir::new().unwrap();
        write_docs(temp.path(), &["index.md", "code-explained.md"]);
        let config = SiteConfig::from_str(SAMPLE_CONFIG).unwrap();
        let index = DocIndex::scan(temp.path()).unwrap();

        let report = check_sidebar(&config.sidebar, &index);
        assert_eq!(report.group_count(), 2);
        assert_eq!(report.error_count(), 3);

        let fields: Vec<_> = report.errors().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "sidebar[1].items[1].link",
                "sidebar[2].items[0].link",
                "sidebar[2].items[1].link",
            ]
        );
    }

    #[test]
    fn test_unlisted_documents() {
        let temp = TempDir::new().unwrap();
        write_docs(temp.path(), ALL_DOCS);
        write_docs(temp.path(), &["faq.md", "guide/index.md"]);
        let config = SiteConfig::from_str(SAMPLE_CONFIG).unwrap();
        let index = DocIndex::scan(temp.path()).unwrap();

        let unlisted: Vec<_> = unlisted(&config.sidebar, &index)
            .into_iter()
            .map(|doc| doc.relative.as_str())
            .collect();
        assert_eq!(unlisted, ["faq.md", "guide/index.md"]);
    }

    #[test]
    fn test_missing_content_dir_is_error() {
        let mut config = SiteConfig::from_str(SAMPLE_CONFIG).unwrap();
        config.build.content = "/nonexistent/content".into();
        assert!(validate_site(&config).is_err());
    }
}
