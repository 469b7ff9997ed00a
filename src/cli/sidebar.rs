//! `docsite sidebar`: print the navigation tree.
//!
//! ```text
//! 项目文档
//! └── 项目介绍  /index → index.md
//! 代码学习
//! ├── 代码逐行解析  /code-explained → code-explained.md
//! └── Transport 详解  /transport-explained (unresolved)
//! ```

use anyhow::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

use crate::config::{SidebarGroupConfig, SiteConfig};
use crate::content::DocIndex;
use crate::log;

pub fn print_sidebar(config: &SiteConfig) -> Result<()> {
    // A missing content dir still prints the tree, just without targets
    let index = match DocIndex::scan(config.build.content_dir()) {
        Ok(index) => Some(index),
        Err(e) => {
            log!("warning"; "{}", e);
            None
        }
    };

    print!("{}", render_tree(&config.sidebar, index.as_ref()));
    Ok(())
}

fn render_tree(groups: &[SidebarGroupConfig], index: Option<&DocIndex>) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{}", group.label.bold());
        let last = group.items.len().saturating_sub(1);
        for (i, item) in group.items.iter().enumerate() {
            let branch = if i == last { "└──" } else { "├──" };
            let target = match index.map(|index| index.resolve(&item.link)) {
                Some(Some(doc)) => format!("→ {}", doc.relative.green()),
                Some(None) => "(unresolved)".red().to_string(),
                None => String::new(),
            };
            let _ = writeln!(
                out,
                "{} {}  {} {}",
                branch.dimmed(),
                item.label,
                item.link.cyan(),
                target
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SAMPLE_CONFIG;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_tree_marks_unresolved() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.md"), "").unwrap();
        let index = DocIndex::scan(temp.path()).unwrap();
        let config = SiteConfig::from_str(SAMPLE_CONFIG).unwrap();

        let tree = render_tree(&config.sidebar, Some(&index));
        let lines: Vec<_> = tree.lines().collect();

        assert_eq!(lines.len(), 8);
        assert!(lines[0].contains("项目文档"));
        assert!(lines[1].contains("└──") && lines[1].contains("index.md"));
        assert!(lines[3].contains("├──") && lines[3].contains("(unresolved)"));
    }

    #[test]
    fn test_render_tree_without_index() {
        let config = SiteConfig::from_str(SAMPLE_CONFIG).unwrap();
        let tree = render_tree(&config.sidebar, None);
        assert!(!tree.contains("unresolved"));
        assert!(tree.contains("/clients-setup"));
    }

    #[test]
    fn test_print_sidebar_missing_content() {
        let mut config = SiteConfig::from_str(SAMPLE_CONFIG).unwrap();
        config.build.content = "/nonexistent/content".into();
        print_sidebar(&config).unwrap();
    }
}
