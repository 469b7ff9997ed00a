//! `[[sidebar]]` navigation groups.
//!
//! # Example
//!
//! ```toml
//! [[sidebar]]
//! label = "Guides"
//! items = [
//!     { label = "Introduction", link = "/index" },
//!     { label = "Transports", link = "/transport-explained" },
//! ]
//! ```
//!
//! Links are site-root paths. Whether they point at an existing
//! document is checked against the content index by `validate`.

use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Sidebar group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "sidebar", array)]
pub struct SidebarGroupConfig {
    /// Group heading.
    #[config(default = "Guides", inline_doc)]
    pub label: String,

    /// Pages in this group, in display order.
    #[config(default = "[{ label = \"Introduction\", link = \"/index\" }]")]
    #[serde(default)]
    pub items: Vec<SidebarItemConfig>,
}

/// A single sidebar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "sidebar.items")]
pub struct SidebarItemConfig {
    /// Entry text.
    pub label: String,

    /// Site-root path of the target document, e.g. "/guides/intro".
    pub link: String,
}

impl SidebarItemConfig {
    fn validate(&self, group: usize, index: usize, diag: &mut ConfigDiagnostics) {
        let group_prefix = format!("{}[{group}].items", SidebarGroupConfig::TEMPLATE_SECTION);
        let path = |field: crate::config::FieldPath| {
            field
                .index(SidebarGroupConfig::TEMPLATE_SECTION, group)
                .index(&group_prefix, index)
        };

        if self.label.trim().is_empty() {
            diag.error(path(Self::FIELDS.label), "label must not be empty");
        }

        if self.link.is_empty() {
            diag.error(path(Self::FIELDS.link), "link must not be empty");
        } else if !self.link.starts_with('/') {
            diag.error_with_hint(
                path(Self::FIELDS.link),
                format!("link '{}' must start with '/'", self.link),
                format!("use \"/{}\"", self.link.trim_start_matches("./")),
            );
        }
    }
}

/// Iterate every item with its `(group, index)` position.
pub fn iter_items(
    groups: &[SidebarGroupConfig],
) -> impl Iterator<Item = (usize, usize, &SidebarGroupConfig, &SidebarItemConfig)> {
    groups.iter().enumerate().flat_map(|(g, group)| {
        group
            .items
            .iter()
            .enumerate()
            .map(move |(i, item)| (g, i, group, item))
    })
}

/// Validate the sidebar tree.
///
/// # Checks
/// - group and item labels are non-empty
/// - every group has at least one item
/// - every link is non-empty and starts with `/`
/// - duplicate links are reported as warnings
pub fn validate_sidebar(groups: &[SidebarGroupConfig], diag: &mut ConfigDiagnostics) {
    let section = SidebarGroupConfig::TEMPLATE_SECTION;

    for (g, group) in groups.iter().enumerate() {
        if group.label.trim().is_empty() {
            diag.error(
                SidebarGroupConfig::FIELDS.label.index(section, g),
                "group label must not be empty",
            );
        }
        if group.items.is_empty() {
            diag.error_with_hint(
                SidebarGroupConfig::FIELDS.items.index(section, g),
                "group has no items",
                "add an entry like { label = \"Intro\", link = \"/intro\" }",
            );
        }
    }

    let mut seen: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
    for (g, i, _, item) in iter_items(groups) {
        item.validate(g, i, diag);

        if item.link.is_empty() {
            continue;
        }
        if let Some((first_g, first_i)) = seen.get(item.link.as_str()) {
            diag.warn(
                crate::config::FieldPath::owned(format!("{section}[{g}].items[{i}].link")),
                format!(
                    "'{}' already linked from {section}[{first_g}].items[{first_i}]",
                    item.link
                ),
            );
        } else {
            seen.insert(item.link.as_str(), (g, i));
        }
    }
}
