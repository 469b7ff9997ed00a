//! `[site]` section configuration.
//!
//! Contains site metadata, social links and the edit link.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "MCP Demo"
//! description = "Project documentation"
//! default_locale = "root"
//!
//! [[site.social]]
//! icon = "github"
//! label = "GitHub"
//! href = "https://github.com/example/mcp-demo"
//!
//! [site.edit_link]
//! base_url = "https://github.com/example/mcp-demo/edit/main/docs/"
//! ```

mod edit_link;
mod social;

pub use edit_link::EditLinkConfig;
pub use social::SocialLinkConfig;

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Site metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Site title shown in the header and browser tab.
    #[config(default = "My Docs", inline_doc)]
    pub title: String,

    /// Site description used in meta tags.
    #[config(inline_doc)]
    pub description: String,

    /// Locale key used for pages without a locale prefix.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,

    /// Social links shown in the site header.
    #[config(sub)]
    pub social: Vec<SocialLinkConfig>,

    /// Link to the editable source of each page.
    #[config(sub)]
    #[serde(skip_serializing_if = "EditLinkConfig::is_unset")]
    pub edit_link: EditLinkConfig,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            default_locale: None,
            social: Vec::new(),
            edit_link: EditLinkConfig::default(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata, social links and the edit link.
    ///
    /// `default_locale` is checked together with `[locales]`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title must not be empty",
                format!("set {}, e.g.: \"My Docs\"", Self::FIELDS.title),
            );
        }

        for (index, link) in self.social.iter().enumerate() {
            link.validate(index, diag);
        }

        self.edit_link.validate(diag);
    }
}
