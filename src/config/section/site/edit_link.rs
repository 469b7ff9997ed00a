//! `[site.edit_link]` configuration.
//!
//! The edit URL of a page is `base_url` joined with the page's path
//! relative to the content directory, one URL segment per path component.
//! `base_url` must end with `/` so it names a directory.

use crate::config::ConfigDiagnostics;
use anyhow::{Context, Result, anyhow, bail};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};
use url::Url;

/// Edit link settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.edit_link")]
pub struct EditLinkConfig {
    /// Base URL of the editable content directory, ending with "/".
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl EditLinkConfig {
    pub fn is_enabled(&self) -> bool {
        self.base_url.is_some()
    }

    pub(super) fn is_unset(&self) -> bool {
        !self.is_enabled()
    }

    /// Validate the base URL.
    ///
    /// # Checks
    /// - parses as an absolute URL
    /// - scheme is http or https
    /// - ends with a trailing slash
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(base) = &self.base_url else {
            return;
        };

        match Url::parse(base) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.base_url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://github.com/user/repo/edit/main/docs/",
                    );
                }
                if !base.ends_with('/') {
                    diag.error_with_hint(
                        Self::FIELDS.base_url,
                        "base URL must end with a trailing slash",
                        format!("use \"{base}/\""),
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.base_url,
                    format!("invalid URL: {}", e),
                    "use format like https://github.com/user/repo/edit/main/docs/",
                );
            }
        }
    }

    /// Build the edit URL for a document path relative to the content directory.
    pub fn url_for(&self, relative: &Path) -> Result<Url> {
        let Some(base) = &self.base_url else {
            bail!("edit link is not configured, set `site.edit_link.base_url`");
        };
        let mut url =
            Url::parse(base).with_context(|| format!("invalid edit link base `{base}`"))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow!("edit link base `{base}` cannot have a path"))?;
            // Drop the empty segment after the trailing slash
            segments.pop_if_empty();
            for component in relative.components() {
                if let Component::Normal(name) = component {
                    segments.push(&name.to_string_lossy());
                }
            }
        }
        Ok(url)
    }
}
