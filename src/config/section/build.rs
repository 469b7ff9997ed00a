//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "src/content/docs"
//! output = "static"
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Build settings handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildConfig {
    /// Content directory, relative to the config file.
    #[config(default = "src/content/docs", inline_doc)]
    pub content: PathBuf,

    /// Output mode: "static" or "server".
    #[config(default = "static", inline_doc)]
    pub output: OutputMode,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "src/content/docs".into(),
            output: OutputMode::Static,
        }
    }
}

impl BuildConfig {
    /// Validate paths before normalization.
    ///
    /// Must run before the content path is joined with the root,
    /// otherwise an absolute path can no longer be told apart.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if self.content.as_os_str().is_empty() {
            diag.error(Self::FIELDS.content, "content directory must not be empty");
        } else if self.content.is_absolute() {
            diag.error_with_hint(
                Self::FIELDS.content,
                format!("'{}' must be relative to the config file", self.content.display()),
                "use a path like \"src/content/docs\"",
            );
        }
    }

    /// Content directory (absolute after config loading).
    pub fn content_dir(&self) -> &Path {
        &self.content
    }
}

/// How the renderer emits the site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Prerender every page to static files.
    #[default]
    Static,
    /// Render pages on demand.
    Server,
}

impl OutputMode {
    pub const ALL: [Self; 2] = [Self::Static, Self::Server];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Server => "server",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown output mode '{s}', expected static or server"))
    }
}
