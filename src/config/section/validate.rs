//! `[validate]` section configuration.
//!
//! Configuration for the `docsite validate` command.
//!
//! # Example
//!
//! ```toml
//! [validate.links]
//! enable = true               # Resolve sidebar links against the content directory
//! level = "error"             # Failure level: error | warn
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

// ============================================================================
// Main ValidateConfig
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "validate")]
pub struct ValidateConfig {
    /// Sidebar link validation settings.
    #[config(sub)]
    pub links: LinksValidateConfig,
}

// ============================================================================
// Link Validation
// ============================================================================

/// Sidebar link validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "validate.links")]
pub struct LinksValidateConfig {
    /// Resolve sidebar links against the content directory.
    #[config(default = "true", inline_doc)]
    pub enable: bool,

    /// How to treat unresolved links: "error" or "warn".
    #[config(default = "error", inline_doc)]
    pub level: ValidateLevel,
}

impl Default for LinksValidateConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: ValidateLevel::default(),
        }
    }
}

/// Validation error level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidateLevel {
    /// Treat validation failures as errors (command fails).
    #[default]
    Error,
    /// Treat validation failures as warnings (command succeeds).
    Warn,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_validate_config_defaults() {
        let config = test_parse_config("");
        assert!(config.validate.links.enable);
        assert_eq!(config.validate.links.level, ValidateLevel::Error);
    }

    #[test]
    fn test_validate_config_custom() {
        let config = test_parse_config(
            r#"[validate.links]
enable = false
level = "warn""#,
        );
        assert!(!config.validate.links.enable);
        assert_eq!(config.validate.links.level, ValidateLevel::Warn);
    }

    #[test]
    fn test_invalid_level_rejected() {
        let content = "[site]\ntitle = \"Test\"\n[validate.links]\nlevel = \"fatal\"";
        assert!(SiteConfig::parse_with_ignored(content).is_err());
    }

    #[test]
    fn test_validate_unknown_field_detected() {
        let content = "[site]\ntitle = \"Test\"\n[validate]\nunknown = \"field\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.iter().any(|f| f.contains("unknown")));
    }
}
