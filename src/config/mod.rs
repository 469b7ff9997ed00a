//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── locale     # [locales]
//! │   ├── sidebar    # [[sidebar]]
//! │   ├── site/      # [site], [[site.social]], [site.edit_link]
//! │   └── validate   # [validate]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section              | Purpose                                      |
//! |----------------------|----------------------------------------------|
//! | `[site]`             | Title, description, default locale           |
//! | `[[site.social]]`    | Header social links                          |
//! | `[site.edit_link]`   | Base URL for "edit this page" links          |
//! | `[[sidebar]]`        | Navigation groups                            |
//! | `[locales.<key>]`    | Supported locales                            |
//! | `[build]`            | Content directory and output mode            |
//! | `[validate]`         | Sidebar link validation settings             |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BuildConfig, Locales, OutputMode, SidebarGroupConfig, SidebarItemConfig, SiteInfoConfig,
    SocialLinkConfig, ValidateConfig, ValidateLevel,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::{Cli, Commands, ValidateArgs};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata, social links, edit link
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Navigation groups
    #[serde(default)]
    pub sidebar: Vec<SidebarGroupConfig>,

    /// Supported locales
    #[serde(default)]
    pub locales: Locales,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,
}

/// Compares the configuration record only, not where it was loaded from.
impl PartialEq for SiteConfig {
    fn eq(&self, other: &Self) -> bool {
        self.site == other.site
            && self.sidebar == other.sidebar
            && self.locales == other.locales
            && self.build == other.build
            && self.validate == other.validate
    }
}

/// Where the config file is and which directory is the site root.
struct ConfigLocation {
    config_path: PathBuf,
    root: PathBuf,
}

impl ConfigLocation {
    /// `init` targets cwd or `cwd/<name>`. Every other command searches
    /// upward from cwd, and the directory holding the file is the root.
    fn resolve(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current working directory")?;

        if let Commands::Init { name, .. } = &cli.command {
            let root = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
            return Ok(Self {
                config_path: root.join(&cli.config),
                root,
            });
        }

        let config_path = find_config_file(&cli.config)
            .ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;
        let root = config_path.parent().map_or(cwd, Path::to_path_buf);
        Ok(Self { config_path, root })
    }
}

impl SiteConfig {
    /// Load, finalize and validate the configuration for a CLI invocation.
    ///
    /// `init` starts from defaults since the file does not exist yet.
    pub fn load(cli: &Cli) -> Result<Self> {
        let location = ConfigLocation::resolve(cli)?;

        let mut config = if cli.is_init() {
            Self::default()
        } else {
            let config = Self::from_path(&location.config_path)?;
            // Absolute paths are only detectable before normalization
            config.validate_paths()?;
            config
        };

        config.config_path = location.config_path;
        Self::update_option(&mut config.build.content, cli.content.as_ref());
        config.normalize_paths(&location.root);
        config.apply_command_options(cli);

        if !cli.is_init() {
            config.validate()?;
        }
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Read a config file. Unknown fields are reported and skipped.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        unknown_fields(&ignored).print_warnings();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Effective default locale key, if one can be determined.
    pub fn default_locale(&self) -> Option<&str> {
        section::locale::resolve_default_locale(&self.locales, self.site.default_locale.as_deref())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        match &cli.command {
            Commands::Validate { args } => self.apply_validate_args(args),
            Commands::Export { args } => {
                Self::update_option(&mut self.build.output, args.output_mode.as_ref());
            }
            Commands::Init { .. } | Commands::Sidebar | Commands::EditLink { .. } => {}
        }
    }

    /// Apply validate arguments from CLI.
    fn apply_validate_args(&mut self, args: &ValidateArgs) {
        Self::update_option(&mut self.validate.links.enable, args.links.as_ref());

        // --warn-only sets the level to Warn
        if args.warn_only {
            self.validate.links.level = ValidateLevel::Warn;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = crate::utils::path::normalize_path(root);
        self.set_root(&root);

        self.config_path = crate::utils::path::normalize_path(&self.config_path);
        self.build.content = crate::utils::path::normalize_path(&root.join(&self.build.content));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// This must be called before `finalize()` because path normalization
    /// converts relative paths to absolute paths, making it impossible to
    /// detect if the user specified an absolute path in the config.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate_paths(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Collect all schema diagnostics without printing them.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        section::sidebar::validate_sidebar(&self.sidebar, &mut diag);
        section::locale::validate_locales(
            &self.locales,
            self.site.default_locale.as_deref(),
            &mut diag,
        );

        diag
    }

    /// Validate the configuration record.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();

        // Print collected warnings (grouped display)
        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

/// Warnings for fields serde skipped.
fn unknown_fields(fields: &[String]) -> ConfigDiagnostics {
    let mut diag = ConfigDiagnostics::new();
    for field in fields {
        diag.warn_with_hint(
            FieldPath::owned(field.clone()),
            "unknown field, ignored",
            "run `docsite init --dry` to see every supported field",
        );
    }
    diag
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal valid `[site]` and `[locales.root]`.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\ntitle = \"Test\"\ndescription = \"Test\"\n\n[locales.root]\nlabel = \"English\"\nlang = \"en\"\n\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// The configuration of the original documentation site, used as a fixture.
#[cfg(test)]
pub const SAMPLE_CONFIG: &str = r#"
[site]
title = "MCP Demo - Weather Server & Client"
description = "Model Context Protocol 完整示例项目文档"

[[site.social]]
icon = "github"
label = "GitHub"
href = "https://github.com/TianCai19/mcp-demo"

[site.edit_link]
base_url = "https://github.com/TianCai19/mcp-demo/edit/main/docs-site/src/content/docs/"

[[sidebar]]
label = "项目文档"
items = [{ label = "项目介绍", link = "/index" }]

[[sidebar]]
label = "代码学习"
items = [
    { label = "代码逐行解析", link = "/code-explained" },
    { label = "Transport 详解", link = "/transport-explained" },
]

[[sidebar]]
label = "配置指南"
items = [
    { label = "配置格式详解", link = "/config-explained" },
    { label = "各客户端配置", link = "/clients-setup" },
]

[locales.root]
label = "简体中文"
lang = "zh-CN"

[build]
output = "static"
"#;

// ============================================================================
// tests
// ============================================================================
