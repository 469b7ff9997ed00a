//! Configuration export.
//!
//! Two shapes are produced from a loaded [`SiteConfig`]:
//!
//! - **JSON**: the object the renderer integration takes, camelCase keys
//!   (`editLink.baseUrl`, `defaultLocale`), with `output` at the top level.
//! - **TOML**: the canonical `docsite.toml` form. Parsing it back yields an
//!   equal record.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::section::ROOT_LOCALE;
use crate::config::{Locales, OutputMode, SidebarGroupConfig, SiteConfig, SocialLinkConfig};
use crate::utils::path::relative_to;

/// Export format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Renderer configuration object
    #[default]
    Json,
    /// Canonical docsite.toml
    Toml,
}

/// Renderer view of the configuration record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RendererConfig<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    social: &'a [SocialLinkConfig],
    #[serde(skip_serializing_if = "Option::is_none")]
    edit_link: Option<EditLink<'a>>,
    sidebar: &'a [SidebarGroupConfig],
    locales: &'a Locales,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_locale: Option<&'a str>,
    output: OutputMode,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EditLink<'a> {
    base_url: &'a str,
}

impl<'a> RendererConfig<'a> {
    fn new(config: &'a SiteConfig) -> Self {
        let site = &config.site;
        Self {
            title: &site.title,
            description: &site.description,
            social: &site.social,
            edit_link: site
                .edit_link
                .base_url
                .as_deref()
                .map(|base_url| EditLink { base_url }),
            sidebar: &config.sidebar,
            locales: &config.locales,
            // Only emitted when the renderer cannot infer it from `root`
            default_locale: config
                .default_locale()
                .filter(|key| *key != ROOT_LOCALE),
            output: config.build.output,
        }
    }
}

/// Export the configuration in the requested format.
pub fn export(config: &SiteConfig, format: ExportFormat, pretty: bool) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(config, pretty),
        ExportFormat::Toml => to_toml(config),
    }
}

/// Serialize the renderer configuration object.
pub fn to_json(config: &SiteConfig, pretty: bool) -> Result<String> {
    let view = RendererConfig::new(config);
    let json = if pretty {
        serde_json::to_string_pretty(&view)
    } else {
        serde_json::to_string(&view)
    };
    json.context("failed to serialize config as JSON")
}

/// Serialize the canonical TOML form.
///
/// The content directory is written relative to the project root again,
/// the way it appears in a hand-written config. A directory outside the
/// root is reached through `..`.
pub fn to_toml(config: &SiteConfig) -> Result<String> {
    let mut record = config.clone();
    record.build.content = relative_to(&config.build.content, config.get_root());
    toml::to_string_pretty(&record).context("failed to serialize config as TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SAMPLE_CONFIG, test_parse_config};
    use serde_json::Value;
    use std::path::{Path, PathBuf};

    fn sample() -> SiteConfig {
        SiteConfig::from_str(SAMPLE_CONFIG).unwrap()
    }

    #[test]
    fn test_json_shape() {
        let json: Value = serde_json::from_str(&to_json(&sample(), false).unwrap()).unwrap();

        assert_eq!(json["title"], "MCP Demo - Weather Server & Client");
        assert_eq!(json["social"][0]["icon"], "github");
        assert_eq!(
            json["editLink"]["baseUrl"],
            "https://github.com/TianCai19/mcp-demo/edit/main/docs-site/src/content/docs/"
        );
        assert_eq!(json["sidebar"][1]["items"][1]["link"], "/transport-explained");
        assert_eq!(json["locales"]["root"]["lang"], "zh-CN");
        assert_eq!(json["output"], "static");

        // Local build settings never reach the renderer
        assert!(json.get("build").is_none());
        assert!(json.get("validate").is_none());
        assert!(json.get("defaultLocale").is_none());
        assert!(json["locales"]["root"].get("dir").is_none());
    }

    #[test]
    fn test_json_keeps_key_order() {
        let json = to_json(&sample(), false).unwrap();
        let title = json.find("\"title\"").unwrap();
        let sidebar = json.find("\"sidebar\"").unwrap();
        let output = json.find("\"output\"").unwrap();
        assert!(title < sidebar && sidebar < output);
    }

    #[test]
    fn test_json_optional_fields_omitted() {
        let exported = to_json(&test_parse_config(""), false).unwrap();
        let json: Value = serde_json::from_str(&exported).unwrap();
        assert!(json.get("editLink").is_none());
        assert!(json.get("social").is_none());
    }

    #[test]
    fn test_json_default_locale_non_root() {
        let mut config = test_parse_config(
            "[locales.fr]\nlabel = \"Français\"\nlang = \"fr\"\ndir = \"ltr\"\n\n[locales.ar]\nlabel = \"العربية\"\nlang = \"ar\"\ndir = \"rtl\"",
        );
        config.locales.remove("root");
        config.site.default_locale = Some("fr".into());

        let json: Value = serde_json::from_str(&to_json(&config, true).unwrap()).unwrap();
        assert_eq!(json["defaultLocale"], "fr");
        assert_eq!(json["locales"]["ar"]["dir"], "rtl");
    }

    #[test]
    fn test_toml_round_trip() {
        let original = sample();
        let exported = to_toml(&original).unwrap();
        let parsed = SiteConfig::from_str(&exported).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_toml_content_relative_to_root() {
        let mut config = sample();
        config.set_root(Path::new("/site"));
        config.build.content = PathBuf::from("/site/src/content/docs");

        let parsed = SiteConfig::from_str(&to_toml(&config).unwrap()).unwrap();
        assert_eq!(parsed.build.content, PathBuf::from("src/content/docs"));
    }

    #[test]
    fn test_toml_content_outside_root() {
        let mut config = sample();
        config.set_root(Path::new("/work/site"));
        config.build.content = PathBuf::from("/work/shared-docs");

        let exported = to_toml(&config).unwrap();
        assert!(exported.contains(r#"content = "../shared-docs""#));

        let parsed = SiteConfig::from_str(&exported).unwrap();
        let mut diag = crate::config::ConfigDiagnostics::new();
        parsed.build.validate_paths(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_toml_round_trip_locales_without_edit_link() {
        let original = SiteConfig::from_str(
            r#"
[site]
title = "Docs"
default_locale = "ar"

[[sidebar]]
label = "Start"
items = [{ label = "Home", link = "/" }]

[locales.ar]
label = "العربية"
lang = "ar"
dir = "rtl"

[locales.en]
label = "English"
lang = "en"

[build]
content = "../shared-docs"
output = "server"
"#,
        )
        .unwrap();
        assert!(original.diagnostics().into_result().is_ok());

        let exported = to_toml(&original).unwrap();
        assert!(!exported.contains("edit_link"));
        let parsed = SiteConfig::from_str(&exported).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.default_locale(), Some("ar"));
    }

    #[test]
    fn test_export_dispatch() {
        let config = sample();
        assert!(export(&config, ExportFormat::Json, false).unwrap().starts_with('{'));
        assert!(export(&config, ExportFormat::Toml, false).unwrap().contains("[site]"));
    }
}
