//! `[locales]` configuration.
//!
//! # Example
//!
//! ```toml
//! [locales.root]
//! label = "简体中文"
//! lang = "zh-CN"
//!
//! [locales.en]
//! label = "English"
//! lang = "en"
//! ```
//!
//! The `root` key serves pages without a locale prefix. Every other key
//! is used as a URL segment (`/en/...`).

use crate::config::{ConfigDiagnostics, FieldPath, section::SiteInfoConfig};
use macros::Config;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Locale key that serves unprefixed pages.
pub const ROOT_LOCALE: &str = "root";

/// Locale table keyed by locale key.
pub type Locales = BTreeMap<String, LocaleConfig>;

/// Locale settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "locales.root")]
pub struct LocaleConfig {
    /// Name shown in the language picker.
    #[config(default = "English", inline_doc)]
    pub label: String,

    /// BCP-47 language tag, e.g. "en" or "zh-CN".
    #[config(default = "en", inline_doc)]
    pub lang: String,

    /// Writing direction: "ltr" or "rtl".
    #[config(default = "ltr", inline_doc)]
    #[serde(default, skip_serializing_if = "TextDirection::is_ltr")]
    pub dir: TextDirection,
}

/// Writing direction of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn is_ltr(&self) -> bool {
        *self == Self::Ltr
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        })
    }
}

/// Check a language tag against a BCP-47 subset:
/// `language[-script][-region][-variant]*`.
pub fn is_valid_lang_tag(tag: &str) -> bool {
    static RE_LANG_TAG: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(
            r"^[A-Za-z]{2,3}(-[A-Za-z]{4})?(-([A-Za-z]{2}|[0-9]{3}))?(-([A-Za-z0-9]{5,8}|[0-9][A-Za-z0-9]{3}))*$",
        )
        .unwrap()
    });
    RE_LANG_TAG.is_match(tag)
}

/// Check that a non-root locale key can be used as a URL segment.
fn is_valid_locale_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn locale_field(key: &str, field: &str) -> FieldPath {
    FieldPath::owned(format!("locales.{key}.{field}"))
}

/// Resolve the default locale key.
///
/// Explicit `site.default_locale` wins, then `root`, then the only locale.
pub fn resolve_default_locale<'a>(locales: &'a Locales, explicit: Option<&str>) -> Option<&'a str> {
    if let Some(key) = explicit {
        return locales.get_key_value(key).map(|(k, _)| k.as_str());
    }
    if let Some((key, _)) = locales.get_key_value(ROOT_LOCALE) {
        return Some(key.as_str());
    }
    match locales.len() {
        1 => locales.keys().next().map(String::as_str),
        _ => None,
    }
}

/// Validate the locale table together with `site.default_locale`.
///
/// # Checks
/// - at least one locale
/// - each `lang` is a valid BCP-47 tag and each `label` is non-empty
/// - non-root keys are lowercase URL segments
/// - the default locale resolves to a configured key
/// - duplicate `lang` values are reported as warnings
pub fn validate_locales(
    locales: &Locales,
    default_locale: Option<&str>,
    diag: &mut ConfigDiagnostics,
) {
    if locales.is_empty() {
        diag.error_with_hint(
            FieldPath::new("locales"),
            "at least one locale is required",
            "add a table like [locales.root] with label = \"English\" and lang = \"en\"",
        );
        return;
    }

    let mut langs: FxHashMap<String, &str> = FxHashMap::default();
    for (key, locale) in locales {
        if key != ROOT_LOCALE && !is_valid_locale_key(key) {
            diag.error_with_hint(
                FieldPath::owned(format!("locales.{key}")),
                format!("locale key '{key}' is not a valid URL segment"),
                "use lowercase letters, digits and '-', e.g. \"zh-cn\"",
            );
        }

        if locale.label.trim().is_empty() {
            diag.error(locale_field(key, "label"), "label must not be empty");
        }

        if !is_valid_lang_tag(&locale.lang) {
            diag.error_with_hint(
                locale_field(key, "lang"),
                format!("'{}' is not a valid language tag", locale.lang),
                "use a BCP-47 tag like \"en\", \"zh-CN\" or \"pt-BR\"",
            );
        } else if let Some(first) = langs.insert(locale.lang.to_ascii_lowercase(), key) {
            diag.warn(
                locale_field(key, "lang"),
                format!("'{}' is also used by locale '{first}'", locale.lang),
            );
        }
    }

    match default_locale {
        Some(key) if !locales.contains_key(key) => {
            let known = locales.keys().cloned().collect::<Vec<_>>().join(", ");
            diag.error_with_hint(
                SiteInfoConfig::FIELDS.default_locale,
                format!("default locale '{key}' is not configured"),
                format!("use one of: {known}"),
            );
        }
        Some(_) => {}
        None => {
            if resolve_default_locale(locales, None).is_none() {
                diag.error_with_hint(
                    SiteInfoConfig::FIELDS.default_locale,
                    "cannot pick a default locale",
                    format!(
                        "set {} or add a [locales.{ROOT_LOCALE}] table",
                        SiteInfoConfig::FIELDS.default_locale
                    ),
                );
            }
        }
    }
}
