//! `[[site.social]]` links.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Icon names the renderer ships with.
pub const KNOWN_ICONS: &[&str] = &[
    "bitbucket",
    "blueSky",
    "codeberg",
    "discord",
    "discourse",
    "email",
    "facebook",
    "github",
    "gitlab",
    "instagram",
    "linkedin",
    "mastodon",
    "matrix",
    "npm",
    "reddit",
    "rss",
    "slack",
    "stackOverflow",
    "telegram",
    "threads",
    "twitch",
    "x.com",
    "youtube",
];

/// Social link shown in the site header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[config(section = "site.social", array)]
pub struct SocialLinkConfig {
    /// Icon name, e.g. "github".
    #[config(default = "github", inline_doc)]
    pub icon: String,

    /// Accessible label for the link.
    #[config(default = "GitHub", inline_doc)]
    pub label: String,

    /// Link target.
    #[config(default = "https://github.com/", inline_doc)]
    pub href: String,
}

impl SocialLinkConfig {
    /// Validate a single entry at position `index` of `[[site.social]]`.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let section = Self::TEMPLATE_SECTION;

        if self.icon.trim().is_empty() {
            diag.error(
                Self::FIELDS.icon.index(section, index),
                "icon must not be empty",
            );
        } else if !KNOWN_ICONS.contains(&self.icon.as_str()) {
            let similar = KNOWN_ICONS
                .iter()
                .find(|known| known.eq_ignore_ascii_case(&self.icon));
            match similar {
                Some(known) => diag.warn_with_hint(
                    Self::FIELDS.icon.index(section, index),
                    format!("icon '{}' is not a built-in icon", self.icon),
                    format!("icon names are case-sensitive, use \"{known}\""),
                ),
                None => diag.warn(
                    Self::FIELDS.icon.index(section, index),
                    format!("icon '{}' is not a built-in icon", self.icon),
                ),
            }
        }

        if self.label.trim().is_empty() {
            diag.error(
                Self::FIELDS.label.index(section, index),
                "label must not be empty",
            );
        }

        if let Err(e) = url::Url::parse(&self.href) {
            diag.error_with_hint(
                Self::FIELDS.href.index(section, index),
                format!("invalid URL '{}': {}", self.href, e),
                "use an absolute URL like https://github.com/user/repo",
            );
        }
    }
}
