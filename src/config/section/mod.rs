//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module     | TOML Section   | Purpose                              |
//! |------------|----------------|--------------------------------------|
//! | `site`     | `[site]`       | Title, description, social, edit link |
//! | `sidebar`  | `[[sidebar]]`  | Navigation groups and entries        |
//! | `locale`   | `[locales]`    | Supported locales                    |
//! | `build`    | `[build]`      | Content directory, output mode       |
//! | `validate` | `[validate]`   | Sidebar link validation              |

pub mod build;
pub mod locale;
pub mod sidebar;
pub mod site;
mod validate;

// Re-export section configs
pub use build::{BuildConfig, OutputMode};
pub use locale::{LocaleConfig, Locales, ROOT_LOCALE};
pub use sidebar::{SidebarGroupConfig, SidebarItemConfig};
pub use site::{EditLinkConfig, SiteInfoConfig, SocialLinkConfig};
pub use validate::{LinksValidateConfig, ValidateConfig, ValidateLevel};
