//! Proc macros for docsite.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site metadata.
//! pub struct SiteInfoConfig {
//!     /// Site title shown in the header and browser tab.
//!     pub title: String,
//!
//!     /// Locale key used when a page has none.
//!     #[config(default = "root")]
//!     pub default_locale: Option<String>,
//!
//!     /// Edit link settings.
//!     #[config(sub)]
//!     pub edit_link: EditLinkConfig,
//! }
//!
//! // Generates:
//! // - SiteInfoConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteInfoConfig::template() -> TOML body with comments
//! // - SiteInfoConfig::template_with_header() -> with [site] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (required)
//! - `#[config(array)]` - section is an array of tables (`[[path]]`)
//!
//! Field-level:
//! - `#[config(sub)]` - Nested section, rendered as a pointer comment
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc)]` - Render a one-line doc as trailing comment

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
