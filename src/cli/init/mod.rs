//! Site initialization.
//!
//! - [`validate`]: target directory checks
//! - [`config`]: starter config, content and ignore files

mod config;
mod validate;

use crate::utils::path::relative_to;
use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use validate::InitMode;

/// Create a new site at the config's root.
///
/// With `dry_run` the config template is printed and nothing is written.
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    let root = site_config.get_root();
    let content = relative_to(site_config.build.content_dir(), root);

    if dry_run {
        print!("{}", config::generate_config_template(&content));
        return Ok(());
    }

    InitMode::from_name(has_name).check(root)?;

    fs::create_dir_all(root)
        .with_context(|| format!("failed to create directory '{}'", root.display()))?;

    let config_name: PathBuf = site_config
        .config_path
        .file_name()
        .map(Into::into)
        .unwrap_or_else(|| "docsite.toml".into());
    config::write_config(root, &config_name, &content)?;
    config::write_content(site_config.build.content_dir())?;
    config::write_ignore_file(root)?;

    log!("init"; "site initialized at {}", root.display());
    Ok(())
}
