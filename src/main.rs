//! docsite - configuration loader, validator and exporter for documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod export;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Validate { .. } => cli::validate::validate_site(&config),
        Commands::Export { args } => cli::export::export_config(&config, args),
        Commands::Sidebar => cli::sidebar::print_sidebar(&config),
        Commands::EditLink { paths } => cli::edit_link::print_edit_links(&config, paths),
    }
}
