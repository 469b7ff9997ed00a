//! `docsite export`: emit the config for the renderer.

use anyhow::{Context, Result};
use std::fs;

use crate::cli::ExportArgs;
use crate::config::SiteConfig;
use crate::export::export;
use crate::log;

pub fn export_config(config: &SiteConfig, args: &ExportArgs) -> Result<()> {
    let mut formatted = export(config, args.format, args.pretty)?;
    if !formatted.ends_with('\n') {
        formatted.push('\n');
    }

    if let Some(ref output_path) = args.output {
        fs::write(output_path, &formatted)
            .with_context(|| format!("failed to write '{}'", output_path.display()))?;
        log!("export"; "wrote {}", output_path.display());
    } else {
        print!("{formatted}");
    }

    Ok(())
}
