//! Target directory checks before `init` writes anything.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Where `init` puts the new site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `docsite init`: the current directory, which must be empty
    CurrentDir,
    /// `docsite init <name>`: a new directory, which must not exist yet
    NewDir,
}

impl InitMode {
    pub const fn from_name(has_name: bool) -> Self {
        if has_name { Self::NewDir } else { Self::CurrentDir }
    }

    /// Check that `root` can receive a new site.
    pub fn check(self, root: &Path) -> Result<()> {
        match self {
            Self::CurrentDir if !is_empty_dir(root)? => bail!(
                "current directory is not empty, \
                 use `docsite init <name>` to create the site in a new directory"
            ),
            Self::NewDir if root.exists() => bail!(
                "'{}' already exists, choose another name",
                root.display()
            ),
            _ => Ok(()),
        }
    }
}

/// A missing directory counts as empty.
fn is_empty_dir(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let mut entries = fs::read_dir(path)
        .with_context(|| format!("failed to read directory '{}'", path.display()))?;
    Ok(entries.next().is_none())
}
