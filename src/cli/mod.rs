//! Command-line interface module.

mod args;
pub mod edit_link;
pub mod export;
pub mod init;
pub mod sidebar;
pub mod validate;

pub use args::{Cli, Commands, ExportArgs, ValidateArgs};
