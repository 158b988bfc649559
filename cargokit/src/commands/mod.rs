//! Command implementations for the CLI.

mod generate;
mod list;
mod run;

use std::path::Path;

use anyhow::{Context, Result};
use cargokit_core::Workspace;

pub use generate::{cmd_init, cmd_new};
pub use list::cmd_list;
pub use run::{cmd_exec, Target};

fn open_workspace(start: &Path) -> Result<Workspace> {
    Workspace::discover(start)
        .with_context(|| format!("Failed to open workspace from {}", start.display()))
}
