//! Project listing.

use std::path::PathBuf;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::formatting::{print_project_table, print_section_header, SectionStyle};

use super::open_workspace;

pub fn cmd_list(start: PathBuf, json: bool) -> Result<()> {
    let workspace = open_workspace(&start)?;
    let projects = workspace.scan_projects()?;

    if json {
        let data: Vec<_> = projects
            .iter()
            .map(|p| {
                serde_json::json!({
                    "root": p.root,
                    "config": p.config,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    print_section_header("Projects", SectionStyle::Primary);
    if projects.is_empty() {
        println!("  {} {}", "→".cyan(), "(none)".bright_black());
    } else {
        print_project_table(&projects);
    }
    println!();

    Ok(())
}
