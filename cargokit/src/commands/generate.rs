//! Workspace and project generators.

use std::path::PathBuf;

use anyhow::Result;
use cargokit_core::{generate_project, init_workspace, NewProjectOptions, PackageKind};

use crate::formatting::{print_key_value, print_section_header, print_success, SectionStyle};

use super::open_workspace;

pub fn cmd_init(root: PathBuf) -> Result<()> {
    let created = init_workspace(&root)?;

    print_section_header("Workspace", SectionStyle::Primary);
    if created.is_empty() {
        print_success("Workspace already initialized");
    } else {
        for path in &created {
            let shown = path.strip_prefix(&root).unwrap_or(path);
            print_key_value("Created", &shown.display().to_string());
        }
        println!();
        print_success(&format!("Initialized workspace in {}", root.display()));
    }

    Ok(())
}

pub fn cmd_new(
    start: PathBuf,
    name: String,
    kind: PackageKind,
    directory: Option<String>,
    tags: Vec<String>,
    edition: String,
) -> Result<()> {
    let workspace = open_workspace(&start)?;
    let options = NewProjectOptions {
        name,
        kind,
        directory,
        tags,
        edition,
    };
    let project = generate_project(&workspace, &options)?;

    print_section_header("New project", SectionStyle::Primary);
    print_key_value("Name", &project.project_name);
    print_key_value("Kind", project.kind.as_str());
    print_key_value("Path", &project.member_path());
    if !project.tags.is_empty() {
        print_key_value("Tags", &project.tags.join(", "));
    }
    println!();
    print_success(&format!("Added {} to workspace members", project.member_path()));

    Ok(())
}
