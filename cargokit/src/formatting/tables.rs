//! Table formatting utilities using comfy-table.

use cargokit_core::Project;
use comfy_table::{Cell, Table};

use super::output::format_path;

/// Prints a table of projects with their kind, location and targets.
pub fn print_project_table(projects: &[Project]) {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("Project").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Kind").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Path").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Targets").add_attribute(comfy_table::Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);

    for project in projects {
        let targets = project
            .config
            .targets
            .iter()
            .map(|(name, target)| {
                if name == &target.executor {
                    name.clone()
                } else {
                    format!("{} ({})", name, target.executor)
                }
            })
            .collect::<Vec<_>>();
        let targets = if targets.is_empty() {
            "(no targets)".to_string()
        } else {
            targets.join(", ")
        };

        table.add_row(vec![
            Cell::new(project.name()).fg(comfy_table::Color::White),
            Cell::new(project.config.kind.as_str()).fg(comfy_table::Color::DarkGrey),
            Cell::new(format_path(&project.root)),
            Cell::new(targets),
        ]);
    }

    println!("{}", table);
}
