//! Scaffolding for new workspaces and projects.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::args::PackageKind;
use crate::config::{ProjectConfig, WorkspaceConfig, PROJECT_CONFIG_FILE, WORKSPACE_CONFIG_FILE};
use crate::error::{Error, Result};
use crate::manifest::WorkspaceManifest;
use crate::naming::{normalize_project, NewProjectOptions, NormalizedProject};
use crate::workspace::Workspace;

const WORKSPACE_MANIFEST: &str = r#"[workspace]
resolver = "2"
members = []
"#;

/// Writes `content` to `path` unless it exists. Returns whether it wrote.
fn write_new(path: &Path, content: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    info!(path = %path.display(), "created");
    Ok(true)
}

/// Sets up a cargokit workspace in `root`.
///
/// Existing files are left as they are. Returns the paths that were created.
pub fn init_workspace(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    fs::create_dir_all(root)?;
    let mut created = Vec::new();

    let manifest_path = root.join("Cargo.toml");
    if write_new(&manifest_path, WORKSPACE_MANIFEST)? {
        created.push(manifest_path);
    }

    let config = WorkspaceConfig::default();
    let config_path = root.join(WORKSPACE_CONFIG_FILE);
    if write_new(&config_path, &config.to_toml_string()?)? {
        created.push(config_path);
    }

    for dir in [&config.layout.apps_dir, &config.layout.libs_dir] {
        let path = root.join(dir);
        if !path.exists() {
            fs::create_dir_all(&path)?;
            created.push(path);
        }
    }

    let gitignore = root.join(".gitignore");
    if gitignore.exists() {
        let content = fs::read_to_string(&gitignore)?;
        if !content.lines().any(|line| line.trim() == "/target") {
            let separator = if content.is_empty() || content.ends_with('\n') {
                ""
            } else {
                "\n"
            };
            fs::write(&gitignore, format!("{}{}/target\n", content, separator))?;
        }
    } else if write_new(&gitignore, "/target\n")? {
        created.push(gitignore);
    }

    Ok(created)
}

fn cargo_manifest(project: &NormalizedProject, edition: &str) -> String {
    format!(
        r#"[package]
name = "{}"
version = "0.1.0"
edition = "{}"

[dependencies]
"#,
        project.project_name, edition
    )
}

fn main_source() -> String {
    r#"fn main() {
    println!("Hello, world!");
}
"#
    .to_string()
}

fn lib_source(crate_name: &str) -> String {
    format!(
        r#"pub fn {0}() -> &'static str {{
    "{0}"
}}

#[cfg(test)]
mod tests {{
    use super::*;

    #[test]
    fn it_works() {{
        assert_eq!({0}(), "{0}");
    }}
}}
"#,
        crate_name
    )
}

fn write_project_files(dir: &Path, project: &NormalizedProject, edition: &str) -> Result<()> {
    write_new(&dir.join("Cargo.toml"), &cargo_manifest(project, edition))?;

    match project.kind {
        PackageKind::Application => write_new(&dir.join("src").join("main.rs"), &main_source())?,
        PackageKind::Library => write_new(
            &dir.join("src").join("lib.rs"),
            &lib_source(&project.crate_name),
        )?,
    };

    let config = ProjectConfig {
        name: project.project_name.clone(),
        kind: project.kind,
        package: None,
        tags: project.tags.clone(),
        targets: ProjectConfig::default_targets(project.kind),
    };
    write_new(&dir.join(PROJECT_CONFIG_FILE), &config.to_toml_string()?)?;
    Ok(())
}

/// Creates a new project in `workspace` and registers it as a cargo member.
///
/// The workspace manifest is checked before anything is written. If a later
/// step fails, the new project directory is removed again.
pub fn generate_project(
    workspace: &Workspace,
    options: &NewProjectOptions,
) -> Result<NormalizedProject> {
    let project = normalize_project(options, &workspace.config().layout)?;
    let dir = workspace.root().join(&project.project_root);
    if dir.exists() {
        return Err(Error::ProjectExists(dir));
    }

    let mut manifest = WorkspaceManifest::load(workspace.manifest_path())?;
    let added = manifest.add_member(&project.member_path())?;

    let written = write_project_files(&dir, &project, &options.edition).and_then(|()| {
        if added {
            manifest.save()?;
            info!(member = %project.member_path(), "added workspace member");
        }
        Ok(())
    });
    if let Err(e) = written {
        warn!(dir = %dir.display(), error = %e, "removing partially generated project");
        if let Err(cleanup) = fs::remove_dir_all(&dir) {
            warn!(dir = %dir.display(), error = %cleanup, "failed to remove project directory");
        }
        return Err(e);
    }

    info!(
        project = %project.project_name,
        kind = project.kind.as_str(),
        root = %project.project_root.display(),
        "generated project"
    );
    Ok(project)
}
