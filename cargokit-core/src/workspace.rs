//! Workspace discovery and project scanning.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::{ProjectConfig, WorkspaceConfig, PROJECT_CONFIG_FILE, WORKSPACE_CONFIG_FILE};
use crate::error::{Error, Result};

/// A project found on disk.
#[derive(Debug, Clone)]
pub struct Project {
    pub config: ProjectConfig,
    /// Directory holding `project.toml`, relative to the workspace root.
    pub root: PathBuf,
}

impl Project {
    pub fn name(&self) -> &str {
        &self.config.name
    }
}

/// A cargokit workspace rooted at the directory holding `cargokit.toml`.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    config: WorkspaceConfig,
}

fn is_cargo_workspace(dir: &Path) -> bool {
    let manifest = dir.join("Cargo.toml");
    std::fs::read_to_string(manifest)
        .ok()
        .and_then(|content| content.parse::<toml::Table>().ok())
        .is_some_and(|table| table.contains_key("workspace"))
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name == "target" || name.starts_with('.'))
}

impl Workspace {
    pub fn new(root: impl AsRef<Path>, config: WorkspaceConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    /// Walks up from `start` to the nearest workspace root.
    ///
    /// A directory with `cargokit.toml` wins; otherwise the first directory
    /// whose `Cargo.toml` has a `[workspace]` table is used with default
    /// configuration.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self> {
        let start = start.as_ref();
        let start_abs: PathBuf = if start.is_absolute() {
            start.components().collect()
        } else {
            std::env::current_dir()?.join(start).components().collect()
        };

        let mut cargo_root = None;
        for dir in start_abs.ancestors() {
            let config_path = dir.join(WORKSPACE_CONFIG_FILE);
            if config_path.is_file() {
                debug!(root = %dir.display(), "found workspace config");
                return Ok(Self::new(dir, WorkspaceConfig::load(&config_path)?));
            }
            if cargo_root.is_none() && is_cargo_workspace(dir) {
                cargo_root = Some(dir.to_path_buf());
            }
        }

        cargo_root
            .map(|root| Self::new(root, WorkspaceConfig::default()))
            .ok_or_else(|| Error::WorkspaceNotFound(start.to_path_buf()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("Cargo.toml")
    }

    /// Finds every `project.toml` under the root, sorted by project name.
    pub fn scan_projects(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_skipped(e))
        {
            let entry = entry.map_err(|e| Error::Io(e.into()))?;
            if !entry.file_type().is_file() || entry.file_name() != PROJECT_CONFIG_FILE {
                continue;
            }

            let config = ProjectConfig::load(entry.path())?;
            let dir = entry.path().parent().unwrap_or(&self.root);
            let root = dir.strip_prefix(&self.root).unwrap_or(dir).to_path_buf();
            debug!(project = %config.name, root = %root.display(), "found project");
            projects.push(Project { config, root });
        }

        projects.sort_by(|a, b| a.config.name.cmp(&b.config.name));
        Ok(projects)
    }

    pub fn project(&self, name: &str) -> Result<Project> {
        let projects = self.scan_projects()?;
        let available = projects
            .iter()
            .map(|p| p.name().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        projects
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| Error::ProjectNotFound {
                name: name.to_string(),
                available,
            })
    }
}
