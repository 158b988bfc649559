//! TOML configuration for the workspace (`cargokit.toml`) and its projects
//! (`project.toml`).

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::args::PackageKind;
use crate::error::{Error, Result};
use crate::options::{CargoOptions, OptionsPolicy};
use crate::subcommand::Executor;

pub const WORKSPACE_CONFIG_FILE: &str = "cargokit.toml";
pub const PROJECT_CONFIG_FILE: &str = "project.toml";

fn default_apps_dir() -> String {
    "apps".to_string()
}

fn default_libs_dir() -> String {
    "libs".to_string()
}

fn default_cargo() -> String {
    "cargo".to_string()
}

/// Where generated projects go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceLayout {
    #[serde(default = "default_apps_dir")]
    pub apps_dir: String,
    #[serde(default = "default_libs_dir")]
    pub libs_dir: String,
}

impl Default for WorkspaceLayout {
    fn default() -> Self {
        Self {
            apps_dir: default_apps_dir(),
            libs_dir: default_libs_dir(),
        }
    }
}

impl WorkspaceLayout {
    pub fn dir_for(&self, kind: PackageKind) -> &str {
        match kind {
            PackageKind::Application => &self.apps_dir,
            PackageKind::Library => &self.libs_dir,
        }
    }
}

/// The `[workspace]` table of `cargokit.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(flatten)]
    pub layout: WorkspaceLayout,
    /// Program used for every cargo invocation.
    #[serde(default = "default_cargo")]
    pub cargo: String,
    /// Reject unrecognized target option keys instead of ignoring them.
    #[serde(default)]
    pub strict_options: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            layout: WorkspaceLayout::default(),
            cargo: default_cargo(),
            strict_options: false,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct WorkspaceFile {
    #[serde(default)]
    workspace: WorkspaceConfig,
}

impl WorkspaceConfig {
    pub fn options_policy(&self) -> OptionsPolicy {
        if self.strict_options {
            OptionsPolicy::Strict
        } else {
            OptionsPolicy::Lenient
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: WorkspaceFile = toml::from_str(&content).map_err(|error| Error::Toml {
            error,
            context: path.display().to_string(),
        })?;
        Ok(file.workspace)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        let file = WorkspaceFile {
            workspace: self.clone(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }
}

/// A named target of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Executor label, e.g. `build` or `lint`.
    pub executor: String,
    #[serde(default, skip_serializing_if = "toml::Table::is_empty")]
    pub options: toml::Table,
}

impl TargetConfig {
    pub fn new(executor: Executor) -> Self {
        Self {
            executor: executor.as_str().to_string(),
            options: toml::Table::new(),
        }
    }

    pub fn cargo_options(&self, policy: OptionsPolicy) -> Result<CargoOptions> {
        CargoOptions::from_table(&self.options, policy)
    }
}

/// Project configuration as defined in `project.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub kind: PackageKind,
    /// Cargo package name when it differs from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub targets: IndexMap<String, TargetConfig>,
}

impl ProjectConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|error| Error::Toml {
            error,
            context: path.display().to_string(),
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn package_name(&self) -> &str {
        self.package.as_deref().unwrap_or(&self.name)
    }

    pub fn target(&self, name: &str) -> Result<&TargetConfig> {
        self.targets.get(name).ok_or_else(|| Error::TargetNotFound {
            project: self.name.clone(),
            target: name.to_string(),
            available: self
                .targets
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Default targets for a freshly generated project.
    pub fn default_targets(kind: PackageKind) -> IndexMap<String, TargetConfig> {
        let mut executors = vec![Executor::Build, Executor::Test, Executor::Lint];
        if kind == PackageKind::Application {
            executors.push(Executor::Run);
        }
        executors
            .into_iter()
            .map(|e| (e.as_str().to_string(), TargetConfig::new(e)))
            .collect()
    }
}
