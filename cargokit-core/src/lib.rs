//! Core library for driving Cargo from a monorepo.

pub mod args;
pub mod config;
pub mod error;
pub mod executor;
pub mod generator;
pub mod manifest;
pub mod naming;
pub mod options;
pub mod process;
pub mod subcommand;
pub mod watch;
pub mod workspace;

pub use args::{build_args, ArgVector, ExecutionContext, PackageKind, ToolchainOverride};
pub use config::{ProjectConfig, TargetConfig, WorkspaceConfig, WorkspaceLayout};
pub use error::{Error, Result};
pub use executor::{Plan, TargetExecutor};
pub use generator::{generate_project, init_workspace};
pub use manifest::{append_member, WorkspaceManifest};
pub use naming::{NewProjectOptions, NormalizedProject};
pub use options::{CargoOptions, OptionsPolicy};
pub use process::{CommandRunner, Invocation, ProcessRunner};
pub use subcommand::{resolve_subcommand, Executor};
pub use watch::{wrap_watch, WatchCommand};
pub use workspace::{Project, Workspace};
