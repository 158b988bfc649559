//! Turning a project target into a cargo invocation and running it.

use tracing::debug;

use crate::args::{build_args, ExecutionContext, ToolchainOverride};
use crate::error::{Error, Result};
use crate::options::CargoOptions;
use crate::process::{CommandRunner, Invocation};
use crate::subcommand::{compose, resolve_subcommand};
use crate::watch::WatchCommand;
use crate::workspace::{Project, Workspace};

/// A planned cargo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub invocation: Invocation,
    pub options: CargoOptions,
    pub warnings: Vec<ToolchainOverride>,
}

pub struct TargetExecutor<'a> {
    workspace: &'a Workspace,
}

impl<'a> TargetExecutor<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    /// Plans the configured target `target` of `project_name`, with
    /// `overrides` layered over the target's own options.
    pub fn plan_target(
        &self,
        project_name: &str,
        target: &str,
        overrides: CargoOptions,
    ) -> Result<Plan> {
        let project = self.workspace.project(project_name)?;
        let target_config = project.config.target(target)?;
        let options = target_config
            .cargo_options(self.workspace.config().options_policy())?
            .merge(overrides);
        self.plan(&project, target, &target_config.executor, options)
    }

    /// Plans an ad-hoc action such as `build` or `lint` for `project_name`.
    ///
    /// When the project declares a target of the same name its options are
    /// used as the base.
    pub fn plan_action(
        &self,
        project_name: &str,
        action: &str,
        overrides: CargoOptions,
    ) -> Result<Plan> {
        let project = self.workspace.project(project_name)?;
        let base = match project.config.targets.get(action) {
            Some(target) => target.cargo_options(self.workspace.config().options_policy())?,
            None => CargoOptions::default(),
        };
        self.plan(&project, action, action, base.merge(overrides))
    }

    fn plan(
        &self,
        project: &Project,
        target: &str,
        executor: &str,
        options: CargoOptions,
    ) -> Result<Plan> {
        let subcommand = resolve_subcommand(executor);
        if subcommand.is_empty() {
            return Err(Error::UnknownExecutor {
                label: executor.to_string(),
            });
        }

        let ctx = ExecutionContext::new(project.config.package_name(), target, project.config.kind);
        let args = build_args(&options, &ctx)?;
        let command = compose(subcommand, &args.tokens);

        let program = self.workspace.config().cargo.clone();
        let argv = if options.watch {
            WatchCommand::new(program.clone(), command).argv()
        } else {
            command
        };

        let invocation = Invocation::new(program, argv, self.workspace.root());
        debug!(project = %project.name(), target_name = %target, "planned {}", invocation);

        Ok(Plan {
            invocation,
            options,
            warnings: args.warnings,
        })
    }

    pub fn run(&self, plan: &Plan, runner: &dyn CommandRunner) -> Result<()> {
        runner.run(&plan.invocation)
    }

    pub fn run_target(
        &self,
        project_name: &str,
        target: &str,
        overrides: CargoOptions,
        runner: &dyn CommandRunner,
    ) -> Result<()> {
        let plan = self.plan_target(project_name, target, overrides)?;
        self.run(&plan, runner)
    }
}
