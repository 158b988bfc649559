//! Cargo dispatch commands.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use cargokit_core::{CargoOptions, Plan, ProcessRunner, TargetExecutor};

use crate::formatting::{format_duration, print_error, print_success};

use super::open_workspace;

/// What to run for a project.
pub enum Target {
    /// A target declared in `project.toml`.
    Configured(String),
    /// An executor label run directly.
    Action(String),
}

fn print_plan_json(plan: &Plan) -> Result<()> {
    let data = serde_json::json!({
        "program": plan.invocation.program,
        "args": plan.invocation.args,
        "cwd": plan.invocation.cwd,
        "options": plan.options,
        "warnings": plan.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

pub fn cmd_exec(
    start: PathBuf,
    target: Target,
    project: String,
    overrides: CargoOptions,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let workspace = open_workspace(&start)?;
    let executor = TargetExecutor::new(&workspace);

    let plan = match &target {
        Target::Configured(name) => executor.plan_target(&project, name, overrides)?,
        Target::Action(action) => executor.plan_action(&project, action, overrides)?,
    };

    if dry_run {
        if json {
            print_plan_json(&plan)?;
        } else {
            println!("{}", plan.invocation);
        }
        return Ok(());
    }

    let start_time = Instant::now();
    match executor.run(&plan, &ProcessRunner) {
        Ok(()) => {
            print_success(&format!(
                "{} finished in {}",
                plan.invocation,
                format_duration(start_time.elapsed().as_secs_f64())
            ));
            Ok(())
        }
        Err(err) => match err.exit_code() {
            Some(code) => {
                print_error(&err.to_string());
                std::process::exit(code);
            }
            None => Err(err.into()),
        },
    }
}
