mod commands;
mod formatting;

use std::path::PathBuf;

use anyhow::Result;
use cargokit_core::{CargoOptions, PackageKind};
use clap::{Args, Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "cargokit")]
#[command(about = "Drive Cargo from monorepo project targets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory inside the workspace to start discovery from
    #[arg(long, global = true, default_value = ".")]
    workspace: PathBuf,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long, global = true, action)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up a cargokit workspace
    Init,
    /// Generate a new application or library
    New {
        name: String,
        #[arg(long, value_enum, default_value = "lib")]
        kind: KindArg,
        #[arg(long)]
        directory: Option<String>,
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        #[arg(long, default_value = "2021")]
        edition: String,
    },
    /// cargo build
    Build(ActionArgs),
    /// cargo test
    Test(ActionArgs),
    /// cargo clippy
    Lint(ActionArgs),
    /// cargo run
    Run(ActionArgs),
    /// cargo nextest run
    Nextest(ActionArgs),
    /// Run a target declared in project.toml
    Exec {
        project: String,
        #[arg(value_name = "TARGET")]
        target_name: String,
        #[command(flatten)]
        run: RunArgs,
    },
    /// List projects in the workspace
    List {
        #[arg(long, action)]
        json: bool,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum KindArg {
    App,
    Lib,
}

impl From<KindArg> for PackageKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::App => PackageKind::Application,
            KindArg::Lib => PackageKind::Library,
        }
    }
}

#[derive(Args)]
struct ActionArgs {
    project: String,
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args)]
struct RunArgs {
    #[command(flatten)]
    cargo: CargoArgs,
    /// Print the cargo command instead of running it
    #[arg(long, action)]
    dry_run: bool,
    /// With --dry-run, print the plan as JSON
    #[arg(long, action)]
    json: bool,
}

#[derive(Args)]
struct CargoArgs {
    #[arg(long)]
    toolchain: Option<String>,
    #[arg(long)]
    features: Option<String>,
    #[arg(long, action)]
    all_features: bool,
    #[arg(long, action)]
    no_default_features: bool,
    #[arg(long)]
    target: Option<String>,
    #[arg(short, long, action)]
    release: bool,
    #[arg(long)]
    target_dir: Option<String>,
    /// Copy final artifacts here (switches to the nightly toolchain)
    #[arg(long)]
    out_dir: Option<String>,
    #[arg(long, action)]
    cargo_verbose: bool,
    #[arg(long, action)]
    very_verbose: bool,
    #[arg(long, action)]
    cargo_quiet: bool,
    #[arg(long)]
    message_format: Option<String>,
    #[arg(long, action)]
    locked: bool,
    #[arg(long, action)]
    frozen: bool,
    #[arg(long, action)]
    offline: bool,
    /// Re-run on file changes through cargo-watch
    #[arg(long, action)]
    watch: bool,
    /// Arguments passed after `--`
    #[arg(last = true)]
    args: Vec<String>,
}

impl From<CargoArgs> for CargoOptions {
    fn from(args: CargoArgs) -> Self {
        let features = if args.all_features {
            Some(cargokit_core::options::ALL_FEATURES.to_string())
        } else {
            args.features
        };
        CargoOptions {
            toolchain: args.toolchain,
            features,
            no_default_features: args.no_default_features,
            target: args.target,
            release: args.release,
            target_dir: args.target_dir,
            out_dir: args.out_dir,
            verbose: args.cargo_verbose,
            very_verbose: args.very_verbose,
            quiet: args.cargo_quiet,
            message_format: args.message_format,
            locked: args.locked,
            frozen: args.frozen,
            offline: args.offline,
            watch: args.watch,
            args: args.args,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(cli.workspace)?,
        Commands::New {
            name,
            kind,
            directory,
            tags,
            edition,
        } => commands::cmd_new(cli.workspace, name, kind.into(), directory, tags, edition)?,
        Commands::Build(action) => run_action(cli.workspace, "build", action)?,
        Commands::Test(action) => run_action(cli.workspace, "test", action)?,
        Commands::Lint(action) => run_action(cli.workspace, "lint", action)?,
        Commands::Run(action) => run_action(cli.workspace, "run", action)?,
        Commands::Nextest(action) => run_action(cli.workspace, "nextest", action)?,
        Commands::Exec {
            project,
            target_name,
            run,
        } => commands::cmd_exec(
            cli.workspace,
            commands::Target::Configured(target_name),
            project,
            run.cargo.into(),
            run.dry_run,
            run.json,
        )?,
        Commands::List { json } => commands::cmd_list(cli.workspace, json)?,
    }

    Ok(())
}

fn run_action(workspace: PathBuf, action: &str, args: ActionArgs) -> Result<()> {
    commands::cmd_exec(
        workspace,
        commands::Target::Action(action.to_string()),
        args.project,
        args.run.cargo.into(),
        args.run.dry_run,
        args.run.json,
    )
}
