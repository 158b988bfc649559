//! Executor labels and the cargo subcommands they dispatch to.

use serde::{Deserialize, Serialize};

/// Build actions cargokit knows how to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Executor {
    Build,
    Test,
    Lint,
    Run,
    Nextest,
}

impl Executor {
    pub const ALL: [Executor; 5] = [
        Executor::Build,
        Executor::Test,
        Executor::Lint,
        Executor::Run,
        Executor::Nextest,
    ];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Executor::Build => "build",
            Executor::Test => "test",
            Executor::Lint => "lint",
            Executor::Run => "run",
            Executor::Nextest => "nextest",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == label)
    }

    pub fn subcommand(&self) -> &'static [&'static str] {
        match self {
            Executor::Build => &["build"],
            Executor::Test => &["test"],
            Executor::Lint => &["clippy"],
            Executor::Run => &["run"],
            Executor::Nextest => &["nextest", "run"],
        }
    }
}

/// Resolves an executor label to its cargo subcommand tokens.
///
/// Unknown labels resolve to an empty slice.
pub fn resolve_subcommand(label: &str) -> &'static [&'static str] {
    Executor::from_str(label)
        .map(|executor| executor.subcommand())
        .unwrap_or(&[])
}

/// Joins a subcommand and an argument vector into one cargo command line.
///
/// A leading `+toolchain` token stays in front of the subcommand, since
/// rustup only honours it as the first argument.
pub fn compose(subcommand: &[&str], args: &[String]) -> Vec<String> {
    let mut command = Vec::with_capacity(subcommand.len() + args.len());
    let rest = match args.first() {
        Some(first) if first.starts_with('+') => {
            command.push(first.clone());
            &args[1..]
        }
        _ => args,
    };
    command.extend(subcommand.iter().map(|s| s.to_string()));
    command.extend(rest.iter().cloned());
    command
}
