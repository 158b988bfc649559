//! Translation of [`CargoOptions`] into a cargo argument vector.
//!
//! The translation is an ordered pipeline of append steps ([`PIPELINE`]).
//! Each step only appends (the out-dir step may also rewrite the leading
//! toolchain token), so adding a step at the end never moves existing tokens.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::options::{CargoOptions, ALL_FEATURES};

/// Toolchain required by `--out-dir`.
pub const NIGHTLY: &str = "nightly";

/// Kind of package a project declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    Application,
    Library,
}

impl PackageKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageKind::Application => "application",
            PackageKind::Library => "library",
        }
    }

    /// Parses a kind, accepting the short forms `app` and `lib`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "application" | "app" | "bin" => Some(PackageKind::Application),
            "library" | "lib" => Some(PackageKind::Library),
            _ => None,
        }
    }
}

/// What the argument builder needs to know about the current invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    pub package_name: Option<String>,
    pub action: String,
    pub kind: PackageKind,
}

impl ExecutionContext {
    pub fn new(package_name: impl Into<String>, action: impl Into<String>, kind: PackageKind) -> Self {
        Self {
            package_name: Some(package_name.into()),
            action: action.into(),
            kind,
        }
    }

    fn require_package_name(&self) -> Result<&str> {
        self.package_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or(Error::MissingPackageName)
    }
}

/// A toolchain token that was replaced to satisfy `--out-dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainOverride {
    pub requested: String,
    pub applied: String,
}

impl std::fmt::Display for ToolchainOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "--out-dir requires the {} toolchain; overriding toolchain '{}'",
            self.applied, self.requested
        )
    }
}

/// Output of [`build_args`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgVector {
    pub tokens: Vec<String>,
    pub warnings: Vec<ToolchainOverride>,
}

impl ArgVector {
    fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// The leading `+toolchain` token, if any.
    pub fn toolchain(&self) -> Option<&str> {
        self.tokens
            .first()
            .and_then(|token| token.strip_prefix('+'))
    }
}

type Step = fn(&CargoOptions, &str, &ExecutionContext, &mut ArgVector);

/// Append steps in the order they run.
pub const PIPELINE: &[(&str, Step)] = &[
    ("toolchain", toolchain),
    ("selection", selection),
    ("features", features),
    ("no-default-features", no_default_features),
    ("target", target),
    ("release", release),
    ("target-dir", target_dir),
    ("out-dir", out_dir),
    ("verbosity", verbosity),
    ("message-format", message_format),
    ("lockfile", lockfile),
    ("passthrough", passthrough),
];

/// Builds the cargo argument vector for `options` in `ctx`.
///
/// The subcommand is not included; see [`crate::subcommand::compose`].
///
/// # Errors
///
/// Returns [`Error::MissingPackageName`] before producing any token when the
/// context has no package name.
pub fn build_args(options: &CargoOptions, ctx: &ExecutionContext) -> Result<ArgVector> {
    let package_name = ctx.require_package_name()?;
    let mut out = ArgVector::default();

    for (_, step) in PIPELINE {
        step(options, package_name, ctx, &mut out);
    }

    for warning in &out.warnings {
        warn!(
            requested = %warning.requested,
            applied = %warning.applied,
            "{}",
            warning
        );
    }

    Ok(out)
}

fn toolchain(options: &CargoOptions, _: &str, _: &ExecutionContext, out: &mut ArgVector) {
    if let Some(toolchain) = &options.toolchain {
        let name = toolchain.strip_prefix('+').unwrap_or(toolchain);
        out.tokens.insert(0, format!("+{}", name));
    }
}

fn selection(_: &CargoOptions, package_name: &str, ctx: &ExecutionContext, out: &mut ArgVector) {
    if ctx.action == "build" && ctx.kind == PackageKind::Application {
        out.push("--bin");
    } else {
        out.push("-p");
    }
    out.push(package_name);
}

fn features(options: &CargoOptions, _: &str, _: &ExecutionContext, out: &mut ArgVector) {
    match options.features.as_deref() {
        Some(ALL_FEATURES) => out.push("--all-features"),
        Some(features) => {
            out.push("--features");
            out.push(features);
        }
        None => {}
    }
}

fn no_default_features(options: &CargoOptions, _: &str, _: &ExecutionContext, out: &mut ArgVector) {
    if options.no_default_features {
        out.push("--no-default-features");
    }
}

fn target(options: &CargoOptions, _: &str, _: &ExecutionContext, out: &mut ArgVector) {
    if let Some(triple) = &options.target {
        out.push("--target");
        out.push(triple);
    }
}

fn release(options: &CargoOptions, _: &str, _: &ExecutionContext, out: &mut ArgVector) {
    if options.release {
        out.push("--release");
    }
}

fn target_dir(options: &CargoOptions, _: &str, _: &ExecutionContext, out: &mut ArgVector) {
    if let Some(dir) = &options.target_dir {
        out.push("--target-dir");
        out.push(dir);
    }
}

fn out_dir(options: &CargoOptions, _: &str, _: &ExecutionContext, out: &mut ArgVector) {
    let Some(dir) = &options.out_dir else {
        return;
    };

    let nightly = format!("+{}", NIGHTLY);
    match out.toolchain().map(str::to_string) {
        None => out.tokens.insert(0, nightly),
        Some(current) if current == NIGHTLY => {}
        Some(current) => {
            out.warnings.push(ToolchainOverride {
                requested: current,
                applied: NIGHTLY.to_string(),
            });
            out.tokens[0] = nightly;
        }
    }

    out.push("-Zunstable-options");
    out.push("--out-dir");
    out.push(dir);
}

fn verbosity(options: &CargoOptions, _: &str, _: &ExecutionContext, out: &mut ArgVector) {
    if options.verbose {
        out.push("-v");
    }
    if options.very_verbose {
        out.push("-vv");
    }
    if options.quiet {
        out.push("-q");
    }
}

fn message_format(options: &CargoOptions, _: &str, _: &ExecutionContext, out: &mut ArgVector) {
    if let Some(format) = &options.message_format {
        out.push("--message-format");
        out.push(format);
    }
}

fn lockfile(options: &CargoOptions, _: &str, _: &ExecutionContext, out: &mut ArgVector) {
    if options.locked {
        out.push("--locked");
    }
    if options.frozen {
        out.push("--frozen");
    }
    if options.offline {
        out.push("--offline");
    }
}

fn passthrough(options: &CargoOptions, _: &str, _: &ExecutionContext, out: &mut ArgVector) {
    if !options.args.is_empty() {
        out.push("--");
        out.tokens.extend(options.args.iter().cloned());
    }
}
