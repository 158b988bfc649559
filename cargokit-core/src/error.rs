//! Error types and result aliases.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error in {context}: {error}")]
    Toml {
        error: toml::de::Error,
        context: String,
    },

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Manifest error in {}: {message}", .path.display())]
    Manifest { path: PathBuf, message: String },

    #[error("Package name is required to build cargo arguments")]
    MissingPackageName,

    #[error("Unrecognized option '{key}'{}", suggestion_suffix(.suggestion))]
    UnknownOption {
        key: String,
        suggestion: Option<String>,
    },

    #[error("Invalid value for option '{key}': {message}")]
    InvalidOption { key: String, message: String },

    #[error("Unknown executor '{label}'. Supported executors: build, test, lint, run, nextest")]
    UnknownExecutor { label: String },

    #[error("Invalid project name: {0}")]
    InvalidProjectName(String),

    #[error("Project not found: {name}. Available projects: {available}")]
    ProjectNotFound { name: String, available: String },

    #[error("Target '{target}' not found for project {project}. Available targets: {available}")]
    TargetNotFound {
        project: String,
        target: String,
        available: String,
    },

    #[error("Project directory already exists: {}", .0.display())]
    ProjectExists(PathBuf),

    #[error("No cargokit workspace found from {}. Run 'cargokit init' first.", .0.display())]
    WorkspaceNotFound(PathBuf),

    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' {}", exit_description(.code))]
    ProcessFailed { program: String, code: Option<i32> },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(known) => format!(". Did you mean '{}'?", known),
        None => String::new(),
    }
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

impl Error {
    /// Exit code of a failed child process, if there is one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::ProcessFailed { code, .. } => *code,
            _ => None,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::Toml {
            error,
            context: "project.toml".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
