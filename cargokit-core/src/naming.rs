//! Project name normalization.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::args::PackageKind;
use crate::config::WorkspaceLayout;
use crate::error::{Error, Result};

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_\-]+").expect("valid regex"));
static VALID_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_\- ]*$").expect("valid regex"));

/// Strict and reserved keywords; cargo refuses them as package names.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

fn words(name: &str) -> String {
    let split = CAMEL_BOUNDARY.replace_all(name.trim(), "$1 $2");
    SEPARATORS
        .replace_all(&split, " ")
        .trim()
        .to_lowercase()
}

/// `myCoolLib` / `my_cool lib` → `my-cool-lib`.
pub fn to_kebab_case(name: &str) -> String {
    words(name).replace(' ', "-")
}

/// `my-cool-lib` → `my_cool_lib`, suitable as a crate identifier.
pub fn to_snake_case(name: &str) -> String {
    words(name).replace(' ', "_")
}

pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidProjectName(
            "name cannot be empty".to_string(),
        ));
    }
    if !VALID_NAME.is_match(name.trim()) {
        return Err(Error::InvalidProjectName(format!(
            "'{}' must start with a letter and contain only letters, digits, '-', '_' or spaces",
            name
        )));
    }
    Ok(())
}

/// Options for creating a new project.
#[derive(Debug, Clone)]
pub struct NewProjectOptions {
    pub name: String,
    pub kind: PackageKind,
    /// Optional parent directory under the apps/libs directory.
    pub directory: Option<String>,
    pub tags: Vec<String>,
    pub edition: String,
}

impl NewProjectOptions {
    pub fn new(name: impl Into<String>, kind: PackageKind) -> Self {
        Self {
            name: name.into(),
            kind,
            directory: None,
            tags: Vec::new(),
            edition: "2021".to_string(),
        }
    }
}

/// [`NewProjectOptions`] after name munging and layout lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedProject {
    /// Kebab-case name, also used as the cargo package name.
    pub project_name: String,
    /// Project directory relative to the workspace root.
    pub project_root: PathBuf,
    /// Snake-case crate identifier.
    pub crate_name: String,
    pub kind: PackageKind,
    pub tags: Vec<String>,
}

impl NormalizedProject {
    /// `project_root` with forward slashes, as written into `Cargo.toml`.
    pub fn member_path(&self) -> String {
        path_to_member(&self.project_root)
    }
}

pub fn path_to_member(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn normalize_project(
    options: &NewProjectOptions,
    layout: &WorkspaceLayout,
) -> Result<NormalizedProject> {
    validate_project_name(&options.name)?;
    let name = to_kebab_case(&options.name);

    let raw_segments: Vec<&str> = options
        .directory
        .as_deref()
        .map(|dir| {
            dir.split(['/', '\\'])
                .filter(|s| !s.trim().is_empty())
                .collect()
        })
        .unwrap_or_default();

    if let Some(bad) = raw_segments.iter().find(|s| !VALID_NAME.is_match(s.trim())) {
        return Err(Error::InvalidProjectName(format!(
            "directory segment '{}' must start with a letter and stay inside the workspace",
            bad
        )));
    }
    let segments: Vec<String> = raw_segments.into_iter().map(to_kebab_case).collect();

    let project_name = segments
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(name.as_str()))
        .collect::<Vec<_>>()
        .join("-");

    let crate_name = to_snake_case(&project_name);
    if RUST_KEYWORDS.contains(&crate_name.as_str()) {
        return Err(Error::InvalidProjectName(format!(
            "'{}' is a Rust keyword and cannot name a crate",
            crate_name
        )));
    }

    let mut project_root = PathBuf::from(layout.dir_for(options.kind));
    for segment in &segments {
        project_root.push(segment);
    }
    project_root.push(&name);

    let tags = options
        .tags
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    Ok(NormalizedProject {
        crate_name,
        project_name,
        project_root,
        kind: options.kind,
        tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_splits_camel_case() {
        assert_eq!(words("myHTTPServer"), "my httpserver");
        assert_eq!(words("  fooBar  "), "foo bar");
    }
}
