use std::fs;

use cargokit_core::args::PackageKind;
use cargokit_core::config::ProjectConfig;
use cargokit_core::error::Error;
use cargokit_core::generator::{generate_project, init_workspace};
use cargokit_core::manifest::WorkspaceManifest;
use cargokit_core::naming::NewProjectOptions;
use cargokit_core::workspace::Workspace;
use tempfile::TempDir;

#[test]
fn test_init_workspace_creates_layout() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let created = init_workspace(root).unwrap();
    assert!(created.contains(&root.join("Cargo.toml")));
    assert!(created.contains(&root.join("cargokit.toml")));
    assert!(root.join("apps").is_dir());
    assert!(root.join("libs").is_dir());
    assert_eq!(fs::read_to_string(root.join(".gitignore")).unwrap(), "/target\n");

    let manifest = WorkspaceManifest::load(root.join("Cargo.toml")).unwrap();
    assert!(manifest.members().is_empty());
}

#[test]
fn test_init_workspace_keeps_existing_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(".gitignore"), "node_modules").unwrap();
    fs::write(root.join("Cargo.toml"), "[workspace]\nmembers = [\"tools\"]\n").unwrap();

    let created = init_workspace(root).unwrap();
    assert!(!created.contains(&root.join("Cargo.toml")));
    assert_eq!(
        fs::read_to_string(root.join(".gitignore")).unwrap(),
        "node_modules\n/target\n"
    );
    assert_eq!(
        WorkspaceManifest::load(root.join("Cargo.toml")).unwrap().members(),
        vec!["tools"]
    );

    init_workspace(root).unwrap();
    assert_eq!(
        fs::read_to_string(root.join(".gitignore")).unwrap(),
        "node_modules\n/target\n"
    );
}

#[test]
fn test_generate_library() {
    let temp_dir = TempDir::new().unwrap();
    init_workspace(temp_dir.path()).unwrap();
    let workspace = Workspace::discover(temp_dir.path()).unwrap();

    let mut options = NewProjectOptions::new("sharedUtils", PackageKind::Library);
    options.tags = vec!["scope:shared".to_string()];
    let project = generate_project(&workspace, &options).unwrap();

    let dir = temp_dir.path().join("libs").join("shared-utils");
    let cargo_toml = fs::read_to_string(dir.join("Cargo.toml")).unwrap();
    assert!(cargo_toml.contains("name = \"shared-utils\""));
    assert!(cargo_toml.contains("edition = \"2021\""));

    let lib_rs = fs::read_to_string(dir.join("src").join("lib.rs")).unwrap();
    assert!(lib_rs.contains("pub fn shared_utils()"));
    assert!(!dir.join("src").join("main.rs").exists());

    let config = ProjectConfig::load(&dir.join("project.toml")).unwrap();
    assert_eq!(config.name, "shared-utils");
    assert_eq!(config.kind, PackageKind::Library);
    assert_eq!(config.tags, vec!["scope:shared".to_string()]);
    let targets: Vec<&str> = config.targets.keys().map(String::as_str).collect();
    assert_eq!(targets, vec!["build", "test", "lint"]);

    let manifest = WorkspaceManifest::load(workspace.manifest_path()).unwrap();
    assert_eq!(manifest.members(), vec![project.member_path()]);
    assert_eq!(project.member_path(), "libs/shared-utils");
}

#[test]
fn test_generate_application_has_run_target() {
    let temp_dir = TempDir::new().unwrap();
    init_workspace(temp_dir.path()).unwrap();
    let workspace = Workspace::discover(temp_dir.path()).unwrap();

    let options = NewProjectOptions::new("server", PackageKind::Application);
    generate_project(&workspace, &options).unwrap();

    let dir = temp_dir.path().join("apps").join("server");
    assert!(dir.join("src").join("main.rs").is_file());

    let config = ProjectConfig::load(&dir.join("project.toml")).unwrap();
    assert_eq!(config.kind, PackageKind::Application);
    assert!(config.targets.contains_key("run"));
    assert_eq!(config.target("lint").unwrap().executor, "lint");
}

#[test]
fn test_generate_refuses_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    init_workspace(temp_dir.path()).unwrap();
    let workspace = Workspace::discover(temp_dir.path()).unwrap();

    let options = NewProjectOptions::new("core", PackageKind::Library);
    generate_project(&workspace, &options).unwrap();

    assert!(matches!(
        generate_project(&workspace, &options),
        Err(Error::ProjectExists(_))
    ));
    let manifest = WorkspaceManifest::load(workspace.manifest_path()).unwrap();
    assert_eq!(manifest.members(), vec!["libs/core"]);
}

#[test]
fn test_generate_leaves_nothing_behind_when_manifest_is_invalid() {
    let temp_dir = TempDir::new().unwrap();
    init_workspace(temp_dir.path()).unwrap();
    let manifest_path = temp_dir.path().join("Cargo.toml");
    fs::write(&manifest_path, "[workspace]\nmembers = \"oops\"\n").unwrap();
    let workspace = Workspace::discover(temp_dir.path()).unwrap();

    let options = NewProjectOptions::new("core", PackageKind::Library);
    assert!(matches!(
        generate_project(&workspace, &options),
        Err(Error::Manifest { .. })
    ));
    assert!(!temp_dir.path().join("libs").join("core").exists());

    fs::write(&manifest_path, "[workspace]\nmembers = []\n").unwrap();
    generate_project(&workspace, &options).unwrap();
    assert!(temp_dir.path().join("libs").join("core").join("project.toml").is_file());
    assert_eq!(
        WorkspaceManifest::load(&manifest_path).unwrap().members(),
        vec!["libs/core"]
    );
}

#[test]
fn test_generate_rejects_keyword_library_name() {
    let temp_dir = TempDir::new().unwrap();
    init_workspace(temp_dir.path()).unwrap();
    let workspace = Workspace::discover(temp_dir.path()).unwrap();

    let options = NewProjectOptions::new("match", PackageKind::Library);
    assert!(matches!(
        generate_project(&workspace, &options),
        Err(Error::InvalidProjectName(_))
    ));
    assert!(!temp_dir.path().join("libs").join("match").exists());
}
