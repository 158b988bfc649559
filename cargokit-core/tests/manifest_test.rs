use std::fs;

use cargokit_core::error::Error;
use cargokit_core::manifest::{append_member, WorkspaceManifest};
use tempfile::TempDir;

const MANIFEST: &str = r#"# workspace root
[workspace]
members = ["libs/core"] # keep sorted
resolver = "2"

[workspace.dependencies]
serde = "1.0"
"#;

#[test]
fn test_append_member_preserves_other_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Cargo.toml");
    fs::write(&path, MANIFEST).unwrap();

    assert!(append_member(&path, "apps/server").unwrap());

    let manifest = WorkspaceManifest::load(&path).unwrap();
    assert_eq!(manifest.members(), vec!["libs/core", "apps/server"]);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# workspace root"));
    assert!(content.contains("# keep sorted"));
    assert!(content.contains("resolver = \"2\""));
    assert!(content.contains("[workspace.dependencies]"));
    assert!(content.contains("serde = \"1.0\""));
}

#[test]
fn test_append_member_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Cargo.toml");
    fs::write(&path, MANIFEST).unwrap();

    assert!(!append_member(&path, "libs/core").unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), MANIFEST);
}

#[test]
fn test_append_member_creates_members_list() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Cargo.toml");
    fs::write(&path, "[workspace]\nresolver = \"2\"\n").unwrap();

    assert!(append_member(&path, "libs/util").unwrap());
    let manifest = WorkspaceManifest::load(&path).unwrap();
    assert_eq!(manifest.members(), vec!["libs/util"]);
}

#[test]
fn test_normalizes_windows_separators() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Cargo.toml");
    fs::write(&path, MANIFEST).unwrap();

    append_member(&path, "libs\\nested\\util").unwrap();
    let manifest = WorkspaceManifest::load(&path).unwrap();
    assert_eq!(manifest.members(), vec!["libs/core", "libs/nested/util"]);
}

#[test]
fn test_missing_workspace_table_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Cargo.toml");
    fs::write(&path, "[package]\nname = \"solo\"\n").unwrap();

    assert!(matches!(
        append_member(&path, "libs/util"),
        Err(Error::Manifest { .. })
    ));
}

#[test]
fn test_missing_manifest_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Cargo.toml");
    assert!(matches!(WorkspaceManifest::load(&path), Err(Error::Io(_))));
}

#[cfg(unix)]
#[test]
fn test_append_member_keeps_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Cargo.toml");
    fs::write(&path, MANIFEST).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

    assert!(append_member(&path, "libs/a").unwrap());

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}
