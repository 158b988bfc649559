use std::path::PathBuf;

use cargokit_core::args::PackageKind;
use cargokit_core::config::WorkspaceLayout;
use cargokit_core::error::Error;
use cargokit_core::naming::{
    normalize_project, to_kebab_case, to_snake_case, validate_project_name, NewProjectOptions,
};

#[test]
fn test_kebab_case() {
    assert_eq!(to_kebab_case("myCoolLib"), "my-cool-lib");
    assert_eq!(to_kebab_case("my_cool lib"), "my-cool-lib");
    assert_eq!(to_kebab_case("My--Lib"), "my-lib");
    assert_eq!(to_kebab_case("core"), "core");
}

#[test]
fn test_snake_case() {
    assert_eq!(to_snake_case("my-cool-lib"), "my_cool_lib");
    assert_eq!(to_snake_case("fooBar baz"), "foo_bar_baz");
}

#[test]
fn test_validate_project_name() {
    assert!(validate_project_name("core").is_ok());
    assert!(validate_project_name("my lib_2").is_ok());
    assert!(validate_project_name("").is_err());
    assert!(validate_project_name("2fast").is_err());
    assert!(validate_project_name("../escape").is_err());
    assert!(validate_project_name("a/b").is_err());
}

#[test]
fn test_normalize_library() {
    let options = NewProjectOptions::new("sharedUtils", PackageKind::Library);
    let project = normalize_project(&options, &WorkspaceLayout::default()).unwrap();

    assert_eq!(project.project_name, "shared-utils");
    assert_eq!(project.crate_name, "shared_utils");
    assert_eq!(project.project_root, PathBuf::from("libs").join("shared-utils"));
    assert_eq!(project.member_path(), "libs/shared-utils");
}

#[test]
fn test_normalize_nested_application() {
    let mut options = NewProjectOptions::new("api", PackageKind::Application);
    options.directory = Some("backend/Services".to_string());
    options.tags = vec![" scope:backend ".to_string(), "".to_string()];

    let layout = WorkspaceLayout {
        apps_dir: "bins".to_string(),
        libs_dir: "crates".to_string(),
    };
    let project = normalize_project(&options, &layout).unwrap();

    assert_eq!(project.project_name, "backend-services-api");
    assert_eq!(project.crate_name, "backend_services_api");
    assert_eq!(project.member_path(), "bins/backend/services/api");
    assert_eq!(project.tags, vec!["scope:backend".to_string()]);
}

#[test]
fn test_directory_cannot_escape_workspace() {
    let mut options = NewProjectOptions::new("api", PackageKind::Library);
    options.directory = Some("../outside".to_string());
    assert!(normalize_project(&options, &WorkspaceLayout::default()).is_err());
}

#[test]
fn test_keyword_crate_names_are_rejected() {
    let layout = WorkspaceLayout::default();
    for name in ["type", "match", "self", "Async"] {
        let options = NewProjectOptions::new(name, PackageKind::Library);
        assert!(matches!(
            normalize_project(&options, &layout),
            Err(Error::InvalidProjectName(_))
        ));
    }

    let mut options = NewProjectOptions::new("type", PackageKind::Library);
    options.directory = Some("shared".to_string());
    let project = normalize_project(&options, &layout).unwrap();
    assert_eq!(project.crate_name, "shared_type");
}
