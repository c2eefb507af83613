//! Integration tests for the `cursor-rules init` command

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use cursor_rules::commands::init;
use cursor_rules::config::{RulesConfig, RULES_DIRS};
use cursor_rules::version_file::read_version;
use cursor_rules::{Error, TokioFs};

/// Create a rules package with every managed directory and a package.json
fn setup_package(version: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        format!(r#"{{"name":"cursor-rules","version":"{}"}}"#, version),
    )
    .unwrap();

    for rule_dir in RULES_DIRS {
        let path = dir.path().join(rule_dir);
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("README.md"), format!("# {}\n", rule_dir)).unwrap();
    }

    dir
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Test that init copies every rule directory and writes the version file
#[tokio::test]
async fn test_init_installs_rules_and_version() {
    let package = setup_package("1.2.3");
    let target = TempDir::new().unwrap();
    let rules = RulesConfig::default();

    let version = init::execute(&TokioFs, &rules, package.path(), target.path())
        .await
        .unwrap();
    assert_eq!(version, "1.2.3");

    for rule_dir in RULES_DIRS {
        let copied = target.path().join(rule_dir).join("README.md");
        assert!(copied.exists(), "{} should be copied", rule_dir);
        assert_eq!(read(&copied), format!("# {}\n", rule_dir));
    }

    let info = read_version(&TokioFs, &rules, target.path()).await.unwrap();
    assert_eq!(info.version, "1.2.3");
    assert_eq!(info.source, "cursor-rules");
    assert!(chrono::Utc::now() - info.installed_at < chrono::Duration::seconds(60));
}

/// Test that the version file is pretty-printed camelCase JSON
#[tokio::test]
async fn test_init_version_file_format() {
    let package = setup_package("1.0.0");
    let target = TempDir::new().unwrap();

    init::execute(&TokioFs, &RulesConfig::default(), package.path(), target.path())
        .await
        .unwrap();

    let content = read(&target.path().join(".cursor-rules-version.json"));
    assert!(content.starts_with("{\n  \""));
    assert!(content.contains("\"installedAt\""));
    assert!(content.contains("\"version\": \"1.0.0\""));
}

/// Test that a second init is rejected
#[tokio::test]
async fn test_init_twice_fails() {
    let package = setup_package("1.0.0");
    let target = TempDir::new().unwrap();
    let rules = RulesConfig::default();

    init::execute(&TokioFs, &rules, package.path(), target.path())
        .await
        .unwrap();
    let err = init::execute(&TokioFs, &rules, package.path(), target.path())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::AlreadyInitialized(ref v) if v == "1.0.0"));
    assert!(err.to_string().contains("already initialized"));
}

/// Test that a corrupt version file does not block init
#[tokio::test]
async fn test_init_over_corrupt_version_file() {
    let package = setup_package("1.0.0");
    let target = TempDir::new().unwrap();
    fs::write(target.path().join(".cursor-rules-version.json"), "{not json").unwrap();

    let version = init::execute(&TokioFs, &RulesConfig::default(), package.path(), target.path())
        .await
        .unwrap();
    assert_eq!(version, "1.0.0");
}

/// Test that init skips rule directories missing from the package
#[tokio::test]
async fn test_init_skips_missing_package_dirs() {
    let package = setup_package("1.0.0");
    fs::remove_dir_all(package.path().join("user-rules")).unwrap();
    let target = TempDir::new().unwrap();

    init::execute(&TokioFs, &RulesConfig::default(), package.path(), target.path())
        .await
        .unwrap();

    assert!(!target.path().join("user-rules").exists());
    assert!(target.path().join(".cursor/rules/README.md").exists());
}

/// Test that a missing manifest fails the command
#[tokio::test]
async fn test_init_without_manifest_fails() {
    let package = setup_package("1.0.0");
    fs::remove_file(package.path().join("package.json")).unwrap();
    let target = TempDir::new().unwrap();

    let err = init::execute(&TokioFs, &RulesConfig::default(), package.path(), target.path())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::PackageVersion { .. }));
    assert!(!target.path().join(".cursor-rules-version.json").exists());
}

/// Test that empty directory arguments are rejected before any I/O
#[tokio::test]
async fn test_init_requires_dirs() {
    let target = TempDir::new().unwrap();
    let rules = RulesConfig::default();

    let err = init::execute(&TokioFs, &rules, Path::new(""), target.path())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingArgument("packageDir")));

    let err = init::execute(&TokioFs, &rules, target.path(), Path::new(""))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingArgument("targetDir")));
}

/// Test that a package version the version file cannot hold is rejected up front
#[tokio::test]
async fn test_init_rejects_prerelease_package_version() {
    let package = setup_package("1.0.0-beta.1");
    let target = TempDir::new().unwrap();
    let rules = RulesConfig::default();

    for _ in 0..2 {
        let err = init::execute(&TokioFs, &rules, package.path(), target.path())
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::InvalidVersion { role: "package", ref value } if value == "1.0.0-beta.1")
        );
    }

    assert!(!target.path().join(".cursor-rules-version.json").exists());
    assert!(!target.path().join(".cursor/rules").exists());
}
