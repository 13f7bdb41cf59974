use droidconf_ops::find_project_root;
use droidconf_ops::ops_resolve::{resolve, ResolveOptions};
use droidconf_util::errors::ConfigError;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

const PROJECT: &str = r#"
[android]
namespace = "com.example.flutter_bloc_rxdart"
min-sdk = 33
target-sdk = 33

[manifest-placeholders]
GOOGLE_MAP_API_KEY = { property = "GOOGLE_MAP_API_KEY" }
SENTRY_DSN = { env = "SENTRY_DSN", default = "" }
"#;

fn project_dir(properties: Option<&str>) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Droidconf.toml"), PROJECT).unwrap();
    if let Some(content) = properties {
        fs::write(tmp.path().join("local.properties"), content).unwrap();
    }
    tmp
}

#[test]
fn test_resolve_reads_local_properties() {
    let tmp = project_dir(Some("GOOGLE_MAP_API_KEY=ABC123\nflutter.versionCode=12\n"));
    let descriptor = resolve(tmp.path(), &ResolveOptions::default()).unwrap();
    assert_eq!(descriptor.manifest_placeholders()["GOOGLE_MAP_API_KEY"], "ABC123");
    assert_eq!(descriptor.manifest_placeholders()["SENTRY_DSN"], "");
    assert_eq!(descriptor.version_code(), 12);
}

#[test]
fn test_resolve_uses_env_snapshot() {
    let tmp = project_dir(Some("GOOGLE_MAP_API_KEY=ABC123\n"));
    let mut env = BTreeMap::new();
    env.insert("SENTRY_DSN".to_string(), "https://key@sentry.io/1".to_string());
    let opts = ResolveOptions {
        env,
        ..ResolveOptions::default()
    };
    let descriptor = resolve(tmp.path(), &opts).unwrap();
    assert_eq!(
        descriptor.manifest_placeholders()["SENTRY_DSN"],
        "https://key@sentry.io/1"
    );
}

#[test]
fn test_resolve_with_properties_override() {
    let tmp = project_dir(None);
    fs::write(tmp.path().join("ci.properties"), "GOOGLE_MAP_API_KEY=CI_KEY\n").unwrap();
    let opts = ResolveOptions {
        properties: Some("ci.properties".into()),
        ..ResolveOptions::default()
    };
    let descriptor = resolve(tmp.path(), &opts).unwrap();
    assert_eq!(descriptor.manifest_placeholders()["GOOGLE_MAP_API_KEY"], "CI_KEY");
}

#[test]
fn test_resolve_without_properties_file_is_file_not_found() {
    let tmp = project_dir(None);
    let err = resolve(tmp.path(), &ResolveOptions::default()).unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::FileNotFound { .. })
        ),
        "got: {err}"
    );
}

#[test]
fn test_resolve_release_falls_back_to_debug_signing() {
    let tmp = project_dir(Some("GOOGLE_MAP_API_KEY=ABC123\n"));
    let opts = ResolveOptions {
        build_type: "release".to_string(),
        ..ResolveOptions::default()
    };
    let descriptor = resolve(tmp.path(), &opts).unwrap();
    assert_eq!(descriptor.signing_ref(), "debug");
}

#[test]
fn test_find_project_root_walks_up() {
    let tmp = project_dir(None);
    let nested = tmp.path().join("app").join("src").join("main");
    fs::create_dir_all(&nested).unwrap();
    assert_eq!(find_project_root(&nested).unwrap(), tmp.path());
}

#[test]
fn test_find_project_root_missing() {
    let tmp = TempDir::new().unwrap();
    let err = find_project_root(tmp.path()).unwrap_err();
    assert!(err.to_string().contains("Could not find Droidconf.toml"));
}
