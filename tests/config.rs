use codemap::core::ProjectConfig;
use std::fs;
use std::path::PathBuf;

#[test]
fn config_defaults_when_tsconfig_has_no_root_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    let tsconfig = dir.path().join("tsconfig.json");
    fs::write(&tsconfig, "{ \"compilerOptions\": { \"strict\": true } }").unwrap();

    let config = ProjectConfig::load(&tsconfig).unwrap();

    assert_eq!(config.root, fs::canonicalize(dir.path()).unwrap());
    assert_eq!(config.source_dir, "src");
    assert_eq!(config.source_root(), config.root.join("src"));
    assert_eq!(config.extensions, vec!["ts", "vue", "jsx", "js"]);
    assert_eq!(config.output_dir, PathBuf::from("codemap-output"));
    assert_eq!(config.top, 10);
}

#[test]
fn config_accepts_commented_tsconfig_and_ignores_root_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    let tsconfig = dir.path().join("tsconfig.json");
    let content = r#"{
  // generated by tsc --init
  "compilerOptions": {
    "target": "es2020", /* language level */
    "rootDir": "./app/",
  },
}"#;
    fs::write(&tsconfig, content).unwrap();

    let config = ProjectConfig::load(&tsconfig).unwrap();
    assert_eq!(config.source_dir, "src");
    assert_eq!(config.source_root(), config.root.join("src"));
}

#[test]
fn config_overrides_apply() {
    let dir = tempfile::TempDir::new().unwrap();
    let tsconfig = dir.path().join("tsconfig.json");
    fs::write(&tsconfig, "{}").unwrap();

    let config = ProjectConfig::load(&tsconfig)
        .unwrap()
        .with_source_dir("./lib/")
        .with_extensions(vec![".ts".to_string(), " tsx ".to_string(), String::new()])
        .with_output_dir(PathBuf::from("out"))
        .with_top(3);

    assert_eq!(config.source_dir, "lib");
    assert_eq!(config.extensions, vec!["ts", "tsx"]);
    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert_eq!(config.top, 3);
}

#[test]
fn config_fails_fast_when_tsconfig_is_missing() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = ProjectConfig::load(&dir.path().join("tsconfig.json")).unwrap_err();
    assert!(err.to_string().contains("tsconfig.json"));
}

#[test]
fn config_rejects_malformed_tsconfig() {
    let dir = tempfile::TempDir::new().unwrap();
    let tsconfig = dir.path().join("tsconfig.json");
    fs::write(&tsconfig, "{ not json").unwrap();

    assert!(ProjectConfig::load(&tsconfig).is_err());
}
