use crate::*;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("nslog-config-{}-{name}", std::process::id()))
}

#[test]
fn test_default_reads_debug() {
    let config = NslogConfig::default();
    assert_eq!(config.env_var, "DEBUG");
    assert!(config.patterns.is_none());
}

#[test]
fn test_yaml_with_patterns() -> Result<()> {
    let config = ConfigLoader::from_yaml_str(
        r#"
env_var: APP_DEBUG
patterns:
  - "net:*"
  - db
"#,
    )?;

    assert_eq!(config.env_var, "APP_DEBUG");
    let patterns = config.resolve();
    assert_eq!(patterns.to_string(), "net:*,db");
    assert!(patterns.matches("net:http"));
    assert!(patterns.matches("db"));
    assert!(!patterns.matches("net"));
    Ok(())
}

#[test]
fn test_missing_fields_use_defaults() -> Result<()> {
    let config = ConfigLoader::from_json_str("{}")?;
    assert_eq!(config, NslogConfig::default());
    Ok(())
}

#[test]
fn test_resolve_from_env_var() {
    let name = "NSLOG_CONFIG_TEST_RESOLVE";
    std::env::set_var(name, "cache,worker:*");
    let patterns = NslogConfig::with_env_var(name).resolve();
    std::env::remove_var(name);

    assert!(patterns.matches("cache"));
    assert!(patterns.matches("worker:1"));
    assert!(!patterns.matches("db"));
}

#[test]
fn test_explicit_patterns_override_env() {
    let name = "NSLOG_CONFIG_TEST_OVERRIDE";
    std::env::set_var(name, "*");
    let mut config = NslogConfig::with_patterns(["only", "a,b"]);
    config.env_var = name.to_string();
    let patterns = config.resolve();
    std::env::remove_var(name);

    assert!(patterns.matches("only"));
    assert!(patterns.matches("a"));
    assert!(patterns.matches("b"));
    assert!(!patterns.matches("other"));
}

#[test]
fn test_empty_pattern_list_enables_nothing() {
    let config = NslogConfig::with_patterns(Vec::<String>::new());
    assert!(config.resolve().is_empty());
}

#[test]
fn test_validate_rejects_bad_env_var() {
    assert!(ConfigLoader::from_yaml_str("env_var: \"\"").is_err());
    assert!(ConfigLoader::from_json_str(r#"{"env_var": "A=B"}"#).is_err());
    assert!(ConfigLoader::validate(&NslogConfig::with_env_var("MY_DEBUG")).is_ok());
}

#[test]
fn test_invalid_content_is_an_error() {
    assert!(ConfigLoader::from_yaml_str("patterns: [unclosed").is_err());
    assert!(ConfigLoader::from_json_str("not json").is_err());
}

#[test]
fn test_load_from_files() -> Result<()> {
    let yaml_path = temp_path("config.yaml");
    let json_path = temp_path("config.json");
    fs::write(&yaml_path, "patterns: [\"*\"]\n")?;
    fs::write(&json_path, r#"{"env_var": "JSON_DEBUG"}"#)?;

    let yaml = ConfigLoader::from_yaml_file(&yaml_path)?;
    let json = ConfigLoader::from_json_file(&json_path)?;
    fs::remove_file(&yaml_path)?;
    fs::remove_file(&json_path)?;

    assert_eq!(yaml.patterns, Some(vec!["*".to_string()]));
    assert_eq!(json.env_var, "JSON_DEBUG");
    Ok(())
}

#[test]
fn test_missing_file_names_path() {
    let path = temp_path("does-not-exist.yaml");
    let err = ConfigLoader::from_yaml_file(&path).unwrap_err();
    assert!(format!("{err}").contains("does-not-exist.yaml"));
}

#[test]
fn test_serialize_skips_absent_patterns() -> Result<()> {
    let json = serde_json::to_string(&NslogConfig::default())?;
    assert_eq!(json, r#"{"env_var":"DEBUG"}"#);
    Ok(())
}
