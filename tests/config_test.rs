/*!
Configuration loading feeding the resolver and builder
*/

use jsdoc_bridge::{AstBuilder, BridgeConfig, CatchHandlerStyle};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_toml_config_drives_resolver() {
    let dir = TempDir::new().unwrap();
    let lib = dir.path().join("lib");
    fs::create_dir_all(&lib).unwrap();
    fs::write(lib.join("helper.js"), "").unwrap();

    let config_path = dir.path().join("jsdoc-bridge.toml");
    fs::write(
        &config_path,
        format!(
            "[resolver]\nprivileged = [{:?}]\ncontext_dir = {:?}\n\n[ast]\ncatch_handlers = \"list\"\n",
            lib.display().to_string(),
            dir.path().display().to_string()
        ),
    )
    .unwrap();

    let config = BridgeConfig::load_from_file(&config_path).unwrap();
    assert_eq!(config.ast.catch_handlers, CatchHandlerStyle::List);

    let resolver = config.module_resolver().unwrap();
    assert_eq!(resolver.context_dir(), dir.path());
    assert_eq!(resolver.resolve("helper").unwrap().path, lib.join("helper.js"));

    let program = AstBuilder::with_options(config.ast.clone())
        .build("try {} catch (e) {}", "t.js")
        .unwrap();
    let value = serde_json::to_value(&program).unwrap();
    assert_eq!(value["body"][0]["handlers"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_yml_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("bridge.yml");
    fs::write(&config_path, "resolver:\n  fallback:\n    - https://example.com/modules\n").unwrap();

    let config = BridgeConfig::load_from_file(&config_path).unwrap();
    let resolver = config.module_resolver().unwrap();
    assert_eq!(resolver.fallback()[0].uri().as_str(), "https://example.com/modules/");
    assert_eq!(config.ast.catch_handlers, CatchHandlerStyle::Single);
}

#[test]
fn test_unreadable_or_invalid_config() {
    let dir = TempDir::new().unwrap();
    let missing = BridgeConfig::load_from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(missing.to_string().contains("Failed to read config"));

    let invalid_path = dir.path().join("invalid.toml");
    fs::write(&invalid_path, "[ast]\ncatch_handlers = \"many\"\n").unwrap();
    let invalid = BridgeConfig::load_from_file(&invalid_path).unwrap_err();
    assert!(invalid.to_string().contains("Failed to parse TOML config"));
}
