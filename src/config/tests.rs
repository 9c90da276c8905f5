// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::parse_override;
use super::types::normalize_archive_dir;
use super::{Config, ConfigLoader};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::package::compiler::{InterpreterSetting, TargetRuntime};
use std::path::PathBuf;

const FULL_CONFIG: &str = r#"
[global]
log_file = "wotmod.log"

[package]
name = "foo"
version = "0.1"
author = "jhakonen"
description = "has cool stuff"

[build]
install_lib = "res/scripts/client"
dist_dir = "out"
interpreter = "none"
target_runtime = "2.7"

[files]
scripts = ["foo.py", "bar.py"]
packages = ["mypkg"]
data_files = ["datafile"]

[files.data_dirs]
cfg = ["settings.json"]
"#;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
    assert_eq!(config.build.install_lib, "res/scripts/common");
    assert_eq!(config.build.dist_dir, PathBuf::from("dist"));
    assert_eq!(config.build.target_runtime, TargetRuntime::Python27);
    assert_eq!(config.build.interpreter_setting(), InterpreterSetting::Default);
    assert!(config.files.scripts.is_empty());
}

#[test]
fn test_empty_loader_matches_default() {
    let config = ConfigLoader::new().build().expect("build should succeed");
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_parse() {
    let config = Config::parse(FULL_CONFIG).expect("parse should succeed");
    assert_eq!(config.package.name, "foo");
    assert_eq!(config.package.version.as_deref(), Some("0.1"));
    assert_eq!(config.build.interpreter_setting(), InterpreterSetting::Disabled);
    assert_eq!(config.files.data_dirs["cfg"], vec![PathBuf::from("settings.json")]);
}

#[test]
fn test_author_id_falls_back_to_author() {
    let config = Config::parse("[package]\nauthor = \"jhakonen\"").unwrap();
    assert_eq!(config.package.effective_author_id(), "jhakonen");

    let config =
        Config::parse("[package]\nauthor = \"jhakonen\"\nauthor_id = \"com.github.jhakonen\"")
            .unwrap();
    assert_eq!(config.package.effective_author_id(), "com.github.jhakonen");
}

#[test]
fn test_format_options() {
    let config = Config::parse(FULL_CONFIG).unwrap();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    build.dist_dir          = out
    build.install_lib       = res/scripts/client
    build.interpreter       = none
    build.target_runtime    = 2.7
    files.data_dirs.cfg     = settings.json
    files.data_files        = datafile
    files.packages          = mypkg
    files.scripts           = foo.py, bar.py
    global.file_log_level   = 5
    global.log_file         = wotmod.log
    global.output_log_level = 3
    package.author          = jhakonen
    package.author_id       = jhakonen
    package.description     = has cool stuff
    package.name            = foo
    package.version         = 0.1
    ");
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::parse(FULL_CONFIG).unwrap();
    assert_eq!(config.format_options(), config.format_options());
}

#[test]
fn test_install_lib_is_normalized() {
    let config = Config::parse("[build]\ninstall_lib = '\\res\\scripts\\client\\'").unwrap();
    assert_eq!(config.build.install_lib, "res/scripts/client");

    let config = Config::parse("[build]\ninstall_lib = 'res//scripts/./common/'").unwrap();
    assert_eq!(config.build.install_lib, "res/scripts/common");
}

#[test]
fn test_install_lib_rejects_escapes() {
    for bad in ["../outside", "/abs/path", "C:/scripts", "res/../../x"] {
        let err = normalize_archive_dir("build", "install_lib", bad).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "install_lib"),
            "{bad}"
        );
    }

    let result = Config::parse("[build]\ninstall_lib = '../x'");
    assert!(result.is_err());
}

#[test]
fn test_data_dirs_keys_are_normalized() {
    let mut config = Config::default();
    config
        .files
        .data_dirs
        .insert("cfg/".to_string(), vec![PathBuf::from("a")]);
    config
        .files
        .data_dirs
        .insert("cfg".to_string(), vec![PathBuf::from("b")]);
    config.resolve_and_validate().unwrap();
    assert_eq!(config.files.data_dirs.len(), 1);
    assert_eq!(config.files.data_dirs["cfg"].len(), 2);
}

#[test]
fn test_deny_unknown_fields_top_level() {
    let result = Config::parse("[unknown]\nkey = 1");
    assert!(result.is_err());
}

#[test]
fn test_deny_unknown_fields_in_section() {
    let result = Config::parse("[package]\nhomepage = 'x'");
    assert!(result.is_err());
}

#[test]
fn test_invalid_target_runtime() {
    let err = Config::parse("[build]\ntarget_runtime = '3.11'").unwrap_err();
    assert!(format!("{err:#}").contains("target_runtime"));
}

#[test]
fn test_invalid_log_level() {
    let result = Config::parse("[global]\noutput_log_level = 9");
    assert!(result.is_err());
}

#[test]
fn test_config_loader_tracks_files() {
    let loader = ConfigLoader::new().add_toml_str("").add_toml_str("");
    assert_eq!(loader.loaded_files().len(), 2);
}

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new().add_toml_str("");
    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @"1. [string] <string>");
}

#[test]
fn test_config_loader_optional_only_tracks_existing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/wotmod.toml");
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn test_config_loader_add_toml_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "[package]\nname = \"foo\"\nversion = \"1.2\"").expect("failed to write");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .build()
        .expect("build should succeed");
    assert_eq!(config.package.name, "foo");
    assert_eq!(config.package.version.as_deref(), Some("1.2"));
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let result = ConfigLoader::new()
        .add_toml_file("/nonexistent/path/to/wotmod.toml")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_config_loader_add_toml_file_invalid_toml() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "this is not valid toml {{{{{{").expect("failed to write");

    let result = ConfigLoader::new().add_toml_file(file.path()).build();
    assert!(result.is_err(), "build should fail with invalid TOML");
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test
    unsafe {
        std::env::set_var("WOTMODTEST_PACKAGE__AUTHOR_ID", "com.github.env");
        std::env::set_var("WOTMODTEST_BUILD__TARGET_RUNTIME", "2.6");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[package]\nauthor_id = \"com.github.file\"")
        .with_env_prefix("WOTMODTEST")
        .build()
        .expect("build should succeed");

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("WOTMODTEST_PACKAGE__AUTHOR_ID");
        std::env::remove_var("WOTMODTEST_BUILD__TARGET_RUNTIME");
    }

    assert_eq!(config.package.author_id.as_deref(), Some("com.github.env"));
    assert_eq!(config.build.target_runtime, TargetRuntime::Python26);
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[package]\nname = \"foo\"")
        .set("package.name", "bar")
        .expect("set should succeed")
        .build()
        .expect("build should succeed");
    assert_eq!(config.package.name, "bar");
}

#[test]
fn test_config_loader_set_all() {
    let config = ConfigLoader::new()
        .set_all(&["package.version=2.0", "global.output_log_level=4"])
        .expect("set_all should succeed")
        .build()
        .expect("build should succeed");
    assert_eq!(config.package.version.as_deref(), Some("2.0"));
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
}

#[test]
fn test_parse_override() {
    assert_eq!(parse_override("package.name=foo").unwrap(), ("package.name", "foo"));
    assert_eq!(parse_override("package.description=a=b").unwrap(), ("package.description", "a=b"));
    assert_eq!(parse_override("package.version=").unwrap(), ("package.version", ""));
    assert!(parse_override("package.name").is_err());
    assert!(parse_override("=foo").is_err());
}

#[test]
fn test_config_loader_layered_sources() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[package]
name = "foo"
author = "jhakonen"

[build]
dist_dir = "file-dist"
"#
    )
    .expect("failed to write");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_str("[build]\ndist_dir = \"string-dist\"")
        .build()
        .expect("build should succeed");

    assert_eq!(config.build.dist_dir, PathBuf::from("string-dist"), "string should override file");
    assert_eq!(config.package.name, "foo", "file value should persist");
}
