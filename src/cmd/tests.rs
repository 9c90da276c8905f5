// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::build::{create_compiler, metadata_from_config, plan_from_config};
use crate::config::Config;
use crate::package::compiler::TargetRuntime;

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let pkg = dir.path().join("mypkg");
    fs::create_dir_all(pkg.join("sub")).unwrap();
    fs::create_dir_all(pkg.join("__pycache__")).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();
    fs::write(pkg.join("sub").join("mod.py"), "").unwrap();
    fs::write(pkg.join("__pycache__").join("stale.py"), "").unwrap();
    fs::write(dir.path().join("foo.py"), "#").unwrap();
    dir
}

const CONFIG: &str = r#"
[package]
name = "foo"
author = "jhakonen"
version = "0.1"

[build]
install_lib = "res/scripts/client"
target_runtime = "2.6"

[files]
scripts = ["foo.py"]
packages = ["mypkg"]
data_files = ["datafile"]

[files.data_dirs]
cfg = ["settings.json"]
"#;

#[test]
fn test_metadata_uses_author_fallback() {
    let config = Config::parse(CONFIG).unwrap();
    let metadata = metadata_from_config(&config);
    assert_eq!(metadata.author_id, "jhakonen");
    assert_eq!(metadata.name, "foo");
    assert_eq!(metadata.version.as_deref(), Some("0.1"));
}

#[test]
fn test_plan_from_config_maps_inputs() {
    let dir = project();
    let config = Config::parse(CONFIG).unwrap();
    let plan = plan_from_config(&config, dir.path()).unwrap();

    assert_eq!(plan.scripts_root(), "res/scripts/client");
    assert_eq!(plan.target_runtime(), TargetRuntime::Python26);

    let installs: Vec<&str> = plan
        .scripts()
        .iter()
        .map(|s| s.install_path.as_str())
        .collect();
    assert_eq!(installs, vec!["foo.py", "mypkg/__init__.py", "mypkg/sub/mod.py"]);

    let data: Vec<(PathBuf, &str)> = plan
        .data_files()
        .iter()
        .map(|d| (d.source.clone(), d.target_dir.as_str()))
        .collect();
    assert_eq!(
        data,
        vec![
            (PathBuf::from("datafile"), ""),
            (PathBuf::from("settings.json"), "cfg"),
        ]
    );
}

#[test]
fn test_plan_from_config_collects_nested_subpackages() {
    let dir = TempDir::new().unwrap();
    let pkg = dir.path().join("mymod");
    fs::create_dir_all(pkg.join("build")).unwrap();
    fs::create_dir_all(pkg.join("dist")).unwrap();
    fs::write(pkg.join("__init__.py"), "").unwrap();
    fs::write(pkg.join("build").join("__init__.py"), "").unwrap();
    fs::write(pkg.join("dist").join("helpers.py"), "").unwrap();

    let config = Config::parse("[files]\npackages = [\"mymod\"]").unwrap();
    let plan = plan_from_config(&config, dir.path()).unwrap();
    let installs: Vec<&str> = plan
        .scripts()
        .iter()
        .map(|s| s.install_path.as_str())
        .collect();
    assert_eq!(
        installs,
        vec!["mymod/__init__.py", "mymod/build/__init__.py", "mymod/dist/helpers.py"]
    );
}

#[test]
fn test_plan_from_config_missing_package_dir() {
    let dir = TempDir::new().unwrap();
    let config = Config::parse("[files]\npackages = [\"nope\"]").unwrap();
    assert!(plan_from_config(&config, dir.path()).is_err());
}

#[test]
fn test_disabled_interpreter_creates_no_compiler() {
    let config = Config::parse("[build]\ninterpreter = \"none\"").unwrap();
    assert!(create_compiler(&config).is_none());
}
