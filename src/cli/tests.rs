// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use crate::cli::{Cli, Command};
use clap::{CommandFactory, Parser};

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["wotmod", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "wotmod",
        "-l",
        "5",
        "--config",
        "a.toml",
        "-c",
        "b.toml",
        "--set",
        "package.version=1.0",
        "--no-default-config",
        "options",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(cli.global.no_default_config);
    assert!(matches!(cli.command, Some(Command::Options)));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["wotmod", "-l", "7", "version"]).is_err());
}

#[test]
fn test_global_overrides_order() {
    let cli = Cli::try_parse_from([
        "wotmod",
        "--set",
        "package.name=foo",
        "-l",
        "4",
        "--log-file",
        "out.log",
        "version",
    ])
    .unwrap();
    insta::assert_snapshot!(cli.global.to_config_overrides().join("\n"), @r"
    package.name=foo
    global.output_log_level=4
    global.file_log_level=4
    global.log_file=out.log
    ");
}

#[test]
fn test_parse_build() {
    let cli = Cli::try_parse_from([
        "wotmod",
        "build",
        "-p",
        "proj",
        "-d",
        "out",
        "--author-id",
        "com.github.jhakonen",
        "--interpreter",
        "none",
    ])
    .unwrap();
    let command = cli.command.unwrap();
    assert_eq!(command.project_dir(), Path::new("proj"));

    let args = command.build_args().unwrap();
    assert_eq!(
        args.to_config_overrides(),
        vec![
            ("build.dist_dir", "out".to_string()),
            ("package.author_id", "com.github.jhakonen".to_string()),
            ("build.interpreter", "none".to_string()),
        ]
    );
}

#[test]
fn test_bdist_wotmod_alias() {
    let cli = Cli::try_parse_from(["wotmod", "bdist-wotmod", "--target-runtime", "2.7"]).unwrap();
    let Some(Command::Build(args)) = cli.command else {
        panic!("expected build command");
    };
    assert_eq!(args.target_runtime.as_deref(), Some("2.7"));
}

#[test]
fn test_output_path_defaults_to_current_dir() {
    let cli = Cli::try_parse_from(["wotmod", "output-path"]).unwrap();
    let command = cli.command.unwrap();
    assert!(matches!(command, Command::OutputPath(_)));
    assert_eq!(command.project_dir(), Path::new("."));
}
