// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<String> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_debug_snapshot!(filters, @r#"
    [
        "off",
        "warn,wotmod_rs=error,wotmod=error",
        "warn,wotmod_rs=warn,wotmod=warn",
        "warn,wotmod_rs=info,wotmod=info",
        "warn,wotmod_rs=debug,wotmod=debug",
        "warn,wotmod_rs=trace,wotmod=trace",
        "trace",
    ]
    "#);
}

#[test]
fn test_log_level_u8_conversion() {
    let level = LogLevel::try_from(4).unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert_eq!(u8::from(level), 4);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}
