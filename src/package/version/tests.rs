// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::NormalizedVersion;

fn render(raw: Option<&str>) -> String {
    NormalizedVersion::parse(raw).to_string()
}

#[test]
fn test_adds_missing_minor_and_patch() {
    assert_eq!(render(Some("1")), "01.00.00");
}

#[test]
fn test_adds_missing_patch() {
    assert_eq!(render(Some("0.1")), "00.01.00");
}

#[test]
fn test_pads_release_version() {
    assert_eq!(
        NormalizedVersion::parse(Some("0.1.2")),
        NormalizedVersion::new(0, 1, 2)
    );
    assert_eq!(render(Some("0.1.2")), "00.01.02");
}

#[test]
fn test_drops_pre_release_suffix() {
    assert_eq!(render(Some("0.1.2-rc1")), "00.01.02");
}

#[test]
fn test_absent_version_is_zero() {
    assert_eq!(render(None), "00.00.00");
    assert_eq!(NormalizedVersion::parse(None), NormalizedVersion::default());
}

#[test]
fn test_non_numeric_component_stops_processing() {
    assert_eq!(render(Some("1.x.3")), "01.00.00");
    assert_eq!(render(Some("1.2rc.3")), "01.02.00");
    assert_eq!(render(Some("dev")), "00.00.00");
    assert_eq!(render(Some("")), "00.00.00");
}

#[test]
fn test_extra_components_are_ignored() {
    assert_eq!(render(Some("1.2.3.4")), "01.02.03");
}

#[test]
fn test_wide_fields_are_not_truncated() {
    assert_eq!(render(Some("2024.10.117")), "2024.10.117");
}

#[test]
fn test_oversized_field_saturates() {
    let version = NormalizedVersion::parse(Some("99999999999.1"));
    assert_eq!(version.major, u32::MAX);
    assert_eq!(version.minor, 1);
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert_eq!(render(Some("  1.2 ")), "01.02.00");
}
