// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{ConfigError, FsError, PackageError, WotmodError, WotmodResult, bail_out};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "build".to_string(),
        key: "install_lib".to_string(),
        message: "'..' is not allowed".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'install_lib' in section '[build]': '..' is not allowed"
    );
}

#[test]
fn test_invalid_bytecode_names_file() {
    let err = PackageError::InvalidBytecode {
        file: "src/foo.py".to_string(),
        runtime: "Python 2.7".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"src/foo.py is not a valid compiled file for the target runtime Python 2.7"
    );
}

#[test]
fn test_package_error_boxes_into_top_level() {
    let err: WotmodError = PackageError::MissingName.into();
    assert!(matches!(err, WotmodError::Package(_)));
    assert_eq!(
        err.to_string(),
        "package error: package name is empty; set package.name"
    );
}

#[test]
fn test_bail_out_message() {
    let err = bail_out("nothing to do");
    assert_eq!(err.to_string(), "fatal error: nothing to do");
}

#[test]
fn test_fs_error_from_io_not_found() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err = FsError::from_io(Path::new("foo.py"), io);
    assert!(matches!(err, FsError::NotFound(ref p) if p == "foo.py"));
}

#[test]
fn test_fs_error_from_io_other() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
    let err = FsError::from_io(Path::new("foo.py"), io);
    assert!(matches!(err, FsError::IoError { .. }));
}

#[test]
fn test_wotmod_error_size() {
    let size = std::mem::size_of::<WotmodError>();
    assert!(size <= 24, "WotmodError is {size} bytes, expected <= 24");
}

#[test]
fn test_wotmod_result_size() {
    let size = std::mem::size_of::<WotmodResult<()>>();
    assert!(size <= 24, "WotmodResult<()> is {size} bytes, expected <= 24");
}
