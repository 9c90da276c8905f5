// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Package identity and output path resolution.
//!
//! ```text
//! ("com.github.jhakonen", "foo") --> com.github.jhakonen.foo
//! ("", "foo")                    --> foo
//!
//! dist/ + identity + 00.01.02    --> dist/com.github.jhakonen.foo_00.01.02.wotmod
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use super::version::NormalizedVersion;
use crate::error::PackageError;

/// Archive file extension.
pub const WOTMOD_EXTENSION: &str = "wotmod";

/// Dotted `author_id.name` string identifying a package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageIdentity(String);

impl PackageIdentity {
    /// Combines an author id and a package name.
    ///
    /// No escaping is applied; callers supply archive-safe identifiers.
    ///
    /// # Errors
    ///
    /// Returns `PackageError::MissingName` if `name` is empty.
    pub fn resolve(author_id: &str, name: &str) -> Result<Self, PackageError> {
        if name.is_empty() {
            return Err(PackageError::MissingName);
        }
        if author_id.is_empty() {
            Ok(Self(name.to_string()))
        } else {
            Ok(Self(format!("{author_id}.{name}")))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Archive directory holding the package's data files.
    #[must_use]
    pub fn mod_data_root(&self) -> String {
        format!("res/mods/{}/", self.0)
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `<identity>_<MM>.<mm>.<pp>.wotmod`
#[must_use]
pub fn output_file_name(identity: &PackageIdentity, version: &NormalizedVersion) -> String {
    format!("{identity}_{version}.{WOTMOD_EXTENSION}")
}

/// Full path of the archive inside `dist_dir`. Pure; touches no files.
#[must_use]
pub fn output_file_path(
    dist_dir: &Path,
    identity: &PackageIdentity,
    version: &NormalizedVersion,
) -> PathBuf {
    dist_dir.join(output_file_name(identity, version))
}
