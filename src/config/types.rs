// wotmod-rs: World of Tanks mod packager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! Config: GlobalConfig, PackageConfig, BuildConfig, FilesConfig
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::package::DEFAULT_SCRIPTS_ROOT;
use crate::package::compiler::{InterpreterSetting, TargetRuntime};

/// Global configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Package metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageConfig {
    pub name: String,
    pub version: Option<String>,
    pub author: String,
    /// Falls back to `author` when unset.
    pub author_id: Option<String>,
    pub description: String,
}

impl PackageConfig {
    #[must_use]
    pub fn effective_author_id(&self) -> &str {
        self.author_id.as_deref().unwrap_or(&self.author)
    }
}

/// Build options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Archive directory for compiled scripts.
    pub install_lib: String,
    /// Output directory, relative to the project directory.
    pub dist_dir: PathBuf,
    /// `""` for the runtime's default program, `"none"` to disable compilation.
    pub interpreter: String,
    pub target_runtime: TargetRuntime,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            install_lib: DEFAULT_SCRIPTS_ROOT.to_string(),
            dist_dir: PathBuf::from("dist"),
            interpreter: String::new(),
            target_runtime: TargetRuntime::default(),
        }
    }
}

impl BuildConfig {
    #[must_use]
    pub fn interpreter_setting(&self) -> InterpreterSetting {
        InterpreterSetting::parse(&self.interpreter)
    }
}

/// Inputs to package, relative to the project directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesConfig {
    /// Single script files installed at the scripts root.
    pub scripts: Vec<PathBuf>,
    /// Package directories, walked for `*.py` files.
    pub packages: Vec<PathBuf>,
    /// Data files placed directly under `res/mods/<identity>/`.
    pub data_files: Vec<PathBuf>,
    /// Data files grouped by subdirectory of `res/mods/<identity>/`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data_dirs: BTreeMap<String, Vec<PathBuf>>,
}

/// Normalizes a relative archive directory: `\` becomes `/`, outer slashes
/// are trimmed.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for absolute paths, drive prefixes
/// and `..` components.
pub fn normalize_archive_dir(section: &str, key: &str, raw: &str) -> Result<String, ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: format!("{message}, got '{raw}'"),
    };

    let unified = raw.trim().replace('\\', "/");
    if unified.starts_with('/') || unified.contains(':') {
        return Err(invalid("expected a relative archive path"));
    }

    let parts: Vec<&str> = unified
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect();
    if parts.contains(&"..") {
        return Err(invalid("'..' is not allowed"));
    }
    Ok(parts.join("/"))
}
